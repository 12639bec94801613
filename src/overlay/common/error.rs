use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Screen capture unavailable: {0}")]
    CaptureUnavailable(String),

    #[error("Point ({x}, {y}) is outside the {width}x{height} frame")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    #[error("Invalid processing mode: {0}")]
    InvalidMode(u32),

    #[error("Invalid blindness type: {0}")]
    InvalidBlindnessType(u32),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Invalid frame buffer: expected {expected} bytes, got {actual}")]
    InvalidFrameBuffer { expected: usize, actual: usize },

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("Failed to export region: {0}")]
    ExportError(String),

    #[error("Failed to present frame: {0}")]
    PresentError(String),

    #[error("Transform backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("CUDA error: {0}")]
    CudaError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OverlayError>;
