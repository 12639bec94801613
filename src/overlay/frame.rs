//! Frame buffers and pixel geometry

pub mod types;

pub use types::{Frame, ImageRect, PixelPoint, Rgba8, BYTES_PER_PIXEL};
