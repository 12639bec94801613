use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::overlay::capture::source::ClipboardExporter;
use crate::overlay::common::error::{OverlayError, Result};
use crate::overlay::config::TiffCompression;
use crate::overlay::frame::{Frame, ImageRect};

#[derive(Debug, Clone)]
enum ExportTarget {
    File(PathBuf),
    Clipboard(Vec<u8>),
}

/// Exports grabbed regions as RGBA8 TIFF images, either to a file or to an
/// in-memory clipboard buffer.
#[derive(Debug, Clone)]
pub struct TiffExporter {
    target: ExportTarget,
    compression: TiffCompression,
    exports: u64,
}

impl TiffExporter {
    pub fn to_file<P: AsRef<Path>>(path: P, compression: TiffCompression) -> Self {
        Self {
            target: ExportTarget::File(path.as_ref().to_path_buf()),
            compression,
            exports: 0,
        }
    }

    pub fn to_clipboard(compression: TiffCompression) -> Self {
        Self {
            target: ExportTarget::Clipboard(Vec::new()),
            compression,
            exports: 0,
        }
    }

    /// Encoded bytes of the last export, for the in-memory clipboard.
    pub fn clipboard(&self) -> Option<&[u8]> {
        match &self.target {
            ExportTarget::Clipboard(bytes) if !bytes.is_empty() => Some(bytes.as_slice()),
            _ => None,
        }
    }

    pub fn exports(&self) -> u64 {
        self.exports
    }
}

/// Encodes `frame` as a single-page RGBA8 TIFF.
pub fn encode_tiff(frame: &Frame, compression: TiffCompression) -> Result<Vec<u8>> {
    debug!("Encoding TIFF image: {}x{}", frame.width(), frame.height());

    let mut buffer = Vec::new();
    {
        let compression = match compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::Deflate => tiff::encoder::Compression::Deflate(
                tiff::encoder::compression::DeflateLevel::Fast,
            ),
        };

        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| OverlayError::EncodeError(e.to_string()))?
            .with_compression(compression);

        encoder
            .write_image::<tiff::encoder::colortype::RGBA8>(
                frame.width() as u32,
                frame.height() as u32,
                frame.data(),
            )
            .map_err(|e| OverlayError::EncodeError(e.to_string()))?;
    }

    debug!("TIFF encoding complete ({} bytes)", buffer.len());
    Ok(buffer)
}

impl ClipboardExporter for TiffExporter {
    #[instrument(skip(self, region), fields(width = region.width(), height = region.height()))]
    fn copy_region(&mut self, region: Frame, rect: ImageRect) -> Result<()> {
        let bytes = encode_tiff(&region, self.compression)?;

        match &mut self.target {
            ExportTarget::File(path) => {
                let mut file = std::fs::File::create(&*path).map_err(|e| {
                    OverlayError::ExportError(format!("{}: {}", path.display(), e))
                })?;
                file.write_all(&bytes)?;
                info!("Exported region {:?} to {}", rect, path.display());
            }
            ExportTarget::Clipboard(clipboard) => {
                *clipboard = bytes;
                info!("Copied region {:?} to the clipboard", rect);
            }
        }
        self.exports += 1;
        Ok(())
    }
}
