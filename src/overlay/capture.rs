//! Collaborators at the edge of the pipeline: screen capture, presentation
//! and region export

pub mod presenter;
pub mod source;
pub mod synthetic;
pub mod tiff_exporter;

pub use presenter::NullPresenter;
pub use source::{ClipboardExporter, Presenter, ScreenCapture, WindowId};
pub use synthetic::SyntheticCapture;
pub use tiff_exporter::{TiffExporter, encode_tiff};
