pub mod docx;
pub mod error;
pub mod extract;
pub mod pdf;

pub use docx::DocxComposer;
pub use error::DocumentError;
pub use extract::{DocxExtractor, DOCX_MEDIA_TYPE};
pub use pdf::PdfComposer;
