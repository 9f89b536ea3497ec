use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocumentError>;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Unsupported file type: {media_type}, expected a DOCX document")]
    UnsupportedFileType { media_type: String },

    #[error("Could not read document: {message}")]
    Parse { message: String },

    #[error("Nothing to export: {message}")]
    InvalidState { message: String },

    #[error("Failed to compose artifact: {message}")]
    Compose { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DocumentError> for brevia_core::BreviaError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::UnsupportedFileType { media_type } => {
                brevia_core::BreviaError::UnsupportedFileType { media_type }
            }
            DocumentError::Parse { message } => brevia_core::BreviaError::Parse { message },
            DocumentError::InvalidState { message } => {
                brevia_core::BreviaError::InvalidState { message }
            }
            DocumentError::Compose { message } => brevia_core::BreviaError::Document { message },
            DocumentError::Io(source) => brevia_core::BreviaError::Io(source),
        }
    }
}
