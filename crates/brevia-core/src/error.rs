use thiserror::Error;

pub type Result<T> = std::result::Result<T, BreviaError>;

#[derive(Error, Debug)]
pub enum BreviaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load configuration from {path}: {source}")]
    ConfigLoad {
        path: String,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("Invalid configuration: {issue}")]
    ConfigInvalid { issue: String, suggestion: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Unsupported file type: {media_type}")]
    UnsupportedFileType { media_type: String },

    #[error("Could not read document: {message}")]
    Parse { message: String },

    #[error("Summarization failed: {message}")]
    Network { message: String },

    #[error("Nothing to export: {message}")]
    InvalidState { message: String },

    #[error("Export failed: {message}")]
    Document { message: String },
}
