/// Error types for the image resizer
///
/// Every variant aborts the invocation; the runtime reports it as a failed
/// invocation and redelivery is left to the event source.
use s3_utils::S3Error;

/// Result type for image-resizer operations
pub type Result<T> = std::result::Result<T, ResizerError>;

#[derive(Debug, thiserror::Error)]
pub enum ResizerError {
    /// Required configuration missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Object storage operation failed
    #[error("Storage error: {0}")]
    Storage(#[from] S3Error),

    /// Image bytes could not be decoded or encoded
    #[error("Image error: {0}")]
    Image(String),

    /// Delivery payload is not a classification message
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl From<envy::Error> for ResizerError {
    fn from(err: envy::Error) -> Self {
        ResizerError::Config(err.to_string())
    }
}
