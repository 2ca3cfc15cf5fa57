//! Image Processor - labels uploaded images and publishes classification messages
//!
//! This function provides:
//! - Rekognition label detection for newly uploaded objects
//! - Beer/style classification from the detected labels
//! - SNS publication of the classification for the resizer

pub mod config;
pub mod handler;
pub mod providers;
pub mod services;
pub mod sns;

pub use config::Config;
pub use handler::ImageClassifier;
pub use providers::{LabelDetector, LabelResult, RekognitionLabelDetector};
pub use services::{classify_labels, thumbnail_key, Classification, BEER_LABEL, KNOWN_STYLES};
pub use sns::{Notifier, SnsNotifier};

/// Result type for image-processor operations
pub type Result<T> = std::result::Result<T, ProcessorError>;

/// Image processor error types
#[derive(Debug, thiserror::Error)]
pub enum ProcessorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Vision API error: {0}")]
    VisionApi(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<envy::Error> for ProcessorError {
    fn from(err: envy::Error) -> Self {
        ProcessorError::Config(err.to_string())
    }
}
