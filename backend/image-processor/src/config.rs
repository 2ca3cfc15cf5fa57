//! Configuration for the image processor
use crate::{ProcessorError, Result};
use serde::Deserialize;

/// Main configuration struct, loaded from environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Topic the classification messages are published to (required)
    pub topic_arn: String,

    /// Minimum label confidence, in percent, requested from the vision service
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,

    /// Keys under this prefix are generated thumbnails and never reprocessed
    #[serde(default = "default_thumbnail_prefix")]
    pub thumbnail_prefix: String,
}

fn default_min_confidence() -> f32 {
    70.0
}

fn default_thumbnail_prefix() -> String {
    format!("{}/", event_schema::THUMBNAIL_DIR)
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(envy::from_env()?)
    }

    /// Load configuration from explicit key/value pairs (upper-case names)
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Reject configurations that would only fail later at publish time
    pub fn validate(&self) -> Result<()> {
        if self.topic_arn.trim().is_empty() {
            return Err(ProcessorError::Config("TOPIC_ARN must be set".to_string()));
        }
        if self.thumbnail_prefix.is_empty() {
            return Err(ProcessorError::Config(
                "THUMBNAIL_PREFIX must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
