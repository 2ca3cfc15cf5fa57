/// Configuration management for the image resizer
///
/// Loads configuration from environment variables; bucket names are required.
use crate::error::{ResizerError, Result};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Bucket holding original uploads (read and deleted)
    pub upload_bucket: String,
    /// Bucket receiving thumbnails
    pub storage_bucket: String,
    /// Maximum thumbnail width and height in pixels
    #[serde(default = "default_max_dimension")]
    pub thumb_max_dimension: u32,
}

fn default_max_dimension() -> u32 {
    200
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

    pub fn validate(&self) -> Result<()> {
        if self.upload_bucket.trim().is_empty() {
            return Err(ResizerError::Config("UPLOAD_BUCKET must be set".into()));
        }
        if self.storage_bucket.trim().is_empty() {
            return Err(ResizerError::Config("STORAGE_BUCKET must be set".into()));
        }
        if self.thumb_max_dimension == 0 {
            return Err(ResizerError::Config(
                "THUMB_MAX_DIMENSION must be positive".into(),
            ));
        }
        Ok(())
    }
}
