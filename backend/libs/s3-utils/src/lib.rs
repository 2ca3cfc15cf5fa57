/// Shared S3 utilities for the image pipeline functions
///
/// Provides the `ObjectStore` seam the handlers depend on and its AWS S3
/// implementation, so handlers can be exercised against in-memory stores.

pub mod config;
pub mod operations;

pub use config::S3Config;
pub use operations::{ObjectStore, S3Operations};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum S3Error {
    #[error("Object not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },

    #[error("Failed to read object body: {0}")]
    Body(String),

    #[error("AWS SDK error: {0}")]
    AwsSdk(String),
}

pub type Result<T> = std::result::Result<T, S3Error>;
