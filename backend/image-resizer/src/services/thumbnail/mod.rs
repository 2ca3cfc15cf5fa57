//! Thumbnail generation service
//!
//! - Image processor for resizing and encoding
//! - Service coordinating download, upload and deletion of the original

pub mod processor;
pub mod service;

pub use processor::{ThumbnailConfig, ThumbnailProcessor, ThumbnailResult};
pub use service::ResizeService;
