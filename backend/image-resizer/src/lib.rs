//! Image Resizer - turns classified uploads into PNG thumbnails
//!
//! Consumes classification messages delivered over SNS, stores a bounded PNG
//! thumbnail in the storage bucket and removes the original upload.

pub mod config;
pub mod error;
pub mod handler;
pub mod services;

pub use config::Config;
pub use error::{ResizerError, Result};
pub use handler::{handle_delivery, parse_delivery};
pub use services::{ResizeService, ThumbnailConfig, ThumbnailProcessor, ThumbnailResult};
