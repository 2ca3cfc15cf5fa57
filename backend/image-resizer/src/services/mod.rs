/// Business logic layer for the image resizer
pub mod thumbnail;

pub use thumbnail::{ResizeService, ThumbnailConfig, ThumbnailProcessor, ThumbnailResult};
