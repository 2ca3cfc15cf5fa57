//! Thumbnail service - coordinates download, resize, upload and cleanup
//!
//! This service handles the complete thumbnail workflow for one message:
//! 1. Download original image from the upload bucket
//! 2. Generate thumbnail
//! 3. Upload thumbnail to the storage bucket
//! 4. Delete the original upload
//!
//! Steps run strictly in order; a failure at any step returns immediately, so
//! the original is only deleted once the thumbnail is stored.

use super::processor::{ThumbnailConfig, ThumbnailProcessor};
use crate::config::Config;
use crate::error::Result;
use event_schema::{ClassificationMessage, THUMBNAIL_CONTENT_TYPE};
use s3_utils::ObjectStore;
use std::sync::Arc;
use tracing::{error, info};

/// Thumbnail service for generating and storing thumbnails
pub struct ResizeService {
    store: Arc<dyn ObjectStore>,
    processor: ThumbnailProcessor,
    upload_bucket: String,
    storage_bucket: String,
}

impl ResizeService {
    pub fn new(store: Arc<dyn ObjectStore>, config: &Config) -> Self {
        let processor = ThumbnailProcessor::new(ThumbnailConfig {
            max_dimension: config.thumb_max_dimension,
        });

        Self {
            store,
            processor,
            upload_bucket: config.upload_bucket.clone(),
            storage_bucket: config.storage_bucket.clone(),
        }
    }

    /// Produce the thumbnail for a classified upload
    ///
    /// # Returns
    /// The destination key of the stored thumbnail
    pub async fn process(&self, message: &ClassificationMessage) -> Result<String> {
        info!(
            source_key = %message.key,
            target_key = %message.thumb_name,
            upload_bucket = %self.upload_bucket,
            "Generating thumbnail"
        );

        let original = self
            .store
            .get_object(&self.upload_bucket, &message.key)
            .await?;

        let thumbnail = self.processor.generate(&original)?;

        info!(
            target_key = %message.thumb_name,
            width = thumbnail.width,
            height = thumbnail.height,
            size = thumbnail.data.len(),
            "Resized, storing thumbnail"
        );

        self.store
            .put_object(
                &self.storage_bucket,
                &message.thumb_name,
                thumbnail.data,
                THUMBNAIL_CONTENT_TYPE,
            )
            .await
            .map_err(|e| {
                error!(
                    target_key = %message.thumb_name,
                    error = %e,
                    "Failed to store thumbnail, keeping original"
                );
                e
            })?;

        info!(
            source_key = %message.key,
            upload_bucket = %self.upload_bucket,
            "Deleting source"
        );
        self.store
            .delete_object(&self.upload_bucket, &message.key)
            .await?;

        Ok(message.thumb_name.clone())
    }
}
