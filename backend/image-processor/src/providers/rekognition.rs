//! AWS Rekognition integration for image labeling
use crate::{ProcessorError, Result};
use async_trait::async_trait;
use aws_sdk_rekognition::error::DisplayErrorContext;
use aws_sdk_rekognition::types::{Image, S3Object};
use aws_sdk_rekognition::Client;
use event_schema::StorageObjectRef;
use std::time::Instant;
use tracing::{debug, error, info};

/// A single label with confidence score
#[derive(Debug, Clone, PartialEq)]
pub struct LabelResult {
    pub name: String,
    /// Confidence in percent (0.0 - 100.0)
    pub confidence: f32,
}

impl LabelResult {
    pub fn new(name: impl Into<String>, confidence: f32) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// Vision service that labels a stored image
#[async_trait]
pub trait LabelDetector: Send + Sync {
    /// Detect labels for the referenced object
    ///
    /// # Arguments
    /// * `image` - Bucket and key of the stored image
    /// * `min_confidence` - Labels below this confidence (percent) are dropped
    ///
    /// # Returns
    /// Labels in the order returned by the service
    async fn detect_labels(
        &self,
        image: &StorageObjectRef,
        min_confidence: f32,
    ) -> Result<Vec<LabelResult>>;
}

/// Rekognition `DetectLabels` client
pub struct RekognitionLabelDetector {
    client: Client,
}

impl RekognitionLabelDetector {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LabelDetector for RekognitionLabelDetector {
    async fn detect_labels(
        &self,
        image: &StorageObjectRef,
        min_confidence: f32,
    ) -> Result<Vec<LabelResult>> {
        info!(image = %image, min_confidence, "Detecting labels with Rekognition");

        let request_image = Image::builder()
            .s3_object(
                S3Object::builder()
                    .bucket(&image.bucket)
                    .name(&image.key)
                    .build(),
            )
            .build();

        let start = Instant::now();

        let response = self
            .client
            .detect_labels()
            .image(request_image)
            .min_confidence(min_confidence)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                error!(image = %image, error = %message, "Rekognition request failed");
                ProcessorError::VisionApi(message)
            })?;

        let labels: Vec<LabelResult> = response
            .labels()
            .iter()
            .filter_map(|label| {
                label.name().map(|name| LabelResult {
                    name: name.to_string(),
                    confidence: label.confidence().unwrap_or_default(),
                })
            })
            .collect();

        debug!(
            labels = ?labels,
            model_version = ?response.label_model_version(),
            "Response from Rekognition"
        );
        info!(
            image = %image,
            labels = labels.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Label detection complete"
        );

        Ok(labels)
    }
}
