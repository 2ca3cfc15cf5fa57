//! Storage event handler
//!
//! Labels every newly uploaded object in an S3 event batch and publishes one
//! classification message per object.

use crate::config::Config;
use crate::providers::LabelDetector;
use crate::services::{classify_labels, thumbnail_key};
use crate::sns::Notifier;
use crate::{ProcessorError, Result};
use event_schema::{ClassificationMessage, S3Event, StorageObjectRef};
use std::sync::Arc;
use tracing::{debug, info};

pub struct ImageClassifier {
    config: Config,
    detector: Arc<dyn LabelDetector>,
    notifier: Arc<dyn Notifier>,
}

impl ImageClassifier {
    pub fn new(
        config: Config,
        detector: Arc<dyn LabelDetector>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            detector,
            notifier,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process one storage event batch
    ///
    /// Records under the thumbnail prefix are skipped. The first failing
    /// record aborts the rest of the batch; messages already published stay
    /// published.
    ///
    /// # Returns
    /// The messages published, in record order
    pub async fn handle_event(&self, event: &S3Event) -> Result<Vec<ClassificationMessage>> {
        self.config.validate()?;

        debug!(
            topic = %self.config.topic_arn,
            event = ?event,
            "Received storage event"
        );

        let mut images = Vec::with_capacity(event.records.len());

        for record in &event.records {
            let object = record.object_ref().map_err(|e| {
                ProcessorError::MalformedInput(format!(
                    "Undecodable object key {}: {e}",
                    record.s3.object.key
                ))
            })?;

            if object.key.starts_with(&self.config.thumbnail_prefix) {
                debug!(image = %object, "Skipping generated thumbnail");
                continue;
            }

            images.push(self.process_object(&object).await?);
        }

        info!(
            records = event.records.len(),
            published = images.len(),
            "Storage event processed"
        );

        Ok(images)
    }

    /// Label a single object and publish its classification
    async fn process_object(&self, object: &StorageObjectRef) -> Result<ClassificationMessage> {
        let thumb_name = thumbnail_key(&object.key)?;

        let labels = self
            .detector
            .detect_labels(object, self.config.min_confidence)
            .await?;

        let names: Vec<&str> = labels.iter().map(|l| l.name.as_str()).collect();
        info!(key = %object.key, labels = ?names, "Image labelled");

        let classification = classify_labels(&labels);
        let message = ClassificationMessage {
            key: object.key.clone(),
            thumb_name,
            is_beer: classification.is_beer,
            style: classification.style,
        };

        let payload = message.to_json()?;
        debug!(payload = %payload, "Publishing classification");

        self.notifier
            .publish(&self.config.topic_arn, &payload)
            .await?;

        info!(
            key = %message.key,
            thumb_name = %message.thumb_name,
            is_beer = message.is_beer,
            style = %message.style,
            "Classification published"
        );

        Ok(message)
    }
}
