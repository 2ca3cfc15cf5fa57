//! SNS Publisher
//!
//! Publishes classification payloads to the labels topic.

use crate::{ProcessorError, Result};
use async_trait::async_trait;
use aws_sdk_sns::error::DisplayErrorContext;
use aws_sdk_sns::Client;
use tracing::{error, info};

/// Notification channel the classification is handed to
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Publish a string payload to a topic, returning the message id if the
    /// service assigned one
    async fn publish(&self, topic: &str, payload: &str) -> Result<Option<String>>;
}

pub struct SnsNotifier {
    client: Client,
}

impl SnsNotifier {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, topic: &str, payload: &str) -> Result<Option<String>> {
        match self
            .client
            .publish()
            .topic_arn(topic)
            .message(payload)
            .send()
            .await
        {
            Ok(output) => {
                let message_id = output.message_id().map(str::to_string);
                info!(
                    topic = %topic,
                    message_id = ?message_id,
                    "Published classification message"
                );
                Ok(message_id)
            }
            Err(err) => {
                let message = DisplayErrorContext(&err).to_string();
                error!(topic = %topic, error = %message, "Failed to publish classification message");
                Err(ProcessorError::Notification(message))
            }
        }
    }
}
