/// S3 operations used by the pipeline: download, upload, delete
use crate::{Result, S3Error};
use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;

/// Byte-blob storage addressed by bucket and key.
///
/// Handlers only talk to storage through this trait so tests can substitute
/// an in-memory store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Read the full content of an object
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes>;

    /// Write an object, replacing any existing content under the key
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<()>;

    /// Remove an object
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;
}

#[derive(Clone)]
pub struct S3Operations {
    client: Arc<Client>,
}

impl S3Operations {
    pub fn new(client: Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Operations {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(|se| se.is_no_such_key()) {
                    S3Error::NotFound {
                        bucket: bucket.to_string(),
                        key: key.to_string(),
                    }
                } else {
                    S3Error::AwsSdk(DisplayErrorContext(&e).to_string())
                }
            })?;

        let body = response
            .body
            .collect()
            .await
            .map_err(|e| S3Error::Body(e.to_string()))?
            .into_bytes();

        debug!(bucket = %bucket, key = %key, size = body.len(), "Downloaded from S3");
        Ok(body)
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<()> {
        let size = body.len();
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| S3Error::AwsSdk(DisplayErrorContext(&e).to_string()))?;

        debug!(bucket = %bucket, key = %key, size = size, "Uploaded to S3");
        Ok(())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| S3Error::AwsSdk(DisplayErrorContext(&e).to_string()))?;

        debug!(bucket = %bucket, key = %key, "Deleted from S3");
        Ok(())
    }
}
