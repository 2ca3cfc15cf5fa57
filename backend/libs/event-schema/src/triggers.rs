//! Trigger payloads delivered by the function runtime
//!
//! Only the fields the pipeline reads are modelled; everything else in the
//! notification documents is ignored on deserialization.

use crate::StorageObjectRef;
use serde::{Deserialize, Serialize};
use std::string::FromUtf8Error;

/// Object-created notification batch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct S3Event {
    #[serde(rename = "Records", default)]
    pub records: Vec<S3EventRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3EventRecord {
    #[serde(rename = "eventName", default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Object {
    /// Form-encoded as delivered by S3 (`+` for spaces, `%XX` escapes)
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl S3EventRecord {
    /// Object key with the notification encoding removed
    pub fn decoded_key(&self) -> Result<String, FromUtf8Error> {
        decode_object_key(&self.s3.object.key)
    }

    pub fn object_ref(&self) -> Result<StorageObjectRef, FromUtf8Error> {
        Ok(StorageObjectRef::new(
            self.s3.bucket.name.clone(),
            self.decoded_key()?,
        ))
    }
}

/// Reverse the form encoding S3 applies to keys in event notifications
pub fn decode_object_key(raw: &str) -> Result<String, FromUtf8Error> {
    let spaced = raw.replace('+', " ");
    Ok(urlencoding::decode(&spaced)?.into_owned())
}

/// Notification delivery batch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnsEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<SnsRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnsRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnsMessage {
    #[serde(rename = "MessageId", default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(rename = "TopicArn", default, skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,
    #[serde(rename = "Message")]
    pub message: String,
}
