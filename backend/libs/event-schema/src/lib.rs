/// Event schemas shared by the image pipeline functions
///
/// Covers the payloads that cross a service boundary: the trigger events
/// delivered by the hosting runtime (S3 object-created, SNS delivery) and the
/// classification message the processor publishes for the resizer.
use serde::{Deserialize, Serialize};
use std::fmt;

// Lambda trigger payloads
pub mod triggers;

pub use triggers::{S3Bucket, S3Entity, S3Event, S3EventRecord, S3Object, SnsEvent, SnsMessage, SnsRecord};

/// Key directory that holds generated thumbnails
pub const THUMBNAIL_DIR: &str = "thumb";

/// Extension appended to every thumbnail key
pub const THUMBNAIL_EXTENSION: &str = "png";

/// Content type of every stored thumbnail
pub const THUMBNAIL_CONTENT_TYPE: &str = "image/png";

/// Identifies a blob in object storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageObjectRef {
    pub bucket: String,
    pub key: String,
}

impl StorageObjectRef {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for StorageObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

// ============================================================================
// IMAGE PROCESSOR EVENTS
// ============================================================================

/// Published by the image processor once an upload has been labelled.
///
/// Wire format (field names are fixed, consumers depend on them):
/// `{"key": "...", "thumbName": "...", "isBeer": true, "style": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationMessage {
    /// Key of the original upload
    pub key: String,
    /// Destination key of the thumbnail
    pub thumb_name: String,
    /// Resizer only needs the two keys, older producers may omit the rest
    #[serde(default)]
    pub is_beer: bool,
    /// Empty when no known style was detected
    #[serde(default)]
    pub style: String,
}

impl ClassificationMessage {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_message_wire_format() {
        let msg = ClassificationMessage {
            key: "pics/mug.jpeg".to_string(),
            thumb_name: "thumb/pics/mug.png".to_string(),
            is_beer: true,
            style: String::new(),
        };

        assert_eq!(
            msg.to_json().unwrap(),
            r#"{"key":"pics/mug.jpeg","thumbName":"thumb/pics/mug.png","isBeer":true,"style":""}"#
        );
    }

    #[test]
    fn test_classification_message_escapes_quotes() {
        let msg = ClassificationMessage {
            key: r#"we"ird.jpg"#.to_string(),
            thumb_name: r#"thumb/we"ird.png"#.to_string(),
            is_beer: false,
            style: String::new(),
        };

        let json = msg.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["key"], r#"we"ird.jpg"#);
    }

    #[test]
    fn test_classification_message_tolerates_missing_flags() {
        let msg =
            ClassificationMessage::from_json(r#"{"key":"a.jpg","thumbName":"thumb/a.png"}"#)
                .unwrap();
        assert_eq!(msg.key, "a.jpg");
        assert!(!msg.is_beer);
        assert!(msg.style.is_empty());
    }

    #[test]
    fn test_classification_message_requires_keys() {
        assert!(ClassificationMessage::from_json(r#"{"key":"a.jpg"}"#).is_err());
        assert!(ClassificationMessage::from_json("not json").is_err());
    }

    #[test]
    fn test_storage_object_ref_display() {
        let obj = StorageObjectRef::new("uploads", "pics/mug.jpeg");
        assert_eq!(obj.to_string(), "s3://uploads/pics/mug.jpeg");
    }
}
