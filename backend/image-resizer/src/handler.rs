//! SNS delivery handler
//!
//! Extracts the classification message from a delivery and hands it to the
//! resize service.

use crate::error::{ResizerError, Result};
use crate::services::ResizeService;
use event_schema::{ClassificationMessage, SnsEvent};
use tracing::{debug, warn};

/// Parse the classification message carried by the first delivery record
pub fn parse_delivery(event: &SnsEvent) -> Result<ClassificationMessage> {
    let record = event.records.first().ok_or_else(|| {
        ResizerError::MalformedInput("Delivery contains no records".to_string())
    })?;

    if event.records.len() > 1 {
        warn!(
            records = event.records.len(),
            "Delivery has more than one record, only the first is processed"
        );
    }

    debug!(
        message_id = ?record.sns.message_id,
        message = %record.sns.message,
        "Received classification delivery"
    );

    ClassificationMessage::from_json(&record.sns.message).map_err(|e| {
        ResizerError::MalformedInput(format!("Invalid classification message: {e}"))
    })
}

/// Handle one delivery end to end, returning the thumbnail key
pub async fn handle_delivery(service: &ResizeService, event: &SnsEvent) -> Result<String> {
    let message = parse_delivery(event)?;
    service.process(&message).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn delivery(messages: &[&str]) -> SnsEvent {
        let records: Vec<_> = messages
            .iter()
            .map(|m| json!({ "Sns": { "MessageId": "id-1", "Message": m } }))
            .collect();
        serde_json::from_value(json!({ "Records": records })).unwrap()
    }

    #[test]
    fn test_parse_delivery() {
        let event = delivery(&[
            r#"{"key":"pics/mug.jpeg","thumbName":"thumb/pics/mug.png","isBeer":true,"style":""}"#,
        ]);
        let message = parse_delivery(&event).unwrap();
        assert_eq!(message.key, "pics/mug.jpeg");
        assert_eq!(message.thumb_name, "thumb/pics/mug.png");
        assert!(message.is_beer);
    }

    #[test]
    fn test_parse_delivery_reads_first_record_only() {
        let event = delivery(&[
            r#"{"key":"a.jpg","thumbName":"thumb/a.png"}"#,
            r#"{"key":"b.jpg","thumbName":"thumb/b.png"}"#,
        ]);
        assert_eq!(parse_delivery(&event).unwrap().key, "a.jpg");
    }

    #[test]
    fn test_parse_delivery_without_records() {
        let err = parse_delivery(&SnsEvent::default()).unwrap_err();
        assert!(matches!(err, ResizerError::MalformedInput(_)));
    }

    #[test]
    fn test_parse_delivery_invalid_payload() {
        for payload in ["not json", r#"{"key":"a.jpg"}"#, r#"{"thumbName":"thumb/a.png"}"#] {
            let err = parse_delivery(&delivery(&[payload])).unwrap_err();
            assert!(matches!(err, ResizerError::MalformedInput(_)), "{payload}");
        }
    }
}
