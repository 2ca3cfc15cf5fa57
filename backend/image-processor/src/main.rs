//! Image Processor - function entry point
//!
//! Receives S3 object-created events, labels each upload with Rekognition and
//! publishes the classification to SNS for the image resizer.
//!
//! Environment variables:
//! - TOPIC_ARN: SNS topic for classification messages (required)
//! - MIN_CONFIDENCE: Minimum label confidence in percent (default: 70)
//! - THUMBNAIL_PREFIX: Keys under this prefix are skipped (default: "thumb/")

use anyhow::Result;
use aws_config::BehaviorVersion;
use event_schema::{ClassificationMessage, S3Event};
use image_processor::{Config, ImageClassifier, RekognitionLabelDetector, SnsNotifier};
use lambda_runtime::{run, service_fn, LambdaEvent};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn function_handler(
    event: LambdaEvent<S3Event>,
    classifier: &ImageClassifier,
) -> std::result::Result<Vec<ClassificationMessage>, lambda_runtime::Error> {
    let (payload, context) = event.into_parts();
    info!(
        request_id = %context.request_id,
        records = payload.records.len(),
        "Invocation started"
    );

    classifier.handle_event(&payload).await.map_err(|e| {
        error!(request_id = %context.request_id, error = %e, "Invocation failed");
        e.into()
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "image_processor=debug,aws_config=warn,info".into()
        }))
        .with(tracing_subscriber::fmt::layer().json().without_time())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;
    config.validate()?;

    info!(
        topic = %config.topic_arn,
        min_confidence = config.min_confidence,
        thumbnail_prefix = %config.thumbnail_prefix,
        "Configuration loaded"
    );

    // Service clients are built once per process and injected into the handler
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let detector = Arc::new(RekognitionLabelDetector::new(
        aws_sdk_rekognition::Client::new(&sdk_config),
    ));
    let notifier = Arc::new(SnsNotifier::new(aws_sdk_sns::Client::new(&sdk_config)));
    let classifier = ImageClassifier::new(config, detector, notifier);

    info!("Image processor ready");

    run(service_fn(|event| function_handler(event, &classifier)))
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
