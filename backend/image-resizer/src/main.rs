//! Image Resizer - function entry point
//!
//! Receives classification messages over SNS, stores a PNG thumbnail in the
//! storage bucket and deletes the original upload.
//!
//! Environment variables:
//! - UPLOAD_BUCKET: Bucket holding original uploads (required)
//! - STORAGE_BUCKET: Bucket receiving thumbnails (required)
//! - THUMB_MAX_DIMENSION: Max thumbnail dimension (default: 200)
//! - S3_ENDPOINT / S3_PATH_STYLE: Optional S3-compatible endpoint override

use anyhow::Result;
use aws_config::BehaviorVersion;
use event_schema::SnsEvent;
use image_resizer::{handle_delivery, Config, ResizeService};
use lambda_runtime::{run, service_fn, LambdaEvent};
use s3_utils::{S3Config, S3Operations};
use std::sync::Arc;
use tracing::{error, info};

async fn function_handler(
    event: LambdaEvent<SnsEvent>,
    service: &ResizeService,
) -> std::result::Result<String, lambda_runtime::Error> {
    let (payload, context) = event.into_parts();
    info!(request_id = %context.request_id, "Invocation started");

    handle_delivery(service, &payload).await.map_err(|e| {
        error!(request_id = %context.request_id, error = %e, "Invocation failed");
        e.into()
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .json()
        .without_time()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("image_resizer=info".parse().expect("valid directive"))
                .add_directive("s3_utils=info".parse().expect("valid directive")),
        )
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("{e}")
    })?;
    config.validate()?;

    info!(
        upload_bucket = %config.upload_bucket,
        storage_bucket = %config.storage_bucket,
        max_dimension = config.thumb_max_dimension,
        "Configuration loaded"
    );

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let store = Arc::new(S3Operations::new(
        S3Config::from_env().build_client(&sdk_config),
    ));
    let service = ResizeService::new(store, &config);

    info!("Image resizer ready");

    run(service_fn(|event| function_handler(event, &service)))
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
