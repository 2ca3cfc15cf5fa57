/// S3 client configuration shared across functions
use aws_config::SdkConfig;
use aws_sdk_s3::Client;

#[derive(Debug, Clone, Default)]
pub struct S3Config {
    /// Custom endpoint (MinIO, LocalStack); unset means the regional endpoint
    pub endpoint: Option<String>,
    /// Whether to use path-style URLs (false = virtual-hosted-style)
    pub path_style: bool,
}

impl S3Config {
    /// Load S3 configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("S3_ENDPOINT").ok().filter(|v| !v.is_empty()),
            path_style: std::env::var("S3_PATH_STYLE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
        }
    }

    /// Build an S3 client on top of the shared AWS configuration
    pub fn build_client(&self, sdk_config: &SdkConfig) -> Client {
        let mut builder = aws_sdk_s3::config::Builder::from(sdk_config)
            .force_path_style(self.path_style);
        if let Some(endpoint) = &self.endpoint {
            builder = builder.endpoint_url(endpoint);
        }
        Client::from_conf(builder.build())
    }
}
