//! Environment configuration for different deployment stages

use std::env;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion};
use tracing::Level;

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Returns the Dynamo DB table name backing the document store
    ///
    /// # Panics
    ///
    /// Panics if the `DYNAMODB_TABLE_NAME` environment variable is not set
    /// outside of development
    #[must_use]
    pub fn documents_table(&self) -> String {
        match self {
            Self::Production | Self::Staging => env::var("DYNAMODB_TABLE_NAME")
                .expect("DYNAMODB_TABLE_NAME environment variable is not set"),
            Self::Development => env::var("DYNAMODB_TABLE_NAME")
                .unwrap_or_else(|_| "solopro-documents".to_string()),
        }
    }

    /// Whether to show API docs
    #[must_use]
    pub const fn show_api_docs(&self) -> bool {
        matches!(self, Self::Development | Self::Staging)
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub const fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            // Regular AWS endpoints for production and staging
            Self::Production | Self::Staging => None,
            // LocalStack endpoint for development
            Self::Development => Some("http://localhost:4566"),
        }
    }

    /// AWS configuration with retry and timeout settings
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(3)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.build()
    }

    /// Log level for the environment, overridable via `TRACING_LEVEL`
    #[must_use]
    pub fn tracing_level(&self) -> Level {
        env::var("TRACING_LEVEL")
            .ok()
            .and_then(|val| val.parse::<Level>().ok())
            .unwrap_or(match self {
                Self::Production | Self::Staging => Level::INFO,
                Self::Development => Level::DEBUG,
            })
    }
}
