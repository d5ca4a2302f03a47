use std::sync::Arc;

use aws_sdk_dynamodb::Client as DynamoDbClient;

use solopro_backend::{document_store::DocumentStore, server, types::Environment};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // Configure logging format based on environment
    // Use JSON format for staging/production, regular format for development
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.tracing_level().to_string()));
    match environment {
        Environment::Production | Environment::Staging => {
            fmt().json().with_env_filter(env_filter).init();
        }
        Environment::Development => {
            fmt().with_env_filter(env_filter).init();
        }
    }

    let dynamodb_client = Arc::new(DynamoDbClient::new(&environment.aws_config().await));
    let document_store = Arc::new(DocumentStore::new(
        dynamodb_client,
        environment.documents_table(),
    ));

    // Fail fast when the backing table is unreachable; skipped in development
    // where tests and local runs construct the app without a live database
    if matches!(environment, Environment::Production | Environment::Staging) {
        document_store.health_check().await?;
    }

    server::start(environment, document_store).await
}
