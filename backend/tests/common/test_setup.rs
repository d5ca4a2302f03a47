use std::sync::Arc;

use aide::openapi::OpenApi;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use axum::{body::Body, http::Request, response::Response, Extension, Router};
use solopro_backend::{document_store::DocumentStore, routes, types::Environment};
use tower::ServiceExt;

/// Setup test environment variables with all the required configuration
pub fn setup_test_env() {
    // Load test environment variables
    dotenvy::from_path(".env.example").ok();

    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Base test setup wiring the router the same way the server does
///
/// The document store client is injected at construction time and pointed at
/// LocalStack, which is never contacted: no test requires a live database.
pub struct TestSetup {
    pub router: Router,
    pub environment: Environment,
    pub document_store: Arc<DocumentStore>,
}

impl TestSetup {
    pub async fn new() -> Self {
        setup_test_env();

        let environment = Environment::Development;

        // The SDK client performs no I/O at construction
        let dynamodb_client = Arc::new(DynamoDbClient::new(&environment.aws_config().await));
        let document_store = Arc::new(DocumentStore::new(
            dynamodb_client,
            environment.documents_table(),
        ));

        let mut openapi = OpenApi::default();

        let router = routes::handler()
            .finish_api(&mut openapi)
            .layer(Extension(openapi))
            .layer(Extension(environment.clone()))
            .layer(Extension(document_store.clone()));

        Self {
            router,
            environment,
            document_store,
        }
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn parse_response_body(
        &self,
        response: Response,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        use http_body_util::BodyExt;

        let body = response.into_body().collect().await?.to_bytes();
        let json = serde_json::from_slice(&body)?;
        Ok(json)
    }
}
