use aide::axum::IntoApiResponse;
use axum::Json;
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Serialize, JsonSchema)]
pub struct GreetingResponse {
    /// Static greeting, returned unchanged to every caller
    message: String,
}

/// Root endpoint
///
/// Returns a static greeting. The planner's business logic runs client-side,
/// so this is the only product route the backend exposes today.
pub async fn handler() -> impl IntoApiResponse {
    Json(GreetingResponse {
        message: "Hello World".to_string(),
    })
}
