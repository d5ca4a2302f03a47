mod docs;
mod health;
mod root;

use aide::axum::{routing::get, ApiRouter};

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/", get(root::handler))
        .api_route("/health", get(health::handler))
}
