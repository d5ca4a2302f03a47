mod common;

use common::TestSetup;
use http::StatusCode;

#[tokio::test]
async fn test_openapi_schema_available_in_development() {
    let setup = TestSetup::new().await;

    let response = setup
        .send_get_request("/openapi.json")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = setup
        .parse_response_body(response)
        .await
        .expect("Failed to parse response");

    // The generated document lists every documented route
    assert!(body["paths"]["/"].is_object());
    assert!(body["paths"]["/health"].is_object());
}

#[tokio::test]
async fn test_docs_ui_available_in_development() {
    let setup = TestSetup::new().await;

    let response = setup
        .send_get_request("/docs")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
}
