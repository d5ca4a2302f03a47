//! Document store integration using Dynamo DB
//!
//! The store backs the product database. The documented API surface never
//! reads or writes it, so the client covers construction and a startup
//! health check; tests inject the client without ever sending a request.

mod error;

use std::sync::Arc;

use aws_sdk_dynamodb::{types::TableStatus, Client as DynamoDbClient};

pub use error::{DocumentStoreError, DocumentStoreResult};

/// Document store client for Dynamo DB operations
pub struct DocumentStore {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl DocumentStore {
    /// Creates a new document store client
    ///
    /// Construction performs no I/O, so the application can be built without
    /// a live database connection.
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured Dynamo DB client
    /// * `table_name` - Dynamo DB table name backing the store
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    /// Verifies that the backing table exists and is active
    ///
    /// Called once at startup in staging and production.
    ///
    /// # Errors
    ///
    /// Returns `DocumentStoreError::DynamoDbDescribeError` if the
    /// `DescribeTable` call fails, or `DocumentStoreError::TableNotActive` if
    /// the table exists but is not in `ACTIVE` status
    pub async fn health_check(&self) -> DocumentStoreResult<()> {
        let description = self
            .dynamodb_client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await?;

        let status = description.table().and_then(|table| table.table_status());

        if matches!(status, Some(TableStatus::Active)) {
            Ok(())
        } else {
            Err(DocumentStoreError::TableNotActive(self.table_name.clone()))
        }
    }
}
