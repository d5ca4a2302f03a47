//! Error types for document store operations

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use thiserror::Error;

/// Result type for document store operations
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

/// Errors that can occur during document store operations
#[derive(Error, Debug)]
pub enum DocumentStoreError {
    /// Failed to describe the backing table in Dynamo DB
    #[error("Failed to describe table in DynamoDB: {0}")]
    DynamoDbDescribeError(#[from] SdkError<DescribeTableError>),

    /// The backing table exists but is not ready to serve requests
    #[error("DynamoDB table is not active: {0}")]
    TableNotActive(String),
}
