//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `ingredients_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use ingredients_core::storage::RepositoryError;

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        QueryError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Query failed: {:?}", err)),
    }
}

/// Map a conditional insert (`attribute_not_exists`) error to RepositoryError.
pub fn map_insert_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    let id = id.into();
    map_put_item_error(err, RepositoryError::AlreadyExists { entity_type, id })
}

/// Map a version-conditioned replace error to RepositoryError.
pub fn map_replace_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    let id = id.into();
    map_put_item_error(err, RepositoryError::Conflict { entity_type, id })
}

fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    condition_failed: RepositoryError,
) -> RepositoryError {
    match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(_) => condition_failed,
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a CreateTable service error to RepositoryError.
///
/// `ResourceInUseException` is not an error for create-if-not-exists and is
/// handled by the caller before reaching this function.
pub fn map_create_table_error(err: CreateTableError) -> RepositoryError {
    match err {
        CreateTableError::LimitExceededException(_) => {
            RepositoryError::ConnectionFailed("Table limit exceeded for account".to_string())
        }
        CreateTableError::InternalServerError(_) => {
            RepositoryError::ConnectionFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::ConnectionFailed(format!("CreateTable failed: {:?}", err)),
    }
}

/// Map a DescribeTable SDK error to RepositoryError.
pub fn map_describe_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DescribeTableError, R>,
) -> RepositoryError {
    match err.into_service_error() {
        DescribeTableError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        DescribeTableError::InternalServerError(_) => {
            RepositoryError::ConnectionFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::ConnectionFailed(format!("DescribeTable failed: {:?}", err)),
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::types::error::{
        ConditionalCheckFailedException, ResourceNotFoundException,
    };

    use super::*;

    fn put_condition_failed() -> SdkError<PutItemError, ()> {
        SdkError::service_error(
            PutItemError::ConditionalCheckFailedException(
                ConditionalCheckFailedException::builder().build(),
            ),
            (),
        )
    }

    #[test]
    fn test_insert_condition_failure_is_already_exists() {
        let err = map_insert_error(put_condition_failed(), "Crust", "thin9");
        assert_eq!(
            err,
            RepositoryError::AlreadyExists {
                entity_type: "Crust",
                id: "thin9".to_string(),
            }
        );
    }

    #[test]
    fn test_replace_condition_failure_is_conflict() {
        let err = map_replace_error(put_condition_failed(), "Crust", "thin9");
        assert!(err.is_conflict());
    }

    #[test]
    fn test_missing_table_on_get() {
        let err = map_get_item_error(SdkError::<GetItemError, ()>::service_error(
            GetItemError::ResourceNotFoundException(ResourceNotFoundException::builder().build()),
            (),
        ));
        assert_eq!(
            err,
            RepositoryError::QueryFailed("Table not found".to_string())
        );
    }
}
