//! Table provisioning: create-if-not-exists and activation wait.

use std::time::Duration;

use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType, TableStatus,
};
use aws_sdk_dynamodb::Client;
use ingredients_core::storage::{RepositoryError, Result, TableCreation};

use super::error::{map_create_table_error, map_describe_table_error};
use super::keys;

const ACTIVATION_ATTEMPTS: u32 = 60;
const ACTIVATION_DELAY: Duration = Duration::from_secs(2);

/// Creates the crust table unless it already exists, then waits for it to
/// become active.
///
/// Another process may have started creating the table, so the wait runs in
/// both cases.
pub async fn create_if_not_exists(client: &Client, table_name: &str) -> Result<TableCreation> {
    let request = client
        .create_table()
        .table_name(table_name)
        .key_schema(key_element(keys::PK, KeyType::Hash)?)
        .key_schema(key_element(keys::SK, KeyType::Range)?)
        .attribute_definitions(string_attribute(keys::PK)?)
        .attribute_definitions(string_attribute(keys::SK)?)
        .billing_mode(BillingMode::PayPerRequest);

    let creation = match request.send().await {
        Ok(_) => TableCreation::Created,
        Err(err) => match err.into_service_error() {
            CreateTableError::ResourceInUseException(_) => TableCreation::AlreadyExists,
            err => return Err(map_create_table_error(err)),
        },
    };

    wait_for_table_active(client, table_name).await?;
    Ok(creation)
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    for _ in 0..ACTIVATION_ATTEMPTS {
        match client.describe_table().table_name(table_name).send().await {
            Ok(response) => {
                let status = response.table().and_then(|t| t.table_status());
                if status == Some(&TableStatus::Active) {
                    return Ok(());
                }
            }
            Err(err) => match map_describe_table_error(err) {
                // A table created a moment ago may not be visible yet.
                RepositoryError::QueryFailed(_) => {}
                err => return Err(err),
            },
        }
        tokio::time::sleep(ACTIVATION_DELAY).await;
    }

    Err(RepositoryError::ConnectionFailed(format!(
        "Timeout waiting for table '{}' to become active",
        table_name
    )))
}

fn key_element(name: &str, key_type: KeyType) -> Result<KeySchemaElement> {
    KeySchemaElement::builder()
        .attribute_name(name)
        .key_type(key_type)
        .build()
        .map_err(|e| RepositoryError::InvalidData(e.to_string()))
}

fn string_attribute(name: &str) -> Result<AttributeDefinition> {
    AttributeDefinition::builder()
        .attribute_name(name)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(|e| RepositoryError::InvalidData(e.to_string()))
}
