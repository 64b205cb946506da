//! DynamoDB repository implementation.
//!
//! Implements [`CrustTable`] from `ingredients_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use chrono::Utc;

use ingredients_core::crust::Crust;
use ingredients_core::storage::{CrustTable, ETag, Result, TableCreation, Versioned};

use super::conversions::{crust_to_item, item_to_crust, parse_version, VERSION_ATTR};
use super::error::{map_get_item_error, map_insert_error, map_query_error, map_replace_error};
use super::{client, keys, table};
use crate::config::Config;

const ENTITY_TYPE: &str = "Crust";

/// DynamoDB-backed crust table.
pub struct DynamoDbCrustTable {
    client: Client,
    table_name: String,
}

impl DynamoDbCrustTable {
    /// Creates a new table handle with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a table handle from application configuration.
    ///
    /// Uses the AWS SDK default credential chain.
    pub async fn from_config(config: &Config) -> Self {
        let client = client::create_client(config).await;
        Self::new(client, config.table_name.clone())
    }
}

#[async_trait]
impl CrustTable for DynamoDbCrustTable {
    async fn create_if_not_exists(&self) -> Result<TableCreation> {
        table::create_if_not_exists(&self.client, &self.table_name).await
    }

    async fn add_crust(&self, crust: &Crust) -> Result<()> {
        let item = crust_to_item(crust, 1, Utc::now());

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(PK)")
            .send()
            .await
            .map_err(|e| map_insert_error(e, ENTITY_TYPE, crust.id.clone()))?;

        Ok(())
    }

    async fn get_crust(&self, id: &str) -> Result<Option<Versioned<Crust>>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(keys::PK, AttributeValue::S(keys::crust_pk()))
            .key(keys::SK, AttributeValue::S(keys::crust_sk(id)))
            .consistent_read(true)
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_crust(&item)?)),
            None => Ok(None),
        }
    }

    async fn query_crusts(&self) -> Result<Vec<Versioned<Crust>>> {
        let mut crusts = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("PK = :pk")
                .expression_attribute_values(":pk", AttributeValue::S(keys::crust_pk()))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_query_error)?;

            for item in result.items.unwrap_or_default() {
                crusts.push(item_to_crust(&item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(crusts)
    }

    async fn replace_crust(&self, crust: &Crust, etag: &ETag) -> Result<()> {
        let expected = parse_version(etag)?;
        let item = crust_to_item(crust, expected + 1, Utc::now());

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("#version = :expected")
            .expression_attribute_names("#version", VERSION_ATTR)
            .expression_attribute_values(":expected", AttributeValue::N(expected.to_string()))
            .send()
            .await
            .map_err(|e| map_replace_error(e, ENTITY_TYPE, crust.id.clone()))?;

        Ok(())
    }
}
