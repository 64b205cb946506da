//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of [`CrustTable`]
//! using `aws-sdk-dynamodb`. Rows live under a fixed `PK` with the crust id
//! as `SK`; a numeric `version` attribute plays the role of the ETag.
//!
//! [`CrustTable`]: ingredients_core::storage::CrustTable

mod client;
mod conversions;
mod error;
mod keys;
mod repository;
mod table;

pub use client::create_client;
pub use repository::DynamoDbCrustTable;
