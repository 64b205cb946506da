//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! `ingredients_core::storage::CrustTable` trait. Backends are selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): in-process table, used by tests and local runs
//! - `dynamodb`: AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! When both are enabled the binary talks to DynamoDB.
//!
//! # Examples
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p ingredients --features dynamodb
//! ```

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p ingredients --features dynamodb"
);

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryCrustTable;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbCrustTable;
