//! Crust inventory access backed by a NoSQL table store.
//!
//! [`CrustData`] wraps a [`CrustTable`] backend, creating and seeding the
//! table on first use and decrementing stock with optimistic concurrency.
//!
//! [`CrustTable`]: ingredients_core::storage::CrustTable

pub mod config;
pub mod data;
pub mod output;
pub mod storage;

pub use config::Config;
pub use data::CrustData;
