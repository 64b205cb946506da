//! In-memory storage backend.
//!
//! Keeps crust rows in a `BTreeMap` wrapped in `Arc<RwLock<_>>` and issues
//! version tags from a counter, so optimistic concurrency behaves like the
//! remote store. Data is lost when the table is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use ingredients::storage::inmemory::InMemoryCrustTable;
//!
//! let table = InMemoryCrustTable::new();
//! let data = CrustData::new(table);
//! ```

mod repository;

pub use repository::InMemoryCrustTable;
