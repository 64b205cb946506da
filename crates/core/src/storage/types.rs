use std::fmt;

use chrono::{DateTime, Utc};

/// Opaque version tag used for optimistic concurrency on row updates.
///
/// Tags are only ever compared for equality; their content is owned by the
/// backend that issued them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ETag(String);

impl ETag {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ETag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored row together with the metadata the store keeps for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Versioned<T> {
    pub value: T,
    /// Tag to pass back when replacing this row.
    pub etag: ETag,
    /// Time of the last write.
    pub updated_at: DateTime<Utc>,
}

impl<T> Versioned<T> {
    pub fn new(value: T, etag: ETag, updated_at: DateTime<Utc>) -> Self {
        Self {
            value,
            etag,
            updated_at,
        }
    }

    /// Drops the store metadata.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Result of a create-if-not-exists call on the backing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableCreation {
    /// This call created the table; it is empty.
    Created,
    /// The table was already there.
    AlreadyExists,
}

impl TableCreation {
    pub fn was_created(self) -> bool {
        matches!(self, TableCreation::Created)
    }
}
