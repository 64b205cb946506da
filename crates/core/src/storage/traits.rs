use async_trait::async_trait;

use crate::crust::Crust;

use super::{ETag, Result, TableCreation, Versioned};

/// Row-level access to the crust table.
///
/// All rows share the fixed partition key, so operations only take the crust
/// id (row key).
#[async_trait]
pub trait CrustTable: Send + Sync {
    /// Creates the backing table unless it already exists.
    async fn create_if_not_exists(&self) -> Result<TableCreation>;

    /// Inserts a new crust. Fails with `AlreadyExists` if the row is present.
    async fn add_crust(&self, crust: &Crust) -> Result<()>;

    /// Gets a crust and its version tag by id.
    async fn get_crust(&self, id: &str) -> Result<Option<Versioned<Crust>>>;

    /// Gets every crust, ordered by id.
    async fn query_crusts(&self) -> Result<Vec<Versioned<Crust>>>;

    /// Replaces a crust if its stored version tag still equals `etag`.
    ///
    /// Fails with `Conflict` when another writer got there first.
    async fn replace_crust(&self, crust: &Crust, etag: &ETag) -> Result<()>;
}
