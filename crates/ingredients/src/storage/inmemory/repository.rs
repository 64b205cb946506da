//! In-memory crust table implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use ingredients_core::crust::Crust;
use ingredients_core::storage::{
    CrustTable, ETag, RepositoryError, Result, TableCreation, Versioned,
};

const ENTITY_TYPE: &str = "Crust";

#[derive(Debug, Clone)]
struct StoredRow {
    crust: Crust,
    version: u64,
    updated_at: DateTime<Utc>,
}

impl StoredRow {
    fn to_versioned(&self) -> Versioned<Crust> {
        Versioned::new(
            self.crust.clone(),
            ETag::new(self.version.to_string()),
            self.updated_at,
        )
    }
}

#[derive(Debug, Default)]
struct TableState {
    /// `None` until the table has been created.
    rows: Option<BTreeMap<String, StoredRow>>,
    last_version: u64,
}

impl TableState {
    fn rows(&self) -> Result<&BTreeMap<String, StoredRow>> {
        self.rows.as_ref().ok_or_else(table_not_found)
    }

    fn rows_mut(&mut self) -> Result<&mut BTreeMap<String, StoredRow>> {
        self.rows.as_mut().ok_or_else(table_not_found)
    }

    fn next_version(&mut self) -> u64 {
        self.last_version += 1;
        self.last_version
    }
}

fn table_not_found() -> RepositoryError {
    RepositoryError::QueryFailed("Table not found".to_string())
}

/// In-memory crust table for tests and local runs.
///
/// Cloning shares the underlying state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCrustTable {
    state: Arc<RwLock<TableState>>,
}

impl InMemoryCrustTable {
    /// Creates a handle to a table that does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table that already exists and holds `crusts`.
    pub fn with_crusts(crusts: impl IntoIterator<Item = Crust>) -> Self {
        let mut state = TableState::default();
        let mut rows = BTreeMap::new();
        for crust in crusts {
            let version = state.next_version();
            rows.insert(
                crust.id.clone(),
                StoredRow {
                    crust,
                    version,
                    updated_at: Utc::now(),
                },
            );
        }
        state.rows = Some(rows);

        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns true once the table has been created.
    pub async fn exists(&self) -> bool {
        self.state.read().await.rows.is_some()
    }
}

#[async_trait]
impl CrustTable for InMemoryCrustTable {
    async fn create_if_not_exists(&self) -> Result<TableCreation> {
        let mut state = self.state.write().await;
        if state.rows.is_some() {
            return Ok(TableCreation::AlreadyExists);
        }
        state.rows = Some(BTreeMap::new());
        Ok(TableCreation::Created)
    }

    async fn add_crust(&self, crust: &Crust) -> Result<()> {
        let mut state = self.state.write().await;
        let version = state.next_version();
        let rows = state.rows_mut()?;
        if rows.contains_key(&crust.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: ENTITY_TYPE,
                id: crust.id.clone(),
            });
        }
        rows.insert(
            crust.id.clone(),
            StoredRow {
                crust: crust.clone(),
                version,
                updated_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn get_crust(&self, id: &str) -> Result<Option<Versioned<Crust>>> {
        let state = self.state.read().await;
        Ok(state.rows()?.get(id).map(StoredRow::to_versioned))
    }

    async fn query_crusts(&self) -> Result<Vec<Versioned<Crust>>> {
        let state = self.state.read().await;
        Ok(state.rows()?.values().map(StoredRow::to_versioned).collect())
    }

    async fn replace_crust(&self, crust: &Crust, etag: &ETag) -> Result<()> {
        let mut state = self.state.write().await;
        let version = state.next_version();
        let rows = state.rows_mut()?;
        let row = rows.get_mut(&crust.id).ok_or_else(|| RepositoryError::NotFound {
            entity_type: ENTITY_TYPE,
            id: crust.id.clone(),
        })?;

        if row.version.to_string() != etag.as_str() {
            return Err(RepositoryError::Conflict {
                entity_type: ENTITY_TYPE,
                id: crust.id.clone(),
            });
        }

        *row = StoredRow {
            crust: crust.clone(),
            version,
            updated_at: Utc::now(),
        };
        Ok(())
    }
}
