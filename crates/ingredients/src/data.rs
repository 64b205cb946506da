//! Crust inventory access on top of a [`CrustTable`].
//!
//! The first call into [`CrustData`] creates the backing table and, if this
//! process created it, seeds the fixed crust set. Later calls skip straight
//! to the store.

use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::join_all;
use tokio::sync::Mutex;

use ingredients_core::crust::{decrement_stock, seed_crusts, sort_by_id, Crust, StockUpdate};
use ingredients_core::storage::{CrustTable, RepositoryError, Result};

/// Attempts `decrement_stock` makes before giving up on a contended row.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

const ENTITY_TYPE: &str = "Crust";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InitState {
    /// Table has not been created (or creation failed).
    Pending,
    /// This process created the table but the seed rows are not all in.
    Seeding,
    Ready,
}

/// Lazily initialized access to the crust table.
pub struct CrustData<T> {
    table: T,
    max_attempts: usize,
    init: Mutex<InitState>,
    /// Set once `init` reaches `Ready`, so callers skip the lock afterwards.
    ready: AtomicBool,
}

impl<T: CrustTable> CrustData<T> {
    /// Wraps `table`. Nothing is sent to the store until the first call.
    pub fn new(table: T) -> Self {
        Self {
            table,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            init: Mutex::new(InitState::Pending),
            ready: AtomicBool::new(false),
        }
    }

    /// Sets how many conditional writes `decrement_stock` tries.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Returns every crust, ordered by id.
    pub async fn list(&self) -> Result<Vec<Crust>> {
        self.ensure_initialized().await?;

        let rows = self.table.query_crusts().await.inspect_err(|err| {
            tracing::error!(error = %err, "Error reading crusts");
        })?;

        let mut crusts: Vec<Crust> = rows.into_iter().map(|row| row.into_inner()).collect();
        sort_by_id(&mut crusts);
        Ok(crusts)
    }

    /// Returns a single crust, or `None` if there is no such id.
    pub async fn get(&self, id: &str) -> Result<Option<Crust>> {
        self.ensure_initialized().await?;

        let row = self.table.get_crust(id).await.inspect_err(|err| {
            tracing::error!(id, error = %err, "Error reading crust");
        })?;
        Ok(row.map(|row| row.into_inner()))
    }

    /// Takes one unit of stock from the crust `id`.
    ///
    /// The write is conditioned on the version tag that was read; when a
    /// concurrent writer wins, the row is re-read and the write retried, up
    /// to the configured number of attempts. Stock never goes below zero.
    pub async fn decrement_stock(&self, id: &str) -> Result<StockUpdate> {
        self.ensure_initialized().await?;

        for attempt in 1..=self.max_attempts {
            let current = self
                .table
                .get_crust(id)
                .await
                .inspect_err(|err| {
                    tracing::error!(id, error = %err, "Error reading crust");
                })?
                .ok_or_else(|| RepositoryError::NotFound {
                    entity_type: ENTITY_TYPE,
                    id: id.to_string(),
                })?;

            let Some(next) = decrement_stock(&current.value) else {
                tracing::debug!(id, "Crust out of stock");
                return Ok(StockUpdate::OutOfStock);
            };

            match self.table.replace_crust(&next, &current.etag).await {
                Ok(()) => {
                    return Ok(StockUpdate::Decremented {
                        remaining: next.stock_count,
                    });
                }
                Err(err) if err.is_conflict() => {
                    tracing::info!(id, attempt, "Conflict updating crust, retrying");
                }
                Err(err) => {
                    tracing::error!(id, attempt, error = %err, "Error updating crust");
                    return Err(err);
                }
            }
        }

        tracing::warn!(
            id,
            attempts = self.max_attempts,
            "Giving up on contended crust"
        );
        Err(RepositoryError::RetriesExhausted {
            entity_type: ENTITY_TYPE,
            id: id.to_string(),
            attempts: self.max_attempts,
        })
    }

    /// Runs table creation and seeding once. Concurrent callers wait on the
    /// lock; a failed attempt leaves the state as it was so the next caller
    /// picks up where it stopped.
    async fn ensure_initialized(&self) -> Result<()> {
        if self.ready.load(Ordering::Acquire) {
            return Ok(());
        }

        let mut state = self.init.lock().await;

        if *state == InitState::Pending {
            let creation = self.table.create_if_not_exists().await.inspect_err(|err| {
                tracing::error!(error = %err, "Error initializing crust table");
            })?;

            *state = if creation.was_created() {
                tracing::info!("Created crust table, seeding");
                InitState::Seeding
            } else {
                tracing::debug!("Crust table already exists");
                InitState::Ready
            };
        }

        if *state == InitState::Seeding {
            self.seed().await?;
            *state = InitState::Ready;
        }

        self.ready.store(true, Ordering::Release);
        Ok(())
    }

    async fn seed(&self) -> Result<()> {
        let crusts = seed_crusts();
        let results = join_all(crusts.iter().map(|crust| self.add_seed(crust))).await;
        results.into_iter().collect::<Result<Vec<()>>>()?;

        tracing::info!(count = crusts.len(), "Seeded crust table");
        Ok(())
    }

    async fn add_seed(&self, crust: &Crust) -> Result<()> {
        match self.table.add_crust(crust).await {
            // Left over from an earlier, partially failed seeding pass.
            Ok(()) | Err(RepositoryError::AlreadyExists { .. }) => Ok(()),
            Err(err) => {
                tracing::error!(id = %crust.id, error = %err, "Error inserting crust");
                Err(err)
            }
        }
    }
}
