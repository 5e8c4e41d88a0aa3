//! services/api/src/adapters/db/mod.rs
//!
//! The database adapter: the concrete implementation of the record-access
//! ports from the `core` crate, one submodule per entity kind. All queries
//! run against PostgreSQL through `sqlx`.

use std::sync::Arc;

use fitness_core::ports::{BlobStore, PortError};
use sqlx::PgPool;

mod custom_plans;
mod stretches;
mod weeks;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter implementing the `StretchStore`, `WeekStore` and
/// `CustomPlanStore` ports. It holds the blob store so record deletion can
/// clean up an associated image without the web layer orchestrating it.
#[derive(Clone)]
pub struct DbAdapter {
    pool: PgPool,
    blobs: Arc<dyn BlobStore>,
}

impl DbAdapter {
    /// Creates a new `DbAdapter`.
    pub fn new(pool: PgPool, blobs: Arc<dyn BlobStore>) -> Self {
        Self { pool, blobs }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub(crate) fn blobs(&self) -> &Arc<dyn BlobStore> {
        &self.blobs
    }
}

/// Maps a database error onto the generic port error.
pub(crate) fn unexpected(e: sqlx::Error) -> PortError {
    PortError::Unexpected(e.to_string())
}
