use std::sync::Arc;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::zones::{DynZoneStore, SqliteZoneStore};

/// Shared state handed to every handler
///
/// Cloning is cheap: the pool and the store are reference counted.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub db: DbService,
    zones: DynZoneStore,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        let zones: DynZoneStore = Arc::new(SqliteZoneStore::new(db.pool.clone()));
        Self { config, db, zones }
    }

    /// Initialize server state
    ///
    /// Opens the database at `config.database_path` and applies migrations.
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_path)
            .await
            .map_err(|e| ServerError::Database(e.message))?;

        Ok(Self::new(config.clone(), db))
    }

    /// State over an in-memory database
    pub async fn in_memory(config: Config) -> Result<Self> {
        let db = DbService::in_memory()
            .await
            .map_err(|e| ServerError::Database(e.message))?;

        Ok(Self::new(config, db))
    }

    /// Zone store shared by the zone handlers
    pub fn zone_store(&self) -> DynZoneStore {
        self.zones.clone()
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}
