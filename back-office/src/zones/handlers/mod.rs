//! Zone command and query handlers
//!
//! Each handler owns a [`DynZoneStore`](super::store::DynZoneStore) and
//! executes exactly one command or query type.

mod add_zone;
mod bulk;
mod delete_zone;
mod edit_zone;
mod queries;
mod toggle_status;

pub use add_zone::AddZoneHandler;
pub use bulk::{BulkDeleteZonesHandler, BulkToggleZonesStatusHandler};
pub use delete_zone::DeleteZoneHandler;
pub use edit_zone::EditZoneHandler;
pub use queries::{GetZoneForEditingHandler, ListZonesHandler};
pub use toggle_status::ToggleZoneStatusHandler;

use async_trait::async_trait;

use super::ZoneError;

/// Executes a write intent
#[async_trait]
pub trait CommandHandler<C: Send + 'static>: Send + Sync {
    type Output: Send;

    async fn handle(&self, command: C) -> Result<Self::Output, ZoneError>;
}

/// Executes a read intent
#[async_trait]
pub trait QueryHandler<Q: Send + 'static>: Send + Sync {
    type Output: Send;

    async fn handle(&self, query: Q) -> Result<Self::Output, ZoneError>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::db::DbService;
    use crate::zones::store::{DynZoneStore, SqliteZoneStore};

    /// Zone store over a fresh in-memory database
    pub async fn memory_store() -> DynZoneStore {
        let db = DbService::in_memory().await.unwrap();
        Arc::new(SqliteZoneStore::new(db.pool))
    }
}
