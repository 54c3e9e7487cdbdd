use async_trait::async_trait;

use super::CommandHandler;
use crate::db::repository::RepoError;
use crate::zones::store::DynZoneStore;
use crate::zones::{DeleteZoneCommand, ZoneError, ZoneId};

/// Handles the command that deletes a zone
pub struct DeleteZoneHandler {
    store: DynZoneStore,
}

impl DeleteZoneHandler {
    pub fn new(store: DynZoneStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<DeleteZoneCommand> for DeleteZoneHandler {
    type Output = ();

    async fn handle(&self, command: DeleteZoneCommand) -> Result<(), ZoneError> {
        delete_one(&self.store, command.zone_id()).await
    }
}

pub(super) async fn delete_one(store: &DynZoneStore, id: ZoneId) -> Result<(), ZoneError> {
    match store.delete(id).await {
        Ok(()) => {
            tracing::info!(zone_id = %id, "Zone deleted");
            Ok(())
        }
        Err(RepoError::NotFound(_)) => Err(ZoneError::NotFound(id)),
        Err(e) => Err(ZoneError::CannotDelete {
            id,
            reason: e.to_string(),
        }),
    }
}
