use async_trait::async_trait;

use super::CommandHandler;
use crate::db::repository::RepoError;
use crate::zones::store::DynZoneStore;
use crate::zones::{ToggleZoneStatusCommand, ZoneError, ZoneId};

/// Handles the command that enables or disables a zone
pub struct ToggleZoneStatusHandler {
    store: DynZoneStore,
}

impl ToggleZoneStatusHandler {
    pub fn new(store: DynZoneStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<ToggleZoneStatusCommand> for ToggleZoneStatusHandler {
    type Output = ();

    async fn handle(&self, command: ToggleZoneStatusCommand) -> Result<(), ZoneError> {
        toggle_one(&self.store, command.zone_id(), command.expected_status()).await
    }
}

pub(super) async fn toggle_one(
    store: &DynZoneStore,
    id: ZoneId,
    active: bool,
) -> Result<(), ZoneError> {
    match store.set_active(id, active).await {
        Ok(()) => {
            tracing::info!(zone_id = %id, active, "Zone status changed");
            Ok(())
        }
        Err(RepoError::NotFound(_)) => Err(ZoneError::NotFound(id)),
        Err(e) => Err(ZoneError::CannotToggleStatus {
            id,
            reason: e.to_string(),
        }),
    }
}
