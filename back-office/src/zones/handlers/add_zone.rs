use async_trait::async_trait;

use super::CommandHandler;
use crate::zones::store::DynZoneStore;
use crate::zones::{AddZoneCommand, ZoneError, ZoneFields, ZoneId};

/// Handles the command that adds a new zone
pub struct AddZoneHandler {
    store: DynZoneStore,
}

impl AddZoneHandler {
    pub fn new(store: DynZoneStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<AddZoneCommand> for AddZoneHandler {
    type Output = ZoneId;

    async fn handle(&self, command: AddZoneCommand) -> Result<ZoneId, ZoneError> {
        let zone = ZoneFields::new(command.name(), command.is_enabled());

        if let Err(err) = zone.validate() {
            tracing::warn!(error = %err, "Rejected new zone");
            return Err(err);
        }

        let id = ZoneId::new(self.store.insert(&zone).await?)?;
        tracing::info!(zone_id = %id, name = %zone.name, active = zone.active, "Zone created");

        Ok(id)
    }
}
