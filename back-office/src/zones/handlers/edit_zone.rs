use async_trait::async_trait;

use super::CommandHandler;
use crate::zones::store::DynZoneStore;
use crate::zones::{EditZoneCommand, ZoneError, ZoneFields};

/// Handles the command that edits an existing zone
pub struct EditZoneHandler {
    store: DynZoneStore,
}

impl EditZoneHandler {
    pub fn new(store: DynZoneStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<EditZoneCommand> for EditZoneHandler {
    type Output = ();

    async fn handle(&self, command: EditZoneCommand) -> Result<(), ZoneError> {
        let id = command.zone_id();
        let current = self.store.get(id).await?.ok_or(ZoneError::NotFound(id))?;

        let zone = ZoneFields::new(
            command.name().unwrap_or(&current.name),
            command.enabled().unwrap_or(current.active),
        );
        zone.validate()?;

        self.store.update(id, &zone).await?;
        tracing::info!(zone_id = %id, name = %zone.name, active = zone.active, "Zone updated");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::handlers::AddZoneHandler;
    use crate::zones::handlers::test_support::memory_store;
    use crate::zones::{AddZoneCommand, ZoneId};

    async fn seeded() -> (DynZoneStore, ZoneId) {
        let store = memory_store().await;
        let id = AddZoneHandler::new(store.clone())
            .handle(AddZoneCommand::new("Europe", false))
            .await
            .unwrap();
        (store, id)
    }

    #[tokio::test]
    async fn test_only_given_fields_change() {
        let (store, id) = seeded().await;
        let handler = EditZoneHandler::new(store.clone());

        handler
            .handle(EditZoneCommand::new(id.value()).unwrap().with_enabled(true))
            .await
            .unwrap();

        let zone = store.get(id).await.unwrap().unwrap();
        assert_eq!(zone.name, "Europe");
        assert!(zone.active);

        handler
            .handle(EditZoneCommand::new(id.value()).unwrap().with_name("Europe (non-EU)"))
            .await
            .unwrap();

        let zone = store.get(id).await.unwrap().unwrap();
        assert_eq!(zone.name, "Europe (non-EU)");
        assert!(zone.active);
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected_and_row_untouched() {
        let (store, id) = seeded().await;
        let handler = EditZoneHandler::new(store.clone());

        let err = handler
            .handle(EditZoneCommand::new(id.value()).unwrap().with_name(" "))
            .await
            .unwrap_err();

        assert!(matches!(err, ZoneError::MissingRequiredFields { .. }));
        assert_eq!(store.get(id).await.unwrap().unwrap().name, "Europe");
    }

    #[tokio::test]
    async fn test_unknown_zone_is_not_found() {
        let (store, _) = seeded().await;
        let handler = EditZoneHandler::new(store);

        let err = handler
            .handle(EditZoneCommand::new(999).unwrap().with_enabled(true))
            .await
            .unwrap_err();

        assert!(matches!(err, ZoneError::NotFound(id) if id.value() == 999));
    }
}
