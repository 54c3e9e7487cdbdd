use async_trait::async_trait;

use super::CommandHandler;
use super::delete_zone::delete_one;
use super::toggle_status::toggle_one;
use crate::zones::store::DynZoneStore;
use crate::zones::{BulkDeleteZonesCommand, BulkToggleZonesStatusCommand, ZoneError, ZoneId};

/// Sets the status of several zones, attempting every id before reporting failures
pub struct BulkToggleZonesStatusHandler {
    store: DynZoneStore,
}

impl BulkToggleZonesStatusHandler {
    pub fn new(store: DynZoneStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<BulkToggleZonesStatusCommand> for BulkToggleZonesStatusHandler {
    type Output = ();

    async fn handle(&self, command: BulkToggleZonesStatusCommand) -> Result<(), ZoneError> {
        let mut failed: Vec<ZoneId> = Vec::new();

        for &id in command.zone_ids() {
            if let Err(e) = toggle_one(&self.store, id, command.expected_status()).await {
                tracing::warn!(zone_id = %id, error = %e, "Bulk status change failed for zone");
                failed.push(id);
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(ZoneError::CannotBulkToggle { ids: failed })
        }
    }
}

/// Deletes several zones, attempting every id before reporting failures
pub struct BulkDeleteZonesHandler {
    store: DynZoneStore,
}

impl BulkDeleteZonesHandler {
    pub fn new(store: DynZoneStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<BulkDeleteZonesCommand> for BulkDeleteZonesHandler {
    type Output = ();

    async fn handle(&self, command: BulkDeleteZonesCommand) -> Result<(), ZoneError> {
        let mut failed: Vec<ZoneId> = Vec::new();

        for &id in command.zone_ids() {
            if let Err(e) = delete_one(&self.store, id).await {
                tracing::warn!(zone_id = %id, error = %e, "Bulk delete failed for zone");
                failed.push(id);
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(ZoneError::CannotBulkDelete { ids: failed })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::AddZoneCommand;
    use crate::zones::handlers::AddZoneHandler;
    use crate::zones::handlers::test_support::memory_store;

    async fn seed(store: &DynZoneStore, names: &[&str]) -> Vec<ZoneId> {
        let handler = AddZoneHandler::new(store.clone());
        let mut ids = Vec::new();
        for name in names {
            ids.push(handler.handle(AddZoneCommand::new(*name, false)).await.unwrap());
        }
        ids
    }

    #[tokio::test]
    async fn test_bulk_toggle_updates_every_zone() {
        let store = memory_store().await;
        let ids = seed(&store, &["Asia", "Europe"]).await;
        let raw: Vec<i64> = ids.iter().map(ZoneId::value).collect();

        BulkToggleZonesStatusHandler::new(store.clone())
            .handle(BulkToggleZonesStatusCommand::new(raw, true).unwrap())
            .await
            .unwrap();

        for zone in store.list().await.unwrap() {
            assert!(zone.active, "zone {} still disabled", zone.name);
        }
    }

    #[tokio::test]
    async fn test_bulk_toggle_reports_missing_ids_and_updates_the_rest() {
        let store = memory_store().await;
        let ids = seed(&store, &["Asia"]).await;

        let err = BulkToggleZonesStatusHandler::new(store.clone())
            .handle(BulkToggleZonesStatusCommand::new(vec![ids[0].value(), 404], true).unwrap())
            .await
            .unwrap_err();

        match err {
            ZoneError::CannotBulkToggle { ids } => {
                assert_eq!(ids.iter().map(ZoneId::value).collect::<Vec<_>>(), vec![404]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(store.get(ids[0]).await.unwrap().unwrap().active);
    }

    #[tokio::test]
    async fn test_bulk_delete_keeps_going_after_failure() {
        let store = memory_store().await;
        let ids = seed(&store, &["Asia", "Europe"]).await;

        let err = BulkDeleteZonesHandler::new(store.clone())
            .handle(BulkDeleteZonesCommand::new(vec![ids[0].value(), 900, ids[1].value()]).unwrap())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Unable to delete zones with ids: 900");
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bulk_delete_all_existing() {
        let store = memory_store().await;
        let ids = seed(&store, &["Asia", "Europe", "Africa"]).await;
        let raw: Vec<i64> = ids.iter().map(ZoneId::value).collect();

        BulkDeleteZonesHandler::new(store.clone())
            .handle(BulkDeleteZonesCommand::new(raw).unwrap())
            .await
            .unwrap();

        assert!(store.list().await.unwrap().is_empty());
    }
}
