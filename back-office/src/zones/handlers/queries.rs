use async_trait::async_trait;
use shared::models::{EditableZone, Zone};

use super::QueryHandler;
use crate::zones::store::DynZoneStore;
use crate::zones::{GetZoneForEditing, ListZones, ZoneError};

/// Loads a zone in the shape used by the edit form
pub struct GetZoneForEditingHandler {
    store: DynZoneStore,
}

impl GetZoneForEditingHandler {
    pub fn new(store: DynZoneStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl QueryHandler<GetZoneForEditing> for GetZoneForEditingHandler {
    type Output = EditableZone;

    async fn handle(&self, query: GetZoneForEditing) -> Result<EditableZone, ZoneError> {
        let id = query.zone_id();
        let zone = self.store.get(id).await?.ok_or(ZoneError::NotFound(id))?;

        Ok(EditableZone {
            zone_id: zone.id,
            name: zone.name,
            enabled: zone.active,
        })
    }
}

pub struct ListZonesHandler {
    store: DynZoneStore,
}

impl ListZonesHandler {
    pub fn new(store: DynZoneStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl QueryHandler<ListZones> for ListZonesHandler {
    type Output = Vec<Zone>;

    async fn handle(&self, _query: ListZones) -> Result<Vec<Zone>, ZoneError> {
        Ok(self.store.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::AddZoneCommand;
    use crate::zones::handlers::test_support::memory_store;
    use crate::zones::handlers::{AddZoneHandler, CommandHandler};

    #[tokio::test]
    async fn test_get_zone_for_editing() {
        let store = memory_store().await;
        let id = AddZoneHandler::new(store.clone())
            .handle(AddZoneCommand::new("North America", true))
            .await
            .unwrap();

        let zone = GetZoneForEditingHandler::new(store)
            .handle(GetZoneForEditing::new(id.value()).unwrap())
            .await
            .unwrap();

        assert_eq!(zone.zone_id, id.value());
        assert_eq!(zone.name, "North America");
        assert!(zone.enabled);
    }

    #[tokio::test]
    async fn test_get_zone_for_editing_unknown_id() {
        let err = GetZoneForEditingHandler::new(memory_store().await)
            .handle(GetZoneForEditing::new(12).unwrap())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Zone with id \"12\" was not found");
    }

    #[tokio::test]
    async fn test_list_zones_sorted_by_name() {
        let store = memory_store().await;
        let add = AddZoneHandler::new(store.clone());
        for name in ["Oceania", "Africa", "Europe"] {
            add.handle(AddZoneCommand::new(name, true)).await.unwrap();
        }

        let zones = ListZonesHandler::new(store).handle(ListZones).await.unwrap();
        let names: Vec<&str> = zones.iter().map(|z| z.name.as_str()).collect();

        assert_eq!(names, vec!["Africa", "Europe", "Oceania"]);
    }
}
