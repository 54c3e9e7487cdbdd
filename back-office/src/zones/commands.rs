//! Zone commands (write intents) and queries (read intents)

use super::{ZoneError, ZoneId};

/// Create a new zone
#[derive(Debug, Clone)]
pub struct AddZoneCommand {
    name: String,
    enabled: bool,
}

impl AddZoneCommand {
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Change the name and/or status of an existing zone; unset fields are kept
#[derive(Debug, Clone)]
pub struct EditZoneCommand {
    zone_id: ZoneId,
    name: Option<String>,
    enabled: Option<bool>,
}

impl EditZoneCommand {
    pub fn new(zone_id: i64) -> Result<Self, ZoneError> {
        Ok(Self {
            zone_id: ZoneId::new(zone_id)?,
            name: None,
            enabled: None,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn zone_id(&self) -> ZoneId {
        self.zone_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteZoneCommand {
    zone_id: ZoneId,
}

impl DeleteZoneCommand {
    pub fn new(zone_id: i64) -> Result<Self, ZoneError> {
        Ok(Self {
            zone_id: ZoneId::new(zone_id)?,
        })
    }

    pub fn zone_id(&self) -> ZoneId {
        self.zone_id
    }
}

/// Set the status of one zone to `expected_status`
#[derive(Debug, Clone, Copy)]
pub struct ToggleZoneStatusCommand {
    zone_id: ZoneId,
    expected_status: bool,
}

impl ToggleZoneStatusCommand {
    pub fn new(zone_id: i64, expected_status: bool) -> Result<Self, ZoneError> {
        Ok(Self {
            zone_id: ZoneId::new(zone_id)?,
            expected_status,
        })
    }

    pub fn zone_id(&self) -> ZoneId {
        self.zone_id
    }

    pub fn expected_status(&self) -> bool {
        self.expected_status
    }
}

#[derive(Debug, Clone)]
pub struct BulkToggleZonesStatusCommand {
    zone_ids: Vec<ZoneId>,
    expected_status: bool,
}

impl BulkToggleZonesStatusCommand {
    pub fn new(zone_ids: Vec<i64>, expected_status: bool) -> Result<Self, ZoneError> {
        Ok(Self {
            zone_ids: to_zone_ids(zone_ids)?,
            expected_status,
        })
    }

    pub fn zone_ids(&self) -> &[ZoneId] {
        &self.zone_ids
    }

    pub fn expected_status(&self) -> bool {
        self.expected_status
    }
}

#[derive(Debug, Clone)]
pub struct BulkDeleteZonesCommand {
    zone_ids: Vec<ZoneId>,
}

impl BulkDeleteZonesCommand {
    pub fn new(zone_ids: Vec<i64>) -> Result<Self, ZoneError> {
        Ok(Self {
            zone_ids: to_zone_ids(zone_ids)?,
        })
    }

    pub fn zone_ids(&self) -> &[ZoneId] {
        &self.zone_ids
    }
}

/// Load a zone as shown in the edit form
#[derive(Debug, Clone, Copy)]
pub struct GetZoneForEditing {
    zone_id: ZoneId,
}

impl GetZoneForEditing {
    pub fn new(zone_id: i64) -> Result<Self, ZoneError> {
        Ok(Self {
            zone_id: ZoneId::new(zone_id)?,
        })
    }

    pub fn zone_id(&self) -> ZoneId {
        self.zone_id
    }
}

/// All zones ordered by name
#[derive(Debug, Clone, Copy, Default)]
pub struct ListZones;

/// Duplicates are dropped, first occurrence wins
fn to_zone_ids(raw: Vec<i64>) -> Result<Vec<ZoneId>, ZoneError> {
    let mut ids: Vec<ZoneId> = Vec::with_capacity(raw.len());
    for value in raw {
        let id = ZoneId::new(value)?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_zone_command_accessors() {
        let command = AddZoneCommand::new("Europe", true);
        assert_eq!(command.name(), "Europe");
        assert!(command.is_enabled());
    }

    #[test]
    fn test_edit_zone_command_builder() {
        let command = EditZoneCommand::new(3).unwrap().with_enabled(false);
        assert_eq!(command.zone_id().value(), 3);
        assert_eq!(command.name(), None);
        assert_eq!(command.enabled(), Some(false));
    }

    #[test]
    fn test_commands_reject_invalid_ids() {
        assert!(matches!(EditZoneCommand::new(0), Err(ZoneError::InvalidId(0))));
        assert!(matches!(DeleteZoneCommand::new(-1), Err(ZoneError::InvalidId(-1))));
        assert!(matches!(
            BulkDeleteZonesCommand::new(vec![1, 0, 2]),
            Err(ZoneError::InvalidId(0))
        ));
    }

    #[test]
    fn test_bulk_ids_are_deduplicated_in_order() {
        let command = BulkToggleZonesStatusCommand::new(vec![4, 2, 4, 1], true).unwrap();
        let ids: Vec<i64> = command.zone_ids().iter().map(ZoneId::value).collect();
        assert_eq!(ids, vec![4, 2, 1]);
    }
}
