//! Zone Model

use serde::{Deserialize, Serialize};

/// Zone entity (geographic grouping of countries for shipping and taxes)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Zone {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

/// Create zone payload
///
/// A missing `name` deserializes as empty so validation can report it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
}

/// Update zone payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneUpdate {
    pub name: Option<String>,
    pub enabled: Option<bool>,
}

/// Status change payload for a single zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneStatusUpdate {
    pub enabled: bool,
}

/// Status change payload for several zones at once
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkZoneStatusUpdate {
    pub zone_ids: Vec<i64>,
    pub enabled: bool,
}

/// Bulk delete payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkZoneDelete {
    pub zone_ids: Vec<i64>,
}

/// Returned after a zone has been created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCreated {
    pub id: i64,
}

/// Zone as shown in the back-office edit form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableZone {
    pub zone_id: i64,
    pub name: String,
    pub enabled: bool,
}
