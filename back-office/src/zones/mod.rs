//! Zone domain
//!
//! A zone is a named geographic grouping of countries used by shipping and
//! tax rules. Writes go through command handlers, reads through query
//! handlers, both over a [`ZoneStore`].

mod commands;
mod definition;
mod error;
mod zone_id;

pub mod handlers;
pub mod store;

pub use commands::{
    AddZoneCommand, BulkDeleteZonesCommand, BulkToggleZonesStatusCommand, DeleteZoneCommand,
    EditZoneCommand, GetZoneForEditing, ListZones, ToggleZoneStatusCommand,
};
pub use definition::{ZONE_FIELDS, ZoneFields};
pub use error::ZoneError;
pub use handlers::{
    AddZoneHandler, BulkDeleteZonesHandler, BulkToggleZonesStatusHandler, CommandHandler,
    DeleteZoneHandler, EditZoneHandler, GetZoneForEditingHandler, ListZonesHandler, QueryHandler,
    ToggleZoneStatusHandler,
};
pub use store::{DynZoneStore, SqliteZoneStore, ZoneStore};
pub use zone_id::ZoneId;
