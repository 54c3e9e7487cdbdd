//! Zone API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{
    BulkZoneDelete, BulkZoneStatusUpdate, EditableZone, Zone, ZoneCreate, ZoneCreated,
    ZoneStatusUpdate, ZoneUpdate,
};

use crate::api::{ApiResponse, AppResult};
use crate::core::ServerState;
use crate::zones::{
    AddZoneCommand, AddZoneHandler, BulkDeleteZonesCommand, BulkDeleteZonesHandler,
    BulkToggleZonesStatusCommand, BulkToggleZonesStatusHandler, CommandHandler, DeleteZoneCommand,
    DeleteZoneHandler, EditZoneCommand, EditZoneHandler, GetZoneForEditing,
    GetZoneForEditingHandler, ListZones, ListZonesHandler, QueryHandler, ToggleZoneStatusCommand,
    ToggleZoneStatusHandler,
};

/// GET /api/zones - all zones ordered by name
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Zone>>> {
    let zones = ListZonesHandler::new(state.zone_store())
        .handle(ListZones)
        .await?;
    Ok(ApiResponse::success(zones))
}

/// GET /api/zones/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<EditableZone>> {
    let zone = GetZoneForEditingHandler::new(state.zone_store())
        .handle(GetZoneForEditing::new(id)?)
        .await?;
    Ok(ApiResponse::success(zone))
}

/// POST /api/zones
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ZoneCreate>,
) -> AppResult<ApiResponse<ZoneCreated>> {
    let id = AddZoneHandler::new(state.zone_store())
        .handle(AddZoneCommand::new(payload.name, payload.enabled))
        .await?;
    Ok(ApiResponse::success_with_message(
        "Zone created",
        ZoneCreated { id: id.value() },
    ))
}

/// PUT /api/zones/{id} - unset fields keep their current value
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ZoneUpdate>,
) -> AppResult<ApiResponse<EditableZone>> {
    let mut command = EditZoneCommand::new(id)?;
    if let Some(name) = payload.name {
        command = command.with_name(name);
    }
    if let Some(enabled) = payload.enabled {
        command = command.with_enabled(enabled);
    }

    let store = state.zone_store();
    EditZoneHandler::new(store.clone()).handle(command).await?;

    let zone = GetZoneForEditingHandler::new(store)
        .handle(GetZoneForEditing::new(id)?)
        .await?;
    Ok(ApiResponse::success_with_message("Zone updated", zone))
}

/// DELETE /api/zones/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<()>> {
    DeleteZoneHandler::new(state.zone_store())
        .handle(DeleteZoneCommand::new(id)?)
        .await?;
    Ok(ApiResponse::ok())
}

/// POST /api/zones/{id}/status
pub async fn toggle_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ZoneStatusUpdate>,
) -> AppResult<ApiResponse<()>> {
    ToggleZoneStatusHandler::new(state.zone_store())
        .handle(ToggleZoneStatusCommand::new(id, payload.enabled)?)
        .await?;
    Ok(ApiResponse::ok())
}

/// POST /api/zones/bulk/status
pub async fn bulk_toggle_status(
    State(state): State<ServerState>,
    Json(payload): Json<BulkZoneStatusUpdate>,
) -> AppResult<ApiResponse<()>> {
    BulkToggleZonesStatusHandler::new(state.zone_store())
        .handle(BulkToggleZonesStatusCommand::new(
            payload.zone_ids,
            payload.enabled,
        )?)
        .await?;
    Ok(ApiResponse::ok())
}

/// POST /api/zones/bulk/delete
pub async fn bulk_delete(
    State(state): State<ServerState>,
    Json(payload): Json<BulkZoneDelete>,
) -> AppResult<ApiResponse<()>> {
    BulkDeleteZonesHandler::new(state.zone_store())
        .handle(BulkDeleteZonesCommand::new(payload.zone_ids)?)
        .await?;
    Ok(ApiResponse::ok())
}
