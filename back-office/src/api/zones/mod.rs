//! Zone API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/zones | GET | List zones |
//! | /api/zones | POST | Create a zone |
//! | /api/zones/{id} | GET | Zone as shown in the edit form |
//! | /api/zones/{id} | PUT | Edit a zone |
//! | /api/zones/{id} | DELETE | Delete a zone |
//! | /api/zones/{id}/status | POST | Enable or disable a zone |
//! | /api/zones/bulk/status | POST | Enable or disable several zones |
//! | /api/zones/bulk/delete | POST | Delete several zones |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/zones", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/status", post(handler::toggle_status))
        .route("/bulk/status", post(handler::bulk_toggle_status))
        .route("/bulk/delete", post(handler::bulk_delete))
}
