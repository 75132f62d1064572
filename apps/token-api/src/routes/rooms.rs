use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/rooms", get(list_rooms))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomsResponse {
    pub rooms: Vec<String>,
}

/// `GET /api/rooms`: List active rooms.
///
/// Always empty: rooms live on the LiveKit server and are never queried from here.
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = "Rooms",
    responses(
        (status = 200, description = "Room list", body = RoomsResponse),
    ),
)]
pub async fn list_rooms() -> Json<RoomsResponse> {
    Json(RoomsResponse { rooms: Vec::new() })
}
