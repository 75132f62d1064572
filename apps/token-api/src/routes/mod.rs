pub mod health;
pub mod rooms;
pub mod token;

use axum::Router;
use utoipa::OpenApi;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/api", token::router().merge(rooms::router()))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        token::create_token,
        rooms::list_rooms,
    ),
    components(
        schemas(
            crate::error::ApiErrorBody,
            health::HealthResponse,
            token::TokenRequest,
            token::TokenResponse,
            rooms::RoomsResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check"),
        (name = "Token", description = "LiveKit access tokens"),
        (name = "Rooms", description = "Room listing"),
    )
)]
pub struct ApiDoc;
