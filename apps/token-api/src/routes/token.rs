use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::access_token;
use crate::error::{ApiError, ApiErrorBody};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/token", post(create_token))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    #[serde(default)]
    pub room_name: String,
    #[serde(default)]
    pub participant_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// `POST /api/token`: Mint a LiveKit access token.
///
/// The token lets `participantName` join `roomName` for the next 24 hours.
#[utoipa::path(
    post,
    path = "/api/token",
    tag = "Token",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Signed access token", body = TokenResponse),
        (status = 400, description = "Invalid body or missing fields", body = ApiErrorBody),
        (status = 500, description = "Token signing failed", body = ApiErrorBody),
    ),
)]
pub async fn create_token(
    State(state): State<AppState>,
    body: Result<Json<TokenRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected token request body");
        ApiError::bad_request("Invalid request body")
    })?;

    if body.room_name.is_empty() || body.participant_name.is_empty() {
        return Err(ApiError::bad_request(
            "roomName and participantName are required",
        ));
    }

    let token = access_token::issue_token(
        &state.config.livekit_api_key,
        &state.config.livekit_api_secret,
        &body.room_name,
        &body.participant_name,
    )?;

    tracing::debug!(room = %body.room_name, identity = %body.participant_name, "access token issued");

    Ok(Json(TokenResponse { token }))
}
