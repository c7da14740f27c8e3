//! Handler for the link creation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::links::LinkResponse;
use crate::api::dto::shorten::CreateLinkRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "alias": "my-alias",                  // optional, <= 20 chars
///   "expiresAt": "2026-12-31T23:59:59Z"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the persisted record; the alias is also rendered as a
/// full short URL against the configured base URL.
///
/// # Errors
///
/// Returns 400 Bad Request on an invalid URL, alias, or timestamp.
/// Returns 409 Conflict if the alias is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.original_url, payload.alias, payload.expires_at)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(link, &state.base_url)),
    ))
}
