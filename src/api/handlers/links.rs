//! Handlers for link listing, metadata, and deletion endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::links::{LinkInfoResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all link records.
///
/// # Endpoint
///
/// `GET /urls`
///
/// Returns every record in store-defined order, unpaginated; intended for a
/// management view.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    let items = links
        .into_iter()
        .map(|link| LinkResponse::from_link(link, &state.base_url))
        .collect();

    Ok(Json(items))
}

/// Returns metadata for a link.
///
/// # Endpoint
///
/// `GET /info/{alias}`
///
/// Expiry is not checked: metadata stays available on expired links.
///
/// # Errors
///
/// Returns 404 Not Found if the alias is unknown.
pub async fn link_info_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkInfoResponse>, AppError> {
    let link = state.link_service.get_link_by_alias(&alias).await?;

    Ok(Json(LinkInfoResponse {
        original_url: link.original_url,
        created_at: link.created_at,
        click_count: link.click_count,
    }))
}

/// Deletes a link and, by cascade, its click events.
///
/// # Endpoint
///
/// `DELETE /delete/{alias}`
///
/// # Errors
///
/// Returns 404 Not Found if the alias is unknown; deleting a nonexistent
/// alias is an error, not a no-op.
pub async fn delete_link_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(&alias).await?;

    Ok(StatusCode::NO_CONTENT)
}
