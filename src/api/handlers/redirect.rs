//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, Request, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::extract_client_ip;

/// Redirects an alias to its original URL and records the click.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Behavior
///
/// The client IP is taken from proxy headers (first `X-Forwarded-For`
/// entry, then `X-Real-IP`) with the peer socket address as fallback, and
/// passed along as an opaque string. On success the link's click counter is
/// incremented, a click event is appended, and a `302 Found` pointing at the
/// original URL is returned.
///
/// # Errors
///
/// Returns 404 Not Found if the alias is unknown or the link has expired;
/// the two cases are indistinguishable to the caller.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let client_ip = extract_client_ip(request.headers(), peer);

    let original_url = state.link_service.redirect(&alias, client_ip).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}
