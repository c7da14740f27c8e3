//! API route configuration.

use crate::api::handlers::{
    analytics_handler, banner_handler, delete_link_handler, link_info_handler, list_links_handler,
    redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `GET    /`                  - Service banner
/// - `POST   /shorten`           - Create a short link
/// - `GET    /urls`              - List all link records
/// - `GET    /info/{alias}`      - Link metadata
/// - `DELETE /delete/{alias}`    - Delete a link (cascades to clicks)
/// - `GET    /analytics/{alias}` - Click count and recent client IPs
/// - `GET    /{alias}`           - Redirect to the original URL
///
/// Literal segments (`/urls`, `/info`, ...) take precedence over the
/// `/{alias}` capture.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(banner_handler))
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_links_handler))
        .route("/info/{alias}", get(link_info_handler))
        .route("/delete/{alias}", delete(delete_link_handler))
        .route("/analytics/{alias}", get(analytics_handler))
        .route("/{alias}", get(redirect_handler))
}
