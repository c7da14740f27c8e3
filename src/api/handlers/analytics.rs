//! Handler for the link analytics endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click analytics for a link.
///
/// # Endpoint
///
/// `GET /analytics/{alias}`
///
/// # Response
///
/// ```json
/// {
///   "clickCount": 3,
///   "last5Ips": ["1.1.1.1", "2.2.2.2", "1.1.1.1"]
/// }
/// ```
///
/// Expiry is not checked: analytics stay available on expired links.
///
/// # Errors
///
/// Returns 404 Not Found if the alias is unknown.
pub async fn analytics_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let analytics = state.stats_service.get_analytics(&alias).await?;

    Ok(Json(analytics.into()))
}
