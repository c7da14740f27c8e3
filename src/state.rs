//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};

/// Application state shared across request handlers.
///
/// Services are constructed once at startup with their repository handles
/// and injected here; `base_url` is the configured public prefix used to
/// render full short URLs in responses.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub stats_service: Arc<StatsService>,
    pub base_url: String,
}

impl AppState {
    /// Creates the shared state.
    pub fn new(
        link_service: Arc<LinkService>,
        stats_service: Arc<StatsService>,
        base_url: String,
    ) -> Self {
        Self {
            link_service,
            stats_service,
            base_url,
        }
    }
}
