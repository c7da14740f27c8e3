//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click event recorded when a shortened link is accessed.
///
/// Click events are append-only: created as a side effect of a successful
/// redirect, never mutated, and removed only by cascade when their owning
/// link is deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub ip: String,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(id: i64, link_id: i64, clicked_at: DateTime<Utc>, ip: String) -> Self {
        Self {
            id,
            link_id,
            clicked_at,
            ip,
        }
    }
}

/// Input data for recording a new click event.
///
/// The `ip` is an opaque string, `"unknown"` when the boundary layer could
/// not determine a client address. The timestamp is set by the database.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
    pub ip: String,
}
