//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage and retrieval
//! - [`PgClickRepository`] - Click event log

pub mod pg_click_repository;
pub mod pg_link_repository;

pub use pg_click_repository::PgClickRepository;
pub use pg_link_repository::PgLinkRepository;
