//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link storage
//! - [`ClickRepository`] - Append-only click event log

pub mod click_repository;
pub mod link_repository;

pub use click_repository::ClickRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
