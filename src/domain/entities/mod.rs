//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`Link`] - A shortened URL mapping
//! - [`Click`] - A click event on a shortened link
//!
//! Creation inputs use separate structs (`NewLink`, `NewClick`) so that
//! store-assigned fields (ids, timestamps) never appear in insert paths.

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::{Link, NewLink};
