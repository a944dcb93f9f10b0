//! Property search and ranking service for a listing marketplace.
//!
//! Filters listing snapshots with optional criteria, ranks premium listers
//! first with a caller-chosen secondary key, paginates the result and marks
//! the caller's favorites. See [`search`] for the engine and [`api`] for the
//! HTTP boundary.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod sources;
