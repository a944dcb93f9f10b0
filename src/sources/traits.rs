use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Listing;
use crate::search::{FavoriteSet, FilterCriteria};

/// Supplier of listing snapshots (the persistence collaborator).
///
/// Implementations may narrow the candidates using the exact-match fields of
/// `criteria` as an optimization, and must yield listings in a deterministic
/// order. The engine re-applies the full predicate regardless.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch candidate listings for a search.
    async fn fetch_candidates(&self, criteria: &FilterCriteria) -> Result<Vec<Arc<Listing>>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}

/// Per-caller favorite ids (the favorite mutation collaborator).
///
/// `add` and `remove` are idempotent; they return whether anything changed.
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    /// Snapshot of the caller's favorites at call time.
    async fn favorites_of(&self, caller_id: &str) -> Result<FavoriteSet>;

    async fn add(&self, caller_id: &str, listing_id: &str) -> Result<bool>;

    async fn remove(&self, caller_id: &str, listing_id: &str) -> Result<bool>;
}
