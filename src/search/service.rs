//! Search service: resolves collaborator snapshots, then runs the engine.

use std::sync::Arc;

use tracing::{debug, warn};

use super::criteria::{SearchInput, SearchRequest};
use super::engine::{SearchEngine, SearchResult};
use super::favorites::FavoriteSet;
use crate::error::Result;
use crate::sources::{FavoriteStore, ListingSource};

/// Composes a [`ListingSource`] and a [`FavoriteStore`] with the pure
/// [`SearchEngine`].
///
/// All I/O happens before the engine runs; the engine only sees resolved
/// in-memory snapshots. Retries are left to the caller.
#[derive(Clone)]
pub struct SearchService {
    engine: SearchEngine,
    listings: Arc<dyn ListingSource>,
    favorites: Arc<dyn FavoriteStore>,
}

impl SearchService {
    pub fn new(
        engine: SearchEngine,
        listings: Arc<dyn ListingSource>,
        favorites: Arc<dyn FavoriteStore>,
    ) -> Self {
        Self {
            engine,
            listings,
            favorites,
        }
    }

    pub fn favorites(&self) -> &Arc<dyn FavoriteStore> {
        &self.favorites
    }

    /// Validate `input`, fetch candidates and the caller's favorites, and
    /// return one ranked page.
    ///
    /// Invalid input is rejected before any collaborator is contacted.
    pub async fn search(&self, input: SearchInput, caller_id: Option<&str>) -> Result<SearchResult> {
        let request = SearchRequest::try_from(input).inspect_err(|e| {
            debug!("Rejected search request: {}", e);
        })?;

        let favorites = async {
            match caller_id {
                Some(id) => self.favorites.favorites_of(id).await,
                None => Ok(FavoriteSet::new()),
            }
        };
        let (candidates, favorites) =
            tokio::try_join!(self.listings.fetch_candidates(&request.criteria), favorites)
                .inspect_err(|e| {
                    warn!("{} source failed: {}", self.listings.source_name(), e);
                })?;

        Ok(self.engine.search(&request, &candidates, &favorites))
    }
}
