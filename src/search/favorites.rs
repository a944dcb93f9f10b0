use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::models::Listing;

/// Snapshot of one caller's favorite listing ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: HashSet<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, listing_id: &str) -> bool {
        self.ids.contains(listing_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in ascending order, for stable responses.
    pub fn sorted_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A ranked listing together with the caller's favorite flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedListing {
    #[serde(flatten)]
    pub listing: Arc<Listing>,
    pub is_favorite: bool,
}

/// Mark each listing with whether the caller has favorited it.
///
/// Pure projection: order is preserved and the listings themselves are
/// shared, not copied or modified.
pub fn annotate(ranked: &[Arc<Listing>], favorites: &FavoriteSet) -> Vec<AnnotatedListing> {
    ranked
        .iter()
        .map(|listing| AnnotatedListing {
            is_favorite: favorites.contains(&listing.id),
            listing: Arc::clone(listing),
        })
        .collect()
}
