use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::Result as SearchResult;
use crate::models::{Category, Intent, Listing, Location, Owner};
use crate::search::{FavoriteSet, FilterCriteria};
use crate::sources::traits::{FavoriteStore, ListingSource};

/// Listing store held in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryListingStore {
    listings: Vec<Arc<Listing>>,
}

impl MemoryListingStore {
    /// Build a store from raw records. Records that break the listing
    /// invariants, or repeat an id already seen, are skipped.
    pub fn new(listings: Vec<Listing>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(listings.len());

        for listing in listings {
            if let Err(e) = listing.validate() {
                warn!("Skipped listing: {}", e);
                continue;
            }
            if !seen.insert(listing.id.clone()) {
                warn!("Skipped duplicate listing id {}", listing.id);
                continue;
            }
            kept.push(Arc::new(listing));
        }

        Self { listings: kept }
    }

    /// Load a JSON array of listings from disk.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read listings from {}", path.display()))?;
        let listings: Vec<Listing> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse listings in {}", path.display()))?;

        let store = Self::new(listings);
        info!("Loaded {} listings from {}", store.len(), path.display());
        Ok(store)
    }

    /// Store seeded with a handful of built-in listings, for local runs.
    pub fn sample() -> Self {
        Self::new(sample_listings())
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[async_trait]
impl ListingSource for MemoryListingStore {
    async fn fetch_candidates(&self, criteria: &FilterCriteria) -> SearchResult<Vec<Arc<Listing>>> {
        // Narrow on exact-match fields only; thresholds are left to the engine.
        let candidates: Vec<Arc<Listing>> = self
            .listings
            .iter()
            .filter(|l| criteria.city.as_ref().map_or(true, |c| l.location.city == *c))
            .filter(|l| criteria.state.as_ref().map_or(true, |s| l.location.state == *s))
            .filter(|l| criteria.pincode.as_ref().map_or(true, |p| l.location.pincode == *p))
            .filter(|l| criteria.category.map_or(true, |c| l.category == c))
            .filter(|l| criteria.intent.map_or(true, |i| l.intent == i))
            .cloned()
            .collect();

        debug!(
            "Memory store yielded {} of {} listings",
            candidates.len(),
            self.listings.len()
        );
        Ok(candidates)
    }

    fn source_name(&self) -> &'static str {
        "memory"
    }
}

/// Favorite ids per caller, held in memory.
#[derive(Debug, Default)]
pub struct MemoryFavoriteStore {
    favorites: RwLock<HashMap<String, HashSet<String>>>,
}

impl MemoryFavoriteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoriteStore for MemoryFavoriteStore {
    async fn favorites_of(&self, caller_id: &str) -> SearchResult<FavoriteSet> {
        let favorites = self.favorites.read().await;
        Ok(favorites
            .get(caller_id)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn add(&self, caller_id: &str, listing_id: &str) -> SearchResult<bool> {
        let mut favorites = self.favorites.write().await;
        Ok(favorites
            .entry(caller_id.to_string())
            .or_default()
            .insert(listing_id.to_string()))
    }

    async fn remove(&self, caller_id: &str, listing_id: &str) -> SearchResult<bool> {
        let mut favorites = self.favorites.write().await;
        let Some(ids) = favorites.get_mut(caller_id) else {
            return Ok(false);
        };
        let removed = ids.remove(listing_id);
        if ids.is_empty() {
            favorites.remove(caller_id);
        }
        Ok(removed)
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_listing(
    id: &str,
    title: &str,
    category: Category,
    intent: Intent,
    (city, state, pincode): (&str, &str, &str),
    price: f64,
    (bedrooms, bathrooms, halls, kitchens): (u32, u32, u32, u32),
    area: f64,
    is_premium_lister: bool,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} in {}. {} bedrooms, {} sq. ft.", title, city, bedrooms, area),
        category,
        intent,
        location: Location {
            city: city.to_string(),
            state: state.to_string(),
            pincode: pincode.to_string(),
        },
        address: String::new(),
        price,
        bedrooms,
        bathrooms,
        halls,
        kitchens,
        area,
        is_premium_lister,
        owner: Owner {
            name: "Sample Owner".to_string(),
            contact: String::new(),
            email: String::new(),
        },
        images: vec![],
        latitude: None,
        longitude: None,
        listed_by: None,
        listed_at: Utc::now(),
    }
}

fn sample_listings() -> Vec<Listing> {
    info!("Generating sample listings");

    let andheri = ("Mumbai", "Maharashtra", "400053");
    let kothrud = ("Pune", "Maharashtra", "411038");
    let indiranagar = ("Bengaluru", "Karnataka", "560038");

    vec![
        sample_listing(
            "sample-1",
            "2 BHK apartment near metro",
            Category::Apartment,
            Intent::Rent,
            andheri,
            45_000.0,
            (2, 2, 1, 1),
            850.0,
            true,
        ),
        sample_listing(
            "sample-2",
            "Compact 1 BHK",
            Category::Apartment,
            Intent::Rent,
            andheri,
            28_000.0,
            (1, 1, 1, 1),
            520.0,
            false,
        ),
        sample_listing(
            "sample-3",
            "Independent house with garden",
            Category::House,
            Intent::Sale,
            kothrud,
            12_500_000.0,
            (4, 3, 1, 1),
            2_400.0,
            false,
        ),
        sample_listing(
            "sample-4",
            "3 BHK family apartment",
            Category::Apartment,
            Intent::Sale,
            kothrud,
            9_800_000.0,
            (3, 2, 1, 1),
            1_350.0,
            true,
        ),
        sample_listing(
            "sample-5",
            "Duplex close to 100 Feet Road",
            Category::House,
            Intent::Rent,
            indiranagar,
            85_000.0,
            (3, 3, 2, 1),
            1_900.0,
            false,
        ),
    ]
}
