use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::error::{Result, SearchError};
use crate::models::Listing;
use crate::search::FilterCriteria;
use crate::sources::traits::ListingSource;

/// Listing source backed by a remote listing service.
///
/// Issues `GET {base_url}/listings` with the exact-match criteria as query
/// parameters and expects a JSON array of listings back.
pub struct HttpListingSource {
    client: Client,
    base_url: String,
}

impl HttpListingSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("estate-search/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn query_pairs(criteria: &FilterCriteria) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(city) = &criteria.city {
            pairs.push(("city", city.clone()));
        }
        if let Some(state) = &criteria.state {
            pairs.push(("state", state.clone()));
        }
        if let Some(pincode) = &criteria.pincode {
            pairs.push(("pincode", pincode.clone()));
        }
        if let Some(category) = criteria.category {
            pairs.push(("type", category.to_string()));
        }
        if let Some(intent) = criteria.intent {
            pairs.push(("for", intent.to_string()));
        }
        pairs
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch_candidates(&self, criteria: &FilterCriteria) -> Result<Vec<Arc<Listing>>> {
        let url = format!("{}/listings", self.base_url);
        let query = Self::query_pairs(criteria);

        debug!("Fetching listings from {} with {:?}", url, query);

        let response = self.client.get(&url).query(&query).send().await?;

        if !response.status().is_success() {
            warn!("Listing service returned status: {}", response.status());
            return Err(SearchError::UpstreamUnavailable(format!(
                "listing service returned {}",
                response.status()
            )));
        }

        let records: Vec<Listing> = response.json().await.map_err(|e| {
            SearchError::UpstreamUnavailable(format!("undecodable listing payload: {e}"))
        })?;

        let total = records.len();
        let listings: Vec<Arc<Listing>> = records
            .into_iter()
            .filter_map(|listing| match listing.validate() {
                Ok(()) => Some(Arc::new(listing)),
                Err(e) => {
                    warn!("Skipped listing from upstream: {}", e);
                    None
                }
            })
            .collect();

        info!("Fetched {} of {} listings from {}", listings.len(), total, url);
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
