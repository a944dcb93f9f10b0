//! Request and response bodies of the HTTP API.

use serde::{Deserialize, Serialize};

use crate::search::{AnnotatedListing, SearchInput, SearchResult};

/// `POST /api/property/search` body.
///
/// All fields are optional; omitted fields are unconstrained.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBody {
    #[serde(flatten)]
    pub input: SearchInput,
    /// Caller whose favorites annotate the results.
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: usize,
    pub total_matches: usize,
    pub total_pages: u32,
    /// Page numbers to render as direct links.
    pub pages: Vec<u32>,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub message: String,
    pub data: Vec<AnnotatedListing>,
    pub pagination: PaginationMeta,
}

impl From<SearchResult> for SearchResponse {
    fn from(result: SearchResult) -> Self {
        let message = if result.is_empty() {
            "No properties found."
        } else {
            "Properties retrieved successfully"
        };
        let pagination = PaginationMeta {
            page: result.page.get(),
            page_size: result.page_size.get(),
            total_matches: result.total_matches,
            total_pages: result.total_pages,
            pages: result.page_window(),
            has_previous: result.has_previous(),
            has_next: result.has_next(),
        };

        Self {
            success: true,
            message: message.to_string(),
            data: result.items,
            pagination,
        }
    }
}

/// Body of the favorite add/remove endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteBody {
    pub property_id: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub success: bool,
    pub favorites: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
