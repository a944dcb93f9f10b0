/// Errors produced by the search engine and its collaborators.
///
/// An empty result set is deliberately absent from this taxonomy: zero
/// matches is a normal [`SearchResult`](crate::search::SearchResult).
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A request field could not be interpreted. Raised before any filtering.
    #[error("Invalid criteria for `{field}`: {reason}")]
    InvalidCriteria { field: &'static str, reason: String },

    /// The listing or favorite collaborator failed to respond.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// A listing record breaks the data-model invariants.
    #[error("Invalid listing {id}: {reason}")]
    InvalidListing { id: String, reason: String },
}

impl SearchError {
    pub fn invalid_criteria(field: &'static str, reason: impl Into<String>) -> Self {
        SearchError::InvalidCriteria {
            field,
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        SearchError::UpstreamUnavailable(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
