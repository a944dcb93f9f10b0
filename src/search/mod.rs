//! Property search and ranking.
//!
//! Components, leaves first:
//!
//! - [`Predicate`] turns optional [`FilterCriteria`] into a conjunctive filter
//! - [`ranking::compare`] orders premium listers first, then by [`SortKey`]
//! - [`pagination::paginate`] windows the ranked sequence
//! - [`favorites::annotate`] marks the caller's favorites
//! - [`SearchEngine`] composes them over in-memory snapshots
//! - [`SearchService`] fetches the snapshots from collaborators first

pub mod criteria;
pub mod engine;
pub mod favorites;
pub mod filter;
pub mod pagination;
pub mod ranking;
pub mod service;

pub use criteria::{CriteriaInput, FilterCriteria, SearchInput, SearchRequest, SortKey};
pub use engine::{SearchEngine, SearchResult};
pub use favorites::{AnnotatedListing, FavoriteSet};
pub use filter::Predicate;
pub use pagination::{PageSizePolicy, Viewport};
pub use service::SearchService;
