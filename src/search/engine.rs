//! The pure search facade.
//!
//! `build predicate → filter → stable rank → count → slice → annotate` over an
//! already validated [`SearchRequest`]. Works on caller-supplied snapshots only
//! and holds no mutable state, so concurrent calls are independent.

use std::num::{NonZeroU32, NonZeroUsize};
use std::sync::Arc;

use tracing::debug;

use super::criteria::SearchRequest;
use super::favorites::{annotate, AnnotatedListing, FavoriteSet};
use super::filter::Predicate;
use super::pagination::{page_window, paginate, PageSizePolicy};
use super::ranking::rank;
use crate::models::Listing;

/// One page of ranked, favorite-annotated matches.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub items: Vec<AnnotatedListing>,
    pub total_matches: usize,
    pub total_pages: u32,
    pub page: NonZeroU32,
    pub page_size: NonZeroUsize,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    pub fn page_window(&self) -> Vec<u32> {
        page_window(self.page, self.total_pages)
    }

    pub fn has_previous(&self) -> bool {
        self.page.get() > 1 && self.total_pages > 0
    }

    pub fn has_next(&self) -> bool {
        self.page.get() < self.total_pages
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchEngine {
    page_sizes: PageSizePolicy,
}

impl SearchEngine {
    pub fn new(page_sizes: PageSizePolicy) -> Self {
        Self { page_sizes }
    }

    /// Evaluate `request` against a listing snapshot. Cannot fail: the
    /// request was validated when it was built.
    pub fn search(
        &self,
        request: &SearchRequest,
        listings: &[Arc<Listing>],
        favorites: &FavoriteSet,
    ) -> SearchResult {
        let page_size = self.page_sizes.resolve(request.viewport);
        let predicate = Predicate::build(&request.criteria);

        let mut matched = predicate.filter(listings);
        rank(&mut matched, request.sort, request.honor_premium_partition);

        let total_matches = matched.len();
        let window = paginate(&matched, request.page, page_size);
        let page: Vec<Arc<Listing>> = window.items.iter().map(|l| Arc::clone(l)).collect();

        debug!(
            candidates = listings.len(),
            total_matches,
            page = request.page.get(),
            page_size = page_size.get(),
            sort = %request.sort,
            "search evaluated"
        );

        SearchResult {
            items: annotate(&page, favorites),
            total_matches,
            total_pages: window.total_pages,
            page: request.page,
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::listing;
    use crate::search::criteria::{FilterCriteria, SortKey};
    use crate::search::pagination::Viewport;

    fn snapshot(listings: Vec<Listing>) -> Vec<Arc<Listing>> {
        listings.into_iter().map(Arc::new).collect()
    }

    fn ids(result: &SearchResult) -> Vec<&str> {
        result.items.iter().map(|a| a.listing.id.as_str()).collect()
    }

    fn many(n: usize) -> Vec<Arc<Listing>> {
        snapshot((0..n).map(|i| listing(&format!("l{i}"))).collect())
    }

    #[test]
    fn premium_partition_with_price_ascending() {
        let listings = snapshot(vec![
            listing("n5").price(5.0),
            listing("p10").price(10.0).premium(true),
            listing("n15").price(15.0),
            listing("p20").price(20.0).premium(true),
            listing("n25").price(25.0),
        ]);
        let request = SearchRequest {
            sort: SortKey::PriceAsc,
            ..Default::default()
        };

        let result = SearchEngine::default().search(&request, &listings, &FavoriteSet::new());

        let prices: Vec<f64> = result.items.iter().map(|a| a.listing.price).collect();
        assert_eq!(prices, vec![10.0, 20.0, 5.0, 15.0, 25.0]);
        assert_eq!(result.total_matches, 5);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn bedroom_threshold_matches_three() {
        let listings = snapshot(vec![
            listing("a").bedrooms(1),
            listing("b").bedrooms(2),
            listing("c").bedrooms(3),
            listing("d").bedrooms(2),
        ]);
        let request = SearchRequest {
            criteria: FilterCriteria {
                min_bedrooms: Some(2.0),
                ..Default::default()
            },
            ..Default::default()
        };

        let result = SearchEngine::default().search(&request, &listings, &FavoriteSet::new());

        let bedrooms: Vec<u32> = result.items.iter().map(|a| a.listing.bedrooms).collect();
        assert_eq!(bedrooms, vec![2, 3, 2]);
        assert_eq!(result.total_matches, 3);
    }

    #[test]
    fn empty_criteria_returns_everything_premium_first() {
        let listings = snapshot(vec![
            listing("a"),
            listing("b").premium(true),
            listing("c"),
            listing("d").premium(true),
        ]);

        let result =
            SearchEngine::default().search(&SearchRequest::default(), &listings, &FavoriteSet::new());

        assert_eq!(ids(&result), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let listings = many(25);
        let engine = SearchEngine::default();

        let third = engine.search(
            &SearchRequest {
                page: NonZeroU32::new(3).unwrap(),
                ..Default::default()
            },
            &listings,
            &FavoriteSet::new(),
        );
        assert_eq!(third.page_size.get(), 12);
        assert_eq!(third.total_pages, 3);
        assert_eq!(ids(&third), vec!["l24"]);
        assert!(!third.has_next());

        let fourth = engine.search(
            &SearchRequest {
                page: NonZeroU32::new(4).unwrap(),
                ..Default::default()
            },
            &listings,
            &FavoriteSet::new(),
        );
        assert!(fourth.items.is_empty());
        assert_eq!(fourth.total_pages, 3);
        assert_eq!(fourth.total_matches, 25);
    }

    #[test]
    fn narrow_viewport_uses_smaller_pages() {
        let listings = many(25);
        let request = SearchRequest {
            viewport: Viewport::Narrow,
            ..Default::default()
        };

        let result = SearchEngine::default().search(&request, &listings, &FavoriteSet::new());

        assert_eq!(result.page_size.get(), 10);
        assert_eq!(result.items.len(), 10);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.page_window(), vec![1, 2]);
        assert!(!result.has_previous());
        assert!(result.has_next());
    }

    #[test]
    fn favorites_are_annotated_on_the_page() {
        let listings = snapshot(vec![listing("a"), listing("b"), listing("c")]);
        let favorites: FavoriteSet = ["b"].into_iter().collect();

        let result = SearchEngine::default().search(&SearchRequest::default(), &listings, &favorites);

        let flags: Vec<bool> = result.items.iter().map(|a| a.is_favorite).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn no_matches_is_a_valid_empty_result() {
        let listings = many(4);
        let request = SearchRequest {
            criteria: FilterCriteria {
                city: Some("Atlantis".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let result = SearchEngine::default().search(&request, &listings, &FavoriteSet::new());

        assert!(result.is_empty());
        assert_eq!(result.total_pages, 0);
        assert!(result.page_window().is_empty());
        assert!(!result.has_previous());
    }

    #[test]
    fn identical_requests_give_identical_pages() {
        let listings = snapshot(
            (0..30)
                .map(|i| listing(&format!("l{i}")).price(f64::from(i % 4)).premium(i % 5 == 0))
                .collect(),
        );
        let engine = SearchEngine::default();
        let request = SearchRequest {
            sort: SortKey::PriceDesc,
            page: NonZeroU32::new(2).unwrap(),
            ..Default::default()
        };

        let first = engine.search(&request, &listings, &FavoriteSet::new());
        let second = engine.search(&request, &listings, &FavoriteSet::new());
        assert_eq!(first, second);
    }

    #[test]
    fn prefiltered_candidates_give_the_same_result() {
        let listings = snapshot(vec![
            listing("a").city("Pune").bedrooms(3),
            listing("b").bedrooms(3),
            listing("c").city("Pune").bedrooms(1),
            listing("d").city("Pune").bedrooms(4).premium(true),
        ]);
        let request = SearchRequest {
            criteria: FilterCriteria {
                city: Some("Pune".to_string()),
                min_bedrooms: Some(2.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let engine = SearchEngine::default();

        let full = engine.search(&request, &listings, &FavoriteSet::new());
        let prefiltered: Vec<Arc<Listing>> = listings
            .iter()
            .filter(|l| l.location.city == "Pune")
            .cloned()
            .collect();
        let narrowed = engine.search(&request, &prefiltered, &FavoriteSet::new());

        assert_eq!(ids(&full), vec!["d", "a"]);
        assert_eq!(full, narrowed);
    }
}
