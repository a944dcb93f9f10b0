//! Page-number pagination over a ranked sequence.
//!
//! Pagination is never fatal: a page past the end is simply empty.

use std::fmt;
use std::num::{NonZeroU32, NonZeroUsize};
use std::str::FromStr;

/// Visible page numbers around the current one.
const MAX_DISPLAYED_PAGES: u32 = 3;

/// Width class of the caller's viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Viewport {
    /// Phones and other narrow screens.
    Narrow,
    #[default]
    Wide,
}

impl FromStr for Viewport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "narrow" => Ok(Viewport::Narrow),
            "wide" => Ok(Viewport::Wide),
            other => Err(format!("expected `narrow` or `wide`, got {other:?}")),
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Viewport::Narrow => f.write_str("narrow"),
            Viewport::Wide => f.write_str("wide"),
        }
    }
}

/// Page size per viewport class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizePolicy {
    pub narrow: NonZeroUsize,
    pub wide: NonZeroUsize,
}

impl PageSizePolicy {
    pub fn new(narrow: NonZeroUsize, wide: NonZeroUsize) -> Self {
        Self { narrow, wide }
    }

    pub fn resolve(&self, viewport: Viewport) -> NonZeroUsize {
        match viewport {
            Viewport::Narrow => self.narrow,
            Viewport::Wide => self.wide,
        }
    }
}

impl Default for PageSizePolicy {
    fn default() -> Self {
        Self {
            narrow: NonZeroUsize::new(10).unwrap_or(NonZeroUsize::MIN),
            wide: NonZeroUsize::new(12).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// One window of a ranked sequence.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: u32,
}

/// Number of pages needed for `total_matches` items; zero matches is zero pages.
pub fn total_pages(total_matches: usize, page_size: NonZeroUsize) -> u32 {
    let pages = total_matches.div_ceil(page_size.get());
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Slice `[(page-1)*size, page*size)` clamped to the sequence bounds.
pub fn paginate<T>(ranked: &[T], page: NonZeroU32, page_size: NonZeroUsize) -> Page<'_, T> {
    let size = page_size.get();
    let start = usize::try_from(page.get() - 1)
        .ok()
        .and_then(|p| p.checked_mul(size))
        .unwrap_or(usize::MAX)
        .min(ranked.len());
    let end = start.saturating_add(size).min(ranked.len());

    Page {
        items: &ranked[start..end],
        total_pages: total_pages(ranked.len(), page_size),
    }
}

/// Page numbers to show as direct links, e.g. `[4, 5, 6]` on page 5 of 9.
///
/// Shows the current page and its neighbours; on the first or last page the
/// window extends inwards so three numbers stay visible when there are more
/// than three pages.
pub fn page_window(current: NonZeroU32, total_pages: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }

    let current = current.get();
    let mut start = current.saturating_sub(1).max(1);
    let mut end = current.saturating_add(1).min(total_pages);

    if total_pages > MAX_DISPLAYED_PAGES {
        if current == 1 {
            end = MAX_DISPLAYED_PAGES.min(total_pages);
        } else if current == total_pages {
            start = total_pages.saturating_sub(MAX_DISPLAYED_PAGES - 1).max(1);
        }
    }

    (start..=end).collect()
}
