//! Deterministic ranking: premium partition first, then the requested key.

use std::cmp::Ordering;

use super::criteria::SortKey;
use crate::models::Listing;

/// Total order over listings for one request.
///
/// Premium listers always come before everyone else (unless the partition
/// is explicitly disabled); within a partition the sort key decides. Equal
/// listings compare `Equal`, so callers must use a stable sort.
pub fn compare(a: &Listing, b: &Listing, sort: SortKey, honor_premium_partition: bool) -> Ordering {
    let partition = if honor_premium_partition {
        b.is_premium_lister.cmp(&a.is_premium_lister)
    } else {
        Ordering::Equal
    };

    partition.then_with(|| match sort {
        SortKey::None => Ordering::Equal,
        SortKey::PriceAsc => a.price.total_cmp(&b.price),
        SortKey::PriceDesc => b.price.total_cmp(&a.price),
        SortKey::AreaAsc => a.area.total_cmp(&b.area),
        SortKey::AreaDesc => b.area.total_cmp(&a.area),
    })
}

/// Stable-sort `items` in place with [`compare`].
pub fn rank<T>(items: &mut [T], sort: SortKey, honor_premium_partition: bool)
where
    T: AsRef<Listing>,
{
    items.sort_by(|a, b| compare(a.as_ref(), b.as_ref(), sort, honor_premium_partition));
}
