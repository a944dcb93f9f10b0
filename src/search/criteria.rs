//! Request types for the search engine.
//!
//! [`SearchInput`] mirrors the loosely-typed JSON the UI sends. It is turned
//! into a typed [`SearchRequest`] in one validation step, so a malformed field
//! rejects the whole request before any listing is looked at.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use super::pagination::Viewport;
use crate::error::{Result, SearchError};
use crate::models::{Category, Intent};

/// Filter fields as received over the wire.
///
/// Every field is optional and an absent (or `null`) field means "no
/// constraint". Threshold fields accept a JSON number or a numeric string,
/// because that is what form inputs produce.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaInput {
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub property_type: Option<String>,
    #[serde(rename = "for")]
    pub intent: Option<String>,
    pub bedrooms: Option<Value>,
    pub bathrooms: Option<Value>,
    pub halls: Option<Value>,
    pub kitchens: Option<Value>,
    pub area: Option<Value>,
}

/// Full search body: criteria plus sort, page and viewport.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInput {
    #[serde(flatten)]
    pub criteria: CriteriaInput,
    pub sort: Option<String>,
    pub page: Option<Value>,
    pub viewport: Option<String>,
    pub honor_premium_partition: Option<bool>,
}

/// Validated filter criteria.
///
/// `None` means the field is unconstrained. `Some(0.0)` on a threshold is a
/// real (trivially satisfied) constraint and is kept distinct from `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub category: Option<Category>,
    pub intent: Option<Intent>,
    pub min_bedrooms: Option<f64>,
    pub min_bathrooms: Option<f64>,
    pub min_halls: Option<f64>,
    pub min_kitchens: Option<f64>,
    pub min_area: Option<f64>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        *self == FilterCriteria::default()
    }
}

impl TryFrom<CriteriaInput> for FilterCriteria {
    type Error = SearchError;

    fn try_from(input: CriteriaInput) -> Result<Self> {
        let category = input
            .property_type
            .as_deref()
            .map(|s| s.parse::<Category>())
            .transpose()
            .map_err(|reason| SearchError::invalid_criteria("propertyType", reason))?;
        let intent = input
            .intent
            .as_deref()
            .map(|s| s.parse::<Intent>())
            .transpose()
            .map_err(|reason| SearchError::invalid_criteria("for", reason))?;

        Ok(FilterCriteria {
            city: input.city,
            state: input.state,
            pincode: input.pincode,
            category,
            intent,
            min_bedrooms: parse_threshold("bedrooms", input.bedrooms.as_ref())?,
            min_bathrooms: parse_threshold("bathrooms", input.bathrooms.as_ref())?,
            min_halls: parse_threshold("halls", input.halls.as_ref())?,
            min_kitchens: parse_threshold("kitchens", input.kitchens.as_ref())?,
            min_area: parse_threshold("area", input.area.as_ref())?,
        })
    }
}

fn parse_threshold(field: &'static str, value: Option<&Value>) -> Result<Option<f64>> {
    let Some(value) = value else {
        return Ok(None);
    };

    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(SearchError::invalid_criteria(
            field,
            format!("expected a number, got {value}"),
        )),
    }
}

fn parse_page(value: Option<&Value>) -> Result<NonZeroU32> {
    let Some(value) = value else {
        return Ok(NonZeroU32::MIN);
    };

    let page = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|p| p.fract() == 0.0 && *p >= 0.0).map(|p| p as u64))
            .and_then(|p| u32::try_from(p).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };

    page.and_then(NonZeroU32::new).ok_or_else(|| {
        SearchError::invalid_criteria("page", format!("expected a positive integer, got {value}"))
    })
}

/// Secondary ordering applied within each premium partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Keep the order supplied by the listing source.
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    AreaAsc,
    AreaDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::PriceAsc => "priceAsc",
            SortKey::PriceDesc => "priceDesc",
            SortKey::AreaAsc => "areaAsc",
            SortKey::AreaDesc => "areaDesc",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    /// The empty string is the UI's "Sort" placeholder and means no sort.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(SortKey::None),
            "priceAsc" => Ok(SortKey::PriceAsc),
            "priceDesc" => Ok(SortKey::PriceDesc),
            "areaAsc" => Ok(SortKey::AreaAsc),
            "areaDesc" => Ok(SortKey::AreaDesc),
            other => Err(format!(
                "expected one of none, priceAsc, priceDesc, areaAsc, areaDesc; got {other:?}"
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully validated search request. Never mutates stored listings.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    pub page: NonZeroU32,
    pub viewport: Viewport,
    /// Premium listings rank first unless this is explicitly turned off.
    pub honor_premium_partition: bool,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortKey::None,
            page: NonZeroU32::MIN,
            viewport: Viewport::default(),
            honor_premium_partition: true,
        }
    }
}

impl TryFrom<SearchInput> for SearchRequest {
    type Error = SearchError;

    fn try_from(input: SearchInput) -> Result<Self> {
        let criteria = FilterCriteria::try_from(input.criteria)?;
        let sort = input
            .sort
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()
            .map_err(|reason| SearchError::invalid_criteria("sort", reason))?
            .unwrap_or_default();
        let page = parse_page(input.page.as_ref())?;
        let viewport = input
            .viewport
            .as_deref()
            .map(str::parse::<Viewport>)
            .transpose()
            .map_err(|reason| SearchError::invalid_criteria("viewport", reason))?
            .unwrap_or_default();

        Ok(SearchRequest {
            criteria,
            sort,
            page,
            viewport,
            honor_premium_partition: input.honor_premium_partition.unwrap_or(true),
        })
    }
}
