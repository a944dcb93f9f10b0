use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

#[cfg(test)]
pub(crate) mod fixtures;

/// Kind of property being listed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    House,
    Apartment,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::House => "house",
            Category::Apartment => "apartment",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "house" => Ok(Category::House),
            "apartment" => Ok(Category::Apartment),
            other => Err(format!("expected `house` or `apartment`, got {other:?}")),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the property is offered for sale or for rent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Sale,
    Rent,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Sale => "sale",
            Intent::Rent => "rent",
        }
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" => Ok(Intent::Sale),
            "rent" => Ok(Intent::Rent),
            other => Err(format!("expected `sale` or `rent`, got {other:?}")),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location information for a property.
///
/// Values are stored already normalized by whoever created the listing;
/// search compares them verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub pincode: String,
}

/// Contact details shown on the listing card
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    #[serde(rename = "ownerName", default)]
    pub name: String,
    #[serde(rename = "ownerContact", default)]
    pub contact: String,
    #[serde(rename = "ownerEmail", default)]
    pub email: String,
}

/// Core listing data model.
///
/// A listing is immutable for the duration of a search call. `is_premium_lister`
/// is fixed by the subscription collaborator when the listing is created and is
/// never re-derived here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(rename = "for")]
    pub intent: Intent,
    #[serde(flatten)]
    pub location: Location,
    #[serde(default)]
    pub address: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(alias = "hall")]
    pub halls: u32,
    #[serde(alias = "kitchen")]
    pub kitchens: u32,
    /// Floor area in square feet
    pub area: f64,
    #[serde(default, alias = "isPremiumUser")]
    pub is_premium_lister: bool,
    #[serde(flatten)]
    pub owner: Owner,
    #[serde(default)]
    pub images: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(alias = "userId")]
    pub listed_by: Option<String>,
    #[serde(default = "Utc::now", alias = "createdAt")]
    pub listed_at: DateTime<Utc>,
}

impl Listing {
    /// Check the numeric invariants: price and area are finite and `>= 0`,
    /// coordinates (when present) are finite. Room counts are unsigned.
    pub fn validate(&self) -> Result<(), SearchError> {
        let invalid = |reason: String| SearchError::InvalidListing {
            id: self.id.clone(),
            reason,
        };

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(invalid(format!("price must be >= 0, got {}", self.price)));
        }
        if !self.area.is_finite() || self.area < 0.0 {
            return Err(invalid(format!("area must be >= 0, got {}", self.area)));
        }
        for (name, coord) in [("latitude", self.latitude), ("longitude", self.longitude)] {
            if coord.is_some_and(|c| !c.is_finite()) {
                return Err(invalid(format!("{name} must be a finite number")));
            }
        }
        Ok(())
    }
}

impl AsRef<Listing> for Listing {
    fn as_ref(&self) -> &Listing {
        self
    }
}
