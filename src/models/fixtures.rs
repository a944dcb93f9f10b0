//! Listing builders shared by unit tests.

use chrono::{TimeZone, Utc};

use super::{Category, Intent, Listing, Location, Owner};

/// A plain, non-premium Mumbai house for sale with every count set to 1.
pub fn listing(id: &str) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("Listing {id}"),
        description: String::new(),
        category: Category::House,
        intent: Intent::Sale,
        location: Location {
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "400001".to_string(),
        },
        address: String::new(),
        price: 100.0,
        bedrooms: 1,
        bathrooms: 1,
        halls: 1,
        kitchens: 1,
        area: 500.0,
        is_premium_lister: false,
        owner: Owner::default(),
        images: vec![],
        latitude: None,
        longitude: None,
        listed_by: None,
        listed_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

impl Listing {
    pub fn premium(mut self, premium: bool) -> Self {
        self.is_premium_lister = premium;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn area(mut self, area: f64) -> Self {
        self.area = area;
        self
    }

    pub fn bedrooms(mut self, bedrooms: u32) -> Self {
        self.bedrooms = bedrooms;
        self
    }

    pub fn bathrooms(mut self, bathrooms: u32) -> Self {
        self.bathrooms = bathrooms;
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.location.city = city.to_string();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }
}
