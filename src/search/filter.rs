//! Conjunctive predicate over listings.
//!
//! Each present criterion contributes one conjunct; absent criteria contribute
//! nothing, so empty criteria build the identity predicate. Exact-match fields
//! compare case-sensitively against the stored value.

use super::criteria::FilterCriteria;
use crate::models::{Category, Intent, Listing};

/// Numeric listing attribute that can carry a minimum threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericAttribute {
    Bedrooms,
    Bathrooms,
    Halls,
    Kitchens,
    Area,
}

impl NumericAttribute {
    pub fn of(&self, listing: &Listing) -> f64 {
        match self {
            NumericAttribute::Bedrooms => f64::from(listing.bedrooms),
            NumericAttribute::Bathrooms => f64::from(listing.bathrooms),
            NumericAttribute::Halls => f64::from(listing.halls),
            NumericAttribute::Kitchens => f64::from(listing.kitchens),
            NumericAttribute::Area => listing.area,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Conjunct {
    City(String),
    State(String),
    Pincode(String),
    Category(Category),
    Intent(Intent),
    AtLeast(NumericAttribute, f64),
}

impl Conjunct {
    fn holds(&self, listing: &Listing) -> bool {
        match self {
            Conjunct::City(city) => listing.location.city == *city,
            Conjunct::State(state) => listing.location.state == *state,
            Conjunct::Pincode(pincode) => listing.location.pincode == *pincode,
            Conjunct::Category(category) => listing.category == *category,
            Conjunct::Intent(intent) => listing.intent == *intent,
            Conjunct::AtLeast(attribute, min) => attribute.of(listing) >= *min,
        }
    }
}

/// A pure boolean function over [`Listing`], built from [`FilterCriteria`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    conjuncts: Vec<Conjunct>,
}

impl Predicate {
    /// Translate criteria into a predicate. Criteria are already validated, so
    /// this cannot fail.
    pub fn build(criteria: &FilterCriteria) -> Self {
        let mut conjuncts = Vec::new();

        if let Some(city) = &criteria.city {
            conjuncts.push(Conjunct::City(city.clone()));
        }
        if let Some(state) = &criteria.state {
            conjuncts.push(Conjunct::State(state.clone()));
        }
        if let Some(pincode) = &criteria.pincode {
            conjuncts.push(Conjunct::Pincode(pincode.clone()));
        }
        if let Some(category) = criteria.category {
            conjuncts.push(Conjunct::Category(category));
        }
        if let Some(intent) = criteria.intent {
            conjuncts.push(Conjunct::Intent(intent));
        }

        let thresholds = [
            (NumericAttribute::Bedrooms, criteria.min_bedrooms),
            (NumericAttribute::Bathrooms, criteria.min_bathrooms),
            (NumericAttribute::Halls, criteria.min_halls),
            (NumericAttribute::Kitchens, criteria.min_kitchens),
            (NumericAttribute::Area, criteria.min_area),
        ];
        conjuncts.extend(
            thresholds
                .into_iter()
                .filter_map(|(attribute, min)| min.map(|min| Conjunct::AtLeast(attribute, min))),
        );

        Self { conjuncts }
    }

    /// True when no criterion was present.
    pub fn is_identity(&self) -> bool {
        self.conjuncts.is_empty()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.conjuncts.iter().all(|c| c.holds(listing))
    }

    /// Keep the items whose listing matches, preserving input order.
    pub fn filter<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: AsRef<Listing>,
    {
        items.iter().filter(|item| self.matches(item.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::listing;

    fn ids<T: AsRef<Listing>>(items: &[&T]) -> Vec<String> {
        items.iter().map(|l| l.as_ref().id.clone()).collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let predicate = Predicate::build(&FilterCriteria::default());
        assert!(predicate.is_identity());

        let listings = vec![listing("a"), listing("b").premium(true), listing("c")];
        assert_eq!(ids(&predicate.filter(&listings)), vec!["a", "b", "c"]);
    }

    #[test]
    fn bedrooms_threshold_is_at_least() {
        let listings = vec![
            listing("0").bedrooms(1),
            listing("1").bedrooms(2),
            listing("2").bedrooms(3),
            listing("3").bedrooms(2),
        ];
        let predicate = Predicate::build(&FilterCriteria {
            min_bedrooms: Some(2.0),
            ..Default::default()
        });

        let matched = predicate.filter(&listings);
        assert_eq!(ids(&matched), vec!["1", "2", "3"]);
        assert_eq!(
            matched.iter().map(|l| l.bedrooms).collect::<Vec<_>>(),
            vec![2, 3, 2]
        );
    }

    #[test]
    fn zero_threshold_is_a_real_but_trivial_constraint() {
        let predicate = Predicate::build(&FilterCriteria {
            min_halls: Some(0.0),
            ..Default::default()
        });
        assert!(!predicate.is_identity());

        let mut no_hall = listing("studio");
        no_hall.halls = 0;
        assert!(predicate.matches(&no_hall));
    }

    #[test]
    fn exact_match_is_case_sensitive() {
        let predicate = Predicate::build(&FilterCriteria {
            city: Some("Pune".to_string()),
            ..Default::default()
        });

        assert!(predicate.matches(&listing("a").city("Pune")));
        assert!(!predicate.matches(&listing("b").city("pune")));
        assert!(!predicate.matches(&listing("c").city("Mumbai")));
    }

    #[test]
    fn all_present_conjuncts_must_hold() {
        let predicate = Predicate::build(&FilterCriteria {
            category: Some(Category::Apartment),
            intent: Some(Intent::Rent),
            min_area: Some(800.0),
            ..Default::default()
        });

        let hit = listing("hit")
            .category(Category::Apartment)
            .intent(Intent::Rent)
            .area(800.0);
        let wrong_intent = listing("sale")
            .category(Category::Apartment)
            .area(900.0);
        let too_small = listing("small")
            .category(Category::Apartment)
            .intent(Intent::Rent)
            .area(799.9);

        assert!(predicate.matches(&hit));
        assert!(!predicate.matches(&wrong_intent));
        assert!(!predicate.matches(&too_small));
    }

    #[test]
    fn filtered_set_is_a_subset_and_a_fixed_point() {
        let listings = vec![
            listing("a").bedrooms(1).bathrooms(1),
            listing("b").bedrooms(3).bathrooms(2),
            listing("c").bedrooms(2).bathrooms(1).city("Pune"),
            listing("d").bedrooms(4).bathrooms(3),
        ];
        let predicate = Predicate::build(&FilterCriteria {
            city: Some("Mumbai".to_string()),
            min_bedrooms: Some(2.0),
            min_bathrooms: Some(2.0),
            ..Default::default()
        });

        let once: Vec<_> = predicate.filter(&listings).into_iter().cloned().collect();
        assert!(once.iter().all(|l| listings.contains(l)));
        assert!(once.iter().all(|l| predicate.matches(l)));
        for rejected in listings.iter().filter(|l| !once.contains(l)) {
            assert!(!predicate.matches(rejected));
        }

        let twice: Vec<_> = predicate.filter(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
        assert_eq!(
            once.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(),
            vec!["b", "d"]
        );
    }
}
