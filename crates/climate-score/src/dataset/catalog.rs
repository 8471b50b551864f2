use super::{Decade, Location};
use serde::Serialize;

const STANDARD_DECADES: [u16; 4] = [2020, 2040, 2060, 2080];

const STANDARD_LOCATIONS: [(&str, &str); 52] = [
    ("Ann Arbor", "MI"),
    ("Annapolis", "MD"),
    ("Asheville", "NC"),
    ("Atlanta", "GA"),
    ("Augusta", "ME"),
    ("Austin", "TX"),
    ("Bismarck", "ND"),
    ("Boise", "ID"),
    ("Boston", "MA"),
    ("Burlington", "VT"),
    ("Carson City", "NV"),
    ("Charleston", "WV"),
    ("Cheyenne", "WY"),
    ("Chicago", "IL"),
    ("Columbia", "SC"),
    ("Columbus", "OH"),
    ("Concord", "NH"),
    ("Denver", "CO"),
    ("Des Moines", "IA"),
    ("Dover", "DE"),
    ("Hartford", "CT"),
    ("Helena", "MT"),
    ("Indianapolis", "IN"),
    ("Jackson", "MS"),
    ("Jefferson City", "MO"),
    ("Las Vegas", "NV"),
    ("Lincoln", "NE"),
    ("Little Rock", "AR"),
    ("Los Angeles", "CA"),
    ("Louisville", "KY"),
    ("Madison", "WI"),
    ("Miami", "FL"),
    ("Montgomery", "AL"),
    ("Nashville", "TN"),
    ("New Orleans", "LA"),
    ("New York", "NY"),
    ("Oklahoma City", "OK"),
    ("Philadelphia", "PA"),
    ("Phoenix", "AZ"),
    ("Pierre", "SD"),
    ("Portland", "OR"),
    ("Providence", "RI"),
    ("Richmond", "VA"),
    ("Sacramento", "CA"),
    ("Saint Paul", "MN"),
    ("Salt Lake City", "UT"),
    ("Santa Fe", "NM"),
    ("Seattle", "WA"),
    ("Tallahassee", "FL"),
    ("Topeka", "KS"),
    ("Trenton", "NJ"),
    ("Washington", "DC"),
];

/// Locations and decades offered for scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationCatalog {
    locations: Vec<Location>,
    decades: Vec<Decade>,
}

impl LocationCatalog {
    pub fn new(locations: Vec<Location>, decades: Vec<Decade>) -> Self {
        Self { locations, decades }
    }

    pub fn standard() -> Self {
        let locations = STANDARD_LOCATIONS
            .iter()
            .map(|(city, state)| Location::new(*city, *state))
            .collect();
        let decades = STANDARD_DECADES.into_iter().map(Decade).collect();
        Self::new(locations, decades)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn decades(&self) -> &[Decade] {
        &self.decades
    }

    /// Resolves a user-supplied label; the state part is optional.
    pub fn find(&self, label: &str) -> Option<&Location> {
        let wanted = Location::parse(label).ok()?;
        let city = wanted.city_key();
        self.locations.iter().find(|location| {
            location.city_key() == city
                && match (&wanted.state, &location.state) {
                    (Some(wanted), Some(known)) => wanted.eq_ignore_ascii_case(known),
                    _ => true,
                }
        })
    }

    pub fn supports_decade(&self, decade: Decade) -> bool {
        self.decades.contains(&decade)
    }
}

impl Default for LocationCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_lists_all_locations_and_decades() {
        let catalog = LocationCatalog::standard();
        assert_eq!(catalog.locations().len(), 52);
        assert_eq!(
            catalog.decades(),
            &[Decade(2020), Decade(2040), Decade(2060), Decade(2080)]
        );
        assert!(catalog.supports_decade(Decade(2060)));
        assert!(!catalog.supports_decade(Decade(2050)));
    }

    #[test]
    fn find_accepts_loose_labels() {
        let catalog = LocationCatalog::standard();
        let found = catalog.find("salt lake city, ut").expect("found");
        assert_eq!(found.label(), "Salt Lake City, UT");

        let by_city = catalog.find("Des  Moines").expect("found without state");
        assert_eq!(by_city.state.as_deref(), Some("IA"));
    }

    #[test]
    fn find_rejects_wrong_state_and_unknown_city() {
        let catalog = LocationCatalog::standard();
        assert!(catalog.find("Portland, ME").is_none());
        assert!(catalog.find("Springfield, IL").is_none());
        assert!(catalog.find("").is_none());
    }
}
