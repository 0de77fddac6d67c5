//! Built-in coordinates for a handful of well known cities.
//!
//! These answer common queries without a network round trip and stand in for the geocoding
//! service when it times out or finds nothing.

use crate::types::location::{LatLon, ResolvedLocation};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackCity {
    /// Lowercase lookup key.
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub display_name: &'static str,
}

impl FallbackCity {
    pub fn to_location(&self) -> ResolvedLocation {
        ResolvedLocation {
            coordinates: LatLon(self.lat, self.lon),
            display_name: self.display_name.to_string(),
        }
    }
}

const fn city(name: &'static str, lat: f64, lon: f64, display_name: &'static str) -> FallbackCity {
    FallbackCity {
        name,
        lat,
        lon,
        display_name,
    }
}

pub const FALLBACK_CITIES: [FallbackCity; 9] = [
    city("douala", 4.0511, 9.7679, "Douala, Cameroon"),
    city("yaounde", 3.8480, 11.5021, "Yaoundé, Cameroon"),
    city("paris", 48.8566, 2.3522, "Paris, France"),
    city("london", 51.5074, -0.1278, "London, UK"),
    city("new york", 40.7128, -74.0060, "New York, USA"),
    city("tokyo", 35.6762, 139.6503, "Tokyo, Japan"),
    city("lagos", 6.5244, 3.3792, "Lagos, Nigeria"),
    city("nairobi", -1.2864, 36.8172, "Nairobi, Kenya"),
    city("cairo", 30.0444, 31.2357, "Cairo, Egypt"),
];

/// Lowercases and trims a free-text query.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// A city whose key equals the normalized query.
pub fn exact_match(normalized: &str) -> Option<&'static FallbackCity> {
    FALLBACK_CITIES.iter().find(|c| c.name == normalized)
}

/// The first city whose key contains the query, or is contained in it.
pub fn fuzzy_match(normalized: &str) -> Option<&'static FallbackCity> {
    if normalized.is_empty() {
        return None;
    }
    FALLBACK_CITIES
        .iter()
        .find(|c| normalized.contains(c.name) || c.name.contains(normalized))
}
