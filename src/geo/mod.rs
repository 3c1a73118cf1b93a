//! Geographic coordinate registry for map output
//!
//! This module holds the fixed lookup table mapping each state and union
//! territory to its representative latitude/longitude, used to attach
//! coordinates to per-state aggregates.

use rustc_hash::FxHashMap;
use serde::Serialize;

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Fallback center of the country, used for states missing from the table
pub const COUNTRY_CENTER: Coordinates = Coordinates {
    lat: 22.0,
    lon: 78.0,
};

/// State and union territory coordinates
const REGION_COORDS: &[(&str, f64, f64)] = &[
    ("ANDHRA PRADESH", 15.9129, 79.7400),
    ("ARUNACHAL PRADESH", 28.2180, 94.7278),
    ("ASSAM", 26.2006, 92.9376),
    ("BIHAR", 25.0961, 85.3131),
    ("CHHATTISGARH", 21.2787, 81.8661),
    ("GOA", 15.2993, 74.1240),
    ("GUJARAT", 22.2587, 71.1924),
    ("HARYANA", 29.0588, 76.0856),
    ("HIMACHAL PRADESH", 31.1048, 77.1734),
    ("JHARKHAND", 23.6102, 85.2799),
    ("KARNATAKA", 15.3173, 75.7139),
    ("KERALA", 10.8505, 76.2711),
    ("MADHYA PRADESH", 22.9734, 78.6569),
    ("MAHARASHTRA", 19.7515, 75.7139),
    ("MANIPUR", 24.6637, 93.9063),
    ("MEGHALAYA", 25.4670, 91.3662),
    ("MIZORAM", 23.1645, 92.9376),
    ("NAGALAND", 26.1584, 94.5624),
    ("ODISHA", 20.9517, 85.0985),
    ("PUNJAB", 31.1471, 75.3412),
    ("RAJASTHAN", 27.0238, 74.2179),
    ("SIKKIM", 27.5330, 88.5122),
    ("TAMIL NADU", 11.1271, 78.6569),
    ("TELANGANA", 18.1124, 79.0193),
    ("TRIPURA", 23.9408, 91.9882),
    ("UTTAR PRADESH", 26.8467, 80.9462),
    ("UTTARAKHAND", 30.0668, 79.0193),
    ("WEST BENGAL", 22.9868, 87.8550),
    ("DELHI", 28.7041, 77.1025),
    ("CHANDIGARH", 30.7333, 76.7794),
    ("PUDUCHERRY", 11.9416, 79.8083),
    ("LAKSHADWEEP", 10.5669, 72.6417),
    ("JAMMU AND KASHMIR", 33.7782, 76.5762),
    ("DAMAN AND DIU", 20.4283, 72.8397),
    ("DADAR AND NAGAR HAVELI", 20.1809, 73.0169),
];

/// Read-only registry of state coordinates
#[derive(Debug, Clone)]
pub struct GeoRegistry {
    coords: FxHashMap<&'static str, Coordinates>,
}

impl GeoRegistry {
    /// Build the registry from the static coordinate table
    #[must_use]
    pub fn new() -> Self {
        let coords = REGION_COORDS
            .iter()
            .map(|&(name, lat, lon)| (name, Coordinates { lat, lon }))
            .collect();
        Self { coords }
    }

    /// Look up the coordinates for a state, if known
    #[must_use]
    pub fn coords(&self, region: &str) -> Option<Coordinates> {
        self.coords.get(region).copied()
    }

    /// Look up the coordinates for a state, falling back to the country center
    #[must_use]
    pub fn coords_or_center(&self, region: &str) -> Coordinates {
        self.coords(region).unwrap_or(COUNTRY_CENTER)
    }

    /// Number of states in the registry
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

impl Default for GeoRegistry {
    fn default() -> Self {
        Self::new()
    }
}
