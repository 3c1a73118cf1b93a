//! NIC sector classification
//!
//! This module maps 5-digit NIC industry codes to broad sector buckets
//! using an ordered list of inclusive-exclusive code ranges. Ranges may
//! overlap; the first declared range containing the code wins, so the
//! declaration order below is part of the observable behavior and must
//! not be reordered or replaced with a sorted lookup.

use std::fmt;

use arrow::array::{Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::Result;
use crate::utils::arrow::{downcast_array, get_column};

/// Broad NIC sector buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sector {
    /// All manufacturing activity (10000-33999)
    Manufacturing,
    /// Textile and apparel manufacturing
    TextilesApparel,
    /// Food product manufacturing
    FoodProcessing,
    /// Chemical manufacturing
    Chemicals,
    /// Basic metals and machinery
    MetalMachinery,
    /// Construction of buildings and civil works
    Construction,
    /// Wholesale and retail trade
    TradeRetail,
    /// Land, water and air transport
    Transportation,
    /// Accommodation and food service
    HotelsRestaurants,
    /// Publishing, telecom and IT services
    ItServices,
    /// Professional, scientific and technical services
    ProfessionalServices,
    /// Remaining service activities
    OtherServices,
    /// Fallback for unclassifiable codes
    Other,
}

/// Ordered (sector, inclusive start, exclusive end) classification table.
///
/// The Manufacturing range contains several of the narrower ranges that
/// follow it; codes in the overlap classify as Manufacturing because it
/// is declared first.
const SECTOR_RANGES: &[(Sector, u32, u32)] = &[
    (Sector::Manufacturing, 10000, 34000),
    (Sector::TextilesApparel, 13000, 15000),
    (Sector::FoodProcessing, 10000, 11000),
    (Sector::Chemicals, 20000, 21000),
    (Sector::MetalMachinery, 24000, 29000),
    (Sector::Construction, 41000, 44000),
    (Sector::TradeRetail, 45000, 48000),
    (Sector::Transportation, 49000, 54000),
    (Sector::HotelsRestaurants, 55000, 57000),
    (Sector::ItServices, 58000, 64000),
    (Sector::ProfessionalServices, 69000, 75000),
    (Sector::OtherServices, 77000, 97000),
];

impl Sector {
    /// All classifiable sectors, in declaration order (excluding the fallback)
    pub const ALL: [Self; 12] = [
        Self::Manufacturing,
        Self::TextilesApparel,
        Self::FoodProcessing,
        Self::Chemicals,
        Self::MetalMachinery,
        Self::Construction,
        Self::TradeRetail,
        Self::Transportation,
        Self::HotelsRestaurants,
        Self::ItServices,
        Self::ProfessionalServices,
        Self::OtherServices,
    ];

    /// Classify a NIC code into its sector bucket
    ///
    /// The first 5 characters of the code are parsed as an integer and
    /// scanned against the classification table in declaration order.
    /// Any parse failure or unmatched code yields `Sector::Other`.
    #[must_use]
    pub fn classify(code: &str) -> Self {
        let prefix: String = code.chars().take(5).collect();
        let Ok(value) = prefix.trim().parse::<u32>() else {
            return Self::Other;
        };
        for &(sector, start, end) in SECTOR_RANGES {
            if value >= start && value < end {
                return sector;
            }
        }
        Self::Other
    }

    /// Get the display name for this sector
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Manufacturing => "Manufacturing",
            Self::TextilesApparel => "Textiles & Apparel",
            Self::FoodProcessing => "Food Processing",
            Self::Chemicals => "Chemicals",
            Self::MetalMachinery => "Metal & Machinery",
            Self::Construction => "Construction",
            Self::TradeRetail => "Trade & Retail",
            Self::Transportation => "Transportation",
            Self::HotelsRestaurants => "Hotels & Restaurants",
            Self::ItServices => "IT & Services",
            Self::ProfessionalServices => "Professional Services",
            Self::OtherServices => "Other Services",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Count enterprises per sector in the merged master table
///
/// Classifies the `nic_code` column and sums the `msme_count` column per
/// sector (each row counts once when `msme_count` is absent). Returns
/// sectors in declaration order, with the `Other` bucket last, skipping
/// sectors with no enterprises. An empty batch or a batch without a
/// `nic_code` column yields an empty result.
///
/// # Errors
/// Returns an error if the `nic_code` column cannot be read as strings.
pub fn sector_mix(batch: &RecordBatch) -> Result<Vec<(Sector, u64)>> {
    if batch.num_rows() == 0 {
        return Ok(Vec::new());
    }
    let Some(codes) = get_column(batch, "nic_code", &DataType::Utf8, false)? else {
        return Ok(Vec::new());
    };
    let codes = downcast_array::<StringArray>(&codes, "nic_code", "String")?;
    let counts = get_column(batch, "msme_count", &DataType::Int64, false)?;
    let counts = counts
        .as_ref()
        .map(|c| downcast_array::<arrow::array::Int64Array>(c, "msme_count", "Int64"))
        .transpose()?;

    let mut totals: FxHashMap<Sector, u64> = FxHashMap::default();
    for row in 0..codes.len() {
        if codes.is_null(row) {
            continue;
        }
        let sector = Sector::classify(codes.value(row));
        let weight = counts.map_or(1, |c| {
            if c.is_null(row) { 0 } else { c.value(row).max(0) as u64 }
        });
        *totals.entry(sector).or_default() += weight;
    }

    let mut mix = Vec::new();
    for sector in Sector::ALL.into_iter().chain(std::iter::once(Sector::Other)) {
        if let Some(&count) = totals.get(&sector) {
            if count > 0 {
                mix.push((sector, count));
            }
        }
    }
    Ok(mix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_declared_range_wins_on_overlap() {
        // 10500 is inside both Manufacturing and Food Processing; 13500 is
        // inside both Manufacturing and Textiles & Apparel. Manufacturing
        // is declared first and shadows them.
        assert_eq!(Sector::classify("10500"), Sector::Manufacturing);
        assert_eq!(Sector::classify("13500"), Sector::Manufacturing);
        assert_eq!(Sector::classify("25000"), Sector::Manufacturing);
    }

    #[test]
    fn non_overlapping_ranges_resolve_directly() {
        assert_eq!(Sector::classify("41500"), Sector::Construction);
        assert_eq!(Sector::classify("46000"), Sector::TradeRetail);
        assert_eq!(Sector::classify("52000"), Sector::Transportation);
        assert_eq!(Sector::classify("55500"), Sector::HotelsRestaurants);
        assert_eq!(Sector::classify("62012"), Sector::ItServices);
        assert_eq!(Sector::classify("70200"), Sector::ProfessionalServices);
        assert_eq!(Sector::classify("96090"), Sector::OtherServices);
    }

    #[test]
    fn range_bounds_are_inclusive_exclusive() {
        assert_eq!(Sector::classify("10000"), Sector::Manufacturing);
        assert_eq!(Sector::classify("33999"), Sector::Manufacturing);
        assert_eq!(Sector::classify("34000"), Sector::Other);
        assert_eq!(Sector::classify("41000"), Sector::Construction);
        assert_eq!(Sector::classify("44000"), Sector::Other);
    }

    #[test]
    fn only_the_leading_five_characters_matter() {
        assert_eq!(Sector::classify("4150012345"), Sector::Construction);
        assert_eq!(Sector::classify("62012.0"), Sector::ItServices);
    }

    #[test]
    fn unparseable_codes_fall_back_to_other() {
        assert_eq!(Sector::classify(""), Sector::Other);
        assert_eq!(Sector::classify("abcde"), Sector::Other);
        assert_eq!(Sector::classify("12a45"), Sector::Other);
        assert_eq!(Sector::classify("123"), Sector::Other);
        assert_eq!(Sector::classify("99999"), Sector::Other);
    }
}
