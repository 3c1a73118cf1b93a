//! Enterprise-type split decoding
//!
//! The employment profile carries enterprise counts as a free-text
//! field of pipe-separated "Label: count" segments, e.g.
//! "Micro: 5 | Small: 2 | Medium: 1". This module is the single decoder
//! for that grammar: segments with an unrecognized label or a malformed
//! count are skipped, never treated as an error.

use std::fmt;

use serde::Serialize;

use crate::aggregate::support::ratio;
use crate::dataset::records::EmploymentRecord;

/// Enterprise size classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnterpriseType {
    Micro,
    Small,
    Medium,
}

impl EnterpriseType {
    /// All size classes in ascending size order
    pub const ALL: [Self; 3] = [Self::Micro, Self::Small, Self::Medium];

    /// Get the display name for this size class
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Micro => "Micro",
            Self::Small => "Small",
            Self::Medium => "Medium",
        }
    }

    /// Parse a segment label; unrecognized labels yield `None`
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Micro" => Some(Self::Micro),
            "Small" => Some(Self::Small),
            "Medium" => Some(Self::Medium),
            _ => None,
        }
    }
}

impl fmt::Display for EnterpriseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Totals accumulated for one enterprise size class
#[derive(Debug, Clone, Serialize)]
pub struct EnterpriseTypeTotals {
    pub kind: EnterpriseType,
    /// Enterprises of this size class
    pub count: u64,
    /// Estimated employment contributed by this size class
    pub employment: f64,
    /// Estimated employees per enterprise of this size class
    pub avg_employment: f64,
}

/// Per-size-class breakdown over a set of employment rows, in the fixed
/// [Micro, Small, Medium] order
#[derive(Debug, Clone, Serialize)]
pub struct EnterpriseBreakdown {
    pub entries: Vec<EnterpriseTypeTotals>,
}

/// Decode one split field into (size class, count) pairs
///
/// Grammar per segment: optional whitespace, a recognized label, a
/// colon, an integer, optional whitespace; segments are separated by
/// pipes. Anything that does not match is skipped.
#[must_use]
pub fn parse_segments(split: &str) -> Vec<(EnterpriseType, u64)> {
    let mut pairs = Vec::new();
    for segment in split.split('|') {
        let Some((label, count)) = segment.trim().split_once(':') else {
            continue;
        };
        let Some(kind) = EnterpriseType::from_label(label.trim()) else {
            continue;
        };
        let Ok(count) = count.trim().parse::<u64>() else {
            continue;
        };
        pairs.push((kind, count));
    }
    pairs
}

/// Accumulate the enterprise-type breakdown over employment rows
///
/// Each row's recognized counts are summed per size class, and each
/// count contributes an estimated employment of
/// count × (row employment / row enterprises), with the per-row average
/// guarded to 0 when the row has no enterprises.
#[must_use]
pub fn breakdown(rows: &[EmploymentRecord]) -> EnterpriseBreakdown {
    let mut counts = [0_u64; 3];
    let mut employment = [0.0_f64; 3];

    for row in rows {
        let Some(split) = row.enterprise_type_split.as_deref() else {
            continue;
        };
        let avg_per_enterprise = ratio(row.total_employment as f64, row.total_msmes as f64);
        for (kind, count) in parse_segments(split) {
            let slot = kind as usize;
            counts[slot] += count;
            employment[slot] += count as f64 * avg_per_enterprise;
        }
    }

    let entries = EnterpriseType::ALL
        .into_iter()
        .map(|kind| {
            let slot = kind as usize;
            EnterpriseTypeTotals {
                kind,
                count: counts[slot],
                employment: employment[slot],
                avg_employment: ratio(employment[slot], counts[slot] as f64),
            }
        })
        .collect();
    EnterpriseBreakdown { entries }
}
