// Collably - core/sort.rs
//
// Result ordering for the creator dashboard.
// All orderings are stable: creators with equal sort values keep their
// relative order from the filtered set.

use crate::core::followers::max_reach;
use crate::core::model::CreatorRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard sort options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Highest rating first.
    #[default]
    Featured,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Largest maximum reach first.
    Followers,
    /// Highest audience match first.
    Audience,
}

impl SortKey {
    /// Returns all variants in dropdown order.
    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::Featured,
            SortKey::PriceLow,
            SortKey::PriceHigh,
            SortKey::Followers,
            SortKey::Audience,
        ]
    }

    /// Stable identifier used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Followers => "followers",
            SortKey::Audience => "audience",
        }
    }

    /// Dropdown label.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Followers => "Follower Count",
            SortKey::Audience => "Audience Match",
        }
    }

    /// Strict lookup by identifier (case-insensitive). `None` if unknown.
    pub fn parse(s: &str) -> Option<SortKey> {
        let wanted = s.trim();
        SortKey::all()
            .iter()
            .copied()
            .find(|k| k.as_str().eq_ignore_ascii_case(wanted))
    }

    /// Lookup that never fails: unknown identifiers sort as `Featured`.
    pub fn parse_lenient(s: &str) -> SortKey {
        Self::parse(s).unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reorder `indices` (positions into `records`) according to `key`.
///
/// Uses the standard library's stable sort, so ties keep their incoming order.
pub fn sort_indices(records: &[CreatorRecord], indices: &mut [usize], key: SortKey) {
    match key {
        SortKey::PriceLow => indices.sort_by_key(|&i| records[i].starting_price),
        SortKey::PriceHigh => {
            indices.sort_by(|&a, &b| records[b].starting_price.cmp(&records[a].starting_price))
        }
        SortKey::Followers => {
            indices.sort_by(|&a, &b| max_reach(&records[b]).total_cmp(&max_reach(&records[a])))
        }
        SortKey::Audience => {
            indices.sort_by(|&a, &b| records[b].audience_match.cmp(&records[a].audience_match))
        }
        SortKey::Featured => {
            indices.sort_by(|&a, &b| records[b].rating.total_cmp(&records[a].rating))
        }
    }
}
