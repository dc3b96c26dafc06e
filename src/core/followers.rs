// Collably - core/followers.rs
//
// Abbreviated follower-count parsing ("485K", "1.2M") and the derived
// maximum-reach metric used for range filtering and the followers sort.
// Core layer: pure functions, total over all inputs.

use crate::core::model::{CreatorRecord, FollowerCount, Platform};
use crate::util::constants::{MILLION, THOUSAND};
use regex::Regex;
use std::sync::OnceLock;

/// Leading decimal number, read the way a lenient float parser reads it:
/// optional whitespace and sign, digits with an optional fraction, and an
/// optional exponent. Anything after the match is ignored.
fn numeric_prefix() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| {
        Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
            .expect("numeric_prefix: invalid regex")
    })
}

/// Convert an abbreviated follower count into an absolute number.
///
/// - `"1.2M"` -> 1 200 000, `"485K"` -> 485 000, `"95"` -> 95.
/// - `None` or an empty string -> 0.
/// - Text without a numeric prefix -> 0.
///
/// The multiplier comes from the first non-whitespace character after the
/// number: `M`/`m` for millions, `K`/`k` for thousands, anything else 1.
/// Trailing words are ignored. The result is never negative and never NaN,
/// so callers can compare it directly.
pub fn parse_followers(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let Some(prefix) = numeric_prefix().find(raw) else {
        return 0.0;
    };
    let base: f64 = prefix.as_str().trim_start().parse().unwrap_or(0.0);

    let multiplier = match raw[prefix.end()..].trim_start().chars().next() {
        Some('M' | 'm') => MILLION,
        Some('K' | 'k') => THOUSAND,
        _ => 1.0,
    };

    let value = base * multiplier;
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Largest parsed follower count across Instagram, TikTok, YouTube, and
/// LinkedIn. Twitter does not count towards reach. Platforms without a
/// recorded count contribute 0.
///
/// Recomputed on every call; catalogues are small enough that caching per
/// record is not worth the bookkeeping.
pub fn max_reach(record: &CreatorRecord) -> f64 {
    Platform::REACH
        .iter()
        .map(|&p| record.followers_on(p).map_or(0.0, FollowerCount::value))
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Category;
    use std::collections::{BTreeMap, BTreeSet};

    #[test]
    fn test_parse_suffixes() {
        assert_eq!(parse_followers(Some("1.2M")), 1_200_000.0);
        assert_eq!(parse_followers(Some("485K")), 485_000.0);
        assert_eq!(parse_followers(Some("2.1M")), 2_100_000.0);
        assert_eq!(parse_followers(Some("95")), 95.0);
    }

    #[test]
    fn test_parse_absent_and_empty_is_zero() {
        assert_eq!(parse_followers(None), 0.0);
        assert_eq!(parse_followers(Some("")), 0.0);
        assert_eq!(parse_followers(Some("   ")), 0.0);
    }

    #[test]
    fn test_parse_malformed_never_panics() {
        assert_eq!(parse_followers(Some("lots")), 0.0);
        assert_eq!(parse_followers(Some("K")), 0.0);
        assert_eq!(parse_followers(Some("-5K")), 0.0);
        assert_eq!(parse_followers(Some("1e999")), 0.0);
    }

    #[test]
    fn test_parse_reads_leading_number_only() {
        assert_eq!(parse_followers(Some(" 12.5k followers")), 12_500.0);
        assert_eq!(parse_followers(Some("3.5Mfans")), 3_500_000.0);
        assert_eq!(parse_followers(Some(".5M")), 500_000.0);
        assert_eq!(parse_followers(Some("1.2 M")), 1_200_000.0);
    }

    #[test]
    fn test_parse_suffix_is_taken_after_the_number() {
        assert_eq!(parse_followers(Some("12k members")), 12_000.0);
        assert_eq!(parse_followers(Some("450 from my mum")), 450.0);
        assert_eq!(parse_followers(Some("8K monthly")), 8_000.0);
    }

    fn creator(followers: &[(Platform, &str)]) -> CreatorRecord {
        let platform_followers: BTreeMap<Platform, FollowerCount> = followers
            .iter()
            .map(|(p, c)| (*p, FollowerCount::new(*c)))
            .collect();
        let platforms: BTreeSet<Platform> = platform_followers.keys().copied().collect();
        CreatorRecord {
            id: 1,
            name: "Test".to_string(),
            descriptor: String::new(),
            category: Category::Tech,
            platform_followers,
            platforms,
            starting_price: 25_000,
            audience_match: 90,
            verified: true,
            rating: 4.5,
        }
    }

    #[test]
    fn test_max_reach_takes_largest_primary_platform() {
        let c = creator(&[
            (Platform::Instagram, "320K"),
            (Platform::YouTube, "1.5M"),
            (Platform::LinkedIn, "85K"),
        ]);
        assert_eq!(max_reach(&c), 1_500_000.0);
    }

    #[test]
    fn test_max_reach_ignores_twitter() {
        let c = creator(&[(Platform::Instagram, "95K"), (Platform::Twitter, "3M")]);
        assert_eq!(max_reach(&c), 95_000.0);
    }

    #[test]
    fn test_max_reach_with_no_followers_is_zero() {
        assert_eq!(max_reach(&creator(&[])), 0.0);
    }
}
