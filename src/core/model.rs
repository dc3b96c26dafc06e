// Collably - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Creator Record
// =============================================================================

/// A single creator profile as shown on the brand dashboard.
///
/// Records are immutable for the lifetime of a dashboard session. They are
/// built from a catalogue definition (see `core::catalogue`) which enforces
/// the invariants listed on each field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatorRecord {
    /// Unique identifier within the catalogue.
    pub id: u32,

    /// Display name (e.g. "Aisha Khan").
    pub name: String,

    /// One-line descriptor shown under the name (e.g. "Lifestyle Creator").
    pub descriptor: String,

    /// Content category, drawn from the closed `Category` set.
    pub category: Category,

    /// Abbreviated follower count per platform. A platform missing from this
    /// map has no recorded audience; it is not an error.
    pub platform_followers: BTreeMap<Platform, FollowerCount>,

    /// Platforms the creator is present on. Always a superset of the keys
    /// of `platform_followers`.
    pub platforms: BTreeSet<Platform>,

    /// Price of a base collaboration in the smallest currency unit.
    pub starting_price: u64,

    /// Audience overlap with the brand, 0-100.
    pub audience_match: u8,

    /// Whether the creator's identity has been verified.
    pub verified: bool,

    /// Average brand rating, 0.0-5.0.
    pub rating: f64,
}

impl CreatorRecord {
    /// Follower count recorded for `platform`, if any.
    pub fn followers_on(&self, platform: Platform) -> Option<&FollowerCount> {
        self.platform_followers.get(&platform)
    }

    /// Whether the creator is present on `platform`.
    pub fn is_on(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    /// Largest audience across the primary platforms.
    /// See [`crate::core::followers::max_reach`].
    pub fn max_reach(&self) -> f64 {
        crate::core::followers::max_reach(self)
    }

    /// Social handle derived from the display name: lower-cased with all
    /// whitespace removed, prefixed with `@`.
    pub fn handle(&self) -> String {
        let mut handle = String::with_capacity(self.name.len() + 1);
        handle.push('@');
        handle.extend(
            self.name
                .chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_lowercase),
        );
        handle
    }
}

// =============================================================================
// Category
// =============================================================================

/// Content category. Closed set; catalogue entries outside it are rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    Lifestyle,
    Tech,
    Comedy,
    Fashion,
    Fitness,
    Food,
    Beauty,
    Travel,
}

impl Category {
    /// Returns all variants in dashboard display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Lifestyle,
            Category::Tech,
            Category::Comedy,
            Category::Fashion,
            Category::Fitness,
            Category::Food,
            Category::Beauty,
            Category::Travel,
        ]
    }

    /// Human-readable label. Also the text matched by the search box.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Lifestyle => "Lifestyle",
            Category::Tech => "Tech",
            Category::Comedy => "Comedy",
            Category::Fashion => "Fashion",
            Category::Fitness => "Fitness",
            Category::Food => "Food",
            Category::Beauty => "Beauty",
            Category::Travel => "Travel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive match against the labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let valid: Vec<&str> = Category::all().iter().map(Category::label).collect();
                format!("unknown category '{s}' (expected one of: {})", valid.join(", "))
            })
    }
}

// =============================================================================
// Platform
// =============================================================================

/// Social platform. Closed set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Platform {
    Instagram,
    Twitter,
    TikTok,
    YouTube,
    LinkedIn,
}

impl Platform {
    /// Returns all variants.
    pub fn all() -> &'static [Platform] {
        &[
            Platform::Instagram,
            Platform::Twitter,
            Platform::TikTok,
            Platform::YouTube,
            Platform::LinkedIn,
        ]
    }

    /// Platforms offered as checkboxes in the dashboard filter panel.
    pub fn filterable() -> &'static [Platform] {
        Self::REACH
    }

    /// Platforms whose audiences count towards a creator's maximum reach.
    /// Twitter is deliberately absent.
    pub const REACH: &'static [Platform] = &[
        Platform::Instagram,
        Platform::TikTok,
        Platform::YouTube,
        Platform::LinkedIn,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
            Platform::LinkedIn => "LinkedIn",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Platform {
    type Err = String;

    /// Case-insensitive match against the labels; `X` is accepted for Twitter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("x") {
            return Ok(Platform::Twitter);
        }
        Platform::all()
            .iter()
            .copied()
            .find(|p| p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let valid: Vec<&str> = Platform::all().iter().map(Platform::label).collect();
                format!("unknown platform '{s}' (expected one of: {})", valid.join(", "))
            })
    }
}

// =============================================================================
// Follower Count
// =============================================================================

/// Abbreviated follower count as entered in the catalogue (`"485K"`,
/// `"1.2M"`, `"95"`). The original text is kept for display; `value()`
/// yields the absolute number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FollowerCount(String);

impl FollowerCount {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The text as written, e.g. `"1.2M"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute follower count. Never negative; malformed text yields 0.
    pub fn value(&self) -> f64 {
        crate::core::followers::parse_followers(Some(&self.0))
    }
}

impl fmt::Display for FollowerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
