// Collably - core/filter.rs
//
// Composable filter engine for the creator dashboard.
// All active filters are AND-combined; the surviving creators are then
// ordered by the query's sort key.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::followers::max_reach;
use crate::core::model::{Category, CreatorRecord, Platform};
use crate::core::sort::{self, SortKey};
use crate::util::constants;
use std::collections::BTreeSet;

/// Closed interval `[min, max]`. Constructors keep `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: u64,
    pub max: u64,
}

impl ValueRange {
    /// Build a range from two slider handles in either order.
    pub fn new(a: u64, b: u64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: u64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Inclusive on both ends, for derived metrics such as maximum reach.
    pub fn contains_f64(&self, value: f64) -> bool {
        self.min as f64 <= value && value <= self.max as f64
    }

    /// Default price band (the full price slider).
    pub fn default_price() -> Self {
        Self::new(constants::PRICE_SLIDER_MIN, constants::PRICE_SLIDER_MAX)
    }

    /// Default follower band (the full follower slider).
    pub fn default_followers() -> Self {
        Self::new(
            constants::FOLLOWER_SLIDER_MIN,
            constants::FOLLOWER_SLIDER_MAX,
        )
    }
}

/// Complete dashboard query. All filter fields are AND-combined when applied.
///
/// Treated as an immutable value: every `with_*` transition consumes the
/// state and returns the updated one, so a view can hold exactly one current
/// query and swap it atomically on each user action.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    /// Substring search over name, descriptor, and category (case-insensitive).
    /// Empty = no filter.
    pub search_text: String,

    /// Categories to include (empty = all).
    pub selected_categories: BTreeSet<Category>,

    /// Inclusive starting-price band.
    pub price_range: ValueRange,

    /// Inclusive band over maximum reach.
    pub follower_range: ValueRange,

    /// Creators present on ANY of these platforms are included (empty = all).
    pub selected_platforms: BTreeSet<Platform>,

    /// Result ordering.
    pub sort_key: SortKey,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            selected_categories: BTreeSet::new(),
            price_range: ValueRange::default_price(),
            follower_range: ValueRange::default_followers(),
            selected_platforms: BTreeSet::new(),
            sort_key: SortKey::default(),
        }
    }
}

impl QueryState {
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Flip a category checkbox.
    pub fn with_category_toggled(mut self, category: Category) -> Self {
        if !self.selected_categories.remove(&category) {
            self.selected_categories.insert(category);
        }
        self
    }

    /// Set a category checkbox to an explicit state.
    pub fn with_category_set(mut self, category: Category, checked: bool) -> Self {
        if checked {
            self.selected_categories.insert(category);
        } else {
            self.selected_categories.remove(&category);
        }
        self
    }

    /// Flip a platform checkbox.
    pub fn with_platform_toggled(mut self, platform: Platform) -> Self {
        if !self.selected_platforms.remove(&platform) {
            self.selected_platforms.insert(platform);
        }
        self
    }

    /// Set a platform checkbox to an explicit state.
    pub fn with_platform_set(mut self, platform: Platform, checked: bool) -> Self {
        if checked {
            self.selected_platforms.insert(platform);
        } else {
            self.selected_platforms.remove(&platform);
        }
        self
    }

    /// Handles may arrive in either order.
    pub fn with_price_range(mut self, a: u64, b: u64) -> Self {
        self.price_range = ValueRange::new(a, b);
        self
    }

    /// Handles may arrive in either order.
    pub fn with_follower_range(mut self, a: u64, b: u64) -> Self {
        self.follower_range = ValueRange::new(a, b);
        self
    }

    pub fn with_sort_key(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    /// "Clear all filters": every field back to its default, sort included.
    pub fn cleared(self) -> Self {
        Self::default()
    }

    /// Returns true if no filter narrows the result (sort order is ignored).
    pub fn is_unfiltered(&self) -> bool {
        self.active_filter_count() == 0
    }

    /// Number of filter clauses that currently narrow the result set.
    pub fn active_filter_count(&self) -> usize {
        [
            !self.search_text.is_empty(),
            !self.selected_categories.is_empty(),
            self.price_range != ValueRange::default_price(),
            self.follower_range != ValueRange::default_followers(),
            !self.selected_platforms.is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// Apply the query to `records`, returning indices of matching records in
/// display order.
///
/// Returns a Vec of indices into the original slice. This avoids copying
/// records and lets a view keep per-record state (favourites, selection)
/// keyed by position.
pub fn apply_query(records: &[CreatorRecord], query: &QueryState) -> Vec<usize> {
    let search_lower = query.search_text.to_lowercase();

    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_all(record, query, &search_lower))
        .map(|(idx, _)| idx)
        .collect();

    sort::sort_indices(records, &mut indices, query.sort_key);
    indices
}

/// Filter and order `records`, returning a new list. The input is untouched.
pub fn filter_and_sort(records: &[CreatorRecord], query: &QueryState) -> Vec<CreatorRecord> {
    apply_query(records, query)
        .into_iter()
        .map(|idx| records[idx].clone())
        .collect()
}

/// Check if a single record satisfies every active clause of `query`.
pub fn matches(record: &CreatorRecord, query: &QueryState) -> bool {
    matches_all(record, query, &query.search_text.to_lowercase())
}

fn matches_all(record: &CreatorRecord, query: &QueryState, search_lower: &str) -> bool {
    // Text search (case-insensitive substring)
    if !search_lower.is_empty()
        && !record.name.to_lowercase().contains(search_lower)
        && !record.descriptor.to_lowercase().contains(search_lower)
        && !record.category.label().to_lowercase().contains(search_lower)
    {
        return false;
    }

    // Category filter
    if !query.selected_categories.is_empty()
        && !query.selected_categories.contains(&record.category)
    {
        return false;
    }

    // Price band
    if !query.price_range.contains(record.starting_price) {
        return false;
    }

    // Follower band, over the derived maximum reach
    if !query.follower_range.contains_f64(max_reach(record)) {
        return false;
    }

    // Platform filter: any shared platform is enough
    if !query.selected_platforms.is_empty()
        && !query.selected_platforms.iter().any(|&p| record.is_on(p))
    {
        return false;
    }

    true
}
