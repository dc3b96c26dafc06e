// Collably - app/state.rs
//
// Dashboard state management. Holds the creator records, the current query,
// the derived view, favourites, and the selected creator.
// Owned by whichever front end drives the dashboard (the CLI, a GUI, tests).

use crate::core::filter::{self, QueryState};
use crate::core::model::CreatorRecord;
use std::collections::BTreeSet;

/// Top-level brand dashboard state.
#[derive(Debug)]
pub struct DashboardState {
    /// All creator records for this session (never mutated).
    records: Vec<CreatorRecord>,

    /// Current query.
    query: QueryState,

    /// Indices into `records` matching `query`, in display order.
    visible: Vec<usize>,

    /// Ids of creators the brand has favourited.
    favourites: BTreeSet<u32>,

    /// Id of the creator whose profile is open, if any.
    selected: Option<u32>,
}

impl DashboardState {
    /// Create state over `records` and compute the initial view.
    pub fn new(records: Vec<CreatorRecord>, query: QueryState) -> Self {
        let mut state = Self {
            records,
            query,
            visible: Vec::new(),
            favourites: BTreeSet::new(),
            selected: None,
        };
        state.recompute();
        state
    }

    /// Apply one query transition and refresh the view.
    ///
    /// ```
    /// use collably::app::state::DashboardState;
    /// use collably::core::catalogue::load_builtin_catalogue;
    /// use collably::core::filter::QueryState;
    ///
    /// let mut dash = DashboardState::new(load_builtin_catalogue(), QueryState::default());
    /// dash.update(|q| q.with_search_text("fitness"));
    /// assert_eq!(dash.result_count(), 2);
    /// ```
    pub fn update(&mut self, transition: impl FnOnce(QueryState) -> QueryState) {
        let current = std::mem::take(&mut self.query);
        self.query = transition(current);
        self.recompute();
    }

    /// "Clear all filters".
    pub fn clear_filters(&mut self) {
        self.update(QueryState::cleared);
    }

    fn recompute(&mut self) {
        self.visible = filter::apply_query(&self.records, &self.query);

        // Close the profile if its creator is no longer listed
        if let Some(id) = self.selected {
            if !self.visible().any(|r| r.id == id) {
                self.selected = None;
            }
        }

        tracing::debug!(
            matched = self.visible.len(),
            total = self.records.len(),
            active_filters = self.query.active_filter_count(),
            sort = %self.query.sort_key,
            "Dashboard view recomputed"
        );
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Creators in display order.
    pub fn visible(&self) -> impl Iterator<Item = &CreatorRecord> + '_ {
        self.visible.iter().map(|&idx| &self.records[idx])
    }

    pub fn result_count(&self) -> usize {
        self.visible.len()
    }

    /// Status text shown above the result grid.
    pub fn status_line(&self) -> String {
        match self.visible.len() {
            0 => "No creators found. Try adjusting your filters.".to_string(),
            1 => "Showing 1 creator".to_string(),
            n => format!("Showing {n} creators"),
        }
    }

    /// Flip a creator's favourite flag. Returns the new state.
    /// Unknown ids are ignored and report `false`.
    pub fn toggle_favourite(&mut self, id: u32) -> bool {
        if !self.records.iter().any(|r| r.id == id) {
            tracing::warn!(id, "Ignoring favourite toggle for unknown creator");
            return false;
        }
        if self.favourites.remove(&id) {
            false
        } else {
            self.favourites.insert(id);
            true
        }
    }

    pub fn is_favourite(&self, id: u32) -> bool {
        self.favourites.contains(&id)
    }

    /// Favourited creators in catalogue order, regardless of the current filters.
    pub fn favourites(&self) -> impl Iterator<Item = &CreatorRecord> + '_ {
        self.records
            .iter()
            .filter(|r| self.favourites.contains(&r.id))
    }

    /// Open a creator's profile. Only creators in the current view can be
    /// selected; returns whether the selection took effect.
    pub fn select(&mut self, id: u32) -> bool {
        if self.visible().any(|r| r.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// Close the open profile; favourites and the view are unaffected.
    pub fn close_profile(&mut self) {
        self.selected = None;
    }

    /// The creator whose profile is open, if any.
    pub fn selected(&self) -> Option<&CreatorRecord> {
        let id = self.selected?;
        self.records.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalogue::load_builtin_catalogue;
    use crate::core::model::{Category, Platform};
    use crate::core::sort::SortKey;

    fn dashboard() -> DashboardState {
        DashboardState::new(load_builtin_catalogue(), QueryState::default())
    }

    #[test]
    fn test_initial_view_is_featured_order() {
        let dash = dashboard();
        // Marcus Rodriguez (2.1M on TikTok) is above the default follower band.
        assert_eq!(dash.result_count(), 13);
        assert!(dash.visible().all(|r| r.id != 2));
        let ratings: Vec<f64> = dash.visible().map(|r| r.rating).collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(dash.status_line(), "Showing 13 creators");
    }

    #[test]
    fn test_update_and_clear() {
        let mut dash = dashboard();
        dash.update(|q| {
            q.with_category_toggled(Category::Tech)
                .with_sort_key(SortKey::PriceLow)
        });
        let names: Vec<&str> = dash.visible().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Arun Krishnan", "David Chen", "Alex Kim"]);

        dash.clear_filters();
        assert_eq!(dash.query(), &QueryState::default());
        assert_eq!(dash.result_count(), 13);
    }

    #[test]
    fn test_empty_result_status() {
        let mut dash = dashboard();
        dash.update(|q| q.with_search_text("zzz"));
        assert_eq!(dash.result_count(), 0);
        assert!(dash.status_line().starts_with("No creators found"));
    }

    #[test]
    fn test_selection_dropped_when_filtered_out() {
        let mut dash = dashboard();
        assert!(dash.select(4));
        assert_eq!(dash.selected().map(|r| r.name.as_str()), Some("David Chen"));

        dash.update(|q| q.with_platform_toggled(Platform::TikTok));
        assert!(dash.selected().is_none(), "David Chen is not on TikTok");
        assert!(!dash.select(4));
    }

    #[test]
    fn test_close_profile_keeps_view_and_favourites() {
        let mut dash = dashboard();
        assert!(dash.select(4));
        assert!(dash.toggle_favourite(4));

        dash.close_profile();
        assert!(dash.selected().is_none());
        assert!(dash.is_favourite(4));
        assert_eq!(dash.result_count(), 13);
        assert!(dash.select(4), "a closed profile can be reopened");
    }

    #[test]
    fn test_favourites_survive_filtering() {
        let mut dash = dashboard();
        assert!(dash.toggle_favourite(2));
        assert!(dash.toggle_favourite(9));
        assert!(!dash.toggle_favourite(9));
        assert!(!dash.toggle_favourite(999));

        dash.update(|q| q.with_search_text("nobody"));
        let favs: Vec<u32> = dash.favourites().map(|r| r.id).collect();
        assert_eq!(favs, vec![2]);
        assert!(dash.is_favourite(2));
        assert!(!dash.is_favourite(9));
    }
}
