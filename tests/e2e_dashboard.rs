// Collably - tests/e2e_dashboard.rs
//
// End-to-end tests for the creator discovery pipeline.
//
// These tests run the real built-in catalogue and on-disk fixtures through
// catalogue loading, filtering, sorting, dashboard state, and export. No
// mocks: every record goes through the same path the CLI uses.

use collably::app::catalogue_mgr::{load_catalogue, FileCatalogue};
use collably::app::export_mgr::export_to_file;
use collably::app::state::DashboardState;
use collably::core::catalogue::{load_builtin_catalogue, CreatorSource};
use collably::core::export;
use collably::core::filter::{apply_query, filter_and_sort, QueryState};
use collably::core::followers::{max_reach, parse_followers};
use collably::core::model::{Category, CreatorRecord, FollowerCount, Platform};
use collably::core::sort::SortKey;
use collably::util::error::ExportError;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to an on-disk fixture file.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn agency_creators() -> Vec<CreatorRecord> {
    FileCatalogue::new(fixture("agency_creators.json"))
        .fetch_creators()
        .expect("fixture catalogue should load")
}

fn ids(records: &[CreatorRecord]) -> Vec<u32> {
    records.iter().map(|r| r.id).collect()
}

fn creator(id: u32, category: Category, price: u64) -> CreatorRecord {
    CreatorRecord {
        id,
        name: format!("Creator {id}"),
        descriptor: "Content creator".to_string(),
        category,
        platform_followers: BTreeMap::from([(Platform::Instagram, FollowerCount::new("150K"))]),
        platforms: BTreeSet::from([Platform::Instagram]),
        starting_price: price,
        audience_match: 90,
        verified: true,
        rating: 4.5,
    }
}

/// Clause-by-clause evaluation written independently of the engine.
fn clauses(record: &CreatorRecord, q: &QueryState) -> [bool; 5] {
    let needle = q.search_text.to_lowercase();
    let reach = max_reach(record);
    [
        needle.is_empty()
            || record.name.to_lowercase().contains(&needle)
            || record.descriptor.to_lowercase().contains(&needle)
            || record.category.label().to_lowercase().contains(&needle),
        q.selected_categories.is_empty() || q.selected_categories.contains(&record.category),
        q.price_range.min <= record.starting_price && record.starting_price <= q.price_range.max,
        q.follower_range.min as f64 <= reach && reach <= q.follower_range.max as f64,
        q.selected_platforms.is_empty()
            || q.selected_platforms.iter().any(|p| record.platforms.contains(p)),
    ]
}

/// A spread of queries touching every clause and every sort key.
fn sample_queries() -> Vec<QueryState> {
    let mut queries = Vec::new();
    for &key in SortKey::all() {
        let base = QueryState::default().with_sort_key(key);
        queries.push(base.clone());
        queries.push(base.clone().with_search_text("E"));
        queries.push(
            base.clone()
                .with_category_toggled(Category::Tech)
                .with_category_toggled(Category::Fashion),
        );
        queries.push(base.clone().with_price_range(25_000, 45_000));
        queries.push(base.clone().with_follower_range(400_000, 1_000_000));
        queries.push(base.clone().with_platform_toggled(Platform::LinkedIn));
        queries.push(
            base.with_search_text("style")
                .with_platform_toggled(Platform::TikTok)
                .with_follower_range(20_000, 2_100_000),
        );
    }
    queries
}

fn in_order(a: &CreatorRecord, b: &CreatorRecord, key: SortKey) -> bool {
    match key {
        SortKey::PriceLow => a.starting_price <= b.starting_price,
        SortKey::PriceHigh => a.starting_price >= b.starting_price,
        SortKey::Followers => max_reach(a) >= max_reach(b),
        SortKey::Audience => a.audience_match >= b.audience_match,
        SortKey::Featured => a.rating >= b.rating,
    }
}

fn same_key(a: &CreatorRecord, b: &CreatorRecord, key: SortKey) -> bool {
    match key {
        SortKey::PriceLow | SortKey::PriceHigh => a.starting_price == b.starting_price,
        SortKey::Followers => max_reach(a) == max_reach(b),
        SortKey::Audience => a.audience_match == b.audience_match,
        SortKey::Featured => a.rating == b.rating,
    }
}

// =============================================================================
// Properties over the built-in catalogue
// =============================================================================

#[test]
fn e2e_filter_and_sort_is_idempotent_and_pure() {
    let records = load_builtin_catalogue();
    let snapshot = records.clone();
    for q in sample_queries() {
        let first = filter_and_sort(&records, &q);
        let second = filter_and_sort(&records, &q);
        assert_eq!(first, second, "query {q:?}");
    }
    assert_eq!(records, snapshot, "input must not be mutated");
}

#[test]
fn e2e_filter_is_sound_and_complete() {
    let records = load_builtin_catalogue();
    for q in sample_queries() {
        let kept: BTreeSet<usize> = apply_query(&records, &q).into_iter().collect();
        for (idx, record) in records.iter().enumerate() {
            let all_pass = clauses(record, &q).iter().all(|c| *c);
            assert_eq!(
                kept.contains(&idx),
                all_pass,
                "creator {} vs query {q:?}",
                record.name
            );
        }
    }
}

#[test]
fn e2e_sort_is_monotonic_and_stable() {
    let records = load_builtin_catalogue();
    for q in sample_queries() {
        let order = apply_query(&records, &q);
        for pair in order.windows(2) {
            let (a, b) = (&records[pair[0]], &records[pair[1]]);
            assert!(
                in_order(a, b, q.sort_key),
                "{} before {} breaks {:?}",
                a.name,
                b.name,
                q.sort_key
            );
            if same_key(a, b, q.sort_key) {
                // Filtering preserves catalogue order, so ties must too.
                assert!(pair[0] < pair[1], "tie between {} and {} reordered", a.name, b.name);
            }
        }
    }
}

#[test]
fn e2e_followers_sort_uses_same_reach_as_filter() {
    let records = load_builtin_catalogue();
    let q = QueryState::default()
        .with_follower_range(20_000, 2_500_000)
        .with_sort_key(SortKey::Followers);
    let top = filter_and_sort(&records, &q);
    // Reach comes from each creator's largest platform: TikTok for the first
    // two, YouTube for David Chen.
    assert_eq!(top[0].name, "Marcus Rodriguez");
    assert_eq!(top[1].name, "Carlos Rivera");
    assert_eq!(top[2].name, "David Chen");
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn e2e_parser_concrete_values() {
    assert_eq!(parse_followers(Some("1.2M")), 1_200_000.0);
    assert_eq!(parse_followers(Some("485K")), 485_000.0);
    assert_eq!(parse_followers(None), 0.0);
    assert_eq!(parse_followers(Some("95")), 95.0);
}

#[test]
fn e2e_empty_selections_match_everything() {
    let records = load_builtin_catalogue();
    let q = QueryState::default().with_follower_range(0, 10_000_000);
    assert!(q.selected_categories.is_empty());
    assert!(q.selected_platforms.is_empty());
    assert_eq!(filter_and_sort(&records, &q).len(), records.len());
}

#[test]
fn e2e_price_band_scenario() {
    let records = vec![
        creator(1, Category::Tech, 18_000),
        creator(2, Category::Tech, 35_000),
        creator(3, Category::Tech, 75_000),
    ];
    let q = QueryState::default().with_price_range(20_000, 50_000);
    assert_eq!(ids(&filter_and_sort(&records, &q)), vec![2]);
}

#[test]
fn e2e_category_search_is_case_insensitive() {
    let records = vec![
        creator(1, Category::Fitness, 30_000),
        creator(2, Category::Food, 30_000),
        creator(3, Category::Fitness, 30_000),
        creator(4, Category::Travel, 30_000),
    ];
    for text in ["fitness", "FITNESS", "FiTnEsS"] {
        let q = QueryState::default().with_search_text(text);
        assert_eq!(ids(&filter_and_sort(&records, &q)), vec![1, 3], "search {text:?}");
    }
}

#[test]
fn e2e_linkedin_platform_scenario() {
    let records = agency_creators();
    assert_eq!(records.len(), 5);

    let q = QueryState::default().with_platform_toggled(Platform::LinkedIn);
    let mut found = ids(&filter_and_sort(&records, &q));
    found.sort_unstable();
    assert_eq!(found, vec![101, 103]);
}

#[test]
fn e2e_twitter_reach_is_ignored() {
    let records = agency_creators();
    let kavya = records.iter().find(|r| r.id == 101).unwrap();
    assert_eq!(kavya.max_reach(), 210_000.0);
    assert_eq!(
        kavya.followers_on(Platform::Twitter).map(|c| c.as_str()),
        Some("48K")
    );
}

// =============================================================================
// Dashboard session and export
// =============================================================================

#[test]
fn e2e_dashboard_session_over_user_catalogue() {
    let records = load_catalogue(Some(&fixture("agency_creators.json"))).unwrap();
    let mut dash = DashboardState::new(records, QueryState::default());
    assert_eq!(dash.status_line(), "Showing 5 creators");

    // Featured: 4.8, then the two 4.6 creators in catalogue order.
    let first_three: Vec<u32> = dash.visible().take(3).map(|r| r.id).collect();
    assert_eq!(first_three, vec![105, 101, 103]);

    dash.update(|q| q.with_category_toggled(Category::Food).with_search_text("street"));
    assert_eq!(dash.status_line(), "Showing 1 creator");
    assert!(dash.select(102));

    dash.clear_filters();
    assert_eq!(dash.result_count(), 5);
    assert_eq!(dash.selected().map(|r| r.id), Some(102));
}

#[test]
fn e2e_export_filtered_view_to_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("shortlist.csv");

    let dash = DashboardState::new(
        agency_creators(),
        QueryState::default().with_sort_key(SortKey::PriceLow),
    );
    let creators: Vec<&CreatorRecord> = dash.visible().collect();
    let file = std::fs::File::create(&out).unwrap();
    let count = export::export_csv(&creators, file, &out, 100).unwrap();
    assert_eq!(count, 5);

    let text = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[1].starts_with("102,Tom Becker,@tombecker,Food,640000,640K,26000,₹26K"));
    assert!(lines[5].starts_with("105,Mei Lin,"));
}

#[test]
fn e2e_export_over_row_cap_keeps_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("shortlist.csv");
    std::fs::write(&out, "previous export contents\n").unwrap();

    let dash = DashboardState::new(load_builtin_catalogue(), QueryState::default());
    let creators: Vec<&CreatorRecord> = dash.visible().collect();
    assert_eq!(creators.len(), 13);

    let err = export_to_file(&creators, &out, 1).unwrap_err();
    assert!(matches!(err, ExportError::TooManyRows { count: 13, max: 1 }));
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "previous export contents\n"
    );

    assert_eq!(export_to_file(&creators, &out, 100).unwrap(), 13);
    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), 14);
}
