//! Contract tests for the filter/sort pipeline over real entity records.

use serde_json::json;

use gymdesk_model::{Coupon, GymPlan};
use gymdesk_view::{FilterState, SortKey, derive};

fn coupons(records: serde_json::Value) -> Vec<Coupon> {
    serde_json::from_value(records).unwrap()
}

fn plans(records: serde_json::Value) -> Vec<GymPlan> {
    serde_json::from_value(records).unwrap()
}

fn ids<T: gymdesk_model::Entity>(visible: &[&T]) -> Vec<String> {
    visible.iter().map(|r| r.id().to_string()).collect()
}

#[test]
fn derive_is_deterministic() {
    let collection = coupons(json!([
        { "_id": "1", "code": "B", "createdAt": "2024-02-01T00:00:00Z" },
        { "_id": "2", "code": "A", "createdAt": "2024-01-01T00:00:00Z" },
        { "_id": "3", "code": "AB" },
    ]));
    let filters = FilterState::searching("a");

    let first = ids(&derive(&collection, &filters));
    let second = ids(&derive(&collection, &filters));
    assert_eq!(first, second);
}

#[test]
fn derive_returns_references_into_the_collection() {
    let collection = coupons(json!([
        { "_id": "1", "code": "SUMMER" },
        { "_id": "2", "code": "WINTER" },
    ]));

    let visible = derive(&collection, &FilterState::searching("summer"));
    assert_eq!(visible.len(), 1);
    // The projection borrows the record; it never clones or rebuilds it.
    assert!(std::ptr::eq(visible[0], &collection[0]));
}

#[test]
fn search_is_case_insensitive_substring_and_empty_matches_all() {
    let collection = plans(json!([
        { "_id": "1", "name": "Alpha" },
        { "_id": "2", "name": "beta" },
    ]));

    let visible = derive(&collection, &FilterState::searching("AL"));
    assert_eq!(ids(&visible), vec!["1"]);

    let all = derive(&collection, &FilterState::default());
    assert_eq!(ids(&all), vec!["1", "2"]);
}

#[test]
fn filter_applies_before_sort() {
    let collection = plans(json!([
        { "_id": "zeta", "name": "Zeta", "createdAt": "2024-01-01T00:00:00Z" },
        { "_id": "noise", "name": "Alpha", "createdAt": "2024-06-01T00:00:00Z" },
        { "_id": "zed", "name": "Zed", "createdAt": "2024-02-01T00:00:00Z" },
    ]));

    let filters = FilterState {
        search: "Z".to_string(),
        sort: SortKey::Newest,
        date: None,
    };

    // Both Z-plans match; their order reflects the sort alone, and the
    // excluded newest record has no influence.
    let visible = derive(&collection, &filters);
    assert_eq!(ids(&visible), vec!["zed", "zeta"]);
}

#[test]
fn null_dates_sort_as_epoch_oldest() {
    let collection = coupons(json!([
        { "_id": "undated", "date": null },
        { "_id": "dated", "createdAt": "2024-01-01T00:00:00Z" },
    ]));

    let visible = derive(&collection, &FilterState::sorted(SortKey::Oldest));
    assert_eq!(ids(&visible), vec!["undated", "dated"]);
}

#[test]
fn expiring_soon_sorts_lifetime_records_last() {
    let collection = plans(json!([
        { "_id": "lifetime", "name": "Forever", "endDate": null },
        { "_id": "far", "name": "Until 2099", "endDate": "2099-01-01" },
    ]));

    let visible = derive(&collection, &FilterState::sorted(SortKey::ExpiringSoon));
    assert_eq!(ids(&visible), vec!["far", "lifetime"]);
}

#[test]
fn empty_collection_always_derives_empty() {
    let collection: Vec<Coupon> = Vec::new();
    let mut filters = FilterState::searching("anything");
    filters.sort = SortKey::ExpiringSoon;

    assert!(derive(&collection, &filters).is_empty());
}

#[test]
fn sort_selector_end_to_end() {
    let collection = coupons(json!([
        { "_id": "1", "active": true, "createdAt": "2024-06-01" },
        { "_id": "2", "active": false, "createdAt": "2024-05-01" },
    ]));

    let active_first = derive(&collection, &FilterState::sorted(SortKey::ActiveFirst));
    assert_eq!(ids(&active_first), vec!["1", "2"]);

    let oldest_first = derive(&collection, &FilterState::sorted(SortKey::Oldest));
    assert_eq!(ids(&oldest_first), vec!["2", "1"]);

    let newest_first = derive(&collection, &FilterState::sorted(SortKey::Newest));
    assert_eq!(ids(&newest_first), vec!["1", "2"]);
}

#[test]
fn date_filter_matches_only_the_exact_day() {
    let collection: Vec<gymdesk_model::ClassBooking> = serde_json::from_value(json!([
        { "_id": "b1", "className": "Spin", "scheduledFor": "2024-07-15" },
        { "_id": "b2", "className": "Yoga", "scheduledFor": "2024-07-16" },
        { "_id": "b3", "className": "Box" },
    ]))
    .unwrap();

    let filters = FilterState {
        search: String::new(),
        sort: SortKey::Newest,
        date: chrono::NaiveDate::from_ymd_opt(2024, 7, 15),
    };

    // Records without a class date never match a set date filter.
    let visible = derive(&collection, &filters);
    assert_eq!(ids(&visible), vec!["b1"]);
}
