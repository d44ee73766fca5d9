// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_lot, create_test_lots};
use crate::{LotFilter, LotListState, PAGE_SIZE};
use lotlytics_domain::{Lot, OccupancyLevel, classify};
use std::str::FromStr;

/// A mixed list: ids 1-3 low, 4-5 medium, 6-7 high.
fn create_mixed_lots() -> Vec<Lot> {
    vec![
        create_test_lot(1, 0, 100),
        create_test_lot(2, 10, 100),
        create_test_lot(3, 33, 100),
        create_test_lot(4, 34, 100),
        create_test_lot(5, 65, 100),
        create_test_lot(6, 66, 100),
        create_test_lot(7, 100, 100),
    ]
}

#[test]
fn test_new_list_is_empty_on_page_one() {
    let list: LotListState = LotListState::new();
    assert!(list.lots().is_empty());
    assert_eq!(list.filter(), LotFilter::All);
    assert_eq!(list.current_page(), 1);
    assert_eq!(list.page_count(), 0);
    assert!(list.visible_lots().is_empty());
}

#[test]
fn test_default_list_matches_new_and_starts_on_page_one() {
    let list: LotListState = LotListState::default();
    assert_eq!(list, LotListState::new());
    assert_eq!(list.current_page(), 1);
    assert!(list.visible_lots().is_empty());
}

#[test]
fn test_set_lots_resets_page_but_keeps_filter() {
    let mut list: LotListState = LotListState::new();
    list.set_lots(create_test_lots(14));
    list.set_filter(LotFilter::Level(OccupancyLevel::Low));
    list.set_page(2);

    list.set_lots(create_test_lots(8));
    assert_eq!(list.current_page(), 1);
    assert_eq!(list.filter(), LotFilter::Level(OccupancyLevel::Low));
    assert_eq!(list.lots().len(), 8);
}

#[test]
fn test_clear_lots_resets_page() {
    let mut list: LotListState = LotListState::new();
    list.set_lots(create_test_lots(14));
    list.set_page(3);

    list.clear_lots();
    assert!(list.lots().is_empty());
    assert_eq!(list.current_page(), 1);
}

#[test]
fn test_set_filter_resets_page() {
    let mut list: LotListState = LotListState::new();
    list.set_lots(create_test_lots(14));
    list.set_page(2);

    list.set_filter(LotFilter::Level(OccupancyLevel::Low));
    assert_eq!(list.current_page(), 1);
}

#[test]
fn test_fourteen_lots_paginate_into_three_pages() {
    let mut list: LotListState = LotListState::new();
    list.set_lots(create_test_lots(14));

    assert_eq!(list.page_count(), 3);
    assert_eq!(list.visible_lots().len(), 6);

    list.set_page(3);
    assert_eq!(list.visible_lots().len(), 2);
}

#[test]
fn test_visible_lots_never_exceed_page_size() {
    let mut list: LotListState = LotListState::new();
    list.set_lots(create_test_lots(40));

    for page in 1..=list.page_count() {
        list.set_page(page);
        assert!(list.visible_lots().len() <= PAGE_SIZE);
    }
}

#[test]
fn test_page_requests_clamp_to_bounds() {
    let mut list: LotListState = LotListState::new();
    list.set_lots(create_test_lots(14));

    list.previous_page();
    assert_eq!(list.current_page(), 1);

    list.set_page(99);
    assert_eq!(list.current_page(), 3);

    list.next_page();
    assert_eq!(list.current_page(), 3);

    list.previous_page();
    assert_eq!(list.current_page(), 2);
}

#[test]
fn test_page_requests_on_empty_list_stay_on_page_one() {
    let mut list: LotListState = LotListState::new();
    list.next_page();
    assert_eq!(list.current_page(), 1);
    list.set_page(5);
    assert_eq!(list.current_page(), 1);
}

#[test]
fn test_filtering_is_an_order_preserving_subsequence() {
    let mut list: LotListState = LotListState::new();
    list.set_lots(create_mixed_lots());
    list.set_filter(LotFilter::Level(OccupancyLevel::Medium));

    let filtered: Vec<i64> = list.filtered_lots().iter().map(|lot| lot.id).collect();
    assert_eq!(filtered, vec![4, 5]);

    for lot in list.filtered_lots() {
        assert_eq!(
            classify(lot.current_volume, lot.capacity).level,
            OccupancyLevel::Medium
        );
    }
}

#[test]
fn test_all_filter_returns_every_lot() {
    let mut list: LotListState = LotListState::new();
    list.set_lots(create_mixed_lots());
    assert_eq!(list.filtered_lots().len(), 7);
}

#[test]
fn test_filter_change_shrinks_page_count() {
    let mut list: LotListState = LotListState::new();
    list.set_lots(create_mixed_lots());
    assert_eq!(list.page_count(), 2);

    list.set_filter(LotFilter::Level(OccupancyLevel::High));
    assert_eq!(list.page_count(), 1);
    assert_eq!(list.current_page(), 1);
    assert_eq!(list.visible_lots().len(), 2);
}

#[test]
fn test_filter_with_no_matches_is_empty() {
    let mut list: LotListState = LotListState::new();
    list.set_lots(create_test_lots(3));
    list.set_filter(LotFilter::Level(OccupancyLevel::High));
    assert!(list.filtered_lots().is_empty());
    assert_eq!(list.page_count(), 0);
    assert_eq!(list.current_page(), 1);
}

#[test]
fn test_filter_parses_from_strings() {
    assert_eq!(LotFilter::from_str("all").unwrap(), LotFilter::All);
    assert_eq!(
        LotFilter::from_str("medium").unwrap(),
        LotFilter::Level(OccupancyLevel::Medium)
    );
    assert!(LotFilter::from_str("empty").is_err());
}
