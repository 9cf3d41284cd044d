//! Purchase-intent toggle integration tests.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use showroom_core::ToggleOutcome;

#[test]
fn flag_hides_from_available_only() {
    let mut s = scenario_session();
    assert_eq!(s.toggle(vid(2)).unwrap(), ToggleOutcome::Flagged);
    assert_eq!(available_ids(&s), vec![1]);
    assert_eq!(all_ids(&s), vec![1, 2]);
    assert_eq!(s.flagged().total_price, 9_000_000.0);
}

#[test]
fn unflag_restores_insertion_order() {
    let mut s = scenario_session();
    s.toggle(vid(2)).unwrap();
    assert_eq!(s.toggle(vid(2)).unwrap(), ToggleOutcome::Unflagged);
    assert_eq!(available_ids(&s), vec![1, 2]);
    assert_eq!(s.flagged().count, 0);
}

#[test]
fn available_is_exactly_the_unflagged_set() {
    let mut s = load_session("inventory.json");
    for id in [2, 5, 6, 5] {
        s.toggle(vid(id)).unwrap();
    }
    for v in s.store().list_all() {
        let in_available = s.store().list_available().iter().any(|a| a.id == v.id);
        assert_eq!(in_available, !s.store().is_flagged(v.id), "vehicle {}", v.id);
    }
    assert_eq!(available_ids(&s), vec![1, 3, 4, 5]);
}

#[test]
fn toggle_order_does_not_matter() {
    let mut a = load_session("inventory.json");
    let mut b = load_session("inventory.json");
    for id in [1, 3, 4] {
        a.toggle(vid(id)).unwrap();
    }
    for id in [4, 1, 3] {
        b.toggle(vid(id)).unwrap();
    }
    assert_eq!(available_ids(&a), available_ids(&b));
}

#[test]
fn derived_views_follow_each_toggle() {
    let mut s = load_session("inventory.json");
    s.toggle(vid(1)).unwrap();
    s.toggle(vid(3)).unwrap();
    let summary = s.flagged();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.total_price, 23_750_000.0 + 45_990_000.0);
    assert_eq!(s.catalog(&Default::default()).available, 4);

    s.toggle(vid(1)).unwrap();
    assert_eq!(s.flagged().total_price, 45_990_000.0);
    assert_eq!(s.catalog(&Default::default()).available, 5);
}

#[test]
fn unknown_id_leaves_state_untouched() {
    let mut s = scenario_session();
    assert!(s.toggle(vid(99)).unwrap_err().is_not_found());
    assert_eq!(s.flagged_count(), 0);
}
