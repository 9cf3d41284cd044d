//! Vehicle store integration tests against fixture inventories.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use showroom_core::config::{BodyType, FuelType, Transmission, DEFAULT_PLACEHOLDER_IMAGE};
use showroom_core::{CatalogConfig, CatalogError, Session, ValidationError};

#[test]
fn list_all_preserves_file_order() {
    let s = load_session("inventory.json");
    assert_eq!(all_ids(&s), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(available_ids(&s), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn legacy_inventory_is_normalized() {
    let s = load_session("inventory.json");
    let ranger = s.store().find_by_id(vid(2)).unwrap();
    assert_eq!(ranger.body_type, BodyType::Pickup);
    assert_eq!(ranger.transmission, Transmission::Manual);
    assert_eq!(ranger.fuel_type, FuelType::Diesel);

    let mx5 = s.store().find_by_id(vid(4)).unwrap();
    assert_eq!(mx5.image, DEFAULT_PLACEHOLDER_IMAGE, "blank image gets the placeholder");

    let rav4 = s.store().find_by_id(vid(5)).unwrap();
    assert_eq!(rav4.odometer, 0, "missing odometer defaults to 0");
    assert_eq!(rav4.fuel_type, FuelType::Hybrid);

    let porsche = s.store().find_by_id(vid(6)).unwrap();
    assert_eq!(porsche.body_type, BodyType::Sports);
}

#[test]
fn find_by_id_succeeds_for_every_listed_id() {
    let s = load_session("inventory.json");
    for v in s.store().list_available() {
        assert_eq!(s.store().find_by_id(v.id).unwrap().id, v.id);
    }
}

#[test]
fn find_missing_id_is_not_found() {
    let s = scenario_session();
    let err = s.store().find_by_id(vid(99)).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(id) if id == vid(99)));
}

#[test]
fn duplicate_ids_reject_the_load() {
    let err = Session::load(fixture_path("duplicate_ids.json"), CatalogConfig::default())
        .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(id) if id == vid(7)));
}

#[test]
fn missing_inventory_file_is_io_error() {
    let err = Session::load(fixture_path("nope.json"), CatalogConfig::default()).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn append_leaves_flags_alone() {
    let mut s = scenario_session();
    s.toggle(vid(2)).unwrap();
    let added = s.submit(&required_only_submission()).unwrap();
    assert_eq!(s.store().len(), 3);
    assert_eq!(s.flagged_count(), 1);
    assert!(!s.store().is_flagged(added.id));
    assert_eq!(all_ids(&s).last().copied(), Some(added.id.get()));
}

#[test]
fn invalid_records_reject_the_load() {
    let err = Session::load(fixture_path("invalid_record.json"), CatalogConfig::default())
        .unwrap_err();
    match err {
        CatalogError::InvalidRecord { id, source } => {
            assert_eq!(id, vid(2));
            assert_eq!(source, ValidationError::MissingFields(vec!["make"]));
        }
        other => panic!("expected an invalid record, got {other:?}"),
    }
}

#[test]
fn prebuilt_inventory_is_checked_too() {
    let mut vehicles = load_session("scenario.json").store().list_all().to_vec();
    vehicles[1].year = 1200;
    let err = Session::with_inventory(CatalogConfig::default(), vehicles).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidRecord { id, source: ValidationError::YearOutOfRange { .. } } if id == vid(2)
    ));
}
