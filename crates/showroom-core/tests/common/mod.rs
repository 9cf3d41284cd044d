//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use showroom_core::config::{CatalogConfig, Vehicle, VehicleId};
use showroom_core::intake::VehicleSubmission;
use showroom_core::Session;

// ---------------------------------------------------------------------------
// Fixture path resolution
// ---------------------------------------------------------------------------

/// Resolve `tests/fixtures/{name}` relative to the workspace root.
pub fn fixture_path(name: &str) -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir)
        .join("../../tests/fixtures")
        .join(name)
}

// ---------------------------------------------------------------------------
// Session builders
// ---------------------------------------------------------------------------

/// Load a fixture inventory into a fresh session with default config.
pub fn load_session(fixture_name: &str) -> Session {
    Session::load(fixture_path(fixture_name), CatalogConfig::default())
        .expect("Failed to load fixture inventory")
}

/// The two-vehicle Toyota/Kia store used by the catalog scenarios.
pub fn scenario_session() -> Session {
    load_session("scenario.json")
}

/// A submission with only the required fields filled in.
pub fn required_only_submission() -> VehicleSubmission {
    VehicleSubmission {
        make: "Honda".to_string(),
        model: "Civic".to_string(),
        year: "2022".to_string(),
        price: "18500000".to_string(),
        color: "Silver".to_string(),
        description: "Well kept".to_string(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Extractors
// ---------------------------------------------------------------------------

pub fn ids<'a>(vehicles: impl IntoIterator<Item = &'a Vehicle>) -> Vec<u64> {
    vehicles.into_iter().map(|v| v.id.get()).collect()
}

pub fn all_ids(session: &Session) -> Vec<u64> {
    ids(session.store().list_all())
}

pub fn available_ids(session: &Session) -> Vec<u64> {
    ids(session.store().list_available())
}

pub fn vid(raw: u64) -> VehicleId {
    VehicleId(raw)
}
