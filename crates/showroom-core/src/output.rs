//! Derived views of a session and JSON output.

use std::collections::HashMap;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::{CatalogConfig, Vehicle};
use crate::filter::{distinct_body_types, distinct_makes, filter_vehicles, FilterSpec};
use crate::store::VehicleStore;

/// What the catalog page shows for one filter state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogView {
    pub vehicles: Vec<Vehicle>,
    /// Matches shown.
    pub showing: usize,
    /// Available vehicles before filtering.
    pub available: usize,
    pub make_options: Vec<String>,
    pub body_type_options: Vec<String>,
}

/// A single vehicle plus its flag state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleDetail {
    pub vehicle: Vehicle,
    pub flagged: bool,
}

/// The possible-purchase list and its totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlaggedSummary {
    pub vehicles: Vec<Vehicle>,
    pub count: usize,
    pub total_price: f64,
}

/// Full session state as written by `--output`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub stats: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub flagged: FlaggedSummary,
}

fn default_version() -> String {
    "1.0".to_string()
}

pub fn build_catalog_view(
    store: &VehicleStore,
    spec: &FilterSpec,
    config: &CatalogConfig,
) -> CatalogView {
    let available = store.list_available();
    let matches = filter_vehicles(available.iter().copied(), spec);
    CatalogView {
        showing: matches.len(),
        available: available.len(),
        make_options: distinct_makes(available.iter().copied(), &config.wildcard_label),
        body_type_options: distinct_body_types(available.iter().copied(), &config.wildcard_label),
        vehicles: matches.into_iter().cloned().collect(),
    }
}

pub fn build_flagged_summary(store: &VehicleStore) -> FlaggedSummary {
    let flagged = store.list_flagged();
    FlaggedSummary {
        count: flagged.len(),
        total_price: flagged.iter().map(|v| v.price).sum(),
        vehicles: flagged.into_iter().cloned().collect(),
    }
}

pub fn build_snapshot(store: &VehicleStore) -> CatalogSnapshot {
    let flagged = build_flagged_summary(store);

    let mut metadata = HashMap::new();
    metadata.insert(
        "generated_at".to_string(),
        serde_json::Value::String(Utc::now().to_rfc3339()),
    );
    metadata.insert(
        "showroom_version".to_string(),
        serde_json::Value::String(env!("CARGO_PKG_VERSION").to_string()),
    );

    let mut stats = HashMap::new();
    stats.insert("vehicles".to_string(), serde_json::json!(store.len()));
    stats.insert(
        "available".to_string(),
        serde_json::json!(store.len() - flagged.count),
    );
    stats.insert("flagged".to_string(), serde_json::json!(flagged.count));
    stats.insert(
        "flagged_total_price".to_string(),
        serde_json::json!(flagged.total_price),
    );

    CatalogSnapshot {
        version: default_version(),
        metadata,
        stats,
        vehicles: store.list_all().to_vec(),
        flagged,
    }
}

/// Write a snapshot as pretty-printed JSON, creating parent directories.
pub fn write_output(snapshot: &CatalogSnapshot, output_path: &str) -> std::io::Result<()> {
    if let Some(parent) = Path::new(output_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(snapshot).map_err(std::io::Error::other)?;
    std::fs::write(output_path, json)
}
