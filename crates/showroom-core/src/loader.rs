//! Initial bulk load of the static inventory file.

use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::config::{BodyType, CatalogConfig, FuelType, Transmission, Vehicle, VehicleId};
use crate::error::{CatalogError, Result};
use crate::intake::check_vehicle;
use crate::store::VehicleStore;

/// One record as it appears in an inventory file. Accepts both the English
/// field names and the legacy ones.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryRecord {
    pub id: VehicleId,
    #[serde(alias = "marca")]
    pub make: String,
    #[serde(alias = "modelo")]
    pub model: String,
    #[serde(alias = "año", alias = "anio")]
    pub year: i32,
    #[serde(alias = "precio")]
    pub price: f64,
    #[serde(default, alias = "kilometraje")]
    pub odometer: Option<u64>,
    #[serde(default, alias = "tipo")]
    pub body_type: BodyType,
    #[serde(default)]
    pub color: String,
    #[serde(default, alias = "transmision")]
    pub transmission: Transmission,
    #[serde(default, alias = "combustible")]
    pub fuel_type: FuelType,
    #[serde(default, alias = "imagen")]
    pub image: Option<String>,
    #[serde(default, alias = "descripcion")]
    pub description: String,
}

impl InventoryRecord {
    /// Normalize into a canonical vehicle, filling the documented defaults.
    /// Records that break the intake rules are rejected.
    pub fn into_vehicle(self, config: &CatalogConfig) -> Result<Vehicle> {
        let image = self
            .image
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| config.placeholder_image.clone());
        let vehicle = Vehicle {
            id: self.id,
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            year: self.year,
            price: self.price,
            odometer: self.odometer.unwrap_or(0),
            body_type: self.body_type,
            color: self.color,
            transmission: self.transmission,
            fuel_type: self.fuel_type,
            image,
            description: self.description,
        };
        check_record(&vehicle, config)?;
        Ok(vehicle)
    }
}

fn check_record(vehicle: &Vehicle, config: &CatalogConfig) -> Result<()> {
    check_vehicle(vehicle, config).map_err(|source| CatalogError::InvalidRecord {
        id: vehicle.id,
        source,
    })
}

/// Parse an inventory JSON array into normalized vehicles, in file order.
pub fn parse_inventory(json: &str, config: &CatalogConfig) -> Result<Vec<Vehicle>> {
    let records: Vec<InventoryRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .map(|r| r.into_vehicle(config))
        .collect()
}

/// Read and parse an inventory file.
pub fn load_inventory(path: impl AsRef<Path>, config: &CatalogConfig) -> Result<Vec<Vehicle>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let vehicles = parse_inventory(&raw, config)?;
    info!("loaded {} vehicles from {}", vehicles.len(), path.display());
    Ok(vehicles)
}

/// Append vehicles to the store in order. Stops at the first invalid record
/// or duplicate id.
pub fn populate(
    store: &mut VehicleStore,
    vehicles: Vec<Vehicle>,
    config: &CatalogConfig,
) -> Result<usize> {
    let count = vehicles.len();
    for vehicle in vehicles {
        if let Err(e) = check_record(&vehicle, config).and_then(|()| store.append(vehicle)) {
            warn!("inventory load aborted: {e}");
            return Err(e);
        }
    }
    Ok(count)
}
