//! Vehicle intake: validate a raw form submission into a canonical record.
//!
//! "Absent" means an empty or whitespace-only string. An explicit `0` is a
//! real value, never a missing one.

use chrono::Utc;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::{BodyType, CatalogConfig, FuelType, Transmission, Vehicle, VehicleId};
use crate::error::{self, CatalogError, ValidationError};
use crate::store::VehicleStore;

/// Raw form input for a new listing. Every field is the text the user typed
/// or selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleSubmission {
    pub make: String,
    pub model: String,
    pub year: String,
    pub price: String,
    pub odometer: String,
    pub body_type: String,
    pub color: String,
    pub transmission: String,
    pub fuel_type: String,
    pub image: String,
    pub description: String,
}

impl VehicleSubmission {
    /// Required fields that are absent, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("make", &self.make),
            ("model", &self.model),
            ("year", &self.year),
            ("price", &self.price),
            ("color", &self.color),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| is_absent(value))
        .map(|(name, _)| name)
        .collect()
    }
}

fn is_absent(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate `submission` and build a vehicle with a fresh id.
///
/// The store is only read, to pick an id that cannot collide. The caller
/// appends the result.
pub fn accept(
    submission: &VehicleSubmission,
    store: &VehicleStore,
    config: &CatalogConfig,
) -> error::Result<Vehicle> {
    let now_millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    accept_at(submission, store, config, now_millis)
}

/// Same as [`accept`] with an explicit clock reading.
pub fn accept_at(
    submission: &VehicleSubmission,
    store: &VehicleStore,
    config: &CatalogConfig,
    now_millis: u64,
) -> error::Result<Vehicle> {
    let id = next_id(store, now_millis)?;
    build_vehicle(submission, config, id).map_err(|e| {
        warn!("rejected vehicle submission: {e}");
        CatalogError::from(e)
    })
}

/// Timestamp-based id, bumped past anything the store has already issued.
pub fn next_id(store: &VehicleStore, now_millis: u64) -> error::Result<VehicleId> {
    let floor = match store.max_issued_id() {
        Some(max) => max
            .get()
            .checked_add(1)
            .ok_or(CatalogError::IdSpaceExhausted(max))?,
        None => 0,
    };
    Ok(VehicleId(now_millis.max(floor)))
}

fn build_vehicle(
    s: &VehicleSubmission,
    config: &CatalogConfig,
    id: VehicleId,
) -> Result<Vehicle, ValidationError> {
    let missing = s.missing_fields();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let year = parse_year(&s.year, config)?;
    let price = parse_price(&s.price)?;
    let odometer = parse_odometer(&s.odometer)?;

    let body_type = parse_option(&s.body_type, "body type", BodyType::from_str_value)?;
    let transmission = parse_option(&s.transmission, "transmission", Transmission::from_str_value)?;
    let fuel_type = parse_option(&s.fuel_type, "fuel type", FuelType::from_str_value)?;

    let image = if is_absent(&s.image) {
        config.placeholder_image.clone()
    } else {
        s.image.trim().to_string()
    };

    Ok(Vehicle {
        id,
        make: s.make.trim().to_string(),
        model: s.model.trim().to_string(),
        year,
        price,
        odometer,
        body_type,
        color: s.color.trim().to_string(),
        transmission,
        fuel_type,
        image,
        description: s.description.trim().to_string(),
    })
}

/// Rules every stored vehicle satisfies, whether it came from a form or
/// from the bulk inventory.
pub fn check_vehicle(vehicle: &Vehicle, config: &CatalogConfig) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = [("make", &vehicle.make), ("model", &vehicle.model)]
        .into_iter()
        .filter(|(_, value)| is_absent(value))
        .map(|(name, _)| name)
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }
    check_year(vehicle.year, config)?;
    check_price(vehicle.price, &vehicle.price.to_string())?;
    Ok(())
}

fn check_year(year: i32, config: &CatalogConfig) -> Result<i32, ValidationError> {
    if !config.year_range().contains(&year) {
        return Err(ValidationError::YearOutOfRange {
            year,
            min: config.min_year,
            max: config.max_year,
        });
    }
    Ok(year)
}

fn check_price(price: f64, raw: &str) -> Result<f64, ValidationError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(ValidationError::InvalidNumber {
            field: "price",
            value: raw.to_string(),
        })
    }
}

fn parse_year(raw: &str, config: &CatalogConfig) -> Result<i32, ValidationError> {
    let raw = raw.trim();
    let year: i32 = raw.parse().map_err(|_| ValidationError::InvalidNumber {
        field: "year",
        value: raw.to_string(),
    })?;
    check_year(year, config)
}

fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    let price = raw.parse::<f64>().map_err(|_| ValidationError::InvalidNumber {
        field: "price",
        value: raw.to_string(),
    })?;
    check_price(price, raw)
}

/// Blank or non-numeric readings default to 0. Fractional readings keep
/// their whole part; negative or non-finite ones are rejected.
fn parse_odometer(raw: &str) -> Result<u64, ValidationError> {
    let raw = raw.trim();
    let Ok(reading) = raw.parse::<f64>() else {
        return Ok(0);
    };
    if !reading.is_finite() || reading < 0.0 || reading >= u64::MAX as f64 {
        return Err(ValidationError::InvalidNumber {
            field: "odometer",
            value: raw.to_string(),
        });
    }
    Ok(reading.trunc() as u64)
}

fn parse_option<T: Default>(
    raw: &str,
    field: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(T::default());
    }
    parse(raw).ok_or_else(|| ValidationError::UnknownOption {
        field,
        value: raw.to_string(),
    })
}
