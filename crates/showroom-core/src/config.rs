//! Core data types and configuration for a Showroom catalog session.

use std::path::Path;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Unique identifier of a vehicle within a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct VehicleId(pub u64);

impl VehicleId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for VehicleId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body style of a vehicle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BodyType {
    #[default]
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    #[serde(alias = "Camioneta")]
    Pickup,
    #[serde(alias = "Deportivo")]
    Sports,
    Hatchback,
    Convertible,
}

impl BodyType {
    pub const ALL: [BodyType; 6] = [
        Self::Sedan,
        Self::Suv,
        Self::Pickup,
        Self::Sports,
        Self::Hatchback,
        Self::Convertible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sedan => "Sedan",
            Self::Suv => "SUV",
            Self::Pickup => "Pickup",
            Self::Sports => "Sports",
            Self::Hatchback => "Hatchback",
            Self::Convertible => "Convertible",
        }
    }

    /// Parse from a form label. Accepts the legacy inventory labels as well.
    pub fn from_str_value(s: &str) -> Option<Self> {
        match s {
            "Sedan" => Some(Self::Sedan),
            "SUV" => Some(Self::Suv),
            "Pickup" | "Camioneta" => Some(Self::Pickup),
            "Sports" | "Deportivo" => Some(Self::Sports),
            "Hatchback" => Some(Self::Hatchback),
            "Convertible" => Some(Self::Convertible),
            _ => None,
        }
    }
}

impl std::fmt::Display for BodyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gearbox kind.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Transmission {
    #[default]
    #[serde(alias = "Automática", alias = "Automatica")]
    Automatic,
    Manual,
}

impl Transmission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Automatic => "Automatic",
            Self::Manual => "Manual",
        }
    }

    pub fn from_str_value(s: &str) -> Option<Self> {
        match s {
            "Automatic" | "Automática" | "Automatica" => Some(Self::Automatic),
            "Manual" => Some(Self::Manual),
            _ => None,
        }
    }
}

impl std::fmt::Display for Transmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fuel / drivetrain energy source.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FuelType {
    #[default]
    #[serde(alias = "Gasolina")]
    Gasoline,
    #[serde(alias = "Diésel")]
    Diesel,
    #[serde(alias = "Eléctrico", alias = "Electrico")]
    Electric,
    #[serde(alias = "Híbrido", alias = "Hibrido")]
    Hybrid,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gasoline => "Gasoline",
            Self::Diesel => "Diesel",
            Self::Electric => "Electric",
            Self::Hybrid => "Hybrid",
        }
    }

    pub fn from_str_value(s: &str) -> Option<Self> {
        match s {
            "Gasoline" | "Gasolina" => Some(Self::Gasoline),
            "Diesel" | "Diésel" => Some(Self::Diesel),
            "Electric" | "Eléctrico" | "Electrico" => Some(Self::Electric),
            "Hybrid" | "Híbrido" | "Hibrido" => Some(Self::Hybrid),
            _ => None,
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inventory item. Immutable once it is in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    #[serde(default)]
    pub odometer: u64,
    #[serde(default)]
    pub body_type: BodyType,
    pub color: String,
    #[serde(default)]
    pub transmission: Transmission,
    #[serde(default)]
    pub fuel_type: FuelType,
    pub image: String,
    pub description: String,
}

impl Vehicle {
    /// "Make Model" label used by listings and detail headers.
    pub fn title(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1494976388531-d1058494cdd8?w=500";

/// Configuration for a catalog session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Image used when a listing has none.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    /// Sentinel that heads the make and body-type option lists.
    #[serde(default = "default_wildcard_label")]
    pub wildcard_label: String,
    #[serde(default = "default_min_year")]
    pub min_year: i32,
    #[serde(default = "default_max_year")]
    pub max_year: i32,
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}
fn default_wildcard_label() -> String {
    "All".to_string()
}
fn default_min_year() -> i32 {
    1900
}
fn default_max_year() -> i32 {
    // Dealers list next year's models ahead of the calendar.
    Utc::now().year() + 1
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
            wildcard_label: default_wildcard_label(),
            min_year: default_min_year(),
            max_year: default_max_year(),
        }
    }
}

impl CatalogConfig {
    /// Read a JSON config file. Missing keys fall back to their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The wildcard must not shadow a body-type label, or that body type
    /// could never be selected.
    pub fn validate(&self) -> Result<()> {
        let label = self.wildcard_label.trim();
        if label.is_empty() {
            return Err(CatalogError::InvalidConfig(
                "wildcard_label must not be blank".to_string(),
            ));
        }
        if BodyType::from_str_value(label).is_some() {
            return Err(CatalogError::InvalidConfig(format!(
                "wildcard_label {label:?} collides with a body type"
            )));
        }
        if self.min_year > self.max_year {
            return Err(CatalogError::InvalidConfig(format!(
                "min_year {} is after max_year {}",
                self.min_year, self.max_year
            )));
        }
        Ok(())
    }

    pub fn year_range(&self) -> std::ops::RangeInclusive<i32> {
        self.min_year..=self.max_year
    }
}
