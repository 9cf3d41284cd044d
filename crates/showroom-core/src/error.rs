//! Error types for catalog operations.

use thiserror::Error;

use crate::config::VehicleId;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Why a vehicle submission was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("please fill in all required fields (missing: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("year {year} is outside the accepted range {min}-{max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("{value:?} is not a valid {field}")]
    UnknownOption { field: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("vehicle {0} not found")]
    NotFound(VehicleId),

    #[error("vehicle id {0} is already in use")]
    DuplicateId(VehicleId),

    #[error("no fresh vehicle id left above {0}")]
    IdSpaceExhausted(VehicleId),

    #[error("inventory record {id} is invalid: {source}")]
    InvalidRecord {
        id: VehicleId,
        source: ValidationError,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid submission: {0}")]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
