//! Showroom Core — In-memory catalog engine for a vehicle dealership.
//!
//! This crate contains all catalog logic: the vehicle store, filtering,
//! possible-purchase flagging, listing intake and inventory loading.

pub mod config;
pub mod error;
pub mod filter;
pub mod intake;
pub mod loader;
pub mod output;
pub mod session;
pub mod store;
pub mod toggle;

pub use config::{BodyType, CatalogConfig, FuelType, Transmission, Vehicle, VehicleId};
pub use error::{CatalogError, Result, ValidationError};
pub use filter::{FilterSpec, Selection};
pub use intake::VehicleSubmission;
pub use session::Session;
pub use toggle::ToggleOutcome;
