//! Ordered vehicle collection with an id index and the flagged-id set.

use std::collections::HashMap;

use log::debug;

use crate::config::{Vehicle, VehicleId};
use crate::error::{CatalogError, Result};
use crate::store::flagged_set::FlaggedSet;

/// Authoritative in-memory inventory for one session.
///
/// - `vehicles`: insertion-ordered records
/// - `index`: id → position in `vehicles`
/// - `flagged`: ids marked as possible purchases
#[derive(Debug, Default)]
pub struct VehicleStore {
    vehicles: Vec<Vehicle>,
    index: HashMap<VehicleId, usize>,
    flagged: FlaggedSet,
    max_issued: Option<VehicleId>,
}

impl VehicleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated vehicle at the end of the collection.
    pub fn append(&mut self, vehicle: Vehicle) -> Result<()> {
        if self.index.contains_key(&vehicle.id) {
            return Err(CatalogError::DuplicateId(vehicle.id));
        }
        debug!("appending vehicle {} ({})", vehicle.id, vehicle.title());
        self.max_issued = self.max_issued.max(Some(vehicle.id));
        self.index.insert(vehicle.id, self.vehicles.len());
        self.vehicles.push(vehicle);
        Ok(())
    }

    /// All vehicles in insertion order.
    pub fn list_all(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Vehicles not flagged as possible purchases, in insertion order.
    pub fn list_available(&self) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| !self.flagged.contains(v.id))
            .collect()
    }

    /// Flagged vehicles, in insertion order.
    pub fn list_flagged(&self) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| self.flagged.contains(v.id))
            .collect()
    }

    pub fn find_by_id(&self, id: VehicleId) -> Result<&Vehicle> {
        self.index
            .get(&id)
            .map(|&pos| &self.vehicles[pos])
            .ok_or(CatalogError::NotFound(id))
    }

    pub fn contains(&self, id: VehicleId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn is_flagged(&self, id: VehicleId) -> bool {
        self.flagged.contains(id)
    }

    pub fn flagged(&self) -> &FlaggedSet {
        &self.flagged
    }

    pub(crate) fn flagged_mut(&mut self) -> &mut FlaggedSet {
        &mut self.flagged
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged.len()
    }

    /// Highest id ever appended, if any.
    pub fn max_issued_id(&self) -> Option<VehicleId> {
        self.max_issued
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
