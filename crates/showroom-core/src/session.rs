//! One browsing session: owns the store and configuration and exposes the
//! entry points the front ends call.

use std::path::Path;

use log::info;

use crate::config::{CatalogConfig, Vehicle, VehicleId};
use crate::error::Result;
use crate::filter::FilterSpec;
use crate::intake::{self, VehicleSubmission};
use crate::loader;
use crate::output::{
    build_catalog_view, build_flagged_summary, build_snapshot, CatalogSnapshot, CatalogView,
    FlaggedSummary, VehicleDetail,
};
use crate::store::VehicleStore;
use crate::toggle::{self, ToggleOutcome};

#[derive(Debug, Default)]
pub struct Session {
    store: VehicleStore,
    config: CatalogConfig,
}

impl Session {
    /// Empty session.
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            store: VehicleStore::new(),
            config,
        }
    }

    /// Session seeded with an already-normalized inventory.
    pub fn with_inventory(config: CatalogConfig, vehicles: Vec<Vehicle>) -> Result<Self> {
        let mut session = Self::new(config);
        loader::populate(&mut session.store, vehicles, &session.config)?;
        Ok(session)
    }

    /// Session seeded from an inventory file.
    pub fn load(path: impl AsRef<Path>, config: CatalogConfig) -> Result<Self> {
        let vehicles = loader::load_inventory(path, &config)?;
        let session = Self::with_inventory(config, vehicles)?;
        info!("session ready with {} vehicles", session.store.len());
        Ok(session)
    }

    pub fn store(&self) -> &VehicleStore {
        &self.store
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Available vehicles matching `spec`, with counts and option lists.
    pub fn catalog(&self, spec: &FilterSpec) -> CatalogView {
        build_catalog_view(&self.store, spec, &self.config)
    }

    pub fn detail(&self, id: VehicleId) -> Result<VehicleDetail> {
        let vehicle = self.store.find_by_id(id)?.clone();
        Ok(VehicleDetail {
            vehicle,
            flagged: self.store.is_flagged(id),
        })
    }

    pub fn flagged(&self) -> FlaggedSummary {
        build_flagged_summary(&self.store)
    }

    pub fn flagged_count(&self) -> usize {
        self.store.flagged_count()
    }

    pub fn toggle(&mut self, id: VehicleId) -> Result<ToggleOutcome> {
        toggle::toggle(&mut self.store, id)
    }

    /// Validate and append a new listing. Nothing is committed on failure.
    pub fn submit(&mut self, submission: &VehicleSubmission) -> Result<Vehicle> {
        let vehicle = intake::accept(submission, &self.store, &self.config)?;
        self.store.append(vehicle.clone())?;
        info!("added vehicle {} ({})", vehicle.id, vehicle.title());
        Ok(vehicle)
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        build_snapshot(&self.store)
    }
}
