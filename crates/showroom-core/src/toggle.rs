//! Purchase-intent toggle: the only mutation of the flagged set.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::VehicleId;
use crate::error::{CatalogError, Result};
use crate::store::VehicleStore;

/// What a toggle did to a vehicle's membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    /// Marked as a possible purchase; hidden from the available list.
    Flagged,
    /// Back in the available list.
    Unflagged,
}

impl ToggleOutcome {
    pub fn is_flagged(&self) -> bool {
        matches!(self, Self::Flagged)
    }

    /// Confirmation text for the caller to show however it likes.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Flagged => "Vehicle marked as possible purchase",
            Self::Unflagged => "Vehicle removed from possible purchases",
        }
    }
}

/// Flip `id`'s membership in the flagged set.
///
/// Unknown ids are rejected with `NotFound` so the set never references a
/// vehicle that is not in the store.
pub fn toggle(store: &mut VehicleStore, id: VehicleId) -> Result<ToggleOutcome> {
    if !store.contains(id) {
        return Err(CatalogError::NotFound(id));
    }
    let outcome = if store.flagged_mut().flip(id) {
        ToggleOutcome::Flagged
    } else {
        ToggleOutcome::Unflagged
    };
    debug!(
        "toggled vehicle {id}: {outcome:?} ({} flagged)",
        store.flagged_count()
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BodyType, FuelType, Transmission, Vehicle};

    fn store_with(ids: &[u64]) -> VehicleStore {
        let mut store = VehicleStore::new();
        for &id in ids {
            store
                .append(Vehicle {
                    id: VehicleId(id),
                    make: "Kia".to_string(),
                    model: format!("Model {id}"),
                    year: 2020,
                    price: 1000.0 * id as f64,
                    odometer: 0,
                    body_type: BodyType::Sedan,
                    color: "Blue".to_string(),
                    transmission: Transmission::Automatic,
                    fuel_type: FuelType::Gasoline,
                    image: String::new(),
                    description: String::new(),
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn toggle_flips_state_each_call() {
        let mut store = store_with(&[1, 2]);
        assert_eq!(toggle(&mut store, VehicleId(2)).unwrap(), ToggleOutcome::Flagged);
        assert!(store.is_flagged(VehicleId(2)));
        assert_eq!(toggle(&mut store, VehicleId(2)).unwrap(), ToggleOutcome::Unflagged);
        assert!(!store.is_flagged(VehicleId(2)));
    }

    #[test]
    fn toggles_are_independent_across_ids() {
        let mut store = store_with(&[1, 2, 3]);
        toggle(&mut store, VehicleId(1)).unwrap();
        toggle(&mut store, VehicleId(3)).unwrap();
        toggle(&mut store, VehicleId(1)).unwrap();
        assert!(!store.is_flagged(VehicleId(1)));
        assert!(!store.is_flagged(VehicleId(2)));
        assert!(store.is_flagged(VehicleId(3)));
    }

    #[test]
    fn unknown_id_is_not_found_and_changes_nothing() {
        let mut store = store_with(&[1]);
        let err = toggle(&mut store, VehicleId(99)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.flagged_count(), 0);
    }

    #[test]
    fn notices() {
        assert_eq!(ToggleOutcome::Flagged.notice(), "Vehicle marked as possible purchase");
        assert!(!ToggleOutcome::Unflagged.is_flagged());
    }
}
