//! Set of vehicle ids marked as possible purchases.

use std::collections::HashSet;

use crate::config::VehicleId;

/// Pure membership set. Order is irrelevant: flagged listings are always
/// reported in store order.
#[derive(Debug, Clone, Default)]
pub struct FlaggedSet {
    ids: HashSet<VehicleId>,
}

impl FlaggedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: VehicleId) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership of `id`. Returns the new membership state.
    pub(crate) fn flip(&mut self, id: VehicleId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = VehicleId> + '_ {
        self.ids.iter().copied()
    }
}
