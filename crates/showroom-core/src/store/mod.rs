pub mod flagged_set;
pub mod vehicle_store;

pub use flagged_set::FlaggedSet;
pub use vehicle_store::VehicleStore;
