//! ABO/Rh blood type value objects.

pub mod group;
pub mod model;
pub mod rh;

pub use group::AboGroup;
pub use model::BloodType;
pub use rh::RhFactor;
