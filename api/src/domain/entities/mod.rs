//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod city;
pub mod patch;
pub mod point_of_interest;

pub use city::{City, CityId};
pub use patch::{PatchDocument, PatchOperation};
pub use point_of_interest::{
    PointOfInterest, PointOfInterestForCreation, PointOfInterestForUpdate, PointOfInterestId,
};
