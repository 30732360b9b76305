//! Utility helpers for tests.
//!
//! Builders for pets, owners, targets and sandbox worlds so integration
//! tests can describe scenarios with plain coordinate tuples.
pub mod conversions;
pub mod fixtures;

pub use fixtures::{creature_at, owner_at, pet_at, sandbox_with_owner, Coords3D, PetWorld};
