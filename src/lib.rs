//! Steering and combat behaviour for hovering pets.
//!
//! A hovering pet follows its owner through the air, chases and strikes
//! hostile targets, carries its owner as a rider and ignores fall damage.
//! The crate only computes motion and state transitions; the surrounding
//! server supplies physics, events and entity lookup through [`PetHost`].
//!
//! ```
//! use hoverpet::prelude::*;
//!
//! let owner = SandboxEntity::new(Location::at(0.0, 64.0, 0.0), 20.0, EntityKind::Player);
//! let mut host = SandboxHost::new(60).with_owner(owner);
//! let state = PetState::new(
//!     PetDescriptor::ender_dragon(),
//!     PetAttributes::default(),
//!     Location::at(10.0, 64.0, 0.0),
//! )?;
//! let mut pet = HoveringPet::new(state);
//! assert!(pet.tick(&mut host, 0));
//! assert!(pet.state().location.position.x < 10.0);
//! # Ok::<(), hoverpet::pet::PetError>(())
//! ```
pub mod config;
pub mod constants;
pub mod damage;
pub mod geometry;
pub mod host;
pub mod hovering;
pub mod logging;
pub mod numeric;
pub mod pet;
pub mod sandbox;
pub use constants::*;

// Re-export commonly used items
pub use config::{ConfigError, PetProfile, PetsConfig, Properties};
pub use damage::{DamageCause, DamageEvent};
pub use geometry::Location;
pub use host::{EntityKind, EntitySnapshot, PetHost, TickFlow};
pub use hovering::{HoveringPet, Steering};
pub use logging::init as init_logging;
pub use pet::{Aggression, PetAttributes, PetDescriptor, PetError, PetMode, PetState};
pub use sandbox::{SandboxEntity, SandboxHost};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use hoverpet::prelude::*;
    //! ```

    pub use crate::config::{PetsConfig, Properties};
    pub use crate::damage::{DamageCause, DamageEvent};
    pub use crate::geometry::Location;
    pub use crate::host::{EntityKind, EntitySnapshot, PetHost, TickFlow};
    pub use crate::hovering::HoveringPet;
    pub use crate::pet::{PetAttributes, PetDescriptor, PetMode, PetState};
    pub use crate::sandbox::{SandboxEntity, SandboxHost};
    pub use glam::DVec3;
}
