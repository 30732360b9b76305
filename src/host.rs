//! Interface to the host server that owns entities, physics and events.
//!
//! The controller never stores references to other entities. Owner, target
//! and rider are read as [`EntitySnapshot`] copies whenever they are needed,
//! so a target that dies or despawns between two reads is always observed.

use glam::DVec3;

use crate::config::{ConfigError, PetsConfig, Properties};
use crate::damage::DamageEvent;
use crate::geometry::Location;
use crate::pet::PetState;

/// What kind of entity a snapshot describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A connected human player.
    Player,
    /// Any other living entity.
    Creature,
}

/// Read-only view of an entity at the moment it was queried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntitySnapshot {
    /// Position and facing.
    pub location: Location,
    /// Whether the entity is alive and still spawned.
    pub alive: bool,
    /// Player or creature.
    pub kind: EntityKind,
}

impl EntitySnapshot {
    /// A living entity at `location`.
    #[must_use]
    pub const fn living(location: Location, kind: EntityKind) -> Self {
        Self {
            location,
            alive: true,
            kind,
        }
    }
}

/// Outcome of the host's shared per-tick pet update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFlow {
    /// The pet should act this tick.
    Continue,
    /// The pet is inactive this tick; skip all motion work.
    Halt,
}

/// Services the host provides to a hovering pet.
///
/// Methods taking `&mut PetState` may read or update the pet; the host owns
/// physics, so [`PetHost::move_pet`] is the only place positions change.
#[cfg_attr(test, mockall::automock)]
pub trait PetHost {
    /// Shared pet update run before any hovering behaviour.
    fn base_tick(&mut self, pet: &mut PetState, current_tick: u64) -> TickFlow;

    /// The entity the pet belongs to.
    fn owner(&self) -> Option<EntitySnapshot>;

    /// The entity the pet is attacking, if any.
    fn target(&self) -> Option<EntitySnapshot>;

    /// The entity steering the pet. Owners ride their own pets.
    fn rider(&self) -> Option<EntitySnapshot> {
        self.owner()
    }

    /// Applies `motion` through physics and collision, updating
    /// `pet.location`.
    fn move_pet(&mut self, pet: &mut PetState, motion: DVec3);

    /// Publishes the pet's accumulated movement for this tick.
    fn update_movement(&mut self, pet: &PetState);

    /// Delivers `event` to the current target. Listeners may cancel it.
    fn dispatch_damage(&mut self, event: &mut DamageEvent);

    /// Forgets the current target.
    fn release_target(&mut self);

    /// Grants level points to the pet.
    fn add_level_points(&mut self, pet: &mut PetState, points: u32);

    /// Plugin-wide reward settings.
    fn pets_config(&self) -> PetsConfig;

    /// Height of the topmost block in the `(x, z)` column.
    fn highest_block_at(&self, x: i32, z: i32) -> i32;

    /// Checks that an attack can proceed.
    ///
    /// The default requires an owner and a living target, calming the pet
    /// and releasing the target otherwise.
    fn attack_requirements_met(&mut self, pet: &mut PetState) -> bool {
        let target_alive = self.target().is_some_and(|target| target.alive);
        if target_alive && self.owner().is_some() {
            return true;
        }
        pet.calm_down();
        self.release_target();
        false
    }

    /// Damage handling shared by every pet, run after hovering-specific
    /// handling. The default does nothing.
    fn base_damage(&mut self, _pet: &mut PetState, _event: &mut DamageEvent) {}

    /// Configuration shared by every pet, run before hovering-specific
    /// properties are read.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a shared property is invalid.
    fn base_configure(
        &mut self,
        pet: &mut PetState,
        properties: &Properties,
    ) -> Result<(), ConfigError> {
        pet.apply_base_properties(properties)
    }
}
