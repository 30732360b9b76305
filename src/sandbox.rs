//! In-memory host used by the demo binary and integration tests.
//!
//! The sandbox keeps one owner, an optional target and a terrain height map.
//! Motion is applied directly without collision, except that entities never
//! sink below the surface of the column they stand in.

use glam::DVec3;
use hashbrown::HashMap;
use log::{debug, info};

use crate::config::PetsConfig;
use crate::damage::DamageEvent;
use crate::geometry::Location;
use crate::host::{EntityKind, EntitySnapshot, PetHost, TickFlow};
use crate::numeric::truncate_to_i32;
use crate::pet::PetState;

/// An entity simulated by the sandbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SandboxEntity {
    /// Position and facing.
    pub location: Location,
    /// Remaining health; the entity dies at zero.
    pub health: f64,
    /// Player or creature.
    pub kind: EntityKind,
}

impl SandboxEntity {
    /// Creates an entity with `health` points at `location`.
    #[must_use]
    pub const fn new(location: Location, health: f64, kind: EntityKind) -> Self {
        Self {
            location,
            health,
            kind,
        }
    }

    /// Whether the entity still has health left.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    fn snapshot(&self) -> EntitySnapshot {
        EntitySnapshot {
            location: self.location,
            alive: self.is_alive(),
            kind: self.kind,
        }
    }
}

/// Minimal world implementing [`PetHost`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SandboxHost {
    /// The pet's owner, also its rider.
    pub owner: Option<SandboxEntity>,
    /// The entity the pet is attacking.
    pub target: Option<SandboxEntity>,
    /// Reward settings.
    pub config: PetsConfig,
    /// When set, every damage event is cancelled by a listener.
    pub cancel_attacks: bool,
    /// When set, the shared base tick halts all pet updates.
    pub paused: bool,
    /// Level points granted so far.
    pub level_points: u32,
    /// Damage events dispatched so far, after listeners ran.
    pub damage_log: Vec<DamageEvent>,
    /// Number of movement updates published.
    pub movement_updates: u64,
    terrain: HashMap<(i32, i32), i32>,
    ground_level: i32,
}

impl SandboxHost {
    /// Creates a world with flat terrain at `ground_level`.
    #[must_use]
    pub fn new(ground_level: i32) -> Self {
        Self {
            ground_level,
            ..Self::default()
        }
    }

    /// Places the owner.
    #[must_use]
    pub fn with_owner(mut self, owner: SandboxEntity) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Places a target.
    #[must_use]
    pub fn with_target(mut self, target: SandboxEntity) -> Self {
        self.target = Some(target);
        self
    }

    /// Raises or lowers one terrain column.
    pub fn set_column(&mut self, x: i32, z: i32, height: i32) {
        self.terrain.insert((x, z), height);
    }

    /// Moves the owner by `delta`, as a player walking would.
    pub fn walk_owner(&mut self, delta: DVec3) {
        if let Some(owner) = self.owner.as_mut() {
            owner.location.position += delta;
        }
    }

    /// Columns are addressed the same way the ride ceiling queries them.
    fn surface_at(&self, position: DVec3) -> f64 {
        let top = self.highest_block_at(
            truncate_to_i32(position.x),
            truncate_to_i32(position.z),
        );
        f64::from(top) + 1.0
    }
}

impl PetHost for SandboxHost {
    fn base_tick(&mut self, _pet: &mut PetState, _current_tick: u64) -> TickFlow {
        if self.paused || self.owner.is_none() {
            TickFlow::Halt
        } else {
            TickFlow::Continue
        }
    }

    fn owner(&self) -> Option<EntitySnapshot> {
        self.owner.as_ref().map(SandboxEntity::snapshot)
    }

    fn target(&self) -> Option<EntitySnapshot> {
        self.target.as_ref().map(SandboxEntity::snapshot)
    }

    fn move_pet(&mut self, pet: &mut PetState, motion: DVec3) {
        let mut next = pet.location.position + motion;
        next.y -= pet.gravity();
        next.y = next.y.max(self.surface_at(next));
        pet.location.position = next;
    }

    fn update_movement(&mut self, pet: &PetState) {
        self.movement_updates += 1;
        debug!("pet at {:?}", pet.location.position);
    }

    fn dispatch_damage(&mut self, event: &mut DamageEvent) {
        if self.cancel_attacks {
            event.cancel();
        } else if let Some(target) = self.target.as_mut() {
            target.health = (target.health - event.amount()).max(0.0);
        }
        self.damage_log.push(event.clone());
    }

    fn release_target(&mut self) {
        if self.target.take().is_some() {
            info!("pet released its target");
        }
    }

    fn add_level_points(&mut self, _pet: &mut PetState, points: u32) {
        self.level_points = self.level_points.saturating_add(points);
    }

    fn pets_config(&self) -> PetsConfig {
        self.config
    }

    fn highest_block_at(&self, x: i32, z: i32) -> i32 {
        self.terrain.get(&(x, z)).copied().unwrap_or(self.ground_level)
    }
}
