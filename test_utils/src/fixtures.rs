//! Convenience constructors for pets and sandbox worlds used in tests.

use hoverpet::prelude::*;

/// Plain world coordinates accepted by the fixture builders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coords3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coords3D {
    /// Create new 3D coordinates.
    ///
    /// # Examples
    /// ```
    /// use test_utils::Coords3D;
    /// let c = Coords3D::new(1.0, 2.0, 3.0);
    /// assert_eq!(c.x, 1.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Build a calm pet with default attributes.
///
/// # Panics
/// Panics if the default attributes are rejected, which indicates a broken
/// invariant in the library.
///
/// # Examples
/// ```
/// use hoverpet::pet::PetDescriptor;
/// use test_utils::pet_at;
/// let pet = pet_at(PetDescriptor::new("Phantom"), (1.0, 2.0, 3.0));
/// assert_eq!(pet.location.position.y, 2.0);
/// ```
pub fn pet_at<C>(descriptor: PetDescriptor, coords: C) -> PetState
where
    C: Into<Coords3D>,
{
    let coords: Coords3D = coords.into();
    PetState::new(descriptor, PetAttributes::default(), coords.into())
        .expect("default attributes are valid")
}

/// A healthy player owner at `coords`.
pub fn owner_at<C>(coords: C) -> SandboxEntity
where
    C: Into<Coords3D>,
{
    let coords: Coords3D = coords.into();
    SandboxEntity::new(coords.into(), 20.0, EntityKind::Player)
}

/// A creature with `health` points at `coords`.
pub fn creature_at<C>(coords: C, health: f64) -> SandboxEntity
where
    C: Into<Coords3D>,
{
    let coords: Coords3D = coords.into();
    SandboxEntity::new(coords.into(), health, EntityKind::Creature)
}

/// A flat sandbox at `ground_level` with an owner placed at `coords`.
pub fn sandbox_with_owner<C>(ground_level: i32, coords: C) -> SandboxHost
where
    C: Into<Coords3D>,
{
    SandboxHost::new(ground_level).with_owner(owner_at(coords))
}

/// A pet and the sandbox it lives in, advanced together.
///
/// Implements `Clone` and `Debug` so it can serve as an rspec environment.
#[derive(Clone, Debug)]
pub struct PetWorld {
    pub host: SandboxHost,
    pub pet: HoveringPet,
    pub tick: u64,
}

impl PetWorld {
    /// Pair a pet with a host.
    pub fn new(host: SandboxHost, pet: PetState) -> Self {
        Self {
            host,
            pet: HoveringPet::new(pet),
            tick: 0,
        }
    }

    /// Advance one tick, returning whether motion was computed.
    pub fn step(&mut self) -> bool {
        let moved = self.pet.tick(&mut self.host, self.tick);
        self.tick += 1;
        moved
    }

    /// Advance `ticks` ticks.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// The pet's current position.
    pub fn position(&self) -> DVec3 {
        self.pet.state().location.position
    }
}
