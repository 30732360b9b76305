//! Pet data model.
//!
//! [`PetState`] is the mutable per-entity state the steering code reads and
//! writes each tick. It is owned by the host's entity registry and persists
//! across ticks; only the motion vector is recomputed every step.

use glam::DVec3;
use log::debug;
use thiserror::Error;

use crate::config::{ConfigError, Properties};
use crate::geometry::Location;
use crate::{FOLLOW_RANGE_BASE, HOVER_GRAVITY};

/// Errors raised when pet attributes violate their invariants.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PetError {
    /// Scale must be finite and non-negative.
    #[error("invalid pet scale {0}; expected a finite value >= 0")]
    InvalidScale(f64),
    /// Speed must be finite and positive.
    #[error("invalid pet speed {0}; expected a finite value > 0")]
    InvalidSpeed(f64),
}

/// Static description of the creature a pet is modelled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetDescriptor {
    /// Creature type tag, e.g. `"EnderDragon"`.
    pub creature: String,
    /// Whether the creature's model faces away from its heading.
    pub reversed_facing: bool,
}

impl PetDescriptor {
    /// Describes a creature whose model faces its heading.
    #[must_use]
    pub fn new(creature: impl Into<String>) -> Self {
        Self {
            creature: creature.into(),
            reversed_facing: false,
        }
    }

    /// Marks the creature's model as facing backwards.
    #[must_use]
    pub fn with_reversed_facing(mut self) -> Self {
        self.reversed_facing = true;
        self
    }

    /// The ender dragon, whose model is authored facing backwards.
    #[must_use]
    pub fn ender_dragon() -> Self {
        Self::new("EnderDragon").with_reversed_facing()
    }
}

/// Whether the pet is hunting a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggression {
    /// Following the owner.
    #[default]
    Calm,
    /// Chasing and attacking a target.
    Angry,
}

/// Behaviour mode evaluated at the start of every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetMode {
    /// Following the owner.
    Calm,
    /// Attacking a target.
    Angry,
    /// Steered by its rider.
    Riding,
}

/// Tunable attributes a pet is created with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetAttributes {
    /// Model scale; also widens the follow range and the strike reach.
    pub scale: f64,
    /// Base movement speed multiplier.
    pub speed: f64,
    /// Damage dealt per successful strike.
    pub attack_damage: f64,
}

impl Default for PetAttributes {
    fn default() -> Self {
        Self {
            scale: 1.0,
            speed: 1.0,
            attack_damage: 1.0,
        }
    }
}

/// Per-entity state driven by the hovering controller.
#[derive(Debug, Clone, PartialEq)]
pub struct PetState {
    /// Current position and facing.
    pub location: Location,
    /// Motion committed on the previous step.
    pub motion: DVec3,
    /// Per-axis offset from the owner while following.
    pub follow_offset: DVec3,
    /// Maximum height above the terrain a rider may climb to.
    pub fly_height: f64,
    /// Damage dealt per successful strike.
    pub attack_damage: f64,
    /// Ticks left before the next strike may land.
    pub waiting_time: u32,
    descriptor: PetDescriptor,
    scale: f64,
    speed: f64,
    follow_range_sq: f64,
    aggression: Aggression,
    ridden: bool,
}

fn validate_scale(scale: f64) -> Result<f64, PetError> {
    if scale.is_finite() && scale >= 0.0 {
        Ok(scale)
    } else {
        Err(PetError::InvalidScale(scale))
    }
}

fn validate_speed(speed: f64) -> Result<f64, PetError> {
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(PetError::InvalidSpeed(speed))
    }
}

impl PetState {
    /// Creates a calm, unridden pet at `location`.
    ///
    /// # Errors
    /// Returns [`PetError`] when the scale or speed is out of range.
    ///
    /// # Examples
    /// ```
    /// use hoverpet::geometry::Location;
    /// use hoverpet::pet::{PetAttributes, PetDescriptor, PetState};
    /// let pet = PetState::new(
    ///     PetDescriptor::new("Phantom"),
    ///     PetAttributes::default(),
    ///     Location::at(0.0, 64.0, 0.0),
    /// )?;
    /// assert_eq!(pet.follow_range_sq(), 9.0);
    /// # Ok::<(), hoverpet::pet::PetError>(())
    /// ```
    pub fn new(
        descriptor: PetDescriptor,
        attributes: PetAttributes,
        location: Location,
    ) -> Result<Self, PetError> {
        let scale = validate_scale(attributes.scale)?;
        let speed = validate_speed(attributes.speed)?;
        Ok(Self {
            location,
            motion: DVec3::ZERO,
            follow_offset: DVec3::ZERO,
            fly_height: 0.0,
            attack_damage: attributes.attack_damage,
            waiting_time: 0,
            descriptor,
            scale,
            speed,
            follow_range_sq: FOLLOW_RANGE_BASE + scale,
            aggression: Aggression::Calm,
            ridden: false,
        })
    }

    /// Static creature description.
    #[must_use]
    pub const fn descriptor(&self) -> &PetDescriptor {
        &self.descriptor
    }

    /// Model scale.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Changes the scale and widens the follow range to match.
    ///
    /// # Errors
    /// Returns [`PetError::InvalidScale`] and leaves the pet untouched when
    /// `scale` is negative or not finite.
    pub fn set_scale(&mut self, scale: f64) -> Result<(), PetError> {
        self.scale = validate_scale(scale)?;
        self.follow_range_sq = FOLLOW_RANGE_BASE + self.scale;
        Ok(())
    }

    /// Base movement speed.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Changes the base movement speed.
    ///
    /// # Errors
    /// Returns [`PetError::InvalidSpeed`] when `speed` is not a positive
    /// finite number.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), PetError> {
        self.speed = validate_speed(speed)?;
        Ok(())
    }

    /// Squared horizontal distance inside which the pet stops approaching.
    #[must_use]
    pub const fn follow_range_sq(&self) -> f64 {
        self.follow_range_sq
    }

    /// Gravity the host should apply; hovering pets float.
    #[must_use]
    pub const fn gravity(&self) -> f64 {
        HOVER_GRAVITY
    }

    /// Current aggression.
    #[must_use]
    pub const fn aggression(&self) -> Aggression {
        self.aggression
    }

    /// Whether the pet is hunting a target.
    #[must_use]
    pub fn is_angry(&self) -> bool {
        self.aggression == Aggression::Angry
    }

    /// Switches to attacking.
    pub fn provoke(&mut self) {
        if self.aggression != Aggression::Angry {
            debug!("{} pet provoked", self.descriptor.creature);
        }
        self.aggression = Aggression::Angry;
    }

    /// Switches back to following.
    pub fn calm_down(&mut self) {
        if self.aggression != Aggression::Calm {
            debug!("{} pet calmed down", self.descriptor.creature);
        }
        self.aggression = Aggression::Calm;
    }

    /// Whether a rider occupies the pet.
    #[must_use]
    pub const fn is_ridden(&self) -> bool {
        self.ridden
    }

    /// Seats a rider.
    pub fn mount(&mut self) {
        self.ridden = true;
    }

    /// Removes the rider.
    pub fn dismount(&mut self) {
        self.ridden = false;
    }

    /// Mode the next tick will run in; riding takes precedence.
    #[must_use]
    pub const fn mode(&self) -> PetMode {
        if self.ridden {
            return PetMode::Riding;
        }
        match self.aggression {
            Aggression::Calm => PetMode::Calm,
            Aggression::Angry => PetMode::Angry,
        }
    }

    /// Applies the attributes every pet understands: `Speed`,
    /// `Attack-Damage` and `Scale`. Absent keys leave the current value.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a value is not numeric or violates the
    /// attribute's invariant.
    pub fn apply_base_properties(&mut self, properties: &Properties) -> Result<(), ConfigError> {
        if let Some(speed) = properties.number("Speed")? {
            self.set_speed(speed)?;
        }
        if let Some(damage) = properties.number("Attack-Damage")? {
            self.attack_damage = damage;
        }
        if let Some(scale) = properties.number("Scale")? {
            self.set_scale(scale)?;
        }
        Ok(())
    }
}
