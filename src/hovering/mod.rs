//! Behaviour controller for pets that fly instead of walking.
//!
//! [`HoveringPet`] runs once per host tick. A calm pet hovers above its
//! owner, an angry pet chases and strikes its target, and a ridden pet is
//! left alone by [`HoveringPet::tick`] and steered through
//! [`HoveringPet::ride_step`] instead.

mod attack;
mod steering;

pub use steering::{follow_steering, ride_steering, Steering};

use glam::DVec3;
use log::{debug, warn};

use crate::config::{ConfigError, Properties, FLYING_HEIGHT_PROPERTY};
use crate::damage::{DamageCause, DamageEvent};
use crate::host::{PetHost, TickFlow};
use crate::numeric::truncate_to_i32;
use crate::pet::{PetMode, PetState};
use crate::OWNER_HOVER_OFFSET;

/// Per-tick controller driving one hovering pet.
#[derive(Debug, Clone, PartialEq)]
pub struct HoveringPet {
    state: PetState,
}

impl HoveringPet {
    /// Wraps an existing pet.
    #[must_use]
    pub const fn new(state: PetState) -> Self {
        Self { state }
    }

    /// The pet being driven.
    #[must_use]
    pub const fn state(&self) -> &PetState {
        &self.state
    }

    /// Mutable access to the pet being driven.
    pub fn state_mut(&mut self) -> &mut PetState {
        &mut self.state
    }

    /// Releases the pet.
    #[must_use]
    pub fn into_state(self) -> PetState {
        self.state
    }

    /// Mode the next tick will run in.
    #[must_use]
    pub const fn mode(&self) -> PetMode {
        self.state.mode()
    }

    /// Starts attacking whatever target the host has assigned.
    pub fn provoke(&mut self) {
        self.state.provoke();
    }

    /// Stops attacking and drops the target.
    pub fn calm_down<H: PetHost + ?Sized>(&mut self, host: &mut H) {
        self.state.calm_down();
        host.release_target();
    }

    /// Runs one simulation step.
    ///
    /// Returns `true` when motion was computed and published this tick.
    pub fn tick<H: PetHost + ?Sized>(&mut self, host: &mut H, current_tick: u64) -> bool {
        if host.base_tick(&mut self.state, current_tick) == TickFlow::Halt {
            return false;
        }
        if self.state.is_ridden() {
            return false;
        }

        if self.state.is_angry() {
            self.attack_step(host);
        } else {
            let Some(owner) = host.owner() else {
                debug!("tick {current_tick}: pet has no owner to follow");
                return false;
            };
            let offset = self.state.follow_offset;
            self.follow(
                host,
                owner.location.position,
                DVec3::new(offset.x, offset.y.abs() + OWNER_HOVER_OFFSET, offset.z),
            );
        }

        host.update_movement(&self.state);
        true
    }

    /// Steers towards `target + offset` and hands the motion to the host.
    pub fn follow<H: PetHost + ?Sized>(&mut self, host: &mut H, target: DVec3, offset: DVec3) {
        let steering = follow_steering(&self.state, target + offset);
        self.apply(host, steering);
    }

    /// Steers from rider input. Does nothing without a rider.
    ///
    /// `input_x` is left/right and `input_z` is forward/back.
    pub fn ride_step<H: PetHost + ?Sized>(&mut self, host: &mut H, input_x: f64, input_z: f64) {
        let Some(rider) = host.rider() else {
            debug!("ride input ignored: pet has no rider");
            return;
        };

        let position = self.state.location.position;
        let steering = ride_steering(&self.state, &rider.location, input_x, input_z, || {
            let ground = host.highest_block_at(
                truncate_to_i32(position.x),
                truncate_to_i32(position.z),
            );
            position.y - f64::from(ground)
        });

        self.apply(host, steering);
        host.update_movement(&self.state);
    }

    /// Handles incoming damage. Hovering pets never take fall damage.
    pub fn on_damage<H: PetHost + ?Sized>(&mut self, host: &mut H, event: &mut DamageEvent) {
        if event.cause() == DamageCause::Fall {
            event.cancel();
        }
        host.base_damage(&mut self.state, event);
    }

    /// Applies host properties, including the `Flying-Height` ceiling.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a property is not numeric or violates a
    /// pet invariant.
    pub fn configure<H: PetHost + ?Sized>(
        &mut self,
        host: &mut H,
        properties: &Properties,
    ) -> Result<(), ConfigError> {
        host.base_configure(&mut self.state, properties)?;
        match properties.number(FLYING_HEIGHT_PROPERTY)? {
            Some(height) => self.state.fly_height = height,
            None => warn!(
                "{FLYING_HEIGHT_PROPERTY} not set; keeping ceiling of {}",
                self.state.fly_height
            ),
        }
        Ok(())
    }

    fn apply<H: PetHost + ?Sized>(&mut self, host: &mut H, steering: Steering) {
        self.state.location.yaw = steering.yaw;
        self.state.location.pitch = steering.pitch;
        self.state.motion = steering.motion;
        host.move_pet(&mut self.state, steering.motion);
    }
}
