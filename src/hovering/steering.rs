//! Pure steering maths for follow and ride movement.
//!
//! Each function returns a complete [`Steering`] value; nothing here touches
//! the host. Vertical motion that a step leaves unchanged is carried over
//! from [`PetState::motion`].

use glam::{DVec2, DVec3};
use log::trace;

use crate::geometry::{
    horizontal_direction, horizontal_distance_sq, pitch_towards, yaw_towards, Location,
};
use crate::pet::PetState;
use crate::{
    FOLLOW_SPEED_FACTOR, HOVER_SPEED_FACTOR, REVERSED_FACING_YAW, RIDE_DIAGONAL_DIVISOR,
    RIDE_VERTICAL_DEADZONE, RIDE_VERTICAL_FACTOR,
};

/// Motion and facing computed for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    /// Motion to hand to the host.
    pub motion: DVec3,
    /// Yaw, in degrees.
    pub yaw: f64,
    /// Pitch, in degrees.
    pub pitch: f64,
}

fn corrected_yaw(pet: &PetState, yaw: f64) -> f64 {
    if pet.descriptor().reversed_facing {
        yaw + REVERSED_FACING_YAW
    } else {
        yaw
    }
}

/// Steers `pet` towards `destination`.
///
/// Inside the follow range, or directly above or below the destination, the
/// pet holds its horizontal position. Outside it moves at a constant
/// `speed * 0.15`. Vertical motion is proportional to the height difference
/// and is not clamped.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use hoverpet::geometry::Location;
/// use hoverpet::hovering::follow_steering;
/// use hoverpet::pet::{PetAttributes, PetDescriptor, PetState};
/// let pet = PetState::new(
///     PetDescriptor::new("Phantom"),
///     PetAttributes::default(),
///     Location::at(10.0, 0.0, 0.0),
/// )?;
/// let steering = follow_steering(&pet, DVec3::ZERO);
/// assert!((steering.motion.x + 0.15).abs() < 1e-9);
/// assert_eq!(steering.motion.z, 0.0);
/// # Ok::<(), hoverpet::pet::PetError>(())
/// ```
#[must_use]
pub fn follow_steering(pet: &PetState, destination: DVec3) -> Steering {
    let offset = destination - pet.location.position;
    let speed = pet.speed();

    let horizontal = if horizontal_distance_sq(offset) < pet.follow_range_sq() {
        DVec2::ZERO
    } else {
        horizontal_direction(offset).map_or(DVec2::ZERO, |dir| {
            dir * (speed * FOLLOW_SPEED_FACTOR)
        })
    };

    let vertical = if offset.y == 0.0 {
        pet.motion.y
    } else {
        speed * HOVER_SPEED_FACTOR * offset.y
    };

    let steering = Steering {
        motion: DVec3::new(horizontal.x, vertical, horizontal.y),
        yaw: corrected_yaw(pet, yaw_towards(offset)),
        pitch: pitch_towards(offset),
    };
    trace!("follow offset {offset:?} -> {steering:?}");
    steering
}

#[expect(
    clippy::float_cmp,
    reason = "Digital ride input is exactly -1, 0 or 1; anything else is analogue."
)]
fn forward_motion(base: DVec3, input_x: f64, input_z: f64) -> DVec2 {
    if input_z == 1.0 {
        DVec2::new(base.x, base.z)
    } else if input_z == 0.0 {
        DVec2::ZERO
    } else if input_z == -1.0 {
        DVec2::new(-base.x, -base.z)
    } else {
        let average = base.x + base.z / 2.0;
        let scaled = average / RIDE_DIAGONAL_DIVISOR;
        DVec2::new(scaled * input_z, scaled * input_x)
    }
}

#[expect(
    clippy::float_cmp,
    reason = "Digital ride input is exactly -1, 0 or 1; anything else is analogue."
)]
fn strafe_motion(base: DVec3, input_x: f64, forward: DVec2) -> DVec2 {
    if input_x == 1.0 {
        DVec2::new(base.z, -base.x)
    } else if input_x == -1.0 {
        DVec2::new(-base.z, base.x)
    } else {
        forward
    }
}

/// Steers a ridden `pet` from its rider's facing and input axes.
///
/// `input_z` is forward/back and `input_x` is left/right, each normally in
/// `{-1, 0, 1}`. Strafing overrides forward travel when both are pressed.
/// `height_above_ground` is only consulted when the rider looks upwards.
#[must_use]
pub fn ride_steering(
    pet: &PetState,
    rider: &Location,
    input_x: f64,
    input_z: f64,
    height_above_ground: impl FnOnce() -> f64,
) -> Steering {
    let base = rider.direction_vector() / (2.0 * pet.speed());
    let horizontal = strafe_motion(base, input_x, forward_motion(base, input_x, input_z));

    let vertical = if base.y.abs() < RIDE_VERTICAL_DEADZONE {
        0.0
    } else if base.y < 0.0 || height_above_ground() < pet.fly_height {
        pet.speed() * RIDE_VERTICAL_FACTOR * base.y
    } else {
        pet.motion.y
    };

    let steering = Steering {
        motion: DVec3::new(horizontal.x, vertical, horizontal.y),
        yaw: corrected_yaw(pet, rider.yaw),
        pitch: rider.pitch,
    };
    trace!("ride input ({input_x}, {input_z}) -> {steering:?}");
    steering
}
