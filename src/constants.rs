//! Tuning constants for hovering pet steering and combat.
//!
//! Distances are in blocks, speeds are multipliers of the pet's base speed
//! and durations are in ticks.

/// Base of the squared follow range; the pet's scale is added on top.
pub const FOLLOW_RANGE_BASE: f64 = 8.0;
/// Horizontal follow speed as a fraction of base speed.
pub const FOLLOW_SPEED_FACTOR: f64 = 0.15;
/// Vertical hover gain applied to the height difference while following.
pub const HOVER_SPEED_FACTOR: f64 = 0.25;
/// Height kept above the owner while following.
pub const OWNER_HOVER_OFFSET: f64 = 1.5;
/// Height kept above the target while attacking.
pub const TARGET_HOVER_OFFSET: f64 = 0.5;
/// Reach added to the pet's scale when deciding whether a strike lands.
pub const ATTACK_REACH_PADDING: f64 = 1.1;
/// Ticks between two attack attempts.
pub const ATTACK_COOLDOWN_TICKS: u32 = 12;
/// Distance from the owner beyond which combat is abandoned.
pub const OWNER_LEASH_RANGE: f64 = 25.0;
/// Distance from the target beyond which combat is abandoned.
pub const TARGET_LEASH_RANGE: f64 = 15.0;
/// Vertical gain applied to the rider's pitch while riding.
pub const RIDE_VERTICAL_FACTOR: f64 = 0.3;
/// Below this vertical intent the ridden pet holds its altitude.
pub const RIDE_VERTICAL_DEADZONE: f64 = 0.2;
/// Divisor used for diagonal ride input.
pub const RIDE_DIAGONAL_DIVISOR: f64 = 1.414;
/// Yaw correction for creatures whose model faces backwards.
pub const REVERSED_FACING_YAW: f64 = 180.0;
/// Gravity applied to hovering pets by the host.
pub const HOVER_GRAVITY: f64 = 0.0;
