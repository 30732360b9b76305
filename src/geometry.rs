//! Location and heading helpers.
//!
//! Facing vectors, horizontal distances and yaw/pitch math used by steering.

use glam::{DVec2, DVec3};

/// Position and facing of an entity in world space.
///
/// Angles are in degrees, matching the host's convention: yaw `0` faces `+z`
/// and grows clockwise when seen from above, pitch is positive when looking
/// down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Location {
    /// World-space position.
    pub position: DVec3,
    /// Heading around the vertical axis, in degrees.
    pub yaw: f64,
    /// Elevation of the line of sight, in degrees.
    pub pitch: f64,
}

impl Location {
    /// Creates a location facing `+z`.
    #[must_use]
    pub const fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: DVec3::new(x, y, z),
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Returns the same position with the supplied facing.
    #[must_use]
    pub const fn facing(mut self, yaw: f64, pitch: f64) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    /// Euclidean distance between two locations.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        self.position.distance(other.position)
    }

    /// Unit vector along the line of sight.
    ///
    /// # Examples
    /// ```
    /// use hoverpet::geometry::Location;
    /// let dir = Location::at(0.0, 0.0, 0.0).facing(90.0, 0.0).direction_vector();
    /// assert!((dir.x + 1.0).abs() < 1e-9);
    /// assert!(dir.z.abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn direction_vector(&self) -> DVec3 {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        DVec3::new(-pitch_cos * yaw_sin, -pitch_sin, pitch_cos * yaw_cos)
    }
}

/// Squared length of the horizontal (`x`, `z`) part of `offset`.
#[must_use]
pub fn horizontal_distance_sq(offset: DVec3) -> f64 {
    offset.x.mul_add(offset.x, offset.z * offset.z)
}

/// Unit vector in the horizontal plane pointing along `offset`.
///
/// Returns `None` when the horizontal part is zero or not finite.
#[must_use]
pub fn horizontal_direction(offset: DVec3) -> Option<DVec2> {
    let flat = DVec2::new(offset.x, offset.z);
    if !flat.is_finite() {
        return None;
    }
    flat.try_normalize()
}

/// Yaw, in degrees, of a heading along `offset`.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use hoverpet::geometry::yaw_towards;
/// assert!((yaw_towards(DVec3::new(-1.0, 0.0, 0.0)) - 90.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn yaw_towards(offset: DVec3) -> f64 {
    (-offset.x).atan2(offset.z).to_degrees()
}

/// Pitch, in degrees, of a heading along `offset`.
#[must_use]
pub fn pitch_towards(offset: DVec3) -> f64 {
    -offset.y.atan2(horizontal_distance_sq(offset).sqrt()).to_degrees()
}
