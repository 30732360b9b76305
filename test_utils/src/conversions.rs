//! Conversion helpers for test coordinate newtypes.
//! Centralises `From` implementations enabling literal usage in tests.

use glam::DVec3;
use hoverpet::geometry::Location;

use crate::fixtures::Coords3D;

macro_rules! impl_coords3_conversions {
    ($name:ident, $ty:ty) => {
        impl From<($ty, $ty, $ty)> for $name {
            fn from((x, y, z): ($ty, $ty, $ty)) -> Self {
                Self {
                    x: f64::from(x),
                    y: f64::from(y),
                    z: f64::from(z),
                }
            }
        }
    };
}

impl_coords3_conversions!(Coords3D, f64);
impl_coords3_conversions!(Coords3D, i32);

impl From<DVec3> for Coords3D {
    fn from(value: DVec3) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
        }
    }
}

impl From<Coords3D> for DVec3 {
    fn from(coords: Coords3D) -> Self {
        Self::new(coords.x, coords.y, coords.z)
    }
}

impl From<Coords3D> for Location {
    fn from(coords: Coords3D) -> Self {
        Self::at(coords.x, coords.y, coords.z)
    }
}
