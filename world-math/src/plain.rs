use glam::{DVec2, Vec2};

use crate::vector3::Vector3;

/// Anything that can be projected onto the horizontal (x/z) plane.
///
/// 2D vectors map their `y` component onto the world `z` axis.
pub trait PlainPosition {
    fn plain_coordinates(&self) -> (f64, f64);
}

impl PlainPosition for Vector3 {
    fn plain_coordinates(&self) -> (f64, f64) {
        (self.x, self.z)
    }
}

impl PlainPosition for DVec2 {
    fn plain_coordinates(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl PlainPosition for Vec2 {
    fn plain_coordinates(&self) -> (f64, f64) {
        (f64::from(self.x), f64::from(self.y))
    }
}

/// Explicit x and z coordinates.
impl PlainPosition for (f64, f64) {
    fn plain_coordinates(&self) -> (f64, f64) {
        *self
    }
}

/// A bare x coordinate, z is taken as zero.
impl PlainPosition for f64 {
    fn plain_coordinates(&self) -> (f64, f64) {
        (*self, 0.0)
    }
}

impl<T: PlainPosition + ?Sized> PlainPosition for &T {
    fn plain_coordinates(&self) -> (f64, f64) {
        (**self).plain_coordinates()
    }
}
