use derive_more::{Deref, DerefMut, From};

use crate::vector3::{AsVector3, Vector3};

/// A [Vector3] that can be overwritten in place.
///
/// Meant for hot paths that keep reusing a single scratch position instead of
/// producing a new vector per step. Every read-only operation of [Vector3] is
/// reachable through `Deref`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Deref, DerefMut, From)]
pub struct MutableVector3(Vector3);

impl MutableVector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn set_components(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.0 = Vector3::new(x, y, z);
        self
    }

    /// Moves this vector to `pos` offset by the given amounts.
    pub fn from_object_add(&mut self, pos: &impl AsVector3, x: f64, y: f64, z: f64) -> &mut Self {
        self.0 = pos.as_vector3().add_scalars(x, y, z);
        self
    }

    pub fn into_inner(self) -> Vector3 {
        self.0
    }
}

impl AsVector3 for MutableVector3 {
    fn as_vector3(&self) -> Vector3 {
        self.0
    }
}

impl From<MutableVector3> for Vector3 {
    fn from(value: MutableVector3) -> Self {
        value.0
    }
}
