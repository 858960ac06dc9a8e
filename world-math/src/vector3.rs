use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::str::FromStr;

use glam::{DVec3, I64Vec3, IVec3};
use strum::IntoEnumIterator;
use tracing::trace;

use crate::axis::Axis;
use crate::errors::{Result, WorldMathError};
use crate::plain::PlainPosition;
use crate::rounding::{round_to_precision, whole_number, RoundingMode};
use crate::side::Side;

/// Squared axis delta under which a segment is treated as parallel to the
/// plane it is being intersected with.
const INTERMEDIATE_EPSILON: f64 = 0.0000001;

/// A position or direction in world space.
///
/// World coordinates are structured as follows:
/// - +X is east / -X is west
/// - +Y is up / -Y is down
/// - +Z is south / -Z is north
///
/// Every operation returns a new vector. In-place updates live on
/// [crate::mutable::MutableVector3].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Types that carry a world position and can hand out a plain copy of it.
pub trait AsVector3 {
    fn as_vector3(&self) -> Vector3;
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn floor_x(&self) -> i64 {
        self.x.floor() as i64
    }

    pub fn floor_y(&self) -> i64 {
        self.y.floor() as i64
    }

    pub fn floor_z(&self) -> i64 {
        self.z.floor() as i64
    }

    /// The block this position lies in.
    pub fn block_position(&self) -> I64Vec3 {
        I64Vec3::new(self.floor_x(), self.floor_y(), self.floor_z())
    }

    pub fn component(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn with_component(&self, axis: Axis, value: f64) -> Self {
        let mut result = *self;

        match axis {
            Axis::X => result.x = value,
            Axis::Y => result.y = value,
            Axis::Z => result.z = value,
        }

        result
    }

    pub fn add(&self, other: &Vector3) -> Self {
        self.add_scalars(other.x, other.y, other.z)
    }

    pub fn add_scalars(&self, x: f64, y: f64, z: f64) -> Self {
        Self::new(self.x + x, self.y + y, self.z + z)
    }

    pub fn subtract(&self, other: &Vector3) -> Self {
        self.add_scalars(-other.x, -other.y, -other.z)
    }

    pub fn subtract_scalars(&self, x: f64, y: f64, z: f64) -> Self {
        self.add_scalars(-x, -y, -z)
    }

    pub fn multiply(&self, number: f64) -> Self {
        Self::new(self.x * number, self.y * number, self.z * number)
    }

    pub fn divide(&self, number: f64) -> Self {
        Self::new(self.x / number, self.y / number, self.z / number)
    }

    pub fn ceil(&self) -> Self {
        Self::new(
            whole_number(self.x.ceil()),
            whole_number(self.y.ceil()),
            whole_number(self.z.ceil()),
        )
    }

    pub fn floor(&self) -> Self {
        Self::new(
            whole_number(self.x.floor()),
            whole_number(self.y.floor()),
            whole_number(self.z.floor()),
        )
    }

    /// Rounds every component to `precision` decimal digits.
    ///
    /// With a precision of zero or less the components end up as whole
    /// numbers.
    pub fn round(&self, precision: i32, mode: RoundingMode) -> Self {
        Self::new(
            round_to_precision(self.x, precision, mode),
            round_to_precision(self.y, precision, mode),
            round_to_precision(self.z, precision, mode),
        )
    }

    /// Rounds to whole numbers, ties away from zero.
    pub fn round_default(&self) -> Self {
        self.round(0, RoundingMode::default())
    }

    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    pub fn min_components(&self, other: &Vector3) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    pub fn max_components(&self, other: &Vector3) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Offsets this vector by `step` towards the given side.
    pub fn get_side(&self, side: Side, step: i32) -> Self {
        let axis = side.axis();
        let step = if side.is_positive() {
            f64::from(step)
        } else {
            -f64::from(step)
        };

        self.with_component(axis, self.component(axis) + step)
    }

    /// Same as [Vector3::get_side] but for a raw side code.
    ///
    /// Unknown codes leave the vector untouched.
    pub fn get_side_code(&self, side: i32, step: i32) -> Self {
        match Side::from_code(side) {
            Some(side) => self.get_side(side, step),
            None => {
                trace!(side, "Ignoring unknown side code");
                *self
            }
        }
    }

    pub fn down(&self, step: i32) -> Self {
        self.get_side(Side::Down, step)
    }

    pub fn up(&self, step: i32) -> Self {
        self.get_side(Side::Up, step)
    }

    pub fn north(&self, step: i32) -> Self {
        self.get_side(Side::North, step)
    }

    pub fn south(&self, step: i32) -> Self {
        self.get_side(Side::South, step)
    }

    pub fn west(&self, step: i32) -> Self {
        self.get_side(Side::West, step)
    }

    pub fn east(&self, step: i32) -> Self {
        self.get_side(Side::East, step)
    }

    /// All six neighbours at `step` distance, in side code order.
    pub fn sides(&self, step: i32) -> impl Iterator<Item = (Side, Vector3)> {
        let origin = *self;
        Side::iter().map(move |side| (side, origin.get_side(side, step)))
    }

    /// Returns the side code opposite the given one.
    pub fn get_opposite_side(side: i32) -> Result<i32> {
        Side::opposite_code(side)
    }

    pub fn distance(&self, other: &Vector3) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Prefer this over [Vector3::distance] when only comparing distances.
    pub fn distance_squared(&self, other: &Vector3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;

        (dx * dx) + (dy * dy) + (dz * dz)
    }

    /// Chebyshev distance on the horizontal plane, height is ignored.
    pub fn max_plain_distance(&self, other: impl PlainPosition) -> f64 {
        let (x, z) = other.plain_coordinates();

        (self.x - x).abs().max((self.z - z).abs())
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns a unit vector, or [Vector3::ZERO] if this vector has no length.
    pub fn normalize(&self) -> Self {
        let length = self.length_squared();

        if length > 0.0 {
            return self.divide(length.sqrt());
        }

        Self::ZERO
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        DVec3::from(*self).dot(DVec3::from(*other))
    }

    pub fn cross(&self, other: &Vector3) -> Self {
        DVec3::from(*self).cross(DVec3::from(*other)).into()
    }

    pub fn equals(&self, other: &Vector3) -> bool {
        self == other
    }

    /// Returns the point with the given x value on the segment from this
    /// vector to `other`, if there is one.
    pub fn intermediate_with_x_value(&self, other: &Vector3, x: f64) -> Option<Self> {
        self.intermediate_with_value(other, Axis::X, x)
    }

    /// Returns the point with the given y value on the segment from this
    /// vector to `other`, if there is one.
    pub fn intermediate_with_y_value(&self, other: &Vector3, y: f64) -> Option<Self> {
        self.intermediate_with_value(other, Axis::Y, y)
    }

    /// Returns the point with the given z value on the segment from this
    /// vector to `other`, if there is one.
    pub fn intermediate_with_z_value(&self, other: &Vector3, z: f64) -> Option<Self> {
        self.intermediate_with_value(other, Axis::Z, z)
    }

    /// Intersects the segment from this vector to `other` with the plane where
    /// `axis` equals `value`.
    ///
    /// Returns `None` when the segment runs (nearly) parallel to that plane or
    /// when the plane is crossed outside of the segment.
    pub fn intermediate_with_value(&self, other: &Vector3, axis: Axis, value: f64) -> Option<Self> {
        let diff = *other - *self;
        let axis_diff = diff.component(axis);

        if axis_diff * axis_diff < INTERMEDIATE_EPSILON {
            return None;
        }

        let f = (value - self.component(axis)) / axis_diff;

        if f < 0.0 || f > 1.0 {
            return None;
        }

        Some((*self + diff * f).with_component(axis, value))
    }
}

impl AsVector3 for Vector3 {
    fn as_vector3(&self) -> Vector3 {
        *self
    }
}

impl AsVector3 for DVec3 {
    fn as_vector3(&self) -> Vector3 {
        (*self).into()
    }
}

/// Components use Rust's shortest round-trip float formatting, so values
/// without an exact decimal form print in full (`0.1 + 0.2` prints as
/// `0.30000000000000004`) and large magnitudes are never written in exponent
/// notation.
impl Display for Vector3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector3(x={},y={},z={})", self.x, self.y, self.z)
    }
}

impl FromStr for Vector3 {
    type Err = WorldMathError;

    /// Parses a vector written as `x,y,z`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || WorldMathError::InvalidVector(s.to_owned());

        let values = s
            .split(',')
            .map(|value| value.trim().parse::<f64>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>>>()?;

        match values[..] {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(invalid()),
        }
    }
}

impl From<DVec3> for Vector3 {
    fn from(value: DVec3) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<Vector3> for DVec3 {
    fn from(value: Vector3) -> Self {
        DVec3::new(value.x, value.y, value.z)
    }
}

impl From<IVec3> for Vector3 {
    fn from(value: IVec3) -> Self {
        value.as_dvec3().into()
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl core::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Vector3::add(&self, &rhs)
    }
}

impl core::ops::AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl core::ops::SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl core::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl core::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.multiply(rhs)
    }
}

impl core::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        self.divide(rhs)
    }
}

impl Sum for Vector3 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}

#[cfg(test)]
mod test {
    use glam::{DVec2, Vec2};

    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(a: Vector3, b: Vector3) {
        assert!(
            a.distance(&b) < TOLERANCE,
            "expected {} to be close to {}",
            a,
            b
        );
    }

    #[test]
    fn accessors_and_floors() {
        let v = Vector3::new(1.5, -0.5, -3.0);

        assert_eq!(v.x(), 1.5);
        assert_eq!(v.y(), -0.5);
        assert_eq!(v.z(), -3.0);
        assert_eq!(v.floor_x(), 1);
        assert_eq!(v.floor_y(), -1);
        assert_eq!(v.floor_z(), -3);
        assert_eq!(v.block_position(), I64Vec3::new(1, -1, -3));
        assert_eq!(Vector3::default(), Vector3::ZERO);
    }

    #[test]
    fn add_and_subtract() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 10.0);

        assert_eq!(a.add(&b), Vector3::new(-3.0, 2.5, 13.0));
        assert_eq!(a.add_scalars(1.0, 0.0, 0.0), Vector3::new(2.0, 2.0, 3.0));
        assert_eq!(a.subtract_scalars(1.0, 2.0, 3.0), Vector3::ZERO);
        assert!(a.subtract(&a).equals(&Vector3::ZERO));
        assert_close(a.add(&b).subtract(&b), a);

        assert_eq!(a + b, a.add(&b));
        assert_eq!(a - b, a.subtract(&b));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c -= b;
        assert_close(c, a);
    }

    #[test]
    fn scaling() {
        let v = Vector3::new(1.0, -2.0, 4.0);

        assert_eq!(v.multiply(2.0), Vector3::new(2.0, -4.0, 8.0));
        assert_eq!(v.divide(2.0), Vector3::new(0.5, -1.0, 2.0));
        assert_eq!(v * 2.0, v.multiply(2.0));
        assert_eq!(v / 2.0, v.divide(2.0));

        let by_zero = Vector3::new(1.0, -1.0, 0.0).divide(0.0);
        assert_eq!(by_zero.x, f64::INFINITY);
        assert_eq!(by_zero.y, f64::NEG_INFINITY);
        assert!(by_zero.z.is_nan());
    }

    #[test]
    fn ceil_floor_abs() {
        let v = Vector3::new(1.2, -1.2, 3.0);

        assert_eq!(v.ceil(), Vector3::new(2.0, -1.0, 3.0));
        assert_eq!(v.floor(), Vector3::new(1.0, -2.0, 3.0));
        assert_eq!(v.abs(), Vector3::new(1.2, 1.2, 3.0));

        let near_zero = Vector3::new(-0.4, -0.5, 0.2);
        assert_eq!(near_zero.ceil().to_string(), "Vector3(x=0,y=0,z=1)");
        assert_eq!(
            Vector3::new(-0.0, 0.3, -1.0).floor().to_string(),
            "Vector3(x=0,y=0,z=-1)"
        );
    }

    #[test]
    fn rounding() {
        let v = Vector3::new(1.25, -1.5, 2.4);

        assert_eq!(
            v.round(1, RoundingMode::HalfUp),
            Vector3::new(1.3, -1.5, 2.4)
        );
        assert_eq!(v.round_default(), Vector3::new(1.0, -2.0, 2.0));
        assert_eq!(
            v.round(0, RoundingMode::HalfEven),
            Vector3::new(1.0, -2.0, 2.0)
        );
        assert_eq!(
            Vector3::new(0.5, -0.5, 2.5)
                .round(0, RoundingMode::HalfDown)
                .to_string(),
            "Vector3(x=0,y=0,z=2)"
        );
        assert_eq!(
            Vector3::new(-0.4, -0.5, 0.2)
                .round(0, RoundingMode::HalfUp)
                .to_string(),
            "Vector3(x=0,y=-1,z=0)"
        );
        assert_eq!(
            Vector3::new(1234.0, 0.0, 0.0).round(-400, RoundingMode::HalfUp),
            Vector3::ZERO
        );
    }

    #[test]
    fn distances() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 6.0, 3.0);

        assert_eq!(a.distance_squared(&b), 25.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.distance(&b), b.distance(&a));
        assert!(a.distance_squared(&b) >= 0.0);
    }

    #[test]
    fn max_plain_distance_shapes() {
        let v = Vector3::new(1.0, 100.0, 1.0);

        assert_eq!(v.max_plain_distance(Vector3::new(4.0, -50.0, 3.0)), 3.0);
        assert_eq!(v.max_plain_distance(&Vector3::new(2.0, 0.0, -5.0)), 6.0);
        assert_eq!(v.max_plain_distance(DVec2::new(4.0, 3.0)), 3.0);
        assert_eq!(v.max_plain_distance(Vec2::new(1.0, -1.0)), 2.0);
        assert_eq!(v.max_plain_distance((1.0, 1.0)), 0.0);
        assert_eq!(v.max_plain_distance(-2.0), 3.0);
    }

    #[test]
    fn length_and_normalize() {
        let v = Vector3::new(3.0, 0.0, 4.0);

        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.normalize(), Vector3::new(0.6, 0.0, 0.8));
        assert!((Vector3::new(-7.0, 2.0, 0.1).normalize().length() - 1.0).abs() < TOLERANCE);

        assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
        assert_eq!(
            Vector3::new(f64::NAN, 0.0, 0.0).normalize(),
            Vector3::ZERO
        );
    }

    #[test]
    fn dot_and_cross() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);

        assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(x.dot(&y), 0.0);

        let a = Vector3::new(1.5, -2.0, 3.25);
        let b = Vector3::new(-4.0, 0.5, 2.0);
        let c = a.cross(&b);

        assert_eq!(a.dot(&b), -6.0 - 1.0 + 6.5);
        assert!(c.dot(&a).abs() < TOLERANCE);
        assert!(c.dot(&b).abs() < TOLERANCE);
    }

    #[test]
    fn neighbours() {
        let origin = Vector3::ZERO;

        assert_eq!(origin.get_side(Side::Up, 1), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(origin.get_side_code(1, 1), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(origin.get_side_code(99, 1), origin);
        assert_eq!(origin.get_side_code(-1, 1), origin);

        assert_eq!(origin.down(2), Vector3::new(0.0, -2.0, 0.0));
        assert_eq!(origin.up(2), Vector3::new(0.0, 2.0, 0.0));
        assert_eq!(origin.north(2), Vector3::new(0.0, 0.0, -2.0));
        assert_eq!(origin.south(2), Vector3::new(0.0, 0.0, 2.0));
        assert_eq!(origin.west(2), Vector3::new(-2.0, 0.0, 0.0));
        assert_eq!(origin.east(2), Vector3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn sides_match_offsets() {
        let origin = Vector3::new(10.5, 64.0, -3.0);
        let sides = origin.sides(1).collect::<Vec<_>>();

        assert_eq!(sides.len(), 6);

        for (index, (side, neighbour)) in sides.into_iter().enumerate() {
            assert_eq!(side.code(), index as i32);
            assert_eq!(origin.distance(&neighbour), 1.0);
            assert_eq!(neighbour - origin, Vector3::from(side.offset()));
        }
    }

    #[test]
    fn opposite_side_through_vector() {
        for side in 0..=5 {
            let opposite = Vector3::get_opposite_side(side).unwrap();
            assert_eq!(Vector3::get_opposite_side(opposite), Ok(side));
        }

        assert!(Vector3::get_opposite_side(6).is_err());
        assert!(Vector3::get_opposite_side(-1).is_err());
    }

    #[test]
    fn intermediate_values() {
        let start = Vector3::ZERO;
        let end = Vector3::new(10.0, 10.0, 10.0);

        assert_eq!(
            start.intermediate_with_x_value(&end, 5.0),
            Some(Vector3::new(5.0, 5.0, 5.0))
        );
        assert_eq!(
            start.intermediate_with_y_value(&Vector3::new(2.0, 4.0, -8.0), 1.0),
            Some(Vector3::new(0.5, 1.0, -2.0))
        );
        assert_eq!(
            start.intermediate_with_z_value(&end, 10.0),
            Some(Vector3::new(10.0, 10.0, 10.0))
        );

        assert_eq!(
            start.intermediate_with_x_value(&Vector3::new(0.0, 10.0, 10.0), 5.0),
            None
        );
        assert_eq!(start.intermediate_with_x_value(&end, 20.0), None);
        assert_eq!(start.intermediate_with_x_value(&end, -0.1), None);
    }

    #[test]
    fn display_and_parse() {
        let v = Vector3::new(1.0, 2.5, -3.0);

        assert_eq!(v.to_string(), "Vector3(x=1,y=2.5,z=-3)");
        assert_eq!("1,2.5,-3".parse::<Vector3>(), Ok(v));
        assert_eq!(" 1 , 2.5 , -3 ".parse::<Vector3>(), Ok(v));

        assert!("1,2".parse::<Vector3>().is_err());
        assert!("1,2,3,4".parse::<Vector3>().is_err());
        assert!("1,two,3".parse::<Vector3>().is_err());
    }

    #[test]
    fn conversions() {
        let v = Vector3::new(1.0, 2.0, 3.0);

        assert_eq!(v.as_vector3(), v);
        assert_eq!(DVec3::from(v), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(DVec3::new(1.0, 2.0, 3.0).as_vector3(), v);
        assert_eq!(Vector3::from(IVec3::new(1, 2, 3)), v);
        assert_eq!(Vector3::from((1.0, 2.0, 3.0)), v);
        assert_eq!(Vector3::from([1.0, 2.0, 3.0]), v);
    }

    #[test]
    fn component_helpers() {
        let a = Vector3::new(1.0, 5.0, -2.0);
        let b = Vector3::new(3.0, -1.0, -2.5);

        assert_eq!(a.component(Axis::Y), 5.0);
        assert_eq!(a.with_component(Axis::Z, 7.0), Vector3::new(1.0, 5.0, 7.0));
        assert_eq!(a.min_components(&b), Vector3::new(1.0, -1.0, -2.5));
        assert_eq!(a.max_components(&b), Vector3::new(3.0, 5.0, -2.0));
        assert_eq!([a, b].into_iter().sum::<Vector3>(), a + b);
    }
}
