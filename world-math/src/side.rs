use glam::IVec3;
use strum::{Display, EnumCount, EnumIter, FromRepr, IntoStaticStr};

use crate::axis::Axis;
use crate::errors::{Result, WorldMathError};

/// One of the six axis-aligned directions a block face can point to.
///
/// The discriminants are the side codes used on the wire and in world data.
/// Opposite sides differ only in the lowest bit, and every pair of adjacent
/// codes shares an axis:
/// - Down / Up are -Y / +Y
/// - North / South are -Z / +Z
/// - West / East are -X / +X
#[repr(u8)]
#[derive(
    Debug, Copy, Clone, Display, EnumCount, EnumIter, FromRepr, IntoStaticStr, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Down = 0,
    Up = 1,
    North = 2,
    South = 3,
    West = 4,
    East = 5,
}

impl Side {
    pub const ALL: [Side; Side::COUNT] = [
        Side::Down,
        Side::Up,
        Side::North,
        Side::South,
        Side::West,
        Side::East,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        u8::try_from(code).ok().and_then(Self::from_repr)
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Returns the side code opposite the given one.
    ///
    /// Only the codes 0 to 5 are accepted, anything else is an
    /// [WorldMathError::InvalidSide].
    pub fn opposite_code(code: i32) -> Result<i32> {
        if (0..=5).contains(&code) {
            Ok(code ^ 0x01)
        } else {
            Err(WorldMathError::InvalidSide(code))
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Self::Down | Self::Up => Axis::Y,
            Self::North | Self::South => Axis::Z,
            Self::West | Self::East => Axis::X,
        }
    }

    /// Whether stepping towards this side increases the coordinate on its axis.
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Up | Self::South | Self::East)
    }

    /// The unit block offset pointing towards this side.
    pub fn offset(self) -> IVec3 {
        let sign = if self.is_positive() { 1 } else { -1 };

        match self.axis() {
            Axis::X => IVec3::new(sign, 0, 0),
            Axis::Y => IVec3::new(0, sign, 0),
            Axis::Z => IVec3::new(0, 0, sign),
        }
    }
}

impl TryFrom<i32> for Side {
    type Error = WorldMathError;

    fn try_from(code: i32) -> Result<Self> {
        Self::from_code(code).ok_or(WorldMathError::InvalidSide(code))
    }
}

impl From<Side> for i32 {
    fn from(side: Side) -> Self {
        side.code()
    }
}
