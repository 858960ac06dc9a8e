pub mod axis;
pub mod errors;
pub mod mutable;
pub mod plain;
pub mod rounding;
pub mod side;
pub mod vector3;

pub use axis::Axis;
pub use errors::{Result, WorldMathError};
pub use mutable::MutableVector3;
pub use plain::PlainPosition;
pub use rounding::RoundingMode;
pub use side::Side;
pub use vector3::{AsVector3, Vector3};
