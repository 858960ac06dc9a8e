use strum::Display;

/// One of the three coordinate axes.
#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}
