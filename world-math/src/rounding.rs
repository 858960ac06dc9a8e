use strum::{Display, EnumIter};

/// How ties (values exactly halfway between two candidates) are broken.
#[derive(Debug, Copy, Clone, Default, Display, EnumIter, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum RoundingMode {
    /// Ties round away from zero.
    #[default]
    HalfUp,
    /// Ties round towards zero.
    HalfDown,
    /// Ties round to the nearest even number.
    HalfEven,
    /// Ties round to the nearest odd number.
    HalfOdd,
}

impl RoundingMode {
    /// Rounds to a whole number, breaking ties according to this mode.
    pub fn round(self, value: f64) -> f64 {
        let truncated = value.trunc();

        if (value - truncated).abs() != 0.5 {
            return value.round();
        }

        match self {
            Self::HalfUp => value.round(),
            Self::HalfDown => truncated,
            Self::HalfEven => value.round_ties_even(),
            Self::HalfOdd => {
                if truncated % 2.0 != 0.0 {
                    truncated
                } else {
                    truncated + value.signum()
                }
            }
        }
    }
}

/// Rounds `value` to `precision` decimal digits.
///
/// A negative precision rounds to tens, hundreds and so on. The scaled value
/// is first cut down to 15 significant digits so that a decimal literal like
/// `1.005` rounds the way it reads instead of the way it is stored.
///
/// With a precision of zero or less the result is a whole number and never
/// negative zero.
pub fn round_to_precision(value: f64, precision: i32, mode: RoundingMode) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(precision.saturating_abs());

    if precision < 0 && factor.is_infinite() {
        return 0.0;
    }

    let scaled = if precision >= 0 {
        value * factor
    } else {
        value / factor
    };

    if !scaled.is_finite() {
        return value;
    }

    let rounded = mode.round(significant_digits(scaled));
    let result = if precision > 0 {
        rounded / factor
    } else {
        whole_number(rounded * factor)
    };

    if result.is_finite() {
        result
    } else {
        value
    }
}

/// Drops the sign of a negative zero, whole numbers have none.
pub(crate) fn whole_number(value: f64) -> f64 {
    value + 0.0
}

fn significant_digits(value: f64) -> f64 {
    format!("{value:.14e}").parse().unwrap_or(value)
}
