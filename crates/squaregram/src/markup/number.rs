//! Number formatting for TikZ coordinates.
//!
//! Coordinates are written in the usual `repr` style for floats: the shortest
//! digits that round-trip, a trailing `.0` on integral values, and scientific
//! notation (`1e-05`, `1.5e+16`) outside `[1e-4, 1e16)`. The very first
//! partial sum of every step sequence is the integer origin and prints as a
//! bare `0`.

use std::fmt;

/// A coordinate as written into a TikZ directive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// The integer origin of a step sequence.
    Origin,
    /// Any accumulated or derived coordinate.
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Origin => f.write_str("0"),
            Self::Float(value) => write_float(f, value),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return f.write_str(if value.is_sign_negative() { "-0.0" } else { "0.0" });
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "{mantissa}e{sign}{:02}", exponent.abs());
    }

    if value.fract() == 0.0 {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}
