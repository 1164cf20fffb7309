//! Parsed angle values
//!
//! This module defines the value types produced by a successful parse.
//! A [`ParsedAngle`] is an immutable triple of sign, magnitude and unit
//! family. Minutes and seconds are unsigned; the sign applies once, to
//! the whole angle, so `-1d30m` means minus one degree thirty
//! arcminutes.
//!
//! `Display` renders the canonical textual form of an angle. The
//! canonical form is chosen so that feeding it back through the parser
//! reproduces an equal value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sign of an angle, defaulting to positive when absent from the input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    pub fn as_f64(self) -> f64 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

/// Unsigned magnitude of an angle
///
/// Either a bare scalar (`12.5`) or up to three positional sexagesimal
/// fields (`12h34m56.7s`, `45:30:10`). Fields absent from the input are
/// zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Magnitude {
    Scalar(f64),
    Sexagesimal { whole: u64, minutes: u64, seconds: f64 },
}

impl Magnitude {
    /// Fold sexagesimal fields into a single value in the whole-field unit
    pub fn as_decimal(&self) -> f64 {
        match *self {
            Magnitude::Scalar(value) => value,
            Magnitude::Sexagesimal {
                whole,
                minutes,
                seconds,
            } => whole as f64 + minutes as f64 / 60.0 + seconds / 3600.0,
        }
    }
}

/// Unit family attached to a parsed angle
///
/// `Simple` carries the canonical name of a recognized bare unit such as
/// `rad`. `Unspecified` means the input carried no unit at all and the
/// caller supplies the intended one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleUnit {
    Hour,
    Degree,
    Arcminute,
    Arcsecond,
    Simple(String),
    Unspecified,
}

/// Result of a successful parse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedAngle {
    pub sign: Sign,
    pub magnitude: Magnitude,
    pub unit: AngleUnit,
}

impl ParsedAngle {
    /// The signed decimal value of the angle, in its own unit family
    pub fn signed_value(&self) -> f64 {
        self.sign.as_f64() * self.magnitude.as_decimal()
    }
}

impl fmt::Display for ParsedAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign.is_negative() {
            f.write_str("-")?;
        }
        match (&self.magnitude, &self.unit) {
            (
                Magnitude::Sexagesimal {
                    whole,
                    minutes,
                    seconds,
                },
                AngleUnit::Hour,
            ) => write!(f, "{whole}h{minutes}m{seconds}s"),
            (
                Magnitude::Sexagesimal {
                    whole,
                    minutes,
                    seconds,
                },
                AngleUnit::Degree,
            ) => write!(f, "{whole}d{minutes}m{seconds}s"),
            // A scalar hour/degree value keeps its decimal point so the
            // rendering stays distinct from the marker-chain notation.
            (Magnitude::Scalar(value), AngleUnit::Hour) => {
                write_scalar_with_point(f, *value)?;
                f.write_str("h")
            }
            (Magnitude::Scalar(value), AngleUnit::Degree) => {
                write_scalar_with_point(f, *value)?;
                f.write_str("d")
            }
            (magnitude, AngleUnit::Arcminute) => {
                write_magnitude(f, magnitude)?;
                f.write_str("m")
            }
            (magnitude, AngleUnit::Arcsecond) => {
                write_magnitude(f, magnitude)?;
                f.write_str("s")
            }
            (magnitude, AngleUnit::Simple(name)) => {
                write_magnitude(f, magnitude)?;
                f.write_str(name)
            }
            (magnitude, AngleUnit::Unspecified) => write_magnitude(f, magnitude),
        }
    }
}

fn write_magnitude(f: &mut fmt::Formatter<'_>, magnitude: &Magnitude) -> fmt::Result {
    match *magnitude {
        Magnitude::Scalar(value) => write!(f, "{value}"),
        Magnitude::Sexagesimal {
            whole,
            minutes,
            seconds,
        } => write!(f, "{whole}:{minutes}:{seconds}"),
    }
}

fn write_scalar_with_point(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.fract() == 0.0 {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sexagesimal(whole: u64, minutes: u64, seconds: f64) -> Magnitude {
        Magnitude::Sexagesimal {
            whole,
            minutes,
            seconds,
        }
    }

    #[test]
    fn test_display_hms() {
        let angle = ParsedAngle {
            sign: Sign::Positive,
            magnitude: sexagesimal(12, 34, 56.7),
            unit: AngleUnit::Hour,
        };
        assert_eq!(angle.to_string(), "12h34m56.7s");
    }

    #[test]
    fn test_display_negative_colon_form() {
        let angle = ParsedAngle {
            sign: Sign::Negative,
            magnitude: sexagesimal(45, 30, 10.0),
            unit: AngleUnit::Unspecified,
        };
        assert_eq!(angle.to_string(), "-45:30:10");
    }

    #[test]
    fn test_display_scalar_degree_keeps_decimal_point() {
        let angle = ParsedAngle {
            sign: Sign::Positive,
            magnitude: Magnitude::Scalar(12.0),
            unit: AngleUnit::Degree,
        };
        assert_eq!(angle.to_string(), "12.0d");
    }

    #[test]
    fn test_display_arcminute_scalar() {
        let angle = ParsedAngle {
            sign: Sign::Positive,
            magnitude: Magnitude::Scalar(30.0),
            unit: AngleUnit::Arcminute,
        };
        assert_eq!(angle.to_string(), "30m");
    }

    #[test]
    fn test_display_simple_unit() {
        let angle = ParsedAngle {
            sign: Sign::Negative,
            magnitude: Magnitude::Scalar(1.2),
            unit: AngleUnit::Simple("rad".to_string()),
        };
        assert_eq!(angle.to_string(), "-1.2rad");
    }

    #[test]
    fn test_as_decimal_folds_fields() {
        assert_eq!(sexagesimal(1, 30, 0.0).as_decimal(), 1.5);
        assert_eq!(Magnitude::Scalar(12.5).as_decimal(), 12.5);
    }

    #[test]
    fn test_signed_value_applies_sign_once() {
        let angle = ParsedAngle {
            sign: Sign::Negative,
            magnitude: sexagesimal(1, 30, 0.0),
            unit: AngleUnit::Degree,
        };
        assert_eq!(angle.signed_value(), -1.5);
    }
}
