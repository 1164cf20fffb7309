//! # sexa
//!
//! A parser for sexagesimal angle strings.
//!
//! Angles written by hand come in many notations: `12h34m56.7s`,
//! `-45:30:10`, `10d20m30s`, `12 34 56`, `30m`, `1.2rad`, or a bare
//! decimal like `12.5`. This crate turns any of them into a normalized
//! [`ParsedAngle`] value, or rejects the string with a
//! [`MalformedAngleError`] that names the offending input.
//!
//! The main entry point is [`parse_angle`]; everything else lives under
//! the [`angle`] module.

pub mod angle;

pub use angle::{parse_angle, AngleUnit, Magnitude, MalformedAngleError, ParsedAngle, Sign};
