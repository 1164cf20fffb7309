//! Angle parsing pipeline
//!
//! This module orchestrates the complete parse of an angle string. The
//! pipeline consists of:
//! 1. Raw tokenization using a logos lexer
//! 2. A classification pass turning raw lexemes into semantic tokens
//!    (numbers get their values, unit words are resolved through an
//!    alias table)
//! 3. A combinator grammar reducing the token stream to a [`ParsedAngle`]
//!
//! The accepted notations are the sexagesimal families
//! (`12h34m56.7s`, `10d20m30s`), the colon and spaced shorthands
//! (`-45:30:10`, `12 34 56`), bare arcminute/arcsecond values (`30m`,
//! `10.5s`), and decimal values with an optional simple unit (`12.5`,
//! `1.2rad`).
//!
//! A parse is total and one-shot: the whole input must reduce to a
//! single angle, and any failure surfaces as [`MalformedAngleError`].
//! The pipeline holds no state between calls and never logs.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{AngleUnit, Magnitude, ParsedAngle, Sign};
pub use lexer::{lex, Span, Token};
pub use parser::parse;

use std::fmt;

/// Error produced for any input that does not reduce to an angle
///
/// Covers unrecognized characters during lexing, unknown unit words,
/// token sequences with no matching production, and trailing tokens
/// after an otherwise valid reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedAngleError {
    /// The original input string, kept for diagnostics
    pub input: String,
    /// Byte offset of the failure, when one can be pinpointed
    pub position: Option<usize>,
    /// Human-readable description of what went wrong
    pub reason: String,
}

impl MalformedAngleError {
    pub fn new(input: &str, reason: impl Into<String>) -> Self {
        MalformedAngleError {
            input: input.to_string(),
            position: None,
            reason: reason.into(),
        }
    }

    pub fn at(input: &str, offset: usize, reason: impl Into<String>) -> Self {
        MalformedAngleError {
            input: input.to_string(),
            position: Some(offset),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MalformedAngleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed angle {:?}", self.input)?;
        if let Some(position) = self.position {
            write!(f, " at offset {}", position)?;
        }
        write!(f, ": {}", self.reason)
    }
}

impl std::error::Error for MalformedAngleError {}

/// Parse an angle string into a [`ParsedAngle`]
///
/// This is the primary entry point. Each call is independent and
/// re-entrant; the function is safe to call from concurrent threads.
pub fn parse_angle(source: &str) -> Result<ParsedAngle, MalformedAngleError> {
    let tokens = lexer::lex(source)?;
    parser::parse(tokens, source)
}
