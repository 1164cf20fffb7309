//! Lexer module for angle strings
//!
//! Tokenization runs in two stages:
//! 1. Raw tokenization using a vanilla logos lexer, which only splits
//!    the input into signs, numbers, colons and candidate unit words
//! 2. A classification pass that parses numeric values and resolves
//!    unit words through the alias table
//!
//! The split keeps the logos rules free of any unit vocabulary: adding
//! or renaming a unit alias never touches the state machine, and the
//! classification step is the single place that decides whether `m`
//! means arcminutes. Whitespace separates tokens and is otherwise
//! dropped at the raw stage.

pub mod lexer_impl;
pub mod tokens;
pub mod transformations;

pub use lexer_impl::{tokenize, Span};
pub use tokens::{RawToken, Token};
pub use transformations::classify;

use crate::angle::MalformedAngleError;

/// Main lexer function returning fully classified tokens with locations
pub fn lex(source: &str) -> Result<Vec<(Token, Span)>, MalformedAngleError> {
    let raw = tokenize(source)?;
    classify(raw, source)
}
