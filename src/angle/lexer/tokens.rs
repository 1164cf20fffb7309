//! Token definitions for angle strings
//!
//! Two token layers exist. [`RawToken`] is produced directly by the
//! logos lexer and carries no values; its spans index into the source.
//! [`Token`] is the semantic layer handed to the parser, produced by the
//! classification pass in
//! [`transformations`](crate::angle::lexer::transformations).

use crate::angle::ast::Sign;
use logos::Logos;
use std::fmt;

/// Raw lexical units recognized by the logos lexer
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum RawToken {
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    // A digit run with exactly one decimal point; either side of the
    // point may be empty, but not both.
    #[regex(r"[0-9]+\.[0-9]*|\.[0-9]+", priority = 3)]
    Float,

    #[regex(r"[0-9]+", priority = 2)]
    Int,

    #[token(":")]
    Colon,

    // A candidate unit word. Classification happens in a later pass.
    #[regex("[a-zA-Z]+|°|′|″|'|\"")]
    Word,
}

/// Semantic tokens consumed by the grammar
///
/// `UFloat` keeps its lexeme rather than an `f64` so the token type
/// stays hashable; the numeric value is extracted by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Sign(Sign),
    UInt(u64),
    UFloat(String),
    Colon,
    Hour,
    Degree,
    Minute,
    Second,
    SimpleUnit(String),
}

impl Token {
    /// Check if this token is a unit marker (anything but a sign,
    /// number or separator)
    pub fn is_unit_marker(&self) -> bool {
        matches!(
            self,
            Token::Hour | Token::Degree | Token::Minute | Token::Second | Token::SimpleUnit(_)
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Sign(Sign::Positive) => f.write_str("+"),
            Token::Sign(Sign::Negative) => f.write_str("-"),
            Token::UInt(value) => write!(f, "{}", value),
            Token::UFloat(lexeme) => f.write_str(lexeme),
            Token::Colon => f.write_str(":"),
            Token::Hour => f.write_str("h"),
            Token::Degree => f.write_str("d"),
            Token::Minute => f.write_str("m"),
            Token::Second => f.write_str("s"),
            Token::SimpleUnit(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_tokens(source: &str) -> Vec<RawToken> {
        RawToken::lexer(source)
            .collect::<Result<Vec<_>, _>>()
            .expect("lexing should succeed")
    }

    #[test]
    fn test_hms_string() {
        assert_eq!(
            raw_tokens("12h34m56.7s"),
            vec![
                RawToken::Int,
                RawToken::Word,
                RawToken::Int,
                RawToken::Word,
                RawToken::Float,
                RawToken::Word,
            ]
        );
    }

    #[test]
    fn test_signed_colon_string() {
        assert_eq!(
            raw_tokens("-45:30:10"),
            vec![
                RawToken::Minus,
                RawToken::Int,
                RawToken::Colon,
                RawToken::Int,
                RawToken::Colon,
                RawToken::Int,
            ]
        );
    }

    #[test]
    fn test_whitespace_separates_tokens() {
        assert_eq!(
            raw_tokens("1 2 3"),
            vec![RawToken::Int, RawToken::Int, RawToken::Int]
        );
    }

    #[test]
    fn test_float_beats_int() {
        assert_eq!(raw_tokens("12.5"), vec![RawToken::Float]);
        assert_eq!(raw_tokens(".5"), vec![RawToken::Float]);
        assert_eq!(raw_tokens("12."), vec![RawToken::Float]);
    }

    #[test]
    fn test_unicode_unit_glyphs() {
        assert_eq!(
            raw_tokens("10°20′30″"),
            vec![
                RawToken::Int,
                RawToken::Word,
                RawToken::Int,
                RawToken::Word,
                RawToken::Int,
                RawToken::Word,
            ]
        );
    }

    #[test]
    fn test_unrecognized_character_is_an_error() {
        let results: Vec<_> = RawToken::lexer("12#34").collect();
        assert!(results.iter().any(|result| result.is_err()));
    }

    #[test]
    fn test_unit_marker_predicate() {
        assert!(Token::Hour.is_unit_marker());
        assert!(Token::SimpleUnit("rad".to_string()).is_unit_marker());
        assert!(!Token::Colon.is_unit_marker());
        assert!(!Token::UInt(12).is_unit_marker());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Sign(Sign::Negative).to_string(), "-");
        assert_eq!(Token::UInt(42).to_string(), "42");
        assert_eq!(Token::UFloat("56.7".to_string()).to_string(), "56.7");
        assert_eq!(Token::Hour.to_string(), "h");
    }
}
