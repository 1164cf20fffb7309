//! Raw-to-semantic token classification
//!
//! The logos pass stays vanilla and value-free; this pass attaches the
//! semantics. Numbers are parsed, sign characters become [`Sign`]
//! tokens, and candidate unit words are resolved through a
//! case-insensitive alias table. Keeping classification out of the raw
//! lexer isolates the unit vocabulary in one place.

use crate::angle::ast::Sign;
use crate::angle::lexer::lexer_impl::Span;
use crate::angle::lexer::tokens::{RawToken, Token};
use crate::angle::MalformedAngleError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
enum UnitClass {
    Hour,
    Degree,
    Minute,
    Second,
    Simple(&'static str),
}

/// Alias table for unit markers. Keys are lowercase; simple units map
/// to their canonical name.
static UNIT_ALIASES: Lazy<HashMap<&'static str, UnitClass>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for alias in ["h", "hr", "hour", "hours"] {
        table.insert(alias, UnitClass::Hour);
    }
    for alias in ["d", "deg", "degree", "degrees", "°"] {
        table.insert(alias, UnitClass::Degree);
    }
    for alias in [
        "m",
        "min",
        "minute",
        "minutes",
        "arcmin",
        "arcminute",
        "arcminutes",
        "′",
        "'",
    ] {
        table.insert(alias, UnitClass::Minute);
    }
    for alias in [
        "s",
        "sec",
        "second",
        "seconds",
        "arcsec",
        "arcsecond",
        "arcseconds",
        "″",
        "\"",
    ] {
        table.insert(alias, UnitClass::Second);
    }
    for (alias, canonical) in [
        ("rad", "rad"),
        ("radian", "rad"),
        ("radians", "rad"),
        ("mas", "mas"),
        ("uas", "uas"),
    ] {
        table.insert(alias, UnitClass::Simple(canonical));
    }
    table
});

/// Convert raw tokens into semantic tokens
///
/// Integer lexemes that overflow `u64` and words outside the alias
/// table are reported as lex errors with their offset.
pub fn classify(
    raw: Vec<(RawToken, Span)>,
    source: &str,
) -> Result<Vec<(Token, Span)>, MalformedAngleError> {
    raw.into_iter()
        .map(|(token, span)| {
            let slice = &source[span.clone()];
            let semantic = match token {
                RawToken::Plus => Token::Sign(Sign::Positive),
                RawToken::Minus => Token::Sign(Sign::Negative),
                RawToken::Int => {
                    let value = slice.parse::<u64>().map_err(|_| {
                        MalformedAngleError::at(
                            source,
                            span.start,
                            format!("integer {:?} out of range", slice),
                        )
                    })?;
                    Token::UInt(value)
                }
                RawToken::Float => Token::UFloat(slice.to_string()),
                RawToken::Colon => Token::Colon,
                RawToken::Word => classify_word(slice).ok_or_else(|| {
                    MalformedAngleError::at(
                        source,
                        span.start,
                        format!("unrecognized unit {:?}", slice),
                    )
                })?,
            };
            Ok((semantic, span))
        })
        .collect()
}

fn classify_word(word: &str) -> Option<Token> {
    let key = word.to_lowercase();
    UNIT_ALIASES.get(key.as_str()).map(|class| match class {
        UnitClass::Hour => Token::Hour,
        UnitClass::Degree => Token::Degree,
        UnitClass::Minute => Token::Minute,
        UnitClass::Second => Token::Second,
        UnitClass::Simple(canonical) => Token::SimpleUnit((*canonical).to_string()),
    })
}
