//! Raw tokenization pass
//!
//! The actual tokenization is handled entirely by logos; this module
//! collects the tokens with their source spans and converts lexer
//! failures into [`MalformedAngleError`].

use crate::angle::lexer::tokens::RawToken;
use crate::angle::MalformedAngleError;
use logos::Logos;

/// Byte range of a token in the source string
pub type Span = std::ops::Range<usize>;

/// Tokenize a string and collect raw tokens with their spans
///
/// Fails on the first character sequence no rule matches, reporting the
/// offending slice and its byte offset.
pub fn tokenize(source: &str) -> Result<Vec<(RawToken, Span)>, MalformedAngleError> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(MalformedAngleError::at(
                    source,
                    lexer.span().start,
                    format!("unrecognized character sequence {:?}", lexer.slice()),
                ));
            }
        }
    }

    Ok(tokens)
}
