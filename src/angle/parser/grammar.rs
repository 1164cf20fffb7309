//! Combinator grammar for angle strings
//!
//! Grammar, in rough BNF (`sign` is optional and defaults to positive):
//!
//! ```text
//! angle     = hms | dms | arcsecond | arcminute | simple
//! ufloat    = UFLOAT | UINT
//! colon     = sign UINT ":" UINT (":" ufloat)?
//! spaced    = sign UINT UINT ufloat?
//! generic   = colon | spaced | sign UFLOAT | sign UINT
//! hms       = sign UINT HOUR (UINT (MINUTE (ufloat SECOND?)?)?)?
//!           | generic HOUR
//! dms       = sign UINT DEGREE (UINT (MINUTE (ufloat SECOND?)?)?)?
//!           | generic DEGREE
//! arcsecond = generic SECOND
//! arcminute = generic MINUTE
//! simple    = generic SIMPLE_UNIT?
//! ```
//!
//! Alternatives are ordered: the direct `sign UINT HOUR ...` chains are
//! tried before the `generic <unit>` fallback, so an input reachable
//! through both reduces through the more specific production. The whole
//! token stream must be consumed; trailing tokens fail the parse.

use chumsky::{error::SimpleReason, prelude::*, Stream};

use crate::angle::ast::{AngleUnit, Magnitude, ParsedAngle, Sign};
use crate::angle::lexer::{Span, Token};
use crate::angle::MalformedAngleError;

/// Sign and magnitude before a trailing unit marker is applied
#[derive(Debug, Clone)]
struct Generic {
    sign: Sign,
    magnitude: Magnitude,
}

impl Generic {
    fn with_unit(self, unit: AngleUnit) -> ParsedAngle {
        ParsedAngle {
            sign: self.sign,
            magnitude: self.magnitude,
            unit,
        }
    }
}

fn sign() -> impl Parser<Token, Sign, Error = Simple<Token>> + Clone {
    filter_map(|span, token| match token {
        Token::Sign(sign) => Ok(sign),
        other => Err(Simple::custom(
            span,
            format!("expected a sign, found \"{}\"", other),
        )),
    })
    .or_not()
    .map(Option::unwrap_or_default)
}

fn uint() -> impl Parser<Token, u64, Error = Simple<Token>> + Clone {
    filter_map(|span, token| match token {
        Token::UInt(value) => Ok(value),
        other => Err(Simple::custom(
            span,
            format!("expected an integer, found \"{}\"", other),
        )),
    })
}

fn ufloat_literal() -> impl Parser<Token, f64, Error = Simple<Token>> + Clone {
    filter_map(|span, token| match token {
        Token::UFloat(lexeme) => lexeme.parse::<f64>().map_err(|_| {
            Simple::custom(span, format!("invalid floating point literal \"{}\"", lexeme))
        }),
        other => Err(Simple::custom(
            span,
            format!("expected a floating point number, found \"{}\"", other),
        )),
    })
}

fn ufloat() -> impl Parser<Token, f64, Error = Simple<Token>> + Clone {
    ufloat_literal().or(uint().map(|value| value as f64))
}

fn simple_unit() -> impl Parser<Token, String, Error = Simple<Token>> + Clone {
    filter_map(|span, token| match token {
        Token::SimpleUnit(name) => Ok(name),
        other => Err(Simple::custom(
            span,
            format!("expected a unit name, found \"{}\"", other),
        )),
    })
}

fn generic() -> impl Parser<Token, Generic, Error = Simple<Token>> + Clone {
    let colon = sign()
        .then(uint())
        .then_ignore(just(Token::Colon))
        .then(uint())
        .then(just(Token::Colon).ignore_then(ufloat()).or_not())
        .map(|(((sign, whole), minutes), seconds)| Generic {
            sign,
            magnitude: Magnitude::Sexagesimal {
                whole,
                minutes,
                seconds: seconds.unwrap_or(0.0),
            },
        });

    let spaced = sign()
        .then(uint())
        .then(uint())
        .then(ufloat().or_not())
        .map(|(((sign, whole), minutes), seconds)| Generic {
            sign,
            magnitude: Magnitude::Sexagesimal {
                whole,
                minutes,
                seconds: seconds.unwrap_or(0.0),
            },
        });

    let scalar_float = sign()
        .then(ufloat_literal())
        .map(|(sign, value)| Generic {
            sign,
            magnitude: Magnitude::Scalar(value),
        });

    let scalar_int = sign().then(uint()).map(|(sign, value)| Generic {
        sign,
        magnitude: Magnitude::Scalar(value as f64),
    });

    colon.or(spaced).or(scalar_float).or(scalar_int)
}

/// Optional minutes/seconds chain after a `UINT HOUR` or `UINT DEGREE`
/// prefix. Seconds are only reachable once the minute marker is present.
fn sexagesimal_tail() -> impl Parser<Token, (u64, f64), Error = Simple<Token>> + Clone {
    uint()
        .then(
            just(Token::Minute)
                .ignore_then(ufloat().then_ignore(just(Token::Second).or_not()).or_not())
                .or_not(),
        )
        .map(|(minutes, seconds)| (minutes, seconds.flatten().unwrap_or(0.0)))
}

/// The hms/dms family: a direct marker chain, or a generic value with a
/// trailing hour/degree marker
fn sexagesimal_family(
    marker: Token,
    unit: AngleUnit,
) -> impl Parser<Token, ParsedAngle, Error = Simple<Token>> + Clone {
    let direct_unit = unit.clone();
    let direct = sign()
        .then(uint())
        .then_ignore(just(marker.clone()))
        .then(sexagesimal_tail().or_not())
        .map(move |((sign, whole), tail)| {
            let (minutes, seconds) = tail.unwrap_or((0, 0.0));
            ParsedAngle {
                sign,
                magnitude: Magnitude::Sexagesimal {
                    whole,
                    minutes,
                    seconds,
                },
                unit: direct_unit.clone(),
            }
        });

    let fallback = generic()
        .then_ignore(just(marker))
        .map(move |generic| generic.with_unit(unit.clone()));

    direct.or(fallback)
}

fn angle() -> impl Parser<Token, ParsedAngle, Error = Simple<Token>> {
    let hms = sexagesimal_family(Token::Hour, AngleUnit::Hour);
    let dms = sexagesimal_family(Token::Degree, AngleUnit::Degree);

    let arcsecond = generic()
        .then_ignore(just(Token::Second))
        .map(|generic| generic.with_unit(AngleUnit::Arcsecond));

    let arcminute = generic()
        .then_ignore(just(Token::Minute))
        .map(|generic| generic.with_unit(AngleUnit::Arcminute));

    let simple = generic()
        .then(simple_unit().or_not())
        .map(|(generic, unit)| match unit {
            Some(name) => generic.with_unit(AngleUnit::Simple(name)),
            None => generic.with_unit(AngleUnit::Unspecified),
        });

    choice((hms, dms, arcsecond, arcminute, simple)).then_ignore(end())
}

/// Reduce a classified token stream to a [`ParsedAngle`]
///
/// `source` is the original input, used for error reporting only.
pub fn parse(
    tokens: Vec<(Token, Span)>,
    source: &str,
) -> Result<ParsedAngle, MalformedAngleError> {
    let eoi = source.len()..source.len() + 1;
    let stream = Stream::from_iter(eoi, tokens.into_iter());

    angle()
        .parse(stream)
        .map_err(|errors| convert_errors(errors, source))
}

/// Keep the failure that made it furthest into the input; with ordered
/// alternatives that is the most informative one.
fn convert_errors(errors: Vec<Simple<Token>>, source: &str) -> MalformedAngleError {
    match errors.into_iter().max_by_key(|error| error.span().start) {
        Some(error) => {
            let offset = error.span().start.min(source.len());
            MalformedAngleError::at(source, offset, describe(&error))
        }
        None => MalformedAngleError::new(source, "no grammar production matches the input"),
    }
}

fn describe(error: &Simple<Token>) -> String {
    if let SimpleReason::Custom(message) = error.reason() {
        return message.clone();
    }
    match error.found() {
        Some(token) => format!("unexpected \"{}\"", token),
        None => "unexpected end of input".to_string(),
    }
}
