//! Parser module for angle strings
//!
//! Contains the combinator grammar reducing a classified token stream
//! to a [`ParsedAngle`](crate::angle::ast::ParsedAngle).

pub mod grammar;

pub use grammar::parse;
