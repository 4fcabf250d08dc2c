//! Parsers voor invoerformaten van de engine.

pub mod analysis_json;

pub use analysis_json::{ParseError, ParseResult, parse_str};
