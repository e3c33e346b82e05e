//! Low-level nom parser functions for spacing and size values.
//!
//! Lengths resolve to pixels. A bare number is already pixels; suffixed
//! values are converted at parse time so nothing downstream ever sees a unit.

use crate::extent::Extent;
use crate::spacing::Sides;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while_m_n};
use nom::character::complete::{char, space1};
use nom::combinator::{map, map_res, opt, recognize};
use nom::multi::separated_list1;
use nom::sequence::pair;
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur while resolving style values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },

    #[error("Negative value for '{property}': {value}")]
    Negative { property: String, value: f32 },

    #[error("'auto' is not allowed for '{0}'")]
    AutoNotAllowed(String),
}

pub const PX_PER_PT: f32 = 96.0 / 72.0;
pub const PX_PER_IN: f32 = 96.0;
pub const PX_PER_CM: f32 = 96.0 / 2.54;
pub const PX_PER_MM: f32 = 96.0 / 25.4;

// --- Helper Parsers ---

fn digits(input: &str) -> IResult<&str, &str> {
    take_while_m_n(1, 10, |c: char| c.is_ascii_digit()).parse(input)
}

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(pair(
            opt(alt((char('+'), char('-')))),
            alt((
                recognize(pair(digits, opt(pair(char('.'), digits)))),
                recognize(pair(char('.'), digits)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

// --- Unit & Length Parsers ---

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        map(tag_no_case("px"), |_| 1.0),
        map(tag_no_case("pt"), |_| PX_PER_PT),
        map(tag_no_case("in"), |_| PX_PER_IN),
        map(tag_no_case("cm"), |_| PX_PER_CM),
        map(tag_no_case("mm"), |_| PX_PER_MM),
    ))
    .parse(input)
}

/// Parses a length with an optional unit suffix into pixels
/// (e.g. "12", "12px", "9pt", "1in", "10mm").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, value) = parse_f32(input)?;
    let (input, multiplier) = opt(parse_unit).parse(input)?;
    Ok((input, value * multiplier.unwrap_or(1.0)))
}

/// Parses an extent: a length or the keyword `auto`.
pub fn parse_extent(input: &str) -> IResult<&str, Extent> {
    alt((
        map(tag_no_case("auto"), |_| Extent::Auto),
        map(parse_length, Extent::Fixed),
    ))
    .parse(input)
}

/// Parses CSS shorthand spacing (1, 2, 3 or 4 lengths, top/right/bottom/left).
pub fn parse_shorthand_sides(input: &str) -> Result<Sides, StyleParseError> {
    let trimmed = input.trim();
    if trimmed.split_whitespace().any(|part| part.eq_ignore_ascii_case("auto")) {
        return Err(StyleParseError::AutoNotAllowed(trimmed.to_string()));
    }

    match separated_list1(space1, parse_length).parse(trimmed) {
        Ok(("", parts)) => match parts.as_slice() {
            [all] => Ok(Sides::all(*all)),
            [y, x] => Ok(Sides::new(*y, *x, *y, *x)),
            [top, x, bottom] => Ok(Sides::new(*top, *x, *bottom, *x)),
            [top, right, bottom, left] => Ok(Sides::new(*top, *right, *bottom, *left)),
            _ => Err(StyleParseError::Parse(format!(
                "Invalid number of values for spacing shorthand: got {}, expected 1 to 4.",
                parts.len()
            ))),
        },
        _ => Err(StyleParseError::Parse(format!(
            "Failed to parse spacing value: '{}'",
            input
        ))),
    }
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

/// Resolves a single length string to a finite, non-negative pixel value.
pub fn resolve_length(property: &str, input: &str) -> Result<f32, StyleParseError> {
    if input.trim().eq_ignore_ascii_case("auto") {
        return Err(StyleParseError::AutoNotAllowed(property.to_string()));
    }
    let value = run_parser(parse_length, input).map_err(|_| StyleParseError::InvalidValue {
        property: property.to_string(),
        value: input.to_string(),
    })?;
    check_pixels(property, value)
}

/// Rejects negative and non-finite pixel values.
pub fn check_pixels(property: &str, value: f32) -> Result<f32, StyleParseError> {
    if !value.is_finite() {
        return Err(StyleParseError::InvalidValue {
            property: property.to_string(),
            value: value.to_string(),
        });
    }
    if value < 0.0 {
        return Err(StyleParseError::Negative {
            property: property.to_string(),
            value,
        });
    }
    Ok(value)
}
