//! CSS Values & Units Level 3 — §5 Percentages and the `<length-percentage>` mix.
//! Reference: <https://www.w3.org/TR/css-values-3/#percentages>

use crate::chapter_6_dimensions::{Length, length_from_token};
use crate::ParseError;
use cssparser::{Parser, Token};

/// A CSS <percentage>, stored as a fraction (`50%` is `0.5`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentage(pub f32);

/// Either side of `<length-percentage>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LengthPercentage {
    Length(Length),
    Percentage(Percentage),
}

impl LengthPercentage {
    /// True when the value is strictly below zero.
    pub fn is_negative(self) -> bool {
        match self {
            Self::Length(length) => length.value < 0.0,
            Self::Percentage(Percentage(fraction)) => fraction < 0.0,
        }
    }
}

/// Parse a CSS <percentage> (§5.1).
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<percentage>`.
pub fn parse_percentage(input: &mut Parser) -> Result<Percentage, ParseError> {
    match input.next() {
        Ok(&Token::Percentage { unit_value, .. }) => Ok(Percentage(unit_value)),
        _ => Err(ParseError::UnexpectedToken),
    }
}

/// Parse a CSS <length-percentage>.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is neither a length nor a percentage.
pub fn parse_length_percentage(input: &mut Parser) -> Result<LengthPercentage, ParseError> {
    let token = input
        .next()
        .map_err(|_| ParseError::UnexpectedToken)?
        .clone();
    if let Token::Percentage { unit_value, .. } = token {
        return Ok(LengthPercentage::Percentage(Percentage(unit_value)));
    }
    length_from_token(&token).map(LengthPercentage::Length)
}
