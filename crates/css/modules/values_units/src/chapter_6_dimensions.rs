//! CSS Values & Units Level 3 — §6 Dimensions (lengths subset).
//! Reference: <https://www.w3.org/TR/css-values-3/#lengths>

use crate::ParseError;
use crate::chapter_4_numbers::serialize_number;
use cssparser::{Parser, Token};

/// Supported subset of CSS <length>: px, em, rem, vw, vh, plus unitless zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Pixels,
    Ems,
    RootEms,
    ViewportWidth,
    ViewportHeight,
}

impl LengthUnit {
    fn from_unit_str(unit: &str) -> Option<Self> {
        match unit.to_ascii_lowercase().as_str() {
            "px" => Some(Self::Pixels),
            "em" => Some(Self::Ems),
            "rem" => Some(Self::RootEms),
            "vw" => Some(Self::ViewportWidth),
            "vh" => Some(Self::ViewportHeight),
            _ => None,
        }
    }
}

/// A CSS <length> value with unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

/// Format a pixel amount as written into an inline style, e.g. `-20px` or `NaNpx`.
pub fn format_px(value: f64) -> String {
    format!("{}px", serialize_number(value))
}

/// Map an already-consumed token to a `<length>`.
pub(crate) fn length_from_token(token: &Token<'_>) -> Result<Length, ParseError> {
    match *token {
        Token::Dimension {
            value, ref unit, ..
        } => LengthUnit::from_unit_str(unit.as_ref())
            .map(|unit_kind| Length {
                value,
                unit: unit_kind,
            })
            .ok_or(ParseError::UnexpectedToken),
        Token::Number { value, .. } if value == 0.0 => Ok(Length {
            value: 0.0,
            unit: LengthUnit::Pixels,
        }),
        _ => Err(ParseError::UnexpectedToken),
    }
}

/// Parse a CSS <length> (§6.2). Supports px/em/rem/vw/vh and unitless zero.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a supported `<length>`.
pub fn parse_length(input: &mut Parser) -> Result<Length, ParseError> {
    let token = input
        .next()
        .map_err(|_| ParseError::UnexpectedToken)?
        .clone();
    length_from_token(&token)
}
