//! CSS Color — the `<color>` subset accepted for overlay backgrounds.
//! Reference: <https://www.w3.org/TR/css-color-3/>

use crate::ParseError;
use cssparser::{Parser, Token};

/// Bit count used to duplicate a single hex nibble into a full byte.
const NIBBLE_SHIFT: u32 = 4;

/// A minimal RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// `transparent` is transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn is_fully_transparent(self) -> bool {
        self.alpha == 0
    }
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
fn parse_hex_color(text: &str) -> Option<Color> {
    let nibbles: Vec<u8> = text
        .chars()
        .map(|character| character.to_digit(16).and_then(|digit| u8::try_from(digit).ok()))
        .collect::<Option<_>>()?;
    let channel = |high: u8, low: u8| high.wrapping_shl(NIBBLE_SHIFT) | low;
    match *nibbles.as_slice() {
        [red, green, blue] => Some(Color::rgba(
            channel(red, red),
            channel(green, green),
            channel(blue, blue),
            u8::MAX,
        )),
        [red, green, blue, alpha] => Some(Color::rgba(
            channel(red, red),
            channel(green, green),
            channel(blue, blue),
            channel(alpha, alpha),
        )),
        [r_high, r_low, g_high, g_low, b_high, b_low] => Some(Color::rgba(
            channel(r_high, r_low),
            channel(g_high, g_low),
            channel(b_high, b_low),
            u8::MAX,
        )),
        [r_high, r_low, g_high, g_low, b_high, b_low, a_high, a_low] => Some(Color::rgba(
            channel(r_high, r_low),
            channel(g_high, g_low),
            channel(b_high, b_low),
            channel(a_high, a_low),
        )),
        _ => None,
    }
}

/// Map a CSS named color (minimal subset) to an RGBA value.
fn named_color(name: &str) -> Option<Color> {
    match name.to_ascii_lowercase().as_str() {
        "transparent" => Some(Color::TRANSPARENT),
        "black" => Some(Color::rgba(0, 0, 0, u8::MAX)),
        "white" => Some(Color::rgba(255, 255, 255, u8::MAX)),
        "red" => Some(Color::rgba(255, 0, 0, u8::MAX)),
        "green" => Some(Color::rgba(0, 128, 0, u8::MAX)),
        "blue" => Some(Color::rgba(0, 0, 255, u8::MAX)),
        _ => None,
    }
}

/// Parse a CSS <color> (subset): hex notations and a handful of keywords.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for unsupported or malformed input.
pub fn parse_color(input: &mut Parser) -> Result<Color, ParseError> {
    match input.next() {
        Ok(Token::Hash(value) | Token::IDHash(value)) => {
            parse_hex_color(value.as_ref()).ok_or(ParseError::UnexpectedToken)
        }
        Ok(Token::Ident(name)) => named_color(name.as_ref()).ok_or(ParseError::UnexpectedToken),
        _ => Err(ParseError::UnexpectedToken),
    }
}
