//! CSS Positioned Layout Module Level 3 — relative, absolute, fixed, sticky.
//! Reference: <https://www.w3.org/TR/css-position-3/>

use css_values_units::{parse_entire, parse_length_percentage};

/// Values of the `position` property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl Position {
    /// Parse a `position` keyword (ASCII case-insensitive).
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "static" => Some(Self::Static),
            "relative" => Some(Self::Relative),
            "absolute" => Some(Self::Absolute),
            "fixed" => Some(Self::Fixed),
            "sticky" => Some(Self::Sticky),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
            Self::Sticky => "sticky",
        }
    }

    /// Anything but `static` is a positioned box and a containing block for
    /// absolutely positioned descendants.
    pub const fn is_positioned(self) -> bool {
        !matches!(self, Self::Static)
    }
}

/// An inset value (`top`, `right`, `bottom`, `left`): `<length-percentage>` or `auto`.
pub fn is_valid_inset(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("auto") || parse_entire(text, parse_length_percentage).is_ok()
}
