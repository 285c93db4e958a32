//! CSS Box Model Module Level 3 — margins, padding and box sizing.
//! Reference: <https://www.w3.org/TR/css-box-3/>

use css_values_units::{ParseError, parse_entire, parse_length_percentage};

/// Physical box edge directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Edge {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Edge {
    /// Clockwise from the top, the order 4-value shorthands use.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    /// Longhand property name for a box property, e.g. `padding` + `Top` is `padding-top`.
    pub fn longhand(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.as_str())
    }
}

/// One value per physical edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> Edges<T> {
    pub const fn uniform(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// `vertical` for top and bottom, `horizontal` for left and right.
    pub const fn symmetric(vertical: T, horizontal: T) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Expand 1–4 shorthand values the way `padding`/`margin` do.
    ///
    /// `[a]` all sides, `[a, b]` vertical/horizontal, `[a, b, c]` top/horizontal/bottom,
    /// `[a, b, c, d]` clockwise from top. Any other count is `None`.
    pub fn from_shorthand(values: &[T]) -> Option<Self> {
        match *values {
            [all] => Some(Self::uniform(all)),
            [vertical, horizontal] => Some(Self::symmetric(vertical, horizontal)),
            [top, horizontal, bottom] => Some(Self {
                top,
                right: horizontal,
                bottom,
                left: horizontal,
            }),
            [top, right, bottom, left] => Some(Self {
                top,
                right,
                bottom,
                left,
            }),
            _ => None,
        }
    }

    pub const fn get(&self, edge: Edge) -> T {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    pub fn map<U: Copy>(self, mut convert: impl FnMut(T) -> U) -> Edges<U> {
        Edges {
            top: convert(self.top),
            right: convert(self.right),
            bottom: convert(self.bottom),
            left: convert(self.left),
        }
    }

    /// `(edge, value)` pairs clockwise from the top.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, T)> + '_ {
        Edge::ALL.into_iter().map(|edge| (edge, self.get(edge)))
    }
}

impl Edges<f64> {
    /// Top plus bottom.
    pub fn vertical_sum(&self) -> f64 {
        self.top + self.bottom
    }

    /// Left plus right.
    pub fn horizontal_sum(&self) -> f64 {
        self.left + self.right
    }
}

/// `box-sizing` keyword.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxSizing {
    #[default]
    ContentBox,
    BorderBox,
}

impl BoxSizing {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "content-box" => Some(Self::ContentBox),
            "border-box" => Some(Self::BorderBox),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ContentBox => "content-box",
            Self::BorderBox => "border-box",
        }
    }
}

/// A single `padding-*` value: a non-negative `<length-percentage>`.
pub fn is_valid_padding(text: &str) -> bool {
    parse_entire(text, parse_length_percentage).is_ok_and(|value| !value.is_negative())
}

/// A single `margin-*` value: `<length-percentage>` or `auto`.
pub fn is_valid_margin(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("auto") || parse_entire(text, parse_length_percentage).is_ok()
}

/// Split a `padding`/`margin` shorthand value into per-edge component strings.
///
/// # Errors
/// `ParseError::UnexpectedToken` when the value does not have 1–4 components.
pub fn split_shorthand(text: &str) -> Result<Edges<&str>, ParseError> {
    let parts: Vec<&str> = text.split_ascii_whitespace().collect();
    Edges::from_shorthand(&parts).ok_or(ParseError::UnexpectedToken)
}
