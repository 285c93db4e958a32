use crate::scale::RootScale;
use core::fmt;
use core::str::FromStr;
use css_box::Edges;
use css_values_units::coerce_number;

/// Separator used by the declarative `v-trigger-area:10*20` form.
pub const DEFAULT_DELIMITER: char = '*';

/// Parsed directive argument, one variant per supported token count.
///
/// Token values are unitless; `NaN` tokens are kept as-is on the lenient path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArgSpec {
    /// All four sides.
    One(f64),
    /// Vertical (top and bottom), horizontal (left and right).
    Two(f64, f64),
    /// Top, horizontal, bottom.
    Three(f64, f64, f64),
    /// Top, right, bottom, left.
    Four(f64, f64, f64, f64),
    /// Any other token count. No padding is produced.
    Unsupported { count: usize },
}

impl ArgSpec {
    /// Parse without validation. Never fails: non-numeric tokens become `NaN`
    /// and wrong counts become [`ArgSpec::Unsupported`].
    pub fn parse_lenient(arg: &str, delimiter: char) -> Self {
        let tokens: Vec<f64> = arg.split(delimiter).map(coerce_number).collect();
        Self::from_tokens(&tokens)
    }

    /// Parse and reject anything the lenient path would silently degrade.
    ///
    /// # Errors
    /// [`ArgSpecError::WrongCount`] for a count outside 1–4,
    /// [`ArgSpecError::InvalidToken`] for a non-finite token and
    /// [`ArgSpecError::NegativeToken`] for a value below zero.
    pub fn parse_strict(arg: &str, delimiter: char) -> Result<Self, ArgSpecError> {
        let raw: Vec<&str> = arg.split(delimiter).collect();
        let mut tokens = Vec::with_capacity(raw.len());
        for (index, text) in raw.iter().enumerate() {
            let value = coerce_number(text);
            if !value.is_finite() {
                return Err(ArgSpecError::InvalidToken {
                    index,
                    token: (*text).to_owned(),
                });
            }
            if value < 0.0 {
                return Err(ArgSpecError::NegativeToken {
                    index,
                    token: (*text).to_owned(),
                });
            }
            tokens.push(value);
        }
        match Self::from_tokens(&tokens) {
            Self::Unsupported { count } => Err(ArgSpecError::WrongCount { count }),
            spec => Ok(spec),
        }
    }

    pub fn from_tokens(tokens: &[f64]) -> Self {
        match *tokens {
            [all] => Self::One(all),
            [vertical, horizontal] => Self::Two(vertical, horizontal),
            [top, horizontal, bottom] => Self::Three(top, horizontal, bottom),
            [top, right, bottom, left] => Self::Four(top, right, bottom, left),
            _ => Self::Unsupported {
                count: tokens.len(),
            },
        }
    }

    /// Number of tokens the argument had.
    pub const fn count(&self) -> usize {
        match *self {
            Self::One(..) => 1,
            Self::Two(..) => 2,
            Self::Three(..) => 3,
            Self::Four(..) => 4,
            Self::Unsupported { count } => count,
        }
    }

    /// Per-side padding in pixels, or `None` for an unsupported count.
    pub fn insets(&self, scale: RootScale) -> Option<Edges<f64>> {
        let px = |value: f64| scale.px(value);
        match *self {
            Self::One(all) => Some(Edges::uniform(px(all))),
            Self::Two(vertical, horizontal) => Some(Edges::symmetric(px(vertical), px(horizontal))),
            Self::Three(top, horizontal, bottom) => Some(Edges {
                top: px(top),
                right: px(horizontal),
                bottom: px(bottom),
                left: px(horizontal),
            }),
            Self::Four(top, right, bottom, left) => Some(Edges {
                top: px(top),
                right: px(right),
                bottom: px(bottom),
                left: px(left),
            }),
            Self::Unsupported { .. } => None,
        }
    }
}

/// Strict parsing accepts `*`-separated, finite, non-negative numbers only.
impl FromStr for ArgSpec {
    type Err = ArgSpecError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(text, DEFAULT_DELIMITER)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgSpecError {
    WrongCount { count: usize },
    InvalidToken { index: usize, token: String },
    NegativeToken { index: usize, token: String },
}

impl fmt::Display for ArgSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCount { count } => {
                write!(f, "expected 1 to 4 values, got {count}")
            }
            Self::InvalidToken { index, token } => {
                write!(f, "value {index} ({token:?}) is not a finite number")
            }
            Self::NegativeToken { index, token } => {
                write!(f, "value {index} ({token:?}) is negative")
            }
        }
    }
}

impl std::error::Error for ArgSpecError {}
