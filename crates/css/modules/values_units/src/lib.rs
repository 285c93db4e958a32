//! CSS Values and Units Module Level 3 — the value grammars inline styles are checked against.
//! Reference: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the CSS Values table of contents.
pub mod chapter_4_numbers;
pub mod chapter_5_percentages;
pub mod chapter_6_dimensions;
pub mod chapter_9_colors;

// Re-exports for ergonomic access from other crates.
pub use chapter_4_numbers::{coerce_number, serialize_number};
pub use chapter_5_percentages::{LengthPercentage, Percentage, parse_length_percentage, parse_percentage};
pub use chapter_6_dimensions::{Length, LengthUnit, format_px, parse_length};
pub use chapter_9_colors::{Color, parse_color};

use cssparser::{Parser, ParserInput};

/// Parse error for Values & Units parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
    /// A value parsed but tokens were left over.
    TrailingInput,
}

/// Run `parse` over the whole of `text`, requiring every non-whitespace token to be consumed.
///
/// # Errors
/// Propagates the grammar error, or `ParseError::TrailingInput` when tokens remain.
pub fn parse_entire<T>(
    text: &str,
    parse: impl FnOnce(&mut Parser<'_, '_>) -> Result<T, ParseError>,
) -> Result<T, ParseError> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let value = parse(&mut parser)?;
    parser
        .expect_exhausted()
        .map_err(|_| ParseError::TrailingInput)?;
    Ok(value)
}
