//! CSS Values & Units Level 3 — §4 Numbers
//!
//! Directive arguments and the root scale attribute arrive as plain strings and are
//! coerced to numbers loosely: bad input becomes `NaN` instead of an error, and the
//! `NaN` surfaces later as an unparsable length.

/// Characters trimmed before coercion: tab, vertical tab, form feed, space, no-break
/// space, BOM, the `Zs` space separators and the four line terminators. U+0085 is not
/// among them.
const fn is_coercion_whitespace(character: char) -> bool {
    matches!(
        character,
        '\t' | '\n'
            | '\u{B}'
            | '\u{C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Coerce a string to an `f64`.
///
/// - Surrounding whitespace is ignored; an empty string is `0`.
/// - Decimal literals with optional sign, fraction and exponent (`-1.5e3`, `.5`, `5.`).
/// - `0x`, `0o` and `0b` unsigned integer literals.
/// - `Infinity`, `+Infinity`, `-Infinity`.
/// - Anything else is `NaN`.
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim_matches(is_coercion_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }
    if is_decimal_literal(trimmed) {
        return trimmed.parse::<f64>().unwrap_or(f64::NAN);
    }
    f64::NAN
}

/// `0x1F`, `0o17`, `0b101`; no sign allowed.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let prefix = text.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = text.get(2..)?;
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let mut value = 0.0_f64;
    for character in digits.chars() {
        let Some(digit) = character.to_digit(radix) else {
            return Some(f64::NAN);
        };
        value = value.mul_add(f64::from(radix), f64::from(digit));
    }
    Some(value)
}

/// `[+-]? (digits [. digits?]? | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut index = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        index += 1;
    }
    let int_start = index;
    while bytes.get(index).is_some_and(u8::is_ascii_digit) {
        index += 1;
    }
    let mut mantissa_digits = index - int_start;
    if bytes.get(index) == Some(&b'.') {
        index += 1;
        let frac_start = index;
        while bytes.get(index).is_some_and(u8::is_ascii_digit) {
            index += 1;
        }
        mantissa_digits += index - frac_start;
    }
    if mantissa_digits == 0 {
        return false;
    }
    if matches!(bytes.get(index), Some(b'e' | b'E')) {
        index += 1;
        if matches!(bytes.get(index), Some(b'+' | b'-')) {
            index += 1;
        }
        let exp_start = index;
        while bytes.get(index).is_some_and(u8::is_ascii_digit) {
            index += 1;
        }
        if index == exp_start {
            return false;
        }
    }
    index == bytes.len()
}

/// Serialize a number the way it is interpolated into a style string.
///
/// Non-finite values keep their textual names so that they fail CSS parsing later,
/// and negative zero prints as `0`. Magnitudes of `1e21` and above, or below `1e-6`,
/// use exponent notation with an explicit sign (`1e+21`, `1.5e-7`).
pub fn serialize_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        };
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }
    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}
