//! Numeric interpretation of user-entered text
//!
//! Budget and expense amounts are stored exactly as typed and only turned
//! into numbers when the balance is read. The two fields use different
//! rules:
//!
//! - An expense amount is read as a leading integer: whitespace is skipped,
//!   an optional sign and the leading digits are taken, anything after
//!   them (a fraction, a unit, junk) is ignored. `"12.9"` is 12,
//!   `"-3.7"` is -3, `"40 EUR"` is 40, `"abc"` and `""` are undefined.
//! - A budget is read as a whole number: surrounding whitespace is
//!   trimmed, empty text is zero, and the remaining text must be a decimal
//!   literal in full, or an unsigned `0x`/`0o`/`0b` literal. `"500"`,
//!   `" 12.5 "`, `"1e3"` and `"0x10"` parse; `"500$"` is undefined.
//!
//! An undefined value is not an error. It is carried into [`Balance`] and
//! shown to the user as `NaN`.

use std::fmt;

/// The remaining balance of a ledger
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Balance {
    /// A well-formed numeric balance
    Amount(f64),
    /// The budget or at least one expense amount was not numeric
    Undefined,
}

impl Balance {
    /// Check if the balance is a well-formed number
    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Amount(_))
    }

    /// Get the numeric value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Amount(v) => Some(*v),
            Self::Undefined => None,
        }
    }
}

impl From<Option<f64>> for Balance {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if !v.is_nan() => Self::Amount(v),
            _ => Self::Undefined,
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "NaN"),
            Self::Amount(v) if v.is_infinite() => {
                if v.is_sign_negative() {
                    write!(f, "-Infinity")
                } else {
                    write!(f, "Infinity")
                }
            }
            // Avoids printing "-0"
            Self::Amount(v) if *v == 0.0 => write!(f, "0"),
            Self::Amount(v) => write!(f, "{}", v),
        }
    }
}

/// Accumulate digits already known to be valid for `radix`
///
/// Values past 2^53 lose precision instead of overflowing.
fn fold_digits(digits: &str, radix: u32) -> f64 {
    digits.chars().fold(0.0, |acc, c| {
        acc * f64::from(radix) + c.to_digit(radix).map_or(0.0, f64::from)
    })
}

/// Length of the leading run of `radix` digits
fn digit_prefix_len(s: &str, radix: u32) -> usize {
    s.char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Read the leading integer of an expense amount
///
/// Returns `None` when no digits follow the optional sign. A `0x`/`0X`
/// prefix switches to hexadecimal.
pub fn parse_integer(text: &str) -> Option<f64> {
    let s = text.trim_start();

    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let digits = &s[..digit_prefix_len(s, radix)];
    if digits.is_empty() {
        return None;
    }

    let magnitude = fold_digits(digits, radix);
    Some(if negative { -magnitude } else { magnitude })
}

/// Read an unsigned `0x`, `0o` or `0b` literal in full
fn parse_radix_literal(s: &str) -> Option<Option<f64>> {
    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => 16,
        Some("0o") | Some("0O") => 8,
        Some("0b") | Some("0B") => 2,
        _ => return None,
    };
    let digits = &s[2..];
    let valid = !digits.is_empty() && digit_prefix_len(digits, radix) == digits.len();
    Some(valid.then(|| fold_digits(digits, radix)))
}

/// Read a budget figure
///
/// Returns `None` when the trimmed text is not a complete decimal literal
/// or an unsigned `0x`/`0o`/`0b` literal.
pub fn parse_budget(text: &str) -> Option<f64> {
    let s = text.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    if let Some(value) = parse_radix_literal(s) {
        return value;
    }

    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
    if unsigned == "Infinity" {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // Rust also accepts "inf" and "nan" spellings; only digit-led literals count
    match unsigned.as_bytes().first() {
        Some(b) if b.is_ascii_digit() || *b == b'.' => s.parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_plain() {
        assert_eq!(parse_integer("120"), Some(120.0));
        assert_eq!(parse_integer("-40"), Some(-40.0));
        assert_eq!(parse_integer("+7"), Some(7.0));
        assert_eq!(parse_integer("0"), Some(0.0));
    }

    #[test]
    fn test_parse_integer_truncates_toward_zero() {
        assert_eq!(parse_integer("12.9"), Some(12.0));
        assert_eq!(parse_integer("-3.7"), Some(-3.0));
        assert_eq!(parse_integer("0.99"), Some(0.0));
    }

    #[test]
    fn test_parse_integer_ignores_trailing_text() {
        assert_eq!(parse_integer("  40 EUR"), Some(40.0));
        assert_eq!(parse_integer("1e3"), Some(1.0));
        assert_eq!(parse_integer("12abc"), Some(12.0));
    }

    #[test]
    fn test_parse_integer_hex_prefix() {
        assert_eq!(parse_integer("0x1A"), Some(26.0));
        assert_eq!(parse_integer("-0X10"), Some(-16.0));
    }

    #[test]
    fn test_parse_integer_undefined() {
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer(".5"), None);
        assert_eq!(parse_integer("0x"), None);
    }

    #[test]
    fn test_parse_integer_beyond_i64() {
        let large = parse_integer("99999999999999999999").unwrap();
        assert!((large - 1e20).abs() / 1e20 < 1e-12);

        let negative = parse_integer("-123456789012345678901234.5").unwrap();
        assert!((negative + 1.234_567_890_123_456_8e23).abs() / 1e23 < 1e-12);
    }

    #[test]
    fn test_parse_budget() {
        assert_eq!(parse_budget("500"), Some(500.0));
        assert_eq!(parse_budget(" 12.5 "), Some(12.5));
        assert_eq!(parse_budget("-20"), Some(-20.0));
        assert_eq!(parse_budget(".5"), Some(0.5));
        assert_eq!(parse_budget("1e3"), Some(1000.0));
        assert_eq!(parse_budget(""), Some(0.0));
        assert_eq!(parse_budget("   "), Some(0.0));
        assert_eq!(parse_budget("Infinity"), Some(f64::INFINITY));
    }

    #[test]
    fn test_parse_budget_undefined() {
        assert_eq!(parse_budget("500$"), None);
        assert_eq!(parse_budget("abc"), None);
        assert_eq!(parse_budget("nan"), None);
        assert_eq!(parse_budget("inf"), None);
        assert_eq!(parse_budget("1 000"), None);
    }

    #[test]
    fn test_parse_budget_radix_literals() {
        assert_eq!(parse_budget("0x10"), Some(16.0));
        assert_eq!(parse_budget(" 0o17 "), Some(15.0));
        assert_eq!(parse_budget("0B101"), Some(5.0));
        assert_eq!(parse_budget("0x"), None);
        assert_eq!(parse_budget("0x1g"), None);
        assert_eq!(parse_budget("0b102"), None);
        assert_eq!(parse_budget("-0x10"), None);
    }

    #[test]
    fn test_balance_display() {
        assert_eq!(Balance::Amount(340.0).to_string(), "340");
        assert_eq!(Balance::Amount(12.5).to_string(), "12.5");
        assert_eq!(Balance::Amount(-60.0).to_string(), "-60");
        assert_eq!(Balance::Amount(-0.0).to_string(), "0");
        assert_eq!(Balance::Amount(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Balance::Undefined.to_string(), "NaN");
    }

    #[test]
    fn test_balance_from_option() {
        assert_eq!(Balance::from(Some(1.0)), Balance::Amount(1.0));
        assert_eq!(Balance::from(None), Balance::Undefined);
        assert_eq!(Balance::from(Some(f64::NAN)), Balance::Undefined);
        assert!(!Balance::Undefined.is_defined());
        assert_eq!(Balance::Amount(2.0).value(), Some(2.0));
    }
}
