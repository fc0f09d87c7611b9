//! Deciding whether a piece of user text is a decimal number or a hexadecimal bit pattern.
//!
//! The rules, in order:
//!
//!  1. Surrounding whitespace is ignored.
//!  2. Text with a `0x`/`0X` prefix is always hex, and must then be exactly
//!     [`Format::hex_digits`] hex digits ([`ParseError::MalformedHex`] otherwise).
//!  3. Text that is exactly [`Format::hex_digits`] hex digits is hex (`3e00`, `40490fdb`),
//!     unless every one of them is a decimal digit: `1234` is the number 1234 in any format, and
//!     needs a prefix (`0x1234`) to be read as a bit pattern.
//!  4. Text that is decimal syntax (`-?[0-9]+(.[0-9]+)?([eE][-+]?[0-9]+)?`, plus a leading `+`,
//!     `.5` and `5.`) is a decimal number.
//!  5. Anything else is [`ParseError::Unrecognized`].
//!
//! Rule 3 comes before rule 4 because a handful of strings are both: `3e00` is a valid decimal
//! (3 × 10^0) but is far more likely meant as the binary16 pattern of `1.5`. Write `3e0`,
//! `3.0e00` or `3e+00` to mean the number.

use crate::codec::strip_hex_prefix;
use crate::{BitPattern, Format, ParseError, decode, parse_hex, round};

/// What a piece of user text turned out to be.
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq)]
pub enum InputKind {
  /// A decimal number, as parsed by the host (not yet rounded to any format).
  Decimal(f64),
  /// A raw bit pattern.
  Hex(BitPattern),
  /// Neither; the error says why.
  Invalid(ParseError),
}

impl InputKind {
  /// The value this input stands for in `format`: a decimal is rounded to `format`, a bit
  /// pattern is decoded.
  pub fn value(self, format: Format) -> Result<f64, ParseError> {
    match self {
      InputKind::Decimal(value) => Ok(round(value, format)),
      InputKind::Hex(bits) => Ok(decode(bits, format)),
      InputKind::Invalid(error) => Err(error),
    }
  }

  /// Whether this is a [`InputKind::Hex`].
  #[inline]
  pub const fn is_hex(&self) -> bool {
    matches!(self, InputKind::Hex(_))
  }
}

/// Whether `text` is a decimal number in the syntax this crate accepts. In particular, words the
/// host parser would also take (`inf`, `NaN`, `infinity`) are *not* decimal syntax.
fn is_decimal_syntax(text: &str) -> bool {
  let bytes = text.as_bytes();
  let mut i = 0;
  let digits = |i: &mut usize| {
    let start = *i;
    while *i < bytes.len() && bytes[*i].is_ascii_digit() { *i += 1 }
    *i - start
  };

  if matches!(bytes.first(), Some(b'+' | b'-')) { i += 1 }
  let integer = digits(&mut i);
  let mut fraction = 0;
  if bytes.get(i) == Some(&b'.') {
    i += 1;
    fraction = digits(&mut i);
  }
  if integer == 0 && fraction == 0 {
    return false
  }
  if matches!(bytes.get(i), Some(b'e' | b'E')) {
    i += 1;
    if matches!(bytes.get(i), Some(b'+' | b'-')) { i += 1 }
    if digits(&mut i) == 0 {
      return false
    }
  }
  i == bytes.len()
}

/// Classify `text` as a decimal number or a bit pattern of `format`. See the
/// [module documentation](self) for the rules.
///
/// ```
/// # use ieee754_inspect::{classify, parse_hex, Format, InputKind, ParseError};
/// let f = Format::Binary16;
/// assert_eq!(classify(" 1.5 ", f), InputKind::Decimal(1.5));
/// assert_eq!(classify("3e00", f), InputKind::Hex(parse_hex("3e00", f).unwrap()));
/// assert_eq!(classify("0x3e00", f), InputKind::Hex(parse_hex("3e00", f).unwrap()));
/// assert_eq!(classify("1234", f), InputKind::Decimal(1234.0));
/// assert_eq!(classify("0x3e0", f), InputKind::Invalid(ParseError::MalformedHex));
/// assert_eq!(classify("pi", f), InputKind::Invalid(ParseError::Unrecognized));
/// ```
pub fn classify(text: &str, format: Format) -> InputKind {
  let text = text.trim();
  if strip_hex_prefix(text).is_some() {
    return match parse_hex(text, format) {
      Ok(bits) => InputKind::Hex(bits),
      Err(error) => InputKind::Invalid(error),
    }
  }
  if text.len() == format.hex_digits()
  && !text.bytes().all(|c| c.is_ascii_digit())
  && let Ok(bits) = parse_hex(text, format) {
    return InputKind::Hex(bits)
  }
  if is_decimal_syntax(text)
  && let Ok(value) = text.parse::<f64>() {
    return InputKind::Decimal(value)
  }
  InputKind::Invalid(ParseError::Unrecognized)
}

/// Classify both operands of a binary operation. They must be valid, and written in the *same*
/// notation: mixing a decimal number with a bit pattern is a [`ParseError::FormatMismatch`]
/// rather than a silent reinterpretation of one side.
///
/// ```
/// # use ieee754_inspect::{classify_pair, Format, InputKind, ParseError};
/// let f = Format::Binary16;
/// assert!(classify_pair("1.0", "2", f).is_ok());
/// assert!(classify_pair("0x3c00", "c000", f).is_ok());
/// assert_eq!(classify_pair("1.0", "0x4000", f), Err(ParseError::FormatMismatch));
/// assert_eq!(classify_pair("1.0", "two", f), Err(ParseError::Unrecognized));
/// ```
pub fn classify_pair(a: &str, b: &str, format: Format) -> Result<(InputKind, InputKind), ParseError> {
  let a = classify(a, format);
  let b = classify(b, format);
  match (a, b) {
    (InputKind::Invalid(error), _) | (_, InputKind::Invalid(error)) => Err(error),
    (InputKind::Decimal(_), InputKind::Decimal(_)) | (InputKind::Hex(_), InputKind::Hex(_)) => Ok((a, b)),
    _ => Err(ParseError::FormatMismatch),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::encode;
  use proptest::prelude::*;

  fn hex(raw: u64, format: Format) -> InputKind {
    InputKind::Hex(BitPattern::from_bits(raw, format))
  }

  #[test]
  fn decimal_syntax() {
    for text in ["0", "1", "-1", "+1", "1.5", "-0.25", ".5", "5.", "1e10", "1E-3", "2.5e+7", "007"] {
      assert!(is_decimal_syntax(text), "{text:?}");
    }
    for text in ["", "-", "+", ".", "e5", "1e", "1e+", "1.2.3", "--1", "1 2", "inf", "-inf", "NaN", "infinity", "0x10", "1f", "½"] {
      assert!(!is_decimal_syntax(text), "{text:?}");
    }
  }

  #[test]
  fn decimal() {
    let f = Format::Binary32;
    assert_eq!(classify("1.5", f), InputKind::Decimal(1.5));
    assert_eq!(classify("  -2  ", f), InputKind::Decimal(-2.0));
    assert_eq!(classify("\t3.25\n", f), InputKind::Decimal(3.25));
    assert_eq!(classify("1e-3", f), InputKind::Decimal(1e-3));
    assert_eq!(classify("12345678", f), InputKind::Decimal(12345678.0));
  }

  #[test]
  fn hex_unprefixed() {
    assert_eq!(classify("3e00", Format::Binary16), hex(0x3e00, Format::Binary16));
    assert_eq!(classify("ABCD", Format::Binary16), hex(0xabcd, Format::Binary16));
    assert_eq!(classify("40490fdb", Format::Binary32), hex(0x4049_0fdb, Format::Binary32));
    assert_eq!(classify("3ff0000000000000", Format::Binary64), hex(0x3ff0_0000_0000_0000, Format::Binary64));
  }

  #[test]
  fn hex_prefixed() {
    assert_eq!(classify("0x3e00", Format::Binary16), hex(0x3e00, Format::Binary16));
    assert_eq!(classify(" 0X40490FDB ", Format::Binary32), hex(0x4049_0fdb, Format::Binary32));
    // All-digit bit patterns need the prefix to be read as hex.
    assert_eq!(classify("0x1234", Format::Binary16), hex(0x1234, Format::Binary16));
  }

  #[test]
  fn hex_wrong_length() {
    // Unprefixed: not decimal, not the right length, so not anything.
    assert_eq!(classify("3f0", Format::Binary16), InputKind::Invalid(ParseError::Unrecognized));
    assert_eq!(classify("3f00", Format::Binary32), InputKind::Invalid(ParseError::Unrecognized));
    // Unless it happens to be a decimal number after all.
    assert_eq!(classify("3e0", Format::Binary16), InputKind::Decimal(3.0));
    assert_eq!(classify("3e00", Format::Binary32), InputKind::Decimal(3.0));
    // Prefixed: definitely meant as hex, so malformed.
    assert_eq!(classify("0x3e00", Format::Binary32), InputKind::Invalid(ParseError::MalformedHex));
    assert_eq!(classify("0x", Format::Binary16), InputKind::Invalid(ParseError::MalformedHex));
    assert_eq!(classify("0xzzzz", Format::Binary16), InputKind::Invalid(ParseError::MalformedHex));
  }

  #[test]
  fn ambiguous() {
    // All decimal digits: a number.
    assert_eq!(classify("1234", Format::Binary16), InputKind::Decimal(1234.0));
    assert_eq!(classify("00000000", Format::Binary32), InputKind::Decimal(0.0));
    // Exponent notation that is also full-width hex: a bit pattern.
    assert_eq!(classify("3e10", Format::Binary16), hex(0x3e10, Format::Binary16));
    assert_eq!(classify("1E00", Format::Binary16), hex(0x1e00, Format::Binary16));
    // Anything else that spells the exponent out is a number again.
    assert_eq!(classify("3e+10", Format::Binary16), InputKind::Decimal(3e10));
    assert_eq!(classify("3.e10", Format::Binary16), InputKind::Decimal(3e10));
  }

  #[test]
  fn unrecognized() {
    let f = Format::Binary64;
    for text in ["", "   ", "abc", "one", "inf", "nan", "1,5", "--1", "0b1010", "1.5f"] {
      assert_eq!(classify(text, f), InputKind::Invalid(ParseError::Unrecognized), "{text:?}");
    }
  }

  #[test]
  fn value() {
    let f = Format::Binary16;
    assert_eq!(classify("0.1", f).value(f), Ok(0.0999755859375));
    assert_eq!(classify("3e00", f).value(f), Ok(1.5));
    assert_eq!(classify("?", f).value(f), Err(ParseError::Unrecognized));
    assert_eq!(classify("1e+10", f).value(f), Ok(f64::INFINITY));
  }

  #[test]
  fn pair() {
    let f = Format::Binary16;
    assert_eq!(classify_pair("1", "2.5", f), Ok((InputKind::Decimal(1.0), InputKind::Decimal(2.5))));
    assert_eq!(classify_pair("3c00", "0x4000", f), Ok((hex(0x3c00, f), hex(0x4000, f))));
    assert_eq!(classify_pair("3c00", "2", f), Err(ParseError::FormatMismatch));
    assert_eq!(classify_pair("2", "0x3c00", f), Err(ParseError::FormatMismatch));
    assert_eq!(classify_pair("x", "0x3c00", f), Err(ParseError::Unrecognized));
    assert_eq!(classify_pair("1", "0x3c0", f), Err(ParseError::MalformedHex));
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn display_is_decimal(x in prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO) {
      // Rust's shortest round-trip `Display` of a finite float is always decimal syntax.
      let text = x.to_string();
      prop_assert_eq!(classify(&text, Format::Binary64), InputKind::Decimal(x));
    }

    #[test]
    fn hex_string_is_hex(raw: u64) {
      for format in Format::ALL {
        let bits = BitPattern::from_bits(raw, format);
        prop_assert_eq!(classify(&bits.to_hex_string(format), format), InputKind::Hex(bits));
      }
    }

    #[test]
    fn never_panics(text in "\\PC{0,24}") {
      for format in Format::ALL {
        let _ = classify(&text, format);
      }
    }
  }

  #[test]
  fn hex_of_encoded() {
    for format in Format::ALL {
      let bits = encode(-2.5, format);
      assert_eq!(classify(&bits.to_hex_string(format), format).value(format), Ok(-2.5));
    }
  }
}
