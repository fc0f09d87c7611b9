//! The IEEE 754 codec: lossless conversion between a real number materialised at a given width
//! and its raw bit pattern, and between hexadecimal text and that bit pattern.
//!
//! A [`BitPattern`] is a pure unsigned integer. Bit 0 is the least significant mantissa bit and
//! bit `total_bits - 1` is the sign; there is no byte order anywhere in this module, only
//! arithmetic on integers.

use crate::{Format, Hardware, ParseError};

/// The raw storage of a float of some [`Format`], as an unsigned integer of exactly
/// [`Format::total_bits`] bits (held in a `u64`; the unused high bits are always 0).
///
/// A `BitPattern` does not remember its format; every function that interprets one takes the
/// [`Format`] alongside it.
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct BitPattern(u64);

impl BitPattern {
  /// Construct a bit pattern from its raw integer representation. Bits higher (more
  /// significant) than the lowest [`Format::total_bits`] bits, if any, are ignored.
  ///
  /// ```
  /// # use ieee754_inspect::{BitPattern, Format};
  /// assert_eq!(BitPattern::from_bits(0x1_3c00, Format::Binary16).to_bits(), 0x3c00);
  /// ```
  #[inline]
  pub const fn from_bits(raw: u64, format: Format) -> Self {
    Self(raw & format.width_mask())
  }

  /// Return the underlying bit representation of `self` as a machine integer.
  #[inline]
  pub const fn to_bits(self) -> u64 {
    self.0
  }

  /// The bits of `self` as `0x` followed by exactly [`Format::hex_digits`] lowercase hex digits.
  ///
  /// ```
  /// # use ieee754_inspect::{BitPattern, Format};
  /// assert_eq!(BitPattern::from_bits(0x3e00, Format::Binary16).to_hex_string(Format::Binary16), "0x3e00");
  /// assert_eq!(BitPattern::from_bits(1, Format::Binary32).to_hex_string(Format::Binary32), "0x00000001");
  /// ```
  pub fn to_hex_string(self, format: Format) -> String {
    format!("0x{:0w$x}", self.0, w = format.hex_digits())
  }

  /// The bits of `self` as exactly [`Format::total_bits`] characters of `0`/`1`, msb first.
  pub fn to_binary_string(self, format: Format) -> String {
    format!("{:0w$b}", self.0, w = format.total_bits() as usize)
  }
}

/// Round `value` to the nearest number representable in `F`, ties to even, and return its bits.
#[inline]
pub(crate) fn encode_as<F: Hardware>(value: f64) -> BitPattern {
  BitPattern(F::round_from_f64(value).to_bits_u64())
}

/// Reinterpret `bits` as an `F` and widen it (exactly) to an `f64`.
#[inline]
pub(crate) fn decode_as<F: Hardware>(bits: BitPattern) -> f64 {
  F::from_bits_u64(bits.0).into_f64()
}

/// Round `value` to the nearest number representable in `format` (round to nearest, ties to
/// even), and return the bit pattern of that number.
///
/// Values too big in magnitude become an infinity, values too small become a (signed) zero, and
/// a NaN becomes the quiet NaN of `format`.
///
/// ```
/// # use ieee754_inspect::{encode, Format};
/// assert_eq!(encode(1.5, Format::Binary16).to_bits(), 0x3e00);
/// assert_eq!(encode(-2.0, Format::Binary32).to_bits(), 0xc000_0000);
/// assert_eq!(encode(0.1, Format::Binary64).to_bits(), 0x3fb9_9999_9999_999a);
/// ```
pub fn encode(value: f64, format: Format) -> BitPattern {
  match format {
    Format::Binary16 => encode_as::<half::f16>(value),
    Format::Binary32 => encode_as::<f32>(value),
    Format::Binary64 => encode_as::<f64>(value),
  }
}

/// Reinterpret `bits` as a float of `format`, and return its value. This is the inverse of
/// [`encode`], and is always exact: for every non-NaN pattern `b`, `encode(decode(b, f), f)`
/// is `b` again.
///
/// ```
/// # use ieee754_inspect::{decode, BitPattern, Format};
/// let f = Format::Binary16;
/// assert_eq!(decode(BitPattern::from_bits(0x3e00, f), f), 1.5);
/// assert_eq!(decode(BitPattern::from_bits(0x7c00, f), f), f64::INFINITY);
/// ```
pub fn decode(bits: BitPattern, format: Format) -> f64 {
  match format {
    Format::Binary16 => decode_as::<half::f16>(bits),
    Format::Binary32 => decode_as::<f32>(bits),
    Format::Binary64 => decode_as::<f64>(bits),
  }
}

/// Round `value` to `format`, i.e. `decode(encode(value, format), format)`. The result is
/// exactly representable in `format`, so rounding it again changes nothing.
///
/// ```
/// # use ieee754_inspect::{round, Format};
/// assert_eq!(round(0.1, Format::Binary16), 0.0999755859375);
/// assert_eq!(round(round(0.1, Format::Binary32), Format::Binary32), round(0.1, Format::Binary32));
/// ```
#[inline]
pub fn round(value: f64, format: Format) -> f64 {
  decode(encode(value, format), format)
}

/// If `text` starts with `0x` or `0X`, return the rest.
#[inline]
pub(crate) fn strip_hex_prefix(text: &str) -> Option<&str> {
  text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
}

/// Parse a bit pattern of `format` from hexadecimal text.
///
/// The text is an optional `0x`/`0X` prefix followed by *exactly* [`Format::hex_digits`] hex
/// digits, in any case. Anything else (wrong length, a stray character, surrounding whitespace)
/// is a [`ParseError::MalformedHex`].
///
/// ```
/// # use ieee754_inspect::{parse_hex, Format, ParseError};
/// assert_eq!(parse_hex("0x3E00", Format::Binary16).unwrap().to_bits(), 0x3e00);
/// assert_eq!(parse_hex("40490fdb", Format::Binary32).unwrap().to_bits(), 0x4049_0fdb);
/// assert_eq!(parse_hex("0x3e0", Format::Binary16), Err(ParseError::MalformedHex));
/// ```
pub fn parse_hex(text: &str, format: Format) -> Result<BitPattern, ParseError> {
  let digits = strip_hex_prefix(text).unwrap_or(text);
  if digits.len() != format.hex_digits() || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
    return Err(ParseError::MalformedHex)
  }
  // `from_str_radix` would also accept a leading `+`, which the check above has already ruled
  // out, and cannot overflow since at most 16 digits are left.
  let raw = u64::from_str_radix(digits, 16).map_err(|_| ParseError::MalformedHex)?;
  Ok(BitPattern::from_bits(raw, format))
}


#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn scenario_half_one_and_a_half() {
    let bits = encode(1.5, Format::Binary16);
    assert_eq!(bits.to_bits(), 0x3e00);
    assert_eq!(bits.to_hex_string(Format::Binary16), "0x3e00");
    assert_eq!(bits.to_binary_string(Format::Binary16), "0011111000000000");
  }

  #[test]
  fn scenario_single_pi() {
    let bits = parse_hex("0x40490fdb", Format::Binary32).unwrap();
    let value = decode(bits, Format::Binary32);
    assert_eq!(value, core::f32::consts::PI as f64);
    assert!((value - 3.14159).abs() < 1e-5);
  }

  #[test]
  fn negative_zero() {
    let bits = BitPattern::from_bits(1 << 63, Format::Binary64);
    let value = decode(bits, Format::Binary64);
    assert_eq!(value, 0.0);
    assert!(value.is_sign_negative());
    assert_eq!(encode(-0.0, Format::Binary16).to_bits(), 0x8000);
    assert_eq!(encode(-0.0, Format::Binary32).to_bits(), 0x8000_0000);
  }

  #[test]
  fn specials() {
    assert_eq!(encode(f64::INFINITY, Format::Binary16).to_bits(), 0x7c00);
    assert_eq!(encode(f64::NEG_INFINITY, Format::Binary32).to_bits(), 0xff80_0000);
    assert_eq!(encode(f64::INFINITY, Format::Binary64).to_bits(), 0x7ff0_0000_0000_0000);
    for format in Format::ALL {
      let nan = encode(f64::NAN, format);
      assert!(decode(nan, format).is_nan());
    }
  }

  #[test]
  fn subnormals() {
    assert_eq!(encode(2f64.powi(-24), Format::Binary16).to_bits(), 0x0001);
    assert_eq!(encode(2f64.powi(-149), Format::Binary32).to_bits(), 0x0000_0001);
    assert_eq!(encode(f64::from_bits(1), Format::Binary64).to_bits(), 0x0000_0000_0000_0001);
    // Half of the smallest subnormal ties to the even neighbour, 0.
    assert_eq!(encode(2f64.powi(-25), Format::Binary16).to_bits(), 0x0000);
  }

  #[test]
  fn hex_string_width() {
    assert_eq!(BitPattern::from_bits(0, Format::Binary16).to_hex_string(Format::Binary16), "0x0000");
    assert_eq!(BitPattern::from_bits(0, Format::Binary32).to_hex_string(Format::Binary32), "0x00000000");
    assert_eq!(
      BitPattern::from_bits(u64::MAX, Format::Binary64).to_hex_string(Format::Binary64),
      "0xffffffffffffffff",
    );
  }

  #[test]
  fn binary_string_width() {
    for format in Format::ALL {
      let s = encode(-1.0, format).to_binary_string(format);
      assert_eq!(s.len(), format.total_bits() as usize);
      assert!(s.starts_with('1'));
    }
  }

  #[test]
  fn parse_hex_prefix_and_case() {
    let f = Format::Binary16;
    assert_eq!(parse_hex("3c00", f), Ok(BitPattern::from_bits(0x3c00, f)));
    assert_eq!(parse_hex("0x3c00", f), Ok(BitPattern::from_bits(0x3c00, f)));
    assert_eq!(parse_hex("0X3C00", f), Ok(BitPattern::from_bits(0x3c00, f)));
    assert_eq!(parse_hex("0xabCD", f), Ok(BitPattern::from_bits(0xabcd, f)));
  }

  #[test]
  fn parse_hex_malformed() {
    let f = Format::Binary16;
    for text in ["", "0x", "3c0", "3c000", "0x3c000", "+3c0", "3g00", " 3c00", "3c00 ", "0x-3c0", "x3c00"] {
      assert_eq!(parse_hex(text, f), Err(ParseError::MalformedHex), "{text:?}");
    }
    assert_eq!(parse_hex("3c00", Format::Binary32), Err(ParseError::MalformedHex));
    assert_eq!(parse_hex("0x40490fdb", Format::Binary64), Err(ParseError::MalformedHex));
  }

  #[test]
  fn parse_hex_full_width() {
    let f = Format::Binary64;
    assert_eq!(parse_hex("0xffffffffffffffff", f).unwrap().to_bits(), u64::MAX);
    assert_eq!(parse_hex("8000000000000000", f).unwrap().to_bits(), 1 << 63);
  }

  #[test]
  fn roundtrip_exhaustive_half() {
    let f = Format::Binary16;
    for bits in BitPattern::cases_exhaustive(f) {
      if decode(bits, f).is_nan() { continue }
      assert_eq!(encode(decode(bits, f), f), bits, "{bits:?}");
    }
  }

  #[test]
  fn hex_roundtrip_exhaustive_half() {
    let f = Format::Binary16;
    for bits in BitPattern::cases_exhaustive(f) {
      assert_eq!(parse_hex(&bits.to_hex_string(f), f), Ok(bits));
    }
  }

  macro_rules! make_tests {
    ($format:expr) => {
      use super::*;

      proptest!{
        #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

        #[test]
        fn roundtrip(bits in BitPattern::cases_proptest($format)) {
          let value = decode(bits, $format);
          if value.is_nan() {
            return Ok(())
          }
          prop_assert_eq!(encode(value, $format), bits);
        }

        #[test]
        fn width_closure(value: f64) {
          let rounded = round(value, $format);
          if value.is_nan() {
            prop_assert!(rounded.is_nan());
          } else {
            prop_assert_eq!(round(rounded, $format).to_bits(), rounded.to_bits());
          }
        }

        #[test]
        fn hex_roundtrip(bits in BitPattern::cases_proptest($format)) {
          prop_assert_eq!(parse_hex(&bits.to_hex_string($format), $format), Ok(bits));
        }
      }
    };
  }

  mod binary16 { make_tests!{Format::Binary16} }
  mod binary32 { make_tests!{Format::Binary32} }
  mod binary64 { make_tests!{Format::Binary64} }

  #[test]
  fn native_agrees() {
    // Casting is the native rounding; the codec must not disagree with it.
    for x in [0.1, 1.0 / 3.0, 2.5e-40, 3.4e38, 3.5e38, -7.25, 1e-46] {
      assert_eq!(encode(x, Format::Binary32).to_bits(), u64::from((x as f32).to_bits()));
      assert_eq!(encode(x, Format::Binary64).to_bits(), x.to_bits());
    }
  }
}
