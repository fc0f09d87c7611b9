//! Splitting a bit pattern into its sign, exponent, and mantissa fields, and classifying it.

use crate::{BitPattern, Format};

/// The class of value that a bit pattern encodes. Determined solely by the raw exponent and
/// mantissa fields, so the four classes partition the bit patterns of every format.
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
pub enum Category {
  /// Exponent field all zeros, mantissa field zero: `+0` or `-0`.
  Zero,
  /// Exponent field all zeros, mantissa field non-zero: below the smallest normal number, with
  /// no hidden bit.
  Subnormal,
  /// Any other exponent field: `1.mantissa × 2^(exponent - bias)`.
  Normal,
  /// Exponent field all ones. The mantissa field tells an infinity (zero) from a NaN
  /// (non-zero), but this crate deliberately does not tell them apart.
  InfinityOrNaN,
}

impl Category {
  /// Classify the raw fields of a float of `format`.
  #[inline]
  pub const fn of_fields(exponent_raw: u64, mantissa_raw: u64, format: Format) -> Self {
    if exponent_raw == 0 {
      if mantissa_raw == 0 { Category::Zero } else { Category::Subnormal }
    } else if exponent_raw == format.all_ones_exponent() {
      Category::InfinityOrNaN
    } else {
      Category::Normal
    }
  }
}

impl core::fmt::Display for Category {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(match self {
      Category::Zero => "zero",
      Category::Subnormal => "subnormal",
      Category::Normal => "normal",
      Category::InfinityOrNaN => "inf or nan",
    })
  }
}

/// The fields of a bit pattern of some [`Format`]. Derived deterministically by [`decompose`];
/// never mutated.
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq)]
pub struct DecodedFields {
  /// The sign bit, `0` (positive) or `1` (negative).
  pub sign: u8,
  /// The stored, biased exponent field.
  pub exponent_raw: u64,
  /// The stored mantissa field, without the hidden bit.
  pub mantissa_raw: u64,
  /// `exponent_raw - bias`. Only meaningful for [`Category::Normal`] (subnormals use
  /// [`Format::min_exponent`] instead); do not use it for [`Category::InfinityOrNaN`].
  pub exponent_unbiased: i32,
  /// The significand as a number: `1.mantissa` for normals, `0.mantissa` for zeros and
  /// subnormals. For [`Category::InfinityOrNaN`] it is `0.mantissa` and carries no meaning.
  ///
  /// Always exact: it has at most 53 significant bits.
  pub mantissa_fraction: f64,
  /// The class of the value, see [`Category`].
  pub category: Category,
}

impl DecodedFields {
  /// Whether the sign bit is set. Note that this holds for `-0` and for negative NaNs too.
  #[inline]
  pub const fn is_negative(&self) -> bool {
    self.sign == 1
  }

  /// The exponent field in binary, zero padded to [`Format::exponent_bits`] digits.
  pub fn exponent_bits_string(&self, format: Format) -> String {
    format!("{:0w$b}", self.exponent_raw, w = format.exponent_bits() as usize)
  }

  /// The mantissa field in binary, zero padded to [`Format::mantissa_bits`] digits.
  pub fn mantissa_bits_string(&self, format: Format) -> String {
    format!("{:0w$b}", self.mantissa_raw, w = format.mantissa_bits() as usize)
  }
}

/// Split `bits` into the fields of `format` and classify it. Every pattern is valid, so this
/// cannot fail.
///
/// ```
/// # use ieee754_inspect::{decompose, encode, Category, Format};
/// let fields = decompose(encode(1.5, Format::Binary16), Format::Binary16);
/// assert_eq!(fields.sign, 0);
/// assert_eq!(fields.exponent_raw, 0b01111);
/// assert_eq!(fields.mantissa_raw, 0b1000000000);
/// assert_eq!(fields.exponent_unbiased, 0);
/// assert_eq!(fields.mantissa_fraction, 1.5);
/// assert_eq!(fields.category, Category::Normal);
/// ```
pub fn decompose(bits: BitPattern, format: Format) -> DecodedFields {
  let bits = bits.to_bits();
  let m = format.mantissa_bits();
  let e = format.exponent_bits();

  // Layout, msb to lsb: [sign | exponent (e bits) | mantissa (m bits)].
  let sign = ((bits >> (e + m)) & 1) as u8;
  let exponent_raw = (bits >> m) & format.exponent_mask();
  let mantissa_raw = bits & format.mantissa_mask();

  let category = Category::of_fields(exponent_raw, mantissa_raw, format);
  let exponent_unbiased = exponent_raw as i32 - format.bias();

  // `mantissa_raw < 2^52` and the denominator is a power of two, so both of these are exact.
  let fraction = mantissa_raw as f64 / (1u64 << m) as f64;
  let mantissa_fraction = match category {
    Category::Normal => 1.0 + fraction,
    Category::Zero | Category::Subnormal | Category::InfinityOrNaN => fraction,
  };

  DecodedFields {
    sign,
    exponent_raw,
    mantissa_raw,
    exponent_unbiased,
    mantissa_fraction,
    category,
  }
}
