//! The three IEEE 754 binary interchange formats this crate understands, and the constants that
//! describe their bit layout.
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **Bit 0, bit 1, .. bit N-1**: numbered least significant to most significant, starts at 0.
//!
//! Every format is laid out the same way, from msb to lsb: 1 sign bit, `exponent_bits` bits of
//! biased exponent, and `mantissa_bits` bits of fraction (the leading 1 of normal numbers is
//! implicit, or "hidden", and not stored).

use crate::ParseError;

/// An IEEE 754 binary floating point format.
///
/// This is a closed set: all behaviour that depends on the width of a float is derived from the
/// layout constants below, so that there is exactly one implementation of every algorithm.
///
/// ```
/// # use ieee754_inspect::Format;
/// assert_eq!(Format::Binary16.total_bits(), 16);
/// assert_eq!(Format::Binary32.bias(), 127);
/// assert_eq!(Format::Binary64.hex_digits(), 16);
/// ```
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
pub enum Format {
  /// Half precision: 1 sign bit, 5 exponent bits, 10 mantissa bits.
  Binary16,
  /// Single precision: 1 sign bit, 8 exponent bits, 23 mantissa bits.
  Binary32,
  /// Double precision: 1 sign bit, 11 exponent bits, 52 mantissa bits.
  Binary64,
}

impl Format {
  /// All formats, narrowest first.
  pub const ALL: [Format; 3] = [Format::Binary16, Format::Binary32, Format::Binary64];

  /// The size of this format in bits, `1 + exponent_bits + mantissa_bits`.
  #[inline]
  pub const fn total_bits(self) -> u32 {
    match self {
      Format::Binary16 => 16,
      Format::Binary32 => 32,
      Format::Binary64 => 64,
    }
  }

  /// The width of the (biased) exponent field.
  #[inline]
  pub const fn exponent_bits(self) -> u32 {
    match self {
      Format::Binary16 => 5,
      Format::Binary32 => 8,
      Format::Binary64 => 11,
    }
  }

  /// The width of the stored mantissa field, i.e. *not* counting the hidden bit.
  #[inline]
  pub const fn mantissa_bits(self) -> u32 {
    match self {
      Format::Binary16 => 10,
      Format::Binary32 => 23,
      Format::Binary64 => 52,
    }
  }

  /// The exponent bias, `2^(exponent_bits-1) - 1`. The true exponent of a normal number is the
  /// stored exponent field minus this.
  #[inline]
  pub const fn bias(self) -> i32 {
    (1 << (self.exponent_bits() - 1)) - 1
  }

  /// The exponent of the smallest normal number, `1 - bias`. Subnormals share this exponent (and
  /// lack the hidden bit).
  #[inline]
  pub const fn min_exponent(self) -> i32 {
    1 - self.bias()
  }

  /// Number of hex digits needed to spell a bit pattern of this format, `total_bits / 4`.
  #[inline]
  pub const fn hex_digits(self) -> usize {
    (self.total_bits() / 4) as usize
  }

  /// A mask with the lowest [`Self::total_bits`] bits set.
  #[inline]
  pub const fn width_mask(self) -> u64 {
    u64::MAX >> (u64::BITS - self.total_bits())
  }

  /// A mask with the lowest [`Self::exponent_bits`] bits set. This is also the value of the
  /// exponent field for infinities and NaNs.
  #[inline]
  pub const fn exponent_mask(self) -> u64 {
    (1 << self.exponent_bits()) - 1
  }

  /// A mask with the lowest [`Self::mantissa_bits`] bits set.
  #[inline]
  pub const fn mantissa_mask(self) -> u64 {
    (1 << self.mantissa_bits()) - 1
  }

  /// The all-ones exponent field, which marks an infinity or a NaN.
  #[inline]
  pub const fn all_ones_exponent(self) -> u64 {
    self.exponent_mask()
  }

  /// The usual name of this format.
  pub const fn name(self) -> &'static str {
    match self {
      Format::Binary16 => "binary16",
      Format::Binary32 => "binary32",
      Format::Binary64 => "binary64",
    }
  }
}

// The layout invariant `total_bits = 1 + exponent_bits + mantissa_bits`, checked at compile time
// for every format.
const _: () = {
  let mut i = 0;
  while i < Format::ALL.len() {
    let f = Format::ALL[i];
    assert!(
      f.total_bits() == 1 + f.exponent_bits() + f.mantissa_bits(),
      "Format layout does not add up to its total width",
    );
    assert!(f.total_bits() % 4 == 0, "Format width must be a whole number of hex digits");
    i += 1;
  }
};

impl core::fmt::Display for Format {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

impl core::str::FromStr for Format {
  type Err = ParseError;

  /// Accepts the IEEE names (`binary32`), the common programming names (`float32`, `single`),
  /// or just the width (`32`), in any case.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "binary16" | "float16" | "half" | "f16" | "16" => Ok(Format::Binary16),
      "binary32" | "float32" | "single" | "f32" | "32" => Ok(Format::Binary32),
      "binary64" | "float64" | "double" | "f64" | "64" => Ok(Format::Binary64),
      _ => Err(ParseError::Unrecognized),
    }
  }
}
