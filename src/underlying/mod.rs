//! This module contains the glue between a [`Format`](crate::Format) and the machine (or, for
//! binary16, software) float type that stores it. These are hidden from the end-user, which only sees the
//! sealed [`Hardware`] trait, implemented for [`half::f16`], [`f32`], and [`f64`].
//!
//! Nothing here inspects bits: the only job of a [`Hardware`] type is to *round* an `f64` to its
//! own precision and to reinterpret itself as (and from) a raw unsigned integer. Everything else
//! in the crate is written once, in terms of [`Format`](crate::Format) and plain `u64` bit
//! patterns.

/// The trait for the float types that back a [`Format`](crate::Format) (only satisfied by
/// [`half::f16`], [`f32`], and [`f64`]).
///
/// This is a *sealed* type.
pub trait Hardware: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  core::fmt::Debug +
  Copy + Clone +
  PartialEq + PartialOrd
{
  /// Round `x` to the nearest value of `Self`, ties to even. Values too big in magnitude
  /// overflow to an infinity, values too small underflow through the subnormals to a zero, and
  /// NaN stays NaN.
  fn round_from_f64(x: f64) -> Self;

  /// Widen `self` to an `f64`. This is always exact.
  fn into_f64(self) -> f64;

  /// The bit pattern of `self`, zero-extended to a `u64`.
  fn to_bits_u64(self) -> u64;

  /// Reinterpret the lowest [`Format::total_bits`](crate::Format::total_bits) bits of `bits` as
  /// a `Self`. Higher bits are ignored.
  fn from_bits_u64(bits: u64) -> Self;
}

/// Implementation of the functions common to the primitive float types.
macro_rules! impl_common {
  ($float:ty, $uint:ty) => {
    #[inline]
    fn round_from_f64(x: f64) -> Self { x as $float }

    #[inline]
    fn into_f64(self) -> f64 { self as f64 }

    #[inline]
    fn to_bits_u64(self) -> u64 { u64::from(self.to_bits()) }

    #[inline]
    fn from_bits_u64(bits: u64) -> Self { <$float>::from_bits(bits as $uint) }
  }
}

impl Hardware for f64 {}
impl Sealed for f64 {
  impl_common!{f64, u64}
}

impl Hardware for f32 {}
impl Sealed for f32 {
  impl_common!{f32, u32}
}

// There's no primitive half precision type on stable Rust; `half` provides a software one, with
// correctly rounded conversions straight from `f64` (no double rounding through `f32`).
impl Hardware for half::f16 {}
impl Sealed for half::f16 {
  #[inline]
  fn round_from_f64(x: f64) -> Self { half::f16::from_f64(x) }

  #[inline]
  fn into_f64(self) -> f64 { self.to_f64() }

  #[inline]
  fn to_bits_u64(self) -> u64 { u64::from(self.to_bits()) }

  #[inline]
  fn from_bits_u64(bits: u64) -> Self { half::f16::from_bits(bits as u16) }
}
