//! The human-readable formula `(-1)^s × 2^e × mantissa` that a set of fields stands for.

use crate::fmt::general;
use crate::{Category, DecodedFields, Format};

/// Significant digits of the mantissa in a formula. Only affects the text, never a value.
const FORMULA_DIGITS: usize = 4;

/// Render `fields` (of a float of `format`) as the formula the bits encode.
///
/// | category        | formula                                      |
/// |-----------------|----------------------------------------------|
/// | zero            | `0`                                          |
/// | subnormal       | `±1 × 2^(1-bias) × 0.mantissa`               |
/// | normal          | `±1 × 2^(exponent-bias) × 1.mantissa`        |
/// | infinity or NaN | `Inf or NaN`                                 |
///
/// The mantissa is shown with 4 significant digits.
///
/// ```
/// # use ieee754_inspect::{decompose, encode, render, Format};
/// let f = Format::Binary16;
/// assert_eq!(render(&decompose(encode(1.5, f), f), f), "1 × 2^0 × 1.5");
/// assert_eq!(render(&decompose(encode(-0.375, f), f), f), "-1 × 2^-2 × 1.5");
/// assert_eq!(render(&decompose(encode(3e-5, f), f), f), "1 × 2^-14 × 0.4912");
/// assert_eq!(render(&decompose(encode(f64::INFINITY, f), f), f), "Inf or NaN");
/// ```
pub fn render(fields: &DecodedFields, format: Format) -> String {
  let sign = if fields.is_negative() { "-1" } else { "1" };
  match fields.category {
    Category::Zero => "0".into(),
    Category::Subnormal => format!(
      "{sign} × 2^{} × {}",
      format.min_exponent(),
      general(fields.mantissa_fraction, FORMULA_DIGITS),
    ),
    Category::Normal => format!(
      "{sign} × 2^{} × {}",
      fields.exponent_unbiased,
      general(fields.mantissa_fraction, FORMULA_DIGITS),
    ),
    Category::InfinityOrNaN => "Inf or NaN".into(),
  }
}
