//! Rendering numbers with a fixed number of significant digits, the way C's and Python's `%g`
//! does it: fixed notation for moderate magnitudes, scientific notation otherwise, and no
//! trailing zeros either way.

/// Format `x` with `precision` significant digits (at least 1).
///
/// With `x` written as `d.ddd × 10^exp` (after rounding to `precision` digits), this uses fixed
/// notation if `-4 <= exp < precision` and scientific notation otherwise. Trailing zeros of the
/// fraction, and a trailing decimal point, are removed.
///
/// ```ignore
/// assert_eq!(general(1.5, 4), "1.5");
/// assert_eq!(general(1.5707963705062866, 4), "1.571");
/// assert_eq!(general(0.00001, 4), "1e-05");
/// assert_eq!(general(65504.0, 4), "6.55e+04");
/// ```
pub(crate) fn general(x: f64, precision: usize) -> String {
  if x.is_nan() {
    return "nan".into()
  }
  if x.is_infinite() {
    return if x > 0.0 { "inf".into() } else { "-inf".into() }
  }
  if x == 0.0 {
    return if x.is_sign_negative() { "-0".into() } else { "0".into() }
  }
  let precision = precision.max(1);

  // Rust's `{:e}` rounds to the requested number of digits first, so the exponent it prints is
  // already the exponent *after* rounding (`9.9996` to 4 digits is `1.000e1`, not `9.999e0`).
  let scientific = format!("{:.*e}", precision - 1, x);
  let Some((digits, exp)) = scientific.split_once('e') else { return scientific };
  let Ok(exp) = exp.parse::<i32>() else { return scientific };

  if exp < -4 || exp >= precision as i32 {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", trim_fraction(digits), sign, exp.unsigned_abs())
  } else {
    let decimals = (precision as i32 - 1 - exp) as usize;
    trim_fraction(&format!("{:.*}", decimals, x)).to_owned()
  }
}

/// Strip trailing zeros after a decimal point, then the decimal point itself if nothing is left
/// after it. Integers are returned unchanged.
fn trim_fraction(s: &str) -> &str {
  if s.contains('.') {
    s.trim_end_matches('0').trim_end_matches('.')
  } else {
    s
  }
}
