//! The whole pipeline, from the text a user typed to everything there is to show about the
//! result.

use log::{debug, trace};

use crate::fmt::general;
use crate::input::InputKind;
use crate::{
  ArithError, BitPattern, Category, DecodedFields, Error, Format, Operation, apply, classify,
  classify_pair, decompose, encode, render,
};

/// Significant digits of the decimal value in a [`Report`].
const DECIMAL_DIGITS: usize = 6;

/// What to compute, and at which width.
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
pub struct Request {
  pub format: Format,
  pub operation: Operation,
}

impl Request {
  #[inline]
  pub const fn new(format: Format, operation: Operation) -> Self {
    Self { format, operation }
  }
}

/// Everything there is to know about the result of a [`Request`]: its value, its bits, its
/// fields, and its formula.
#[derive(Debug, Clone)]
#[derive(PartialEq)]
pub struct Report {
  format: Format,
  operation: Operation,
  input_was_hex: bool,
  value: f64,
  bits: BitPattern,
  fields: DecodedFields,
  formula: String,
}

impl Report {
  /// `bits` must be the pattern of `value` in `request.format`. It is taken as is rather than
  /// re-encoded from `value`, which would quieten a signalling NaN.
  fn new(request: Request, value: f64, bits: BitPattern, input_was_hex: bool) -> Self {
    let format = request.format;
    let fields = decompose(bits, format);
    trace!("decomposed {bits:?} as {fields:?}");
    let formula = render(&fields, format);
    Self { format, operation: request.operation, input_was_hex, value, bits, fields, formula }
  }

  /// The format of the result.
  pub const fn format(&self) -> Format { self.format }

  /// Whether the (first) operand was given as a bit pattern rather than as a decimal number.
  pub const fn input_was_hex(&self) -> bool { self.input_was_hex }

  /// The result as a number. It is exactly representable in [`Report::format`].
  pub const fn decimal_value(&self) -> f64 { self.value }

  /// The result with 6 significant digits, like `%.6g`.
  pub fn decimal_string(&self) -> String { general(self.value, DECIMAL_DIGITS) }

  /// The bit pattern of the result. For a bit pattern that was only converted, this is exactly
  /// the pattern that was typed, NaN payload and all.
  pub const fn bits(&self) -> BitPattern { self.bits }

  /// [`Report::bits`] as `0x` and [`Format::hex_digits`] lowercase hex digits.
  pub fn hex_string(&self) -> String { self.bits.to_hex_string(self.format) }

  /// [`Report::bits`] as [`Format::total_bits`] binary digits, msb first.
  pub fn binary_string(&self) -> String { self.bits.to_binary_string(self.format) }

  /// The fields of [`Report::bits`].
  pub const fn fields(&self) -> &DecodedFields { &self.fields }

  /// The sign bit.
  pub const fn sign(&self) -> u8 { self.fields.sign }

  /// The stored, biased exponent field.
  pub const fn exponent_raw(&self) -> u64 { self.fields.exponent_raw }

  /// The stored mantissa field, without the hidden bit.
  pub const fn mantissa_raw(&self) -> u64 { self.fields.mantissa_raw }

  pub const fn category(&self) -> Category { self.fields.category }

  /// The formula the bits encode, see [`render`].
  pub fn formula(&self) -> &str { &self.formula }
}

impl core::fmt::Display for Report {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let decimal = self.decimal_string();
    if self.input_was_hex && self.operation == Operation::Convert {
      writeln!(f, "Decimal: {decimal}")?;
    }
    writeln!(f, "Result: {decimal}  |  Hex: {}", self.hex_string())?;
    writeln!(f, "Binary: {}", self.binary_string())?;
    writeln!(f, "Sign     : {}", self.fields.sign)?;
    writeln!(f, "Exponent : {}", self.fields.exponent_bits_string(self.format))?;
    writeln!(f, "Mantissa : {}", self.fields.mantissa_bits_string(self.format))?;
    write!(f, "Float formula: {}", self.formula)
  }
}

/// Run `request` on the text `a` (and `b`, for binary operations; it is ignored otherwise).
///
/// Operands are read with [`classify`] (or [`classify_pair`] for binary operations, so that
/// both must be written in the same notation), rounded to the format, computed with [`apply`],
/// and the result decomposed and rendered.
///
/// # Errors
///
/// Any [`ParseError`](crate::ParseError) from reading the operands, and any
/// [`ArithError`](crate::ArithError) from computing the result, including
/// [`MissingOperand`](crate::ArithError::MissingOperand) if `b` is `None` for a binary
/// operation. Nothing is computed after the first error.
///
/// ```
/// # use ieee754_inspect::{evaluate, ArithError, Error, Format, Operation, Request};
/// let request = Request::new(Format::Binary16, Operation::Add);
/// let report = evaluate(request, "0.1", Some("0.2")).unwrap();
/// assert_eq!(report.hex_string(), "0x34cc");
/// assert_eq!(report.decimal_string(), "0.299805");
///
/// let request = Request::new(Format::Binary16, Operation::Divide);
/// let error = evaluate(request, "1", Some("0")).unwrap_err();
/// assert_eq!(error, Error::Arith(ArithError::DivisionByZero));
/// assert_eq!(error.to_string(), "Division by zero.");
/// ```
pub fn evaluate(request: Request, a: &str, b: Option<&str>) -> Result<Report, Error> {
  debug!("evaluate {} at {}: {a:?} {b:?}", request.operation, request.format);
  let result = evaluate_inner(request, a, b);
  match &result {
    Ok(report) => debug!("result {} = {}", report.hex_string(), report.decimal_string()),
    Err(error) => debug!("rejected: {error:?}"),
  }
  result
}

fn evaluate_inner(request: Request, a: &str, b: Option<&str>) -> Result<Report, Error> {
  let Request { format, operation } = request;

  let Some(op) = operation.arith() else {
    let input = classify(a, format);
    debug!("classified {a:?} as {input:?}");
    let value = input.value(format)?;
    let bits = match input {
      InputKind::Hex(bits) => bits,
      _ => encode(value, format),
    };
    return Ok(Report::new(request, value, bits, input.is_hex()))
  };

  let (x, y, input_was_hex) = if op.is_binary() {
    let b = b.ok_or(ArithError::MissingOperand)?;
    let (x, y) = classify_pair(a, b, format)?;
    debug!("classified {a:?} as {x:?}, {b:?} as {y:?}");
    (x.value(format)?, Some(y.value(format)?), x.is_hex())
  } else {
    let x = classify(a, format);
    debug!("classified {a:?} as {x:?}");
    (x.value(format)?, None, x.is_hex())
  };

  let value = apply(op, x, y, format)?;
  Ok(Report::new(request, value, encode(value, format), input_was_hex))
}
