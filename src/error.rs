//! Error types. Every error displays as a fixed, short message that is safe to show to a user as
//! is: no part of the offending input is ever echoed back.

/// The error type returned when a piece of text cannot be turned into a value.
#[derive(thiserror::Error, Debug)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
  /// Text that claims to be hexadecimal (it has a `0x` prefix, or was passed to
  /// [`parse_hex`](crate::parse_hex)) but is not exactly
  /// [`Format::hex_digits`](crate::Format::hex_digits) hex digits.
  #[error("Invalid input.")]
  MalformedHex,
  /// Text that is neither a decimal number nor a bit pattern.
  #[error("Invalid input.")]
  Unrecognized,
  /// The two operands of a binary operation were written in different notations (one decimal,
  /// one hex).
  #[error("Invalid input.")]
  FormatMismatch,
}

/// The error type returned when an arithmetic operation is rejected.
#[derive(thiserror::Error, Debug)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithError {
  /// The divisor was zero (of either sign). Unlike raw IEEE 754, which would return an infinity
  /// or a NaN, this is reported as an error.
  #[error("Division by zero.")]
  DivisionByZero,
  /// The operand of a square root was less than zero.
  #[error("Cannot take square root of negative number.")]
  NegativeSqrt,
  /// A binary operation was not given its second operand.
  #[error("Invalid input.")]
  MissingOperand,
}

/// Any error produced by this crate.
#[derive(thiserror::Error, Debug)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
  #[error(transparent)]
  Parse(#[from] ParseError),
  #[error(transparent)]
  Arith(#[from] ArithError),
}

impl Error {
  /// The user-facing message for this error; the same text as its `Display`.
  pub const fn message(&self) -> &'static str {
    match self {
      Error::Parse(_) => "Invalid input.",
      Error::Arith(ArithError::DivisionByZero) => "Division by zero.",
      Error::Arith(ArithError::NegativeSqrt) => "Cannot take square root of negative number.",
      Error::Arith(ArithError::MissingOperand) => "Invalid input.",
    }
  }
}

pub type Result<T> = core::result::Result<T, Error>;
