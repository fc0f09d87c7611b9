//! Arithmetic at a chosen width: `+`, `-`, `×`, `÷`, and `√`, each rounded to the format so that
//! every result is itself a valid bit pattern of that format.

use crate::{ArithError, Format, ParseError, round};

/// An arithmetic operation.
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
pub enum ArithOp {
  Add,
  Sub,
  Mul,
  Div,
  Sqrt,
}

impl ArithOp {
  /// Whether this operation takes two operands.
  #[inline]
  pub const fn is_binary(self) -> bool {
    !matches!(self, ArithOp::Sqrt)
  }
}

/// The operations a user can select: either just look at a number ([`Operation::Convert`]) or
/// compute something with it.
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
pub enum Operation {
  Convert,
  Add,
  Subtract,
  Multiply,
  Divide,
  SquareRoot,
}

impl Operation {
  /// All operations, in menu order.
  pub const ALL: [Operation; 6] = [
    Operation::Convert,
    Operation::Add,
    Operation::Subtract,
    Operation::Multiply,
    Operation::Divide,
    Operation::SquareRoot,
  ];

  /// The arithmetic this operation performs, if any.
  pub const fn arith(self) -> Option<ArithOp> {
    match self {
      Operation::Convert => None,
      Operation::Add => Some(ArithOp::Add),
      Operation::Subtract => Some(ArithOp::Sub),
      Operation::Multiply => Some(ArithOp::Mul),
      Operation::Divide => Some(ArithOp::Div),
      Operation::SquareRoot => Some(ArithOp::Sqrt),
    }
  }

  /// How many operands this operation reads.
  pub const fn arity(self) -> usize {
    match self.arith() {
      Some(op) if op.is_binary() => 2,
      _ => 1,
    }
  }

  /// The usual name of this operation.
  pub const fn name(self) -> &'static str {
    match self {
      Operation::Convert => "convert",
      Operation::Add => "addition",
      Operation::Subtract => "subtraction",
      Operation::Multiply => "multiplication",
      Operation::Divide => "division",
      Operation::SquareRoot => "square root",
    }
  }
}

impl core::fmt::Display for Operation {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

impl core::str::FromStr for Operation {
  type Err = ParseError;

  /// Accepts the short (`sub`), verb (`subtract`), and noun (`subtraction`) names, in any case;
  /// spaces, `-` and `_` are ignored (`square root`, `square_root`, `squareroot`).
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let name = s.chars()
      .filter(|c| !matches!(c, ' ' | '-' | '_'))
      .collect::<String>()
      .to_ascii_lowercase();
    match name.as_str() {
      "convert" | "converter" => Ok(Operation::Convert),
      "add" | "addition" => Ok(Operation::Add),
      "sub" | "subtract" | "subtraction" => Ok(Operation::Subtract),
      "mul" | "multiply" | "multiplication" => Ok(Operation::Multiply),
      "div" | "divide" | "division" => Ok(Operation::Divide),
      "sqrt" | "squareroot" => Ok(Operation::SquareRoot),
      _ => Err(ParseError::Unrecognized),
    }
  }
}

/// Apply `op` to `a` (and `b`, for binary operations) in `format`.
///
/// The operands are first rounded to `format`, then the operation is evaluated in `f64`, and the
/// result rounded to `format` again. For binary16 and binary32 this double rounding never changes
/// the result: an `f64` carries more than twice their precision plus two bits, which is enough
/// for `+ - × ÷ √` to round exactly as if computed natively at that width.
///
/// # Errors
///
///   - [`ArithError::DivisionByZero`] if `op` is [`ArithOp::Div`] and `b` is `+0` or `-0`
///     (including `0 / 0`). Raw IEEE 754 would return an infinity or a NaN instead.
///   - [`ArithError::NegativeSqrt`] if `op` is [`ArithOp::Sqrt`] and `a < 0`. The square root
///     of `-0` is `-0`, as in IEEE 754.
///   - [`ArithError::MissingOperand`] if `op` is binary and `b` is `None`.
///
/// ```
/// # use ieee754_inspect::{apply, ArithOp, ArithError, Format};
/// let f = Format::Binary16;
/// assert_eq!(apply(ArithOp::Add, 0.1, Some(0.2), f), Ok(0.2998046875));
/// assert_eq!(apply(ArithOp::Sqrt, 2.0, None, f), Ok(1.4140625));
/// assert_eq!(apply(ArithOp::Div, 1.0, Some(0.0), f), Err(ArithError::DivisionByZero));
/// assert_eq!(apply(ArithOp::Sqrt, -4.0, None, f), Err(ArithError::NegativeSqrt));
/// ```
pub fn apply(op: ArithOp, a: f64, b: Option<f64>, format: Format) -> Result<f64, ArithError> {
  let a = round(a, format);
  let b = b.map(|b| round(b, format));
  let binary = || b.ok_or(ArithError::MissingOperand);

  let exact = match op {
    ArithOp::Add => a + binary()?,
    ArithOp::Sub => a - binary()?,
    ArithOp::Mul => a * binary()?,
    ArithOp::Div => {
      let b = binary()?;
      if b == 0.0 {
        return Err(ArithError::DivisionByZero)
      }
      a / b
    },
    ArithOp::Sqrt => {
      if a < 0.0 {
        return Err(ArithError::NegativeSqrt)
      }
      a.sqrt()
    },
  };
  Ok(round(exact, format))
}
