//! This crate is a small, exact, and *educational* inspector and calculator for
//! [IEEE 754](https://en.wikipedia.org/wiki/IEEE_754) binary floating point numbers.
//!
//! # Introduction
//!
//! Given a decimal number or a raw hexadecimal bit pattern, the crate tells you what the bits
//! *mean*: it splits them into sign, exponent, and mantissa fields, classifies the value (zero,
//! subnormal, normal, or infinity/NaN), and reconstructs the algebraic formula
//! `(-1)^s × 2^e × mantissa` that the bits encode. It can also add, subtract, multiply, divide,
//! and take square roots, always rounding the result to the selected width and showing the bit
//! layout of that result.
//!
//! Three formats are supported, all handled by one table-driven implementation:
//!
//!   - [`Format::Binary16`]: half precision, 1 + 5 + 10 bits.
//!   - [`Format::Binary32`]: single precision, 1 + 8 + 23 bits.
//!   - [`Format::Binary64`]: double precision, 1 + 11 + 52 bits.
//!
//! # Usage
//!
//! ```
//! use ieee754_inspect::{Format, Operation, Request, Category, evaluate};
//!
//! // The whole pipeline: parse the text, compute, decompose, and render.
//! let request = Request::new(Format::Binary16, Operation::Convert);
//! let report = evaluate(request, "1.5", None).unwrap();
//! assert_eq!(report.hex_string(), "0x3e00");
//! assert_eq!(report.category(), Category::Normal);
//! assert_eq!(report.formula(), "1 × 2^0 × 1.5");
//!
//! // Or use the building blocks directly.
//! # use ieee754_inspect::{encode, decode, decompose, render, parse_hex};
//! let bits = parse_hex("0x40490fdb", Format::Binary32).unwrap();
//! assert!((decode(bits, Format::Binary32) - 3.14159).abs() < 1e-5);
//! let fields = decompose(bits, Format::Binary32);
//! assert_eq!(render(&fields, Format::Binary32), "1 × 2^1 × 1.571");
//! ```
//!
//! # Errors
//!
//! No function in this crate panics on user input. Every failure is a [`ParseError`] or an
//! [`ArithError`] (wrapped together as [`Error`]), whose `Display` is a fixed, short message
//! suitable for showing to a user as is.
//!
//! # Logging
//!
//! [`evaluate`] emits `debug` and `trace` records through the [`log`] facade. The crate never
//! installs a logger itself.
//!
//! This crate includes benchmarks; run them with `cargo bench -F bench`.

mod format;
mod underlying;
mod codec;
mod decompose;
mod fmt;
mod formula;
mod input;
mod arith;
mod eval;
mod error;

pub use format::Format;
pub use underlying::Hardware;
pub use codec::{BitPattern, encode, decode, round, parse_hex};
pub use decompose::{Category, DecodedFields, decompose};
pub use formula::render;
pub use input::{InputKind, classify, classify_pair};
pub use arith::{ArithOp, Operation, apply};
pub use eval::{Report, Request, evaluate};
pub use error::{ArithError, Error, ParseError, Result};

/// Number of cases for every property test in the crate.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1_0000} else {0x10_0000};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;
#[cfg(feature = "bench")]
pub use bench::*;
