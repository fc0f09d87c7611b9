//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::codec::{decode_as, encode_as};
use crate::{BitPattern, Format};

/// [`general`](crate::fmt::general), the `%g` renderer behind every number this crate prints.
pub fn bench_general(x: f64, precision: usize) -> String {
  crate::fmt::general(x, precision)
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn encode_16(value: f64) -> BitPattern {
  encode_as::<half::f16>(value)
}

#[unsafe(no_mangle)]
pub fn encode_32(value: f64) -> BitPattern {
  encode_as::<f32>(value)
}

#[unsafe(no_mangle)]
pub fn encode_64(value: f64) -> BitPattern {
  encode_as::<f64>(value)
}

//

#[unsafe(no_mangle)]
pub fn decode_16(bits: BitPattern) -> f64 {
  decode_as::<half::f16>(bits)
}

#[unsafe(no_mangle)]
pub fn decode_32(bits: BitPattern) -> f64 {
  decode_as::<f32>(bits)
}

#[unsafe(no_mangle)]
pub fn decode_64(bits: BitPattern) -> f64 {
  decode_as::<f64>(bits)
}

//

#[unsafe(no_mangle)]
pub fn decompose_16(bits: BitPattern) -> crate::DecodedFields {
  crate::decompose(bits, Format::Binary16)
}

#[unsafe(no_mangle)]
pub fn decompose_64(bits: BitPattern) -> crate::DecodedFields {
  crate::decompose(bits, Format::Binary64)
}
