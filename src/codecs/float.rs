//! The codec for arrays that decode to `f32`: coordinates, B-factors,
//! occupancies.
//!
//! Every strategy except `Raw` first scales to integers with the strategy's
//! factor; the remaining stages run on `i32` exactly as the integer codec does.

use crate::array_pipeline::strategy::FloatStrategy;
use crate::codecs::{narrow, widen};
use crate::error::CodecError;
use crate::kernels::{big_endian, delta, fixed_point, recursive_index, rle};

/// Runs the forward transform chain and appends the payload to `output_buf`.
pub fn encode(
    values: &[f32],
    strategy: FloatStrategy,
    output_buf: &mut Vec<u8>,
) -> Result<(), CodecError> {
    match strategy {
        FloatStrategy::Raw => big_endian::encode(values, output_buf),
        FloatStrategy::ScaledRunLength { factor } => {
            let ints = fixed_point::encode(values, factor)?;
            big_endian::encode(&rle::encode(&ints), output_buf);
        }
        FloatStrategy::ScaledDeltaRecursive16 { factor } => {
            let ints = fixed_point::encode(values, factor)?;
            let deltas = delta::encode(&ints);
            let chunks: Vec<i16> = recursive_index::encode(&deltas);
            big_endian::encode(&chunks, output_buf);
        }
        FloatStrategy::Scaled16 { factor } => {
            let ints = fixed_point::encode(values, factor)?;
            let narrowed: Vec<i16> = narrow(&ints, "i16")?;
            big_endian::encode(&narrowed, output_buf);
        }
        FloatStrategy::ScaledRecursive16 { factor } => {
            let ints = fixed_point::encode(values, factor)?;
            let chunks: Vec<i16> = recursive_index::encode(&ints);
            big_endian::encode(&chunks, output_buf);
        }
        FloatStrategy::ScaledRecursive8 { factor } => {
            let ints = fixed_point::encode(values, factor)?;
            let chunks: Vec<i8> = recursive_index::encode(&ints);
            big_endian::encode_i8(&chunks, output_buf);
        }
    }
    Ok(())
}

/// Runs the inverse transform chain over a payload.
///
/// `num_values` bounds run-length expansion; the caller still checks the
/// final length for the other strategies.
pub fn decode(
    payload: &[u8],
    strategy: FloatStrategy,
    num_values: usize,
) -> Result<Vec<f32>, CodecError> {
    match strategy {
        FloatStrategy::Raw => big_endian::decode::<f32>(payload),
        FloatStrategy::ScaledRunLength { factor } => {
            let pairs = big_endian::decode::<i32>(payload)?;
            let ints = rle::decode_exact(&pairs, num_values)?;
            fixed_point::decode(&ints, factor)
        }
        FloatStrategy::ScaledDeltaRecursive16 { factor } => {
            let chunks = big_endian::decode::<i16>(payload)?;
            let deltas = recursive_index::decode(&chunks)?;
            fixed_point::decode(&delta::decode(&deltas), factor)
        }
        FloatStrategy::Scaled16 { factor } => {
            let narrowed = big_endian::decode::<i16>(payload)?;
            fixed_point::decode(&widen(&narrowed), factor)
        }
        FloatStrategy::ScaledRecursive16 { factor } => {
            let chunks = big_endian::decode::<i16>(payload)?;
            fixed_point::decode(&recursive_index::decode(&chunks)?, factor)
        }
        FloatStrategy::ScaledRecursive8 { factor } => {
            let chunks = big_endian::decode_i8(payload);
            fixed_point::decode(&recursive_index::decode(&chunks)?, factor)
        }
    }
}
