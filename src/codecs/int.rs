//! The codec for arrays that decode to `i32`: atom and group ids, type
//! indices, sequence indices, bond lists, secondary-structure codes.
//!
//! Narrow pass-through strategies (`Raw8`, `Raw16`) refuse values that do not
//! fit instead of truncating them.

use crate::array_pipeline::strategy::IntStrategy;
use crate::codecs::{narrow, widen};
use crate::error::CodecError;
use crate::kernels::{big_endian, delta, recursive_index, rle};

/// Runs the forward transform chain and appends the payload to `output_buf`.
pub fn encode(
    values: &[i32],
    strategy: IntStrategy,
    output_buf: &mut Vec<u8>,
) -> Result<(), CodecError> {
    match strategy {
        IntStrategy::Raw8 => {
            let narrowed: Vec<i8> = narrow(values, "i8")?;
            big_endian::encode_i8(&narrowed, output_buf);
        }
        IntStrategy::Raw16 => {
            let narrowed: Vec<i16> = narrow(values, "i16")?;
            big_endian::encode(&narrowed, output_buf);
        }
        IntStrategy::Raw32 => big_endian::encode(values, output_buf),
        IntStrategy::RunLength => big_endian::encode(&rle::encode(values), output_buf),
        IntStrategy::DeltaRunLength => {
            let deltas = delta::encode(values);
            big_endian::encode(&rle::encode(&deltas), output_buf);
        }
        IntStrategy::Recursive16 => {
            let chunks: Vec<i16> = recursive_index::encode(values);
            big_endian::encode(&chunks, output_buf);
        }
        IntStrategy::Recursive8 => {
            let chunks: Vec<i8> = recursive_index::encode(values);
            big_endian::encode_i8(&chunks, output_buf);
        }
    }
    Ok(())
}

/// Runs the inverse transform chain over a payload.
pub fn decode(
    payload: &[u8],
    strategy: IntStrategy,
    num_values: usize,
) -> Result<Vec<i32>, CodecError> {
    match strategy {
        IntStrategy::Raw8 => Ok(widen(&big_endian::decode_i8(payload))),
        IntStrategy::Raw16 => Ok(widen(&big_endian::decode::<i16>(payload)?)),
        IntStrategy::Raw32 => big_endian::decode::<i32>(payload),
        IntStrategy::RunLength => {
            let pairs = big_endian::decode::<i32>(payload)?;
            rle::decode_exact(&pairs, num_values)
        }
        IntStrategy::DeltaRunLength => {
            let pairs = big_endian::decode::<i32>(payload)?;
            let deltas = rle::decode_exact(&pairs, num_values)?;
            Ok(delta::decode(&deltas))
        }
        IntStrategy::Recursive16 => {
            recursive_index::decode(&big_endian::decode::<i16>(payload)?)
        }
        IntStrategy::Recursive8 => recursive_index::decode(&big_endian::decode_i8(payload)),
    }
}
