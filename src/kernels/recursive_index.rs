//! This module contains the pure, stateless kernels for recursive indexing:
//! packing `i32` values into a stream of narrower signed chunks (`i16` or `i8`).
//!
//! A value that fits strictly inside the chunk type's range is written as one
//! chunk. A larger value is written as a run of boundary chunks (`MAX` or `MIN`)
//! followed by the remaining residual. Because boundary chunks are continuation
//! markers, a value equal to a bound is written as `[bound, 0]`.
//!
//! Decode is driven by content, not by a stride, and runs as an explicit cursor
//! over the chunk stream.

use num_traits::NumCast;

use crate::error::CodecError;
use crate::traits::IndexChunk;

//==================================================================================
// 1. Public API
//==================================================================================

/// Splits every value into boundary chunks plus a terminating residual.
pub fn encode<C: IndexChunk>(input_slice: &[i32]) -> Vec<C> {
    let max = C::max_i32();
    let min = C::min_i32();
    let mut output = Vec::with_capacity(input_slice.len());

    for &value in input_slice {
        let mut remaining = value;
        // `remaining` moves toward zero on every step, so neither subtraction overflows.
        while remaining >= max {
            output.push(C::max_value());
            remaining -= max;
        }
        while remaining <= min {
            output.push(C::min_value());
            remaining -= min;
        }
        output.push(to_chunk(remaining));
    }
    output
}

/// Reassembles values by summing chunks until a non-boundary chunk is read.
pub fn decode<C: IndexChunk>(chunks: &[C]) -> Result<Vec<i32>, CodecError> {
    let max = C::max_i32();
    let min = C::min_i32();
    let mut output = Vec::with_capacity(chunks.len());
    let mut accumulator: i32 = 0;
    let mut pending = false;

    for (cursor, &chunk) in chunks.iter().enumerate() {
        let chunk: i32 = chunk.into();
        accumulator = accumulator.checked_add(chunk).ok_or_else(|| {
            CodecError::RecursiveIndexCorruption(format!(
                "Accumulated value overflows i32 at chunk {}",
                cursor
            ))
        })?;

        if chunk != max && chunk != min {
            output.push(accumulator);
            accumulator = 0;
            pending = false;
        } else {
            pending = true;
        }
    }

    if pending {
        return Err(CodecError::RecursiveIndexCorruption(
            "Chunk stream ends inside a value (trailing boundary chunk)".to_string(),
        ));
    }
    Ok(output)
}

//==================================================================================
// 2. Private Helpers
//==================================================================================

/// Converts a residual that is known to lie strictly inside the chunk range.
fn to_chunk<C: IndexChunk>(residual: i32) -> C {
    // The encode loops leave `min < residual < max`, so the cast is lossless.
    <C as NumCast>::from(residual).unwrap_or_else(C::zero)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
