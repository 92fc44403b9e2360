//! This module contains the kernels that move typed words in and out of a
//! payload. Every multi-byte word in the format is big-endian.

use crate::error::CodecError;
use crate::traits::BigEndianWord;

/// Appends every value to `output_buf` as a big-endian word.
pub fn encode<T: BigEndianWord>(input_slice: &[T], output_buf: &mut Vec<u8>) {
    output_buf.reserve(input_slice.len() * T::WIDTH);
    for &value in input_slice {
        value.write_be(output_buf);
    }
}

/// Reads a payload as a sequence of big-endian words.
pub fn decode<T: BigEndianWord>(input_bytes: &[u8]) -> Result<Vec<T>, CodecError> {
    if input_bytes.len() % T::WIDTH != 0 {
        return Err(CodecError::BufferMismatch(input_bytes.len(), T::WIDTH));
    }
    Ok(input_bytes.chunks_exact(T::WIDTH).map(T::read_be).collect())
}

/// Single-byte payloads need no byte swapping; this is a plain reinterpretation.
pub fn decode_i8(input_bytes: &[u8]) -> Vec<i8> {
    bytemuck::cast_slice::<u8, i8>(input_bytes).to_vec()
}

pub fn encode_i8(input_slice: &[i8], output_buf: &mut Vec<u8>) {
    output_buf.extend_from_slice(bytemuck::cast_slice::<i8, u8>(input_slice));
}
