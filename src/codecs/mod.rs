//! This module holds the typed array codecs: one module per decoded value type.
//!
//! Each codec owns exactly the strategies of its type (see
//! `crate::array_pipeline::strategy`) and composes the kernels for each of them
//! in a fixed order. Codecs work on payloads only; the header is written and
//! parsed by the orchestrator.

pub mod chars;
pub mod float;
pub mod int;
pub mod strings;

use num_traits::NumCast;

use crate::error::CodecError;

/// Converts every value to a narrower integer type, failing on the first that does not fit.
pub(crate) fn narrow<T: NumCast>(values: &[i32], target: &str) -> Result<Vec<T>, CodecError> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            <T as NumCast>::from(v).ok_or_else(|| {
                CodecError::ValueOutOfRange(format!(
                    "Value {} at index {} does not fit in {}",
                    v, i, target
                ))
            })
        })
        .collect()
}

/// Widens a decoded narrow integer payload back to `i32`.
pub(crate) fn widen<T: Copy + Into<i32>>(values: &[T]) -> Vec<i32> {
    values.iter().map(|&v| v.into()).collect()
}
