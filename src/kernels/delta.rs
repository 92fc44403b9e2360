//! This module contains the pure, stateless kernels for performing
//! delta encoding and decoding.
//!
//! The core algorithms are implemented **in-place** on an owned copy. Arithmetic
//! wraps, so encode and decode stay exact inverses across the whole `i32` range.

use num_traits::{PrimInt, WrappingAdd, WrappingSub};

//==================================================================================
// 1. Generic Core Logic (In-Place)
//==================================================================================

/// Performs delta encoding **in-place**: `data[i] = data[i] - data[i - 1]`.
fn encode_slice_inplace<T>(data: &mut [T])
where
    T: PrimInt + WrappingSub,
{
    // Iterate backwards to use original values for calculation
    for i in (1..data.len()).rev() {
        data[i] = data[i].wrapping_sub(&data[i - 1]);
    }
}

/// Performs delta decoding (cumulative sum) **in-place**.
fn decode_slice_inplace<T>(data: &mut [T])
where
    T: PrimInt + WrappingAdd,
{
    // Iterate forwards to use the newly-decoded values for subsequent sums
    for i in 1..data.len() {
        data[i] = data[i].wrapping_add(&data[i - 1]);
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Emits the first value followed by the first-order differences.
pub fn encode<T>(input_slice: &[T]) -> Vec<T>
where
    T: PrimInt + WrappingSub,
{
    let mut data_vec = input_slice.to_vec();
    encode_slice_inplace(&mut data_vec);
    data_vec
}

/// Reconstructs the original values with a running sum.
pub fn decode<T>(input_slice: &[T]) -> Vec<T>
where
    T: PrimInt + WrappingAdd,
{
    let mut data_vec = input_slice.to_vec();
    decode_slice_inplace(&mut data_vec);
    data_vec
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
