//! This module serves as the home of all pure, stateless transform kernels.
//!
//! Each kernel is an independent, invertible array transform with an `encode`
//! and an exact-inverse `decode` (fixed-point scaling is the one lossy pair).
//! Kernels know nothing about headers or strategies; the typed codecs in
//! `crate::codecs` compose them in a fixed order per strategy.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Layer 0: Type Conversion (float <-> scaled integer)
pub mod fixed_point;

/// Layer 1: Value Reduction
pub mod delta;

/// Layer 2: Sparsity Exploitation
pub mod rle;

/// Layer 3: Bit-Width Reduction
pub mod recursive_index;

/// Final Stage: Wire Serialization
pub mod big_endian;
