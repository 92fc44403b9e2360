//! This module defines the core, strongly-typed data representations used
//! throughout the codec engine.
//!
//! It includes the canonical `ValueType` enum naming the four array element
//! types, and the `TypedArray` sum type that every decode returns and every
//! encode consumes.

pub mod typed_array;
pub mod value_type;

// Re-export the main type(s) for easier access.
pub use typed_array::TypedArray;
pub use value_type::ValueType;
