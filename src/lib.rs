//! This file is the root of the `mmtf_codec` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`array_pipeline`,
//!     `kernels`, etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the public API: per-array encode/decode, header inspection,
//!     the field-level driver, and the planner.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod array_pipeline;
pub mod bridge;
pub mod codecs;
pub mod config;
pub mod kernels;

mod error;
mod traits;
mod types;

//==================================================================================
// 2. Public API
//==================================================================================
pub use array_pipeline::planner::plan_strategy;
pub use array_pipeline::strategy::{
    CharStrategy, FloatStrategy, IntStrategy, Strategy, StringStrategy,
};
pub use bridge::{
    analyze_array, decode_any, decode_array, decode_fields, encode_array, encode_fields,
    ArrayStats, StructureField,
};
pub use config::{CodecConfig, PlannerSettings, SelectionMode, StrategySpec};
pub use error::CodecError;
pub use observability::enable_verbose_logging;
pub use traits::{BigEndianWord, IndexChunk};
pub use types::{TypedArray, ValueType};
