// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the public-facing API of the codec. It wraps the pure
// single-array engine (`array_pipeline`) in two surfaces: a stateless per-array
// API and a field-level driver for whole structure records.
//
// Data Flow (Encoding):
//
//   1. [Field Driver (encode_fields)]      -> Receives (StructureField, TypedArray) pairs
//         |
//         `-> a. Picks a strategy per field: override, default table, or planner
//         |
//         `-> b. Calls the engine for each field
//
//   2. [Stateless API (encode_array)]      -> Receives `&TypedArray` and a `Strategy`
//         |
//   3. [Array Engine (array_pipeline::orchestrator)] -> Returns `Result<Vec<u8>>` (header + payload)
//
//
// Data Flow (Decoding):
//
//   1. [Array Engine (array_pipeline::orchestrator)] -> Receives `&[u8]`
//         |
//         `-> Parses the header, dispatches on the strategy id, checks the count
//
//   2. [Stateless API (decode_array / decode_any)] -> Returns a `TypedArray`
//
//   3. [Field Driver (decode_fields)]      -> Checks each field's value type, names
//                                             the failing field on error
//
// ====================================================================================
pub mod fields;
pub mod format;
pub mod stateless_api;

// --- Field-Level API ---
pub use fields::{decode_fields, encode_fields, StructureField};

// --- Low-Level Stateless API ---
pub use stateless_api::{analyze_array, decode_any, decode_array, encode_array};

// --- Format Constants and Structs ---
pub use format::{ArrayStats, HEADER_SIZE};
