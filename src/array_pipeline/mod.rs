// In: src/array_pipeline/mod.rs

//! The single-array engine: strategies, the wire header, the encode/decode
//! orchestrator, and the empirical planner.

pub mod header;
pub mod orchestrator;
pub mod planner;
pub mod strategy;

pub use orchestrator::{decode_any, decode_array, encode_array};
pub use planner::plan_strategy;
pub use strategy::{CharStrategy, FloatStrategy, IntStrategy, Strategy, StringStrategy};

#[cfg(test)]
mod orchestrator_tests;
