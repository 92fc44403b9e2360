// In: src/array_pipeline/planner.rs

//! The empirical strategy planner.
//!
//! Given a typed array, the planner generates every applicable strategy for its
//! value type, trial-encodes the full array with each, and keeps the smallest
//! output. Candidates that fail to encode (e.g. values that do not fit an `i16`)
//! are skipped. Ties go to the candidate generated first, which is always the
//! one with the lowest strategy id.

use std::time::Instant;

use crate::array_pipeline::orchestrator;
use crate::array_pipeline::strategy::{
    CharStrategy, FloatStrategy, IntStrategy, Strategy, StringStrategy,
};
use crate::config::PlannerSettings;
use crate::error::CodecError;
use crate::kernels::fixed_point;
use crate::types::TypedArray;

//==================================================================================
// 1. Candidate Generation
//==================================================================================

/// Lists the candidate strategies for `array`, in ascending id order.
pub fn generate_candidates(array: &TypedArray, settings: &PlannerSettings) -> Vec<Strategy> {
    match array {
        TypedArray::Float32(_) => {
            let mut candidates = vec![Strategy::Float(FloatStrategy::Raw)];
            if settings.allow_lossy {
                let factor = settings.float_factor;
                candidates.extend([
                    Strategy::Float(FloatStrategy::ScaledRunLength { factor }),
                    Strategy::Float(FloatStrategy::ScaledDeltaRecursive16 { factor }),
                    Strategy::Float(FloatStrategy::Scaled16 { factor }),
                    Strategy::Float(FloatStrategy::ScaledRecursive16 { factor }),
                    Strategy::Float(FloatStrategy::ScaledRecursive8 { factor }),
                ]);
            }
            candidates
        }
        TypedArray::Int32(_) => [
            IntStrategy::Raw8,
            IntStrategy::Raw16,
            IntStrategy::Raw32,
            IntStrategy::RunLength,
            IntStrategy::DeltaRunLength,
            IntStrategy::Recursive16,
            IntStrategy::Recursive8,
        ]
        .into_iter()
        .map(Strategy::Int)
        .collect(),
        TypedArray::Char(_) => vec![Strategy::Char(CharStrategy::RunLength)],
        TypedArray::String(values) => {
            let longest = values.iter().map(String::len).max().unwrap_or(0).max(1);
            let length = i32::try_from(longest).unwrap_or(i32::MAX);
            vec![Strategy::String(StringStrategy::FixedLength { length })]
        }
    }
}

//==================================================================================
// 2. Empirical Scoring
//==================================================================================

/// Picks the strategy that produces the smallest buffer for `array`.
///
/// Returns the winning strategy and its encoded size, header included.
pub fn plan_strategy(
    array: &TypedArray,
    settings: &PlannerSettings,
) -> Result<(Strategy, usize), CodecError> {
    fixed_point::validate_factor(settings.float_factor)?;
    let candidates = generate_candidates(array, settings);
    find_best_strategy_by_trial(array, candidates)
}

fn find_best_strategy_by_trial(
    array: &TypedArray,
    candidates: Vec<Strategy>,
) -> Result<(Strategy, usize), CodecError> {
    let start_overall = Instant::now();
    log::info!(
        "\n--- find_best_strategy_by_trial EMPIRICAL PLANNER SCORING (for {} x {}) ---",
        array.len(),
        array.value_type()
    );

    let mut best: Option<(Strategy, usize)> = None;
    let mut last_error = None;

    for strategy in candidates {
        let start_candidate = Instant::now();
        match orchestrator::encode_array(array, strategy) {
            Ok(encoded) => {
                log::info!(
                    "  - Candidate: {:<45} | Score (Size): {} | Time: {:.2?}",
                    strategy.to_string(),
                    encoded.len(),
                    start_candidate.elapsed(),
                );
                if best.map_or(true, |(_, size)| encoded.len() < size) {
                    best = Some((strategy, encoded.len()));
                }
            }
            Err(e) => {
                log::info!(
                    "  - Candidate: {:<45} | Score (Size): FAILED TO EXECUTE ({})",
                    strategy.to_string(),
                    e
                );
                last_error = Some(e);
            }
        }
    }

    log::info!(
        "--- Empirical scoring total time: {:.2?} ---",
        start_overall.elapsed()
    );

    match (best, last_error) {
        (Some(winner), _) => Ok(winner),
        (None, Some(e)) => Err(e),
        (None, None) => Err(CodecError::InvalidParameter(format!(
            "No candidate strategies for {} arrays",
            array.value_type()
        ))),
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
