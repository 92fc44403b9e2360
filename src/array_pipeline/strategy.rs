//! Defines the closed set of array encoding strategies.
//!
//! A strategy is a sum type nested by value type: every typed codec matches
//! exhaustively over exactly the strategies it owns, and the only place raw ids
//! become strategies is `Strategy::from_id`, which rejects anything outside the
//! known enumeration.

use std::fmt;

use crate::bridge::format::*;
use crate::error::CodecError;
use crate::kernels::fixed_point;
use crate::types::ValueType;

/// Strategies that decode to `f32`. Every scaled variant carries its divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatStrategy {
    /// Id 1: raw big-endian IEEE-754.
    Raw,
    /// Id 9: scale -> run-length.
    ScaledRunLength { factor: i32 },
    /// Id 10: scale -> delta -> recursive index into `i16`.
    ScaledDeltaRecursive16 { factor: i32 },
    /// Id 11: scale -> `i16`.
    Scaled16 { factor: i32 },
    /// Id 12: scale -> recursive index into `i16`.
    ScaledRecursive16 { factor: i32 },
    /// Id 13: scale -> recursive index into `i8`.
    ScaledRecursive8 { factor: i32 },
}

/// Strategies that decode to `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntStrategy {
    /// Id 2.
    Raw8,
    /// Id 3.
    Raw16,
    /// Id 4.
    Raw32,
    /// Id 7.
    RunLength,
    /// Id 8: delta -> run-length.
    DeltaRunLength,
    /// Id 14.
    Recursive16,
    /// Id 15.
    Recursive8,
}

/// Strategies that decode to `char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharStrategy {
    /// Id 6: run-length over the character codes.
    RunLength,
}

/// Strategies that decode to `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringStrategy {
    /// Id 5: `length` bytes per record, NUL padded.
    FixedLength { length: i32 },
}

/// One named, fixed composition of transforms used to encode or decode an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Float(FloatStrategy),
    Int(IntStrategy),
    Char(CharStrategy),
    String(StringStrategy),
}

impl Strategy {
    /// Builds a strategy from raw header values.
    ///
    /// The parameter is ignored by strategies that do not use it, and validated
    /// by those that do.
    pub fn from_id(id: i32, parameter: i32) -> Result<Self, CodecError> {
        let strategy = match id {
            CODEC_FLOAT32 => Strategy::Float(FloatStrategy::Raw),
            CODEC_INT8 => Strategy::Int(IntStrategy::Raw8),
            CODEC_INT16 => Strategy::Int(IntStrategy::Raw16),
            CODEC_INT32 => Strategy::Int(IntStrategy::Raw32),
            CODEC_FIXED_LENGTH_STRING => {
                Strategy::String(StringStrategy::FixedLength { length: parameter })
            }
            CODEC_RUN_LENGTH_CHAR => Strategy::Char(CharStrategy::RunLength),
            CODEC_RUN_LENGTH_INT32 => Strategy::Int(IntStrategy::RunLength),
            CODEC_DELTA_RUN_LENGTH_INT32 => Strategy::Int(IntStrategy::DeltaRunLength),
            CODEC_SCALED_RUN_LENGTH_FLOAT => {
                Strategy::Float(FloatStrategy::ScaledRunLength { factor: parameter })
            }
            CODEC_SCALED_DELTA_RECURSIVE16_FLOAT => {
                Strategy::Float(FloatStrategy::ScaledDeltaRecursive16 { factor: parameter })
            }
            CODEC_SCALED16_FLOAT => Strategy::Float(FloatStrategy::Scaled16 { factor: parameter }),
            CODEC_SCALED_RECURSIVE16_FLOAT => {
                Strategy::Float(FloatStrategy::ScaledRecursive16 { factor: parameter })
            }
            CODEC_SCALED_RECURSIVE8_FLOAT => {
                Strategy::Float(FloatStrategy::ScaledRecursive8 { factor: parameter })
            }
            CODEC_RECURSIVE16_INT32 => Strategy::Int(IntStrategy::Recursive16),
            CODEC_RECURSIVE8_INT32 => Strategy::Int(IntStrategy::Recursive8),
            unknown => return Err(CodecError::UnknownStrategy(unknown)),
        };
        strategy.validate()?;
        Ok(strategy)
    }

    /// The wire id of this strategy.
    pub fn id(&self) -> i32 {
        match self {
            Strategy::Float(s) => match s {
                FloatStrategy::Raw => CODEC_FLOAT32,
                FloatStrategy::ScaledRunLength { .. } => CODEC_SCALED_RUN_LENGTH_FLOAT,
                FloatStrategy::ScaledDeltaRecursive16 { .. } => {
                    CODEC_SCALED_DELTA_RECURSIVE16_FLOAT
                }
                FloatStrategy::Scaled16 { .. } => CODEC_SCALED16_FLOAT,
                FloatStrategy::ScaledRecursive16 { .. } => CODEC_SCALED_RECURSIVE16_FLOAT,
                FloatStrategy::ScaledRecursive8 { .. } => CODEC_SCALED_RECURSIVE8_FLOAT,
            },
            Strategy::Int(s) => match s {
                IntStrategy::Raw8 => CODEC_INT8,
                IntStrategy::Raw16 => CODEC_INT16,
                IntStrategy::Raw32 => CODEC_INT32,
                IntStrategy::RunLength => CODEC_RUN_LENGTH_INT32,
                IntStrategy::DeltaRunLength => CODEC_DELTA_RUN_LENGTH_INT32,
                IntStrategy::Recursive16 => CODEC_RECURSIVE16_INT32,
                IntStrategy::Recursive8 => CODEC_RECURSIVE8_INT32,
            },
            Strategy::Char(CharStrategy::RunLength) => CODEC_RUN_LENGTH_CHAR,
            Strategy::String(StringStrategy::FixedLength { .. }) => CODEC_FIXED_LENGTH_STRING,
        }
    }

    /// The value written to the header's parameter field (0 when unused).
    pub fn parameter(&self) -> i32 {
        match self {
            Strategy::Float(s) => s.factor().unwrap_or(0),
            Strategy::String(StringStrategy::FixedLength { length }) => *length,
            Strategy::Int(_) | Strategy::Char(_) => 0,
        }
    }

    /// The element type this strategy decodes to and encodes from.
    pub fn value_type(&self) -> ValueType {
        match self {
            Strategy::Float(_) => ValueType::Float32,
            Strategy::Int(_) => ValueType::Int32,
            Strategy::Char(_) => ValueType::Char,
            Strategy::String(_) => ValueType::String,
        }
    }

    /// `true` if encoding with this strategy may lose precision.
    pub fn is_lossy(&self) -> bool {
        matches!(self, Strategy::Float(s) if s.factor().is_some())
    }

    /// Checks the strategy's own parameter.
    pub fn validate(&self) -> Result<(), CodecError> {
        match self {
            Strategy::Float(s) => match s.factor() {
                Some(factor) => fixed_point::validate_factor(factor),
                None => Ok(()),
            },
            Strategy::String(StringStrategy::FixedLength { length }) if *length <= 0 => {
                Err(CodecError::InvalidParameter(format!(
                    "Fixed string length must be positive, got {}",
                    length
                )))
            }
            Strategy::String(_) | Strategy::Int(_) | Strategy::Char(_) => Ok(()),
        }
    }

    /// A short human-readable name, stable across versions.
    pub fn name(&self) -> &'static str {
        strategy_name(self.id()).unwrap_or("unknown")
    }
}

impl FloatStrategy {
    /// The scale factor, or `None` for the raw pass-through.
    pub fn factor(&self) -> Option<i32> {
        match self {
            FloatStrategy::Raw => None,
            FloatStrategy::ScaledRunLength { factor }
            | FloatStrategy::ScaledDeltaRecursive16 { factor }
            | FloatStrategy::Scaled16 { factor }
            | FloatStrategy::ScaledRecursive16 { factor }
            | FloatStrategy::ScaledRecursive8 { factor } => Some(*factor),
        }
    }
}

/// Maps a raw strategy id to its name without validating any parameter.
pub fn strategy_name(id: i32) -> Option<&'static str> {
    let name = match id {
        CODEC_FLOAT32 => "float32",
        CODEC_INT8 => "int8",
        CODEC_INT16 => "int16",
        CODEC_INT32 => "int32",
        CODEC_FIXED_LENGTH_STRING => "fixed_length_string",
        CODEC_RUN_LENGTH_CHAR => "run_length_char",
        CODEC_RUN_LENGTH_INT32 => "run_length_int32",
        CODEC_DELTA_RUN_LENGTH_INT32 => "delta_run_length_int32",
        CODEC_SCALED_RUN_LENGTH_FLOAT => "scaled_run_length_float",
        CODEC_SCALED_DELTA_RECURSIVE16_FLOAT => "scaled_delta_recursive16_float",
        CODEC_SCALED16_FLOAT => "scaled16_float",
        CODEC_SCALED_RECURSIVE16_FLOAT => "scaled_recursive16_float",
        CODEC_SCALED_RECURSIVE8_FLOAT => "scaled_recursive8_float",
        CODEC_RECURSIVE16_INT32 => "recursive16_int32",
        CODEC_RECURSIVE8_INT32 => "recursive8_int32",
        _ => return None,
    };
    Some(name)
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}(param={})", self.name(), self.id(), self.parameter())
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
