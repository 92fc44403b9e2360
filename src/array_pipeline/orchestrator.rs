// In: src/array_pipeline/orchestrator.rs

//! The header-level coordinator for encoding and decoding one array.
//!
//! Encode: validate the strategy against the array, run the typed codec's
//! forward chain, prefix the header. Decode: parse the header, turn the raw id
//! into a `Strategy` (unknown ids fail here), run the typed codec's inverse
//! chain, and check the decoded length against the declared count.

use crate::array_pipeline::header::ArrayHeader;
use crate::array_pipeline::strategy::Strategy;
use crate::bridge::format::HEADER_SIZE;
use crate::codecs;
use crate::error::CodecError;
use crate::types::{TypedArray, ValueType};

//==================================================================================
// 1. Public Orchestration API
//==================================================================================

/// Encodes one array into a header-prefixed buffer.
pub fn encode_array(array: &TypedArray, strategy: Strategy) -> Result<Vec<u8>, CodecError> {
    strategy.validate()?;
    if array.value_type() != strategy.value_type() {
        return Err(CodecError::TypeMismatch {
            expected: strategy.value_type(),
            actual: array.value_type(),
        });
    }

    let header = ArrayHeader {
        strategy_id: strategy.id(),
        parameter: strategy.parameter(),
        element_count: array.len(),
    };
    let mut output_buf = Vec::with_capacity(HEADER_SIZE + array.len() * 4);
    header.write(&mut output_buf)?;

    match (array, strategy) {
        (TypedArray::Float32(values), Strategy::Float(s)) => {
            codecs::float::encode(values, s, &mut output_buf)?
        }
        (TypedArray::Int32(values), Strategy::Int(s)) => {
            codecs::int::encode(values, s, &mut output_buf)?
        }
        (TypedArray::Char(values), Strategy::Char(s)) => {
            codecs::chars::encode(values, s, &mut output_buf)?
        }
        (TypedArray::String(values), Strategy::String(s)) => {
            codecs::strings::encode(values, s, &mut output_buf)?
        }
        // Excluded by the value type check above.
        (array, strategy) => {
            return Err(CodecError::TypeMismatch {
                expected: strategy.value_type(),
                actual: array.value_type(),
            })
        }
    }

    log::debug!(
        "encode_array: {} elements with {} -> {} bytes",
        array.len(),
        strategy,
        output_buf.len()
    );
    log_metric!(
        "event" = "encode_array",
        "strategy" = strategy.id(),
        "count" = array.len(),
        "bytes" = output_buf.len()
    );
    Ok(output_buf)
}

/// Decodes a buffer into whatever array type its strategy produces.
pub fn decode_any(bytes: &[u8]) -> Result<TypedArray, CodecError> {
    let (header, payload) = ArrayHeader::parse(bytes)?;
    let strategy = Strategy::from_id(header.strategy_id, header.parameter)?;
    decode_payload(payload, strategy, header.element_count)
}

/// Decodes a buffer, requiring its strategy to produce `expected` values.
pub fn decode_array(bytes: &[u8], expected: ValueType) -> Result<TypedArray, CodecError> {
    let (header, payload) = ArrayHeader::parse(bytes)?;
    let strategy = Strategy::from_id(header.strategy_id, header.parameter)?;
    if strategy.value_type() != expected {
        return Err(CodecError::TypeMismatch {
            expected,
            actual: strategy.value_type(),
        });
    }
    decode_payload(payload, strategy, header.element_count)
}

//==================================================================================
// 2. Private Helpers
//==================================================================================

fn decode_payload(
    payload: &[u8],
    strategy: Strategy,
    num_values: usize,
) -> Result<TypedArray, CodecError> {
    let array = match strategy {
        Strategy::Float(s) => TypedArray::Float32(codecs::float::decode(payload, s, num_values)?),
        Strategy::Int(s) => TypedArray::Int32(codecs::int::decode(payload, s, num_values)?),
        Strategy::Char(s) => TypedArray::Char(codecs::chars::decode(payload, s, num_values)?),
        Strategy::String(s) => TypedArray::String(codecs::strings::decode(payload, s)?),
    };

    if array.len() != num_values {
        return Err(CodecError::CountMismatch {
            expected: num_values,
            actual: array.len(),
        });
    }

    log::debug!(
        "decode_array: {} payload bytes with {} -> {} elements",
        payload.len(),
        strategy,
        num_values
    );
    log_metric!(
        "event" = "decode_array",
        "strategy" = strategy.id(),
        "count" = num_values
    );
    Ok(array)
}
