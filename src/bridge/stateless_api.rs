// In: src/bridge/stateless_api.rs

use crate::array_pipeline::header::ArrayHeader;
use crate::array_pipeline::orchestrator;
use crate::array_pipeline::strategy::{strategy_name, Strategy};
use crate::bridge::format::{ArrayStats, HEADER_SIZE};
use crate::error::CodecError;
use crate::types::{TypedArray, ValueType};

/// Encodes a single typed array with an explicit strategy.
pub fn encode_array(array: &TypedArray, strategy: Strategy) -> Result<Vec<u8>, CodecError> {
    orchestrator::encode_array(array, strategy)
}

/// Decodes a single buffer, requiring it to hold `expected` values.
pub fn decode_array(bytes: &[u8], expected: ValueType) -> Result<TypedArray, CodecError> {
    orchestrator::decode_array(bytes, expected)
}

/// Decodes a single buffer into whatever type its strategy produces.
pub fn decode_any(bytes: &[u8]) -> Result<TypedArray, CodecError> {
    orchestrator::decode_any(bytes)
}

/// Reads the header of an encoded array without decoding its payload.
///
/// Only the header is validated: an unknown strategy id is still an error, but
/// a corrupt payload is not detected here.
pub fn analyze_array(bytes: &[u8]) -> Result<ArrayStats, CodecError> {
    // 1. Delegate to the header parser.
    let (header, payload) = ArrayHeader::parse(bytes)?;

    // 2. Translate the raw header into the public-facing ArrayStats struct.
    let strategy_name =
        strategy_name(header.strategy_id).ok_or(CodecError::UnknownStrategy(header.strategy_id))?;
    Ok(ArrayStats {
        strategy_id: header.strategy_id,
        strategy_name,
        parameter: header.parameter,
        element_count: header.element_count,
        header_size: HEADER_SIZE,
        payload_size: payload.len(),
        total_size: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array_pipeline::strategy::FloatStrategy;

    #[test]
    fn test_analyze_array_after_encoding() {
        // 1. Arrange: a small coordinate array.
        let array = TypedArray::from(vec![1.234_f32, -5.678, 0.001]);

        // 2. Act: encode it through the public API.
        let strategy = Strategy::Float(FloatStrategy::ScaledDeltaRecursive16 { factor: 1000 });
        let bytes = encode_array(&array, strategy).unwrap();

        // 3. Act: analyze the result.
        let stats = analyze_array(&bytes).unwrap();

        // 4. Assert.
        assert_eq!(stats.strategy_id, 10);
        assert_eq!(stats.strategy_name, "scaled_delta_recursive16_float");
        assert_eq!(stats.parameter, 1000);
        assert_eq!(stats.element_count, 3);
        assert_eq!(stats.header_size + stats.payload_size, stats.total_size);
        assert_eq!(stats.payload_size, 6);
    }

    #[test]
    fn test_analyze_array_rejects_unknown_ids() {
        let mut bytes = vec![0, 0, 0, 99];
        bytes.extend_from_slice(&[0; 8]);
        assert!(matches!(
            analyze_array(&bytes),
            Err(CodecError::UnknownStrategy(99))
        ));
    }
}
