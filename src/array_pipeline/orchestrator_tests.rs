use crate::array_pipeline::header::ArrayHeader;
use crate::array_pipeline::orchestrator::{decode_any, decode_array, encode_array};
use crate::array_pipeline::strategy::{
    CharStrategy, FloatStrategy, IntStrategy, Strategy, StringStrategy,
};
use crate::bridge::format::{ELEMENT_COUNT_OFFSET, HEADER_SIZE, KNOWN_STRATEGY_IDS};
use crate::error::CodecError;
use crate::types::{TypedArray, ValueType};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Test Helpers
/// Builds a buffer with a hand-written header and payload.
fn raw_buffer(strategy_id: i32, parameter: i32, element_count: i32, payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&strategy_id.to_be_bytes());
    bytes.extend_from_slice(&parameter.to_be_bytes());
    bytes.extend_from_slice(&element_count.to_be_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

fn assert_floats_within(original: &[f32], decoded: &[f32], factor: i32) {
    assert_eq!(original.len(), decoded.len());
    let tolerance = 0.5 / factor as f32;
    for (i, (a, b)) in original.iter().zip(decoded.iter()).enumerate() {
        assert!(
            (a - b).abs() <= tolerance + a.abs() * f32::EPSILON,
            "index {}: {} vs {}",
            i,
            a,
            b
        );
    }
}

//==================================================================================
// Round Trips
//==================================================================================

#[test]
fn test_coordinate_scenario_through_strategy_10() {
    let original = vec![1.234_f32, -5.678, 0.001];
    let strategy = Strategy::from_id(10, 1000).unwrap();
    let bytes = encode_array(&TypedArray::from(original.clone()), strategy).unwrap();

    let decoded = decode_array(&bytes, ValueType::Float32)
        .unwrap()
        .into_f32()
        .unwrap();
    for (a, b) in original.iter().zip(decoded.iter()) {
        assert!((a - b).abs() <= 0.0005);
    }
}

#[test]
fn test_strategy_10_exact_wire_bytes() {
    let strategy = Strategy::Float(FloatStrategy::ScaledDeltaRecursive16 { factor: 1000 });
    let bytes = encode_array(&TypedArray::from(vec![1.234_f32, -5.678, 0.001]), strategy).unwrap();
    assert_eq!(
        bytes,
        vec![
            0, 0, 0, 10, // strategy
            0, 0, 0x03, 0xE8, // factor 1000
            0, 0, 0, 3, // count
            0x04, 0xD2, 0xE5, 0x00, 0x16, 0x2F, // i16 chunks
        ]
    );
}

#[test]
fn test_strategy_7_exact_wire_bytes() {
    let bytes = encode_array(
        &TypedArray::from(vec![15, 15, 15, 100, 100]),
        Strategy::Int(IntStrategy::RunLength),
    )
    .unwrap();
    assert_eq!(
        bytes,
        raw_buffer(7, 0, 5, &[0, 0, 0, 15, 0, 0, 0, 3, 0, 0, 0, 100, 0, 0, 0, 2])
    );
}

#[test]
fn test_every_strategy_roundtrips_a_representative_array() {
    let floats: Vec<f32> = vec![10.5, 10.5, 11.25, -3.75, 0.0, 42.25];
    let ints: Vec<i32> = vec![1, 2, 3, 3, 3, 10, -20, 0];
    let chars = vec!['A', 'A', '\0', 'B'];
    let strings: Vec<String> = vec!["A".into(), "B".into(), "AA".into()];

    for id in KNOWN_STRATEGY_IDS {
        let strategy = Strategy::from_id(id, 1000).unwrap();
        let array = match strategy.value_type() {
            ValueType::Float32 => TypedArray::from(floats.clone()),
            ValueType::Int32 => TypedArray::from(ints.clone()),
            ValueType::Char => TypedArray::from(chars.clone()),
            ValueType::String => TypedArray::from(strings.clone()),
        };

        // Scaled16 at factor 1000 can not hold 42250; use a smaller factor there.
        let strategy = if id == 11 {
            Strategy::from_id(id, 100).unwrap()
        } else {
            strategy
        };

        let bytes = encode_array(&array, strategy).unwrap();
        let decoded = decode_any(&bytes).unwrap();
        match (&array, &decoded) {
            (TypedArray::Float32(a), TypedArray::Float32(b)) => {
                assert_floats_within(a, b, strategy.parameter().max(1));
            }
            _ => assert_eq!(array, decoded, "strategy {}", strategy),
        }
    }
}

#[test]
fn test_random_coordinates_roundtrip() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut x = 0.0_f32;
    let original: Vec<f32> = (0..5000)
        .map(|_| {
            // A random walk resembles a backbone trace: small steps, occasional jumps.
            x += if rng.random_bool(0.01) {
                rng.random_range(-500.0_f32..500.0)
            } else {
                rng.random_range(-2.0_f32..2.0)
            };
            x
        })
        .collect();

    for strategy in [
        Strategy::Float(FloatStrategy::ScaledDeltaRecursive16 { factor: 1000 }),
        Strategy::Float(FloatStrategy::ScaledRecursive16 { factor: 1000 }),
        Strategy::Float(FloatStrategy::ScaledRunLength { factor: 1000 }),
    ] {
        let bytes = encode_array(&TypedArray::from(original.clone()), strategy).unwrap();
        let decoded = decode_any(&bytes).unwrap().into_f32().unwrap();
        assert_floats_within(&original, &decoded, 1000);
    }
}

#[test]
fn test_empty_arrays_roundtrip() {
    for strategy in [
        Strategy::Float(FloatStrategy::ScaledDeltaRecursive16 { factor: 1000 }),
        Strategy::Int(IntStrategy::DeltaRunLength),
        Strategy::Char(CharStrategy::RunLength),
        Strategy::String(StringStrategy::FixedLength { length: 4 }),
    ] {
        let empty = match strategy.value_type() {
            ValueType::Float32 => TypedArray::Float32(vec![]),
            ValueType::Int32 => TypedArray::Int32(vec![]),
            ValueType::Char => TypedArray::Char(vec![]),
            ValueType::String => TypedArray::String(vec![]),
        };
        let bytes = encode_array(&empty, strategy).unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(decode_any(&bytes).unwrap(), empty);
    }
}

//==================================================================================
// Header & Dispatch Errors
//==================================================================================

#[test]
fn test_unknown_strategy_is_an_error_not_an_empty_array() {
    let bytes = raw_buffer(42, 0, 0, &[]);
    assert!(matches!(
        decode_any(&bytes),
        Err(CodecError::UnknownStrategy(42))
    ));
    assert!(matches!(
        decode_array(&bytes, ValueType::Int32),
        Err(CodecError::UnknownStrategy(42))
    ));
}

#[test]
fn test_declared_count_larger_than_payload() {
    let bytes = raw_buffer(4, 0, 3, &[0, 0, 0, 1, 0, 0, 0, 2]);
    assert!(matches!(
        decode_any(&bytes),
        Err(CodecError::CountMismatch {
            expected: 3,
            actual: 2
        })
    ));
}

#[test]
fn test_declared_count_smaller_than_run_length_total() {
    let mut bytes = encode_array(
        &TypedArray::from(vec![7; 10]),
        Strategy::Int(IntStrategy::RunLength),
    )
    .unwrap();
    // Overwrite the count field with 9.
    bytes[ELEMENT_COUNT_OFFSET..HEADER_SIZE].copy_from_slice(&9_i32.to_be_bytes());
    assert!(matches!(
        decode_any(&bytes),
        Err(CodecError::CountMismatch {
            expected: 9,
            actual: 10
        })
    ));
}

#[test]
fn test_count_mismatch_for_recursive_index() {
    let mut bytes = encode_array(
        &TypedArray::from(vec![100_000, 1]),
        Strategy::Int(IntStrategy::Recursive16),
    )
    .unwrap();
    bytes[ELEMENT_COUNT_OFFSET..HEADER_SIZE].copy_from_slice(&5_i32.to_be_bytes());
    assert!(matches!(
        decode_any(&bytes),
        Err(CodecError::CountMismatch {
            expected: 5,
            actual: 2
        })
    ));
}

#[test]
fn test_zero_scale_factor_in_header() {
    let bytes = raw_buffer(9, 0, 0, &[]);
    assert!(matches!(
        decode_any(&bytes),
        Err(CodecError::InvalidParameter(_))
    ));
}

#[test]
fn test_zero_scale_factor_on_encode() {
    let strategy = Strategy::Float(FloatStrategy::ScaledRunLength { factor: 0 });
    assert!(matches!(
        encode_array(&TypedArray::from(vec![1.0_f32]), strategy),
        Err(CodecError::InvalidParameter(_))
    ));
}

#[test]
fn test_run_length_corruption_surfaces() {
    let mut payload = Vec::new();
    payload.extend_from_slice(&5_i32.to_be_bytes());
    payload.extend_from_slice(&0_i32.to_be_bytes());
    let bytes = raw_buffer(7, 0, 0, &payload);
    assert!(matches!(
        decode_any(&bytes),
        Err(CodecError::RunLengthCorruption(_))
    ));
}

#[test]
fn test_malformed_header() {
    assert!(matches!(
        decode_any(&[0, 0, 0, 4, 0, 0]),
        Err(CodecError::MalformedHeader(_))
    ));
    assert!(matches!(
        decode_any(&raw_buffer(4, 0, -2, &[])),
        Err(CodecError::MalformedHeader(_))
    ));
}

#[test]
fn test_type_mismatch_on_decode_and_encode() {
    let bytes = encode_array(
        &TypedArray::from(vec![1, 2, 3]),
        Strategy::Int(IntStrategy::Raw32),
    )
    .unwrap();
    assert!(matches!(
        decode_array(&bytes, ValueType::Float32),
        Err(CodecError::TypeMismatch {
            expected: ValueType::Float32,
            actual: ValueType::Int32
        })
    ));

    assert!(matches!(
        encode_array(
            &TypedArray::from(vec![1.0_f32]),
            Strategy::Int(IntStrategy::Raw32)
        ),
        Err(CodecError::TypeMismatch { .. })
    ));
}

#[test]
fn test_header_reflects_actual_parameter_and_count() {
    let bytes = encode_array(
        &TypedArray::from(vec!["A".to_string(), "B".to_string()]),
        Strategy::String(StringStrategy::FixedLength { length: 4 }),
    )
    .unwrap();
    let (header, payload) = ArrayHeader::parse(&bytes).unwrap();
    assert_eq!(header.strategy_id, 5);
    assert_eq!(header.parameter, 4);
    assert_eq!(header.element_count, 2);
    assert_eq!(payload.len(), 8);
}
