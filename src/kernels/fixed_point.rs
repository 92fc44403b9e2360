//! This module contains the pure, stateless kernels for integer/float
//! fixed-point scaling.
//!
//! This is the one lossy transform in the engine. Encode multiplies by the
//! factor and rounds **half away from zero** (`f64::round`); decode divides the
//! stored integer by the factor in `f32`. A round trip is exact to within
//! `1 / (2 * factor)`.

use crate::error::CodecError;

//==================================================================================
// 1. Public API
//==================================================================================

/// Scales floats to integers: `round(value * factor)`.
pub fn encode(input_slice: &[f32], factor: i32) -> Result<Vec<i32>, CodecError> {
    validate_factor(factor)?;
    let factor_f64 = factor as f64;

    input_slice
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let scaled = (value as f64 * factor_f64).round();
            if !scaled.is_finite() || scaled < i32::MIN as f64 || scaled > i32::MAX as f64 {
                return Err(CodecError::ValueOutOfRange(format!(
                    "Value {} at index {} scaled by {} does not fit in i32",
                    value, i, factor
                )));
            }
            Ok(scaled as i32)
        })
        .collect()
}

/// Restores floats from scaled integers: `value / factor`.
pub fn decode(input_slice: &[i32], factor: i32) -> Result<Vec<f32>, CodecError> {
    validate_factor(factor)?;
    let divisor = factor as f32;
    Ok(input_slice.iter().map(|&v| v as f32 / divisor).collect())
}

/// A scale factor must be a positive integer divisor.
pub fn validate_factor(factor: i32) -> Result<(), CodecError> {
    if factor <= 0 {
        return Err(CodecError::InvalidParameter(format!(
            "Scale factor must be positive, got {}",
            factor
        )));
    }
    Ok(())
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        let encoded = encode(&[0.5, -0.5, 2.5, -2.5, 1.49, -1.51], 1).unwrap();
        assert_eq!(encoded, vec![1, -1, 3, -3, 1, -2]);
    }

    #[test]
    fn test_known_coordinates() {
        let encoded = encode(&[1.234, -5.678, 0.001], 1000).unwrap();
        assert_eq!(encoded, vec![1234, -5678, 1]);
        let decoded = decode(&encoded, 1000).unwrap();
        assert_eq!(decoded, vec![1.234, -5.678, 0.001]);
    }

    #[test]
    fn test_roundtrip_within_half_step() {
        let mut rng = StdRng::seed_from_u64(42);
        for factor in [1, 10, 100, 1000] {
            let original: Vec<f32> = (0..500).map(|_| rng.random_range(-999.0_f32..999.0)).collect();
            let decoded = decode(&encode(&original, factor).unwrap(), factor).unwrap();
            let tolerance = 0.5 / factor as f32;
            for (a, b) in original.iter().zip(decoded.iter()) {
                // One f32 ulp of slack for the final division.
                assert!((a - b).abs() <= tolerance + a.abs() * f32::EPSILON);
            }
        }
    }

    #[test]
    fn test_zero_and_negative_factor_rejected() {
        assert!(matches!(encode(&[1.0], 0), Err(CodecError::InvalidParameter(_))));
        assert!(matches!(decode(&[1], 0), Err(CodecError::InvalidParameter(_))));
        assert!(matches!(encode(&[1.0], -10), Err(CodecError::InvalidParameter(_))));
    }

    #[test]
    fn test_overflow_and_non_finite_rejected() {
        assert!(matches!(
            encode(&[3.0e9], 1),
            Err(CodecError::ValueOutOfRange(_))
        ));
        assert!(matches!(
            encode(&[f32::NAN], 1000),
            Err(CodecError::ValueOutOfRange(_))
        ));
        assert!(matches!(
            encode(&[f32::INFINITY], 1000),
            Err(CodecError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_empty() {
        assert!(encode(&[], 100).unwrap().is_empty());
        assert!(decode(&[], 100).unwrap().is_empty());
    }
}
