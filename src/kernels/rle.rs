//! This module contains the pure, stateless kernels for performing
//! Run-Length Encoding (RLE) and decoding.
//!
//! The encoded form is a flat sequence of `(value, run_length)` pairs of `i32`,
//! which is exactly how the pairs are laid out on the wire once each integer is
//! written big-endian. Run lengths are always `>= 1`.

use crate::error::CodecError;

//==================================================================================
// 1. Public API
//==================================================================================

/// Collapses each maximal run of equal values into a `(value, run_length)` pair.
pub fn encode(input_slice: &[i32]) -> Vec<i32> {
    let mut output = Vec::new();

    let Some((&first, rest)) = input_slice.split_first() else {
        return output;
    };

    let mut current_val = first;
    let mut run_count: i32 = 1;

    for &val in rest {
        // A run longer than i32::MAX is split so every count stays representable.
        if val == current_val && run_count < i32::MAX {
            run_count += 1;
        } else {
            output.push(current_val);
            output.push(run_count);
            current_val = val;
            run_count = 1;
        }
    }

    output.push(current_val);
    output.push(run_count);
    output
}

/// Expands `(value, run_length)` pairs back into the original sequence.
pub fn decode(pairs: &[i32]) -> Result<Vec<i32>, CodecError> {
    let total = checked_total_len(pairs)?;
    expand(pairs, total)
}

/// Expands `(value, run_length)` pairs, requiring exactly `num_values` outputs.
///
/// The declared total is checked before anything is allocated, so a corrupt run
/// length can not trigger an oversized allocation.
pub fn decode_exact(pairs: &[i32], num_values: usize) -> Result<Vec<i32>, CodecError> {
    let total = checked_total_len(pairs)?;
    if total != num_values {
        return Err(CodecError::CountMismatch {
            expected: num_values,
            actual: total,
        });
    }
    expand(pairs, total)
}

//==================================================================================
// 2. Private Helpers
//==================================================================================

/// Validates the pair structure and returns the decoded length.
fn checked_total_len(pairs: &[i32]) -> Result<usize, CodecError> {
    if pairs.len() % 2 != 0 {
        return Err(CodecError::RunLengthCorruption(format!(
            "Expected (value, run_length) pairs, got {} integers",
            pairs.len()
        )));
    }

    let mut total: usize = 0;
    for (i, pair) in pairs.chunks_exact(2).enumerate() {
        let run_length = pair[1];
        if run_length < 1 {
            return Err(CodecError::RunLengthCorruption(format!(
                "Run length {} at pair {} is not positive",
                run_length, i
            )));
        }
        total = total.checked_add(run_length as usize).ok_or_else(|| {
            CodecError::RunLengthCorruption("Total run length overflows usize".to_string())
        })?;
    }
    Ok(total)
}

fn expand(pairs: &[i32], total: usize) -> Result<Vec<i32>, CodecError> {
    let mut output = Vec::with_capacity(total);
    for pair in pairs.chunks_exact(2) {
        output.extend(std::iter::repeat(pair[0]).take(pair[1] as usize));
    }
    Ok(output)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rle_encode_known_runs() {
        let input = vec![15, 15, 15, 100, 100, 111, 111, 111, 111];
        assert_eq!(encode(&input), vec![15, 3, 100, 2, 111, 4]);
    }

    #[test]
    fn test_rle_empty() {
        assert!(encode(&[]).is_empty());
        assert!(decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_rle_roundtrip_i32() {
        let original: Vec<i32> = vec![5, 5, 5, 5, 8, 8, 8, 2, 9, 9, 9, 9, 9, i32::MIN, i32::MAX];
        let encoded = encode(&original);
        assert_eq!(decode(&encoded).unwrap(), original);
        assert_eq!(decode_exact(&encoded, original.len()).unwrap(), original);
    }

    #[test]
    fn test_rle_no_repeats_doubles_size() {
        let original: Vec<i32> = (0..10).collect();
        let encoded = encode(&original);
        assert_eq!(encoded.len(), 20);
        assert_eq!(decode(&encoded).unwrap(), original);
    }

    #[test]
    fn test_rle_long_run() {
        let original = vec![42; 1000];
        assert_eq!(encode(&original), vec![42, 1000]);
    }

    #[test]
    fn test_decode_rejects_non_positive_run_length() {
        assert!(matches!(
            decode(&[7, 0]),
            Err(CodecError::RunLengthCorruption(_))
        ));
        assert!(matches!(
            decode(&[7, 2, 8, -3]),
            Err(CodecError::RunLengthCorruption(_))
        ));
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        assert!(matches!(
            decode(&[7, 2, 8]),
            Err(CodecError::RunLengthCorruption(_))
        ));
    }

    #[test]
    fn test_decode_exact_checks_count_before_expanding() {
        let result = decode_exact(&[1, i32::MAX], 3);
        assert!(matches!(
            result,
            Err(CodecError::CountMismatch { expected: 3, actual }) if actual == i32::MAX as usize
        ));
    }
}
