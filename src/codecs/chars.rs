//! The codec for arrays of single characters (alternate locations, insertion
//! codes). `'\0'` stands for "no code".

use crate::array_pipeline::strategy::CharStrategy;
use crate::error::CodecError;
use crate::kernels::{big_endian, rle};

pub fn encode(
    values: &[char],
    strategy: CharStrategy,
    output_buf: &mut Vec<u8>,
) -> Result<(), CodecError> {
    match strategy {
        CharStrategy::RunLength => {
            // Every Unicode scalar value is below 0x110000, so the cast is lossless.
            let codes: Vec<i32> = values.iter().map(|&c| c as u32 as i32).collect();
            big_endian::encode(&rle::encode(&codes), output_buf);
        }
    }
    Ok(())
}

pub fn decode(
    payload: &[u8],
    strategy: CharStrategy,
    num_values: usize,
) -> Result<Vec<char>, CodecError> {
    match strategy {
        CharStrategy::RunLength => {
            let pairs = big_endian::decode::<i32>(payload)?;
            let codes = rle::decode_exact(&pairs, num_values)?;
            codes.into_iter().map(to_char).collect()
        }
    }
}

fn to_char(code: i32) -> Result<char, CodecError> {
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| {
            CodecError::MalformedPayload(format!(
                "Character code {} is not a valid Unicode scalar value",
                code
            ))
        })
}
