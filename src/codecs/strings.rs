//! The codec for short string arrays (chain ids and chain names).
//!
//! Each element is stored as a fixed-width record of `length` bytes: the UTF-8
//! bytes of the string followed by NUL padding. Decode strips the padding.

use crate::array_pipeline::strategy::StringStrategy;
use crate::error::CodecError;

pub fn encode(
    values: &[String],
    strategy: StringStrategy,
    output_buf: &mut Vec<u8>,
) -> Result<(), CodecError> {
    match strategy {
        StringStrategy::FixedLength { length } => {
            let width = record_width(length)?;
            output_buf.reserve(values.len() * width);
            for (i, value) in values.iter().enumerate() {
                let bytes = value.as_bytes();
                if bytes.len() > width {
                    return Err(CodecError::ValueOutOfRange(format!(
                        "String '{}' at index {} is {} bytes, record length is {}",
                        value,
                        i,
                        bytes.len(),
                        width
                    )));
                }
                output_buf.extend_from_slice(bytes);
                output_buf.resize(output_buf.len() + width - bytes.len(), 0);
            }
        }
    }
    Ok(())
}

pub fn decode(payload: &[u8], strategy: StringStrategy) -> Result<Vec<String>, CodecError> {
    match strategy {
        StringStrategy::FixedLength { length } => {
            let width = record_width(length)?;
            if payload.len() % width != 0 {
                return Err(CodecError::BufferMismatch(payload.len(), width));
            }
            payload
                .chunks_exact(width)
                .map(|record| {
                    let end = record
                        .iter()
                        .rposition(|&b| b != 0)
                        .map_or(0, |last| last + 1);
                    String::from_utf8(record[..end].to_vec())
                        .map_err(|e| CodecError::MalformedPayload(e.to_string()))
                })
                .collect()
        }
    }
}

fn record_width(length: i32) -> Result<usize, CodecError> {
    usize::try_from(length)
        .ok()
        .filter(|&w| w > 0)
        .ok_or_else(|| {
            CodecError::InvalidParameter(format!(
                "Fixed string length must be positive, got {}",
                length
            ))
        })
}
