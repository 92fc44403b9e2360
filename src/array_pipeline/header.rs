//! Defines the self-describing wire layout of a single encoded array.
//! This module is the single source of truth for writing the fixed header and
//! for parsing it back without touching the payload.

use std::io::{Cursor, Read};

use crate::bridge::format::HEADER_SIZE;
use crate::error::CodecError;

//==================================================================================
// Public Structs
//==================================================================================

/// The fixed 12-byte header at the start of every encoded array.
///
/// The strategy id is kept raw here; turning it into a `Strategy` (and rejecting
/// unknown ids) is the orchestrator's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayHeader {
    pub strategy_id: i32,
    pub parameter: i32,
    /// Logical length of the decoded array, independent of the payload size.
    pub element_count: usize,
}

//==================================================================================
// Core Implementation
//==================================================================================

impl ArrayHeader {
    /// Appends the header, big-endian, to `output_buf`.
    pub fn write(&self, output_buf: &mut Vec<u8>) -> Result<(), CodecError> {
        let element_count = i32::try_from(self.element_count).map_err(|_| {
            CodecError::ValueOutOfRange(format!(
                "Element count {} does not fit the i32 header field",
                self.element_count
            ))
        })?;
        output_buf.reserve(HEADER_SIZE);
        output_buf.extend_from_slice(&self.strategy_id.to_be_bytes());
        output_buf.extend_from_slice(&self.parameter.to_be_bytes());
        output_buf.extend_from_slice(&element_count.to_be_bytes());
        Ok(())
    }

    /// Parses the header and returns it together with the payload slice.
    pub fn parse(bytes: &[u8]) -> Result<(Self, &[u8]), CodecError> {
        if bytes.len() < HEADER_SIZE {
            return Err(CodecError::MalformedHeader(format!(
                "Buffer is too small to hold a header. Minimum size: {}, got: {}",
                HEADER_SIZE,
                bytes.len()
            )));
        }

        let mut cursor = Cursor::new(bytes);
        let map_err = |e: std::io::Error| CodecError::MalformedHeader(e.to_string());

        let mut i32_buf = [0u8; 4];
        cursor.read_exact(&mut i32_buf).map_err(map_err)?;
        let strategy_id = i32::from_be_bytes(i32_buf);

        cursor.read_exact(&mut i32_buf).map_err(map_err)?;
        let parameter = i32::from_be_bytes(i32_buf);

        cursor.read_exact(&mut i32_buf).map_err(map_err)?;
        let raw_count = i32::from_be_bytes(i32_buf);
        if raw_count < 0 {
            return Err(CodecError::MalformedHeader(format!(
                "Negative element count: {}",
                raw_count
            )));
        }

        let header = ArrayHeader {
            strategy_id,
            parameter,
            element_count: raw_count as usize,
        };
        Ok((header, &bytes[HEADER_SIZE..]))
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
