// In: src/bridge/format.rs

//! Defines all wire-level constants for the encoded array format.
//! This is the single source of truth for the header layout and the closed
//! enumeration of strategy ids.

//==================================================================================
// I. Header Layout
//==================================================================================

/// Byte offset of the big-endian `i32` strategy id.
pub const STRATEGY_ID_OFFSET: usize = 0;
/// Byte offset of the big-endian `i32` strategy parameter.
pub const PARAMETER_OFFSET: usize = 4;
/// Byte offset of the big-endian `i32` element count.
pub const ELEMENT_COUNT_OFFSET: usize = 8;
/// The fixed size of every array header; the payload starts here.
pub const HEADER_SIZE: usize = 12;

//==================================================================================
// II. Strategy Ids
//==================================================================================

pub const CODEC_FLOAT32: i32 = 1;
pub const CODEC_INT8: i32 = 2;
pub const CODEC_INT16: i32 = 3;
pub const CODEC_INT32: i32 = 4;
pub const CODEC_FIXED_LENGTH_STRING: i32 = 5;
pub const CODEC_RUN_LENGTH_CHAR: i32 = 6;
pub const CODEC_RUN_LENGTH_INT32: i32 = 7;
pub const CODEC_DELTA_RUN_LENGTH_INT32: i32 = 8;
pub const CODEC_SCALED_RUN_LENGTH_FLOAT: i32 = 9;
pub const CODEC_SCALED_DELTA_RECURSIVE16_FLOAT: i32 = 10;
pub const CODEC_SCALED16_FLOAT: i32 = 11;
pub const CODEC_SCALED_RECURSIVE16_FLOAT: i32 = 12;
pub const CODEC_SCALED_RECURSIVE8_FLOAT: i32 = 13;
pub const CODEC_RECURSIVE16_INT32: i32 = 14;
pub const CODEC_RECURSIVE8_INT32: i32 = 15;

/// Every strategy id a decoder accepts, in ascending order.
pub const KNOWN_STRATEGY_IDS: [i32; 15] = [
    CODEC_FLOAT32,
    CODEC_INT8,
    CODEC_INT16,
    CODEC_INT32,
    CODEC_FIXED_LENGTH_STRING,
    CODEC_RUN_LENGTH_CHAR,
    CODEC_RUN_LENGTH_INT32,
    CODEC_DELTA_RUN_LENGTH_INT32,
    CODEC_SCALED_RUN_LENGTH_FLOAT,
    CODEC_SCALED_DELTA_RECURSIVE16_FLOAT,
    CODEC_SCALED16_FLOAT,
    CODEC_SCALED_RECURSIVE16_FLOAT,
    CODEC_SCALED_RECURSIVE8_FLOAT,
    CODEC_RECURSIVE16_INT32,
    CODEC_RECURSIVE8_INT32,
];

//==================================================================================
// III. Inspection Results
//==================================================================================

/// The public-facing struct for header inspection results, returned by `analyze_array`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayStats {
    pub strategy_id: i32,
    pub strategy_name: &'static str,
    pub parameter: i32,
    pub element_count: usize,
    pub header_size: usize,
    pub payload_size: usize,
    pub total_size: usize,
}
