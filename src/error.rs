// In: src/error.rs

//! This module defines the single, unified error type for the entire codec library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

use crate::types::ValueType;

#[derive(Error, Debug)]
pub enum CodecError {
    // =========================================================================
    // === Header & Dispatch Errors
    // =========================================================================
    #[error("Malformed array header: {0}")]
    MalformedHeader(String),

    #[error("Unrecognized strategy id: {0}")]
    UnknownStrategy(i32),

    #[error("Element count mismatch: header declares {expected}, decoded {actual}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("Invalid strategy parameter: {0}")]
    InvalidParameter(String),

    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: ValueType,
        actual: ValueType,
    },

    // =========================================================================
    // === Low-Level Kernel Errors
    // =========================================================================
    #[error("RLE decoding error: {0}")]
    RunLengthCorruption(String),

    #[error("Recursive index decoding error: {0}")]
    RecursiveIndexCorruption(String),

    #[error("Buffer length mismatch: expected a multiple of {1}, got {0}")]
    BufferMismatch(usize, usize),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    // =========================================================================
    // === Field-Level Errors
    // =========================================================================
    #[error("Codec failed on field '{field}': {source}")]
    Field {
        field: String,
        #[source]
        source: Box<CodecError>,
    },

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (config files, log files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically during config loading.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl CodecError {
    /// Wraps this error with the name of the structure field it occurred on.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        CodecError::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }
}
