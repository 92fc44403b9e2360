//! This module defines the canonical, type-safe representation of the element
//! types an encoded array can decode to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The logical element type of a decoded array.
///
/// Integer strategies of every physical width (8, 16 and 32 bit) decode to
/// `Int32`, and every scaled strategy decodes to `Float32`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueType {
    Float32,
    Int32,
    Char,
    String,
}

impl ValueType {
    /// Returns `true` if the type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Float32 | Self::Int32)
    }
}

/// Provides the canonical string representation for a `ValueType`.
impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_variant_name() {
        assert_eq!(ValueType::Float32.to_string(), "Float32");
        assert_eq!(ValueType::String.to_string(), "String");
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&ValueType::Char).unwrap();
        assert_eq!(json, "\"Char\"");
        let back: ValueType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ValueType::Char);
    }
}
