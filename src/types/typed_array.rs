//! The owned, decoded form of an array field.

use crate::types::ValueType;

/// A decoded array of a single element type.
///
/// This is the value every decode call returns and every encode call consumes.
/// It owns its data; nothing in the codec engine retains a reference to it.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedArray {
    Float32(Vec<f32>),
    Int32(Vec<i32>),
    Char(Vec<char>),
    String(Vec<String>),
}

impl TypedArray {
    pub fn value_type(&self) -> ValueType {
        match self {
            TypedArray::Float32(_) => ValueType::Float32,
            TypedArray::Int32(_) => ValueType::Int32,
            TypedArray::Char(_) => ValueType::Char,
            TypedArray::String(_) => ValueType::String,
        }
    }

    /// The logical element count, which is what the header's `element_count` records.
    pub fn len(&self) -> usize {
        match self {
            TypedArray::Float32(v) => v.len(),
            TypedArray::Int32(v) => v.len(),
            TypedArray::Char(v) => v.len(),
            TypedArray::String(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_f32(&self) -> Option<&[f32]> {
        match self {
            TypedArray::Float32(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<&[i32]> {
        match self {
            TypedArray::Int32(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_chars(&self) -> Option<&[char]> {
        match self {
            TypedArray::Char(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            TypedArray::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_f32(self) -> Option<Vec<f32>> {
        match self {
            TypedArray::Float32(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_i32(self) -> Option<Vec<i32>> {
        match self {
            TypedArray::Int32(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_chars(self) -> Option<Vec<char>> {
        match self {
            TypedArray::Char(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_strings(self) -> Option<Vec<String>> {
        match self {
            TypedArray::String(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Vec<f32>> for TypedArray {
    fn from(v: Vec<f32>) -> Self {
        TypedArray::Float32(v)
    }
}

impl From<Vec<i32>> for TypedArray {
    fn from(v: Vec<i32>) -> Self {
        TypedArray::Int32(v)
    }
}

impl From<Vec<char>> for TypedArray {
    fn from(v: Vec<char>) -> Self {
        TypedArray::Char(v)
    }
}

impl From<Vec<String>> for TypedArray {
    fn from(v: Vec<String>) -> Self {
        TypedArray::String(v)
    }
}
