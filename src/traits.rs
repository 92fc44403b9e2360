//! This module defines shared traits used across different kernels.

use num_traits::{PrimInt, Signed};

/// A fixed-width word that can be written to and read from a big-endian payload.
pub trait BigEndianWord: Copy {
    /// The encoded width in bytes.
    const WIDTH: usize;

    fn write_be(self, out: &mut Vec<u8>);

    /// Reads one word. `bytes` must be exactly `WIDTH` long.
    fn read_be(bytes: &[u8]) -> Self;
}

// Implement the trait for every word type that appears in a payload.
macro_rules! impl_big_endian_word {
    ($T:ty) => {
        impl BigEndianWord for $T {
            const WIDTH: usize = std::mem::size_of::<$T>();

            #[inline]
            fn write_be(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_be_bytes());
            }

            #[inline]
            fn read_be(bytes: &[u8]) -> Self {
                let mut buf = [0u8; std::mem::size_of::<$T>()];
                buf.copy_from_slice(bytes);
                <$T>::from_be_bytes(buf)
            }
        }
    };
}

impl_big_endian_word!(i8);
impl_big_endian_word!(i16);
impl_big_endian_word!(i32);
impl_big_endian_word!(f32);

/// A signed integer narrower than `i32` that recursive indexing can split values into.
///
/// The type's own bounds are the overflow markers: a chunk equal to `MIN` or `MAX`
/// continues the current value, any other chunk terminates it.
pub trait IndexChunk: PrimInt + Signed + Into<i32> + BigEndianWord {
    fn max_i32() -> i32 {
        Self::max_value().into()
    }

    fn min_i32() -> i32 {
        Self::min_value().into()
    }
}

impl IndexChunk for i8 {}
impl IndexChunk for i16 {}
