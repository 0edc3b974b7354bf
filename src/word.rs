//! The operation contract the SHA-1 core is written against.
//!
//! The compression function and the hasher only ever touch their words
//! through [`Word`] and [`ByteWord`], so any representation that provides
//! these operations (native integers, [`crate::FixedWidthUInt`], or a
//! symbolic bit-vector type) drives the same code path.

use std::fmt::Debug;

use num_traits::{CheckedShl, CheckedShr, PrimInt, WrappingAdd};

/// An unsigned integer of a fixed bit width with wrap-around arithmetic.
pub trait Word: Clone + Debug + PartialEq {
    const BITS: u32;

    /// Builds a constant, keeping only the low `BITS` bits of `value`.
    fn from_u64(value: u64) -> Self;

    fn bit_and(self, rhs: Self) -> Self;

    fn bit_or(self, rhs: Self) -> Self;

    fn bit_xor(self, rhs: Self) -> Self;

    fn bit_not(self) -> Self;

    /// Addition modulo 2^`BITS`.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Shifts of `BITS` or more yield zero.
    fn shift_left(self, n: u32) -> Self;

    /// Shifts of `BITS` or more yield zero.
    fn shift_right(self, n: u32) -> Self;

    /// `(x << n) | (x >> (BITS - n))`, with `n` taken modulo `BITS`.
    fn rotate_left(self, n: u32) -> Self {
        let n = n % Self::BITS;
        if n == 0 {
            return self;
        }
        self.clone()
            .shift_left(n)
            .bit_or(self.shift_right(Self::BITS - n))
    }
}

/// An 8-bit word paired with the 32-bit word SHA-1 computes in.
///
/// Implementors must have `Self::BITS == 8` and `Self::Wide::BITS == 32`.
pub trait ByteWord: Word {
    type Wide: Word;

    fn zero_extend(self) -> Self::Wide;

    /// Keeps the low 8 bits of `wide`.
    fn truncate(wide: Self::Wide) -> Self;
}

macro_rules! impl_word_for_primitive {
    ($($t:ty),*) => {$(
        impl Word for $t {
            const BITS: u32 = <$t>::BITS;

            fn from_u64(value: u64) -> Self {
                value as $t
            }

            fn bit_and(self, rhs: Self) -> Self {
                self & rhs
            }

            fn bit_or(self, rhs: Self) -> Self {
                self | rhs
            }

            fn bit_xor(self, rhs: Self) -> Self {
                self ^ rhs
            }

            fn bit_not(self) -> Self {
                !self
            }

            fn wrapping_add(self, rhs: Self) -> Self {
                WrappingAdd::wrapping_add(&self, &rhs)
            }

            fn shift_left(self, n: u32) -> Self {
                CheckedShl::checked_shl(&self, n).unwrap_or(0)
            }

            fn shift_right(self, n: u32) -> Self {
                CheckedShr::checked_shr(&self, n).unwrap_or(0)
            }

            fn rotate_left(self, n: u32) -> Self {
                PrimInt::rotate_left(self, n)
            }
        }
    )*};
}

impl_word_for_primitive!(u8, u16, u32, u64);

impl ByteWord for u8 {
    type Wide = u32;

    fn zero_extend(self) -> u32 {
        u32::from(self)
    }

    fn truncate(wide: u32) -> Self {
        wide as u8
    }
}
