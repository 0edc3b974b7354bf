use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Not, Shl, Shr};

use crate::{ByteWord, Error, Word};

pub type U8 = FixedWidthUInt<8>;
pub type U32 = FixedWidthUInt<32>;
pub type U64 = FixedWidthUInt<64>;

/// An unsigned integer of `BITS` bits behaving as a value modulo 2^`BITS`.
///
/// Operators only combine words of the same width, so mixing widths is a
/// type error. Conversions between widths go through [`try_zero_extend`] and
/// [`try_truncate`].
///
/// [`try_zero_extend`]: FixedWidthUInt::try_zero_extend
/// [`try_truncate`]: FixedWidthUInt::try_truncate
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FixedWidthUInt<const BITS: u32>(u64);

impl<const BITS: u32> FixedWidthUInt<BITS> {
    const MASK: u64 = {
        assert!(BITS > 0 && BITS <= 64, "width must be between 1 and 64 bits");
        if BITS == 64 {
            u64::MAX
        } else {
            (1 << BITS) - 1
        }
    };

    pub const fn new(value: u64) -> Self {
        Self(value & Self::MASK)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    pub const fn width(self) -> u32 {
        BITS
    }

    pub fn rotate_left(self, n: u32) -> Self {
        Word::rotate_left(self, n)
    }

    pub fn try_zero_extend<const WIDE: u32>(self) -> Result<FixedWidthUInt<WIDE>, Error> {
        if WIDE < BITS {
            return Err(Error::WidthMismatch {
                expected: BITS,
                found: WIDE,
            });
        }
        Ok(FixedWidthUInt::new(self.0))
    }

    /// Keeps the low `NARROW` bits.
    pub fn try_truncate<const NARROW: u32>(self) -> Result<FixedWidthUInt<NARROW>, Error> {
        if NARROW > BITS {
            return Err(Error::WidthMismatch {
                expected: BITS,
                found: NARROW,
            });
        }
        Ok(FixedWidthUInt::new(self.0))
    }

    /// Reassembles a word from exactly `BITS / 8` big-endian bytes.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let found = (bytes.len() as u32).saturating_mul(8);
        if found != BITS {
            return Err(Error::WidthMismatch {
                expected: BITS,
                found,
            });
        }
        let value = bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
        Ok(Self::new(value))
    }
}

impl<const BITS: u32> Add for FixedWidthUInt<BITS> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.0.wrapping_add(rhs.0))
    }
}

impl<const BITS: u32> BitAnd for FixedWidthUInt<BITS> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl<const BITS: u32> BitOr for FixedWidthUInt<BITS> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl<const BITS: u32> BitXor for FixedWidthUInt<BITS> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl<const BITS: u32> Not for FixedWidthUInt<BITS> {
    type Output = Self;

    fn not(self) -> Self {
        Self::new(!self.0)
    }
}

impl<const BITS: u32> Shl<u32> for FixedWidthUInt<BITS> {
    type Output = Self;

    fn shl(self, n: u32) -> Self {
        if n >= BITS {
            return Self(0);
        }
        Self::new(self.0 << n)
    }
}

impl<const BITS: u32> Shr<u32> for FixedWidthUInt<BITS> {
    type Output = Self;

    fn shr(self, n: u32) -> Self {
        if n >= BITS {
            return Self(0);
        }
        Self(self.0 >> n)
    }
}

impl<const WIDTH: u32> Word for FixedWidthUInt<WIDTH> {
    const BITS: u32 = WIDTH;

    fn from_u64(value: u64) -> Self {
        Self::new(value)
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
        self + rhs
    }

    fn shift_left(self, n: u32) -> Self {
        self << n
    }

    fn shift_right(self, n: u32) -> Self {
        self >> n
    }
}

impl ByteWord for U8 {
    type Wide = U32;

    fn zero_extend(self) -> U32 {
        U32::new(self.0)
    }

    fn truncate(wide: U32) -> Self {
        Self::new(wide.0)
    }
}

impl<const BITS: u32> fmt::Debug for FixedWidthUInt<BITS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U{}({:#x})", BITS, self.0)
    }
}

impl<const BITS: u32> fmt::Display for FixedWidthUInt<BITS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const BITS: u32> fmt::LowerHex for FixedWidthUInt<BITS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

pub fn from_bytes(data: &[u8]) -> Vec<U8> {
    data.iter().map(|&b| U8::new(u64::from(b))).collect()
}

pub fn to_bytes(data: &[U8]) -> Vec<u8> {
    data.iter().map(|b| b.0 as u8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(0xFFFF_FFFF, 1, 0)]
    #[case(0x8000_0000, 0x8000_0000, 0)]
    #[case(0x1234_5678, 0x1111_1111, 0x2345_6789)]
    fn add_wraps_around_32_bits(#[case] a: u64, #[case] b: u64, #[case] expected: u64) {
        assert_eq!(U32::new(a) + U32::new(b), U32::new(expected));
    }

    #[test]
    fn new_masks_to_width() {
        assert_eq!(U8::new(0x1FF).value(), 0xFF);
        assert_eq!(U32::new(0xDEAD_BEEF_0000_0001).value(), 1);
        assert_eq!(U64::new(u64::MAX).value(), u64::MAX);
    }

    #[test]
    fn not_stays_within_width() {
        assert_eq!(!U8::new(0x0F), U8::new(0xF0));
        assert_eq!(!U32::new(0), U32::new(0xFFFF_FFFF));
        assert_eq!(!U64::new(0), U64::new(u64::MAX));
    }

    #[test]
    fn bitwise_ops_match_native_integers() {
        let (a, b) = (0xA5A5_0F0Fu32, 0x5A5A_FF00u32);
        let (fa, fb) = (U32::new(a as u64), U32::new(b as u64));
        assert_eq!((fa & fb).value(), (a & b) as u64);
        assert_eq!((fa | fb).value(), (a | b) as u64);
        assert_eq!((fa ^ fb).value(), (a ^ b) as u64);
    }

    #[rstest]
    #[case(0x81, 1, 0x02, 0x40)]
    #[case(0x81, 7, 0x80, 0x01)]
    #[case(0x81, 8, 0x00, 0x00)]
    #[case(0x81, 40, 0x00, 0x00)]
    fn shifts_drop_bits_outside_width(
        #[case] value: u64,
        #[case] n: u32,
        #[case] left: u64,
        #[case] right: u64,
    ) {
        assert_eq!(U8::new(value) << n, U8::new(left));
        assert_eq!(U8::new(value) >> n, U8::new(right));
    }

    #[test]
    fn rotate_left_wraps_high_bits_around() {
        assert_eq!(U8::new(0x81).rotate_left(1), U8::new(0x03));
        assert_eq!(U32::new(0x8000_0000).rotate_left(1), U32::new(1));
        assert_eq!(
            U64::new(0x8000_0000_0000_0001).rotate_left(4),
            U64::new(0x0000_0000_0000_0018)
        );
    }

    #[test]
    fn zero_extend_widens_without_changing_value() {
        let wide: U32 = U8::new(0xAB).try_zero_extend().unwrap();
        assert_eq!(wide, U32::new(0xAB));
        assert_eq!(wide.width(), 32);
    }

    #[test]
    fn zero_extend_to_narrower_width_is_rejected() {
        let result = U32::new(1).try_zero_extend::<8>();
        assert_eq!(
            result,
            Err(Error::WidthMismatch {
                expected: 32,
                found: 8
            })
        );
    }

    #[test]
    fn truncate_keeps_low_bits() {
        let narrow: U8 = U32::new(0x1234_56CD).try_truncate().unwrap();
        assert_eq!(narrow, U8::new(0xCD));
        assert!(U8::new(1).try_truncate::<32>().is_err());
    }

    #[test]
    fn from_be_bytes_requires_exact_width() {
        assert_eq!(
            U32::from_be_bytes(&[0x61, 0x62, 0x63, 0x80]),
            Ok(U32::new(0x6162_6380))
        );
        assert_eq!(
            U64::from_be_bytes(&[0, 0, 0, 0, 0, 0, 0, 0x18]),
            Ok(U64::new(0x18))
        );
        assert_eq!(
            U32::from_be_bytes(&[0x61, 0x62, 0x63]),
            Err(Error::WidthMismatch {
                expected: 32,
                found: 24
            })
        );
    }

    #[test]
    fn bytes_round_trip_through_words() {
        let data = b"Hello World";
        let words = from_bytes(data);
        assert_eq!(words.len(), data.len());
        assert_eq!(words[0], U8::new(b'H' as u64));
        assert_eq!(to_bytes(&words), data.to_vec());
    }

    #[test]
    fn debug_shows_width_and_hex_value() {
        assert_eq!(format!("{:?}", U32::new(0xBEEF)), "U32(0xbeef)");
        assert_eq!(format!("{:x}", U8::new(0xAB)), "ab");
    }
}
