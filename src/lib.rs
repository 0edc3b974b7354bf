//! SHA-1 (FIPS 180-1 / RFC 3174) written once against a generic fixed-width
//! word algebra.
//!
//! [`Sha1`] hashes native bytes. [`Sha1Core`] runs the identical compression
//! and padding logic over any [`ByteWord`], such as [`U8`], or a symbolic
//! bit-vector type supplied by a caller.

#[cfg(feature = "parallel")]
mod batch;
mod compress;
mod error;
mod fixed_width;
mod hash;
mod schedule;
mod sha1;
mod word;

#[cfg(feature = "parallel")]
pub use batch::digest_messages;
pub use compress::{
    ch, compress, compress_schedule, maj, parity, INITIALISATION_CONSTANTS, ROUND_CONSTANTS,
};
pub use error::Error;
pub use fixed_width::{from_bytes, to_bytes, FixedWidthUInt, U32, U64, U8};
pub use hash::Hasher;
pub use schedule::{message_schedule, SCHEDULE_LEN};
pub use sha1::{Sha1, Sha1Core, BLOCK_SIZE, SHA1_LEN};
pub use word::{ByteWord, Word};
