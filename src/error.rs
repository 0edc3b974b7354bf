use thiserror::Error;

/// Errors reported by the word algebra and the SHA-1 hasher.
///
/// All of these are caller precondition violations; none is transient.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Input was supplied after the digest had been finalized.
    #[error("cannot input data after the digest has been finalized")]
    AlreadyFinalized,

    /// Two words of incompatible widths were combined or converted.
    #[error("width mismatch: expected {expected} bits, found {found}")]
    WidthMismatch {
        /// Width required by the operation
        expected: u32,
        /// Width actually supplied
        found: u32,
    },

    /// The message bit length no longer fits in the 64-bit length field.
    #[error("message too long: more than 2^64 - 1 bits")]
    MessageTooLong,

    /// A resumed hasher must start on a block boundary.
    #[error("resumed message length of {bits} bits is not a multiple of 512")]
    MisalignedLength {
        /// Offending bit length
        bits: u64,
    },
}
