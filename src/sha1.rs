use tracing::{debug, trace};

use crate::compress::{compress, INITIALISATION_CONSTANTS};
use crate::{ByteWord, Error, Hasher, Word};

pub const BLOCK_SIZE: usize = 64;
pub const SHA1_LEN: usize = 20;

const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;
const BLOCK_BITS: u64 = (BLOCK_SIZE as u64) * 8;
const PAD_BYTE: u64 = 0x80;

/// SHA-1 over native bytes.
pub type Sha1 = Sha1Core<u8>;

/// Incremental SHA-1 hasher, generic over the byte word it consumes.
///
/// Input is buffered into 64-byte blocks and compressed as blocks fill up.
/// Once [`finalize`](Self::finalize) has run the hasher only hands out its
/// digest; further input is rejected with [`Error::AlreadyFinalized`].
#[derive(Debug, Clone)]
pub struct Sha1Core<B: ByteWord> {
    buffer: [B; BLOCK_SIZE],
    buffer_len: usize,
    digest: [B::Wide; 5],
    message_bit_len: u64,
    computed: bool,
}

impl<B: ByteWord> Sha1Core<B> {
    pub fn new() -> Self {
        Self::with_state(INITIALISATION_CONSTANTS.map(|w| B::Wide::from_u64(w as u64)), 0)
    }

    /// Resumes hashing from a chaining state reached after
    /// `message_bit_len` bits of whole blocks.
    pub fn new_with_initialisation_constants(
        initialisation_constants: [B::Wide; 5],
        message_bit_len: u64,
    ) -> Result<Self, Error> {
        if message_bit_len % BLOCK_BITS != 0 {
            return Err(Error::MisalignedLength {
                bits: message_bit_len,
            });
        }
        Ok(Self::with_state(initialisation_constants, message_bit_len))
    }

    fn with_state(digest: [B::Wide; 5], message_bit_len: u64) -> Self {
        Self {
            buffer: std::array::from_fn(|_| B::from_u64(0)),
            buffer_len: 0,
            digest,
            message_bit_len,
            computed: false,
        }
    }

    /// Feeds `message` into the hasher.
    ///
    /// An empty message is accepted and leaves the hasher untouched.
    pub fn update(&mut self, message: &[B]) -> Result<(), Error> {
        if self.computed {
            debug!(len = message.len(), "rejecting input to a finalized SHA-1 hasher");
            return Err(Error::AlreadyFinalized);
        }
        self.message_bit_len = (message.len() as u64)
            .checked_mul(8)
            .and_then(|bits| self.message_bit_len.checked_add(bits))
            .ok_or(Error::MessageTooLong)?;

        let mut offset = 0;
        if self.buffer_len > 0 {
            let to_copy = (BLOCK_SIZE - self.buffer_len).min(message.len());
            self.buffer[self.buffer_len..self.buffer_len + to_copy]
                .clone_from_slice(&message[..to_copy]);
            self.buffer_len += to_copy;
            offset += to_copy;

            if self.buffer_len == BLOCK_SIZE {
                self.process_block();
            }
        }

        while offset + BLOCK_SIZE <= message.len() {
            self.buffer
                .clone_from_slice(&message[offset..offset + BLOCK_SIZE]);
            self.process_block();
            offset += BLOCK_SIZE;
        }

        if offset < message.len() {
            self.buffer[..message.len() - offset].clone_from_slice(&message[offset..]);
            self.buffer_len = message.len() - offset;
        }
        Ok(())
    }

    /// Pads the message and compresses the final block(s). Calling this more
    /// than once has no further effect.
    pub fn finalize(&mut self) {
        if self.computed {
            return;
        }
        self.pad_message();
        self.message_bit_len = 0;
        self.computed = true;
    }

    /// Returns the digest, finalizing first if needed.
    pub fn result(&mut self) -> [B; SHA1_LEN] {
        self.finalize();
        std::array::from_fn(|i| {
            let shift = 8 * (3 - (i as u32 & 0x03));
            B::truncate(self.digest[i >> 2].clone().shift_right(shift))
        })
    }

    pub fn is_finalized(&self) -> bool {
        self.computed
    }

    /// The current chaining words.
    pub fn state(&self) -> &[B::Wide; 5] {
        &self.digest
    }

    fn pad_message(&mut self) {
        let bit_len = self.message_bit_len;

        self.buffer[self.buffer_len] = B::from_u64(PAD_BYTE);
        self.buffer_len += 1;

        // No room left for the length field: finish this block and pad a
        // fresh one.
        let extra_block = self.buffer_len > LENGTH_OFFSET;
        if extra_block {
            self.zero_fill(BLOCK_SIZE);
            self.process_block();
        }
        self.zero_fill(LENGTH_OFFSET);

        for (i, byte) in self.buffer[LENGTH_OFFSET..].iter_mut().enumerate() {
            *byte = B::from_u64(bit_len >> (8 * (7 - i)));
        }
        self.process_block();

        trace!(bit_len, extra_block, "finalized SHA-1 digest");
    }

    fn zero_fill(&mut self, end: usize) {
        for byte in &mut self.buffer[self.buffer_len..end] {
            *byte = B::from_u64(0);
        }
        self.buffer_len = end;
    }

    fn process_block(&mut self) {
        compress(&mut self.digest, &self.buffer);
        self.buffer_len = 0;
    }
}

impl<B: ByteWord> Default for Sha1Core<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher<SHA1_LEN> for Sha1 {
    fn update(&mut self, data: &[u8]) -> Result<(), Error> {
        Sha1Core::update(self, data)
    }

    fn digest(mut self) -> [u8; SHA1_LEN] {
        self.result()
    }
}
