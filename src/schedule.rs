use crate::{ByteWord, Word, BLOCK_SIZE};

pub const SCHEDULE_LEN: usize = 80;

/// Expands one 64-byte block into the eighty words fed to the compression
/// round.
///
/// The first sixteen words are the block read as big-endian 32-bit words,
/// the rest are `rotl(w[t-3] ^ w[t-8] ^ w[t-14] ^ w[t-16], 1)`.
pub fn message_schedule<B: ByteWord>(block: &[B; BLOCK_SIZE]) -> [B::Wide; SCHEDULE_LEN] {
    let mut w: [B::Wide; SCHEDULE_LEN] = std::array::from_fn(|_| B::Wide::from_u64(0));

    for (i, chunk) in block.chunks_exact(4).enumerate() {
        w[i] = chunk
            .iter()
            .zip([24, 16, 8, 0])
            .map(|(byte, shift)| byte.clone().zero_extend().shift_left(shift))
            .fold(B::Wide::from_u64(0), <B::Wide as Word>::bit_or);
    }
    for t in 16..SCHEDULE_LEN {
        w[t] = w[t - 3]
            .clone()
            .bit_xor(w[t - 8].clone())
            .bit_xor(w[t - 14].clone())
            .bit_xor(w[t - 16].clone())
            .rotate_left(1);
    }
    w
}
