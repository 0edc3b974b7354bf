use crate::schedule::{message_schedule, SCHEDULE_LEN};
use crate::{ByteWord, Word, BLOCK_SIZE};

/// Chaining value every SHA-1 computation starts from.
pub const INITIALISATION_CONSTANTS: [u32; 5] =
    [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// One additive constant per group of twenty steps.
pub const ROUND_CONSTANTS: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

pub fn ch<W: Word>(x: W, y: W, z: W) -> W {
    x.clone().bit_and(y).bit_xor(x.bit_not().bit_and(z))
}

pub fn parity<W: Word>(x: W, y: W, z: W) -> W {
    x.bit_xor(y).bit_xor(z)
}

pub fn maj<W: Word>(x: W, y: W, z: W) -> W {
    let xy = x.clone().bit_and(y.clone());
    let xz = x.bit_and(z.clone());
    xy.bit_xor(xz).bit_xor(y.bit_and(z))
}

/// Runs the SHA-1 compression function over one block, updating `state`.
pub fn compress<B: ByteWord>(state: &mut [B::Wide; 5], block: &[B; BLOCK_SIZE]) {
    let schedule = message_schedule(block);
    compress_schedule(state, &schedule);
}

/// The eighty compression steps over an already expanded message schedule.
///
/// The working variables are added back into `state` modulo 2^32 once all
/// steps have run.
pub fn compress_schedule<W: Word>(state: &mut [W; 5], schedule: &[W; SCHEDULE_LEN]) {
    let k = ROUND_CONSTANTS.map(|c| W::from_u64(c as u64));

    let [mut a, mut b, mut c, mut d, mut e] = state.clone();
    for (i, word) in schedule.iter().enumerate() {
        let (f, k) = match i {
            0..=19 => (ch(b.clone(), c.clone(), d.clone()), &k[0]),
            20..=39 => (parity(b.clone(), c.clone(), d.clone()), &k[1]),
            40..=59 => (maj(b.clone(), c.clone(), d.clone()), &k[2]),
            _ => (parity(b.clone(), c.clone(), d.clone()), &k[3]),
        };

        let temp = a
            .clone()
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k.clone())
            .wrapping_add(word.clone());
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    for (chaining, working) in state.iter_mut().zip([a, b, c, d, e]) {
        *chaining = chaining.clone().wrapping_add(working);
    }
}
