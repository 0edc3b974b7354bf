use rayon::prelude::*;
use tracing::debug;

use crate::{Error, Hasher};

/// Hashes independent messages on the rayon thread pool.
///
/// Digests come back in the same order as `messages`. Each message is hashed
/// by its own hasher, so nothing is shared between threads.
pub fn digest_messages<H, M, const N: usize>(messages: &[M]) -> Result<Vec<[u8; N]>, Error>
where
    H: Hasher<N>,
    M: AsRef<[u8]> + Sync,
{
    debug!(count = messages.len(), "hashing messages in parallel");
    messages
        .par_iter()
        .map(|message| H::digest_message(message.as_ref()))
        .collect()
}
