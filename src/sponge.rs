//! The 320-bit sponge state and the byte/word framing shared by all faces.
//!
//! Every word is loaded and stored little-endian; word i of the state maps
//! to bytes 8i..8i+8 of a 40-byte image.

use crate::errors::Result;
use crate::permutation::permute;

pub(crate) const STATE_BYTES: usize = 40;

/// Five 64-bit words, owned by a single operation call and never shared.
#[derive(Debug, Clone)]
pub(crate) struct State(pub(crate) [u64; 5]);

impl State {
    /// Loads the state from its 40-byte image.
    pub(crate) fn load(bytes: &[u8; STATE_BYTES]) -> Self {
        let mut w = [0u64; 5];
        for (i, wi) in w.iter_mut().enumerate() {
            *wi = word_at(bytes, 8 * i);
        }
        State(w)
    }

    pub(crate) fn permute(&mut self, rounds: u32) -> Result<()> {
        permute(&mut self.0, rounds)
    }
}

/// Reads the little-endian word at `off`. The caller guarantees 8 bytes
/// are available.
#[inline]
pub(crate) fn word_at(bytes: &[u8], off: usize) -> u64 {
    let mut w = [0u8; 8];
    w.copy_from_slice(&bytes[off..off + 8]);
    u64::from_le_bytes(w)
}

/// Appends the 0x01 domain-separation byte and zero bytes until the length
/// is a multiple of `rate`. Always grows by at least one byte.
pub(crate) fn pad(data: &[u8], rate: usize) -> Vec<u8> {
    let padded_len = data.len() + rate - data.len() % rate;
    let mut m = Vec::with_capacity(padded_len);
    m.extend_from_slice(data);
    m.push(0x01);
    m.resize(padded_len, 0);
    m
}
