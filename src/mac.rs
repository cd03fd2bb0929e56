//! Ascon-Mac, Ascon-Prf and Ascon-PrfShort keyed sponges.
//!
//! Mac and Prf absorb 32-byte blocks (two rate words per permutation) and
//! squeeze words 0 and 1 alternately; PrfShort is a single-permutation
//! form for messages of at most 16 bytes.

use crate::errors::{Error, Result};
use crate::sponge::{STATE_BYTES, State, pad, word_at};

pub const KEY_LEN: usize = 16;
pub const MAX_TAG_LEN: usize = 16;
pub const MAX_SHORT_MESSAGE_LEN: usize = 16;

const RATE: usize = 16;
const BLOCK: usize = 32;
const ROUNDS_A: u32 = 12;
const ROUNDS_B: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacVariant {
    /// 128-bit tag, arbitrarily long message.
    Mac,
    /// Arbitrary output length, arbitrarily long message.
    Prf,
    /// Single-permutation short form, message and tag at most 16 bytes.
    PrfShort,
}

impl MacVariant {
    // IV tag-spec word distinguishing fixed from arbitrary output length.
    const fn tag_spec(self) -> u32 {
        match self {
            MacVariant::Mac => 128,
            MacVariant::Prf | MacVariant::PrfShort => 0,
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "Ascon-Mac" => Ok(MacVariant::Mac),
            "Ascon-Prf" => Ok(MacVariant::Prf),
            "Ascon-PrfShort" => Ok(MacVariant::PrfShort),
            _ => Err(Error::UnsupportedVariant(name.to_string())),
        }
    }
}

/// Computes a `tag_length`-byte authentication tag over `message`.
pub fn mac(
    key: &[u8],
    message: &[u8],
    variant: MacVariant,
    tag_length: usize,
) -> Result<Vec<u8>> {
    if key.len() != KEY_LEN {
        return Err(Error::InvalidParameter("key must be 16 bytes"));
    }
    match variant {
        MacVariant::Mac => {
            if tag_length > MAX_TAG_LEN {
                return Err(Error::InvalidParameter("Ascon-Mac tag must be at most 16 bytes"));
            }
        }
        MacVariant::Prf => {}
        MacVariant::PrfShort => {
            if tag_length > MAX_TAG_LEN {
                return Err(Error::InvalidParameter(
                    "Ascon-PrfShort tag must be at most 16 bytes",
                ));
            }
            if message.len() > MAX_SHORT_MESSAGE_LEN {
                return Err(Error::InvalidParameter(
                    "Ascon-PrfShort message must be at most 16 bytes",
                ));
            }
        }
    }
    match variant {
        MacVariant::PrfShort => prf_short(key, message, tag_length),
        _ => keyed_sponge(key, message, variant.tag_spec(), tag_length),
    }
}

/// The whole message fits next to the key in the initial state; one full
/// permutation and a key feed-forward produce the tag.
fn prf_short(key: &[u8], message: &[u8], tag_length: usize) -> Result<Vec<u8>> {
    let mut buf = [0u8; STATE_BYTES];
    buf[0] = (KEY_LEN * 8) as u8;
    buf[1] = (message.len() * 8) as u8;
    buf[2] = (ROUNDS_A + 64) as u8;
    buf[3] = (tag_length * 8) as u8;
    buf[8..24].copy_from_slice(key);
    buf[24..24 + message.len()].copy_from_slice(message);

    let mut s = State::load(&buf);
    s.permute(ROUNDS_A)?;
    s.0[3] ^= word_at(key, 0);
    s.0[4] ^= word_at(key, 8);

    let mut tag = Vec::with_capacity(16);
    tag.extend_from_slice(&s.0[3].to_le_bytes());
    tag.extend_from_slice(&s.0[4].to_le_bytes());
    tag.truncate(tag_length);
    Ok(tag)
}

fn keyed_sponge(
    key: &[u8],
    message: &[u8],
    tag_spec: u32,
    tag_length: usize,
) -> Result<Vec<u8>> {
    let mut buf = [0u8; STATE_BYTES];
    buf[0] = (KEY_LEN * 8) as u8;
    buf[1] = (RATE * 8) as u8;
    buf[2] = (ROUNDS_A + 128) as u8;
    buf[3] = (ROUNDS_A - ROUNDS_B) as u8;
    buf[4..8].copy_from_slice(&tag_spec.to_le_bytes());
    buf[8..24].copy_from_slice(key);

    let mut s = State::load(&buf);
    s.permute(ROUNDS_A)?;

    let m = pad(message, BLOCK);
    let blocks = m.len() / BLOCK;
    for (i, block) in m.chunks_exact(BLOCK).enumerate() {
        for j in 0..4 {
            s.0[j] ^= word_at(block, 8 * j);
        }
        if i + 1 < blocks {
            s.permute(ROUNDS_B)?;
        }
    }
    // end-of-message marker ahead of the final permutation
    s.0[4] ^= 1;
    s.permute(ROUNDS_A)?;

    let mut tag = Vec::with_capacity(tag_length + RATE);
    while tag.len() < tag_length {
        tag.extend_from_slice(&s.0[0].to_le_bytes());
        tag.extend_from_slice(&s.0[1].to_le_bytes());
        s.permute(ROUNDS_B)?;
    }
    tag.truncate(tag_length);
    Ok(tag)
}

pub fn mac128(key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    mac(key, message, MacVariant::Mac, MAX_TAG_LEN)
}
