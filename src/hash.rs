//! Ascon-Hash256, Ascon-XOF128 and Ascon-CXOF128 (NIST SP 800-232).
//!
//! All three share an 8-byte rate and the full 12-round permutation for
//! every absorb and squeeze step; they differ only in the IV and whether
//! a customization string is absorbed ahead of the message.

use crate::errors::{Error, Result};
use crate::sponge::{STATE_BYTES, State, pad, word_at};

pub const HASH256_LEN: usize = 32;
pub const MAX_CUSTOMIZATION_LEN: usize = 256;

const RATE: usize = 8;
const ROUNDS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashVariant {
    /// Fixed 32-byte digest.
    Hash256,
    /// Arbitrary output length.
    Xof128,
    /// Arbitrary output length with a customization string.
    Cxof128,
}

impl HashVariant {
    const fn version(self) -> u8 {
        match self {
            HashVariant::Hash256 => 2,
            HashVariant::Xof128 => 3,
            HashVariant::Cxof128 => 4,
        }
    }

    // IV tag-length field in bits; zero for the extendable-output variants.
    const fn tag_bits(self) -> u16 {
        match self {
            HashVariant::Hash256 => 256,
            HashVariant::Xof128 | HashVariant::Cxof128 => 0,
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "Ascon-Hash256" => Ok(HashVariant::Hash256),
            "Ascon-XOF128" => Ok(HashVariant::Xof128),
            "Ascon-CXOF128" => Ok(HashVariant::Cxof128),
            _ => Err(Error::UnsupportedVariant(name.to_string())),
        }
    }
}

/// Hashes `message` to `hash_length` bytes. `customization` is absorbed
/// only by [`HashVariant::Cxof128`] and must be at most 256 bytes there.
pub fn hash(
    message: &[u8],
    variant: HashVariant,
    hash_length: usize,
    customization: &[u8],
) -> Result<Vec<u8>> {
    if variant == HashVariant::Hash256 && hash_length != HASH256_LEN {
        return Err(Error::InvalidParameter("Ascon-Hash256 output must be 32 bytes"));
    }
    if variant == HashVariant::Cxof128 && customization.len() > MAX_CUSTOMIZATION_LEN {
        return Err(Error::InvalidParameter(
            "customization string longer than 256 bytes",
        ));
    }

    let mut buf = [0u8; STATE_BYTES];
    buf[0] = variant.version();
    buf[2] = (ROUNDS as u8) << 4 | ROUNDS as u8;
    buf[3..5].copy_from_slice(&variant.tag_bits().to_le_bytes());
    buf[5] = RATE as u8;
    let mut s = State::load(&buf);
    s.permute(ROUNDS)?;

    if variant == HashVariant::Cxof128 {
        // bit length of the customization string as a leading rate word
        let mut z = Vec::with_capacity(8 + customization.len());
        z.extend_from_slice(&((customization.len() as u64) * 8).to_le_bytes());
        z.extend_from_slice(customization);
        absorb(&mut s, &z)?;
    }
    absorb(&mut s, message)?;

    let mut out = Vec::with_capacity(hash_length + RATE);
    while out.len() < hash_length {
        out.extend_from_slice(&s.0[0].to_le_bytes());
        s.permute(ROUNDS)?;
    }
    out.truncate(hash_length);
    Ok(out)
}

fn absorb(s: &mut State, data: &[u8]) -> Result<()> {
    for block in pad(data, RATE).chunks_exact(RATE) {
        s.0[0] ^= word_at(block, 0);
        s.permute(ROUNDS)?;
    }
    Ok(())
}

pub fn hash256(message: &[u8]) -> Result<[u8; HASH256_LEN]> {
    let out = hash(message, HashVariant::Hash256, HASH256_LEN, &[])?;
    let mut digest = [0u8; HASH256_LEN];
    digest.copy_from_slice(&out);
    Ok(digest)
}

pub fn xof128(message: &[u8], hash_length: usize) -> Result<Vec<u8>> {
    hash(message, HashVariant::Xof128, hash_length, &[])
}

pub fn cxof128(message: &[u8], hash_length: usize, customization: &[u8]) -> Result<Vec<u8>> {
    hash(message, HashVariant::Cxof128, hash_length, customization)
}
