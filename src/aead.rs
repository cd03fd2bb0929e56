//! Ascon-AEAD128 authenticated encryption (NIST SP 800-232).
//!
//! Single-pass sponge pipeline: initialize, absorb associated data,
//! process the message at a 16-byte rate, finalize to a 128-bit tag.

use crate::errors::{Error, Result};
use crate::sponge::{STATE_BYTES, State, pad, word_at};

pub const KEY_LEN: usize = 16;
pub const NONCE_LEN: usize = 16;
pub const TAG_LEN: usize = 16;

const RATE: usize = 16;
const ROUNDS_A: u32 = 12;
const ROUNDS_B: u32 = 8;
const VERSION: u8 = 1;
const TAG_BITS: u16 = 128;

/// Encrypts `plaintext`, authenticating `associated_data` as well, and
/// returns ciphertext ‖ 16-byte tag.
///
/// The nonce must never repeat for the same key; that is the caller's
/// responsibility.
pub fn encrypt(
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    check_lengths(key, nonce)?;
    let mut s = initialize(key, nonce)?;
    absorb_associated_data(&mut s, associated_data)?;
    let mut out = process_plaintext(&mut s, plaintext)?;
    out.extend_from_slice(&finalize(&mut s, key)?);
    Ok(out)
}

/// Verifies the trailing 16-byte tag of `ciphertext_and_tag` and returns
/// the plaintext. On tag mismatch nothing of the decryption escapes.
pub fn decrypt(
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    ciphertext_and_tag: &[u8],
) -> Result<Vec<u8>> {
    check_lengths(key, nonce)?;
    if ciphertext_and_tag.len() < TAG_LEN {
        return Err(Error::InvalidParameter(
            "ciphertext shorter than the 16-byte tag",
        ));
    }
    let (ciphertext, tag) = ciphertext_and_tag.split_at(ciphertext_and_tag.len() - TAG_LEN);
    let mut s = initialize(key, nonce)?;
    absorb_associated_data(&mut s, associated_data)?;
    let plaintext = process_ciphertext(&mut s, ciphertext)?;
    let expected = finalize(&mut s, key)?;
    if !tag_eq(&expected, tag) {
        return Err(Error::AuthenticationFailure);
    }
    Ok(plaintext)
}

fn check_lengths(key: &[u8], nonce: &[u8]) -> Result<()> {
    if key.len() != KEY_LEN {
        return Err(Error::InvalidParameter("key must be 16 bytes"));
    }
    if nonce.len() != NONCE_LEN {
        return Err(Error::InvalidParameter("nonce must be 16 bytes"));
    }
    Ok(())
}

/// IV ‖ key ‖ nonce loaded as the initial state, a full permutation, then
/// key whitening. The zero-padded 40-byte key image covers words 3 and 4.
fn initialize(key: &[u8], nonce: &[u8]) -> Result<State> {
    let mut buf = [0u8; STATE_BYTES];
    buf[0] = VERSION;
    buf[2] = (ROUNDS_B as u8) << 4 | ROUNDS_A as u8;
    buf[3..5].copy_from_slice(&TAG_BITS.to_le_bytes());
    buf[5] = RATE as u8;
    buf[8..24].copy_from_slice(key);
    buf[24..40].copy_from_slice(nonce);

    let mut s = State::load(&buf);
    s.permute(ROUNDS_A)?;
    s.0[3] ^= word_at(key, 0);
    s.0[4] ^= word_at(key, 8);
    Ok(s)
}

fn absorb_associated_data(s: &mut State, associated_data: &[u8]) -> Result<()> {
    if !associated_data.is_empty() {
        for block in pad(associated_data, RATE).chunks_exact(RATE) {
            s.0[0] ^= word_at(block, 0);
            s.0[1] ^= word_at(block, 8);
            s.permute(ROUNDS_B)?;
        }
    }
    // end-of-AD domain separator, applied even when there is no AD
    s.0[4] ^= 1 << 63;
    Ok(())
}

fn process_plaintext(s: &mut State, plaintext: &[u8]) -> Result<Vec<u8>> {
    let last = plaintext.len() % RATE;
    let m = pad(plaintext, RATE);
    let blocks = m.len() / RATE;
    let mut ciphertext = Vec::with_capacity(plaintext.len());
    for (i, block) in m.chunks_exact(RATE).enumerate() {
        s.0[0] ^= word_at(block, 0);
        s.0[1] ^= word_at(block, 8);
        if i + 1 < blocks {
            ciphertext.extend_from_slice(&s.0[0].to_le_bytes());
            ciphertext.extend_from_slice(&s.0[1].to_le_bytes());
            s.permute(ROUNDS_B)?;
        } else {
            // No permutation after the final block; emit only the bytes
            // covered by actual plaintext.
            ciphertext.extend_from_slice(&s.0[0].to_le_bytes()[..last.min(8)]);
            ciphertext.extend_from_slice(&s.0[1].to_le_bytes()[..last.saturating_sub(8)]);
        }
    }
    Ok(ciphertext)
}

fn process_ciphertext(s: &mut State, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let last = ciphertext.len() % RATE;
    let mut m = ciphertext.to_vec();
    m.resize(ciphertext.len() + RATE - last, 0);
    let blocks = m.len() / RATE;
    let mut plaintext = Vec::with_capacity(ciphertext.len());
    for (i, block) in m.chunks_exact(RATE).enumerate() {
        if i + 1 < blocks {
            let c0 = word_at(block, 0);
            plaintext.extend_from_slice(&(s.0[0] ^ c0).to_le_bytes());
            s.0[0] = c0;
            let c1 = word_at(block, 8);
            plaintext.extend_from_slice(&(s.0[1] ^ c1).to_le_bytes());
            s.0[1] = c1;
            s.permute(ROUNDS_B)?;
        } else {
            // Only `last` ciphertext bytes exist for the final block, but
            // finalization needs the state of the full padded block: keep
            // the unconsumed high part of the rate words and reinsert the
            // 0x01 padding bit at the cut.
            let mut padding = [0u8; RATE];
            padding[last] = 0x01;
            let mut mask = [0u8; RATE];
            for b in mask[last..].iter_mut() {
                *b = 0xff;
            }
            let c0 = word_at(block, 0);
            let p0 = (s.0[0] ^ c0).to_le_bytes();
            s.0[0] = (s.0[0] & word_at(&mask, 0)) ^ c0 ^ word_at(&padding, 0);
            let c1 = word_at(block, 8);
            let p1 = (s.0[1] ^ c1).to_le_bytes();
            s.0[1] = (s.0[1] & word_at(&mask, 8)) ^ c1 ^ word_at(&padding, 8);
            plaintext.extend_from_slice(&p0[..last.min(8)]);
            plaintext.extend_from_slice(&p1[..last.saturating_sub(8)]);
        }
    }
    Ok(plaintext)
}

fn finalize(s: &mut State, key: &[u8]) -> Result<[u8; TAG_LEN]> {
    let idx = RATE / 8;
    s.0[idx] ^= word_at(key, 0);
    s.0[idx + 1] ^= word_at(key, 8);
    s.permute(ROUNDS_A)?;
    s.0[3] ^= word_at(key, 0);
    s.0[4] ^= word_at(key, 8);

    let mut tag = [0u8; TAG_LEN];
    tag[..8].copy_from_slice(&s.0[3].to_le_bytes());
    tag[8..].copy_from_slice(&s.0[4].to_le_bytes());
    Ok(tag)
}

// Full 16-byte comparison without early exit.
fn tag_eq(expected: &[u8; TAG_LEN], supplied: &[u8]) -> bool {
    let mut diff = 0u8;
    for (a, b) in expected.iter().zip(supplied) {
        diff |= a ^ b;
    }
    diff == 0
}
