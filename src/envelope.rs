//! Passphrase-based convenience layer over the AEAD core.
//!
//! A 16-byte key is derived from the passphrase with Ascon-XOF128 and a
//! random nonce is drawn per seal; the sealed string is
//! hex(ciphertext ‖ tag) ‖ hex(nonce). This is an adapter around
//! [`crate::aead`], not part of the sponge core.

use rand::{CryptoRng, Rng};

use crate::aead;
use crate::errors::{Error, Result};
use crate::hash::{HashVariant, hash};
use crate::util::{hex_decode, hex_encode};

pub fn seal(
    rng: &mut dyn CryptoRng,
    passphrase: &[u8],
    associated_data: &[u8],
    plaintext: &[u8],
) -> Result<String> {
    let key = derive_key(passphrase)?;
    let nonce: [u8; aead::NONCE_LEN] = rng.random();
    let sealed = aead::encrypt(&key, &nonce, associated_data, plaintext)?;
    let mut out = hex_encode(&sealed);
    out.push_str(&hex_encode(&nonce));
    Ok(out)
}

pub fn open(passphrase: &[u8], associated_data: &[u8], sealed_hex: &str) -> Result<Vec<u8>> {
    let data = hex_decode(sealed_hex)?;
    if data.len() < aead::NONCE_LEN + aead::TAG_LEN {
        return Err(Error::InvalidParameter("sealed input too short"));
    }
    let (body, nonce) = data.split_at(data.len() - aead::NONCE_LEN);
    let key = derive_key(passphrase)?;
    aead::decrypt(&key, nonce, associated_data, body)
}

fn derive_key(passphrase: &[u8]) -> Result<Vec<u8>> {
    hash(passphrase, HashVariant::Xof128, aead::KEY_LEN, &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seal_open_roundtrip() {
        let mut rng = rand::rng();
        let sealed = seal(&mut rng, b"passphrase", b"ad", b"payload").unwrap();
        assert_eq!(open(b"passphrase", b"ad", &sealed).unwrap(), b"payload");
    }

    #[test]
    fn test_wrong_passphrase_fails() {
        let mut rng = rand::rng();
        let sealed = seal(&mut rng, b"passphrase", &[], b"payload").unwrap();
        assert_eq!(
            open(b"wrong", &[], &sealed),
            Err(Error::AuthenticationFailure)
        );
    }

    #[test]
    fn test_nonce_makes_seals_differ() {
        let mut rng = rand::rng();
        let a = seal(&mut rng, b"p", &[], b"m").unwrap();
        let b = seal(&mut rng, b"p", &[], b"m").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_input() {
        assert!(open(b"p", &[], "not hex").is_err());
        assert!(open(b"p", &[], "00ff").is_err());
    }
}
