//! Ascon lightweight cryptography (NIST SP 800-232): authenticated
//! encryption, hashing/XOF and keyed MAC/PRF over one 320-bit sponge.
//!
//! Every operation builds a fresh five-word state, drives it through the
//! Ascon-p permutation and drops it on return; nothing is shared between
//! calls, so the whole crate is safe to use from concurrent threads.

pub mod errors;
pub mod permutation;
pub mod util;

mod sponge;

#[cfg(feature = "aead")]
pub mod aead;

#[cfg(feature = "hash")]
pub mod hash;

#[cfg(feature = "mac")]
pub mod mac;

#[cfg(all(feature = "aead", feature = "hash"))]
pub mod envelope;

#[cfg(test)]
mod kat;

pub use errors::{Error, Result};

#[cfg(feature = "aead")]
pub use aead::{decrypt, encrypt};

#[cfg(feature = "hash")]
pub use hash::{HashVariant, hash};

#[cfg(feature = "mac")]
pub use mac::{MacVariant, mac};
