//! Ascon-p round permutation over the 320-bit state.

use crate::errors::{Error, Result};

pub const MAX_ROUNDS: u32 = 12;

// Round constant for round r is 0xf0 - r*0x10 + r; a permutation over
// `rounds` rounds runs r = 12-rounds .. 11.
const ROUND_CONSTANTS: [u64; 12] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];

#[inline]
fn round(s: &mut [u64; 5], rc: u64) {
    // add round constant
    s[2] ^= rc;

    // substitution layer, the 5-bit S-box bit-sliced across the words
    s[0] ^= s[4];
    s[4] ^= s[3];
    s[2] ^= s[1];

    let t0 = (!s[0]) & s[1];
    let t1 = (!s[1]) & s[2];
    let t2 = (!s[2]) & s[3];
    let t3 = (!s[3]) & s[4];
    let t4 = (!s[4]) & s[0];

    s[0] ^= t1;
    s[1] ^= t2;
    s[2] ^= t3;
    s[3] ^= t4;
    s[4] ^= t0;

    s[1] ^= s[0];
    s[0] ^= s[4];
    s[3] ^= s[2];
    s[2] = !s[2];

    // linear diffusion layer
    s[0] ^= s[0].rotate_right(19) ^ s[0].rotate_right(28);
    s[1] ^= s[1].rotate_right(61) ^ s[1].rotate_right(39);
    s[2] ^= s[2].rotate_right(1) ^ s[2].rotate_right(6);
    s[3] ^= s[3].rotate_right(10) ^ s[3].rotate_right(17);
    s[4] ^= s[4].rotate_right(7) ^ s[4].rotate_right(41);
}

/// Applies `rounds` rounds of Ascon-p to the state in place.
pub fn permute(s: &mut [u64; 5], rounds: u32) -> Result<()> {
    if rounds > MAX_ROUNDS {
        return Err(Error::InvalidParameter("permutation rounds must be <= 12"));
    }
    for &rc in &ROUND_CONSTANTS[(MAX_ROUNDS - rounds) as usize..] {
        round(s, rc);
    }
    Ok(())
}
