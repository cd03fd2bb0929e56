//! Hex encoding helpers for the envelope wire format and KAT parsing.

use crate::errors::{Error, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

pub fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_DIGITS[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decodes a hex string, with or without a leading `0x`. Both digit cases
/// are accepted.
pub fn hex_decode(s: &str) -> Result<Vec<u8>> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.len() % 2 != 0 {
        return Err(Error::InvalidParameter("hex string has odd length"));
    }
    s.as_bytes()
        .chunks_exact(2)
        .map(|pair| Ok(hex_digit(pair[0])? << 4 | hex_digit(pair[1])?))
        .collect()
}

fn hex_digit(c: u8) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Error::InvalidParameter("invalid hex digit")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let data = [0x00u8, 0x01, 0x7f, 0x80, 0xff];
        let s = hex_encode(&data);
        assert_eq!(s, "00017f80ff");
        assert_eq!(hex_decode(&s).unwrap(), data);
    }

    #[test]
    fn test_decode_forms() {
        assert_eq!(hex_decode("0xABCD").unwrap(), vec![0xab, 0xcd]);
        assert_eq!(hex_decode("").unwrap(), Vec::<u8>::new());
        assert!(hex_decode("abc").is_err());
        assert!(hex_decode("zz").is_err());
    }
}
