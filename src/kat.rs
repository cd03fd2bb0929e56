//! Parser for the LWC known-answer-test record format:
//! `Count = n` / `Key = HEX` / `Nonce = HEX` / `PT = HEX` / `AD = HEX` /
//! `CT = HEX`, records separated by blank lines. Validation-only format,
//! consumed by the AEAD test suite.

use crate::errors::{Error, Result};
use crate::util::hex_decode;

#[derive(Debug, Default)]
pub(crate) struct AeadRecord {
    pub count: u32,
    pub key: Vec<u8>,
    pub nonce: Vec<u8>,
    pub pt: Vec<u8>,
    pub ad: Vec<u8>,
    pub ct: Vec<u8>,
}

pub(crate) fn parse_records(text: &str) -> Result<Vec<AeadRecord>> {
    let mut records = Vec::new();
    let mut current: Option<AeadRecord> = None;
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if let Some(r) = current.take() {
                records.push(r);
            }
            continue;
        }
        let (field, value) = line
            .split_once('=')
            .ok_or(Error::InvalidParameter("KAT line is not `Field = value`"))?;
        let (field, value) = (field.trim(), value.trim());
        let r = current.get_or_insert_with(AeadRecord::default);
        match field {
            "Count" => {
                r.count = value
                    .parse()
                    .map_err(|_| Error::InvalidParameter("KAT count is not a number"))?
            }
            "Key" => r.key = hex_decode(value)?,
            "Nonce" => r.nonce = hex_decode(value)?,
            "PT" => r.pt = hex_decode(value)?,
            "AD" => r.ad = hex_decode(value)?,
            "CT" => r.ct = hex_decode(value)?,
            _ => return Err(Error::InvalidParameter("unknown KAT field")),
        }
    }
    if let Some(r) = current.take() {
        records.push(r);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        let text = "Count = 7\nKey = 00FF\nNonce = 0102\nPT =\nAD = AA\nCT = BEEF\n\n\
                    Count = 8\nKey = 11\nNonce = 22\nPT = 33\nAD =\nCT = 44\n";
        let records = parse_records(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].count, 7);
        assert_eq!(records[0].key, vec![0x00, 0xff]);
        assert_eq!(records[0].pt, Vec::<u8>::new());
        assert_eq!(records[0].ad, vec![0xaa]);
        assert_eq!(records[1].ct, vec![0x44]);
    }

    #[test]
    fn test_parse_malformed() {
        assert!(parse_records("Count 7\n").is_err());
        assert!(parse_records("Count = x\n").is_err());
        assert!(parse_records("Tag = 00\n").is_err());
        assert!(parse_records("Key = 0g\n").is_err());
    }
}
