//! Base-36 codec for scale-set hostnames.
//!
//! A scale-set member's hostname ends in a 6 character field holding its
//! instance id in base 36, most significant digit first and zero padded,
//! e.g. `vmss00000A` is instance 10.

use crate::error::CodecError;

pub(crate) const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub(crate) const BASE: u64 = ALPHABET.len() as u64;

pub(crate) const FIELD_WIDTH: usize = 6;

/// Largest id that fits in the field, `36^6 - 1`.
pub(crate) const MAX_INSTANCE_ID: u64 = BASE.pow(FIELD_WIDTH as u32) - 1;

/// Value of `symbol` in the alphabet, if it is part of it.
pub(crate) fn digit_value(symbol: char) -> Option<u32> {
    ALPHABET
        .iter()
        .position(|&s| s as char == symbol)
        .map(|p| p as u32)
}

/// Last `FIELD_WIDTH` characters of the hostname, or all of it when shorter.
fn suffix(hostname: &str) -> &str {
    let start = hostname
        .char_indices()
        .rev()
        .nth(FIELD_WIDTH - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);

    &hostname[start..]
}

/// Decodes the instance id from the hostname suffix.
///
/// Never fails. Symbols outside the alphabet are valued as `codepoint - 55`,
/// which can push the result negative for punctuation. Only ASCII `0-9` count
/// as digits; other Unicode decimal digits take the codepoint rule too.
pub fn decode(hostname: &str) -> i64 {
    let digits = suffix(hostname).trim_start_matches('0');

    let mut vmid: i64 = 0;
    let mut multiplier: i64 = 1;
    for symbol in digits.chars().rev() {
        let value = match digit_value(symbol) {
            Some(value) => value as i64,
            None => symbol as i64 - 55,
        };

        vmid += value * multiplier;
        multiplier *= BASE as i64;
    }

    vmid
}

/// Like [`decode`], but rejects short hostnames and symbols outside `0-9A-Z`.
pub fn try_decode(hostname: &str) -> Result<u64, CodecError> {
    let len = hostname.chars().count();
    if len < FIELD_WIDTH {
        return Err(CodecError::TooShort { len });
    }

    suffix(hostname)
        .chars()
        .enumerate()
        .try_fold(0u64, |vmid, (position, digit)| {
            let value =
                digit_value(digit).ok_or(CodecError::InvalidDigit { digit, position })?;

            Ok(vmid * BASE + value as u64)
        })
}

/// Builds `prefix` followed by the zero padded base-36 field for `instance_id`.
///
/// Ids above [`MAX_INSTANCE_ID`] are not truncated; the field just grows wider.
pub fn encode(prefix: &str, instance_id: u64) -> String {
    let mut digits = Vec::with_capacity(FIELD_WIDTH);
    let mut value = instance_id;

    while value > 0 {
        digits.push(ALPHABET[(value % BASE) as usize]);
        value /= BASE;
    }

    let field = digits.iter().rev().map(|&d| d as char).collect::<String>();

    format!("{prefix}{field:0>width$}", width = FIELD_WIDTH)
}

/// Like [`encode`], but refuses ids that would overflow the 6 character field.
pub fn try_encode(prefix: &str, instance_id: u64) -> Result<String, CodecError> {
    if instance_id > MAX_INSTANCE_ID {
        return Err(CodecError::OutOfRange { id: instance_id });
    }

    Ok(encode(prefix, instance_id))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encodes_zero_as_padded_field() {
        pretty_assertions::assert_eq!("vmss000000", encode("vmss", 0));
    }

    #[test]
    fn encodes_max_width() {
        pretty_assertions::assert_eq!("vmssZZZZZZ", encode("vmss", MAX_INSTANCE_ID));
        assert_eq!(2_176_782_335, MAX_INSTANCE_ID);
    }

    #[test]
    fn encodes_letters() {
        pretty_assertions::assert_eq!("vmss00000A", encode("vmss", 10));
        pretty_assertions::assert_eq!("vmss000010", encode("vmss", 36));
        pretty_assertions::assert_eq!("00002S", encode("", 100));
    }

    #[test]
    fn encode_overflow_widens_field() {
        pretty_assertions::assert_eq!("vmss1000000", encode("vmss", MAX_INSTANCE_ID + 1));
    }

    #[test]
    fn decodes_leading_zeros() {
        assert_eq!(1, decode("vmss000001"));
        assert_eq!(0, decode("vmss000000"));
    }

    #[test]
    fn decodes_letter_positions() {
        assert_eq!(10, decode("vmss00000A"));
        assert_eq!(10 * 36i64.pow(5), decode("vmssA00000"));
        assert_eq!(MAX_INSTANCE_ID as i64, decode("vmssZZZZZZ"));
    }

    #[test]
    fn decode_only_reads_last_six() {
        assert_eq!(decode("00002S"), decode("some-long-prefix-00002S"));
        assert_eq!(100, decode("ZZZZ00002S"));
    }

    #[test]
    fn decode_short_hostname_reads_everything() {
        assert_eq!(35, decode("Z"));
        assert_eq!(0, decode(""));
    }

    #[test]
    fn decode_outside_alphabet_uses_codepoint_rule() {
        // 'a' is 97 - 55
        assert_eq!(42, decode("vmss00000a"));
        // '-' is 45 - 55
        assert_eq!(-10, decode("vmss00000-"));
        // Arabic-Indic three is U+0663
        assert_eq!(0x0663 - 55, decode("vmss00000\u{0663}"));
    }

    #[test]
    fn round_trips_across_range() {
        for prefix in ["scaleset_", "", "vm-ß"] {
            let ids = (0..=MAX_INSTANCE_ID)
                .step_by(7919)
                .chain([1, 35, 36, MAX_INSTANCE_ID - 1, MAX_INSTANCE_ID]);

            for id in ids {
                let hostname = encode(prefix, id);
                let field = &hostname[prefix.len()..];

                assert_eq!(FIELD_WIDTH, field.len(), "field for {id}");
                assert_eq!(id as i64, decode(field), "decode of {hostname}");
                assert_eq!(id as i64, decode(&hostname), "decode of {hostname}");
                assert_eq!(Ok(id), try_decode(&hostname), "strict decode of {hostname}");
            }
        }
    }

    #[test]
    fn try_encode_rejects_out_of_range() {
        assert_eq!(
            Err(CodecError::OutOfRange {
                id: MAX_INSTANCE_ID + 1
            }),
            try_encode("vmss", MAX_INSTANCE_ID + 1)
        );
        pretty_assertions::assert_eq!(
            Ok("vmssZZZZZZ".to_string()),
            try_encode("vmss", MAX_INSTANCE_ID)
        );
    }

    #[test]
    fn try_decode_rejects_bad_input() {
        assert_eq!(Err(CodecError::TooShort { len: 3 }), try_decode("A0Z"));
        assert_eq!(
            Err(CodecError::InvalidDigit {
                digit: 'a',
                position: 5
            }),
            try_decode("vmss00000a")
        );
        assert_eq!(Ok(10), try_decode("vmss00000A"));
    }

    #[test]
    fn digit_values_follow_alphabet() {
        assert_eq!(Some(0), digit_value('0'));
        assert_eq!(Some(9), digit_value('9'));
        assert_eq!(Some(10), digit_value('A'));
        assert_eq!(Some(35), digit_value('Z'));
        assert_eq!(None, digit_value('z'));
    }
}
