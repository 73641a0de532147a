//! Canonical tuple encoding.
//!
//! Implements the head/tail word layout of the contract ABI: every value
//! owns one 32-byte head word, static values inline, dynamic values as a
//! byte offset into a tail of `length ‖ content` blocks. Fields concatenate
//! in declaration order with no separators; two equal tuples always produce
//! byte-identical output.

use crate::error::AbiError;
use crate::value::AbiValue;

use ethsign_primitives::address::Address;
use num_bigint::BigUint;

/// Width of an encoding word in bytes.
pub const WORD_SIZE: usize = 32;

/// Encode an ordered tuple of values into its canonical byte string.
///
/// # Arguments
/// * `values` - The field values in declaration order.
///
/// # Returns
/// The encoded bytes, or an error if a value cannot be represented in its
/// declared type's range.
pub fn encode(values: &[AbiValue]) -> Result<Vec<u8>, AbiError> {
    // Each supported type occupies exactly one head word.
    let head_len = values.len() * WORD_SIZE;

    let mut head = Vec::with_capacity(head_len);
    let mut tail: Vec<u8> = Vec::new();

    for value in values {
        match value {
            AbiValue::Address(addr) => head.extend_from_slice(&address_word(addr)),
            AbiValue::Uint(n) => head.extend_from_slice(&uint_word(n)?),
            AbiValue::String(s) => {
                head.extend_from_slice(&offset_word(head_len + tail.len()));
                append_dynamic(&mut tail, s.as_bytes());
            }
            AbiValue::Bytes(b) => {
                head.extend_from_slice(&offset_word(head_len + tail.len()));
                append_dynamic(&mut tail, b);
            }
        }
    }

    head.extend_from_slice(&tail);
    Ok(head)
}

/// Encode an address as a left-zero-padded word.
fn address_word(addr: &Address) -> [u8; WORD_SIZE] {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - 20..].copy_from_slice(addr.as_bytes());
    word
}

/// Encode an unsigned integer as a big-endian left-zero-padded word.
///
/// Fails if the value needs more than 256 bits.
fn uint_word(n: &BigUint) -> Result<[u8; WORD_SIZE], AbiError> {
    let bytes = n.to_bytes_be();
    if bytes.len() > WORD_SIZE {
        return Err(AbiError::UintTooLarge { bits: n.bits() });
    }
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - bytes.len()..].copy_from_slice(&bytes);
    Ok(word)
}

/// Encode a tail byte offset as a word.
fn offset_word(offset: usize) -> [u8; WORD_SIZE] {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - 8..].copy_from_slice(&(offset as u64).to_be_bytes());
    word
}

/// Append a dynamic value's tail block: length word, then the content
/// right-padded with zeros to the word boundary.
fn append_dynamic(tail: &mut Vec<u8>, content: &[u8]) {
    tail.extend_from_slice(&offset_word(content.len()));
    tail.extend_from_slice(content);
    let rem = content.len() % WORD_SIZE;
    if rem != 0 {
        tail.extend(std::iter::repeat(0u8).take(WORD_SIZE - rem));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        Address::from_hex(s).unwrap()
    }

    #[test]
    fn test_encode_single_uint() {
        let out = encode(&[AbiValue::from(1u64)]).unwrap();
        assert_eq!(
            hex::encode(out),
            "0000000000000000000000000000000000000000000000000000000000000001"
        );
    }

    #[test]
    fn test_encode_single_address() {
        let out = encode(&[AbiValue::from(addr("0x6327a38415c53ffb36c11db55ea74cc9cb4976fd"))])
            .unwrap();
        assert_eq!(
            hex::encode(out),
            "0000000000000000000000006327a38415c53ffb36c11db55ea74cc9cb4976fd"
        );
    }

    #[test]
    fn test_encode_single_string() {
        let out = encode(&[AbiValue::from("abc")]).unwrap();
        assert_eq!(
            hex::encode(out),
            "0000000000000000000000000000000000000000000000000000000000000020\
             0000000000000000000000000000000000000000000000000000000000000003\
             6162630000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_encode_empty_string() {
        let out = encode(&[AbiValue::from("")]).unwrap();
        assert_eq!(
            hex::encode(out),
            "0000000000000000000000000000000000000000000000000000000000000020\
             0000000000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_encode_word_aligned_string() {
        // A 32-byte string needs no padding: exactly one content word.
        let s = "0123456789abcdef0123456789abcdef";
        let out = encode(&[AbiValue::from(s)]).unwrap();
        assert_eq!(out.len(), 3 * WORD_SIZE);
        assert_eq!(&out[64..], s.as_bytes());
    }

    #[test]
    fn test_encode_two_dynamic_offsets() {
        // The second offset skips past the first value's tail block.
        let out = encode(&[AbiValue::from("ab"), AbiValue::from("cde")]).unwrap();
        assert_eq!(
            hex::encode(out),
            "0000000000000000000000000000000000000000000000000000000000000040\
             0000000000000000000000000000000000000000000000000000000000000080\
             0000000000000000000000000000000000000000000000000000000000000002\
             6162000000000000000000000000000000000000000000000000000000000000\
             0000000000000000000000000000000000000000000000000000000000000003\
             6364650000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_encode_bytes_same_rule_as_string() {
        let as_string = encode(&[AbiValue::from("abc")]).unwrap();
        let as_bytes = encode(&[AbiValue::Bytes(b"abc".to_vec())]).unwrap();
        assert_eq!(as_string, as_bytes);
    }

    /// The (string, address, uint) tuple layout used by the signed-message
    /// pipeline, against a hand-checked vector.
    #[test]
    fn test_encode_message_tuple() {
        let out = encode(&[
            AbiValue::from("asdjh1231"),
            AbiValue::from(addr("0x6327a38415c53ffb36c11db55ea74cc9cb4976fd")),
            AbiValue::from(1u64),
        ])
        .unwrap();

        assert_eq!(
            hex::encode(out),
            "0000000000000000000000000000000000000000000000000000000000000060\
             0000000000000000000000006327a38415c53ffb36c11db55ea74cc9cb4976fd\
             0000000000000000000000000000000000000000000000000000000000000001\
             0000000000000000000000000000000000000000000000000000000000000009\
             6173646a68313233310000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_uint_boundaries() {
        use num_bigint::BigUint;

        // 2^256 - 1 fits exactly.
        let max = (BigUint::from(1u8) << 256u32) - BigUint::from(1u8);
        let out = encode(&[AbiValue::from(max)]).unwrap();
        assert_eq!(out, vec![0xffu8; WORD_SIZE]);

        // 2^256 does not.
        let over = BigUint::from(1u8) << 256u32;
        let err = encode(&[AbiValue::from(over)]).unwrap_err();
        assert!(matches!(err, AbiError::UintTooLarge { bits: 257 }));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let values = vec![
            AbiValue::from("asdjh1231"),
            AbiValue::from(addr("0x6327a38415c53ffb36c11db55ea74cc9cb4976fd")),
            AbiValue::from(1u64),
        ];
        assert_eq!(encode(&values).unwrap(), encode(&values).unwrap());
    }
}
