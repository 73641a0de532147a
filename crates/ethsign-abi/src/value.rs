//! Typed values for the closed encoding schema.

use num_bigint::BigUint;

use ethsign_primitives::address::Address;

/// A typed field value in an encodable tuple.
///
/// The set is closed on purpose: each variant maps to exactly one encoding
/// rule, and adding a type means extending the encoder in one place with
/// the compiler checking exhaustiveness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbiValue {
    /// A UTF-8 string; dynamic, encoded length-prefixed in the tail.
    String(String),
    /// A 20-byte account address; static, one left-padded head word.
    Address(Address),
    /// An unsigned integer up to 256 bits; static, one big-endian head word.
    Uint(BigUint),
    /// A raw byte blob; dynamic, same rule as `String`.
    Bytes(Vec<u8>),
}

impl AbiValue {
    /// Whether this value uses the dynamic (offset + tail) encoding rule.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, AbiValue::String(_) | AbiValue::Bytes(_))
    }
}

impl From<&str> for AbiValue {
    fn from(s: &str) -> Self {
        AbiValue::String(s.to_string())
    }
}

impl From<Address> for AbiValue {
    fn from(a: Address) -> Self {
        AbiValue::Address(a)
    }
}

impl From<u64> for AbiValue {
    fn from(n: u64) -> Self {
        AbiValue::Uint(BigUint::from(n))
    }
}

impl From<BigUint> for AbiValue {
    fn from(n: BigUint) -> Self {
        AbiValue::Uint(n)
    }
}

impl From<Vec<u8>> for AbiValue {
    fn from(b: Vec<u8>) -> Self {
        AbiValue::Bytes(b)
    }
}
