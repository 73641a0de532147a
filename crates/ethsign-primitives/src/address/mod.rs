//! Account address type.
//!
//! An address is the 20-byte fingerprint of a secp256k1 public key:
//! `keccak256(uncompressed_pubkey[1..])[12..32]`. Addresses parse from hex
//! with or without a `0x` prefix and display with the EIP-55 mixed-case
//! checksum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hash::keccak256;
use crate::PrimitivesError;

/// Size of an address in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// A 20-byte account address.
///
/// Derived deterministically from a public key; the mapping is one-way.
/// Comparison is byte-for-byte, so hex case never affects equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    /// Create an Address from a raw 20-byte array.
    ///
    /// # Arguments
    /// * `bytes` - The 20 address bytes.
    ///
    /// # Returns
    /// A new `Address`.
    pub fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Address(bytes)
    }

    /// Create an Address from a byte slice.
    ///
    /// # Arguments
    /// * `bytes` - A slice that must be exactly 20 bytes.
    ///
    /// # Returns
    /// `Ok(Address)` if the slice is 20 bytes, or an error otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != ADDRESS_SIZE {
            return Err(PrimitivesError::InvalidAddress(format!(
                "invalid address length of {}, want {}",
                bytes.len(),
                ADDRESS_SIZE
            )));
        }
        let mut arr = [0u8; ADDRESS_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Address(arr))
    }

    /// Parse an Address from a hex string.
    ///
    /// Accepts an optional `0x` prefix and any mix of upper/lower case.
    /// The string must contain exactly 40 hex digits.
    ///
    /// # Arguments
    /// * `hex_str` - The address hex string.
    ///
    /// # Returns
    /// `Ok(Address)` on success, or an error for malformed input.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let body = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        if body.len() != ADDRESS_SIZE * 2 {
            return Err(PrimitivesError::InvalidAddress(format!(
                "invalid address hex length of {}, want {}",
                body.len(),
                ADDRESS_SIZE * 2
            )));
        }
        let bytes = hex::decode(body)
            .map_err(|e| PrimitivesError::InvalidAddress(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Access the internal byte array as a reference.
    ///
    /// # Returns
    /// A reference to the 20-byte internal array.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    /// Serialize the address as a lowercase `0x`-prefixed hex string.
    ///
    /// # Returns
    /// A 42-character string.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Serialize the address with the EIP-55 mixed-case checksum.
    ///
    /// Each hex letter is uppercased when the corresponding nibble of
    /// `keccak256(lowercase_hex)` is 8 or above.
    ///
    /// # Returns
    /// A 42-character checksummed string.
    pub fn to_checksum_hex(&self) -> String {
        let lower = hex::encode(self.0);
        let digest = keccak256(lower.as_bytes());

        let mut out = String::with_capacity(2 + ADDRESS_SIZE * 2);
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                digest[i / 2] >> 4
            } else {
                digest[i / 2] & 0x0f
            };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

/// Display the address in EIP-55 checksummed form.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_checksum_hex())
    }
}

/// Parse a hex string into an Address.
///
/// Equivalent to `Address::from_hex`.
impl FromStr for Address {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_hex(s)
    }
}

/// Serialize as a checksummed hex string in JSON.
impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_checksum_hex())
    }
}

/// Deserialize from a hex string in JSON.
impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
