//! Recoverable ECDSA signature.
//!
//! Supports the 65-byte `r ‖ s ‖ v` raw form and the `0x`-prefixed hex
//! display form, RFC6979 deterministic signing, and public key recovery.
//! Recovery runs the same algorithm an on-chain `ecrecover` applies, so
//! both sides agree on the recovered address for identical inputs.

use std::fmt;

use k256::ecdsa::{self, RecoveryId, VerifyingKey};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::address::Address;
use crate::ec::private_key::PrivateKey;
use crate::ec::public_key::PublicKey;
use crate::PrimitivesError;

/// Length of a raw signature in bytes: 32-byte R, 32-byte S, 1-byte V.
pub const SIGNATURE_SIZE: usize = 65;

/// Offset added to the recovery id when signing.
///
/// Chain-side recovery expects `v` as 27 or 28; 0 and 1 are also accepted
/// on input.
const RECOVERY_ID_OFFSET: u8 = 27;

/// An ECDSA signature with R, S, and recovery identifier V.
///
/// Immutable once created. The raw form is the 65-byte concatenation
/// `r ‖ s ‖ v`; the display form is `0x` followed by lowercase hex of
/// those bytes. The two forms round-trip losslessly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The R component of the signature (32 bytes, big-endian).
    r: [u8; 32],
    /// The S component of the signature (32 bytes, big-endian).
    s: [u8; 32],
    /// The recovery identifier.
    v: u8,
}

impl Signature {
    /// Create a signature from raw components.
    ///
    /// # Arguments
    /// * `r` - The R component (32 bytes, big-endian).
    /// * `s` - The S component (32 bytes, big-endian).
    /// * `v` - The recovery identifier byte.
    ///
    /// # Returns
    /// A new `Signature` with the given components.
    pub fn new(r: [u8; 32], s: [u8; 32], v: u8) -> Self {
        Signature { r, s, v }
    }

    /// Access the R component of the signature.
    ///
    /// # Returns
    /// A reference to the 32-byte R value.
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// Access the S component of the signature.
    ///
    /// # Returns
    /// A reference to the 32-byte S value.
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// Access the recovery identifier.
    ///
    /// # Returns
    /// The V byte (27 or 28 when produced by [`Signature::sign`]).
    pub fn v(&self) -> u8 {
        self.v
    }

    /// Parse a raw 65-byte signature.
    ///
    /// Format: `<32-byte R> <32-byte S> <recovery id byte>`.
    ///
    /// # Arguments
    /// * `bytes` - The 65 raw signature bytes.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or an error for any other length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != SIGNATURE_SIZE {
            return Err(PrimitivesError::InvalidSignature(format!(
                "invalid signature length of {}, want {}",
                bytes.len(),
                SIGNATURE_SIZE
            )));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Signature { r, s, v: bytes[64] })
    }

    /// Serialize the signature in raw 65-byte form.
    ///
    /// # Returns
    /// A 65-byte array `r ‖ s ‖ v`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut out = [0u8; SIGNATURE_SIZE];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// Parse a signature from its `0x`-prefixed hex display form.
    ///
    /// # Arguments
    /// * `hex_str` - A string of the form `0x` + 130 hex digits.
    ///
    /// # Returns
    /// `Ok(Signature)` on success. Fails if the prefix is missing, the
    /// digit count is odd, or the decoded length is not 65 bytes.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let body = hex_str.strip_prefix("0x").ok_or_else(|| {
            PrimitivesError::InvalidSignature(
                "signature hex must be 0x-prefixed".to_string(),
            )
        })?;
        if body.len() % 2 != 0 {
            return Err(PrimitivesError::InvalidSignature(
                "signature hex has an odd number of digits".to_string(),
            ));
        }
        let bytes = hex::decode(body)
            .map_err(|e| PrimitivesError::InvalidSignature(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Serialize the signature in its hex display form.
    ///
    /// # Returns
    /// `0x` followed by 130 lowercase hex digits. Inverse of
    /// [`Signature::from_hex`].
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }

    /// Sign a 32-byte digest with a private key.
    ///
    /// Uses RFC6979 deterministic nonces; the resulting signature is low-S
    /// normalized and carries `v = 27 + recovery_id`.
    ///
    /// # Arguments
    /// * `digest` - The 32-byte digest to sign.
    /// * `priv_key` - The private key to sign with.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or an error if the curve operation fails.
    pub fn sign(digest: &[u8; 32], priv_key: &PrivateKey) -> Result<Self, PrimitivesError> {
        let signing_key = priv_key.signing_key();

        let (k256_sig, recovery_id) = signing_key
            .sign_prehash_recoverable(digest.as_slice())
            .map_err(|e| PrimitivesError::SigningFailed(e.to_string()))?;

        let (r_bytes, s_bytes) = k256_sig.split_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&r_bytes);
        s.copy_from_slice(&s_bytes);

        Ok(Signature {
            r,
            s,
            v: RECOVERY_ID_OFFSET + recovery_id.to_byte(),
        })
    }

    /// Recover the public key that produced this signature over a digest.
    ///
    /// Uses the recovery identifier to select among the curve's candidate
    /// public keys and returns the one consistent with the digest and the
    /// R/S components.
    ///
    /// # Arguments
    /// * `digest` - The 32-byte digest that was signed.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success. Fails if the recovery id is out of
    /// range, R or S is not a valid curve scalar, or no valid public key
    /// matches.
    pub fn recover_public_key(&self, digest: &[u8; 32]) -> Result<PublicKey, PrimitivesError> {
        let iteration = match self.v {
            0 | 27 => 0,
            1 | 28 => 1,
            other => {
                return Err(PrimitivesError::RecoveryFailed(format!(
                    "invalid recovery id {}",
                    other
                )));
            }
        };
        let recovery_id = RecoveryId::from_byte(iteration).ok_or_else(|| {
            PrimitivesError::RecoveryFailed(format!("invalid recovery id {}", self.v))
        })?;

        let k256_sig = ecdsa::Signature::from_scalars(
            k256::FieldBytes::from(self.r),
            k256::FieldBytes::from(self.s),
        )
        .map_err(|e| PrimitivesError::RecoveryFailed(format!("invalid scalars: {}", e)))?;

        let recovered =
            VerifyingKey::recover_from_prehash(digest.as_slice(), &k256_sig, recovery_id)
                .map_err(|e| PrimitivesError::RecoveryFailed(e.to_string()))?;

        PublicKey::from_bytes(recovered.to_encoded_point(false).as_bytes())
    }

    /// Recover the account address that produced this signature over a digest.
    ///
    /// # Arguments
    /// * `digest` - The 32-byte digest that was signed.
    ///
    /// # Returns
    /// `Ok(Address)` of the recovered public key, or a recovery error.
    pub fn recover_address(&self, digest: &[u8; 32]) -> Result<Address, PrimitivesError> {
        Ok(self.recover_public_key(digest)?.to_address())
    }
}

/// Display the signature in its hex form.
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Serialize as the hex display form in JSON.
impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Deserialize from the hex display form in JSON.
impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Signature::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
