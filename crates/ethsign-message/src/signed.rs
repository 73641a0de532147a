//! Message digesting, signing, and local verification.

use ethsign_primitives::address::Address;
use ethsign_primitives::ec::{PrivateKey, Signature};
use ethsign_primitives::hash::{keccak256, keccak256_concat};

use crate::message::Message;
use crate::MessageError;

/// Prefix stamped onto a 32-byte hash before the final digest.
///
/// This is the signed-message convention the on-chain verifier hardcodes:
/// the digest it recovers against is
/// `keccak256(STAMP ‖ keccak256(encoded_message))`. Both sides must apply
/// the identical stamp or recovery silently yields the wrong address.
const SIGNED_MESSAGE_STAMP: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// The outcome of one verification call.
///
/// A non-matching address is a successful result, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationResult {
    /// The address recovered from the signature.
    pub recovered: Address,
    /// The address the caller expected.
    pub expected: Address,
    /// Whether the two are byte-for-byte equal.
    pub matched: bool,
}

/// Compute the digest committed to by a signature over `message`.
///
/// Encodes the message canonically, hashes it, and stamps the hash with
/// the signed-message prefix. Encoding failures propagate unchanged.
pub fn digest(message: &Message) -> Result<[u8; 32], MessageError> {
    let encoded = message.encode()?;
    let inner = keccak256(&encoded);
    Ok(keccak256_concat(SIGNED_MESSAGE_STAMP, &inner))
}

/// Sign a message with a private key.
///
/// The key is read-only input; it is never copied out of the caller's
/// scope or retained past this call.
pub fn sign(message: &Message, key: &PrivateKey) -> Result<Signature, MessageError> {
    let digest = digest(message)?;
    Ok(key.sign(&digest)?)
}

/// Verify a signature over a message against an expected signer address.
///
/// Recomputes the digest, recovers the signing address, and compares it
/// byte-for-byte with no partial matching. Returns an error only for
/// malformed inputs (encoding or recovery failures); an honest mismatch is
/// reported as `matched = false`.
pub fn verify(
    message: &Message,
    expected: &Address,
    signature: &Signature,
) -> Result<VerificationResult, MessageError> {
    let digest = digest(message)?;
    let recovered = signature.recover_address(&digest)?;
    Ok(VerificationResult {
        recovered,
        expected: *expected,
        matched: recovered == *expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    /// Well-known development keys (first two accounts of the standard
    /// local devnet mnemonic).
    const DEV_KEY_0: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEV_KEY_1: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    fn fixture_message() -> Message {
        let participant =
            Address::from_hex("0x6327A38415C53FFb36c11db55Ea74cc9cB4976Fd").unwrap();
        Message::new("asdjh1231", participant, 1u64)
    }

    #[test]
    fn test_digest_is_deterministic() {
        let msg = fixture_message();
        assert_eq!(digest(&msg).unwrap(), digest(&msg).unwrap());

        // Any field change moves the digest.
        let mut other = fixture_message();
        other.nonce = BigUint::from(2u64);
        assert_ne!(digest(&msg).unwrap(), digest(&other).unwrap());
    }

    #[test]
    fn test_sign_and_verify_matched() {
        let key = PrivateKey::from_hex(DEV_KEY_0).unwrap();
        let msg = fixture_message();

        let sig = sign(&msg, &key).unwrap();
        let result = verify(&msg, &key.address(), &sig).unwrap();

        assert!(result.matched);
        assert_eq!(result.recovered, key.address());
        assert_eq!(result.expected, key.address());
        assert_eq!(
            result.recovered.to_checksum_hex(),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
    }

    #[test]
    fn test_verify_mismatch_is_not_an_error() {
        let key_a = PrivateKey::from_hex(DEV_KEY_0).unwrap();
        let key_b = PrivateKey::from_hex(DEV_KEY_1).unwrap();
        let msg = fixture_message();

        // Signed by B, checked against A's address.
        let sig = sign(&msg, &key_b).unwrap();
        let result = verify(&msg, &key_a.address(), &sig).unwrap();

        assert!(!result.matched);
        assert_eq!(result.recovered, key_b.address());
        assert_eq!(result.expected, key_a.address());
    }

    #[test]
    fn test_signature_survives_hex_transport() {
        // The display form is what travels to a contract call; it must
        // carry the exact same signature back.
        let key = PrivateKey::from_hex(DEV_KEY_0).unwrap();
        let msg = fixture_message();

        let sig = sign(&msg, &key).unwrap();
        let wire = sig.to_hex();
        let decoded = Signature::from_hex(&wire).unwrap();

        assert_eq!(decoded, sig);
        assert!(verify(&msg, &key.address(), &decoded).unwrap().matched);
    }

    #[test]
    fn test_tampered_message_fails_verification() {
        let key = PrivateKey::from_hex(DEV_KEY_0).unwrap();
        let msg = fixture_message();
        let sig = sign(&msg, &key).unwrap();

        let mut tampered = fixture_message();
        tampered.id.push('x');

        // Recovery either lands on a different address or fails outright;
        // it never reports a match.
        match verify(&tampered, &key.address(), &sig) {
            Ok(result) => assert!(!result.matched),
            Err(MessageError::Primitives(_)) => {}
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn test_encoding_error_propagates() {
        let key = PrivateKey::from_hex(DEV_KEY_0).unwrap();
        let mut msg = fixture_message();
        msg.nonce = BigUint::from(1u8) << 300u32;

        assert!(matches!(
            sign(&msg, &key).unwrap_err(),
            MessageError::Abi(_)
        ));
    }
}
