//! In-memory contract caller.

use ethsign_abi::AbiValue;
use ethsign_message::{digest, Message};
use ethsign_primitives::address::Address;
use ethsign_primitives::ec::Signature;

use crate::caller::{ContractCaller, METHOD_ADDRESS, METHOD_MATCH_SENDER};
use crate::verify::{encode_address_word, encode_bool_word};
use crate::ContractError;

/// A [`ContractCaller`] that executes the verification contract's
/// semantics locally.
///
/// The contract recomputes the stamped digest of `(id, participant,
/// nonce)`, recovers the signer from the signature, and for
/// `MatchSender` compares the recovery against the participant argument.
/// Running the identical computation here is what lets verification be
/// exercised with no deployment and no transport, and is the reference
/// a live client's results can be cross-checked against.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVerifier;

impl InMemoryVerifier {
    /// Create a new in-memory verifier.
    pub fn new() -> Self {
        InMemoryVerifier
    }
}

impl ContractCaller for InMemoryVerifier {
    fn call_view(
        &self,
        _contract: &Address,
        method: &str,
        args: &[AbiValue],
    ) -> Result<Vec<u8>, ContractError> {
        let (message, signature) = parse_verify_args(method, args)?;
        let digest = digest(&message)?;
        let recovered = signature.recover_address(&digest)?;

        match method {
            METHOD_ADDRESS => Ok(encode_address_word(&recovered)),
            METHOD_MATCH_SENDER => Ok(encode_bool_word(recovered == message.participant)),
            other => Err(ContractError::UnknownMethod(other.to_string())),
        }
    }
}

/// Parse the shared `(id, participant, nonce, signature_bytes)` argument
/// tuple of the verification methods.
fn parse_verify_args(
    method: &str,
    args: &[AbiValue],
) -> Result<(Message, Signature), ContractError> {
    match args {
        [AbiValue::String(id), AbiValue::Address(participant), AbiValue::Uint(nonce), AbiValue::Bytes(sig)] =>
        {
            let message = Message::new(id.clone(), *participant, nonce.clone());
            let signature = Signature::from_bytes(sig)?;
            Ok((message, signature))
        }
        _ => Err(ContractError::BadArguments {
            method: method.to_string(),
            reason: "want (string, address, uint256, bytes)".to_string(),
        }),
    }
}
