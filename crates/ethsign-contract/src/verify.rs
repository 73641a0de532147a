//! Typed binding for the verification contract.

use ethsign_abi::AbiValue;
use ethsign_message::Message;
use ethsign_primitives::address::Address;
use ethsign_primitives::ec::Signature;

use crate::caller::{ContractCaller, METHOD_ADDRESS, METHOD_MATCH_SENDER};
use crate::ContractError;

/// Width of a return word in bytes.
const WORD_SIZE: usize = 32;

/// Typed wrapper over the verification contract's two view methods.
///
/// Generic over the caller so the same binding works against a live
/// deployment or the in-memory implementation.
#[derive(Debug, Clone)]
pub struct VerifyContract<C> {
    /// Address of the deployed contract.
    address: Address,
    /// The gateway used for view calls.
    caller: C,
}

impl<C: ContractCaller> VerifyContract<C> {
    /// Create a binding for the contract deployed at `address`.
    pub fn new(address: Address, caller: C) -> Self {
        VerifyContract { address, caller }
    }

    /// The contract address this binding points at.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Ask the contract which address signed `message`.
    pub fn signer_address(
        &self,
        message: &Message,
        signature: &Signature,
    ) -> Result<Address, ContractError> {
        let ret = self.caller.call_view(
            &self.address,
            METHOD_ADDRESS,
            &call_args(message, signature),
        )?;
        decode_address_word(&ret)
    }

    /// Ask the contract whether `message` was signed by its participant.
    pub fn match_sender(
        &self,
        message: &Message,
        signature: &Signature,
    ) -> Result<bool, ContractError> {
        let ret = self.caller.call_view(
            &self.address,
            METHOD_MATCH_SENDER,
            &call_args(message, signature),
        )?;
        decode_bool_word(&ret)
    }
}

/// Build the argument tuple both view methods share:
/// `(id, participant, nonce, signature_bytes)`.
fn call_args(message: &Message, signature: &Signature) -> Vec<AbiValue> {
    let mut args = message.abi_values();
    args.push(AbiValue::Bytes(signature.to_bytes().to_vec()));
    args
}

/// Decode a single return word holding a right-aligned address.
fn decode_address_word(data: &[u8]) -> Result<Address, ContractError> {
    if data.len() != WORD_SIZE {
        return Err(ContractError::BadReturn(format!(
            "expected one {}-byte word, got {} bytes",
            WORD_SIZE,
            data.len()
        )));
    }
    if data[..12].iter().any(|&b| b != 0) {
        return Err(ContractError::BadReturn(
            "address word has nonzero padding".to_string(),
        ));
    }
    Ok(Address::from_bytes(&data[12..])?)
}

/// Decode a single return word holding a boolean.
fn decode_bool_word(data: &[u8]) -> Result<bool, ContractError> {
    if data.len() != WORD_SIZE {
        return Err(ContractError::BadReturn(format!(
            "expected one {}-byte word, got {} bytes",
            WORD_SIZE,
            data.len()
        )));
    }
    if data[..31].iter().any(|&b| b != 0) || data[31] > 1 {
        return Err(ContractError::BadReturn(
            "bool word is not 0 or 1".to_string(),
        ));
    }
    Ok(data[31] == 1)
}

/// Encode an address as a single return word.
pub(crate) fn encode_address_word(addr: &Address) -> Vec<u8> {
    let mut word = vec![0u8; WORD_SIZE];
    word[12..].copy_from_slice(addr.as_bytes());
    word
}

/// Encode a boolean as a single return word.
pub(crate) fn encode_bool_word(value: bool) -> Vec<u8> {
    let mut word = vec![0u8; WORD_SIZE];
    word[31] = value as u8;
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_codecs_round_trip() {
        let addr = Address::from_hex("0x6327a38415c53ffb36c11db55ea74cc9cb4976fd").unwrap();
        assert_eq!(
            decode_address_word(&encode_address_word(&addr)).unwrap(),
            addr
        );
        assert!(decode_bool_word(&encode_bool_word(true)).unwrap());
        assert!(!decode_bool_word(&encode_bool_word(false)).unwrap());
    }

    #[test]
    fn test_decode_rejects_malformed_words() {
        assert!(decode_address_word(&[0u8; 20]).is_err());
        assert!(decode_address_word(&[1u8; 32]).is_err());
        assert!(decode_bool_word(&[0u8; 31]).is_err());

        let mut two = vec![0u8; 32];
        two[31] = 2;
        assert!(decode_bool_word(&two).is_err());
    }
}
