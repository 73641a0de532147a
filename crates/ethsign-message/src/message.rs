//! The structured message tuple.

use num_bigint::BigUint;

use ethsign_abi::AbiValue;
use ethsign_primitives::address::Address;

use crate::MessageError;

/// An ordered, fixed-arity message: `(id, participant, nonce)`.
///
/// Field order and types are fixed by the on-chain contract's argument
/// list `(string, address, uint256)`; no field is optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Free-form string identifier.
    pub id: String,
    /// The participant account address.
    pub participant: Address,
    /// Unsigned nonce, up to 256 bits.
    pub nonce: BigUint,
}

impl Message {
    /// Create a new message.
    pub fn new(id: impl Into<String>, participant: Address, nonce: impl Into<BigUint>) -> Self {
        Message {
            id: id.into(),
            participant,
            nonce: nonce.into(),
        }
    }

    /// The message fields as typed values in declaration order.
    pub fn abi_values(&self) -> Vec<AbiValue> {
        vec![
            AbiValue::String(self.id.clone()),
            AbiValue::Address(self.participant),
            AbiValue::Uint(self.nonce.clone()),
        ]
    }

    /// Produce the canonical byte encoding of this message.
    ///
    /// Deterministic: equal field values always yield byte-identical
    /// output.
    pub fn encode(&self) -> Result<Vec<u8>, MessageError> {
        Ok(ethsign_abi::encode(&self.abi_values())?)
    }
}
