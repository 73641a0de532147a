//! The view-call trait.

use ethsign_abi::AbiValue;
use ethsign_primitives::address::Address;

use crate::ContractError;

/// Name of the view method returning the recovered signer address.
pub const METHOD_ADDRESS: &str = "Address";

/// Name of the view method comparing the signer against the participant.
pub const METHOD_MATCH_SENDER: &str = "MatchSender";

/// A read-only gateway to a deployed contract.
///
/// This is the only surface the verification pipeline needs from the
/// outside world: call a view method with typed arguments, get the raw
/// return words back. Implementations decide how the call travels. A
/// JSON-RPC client would ABI-encode the arguments and go over the wire;
/// [`crate::InMemoryVerifier`] interprets them directly.
pub trait ContractCaller {
    /// Execute a view call against `contract` and return the raw
    /// ABI-encoded return data.
    fn call_view(
        &self,
        contract: &Address,
        method: &str,
        args: &[AbiValue],
    ) -> Result<Vec<u8>, ContractError>;
}
