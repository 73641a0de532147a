#![deny(missing_docs)]

//! Signed-message SDK - Complete SDK.
//!
//! Re-exports all SDK components for convenient single-crate usage.

pub use ethsign_primitives as primitives;
pub use ethsign_abi as abi;
pub use ethsign_message as message;
pub use ethsign_contract as contract;
