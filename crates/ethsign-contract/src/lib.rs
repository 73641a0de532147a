#![deny(missing_docs)]

//! Narrow seam to the on-chain verification contract.
//!
//! The core pipeline never performs network I/O; anything that consults a
//! deployed contract goes through the [`ContractCaller`] trait, which a
//! transport-backed client can implement out of tree. [`VerifyContract`]
//! is the typed binding over the contract's two view methods, and
//! [`InMemoryVerifier`] executes the same semantics locally so the whole
//! surface is testable in-process.

mod caller;
mod error;
mod memory;
mod verify;

pub use caller::{ContractCaller, METHOD_ADDRESS, METHOD_MATCH_SENDER};
pub use error::ContractError;
pub use memory::InMemoryVerifier;
pub use verify::VerifyContract;
