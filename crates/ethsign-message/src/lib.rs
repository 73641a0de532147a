#![deny(missing_docs)]

//! Structured message signing and verification.
//!
//! A message is the fixed tuple `(id, participant, nonce)`. Signing encodes
//! it exactly the way the on-chain verifier does, digests it with the
//! signed-message stamp, and produces a recoverable signature; verification
//! recomputes the digest, recovers the signer's address, and compares it
//! against an expected address, all without touching a network.

mod error;
pub mod message;
pub mod signed;

pub use error::MessageError;
pub use message::Message;
pub use signed::{digest, sign, verify, VerificationResult};
