//! Cryptographic primitives for Ethereum-style message signing.
//!
//! This crate provides the foundational building blocks for the SDK:
//! - Keccak-256 hashing
//! - 20-byte account addresses with EIP-55 checksum display
//! - Elliptic curve cryptography (secp256k1 keys, recoverable signatures)

pub mod hash;
pub mod address;
pub mod ec;

mod error;
pub use error::PrimitivesError;
