/// Error type for ABI encoding operations.
///
/// Encoding is pure and deterministic; any failure is a caller bug, never
/// transient, so no operation retries.
#[derive(Debug, thiserror::Error)]
pub enum AbiError {
    /// An unsigned integer value needs more than 256 bits.
    #[error("uint value of {bits} bits does not fit the 256-bit word size")]
    UintTooLarge {
        /// Bit length of the offending value.
        bits: u64,
    },
}
