/// Error types for message operations.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// The message could not be encoded canonically.
    #[error("{0}")]
    Abi(#[from] ethsign_abi::AbiError),
    /// A signing or recovery primitive failed.
    #[error("{0}")]
    Primitives(#[from] ethsign_primitives::PrimitivesError),
}
