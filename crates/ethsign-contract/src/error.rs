/// Error types for contract call operations.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// Digesting or encoding the message failed.
    #[error("{0}")]
    Message(#[from] ethsign_message::MessageError),
    /// A signature or address primitive failed.
    #[error("{0}")]
    Primitives(#[from] ethsign_primitives::PrimitivesError),
    /// The contract exposes no method with this name.
    #[error("unknown contract method: {0}")]
    UnknownMethod(String),
    /// The argument list does not match the method's tuple.
    #[error("bad call arguments for {method}: {reason}")]
    BadArguments {
        /// The method whose argument list did not match.
        method: String,
        /// What was wrong with the arguments.
        reason: String,
    },
    /// The return data is not a well-formed word for the expected type.
    #[error("bad return data: {0}")]
    BadReturn(String),
}
