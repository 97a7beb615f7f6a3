//! Error types for the abiguess CLI.

/// Errors the CLI can surface to the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The engine could not infer a type list consistent with the given calldata.
    #[error("could not infer a type signature for the given calldata")]
    NoSignatureFound,

    /// The result could not be serialized to JSON.
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}
