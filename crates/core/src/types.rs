//! Internal data model for the decoder's search state, plus the public fragment type returned
//! by selector-prefixed guessing.

use alloy_dyn_abi::DynSolType;

/// An unresolved slot discovered in the static region, pending resolution against the dynamic
/// tail once the frame that introduced it reaches its base case.
#[derive(Debug, Clone)]
pub(crate) struct Placeholder {
    /// Absolute byte position of the dynamic payload, a multiple of 32, strictly inside the
    /// buffer.
    pub offset: usize,
    /// The explicit length prefix, if one was found following the offset.
    pub length: Option<usize>,
}

/// A parameter slot collected during the backtracking search: either a concrete static type, or
/// a placeholder awaiting resolution.
#[derive(Debug, Clone)]
pub(crate) enum Decoded {
    Resolved(DynSolType),
    Placeholder(Placeholder),
}

/// A synthesized function fragment for calldata whose selector could not be matched to a known
/// signature.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessedFragment {
    /// `guessed_<selector>`, e.g. `guessed_a9059cbb`.
    pub name: String,
    /// The full synthetic signature, e.g. `guessed_a9059cbb(address,uint256)`.
    pub signature: String,
    /// The inferred parameter types, in order.
    pub inputs: Vec<DynSolType>,
}
