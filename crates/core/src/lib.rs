//! Infers the parameter type signature of an opaque blob of ABI-encoded calldata when no
//! function signature is known ahead of time.
//!
//! The engine is a recursive backtracking decoder: it explores the space of ABI layouts
//! consistent with a byte array, treating [`alloy_dyn_abi`]'s codec as the ground-truth oracle
//! that accepts or rejects each candidate, then refines the generic word-sized placeholders it
//! finds into narrower types (`address`, `uintN`, `bytesN`, `string`) using the shape of the
//! decoded values. It makes no uniqueness guarantee - when several signatures are consistent
//! with the data, it returns the one a stated preference order picks.
//!
//! The engine is a pure, synchronous function of its byte input: no global state, no I/O, no
//! network access. It never reads configuration directly; `abiguess-config` and `abiguess-cli`
//! thread search limits in as plain arguments through the `*_with_limits` entry points.

mod decoder;
mod format;
mod pipeline;
mod predicates;
mod probe;
mod refine;
mod selector;
mod types;
mod words;

/// The type descriptor model this crate infers against: elementary types, arrays, and tuples,
/// with a canonical text format via [`format_type`].
pub use alloy_dyn_abi::DynSolType;

/// Search limits threaded in from the caller (see `abiguess-config::Configuration`).
pub use decoder::Limits;
pub use pipeline::{
    guess_abi_encoded_data, guess_abi_encoded_data_with_limits, DEFAULT_MAX_CALLDATA_WORDS,
};
pub use selector::{guess_fragment, guess_fragment_with_limits};
pub use types::GuessedFragment;

/// Renders a [`DynSolType`] as its canonical Solidity-like text form: elementary name, `T[]`
/// for a dynamic array, `T[k]` for a fixed array, `(T1,...,Tn)` for a tuple.
pub fn format_type(ty: &DynSolType) -> String {
    format::format_type(ty)
}
