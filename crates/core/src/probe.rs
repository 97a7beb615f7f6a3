//! A thin wrapper over the external ABI codec (`alloy-dyn-abi`) that serves as the decoder's
//! ground-truth oracle: a candidate type list is accepted iff the codec decodes the buffer
//! against it *and* every decoded value can be stringified without error.
//!
//! Re-implementing ABI validity rules by hand would duplicate the codec and inevitably drift
//! from it; trusting the codec keeps the search short and correct, provided the probe itself
//! stays side-effect-free and cheap.

use abiguess_common::strings::encode_hex;
use alloy_dyn_abi::{DynSolType, DynSolValue};

/// Attempts to decode `data` as a tuple of `candidate_types`, forcing stringification of every
/// decoded value. Returns `true` iff both steps succeed.
pub(crate) fn test_params(candidate_types: &[DynSolType], data: &[u8]) -> bool {
    let tuple = DynSolType::Tuple(candidate_types.to_vec());
    match tuple.abi_decode(data) {
        Ok(value) => {
            let _ = stringify(&value);
            true
        }
        Err(_) => false,
    }
}

/// Decodes `data` against `candidate_types` and returns the decoded components, already
/// stringified once by the probe above, for callers that need the concrete values afterwards
/// (value-driven refinement needs to inspect leading/trailing zero bytes per word).
pub(crate) fn decode_values(candidate_types: &[DynSolType], data: &[u8]) -> Option<Vec<DynSolValue>> {
    let tuple = DynSolType::Tuple(candidate_types.to_vec());
    match tuple.abi_decode(data).ok()? {
        DynSolValue::Tuple(values) => Some(values),
        _ => None,
    }
}

/// Recursively renders a decoded value to a string, surfacing lazy validity checks (such as
/// UTF-8 validation on `string` values) that a shallow decode would leave unevaluated.
fn stringify(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Address(addr) => addr.to_string(),
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::String(s) => s.clone(),
        DynSolValue::Bytes(b) => encode_hex(b),
        DynSolValue::FixedBytes(b, size) => encode_hex(&b.as_slice()[..*size]),
        DynSolValue::Uint(u, _) => u.to_string(),
        DynSolValue::Int(i, _) => i.to_string(),
        DynSolValue::Array(items) | DynSolValue::FixedArray(items) => {
            items.iter().map(stringify).collect::<Vec<_>>().join(",")
        }
        DynSolValue::Tuple(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        _ => String::new(),
    }
}
