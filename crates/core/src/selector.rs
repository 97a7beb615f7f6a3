//! Splits a 4-byte selector off the front of calldata and synthesizes a function fragment from
//! the inferred parameter types of the remainder.

use abiguess_common::strings::encode_hex;

use crate::{
    decoder::Limits,
    format::format_type,
    pipeline::{guess_abi_encoded_data_with_limits, DEFAULT_MAX_CALLDATA_WORDS},
    types::GuessedFragment,
};

/// Infers a synthetic function fragment for selector-prefixed `calldata`, using the default
/// search limits. Returns `None` if `calldata` is empty or the remainder cannot be inferred.
pub fn guess_fragment(calldata: &[u8]) -> Option<GuessedFragment> {
    guess_fragment_with_limits(calldata, Limits::default(), DEFAULT_MAX_CALLDATA_WORDS)
}

/// As [`guess_fragment`], but threading explicit search limits from `abiguess-config`.
pub fn guess_fragment_with_limits(
    calldata: &[u8],
    limits: Limits,
    max_calldata_words: usize,
) -> Option<GuessedFragment> {
    if calldata.is_empty() {
        return None;
    }
    if calldata.len() < 4 {
        return None;
    }

    let selector = encode_hex(&calldata[..4]);
    let payload = &calldata[4..];
    let inputs = guess_abi_encoded_data_with_limits(payload, limits, max_calldata_words)?;

    let joined = inputs.iter().map(format_type).collect::<Vec<_>>().join(",");
    let name = format!("guessed_{selector}");
    let signature = format!("{name}({joined})");

    Some(GuessedFragment { name, signature, inputs })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_fragment_rejects_empty_calldata() {
        assert_eq!(guess_fragment(&[]), None);
    }

    #[test]
    fn test_guess_fragment_names_and_wraps_single_uint() {
        let mut calldata = vec![0xde, 0xad, 0xbe, 0xef];
        let mut word = vec![0u8; 32];
        word[31] = 0x2a;
        calldata.extend_from_slice(&word);

        let fragment = guess_fragment(&calldata).expect("should infer a fragment");
        assert_eq!(fragment.name, "guessed_deadbeef");
        assert_eq!(fragment.signature, "guessed_deadbeef(uint256)");
    }
}
