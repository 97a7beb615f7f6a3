//! Top-level entry points: run the backtracking decoder, then refine its raw candidate list
//! against the concrete values the codec produced.

use alloy_dyn_abi::DynSolType;
use tracing::{debug, trace};

use crate::{
    decoder::{decode_well_formed_tuple, Limits},
    probe::decode_values,
    refine::pretty_types,
    words::WORD_SIZE,
};

/// Refuse to search calldata longer than this many 32-byte words by default.
pub const DEFAULT_MAX_CALLDATA_WORDS: usize = 4096;

/// Infers the parameter type list for a canonical ABI-encoded tuple payload, using the default
/// search limits.
pub fn guess_abi_encoded_data(data: &[u8]) -> Option<Vec<DynSolType>> {
    guess_abi_encoded_data_with_limits(data, Limits::default(), DEFAULT_MAX_CALLDATA_WORDS)
}

/// As [`guess_abi_encoded_data`], but threading explicit search limits in from the caller
/// instead of the library defaults - the engine itself stays configuration-free.
pub fn guess_abi_encoded_data_with_limits(
    data: &[u8],
    limits: Limits,
    max_calldata_words: usize,
) -> Option<Vec<DynSolType>> {
    if data.len().div_ceil(WORD_SIZE) > max_calldata_words {
        debug!(
            "refusing to search {} bytes of calldata: exceeds the {}-word limit",
            data.len(),
            max_calldata_words
        );
        return None;
    }

    trace!("searching {} bytes of calldata for a well-formed type list", data.len());
    let raw_types =
        decode_well_formed_tuple(data, 0, Vec::new(), data.len(), None, None, &limits)?;
    debug!("found candidate type list: {:?}", raw_types);
    let values = decode_values(&raw_types, data)?;

    Some(pretty_types(&raw_types, &values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_abi_encoded_data_empty_input_yields_empty_list() {
        assert_eq!(guess_abi_encoded_data(&[]), Some(Vec::new()));
    }

    #[test]
    fn test_guess_abi_encoded_data_single_uint() {
        let mut data = vec![0u8; 32];
        data[31] = 0x2a;
        assert_eq!(guess_abi_encoded_data(&data), Some(vec![DynSolType::Uint(256)]));
    }

    #[test]
    fn test_guess_abi_encoded_data_address_then_uint() {
        let mut data = vec![0u8; 32];
        data[12..32].copy_from_slice(&[0xAAu8; 20]);
        let mut second = vec![0u8; 32];
        second[31] = 7;
        data.extend_from_slice(&second);

        assert_eq!(
            guess_abi_encoded_data(&data),
            Some(vec![DynSolType::Address, DynSolType::Uint(256)])
        );
    }

    #[test]
    fn test_guess_abi_encoded_data_single_string() {
        let mut data = vec![0u8; 32];
        data[31] = 0x20;
        let mut len_word = vec![0u8; 32];
        len_word[31] = 5;
        data.extend_from_slice(&len_word);
        let mut payload = vec![0u8; 32];
        payload[..5].copy_from_slice(b"hello");
        data.extend_from_slice(&payload);

        assert_eq!(guess_abi_encoded_data(&data), Some(vec![DynSolType::String]));
    }

    #[test]
    fn test_guess_abi_encoded_data_dynamic_non_utf8_bytes() {
        let mut data = vec![0u8; 32];
        data[31] = 0x20;
        let mut len_word = vec![0u8; 32];
        len_word[31] = 5;
        data.extend_from_slice(&len_word);
        let mut payload = vec![0u8; 32];
        payload[..5].copy_from_slice(&[0xff, 0xfe, 0xfd, 0xfc, 0xfb]);
        data.extend_from_slice(&payload);

        assert_eq!(guess_abi_encoded_data(&data), Some(vec![DynSolType::Bytes]));
    }

    #[test]
    fn test_guess_abi_encoded_data_uint_array() {
        let mut data = vec![0u8; 32];
        data[31] = 0x20;
        let mut len_word = vec![0u8; 32];
        len_word[31] = 3;
        data.extend_from_slice(&len_word);
        for v in [1u8, 2, 3] {
            let mut w = vec![0u8; 32];
            w[31] = v;
            data.extend_from_slice(&w);
        }

        assert_eq!(
            guess_abi_encoded_data(&data),
            Some(vec![DynSolType::Array(Box::new(DynSolType::Uint(256)))])
        );
    }

    #[test]
    fn test_guess_abi_encoded_data_rejects_oversized_calldata() {
        let data = vec![0u8; 64];
        assert_eq!(guess_abi_encoded_data_with_limits(&data, Limits::default(), 1), None);
    }

    // Exercises the Consistency & Ranking component end to end: a `string[]` candidate
    // competes against the array-of-dynamic-no-length and array-of-static interpretations of
    // the same bytes, and must win on shortest formatted signature.
    #[test]
    fn test_guess_abi_encoded_data_array_of_strings() {
        fn word_u64(v: u64) -> Vec<u8> {
            let mut w = vec![0u8; 32];
            w[24..].copy_from_slice(&v.to_be_bytes());
            w
        }
        fn ascii_word(s: &str) -> Vec<u8> {
            let mut w = vec![0u8; 32];
            w[..s.len()].copy_from_slice(s.as_bytes());
            w
        }

        let mut data = word_u64(0x20); // offset to the array
        data.extend_from_slice(&word_u64(2)); // array length: 2 elements
        data.extend_from_slice(&word_u64(0x40)); // elem0 offset, relative to element area
        data.extend_from_slice(&word_u64(0x80)); // elem1 offset, relative to element area
        data.extend_from_slice(&word_u64(1)); // elem0 length
        data.extend_from_slice(&ascii_word("a")); // elem0 data
        data.extend_from_slice(&word_u64(2)); // elem1 length
        data.extend_from_slice(&ascii_word("bb")); // elem1 data

        assert_eq!(
            guess_abi_encoded_data(&data),
            Some(vec![DynSolType::Array(Box::new(DynSolType::String))])
        );
    }
}
