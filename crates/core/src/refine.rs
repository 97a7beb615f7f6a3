//! Post-refinement: reconciling parallel type branches into a common type, and sharpening
//! generic word-sized placeholders into narrower types using the shape of the concrete decoded
//! values.

use std::collections::HashSet;

use alloy_dyn_abi::{DynSolType, DynSolValue};

use crate::{
    format::format_type,
    words::{leading_zeros, trailing_zeros},
};

/// Merges a set of descriptors that are expected to agree - parallel tuple components or array
/// elements observed independently - into a single common type.
pub(crate) fn merge_types(types: &[DynSolType]) -> DynSolType {
    match types {
        [] => DynSolType::FixedBytes(32),
        [single] => single.clone(),
        _ => {
            if types.iter().any(|t| matches!(t, DynSolType::Tuple(_))) {
                let arity = types
                    .iter()
                    .filter_map(|t| match t {
                        DynSolType::Tuple(components) => Some(components.len()),
                        _ => None,
                    })
                    .max()
                    .unwrap_or(0);

                let merged = (0..arity)
                    .map(|i| {
                        let column: Vec<DynSolType> = types
                            .iter()
                            .filter_map(|t| match t {
                                DynSolType::Tuple(components) => components.get(i).cloned(),
                                _ => None,
                            })
                            .collect();
                        merge_types(&column)
                    })
                    .collect();
                return DynSolType::Tuple(merged);
            }

            if types.iter().any(|t| matches!(t, DynSolType::Array(_) | DynSolType::FixedArray(_, _))) {
                let elements: Vec<DynSolType> = types
                    .iter()
                    .filter_map(|t| match t {
                        DynSolType::Array(inner) | DynSolType::FixedArray(inner, _) => {
                            Some((**inner).clone())
                        }
                        _ => None,
                    })
                    .collect();
                return DynSolType::Array(Box::new(merge_types(&elements)));
            }

            let formats: HashSet<String> = types.iter().map(format_type).collect();
            if formats.len() == 1 {
                return types[0].clone();
            }
            if formats.contains("bytes") {
                DynSolType::Bytes
            } else if formats.contains("uint256") {
                DynSolType::Uint(256)
            } else {
                DynSolType::FixedBytes(32)
            }
        }
    }
}

/// Refines a resolved type list using the concrete values the codec decoded, sharpening generic
/// `bytes32`/`bytes` placeholders into `address`, `uintN`, `bytesN`, or `string`.
pub(crate) fn pretty_types(types: &[DynSolType], values: &[DynSolValue]) -> Vec<DynSolType> {
    types.iter().zip(values.iter()).map(|(ty, value)| refine_value(ty, value)).collect()
}

fn refine_value(ty: &DynSolType, value: &DynSolValue) -> DynSolType {
    match (ty, value) {
        (DynSolType::FixedBytes(32), DynSolValue::FixedBytes(word, 32)) => {
            refine_word(word.as_slice())
        }
        (DynSolType::Bytes, DynSolValue::Bytes(bytes)) => {
            if std::str::from_utf8(bytes).is_ok() {
                DynSolType::String
            } else {
                DynSolType::Bytes
            }
        }
        (DynSolType::Array(elem_ty), DynSolValue::Array(items) | DynSolValue::FixedArray(items)) => {
            let refined: Vec<DynSolType> = items.iter().map(|v| refine_value(elem_ty, v)).collect();
            DynSolType::Array(Box::new(merge_types(&refined)))
        }
        (DynSolType::Tuple(component_types), DynSolValue::Tuple(component_values)) => {
            DynSolType::Tuple(
                component_types
                    .iter()
                    .zip(component_values.iter())
                    .map(|(t, v)| refine_value(t, v))
                    .collect(),
            )
        }
        _ => ty.clone(),
    }
}

fn refine_word(word: &[u8]) -> DynSolType {
    let lz = leading_zeros(word);
    let tz = trailing_zeros(word);
    if (12..=17).contains(&lz) {
        DynSolType::Address
    } else if lz > 16 {
        DynSolType::Uint(256)
    } else if tz > 0 {
        DynSolType::FixedBytes(32 - tz)
    } else {
        DynSolType::FixedBytes(32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::FixedBytes;

    fn fixed_word(bytes: [u8; 32]) -> DynSolValue {
        DynSolValue::FixedBytes(FixedBytes::from(bytes), 32)
    }

    #[test]
    fn test_refine_word_address_heuristic() {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&[0xAAu8; 20]);
        let refined = refine_value(&DynSolType::FixedBytes(32), &fixed_word(word));
        assert_eq!(refined, DynSolType::Address);
    }

    #[test]
    fn test_refine_word_uint256_heuristic() {
        let mut word = [0u8; 32];
        word[31] = 0x2a;
        let refined = refine_value(&DynSolType::FixedBytes(32), &fixed_word(word));
        assert_eq!(refined, DynSolType::Uint(256));
    }

    #[test]
    fn test_refine_word_bytesn_heuristic() {
        let mut word = [0u8; 32];
        word[0] = 0xff;
        let refined = refine_value(&DynSolType::FixedBytes(32), &fixed_word(word));
        assert_eq!(refined, DynSolType::FixedBytes(31));
    }

    #[test]
    fn test_refine_bytes_to_string_when_utf8() {
        let refined =
            refine_value(&DynSolType::Bytes, &DynSolValue::Bytes(b"hello".to_vec()));
        assert_eq!(refined, DynSolType::String);
    }

    #[test]
    fn test_refine_bytes_stays_bytes_when_not_utf8() {
        let refined =
            refine_value(&DynSolType::Bytes, &DynSolValue::Bytes(vec![0xff, 0xfe]));
        assert_eq!(refined, DynSolType::Bytes);
    }

    #[test]
    fn test_merge_types_mismatched_words_falls_back_to_bytes32() {
        let merged = merge_types(&[DynSolType::Address, DynSolType::Uint(256)]);
        assert_eq!(merged, DynSolType::FixedBytes(32));
    }

    #[test]
    fn test_merge_types_prefers_bytes_over_uint() {
        let merged = merge_types(&[DynSolType::Bytes, DynSolType::Uint(256)]);
        assert_eq!(merged, DynSolType::Bytes);
    }

    #[test]
    fn test_merge_types_identical_set_passes_through() {
        let merged = merge_types(&[DynSolType::String, DynSolType::String]);
        assert_eq!(merged, DynSolType::String);
    }
}
