//! The recursive backtracking search. Walks the static region word-by-word, classifying each
//! slot as a dynamic pointer (with or without a following length) or a static word, then
//! resolves every dynamic placeholder once the static region is fully accounted for.
//!
//! The search is expressed as mutually recursive calls over immutable, cloned frames rather
//! than an explicit tree - each speculative branch forks by extending a fresh copy of the
//! collected parameter list. That is wasteful for pathological inputs but keeps the algorithm
//! a straightforward translation of the recursive-case/base-case description it follows, and
//! candidate lists stay small relative to `max_calldata_words`.

use alloy_dyn_abi::DynSolType;

use crate::{
    format::format_type,
    predicates::{try_parse_length, try_parse_offset},
    probe::test_params,
    types::{Decoded, Placeholder},
    words::{read_word, trailing_zeros, WORD_SIZE},
};

/// Search limits threaded down from the CLI/config layer. The engine itself never reads
/// configuration directly - see `abiguess-config::Configuration`.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// The upper bound a decoded word must stay under to be treated as a plausible offset or
    /// length.
    pub safe_integer_bound: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Limits { safe_integer_bound: u64::MAX }
    }
}

/// Attempts to find a well-formed ABI tuple type list that decodes `data` and whose decoded
/// values pass the codec probe. Returns `None` if every branch of the search is exhausted.
pub(crate) fn decode_well_formed_tuple(
    data: &[u8],
    param_idx: usize,
    collected: Vec<Decoded>,
    end_of_static: usize,
    expected_length: Option<usize>,
    is_dynamic_array_element: Option<bool>,
    limits: &Limits,
) -> Option<Vec<DynSolType>> {
    let param_offset = param_idx * WORD_SIZE;

    if param_offset < end_of_static {
        // Branch 1: dynamic parameter with an explicit length prefix (string, bytes, T[]).
        if matches!(is_dynamic_array_element, None | Some(true)) {
            if let Some(off) = try_parse_offset(data, param_offset, limits.safe_integer_bound) {
                if let Some(len) = try_parse_length(data, off, limits.safe_integer_bound) {
                    let mut next = collected.clone();
                    next.push(Decoded::Placeholder(Placeholder { offset: off, length: Some(len) }));
                    if let Some(result) = decode_well_formed_tuple(
                        data,
                        param_idx + 1,
                        next,
                        end_of_static.min(off),
                        expected_length,
                        is_dynamic_array_element,
                        limits,
                    ) {
                        return Some(result);
                    }
                }
            }
        }

        // Branch 2: dynamic parameter with no length prefix (a static tuple or static array
        // living out-of-line).
        if matches!(is_dynamic_array_element, None | Some(false)) {
            if let Some(off) = try_parse_offset(data, param_offset, limits.safe_integer_bound) {
                let mut next = collected.clone();
                next.push(Decoded::Placeholder(Placeholder { offset: off, length: None }));
                if let Some(result) = decode_well_formed_tuple(
                    data,
                    param_idx + 1,
                    next,
                    end_of_static.min(off),
                    expected_length,
                    is_dynamic_array_element,
                    limits,
                ) {
                    return Some(result);
                }
            }
        }

        // Branch 3: an ordinary static word. Array elements must be uniformly dynamic or
        // uniformly static, so this branch is only available outside an array-element frame.
        if is_dynamic_array_element.is_none() && !read_word(data, param_offset).is_empty() {
            let mut next = collected.clone();
            next.push(Decoded::Resolved(DynSolType::FixedBytes(32)));
            if let Some(result) = decode_well_formed_tuple(
                data,
                param_idx + 1,
                next,
                end_of_static,
                expected_length,
                is_dynamic_array_element,
                limits,
            ) {
                return Some(result);
            }
        }

        return None;
    }

    // Base case: the static region is exhausted.
    if let Some(expected) = expected_length {
        if collected.len() != expected {
            return None;
        }
    }

    let mut resolved = Vec::with_capacity(collected.len());
    for i in 0..collected.len() {
        match &collected[i] {
            Decoded::Resolved(ty) => resolved.push(ty.clone()),
            Decoded::Placeholder(_) => resolved.push(resolve_placeholder(data, &collected, i, limits)?),
        }
    }

    if test_params(&resolved, data) {
        Some(resolved)
    } else {
        None
    }
}

/// Resolves the placeholder at `index` against the dynamic tail of `data`, per the layout rules
/// in the byte-layout assumptions: non-overlapping regions laid out in pointer order, with only
/// the trailing region permitted implicit right-padding.
fn resolve_placeholder(
    data: &[u8],
    collected: &[Decoded],
    index: usize,
    limits: &Limits,
) -> Option<DynSolType> {
    let placeholder = match &collected[index] {
        Decoded::Placeholder(p) => p.clone(),
        Decoded::Resolved(_) => return None,
    };

    let next_offset = collected[index + 1..].iter().find_map(|d| match d {
        Decoded::Placeholder(p) => Some(p.offset),
        Decoded::Resolved(_) => None,
    });
    let is_trailing = next_offset.is_none();

    let payload_start = match placeholder.length {
        Some(_) => placeholder.offset.checked_add(WORD_SIZE)?,
        None => placeholder.offset,
    };
    let payload_end = next_offset.unwrap_or(data.len());
    if payload_start > payload_end || payload_end > data.len() {
        return None;
    }
    let payload = &data[payload_start..payload_end];

    match placeholder.length {
        None => {
            // Neither a static tuple nor a static array needs a length prefix.
            let fields =
                decode_well_formed_tuple(payload, 0, Vec::new(), payload.len(), None, None, limits)?;
            Some(DynSolType::Tuple(fields))
        }
        Some(0) => {
            // Ambiguous between empty bytes/string and an empty dynamic array.
            Some(DynSolType::Array(Box::new(DynSolType::Tuple(Vec::new()))))
        }
        Some(length) => {
            let is_byte_string = length == payload.len()
                || (payload.len() % WORD_SIZE == 0
                    && length == payload.len().saturating_sub(trailing_zeros(payload)));
            if is_byte_string {
                return Some(DynSolType::Bytes);
            }

            resolve_array(payload, length, is_trailing, limits)
        }
    }
}

/// Resolves a dynamic payload of `length` elements by trying the three interpretations allowed
/// for an array region, filtering to the ones whose element types are internally consistent,
/// and ranking the survivors by shortest formatted signature.
fn resolve_array(
    payload: &[u8],
    length: usize,
    is_trailing: bool,
    limits: &Limits,
) -> Option<DynSolType> {
    let mut candidates: Vec<DynSolType> = Vec::new();

    // (a) array of dynamic elements, each carrying its own length prefix (e.g. `string[]`).
    if let Some(elements) = decode_well_formed_tuple(
        payload,
        0,
        Vec::new(),
        payload.len(),
        Some(length),
        Some(true),
        limits,
    ) {
        if let Some(element) = homogeneous_element(&elements) {
            candidates.push(element);
        }
    }

    // (b) array of dynamic elements with no element-level length (e.g. `(uint,string)[]`).
    if let Some(elements) = decode_well_formed_tuple(
        payload,
        0,
        Vec::new(),
        payload.len(),
        Some(length),
        Some(false),
        limits,
    ) {
        if let Some(element) = homogeneous_element(&elements) {
            candidates.push(element);
        }
    }

    // (c) array of static elements, each occupying an equal number of whole words.
    if let Some(element) = resolve_static_array_element(payload, length, is_trailing, limits) {
        candidates.push(element);
    }

    let best = candidates.into_iter().min_by_key(|ty| format_type(ty).len())?;
    Some(DynSolType::Array(Box::new(best)))
}

fn resolve_static_array_element(
    payload: &[u8],
    length: usize,
    is_trailing: bool,
    limits: &Limits,
) -> Option<DynSolType> {
    if length == 0 {
        return None;
    }
    let num_words = payload.len() / WORD_SIZE;
    if num_words == 0 {
        return None;
    }
    if num_words % length != 0 && !is_trailing {
        return None;
    }
    let words_per_element = num_words / length;
    if words_per_element == 0 {
        return None;
    }

    let mut elements = Vec::with_capacity(length);
    for i in 0..length {
        let start = i * words_per_element * WORD_SIZE;
        let end = start + words_per_element * WORD_SIZE;
        if end > payload.len() {
            return None;
        }
        let chunk = &payload[start..end];
        let fields =
            decode_well_formed_tuple(chunk, 0, Vec::new(), chunk.len(), None, None, limits)?;
        let element = if fields.len() > 1 {
            DynSolType::Tuple(fields)
        } else {
            fields.into_iter().next()?
        };
        elements.push(element);
    }

    homogeneous_element(&elements)
}

/// Verifies that every element type descriptor formats identically - arrays are homogeneous by
/// ABI definition - and returns the common type if so.
fn homogeneous_element(types: &[DynSolType]) -> Option<DynSolType> {
    let first = types.first()?;
    let formatted = format_type(first);
    if types.iter().all(|t| format_type(t) == formatted) {
        Some(first.clone())
    } else {
        None
    }
}
