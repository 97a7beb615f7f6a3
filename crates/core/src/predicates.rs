//! Gate functions that decide whether a word *could* be a dynamic-region pointer or length.
//!
//! Both are necessary conditions, not sufficient ones - the decoder treats a predicate's
//! success and failure as alternative branches to explore, not as a final verdict.

use crate::words::{read_word, word_to_safe_index, WORD_SIZE};

/// Reads the word at `pos` and checks whether it could plausibly be a pointer into the dynamic
/// region: forward-pointing, word-aligned, and strictly inside the buffer.
pub(crate) fn try_parse_offset(data: &[u8], pos: usize, safe_integer_bound: u64) -> Option<usize> {
    let word = read_word(data, pos);
    if word.is_empty() {
        return None;
    }
    let offset = word_to_safe_index(word, safe_integer_bound)?;
    if offset > pos && offset < data.len() && offset % WORD_SIZE == 0 {
        Some(offset)
    } else {
        None
    }
}

/// Reads the word at `offset` and checks whether it could plausibly be a length prefix: the
/// payload it describes must fit inside the buffer.
pub(crate) fn try_parse_length(
    data: &[u8],
    offset: usize,
    safe_integer_bound: u64,
) -> Option<usize> {
    let word = read_word(data, offset);
    if word.is_empty() {
        return None;
    }
    let length = word_to_safe_index(word, safe_integer_bound)?;
    let end = offset.checked_add(WORD_SIZE)?.checked_add(length)?;
    if end <= data.len() {
        Some(length)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_for(value: u64) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[24..].copy_from_slice(&value.to_be_bytes());
        word
    }

    #[test]
    fn test_try_parse_offset_accepts_word_aligned_forward_pointer() {
        let mut data = word_for(0x20).to_vec();
        data.extend_from_slice(&[0u8; 32]);
        assert_eq!(try_parse_offset(&data, 0, u64::MAX), Some(0x20));
    }

    #[test]
    fn test_try_parse_offset_rejects_unaligned_pointer() {
        let data = word_for(0x21).to_vec();
        assert_eq!(try_parse_offset(&data, 0, u64::MAX), None);
    }

    #[test]
    fn test_try_parse_offset_rejects_backward_pointer() {
        let mut data = word_for(0).to_vec();
        data.extend_from_slice(&word_for(0));
        assert_eq!(try_parse_offset(&data, 32, u64::MAX), None);
    }

    #[test]
    fn test_try_parse_length_rejects_length_past_buffer_end() {
        let mut data = word_for(5).to_vec();
        data.extend_from_slice(&[0u8; 10]);
        assert_eq!(try_parse_length(&data, 0, u64::MAX), None);
    }

    #[test]
    fn test_try_parse_length_accepts_exact_fit() {
        let mut data = word_for(5).to_vec();
        data.extend_from_slice(&[0u8; 32]);
        assert_eq!(try_parse_length(&data, 0, u64::MAX), Some(5));
    }
}
