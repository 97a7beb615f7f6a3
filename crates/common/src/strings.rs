use eyre::{bail, Result};
use std::{fmt::Write, ops::Range};

/// Decodes a hex string into a vector of bytes.
///
/// ```
/// use abiguess_common::strings::decode_hex;
///
/// let hex = "48656c6c6f20576f726c64"; // "Hello World" in hex
/// let result = decode_hex(hex).expect("should decode hex");
/// assert_eq!(result, vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100]);
/// ```
pub fn decode_hex(mut s: &str) -> Result<Vec<u8>> {
    // normalize
    s = s.trim_start_matches("0x").trim();

    if s.is_empty() {
        return Ok(vec![]);
    }

    if s.len() % 2 != 0 {
        bail!("invalid hex string: '{}' has an odd number of digits", s);
    }

    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| eyre::eyre!("invalid hex string: {}", s))
}

/// Encodes a byte slice into a lowercase hex string, without a `0x` prefix.
///
/// ```
/// use abiguess_common::strings::encode_hex;
///
/// let bytes = vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100];
/// let result = encode_hex(&bytes);
/// assert_eq!(result, "48656c6c6f20576f726c64");
/// ```
pub fn encode_hex(s: &[u8]) -> String {
    s.iter().fold(String::new(), |mut acc, b| {
        write!(acc, "{b:02x}").expect("unable to write");
        acc
    })
}

/// Finds the span of a balanced pair of encapsulating characters (e.g. parens or brackets),
/// returning the range of the content *between* the pair.
///
/// ```
/// use abiguess_common::strings::find_balanced_encapsulator;
///
/// let s = "Hello (World)";
/// let result = find_balanced_encapsulator(s, ('(', ')')).expect("should find balanced encapsulator");
/// assert_eq!(result, (7..12));
/// assert_eq!(&s[result], "World");
/// ```
pub fn find_balanced_encapsulator(s: &str, encap: (char, char)) -> Result<Range<usize>> {
    let mut open = 0;
    let mut close = 0;
    let mut start = 0;
    let mut end = 0;
    for (i, c) in s.chars().enumerate() {
        if c == encap.0 {
            if open == 0 {
                start = i;
            }
            open += 1;
        } else if c == encap.1 {
            close += 1;
        }
        if open == close && open > 0 {
            end = i;
            break;
        }
    }

    if !(open == close && end > start && open > 0) {
        bail!("string '{}' doesn't contain balanced encapsulator {}{}.", s, encap.0, encap.1);
    }

    Ok(start + 1..end)
}
