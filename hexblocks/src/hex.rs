//! Hex text framing for payloads.
//!
//! Input text may be split by spaces and line breaks and use either case;
//! output is always contiguous lower-case digits with one trailing newline.

use crate::error::HexError;

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Decode hex text into bytes, ignoring spaces, `\n` and `\r`.
///
/// Positions in errors refer to the text after those characters are removed.
pub fn decode_hex_text(text: &[u8]) -> Result<Vec<u8>, HexError> {
    let digits: Vec<u8> = text
        .iter()
        .copied()
        .filter(|c| !matches!(c, b' ' | b'\n' | b'\r'))
        .collect();
    decode_hex(&digits)
}

/// Decode contiguous hex digits.
///
/// Invalid digits are reported before an odd length, so a trailing stray
/// character is named rather than counted.
pub fn decode_hex(digits: &[u8]) -> Result<Vec<u8>, HexError> {
    let mut out = Vec::with_capacity(digits.len() / 2);
    for (i, pair) in digits.chunks(2).enumerate() {
        let hi = hex_digit(pair[0]).ok_or_else(|| invalid(pair[0], i * 2))?;
        let Some(&lo) = pair.get(1) else {
            return Err(HexError::OddLength(digits.len()));
        };
        let lo = hex_digit(lo).ok_or_else(|| invalid(lo, i * 2 + 1))?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

/// Encode bytes as lower-case hex followed by a single newline.
pub fn encode_hex_text(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2 + 1);
    for &byte in bytes {
        s.push(HEX_CHARS[(byte >> 4) as usize] as char);
        s.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }
    s.push('\n');
    s
}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn invalid(c: u8, position: usize) -> HexError {
    HexError::InvalidDigit { digit: c, position }
}
