//! `&str` to UTF-16.
//!
//! A `str` already holds valid scalar values, so nothing here re-validates;
//! supplementary characters are split into surrogate pairs.

use alloc::{vec, vec::Vec};

use crate::{error::BufferTooSmall, surrogate};

const FOUR_BYTE_LEAD: u8 = 0xF0;

/// Returns the exact number of units [`str_to_utf16`] produces for `text`:
/// one per character plus one more per character above U+FFFF.
///
/// ```rust
/// assert_eq!(utfconv::utf16_encoded_len_str("abc"), 3);
/// assert_eq!(utfconv::utf16_encoded_len_str("\u{E9}\u{1F600}"), 3);
/// ```
pub fn utf16_encoded_len_str(text: &str) -> usize {
    if text.is_ascii() {
        return text.len();
    }
    text.bytes()
        .map(|b| usize::from(!is_continuation(b)) + usize::from(b >= FOUR_BYTE_LEAD))
        .sum()
}

#[inline]
const fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Converts `text` to UTF-16.
///
/// ```rust
/// assert_eq!(utfconv::str_to_utf16("\u{1D11E}"), [0xD834, 0xDD1E]);
/// ```
pub fn str_to_utf16(text: &str) -> Vec<u16> {
    let mut out = vec![0u16; utf16_encoded_len_str(text)];
    fill_utf16_from_str(text, &mut out);
    out
}

/// Converts `text` into a caller-provided buffer and returns the number of
/// units written.
///
/// # Errors
///
/// Returns [`BufferTooSmall`] without writing anything if `out` is shorter
/// than [`utf16_encoded_len_str`] of `text`.
pub fn str_to_utf16_into(text: &str, out: &mut [u16]) -> Result<usize, BufferTooSmall> {
    let n = utf16_encoded_len_str(text);
    BufferTooSmall::check(n, out.len())?;
    fill_utf16_from_str(text, &mut out[..n]);
    Ok(n)
}

/// Fills `out`, which must be exactly `utf16_encoded_len_str(text)` long.
pub(crate) fn fill_utf16_from_str(text: &str, out: &mut [u16]) -> usize {
    // Every multi-byte character yields fewer units than it has bytes.
    if out.len() == text.len() {
        for (dst, b) in out.iter_mut().zip(text.bytes()) {
            *dst = u16::from(b);
        }
        return out.len();
    }

    let mut n = 0;
    for c in text.chars() {
        n += surrogate::encode_scalar(u32::from(c), &mut out[n..]);
    }
    debug_assert_eq!(n, out.len());
    n
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", &[])]
    #[case("z", &[0x7A])]
    #[case("\u{6C34}", &[0x6C34])]
    #[case("\u{FEFF}", &[0xFEFF])]
    #[case("\u{FFFD}", &[0xFFFD])]
    #[case("\u{10000}", &[0xD800, 0xDC00])]
    #[case("\u{1D11E}", &[0xD834, 0xDD1E])]
    #[case("\u{10FFFD}", &[0xDBFF, 0xDFFD])]
    #[case("a\u{E9}\u{1F600}b", &[0x61, 0xE9, 0xD83D, 0xDE00, 0x62])]
    fn encodes(#[case] text: &str, #[case] expected: &[u16]) {
        assert_eq!(str_to_utf16(text), expected);
        assert_eq!(utf16_encoded_len_str(text), expected.len());
    }

    #[test]
    fn ascii_is_one_unit_per_byte() {
        let text = "The quick brown fox";
        assert_eq!(utf16_encoded_len_str(text), text.len());
        let units = str_to_utf16(text);
        assert!(units.iter().zip(text.bytes()).all(|(&u, b)| u == u16::from(b)));
    }

    #[test]
    fn agrees_with_core() {
        let text = "\u{65E5}a\u{672C}b\u{8A9E}\u{E7}\u{1F980}";
        let expected: Vec<u16> = text.encode_utf16().collect();
        assert_eq!(str_to_utf16(text), expected);
    }

    #[test]
    fn into_exact_and_short() {
        let mut out = [0u16; 2];
        assert_eq!(str_to_utf16_into("\u{1F600}", &mut out), Ok(2));
        assert_eq!(out, [0xD83D, 0xDE00]);

        let mut out = [0u16; 2];
        let err = str_to_utf16_into("abc", &mut out).unwrap_err();
        assert_eq!((err.required, err.available), (3, 2));
    }
}
