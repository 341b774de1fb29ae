//! Stack-backed outputs for short conversions.
//!
//! Outputs up to the inline capacity live inside the returned value; longer
//! ones spill to a single heap allocation of the exact converted length.

use smallvec::SmallVec;

use crate::{
    str_to_utf16::{fill_utf16_from_str, utf16_encoded_len_str},
    utf16_to_utf8::{fill_utf8, utf8_encoded_len},
};

/// Bytes [`utf16_to_utf8_inline`] keeps on the stack.
pub const INLINE_UTF8_BYTES: usize = 32;

/// Units [`str_to_utf16_inline`] keeps on the stack.
pub const INLINE_UTF16_UNITS: usize = 32;

/// Like [`crate::utf16_to_utf8_bytes`], without allocating for outputs of at
/// most [`INLINE_UTF8_BYTES`] bytes.
///
/// ```rust
/// let out = utfconv::utf16_to_utf8_inline(&[0x6F, 0x6B]);
/// assert!(!out.spilled());
/// assert_eq!(&out[..], b"ok");
/// ```
pub fn utf16_to_utf8_inline(units: &[u16]) -> SmallVec<[u8; INLINE_UTF8_BYTES]> {
    let mut out = SmallVec::from_elem(0, utf8_encoded_len(units));
    fill_utf8(units, &mut out);
    out
}

/// Like [`crate::str_to_utf16`], without allocating for outputs of at most
/// [`INLINE_UTF16_UNITS`] units. Useful for short strings handed to
/// wide-character APIs.
pub fn str_to_utf16_inline(text: &str) -> SmallVec<[u16; INLINE_UTF16_UNITS]> {
    let mut out = SmallVec::from_elem(0, utf16_encoded_len_str(text));
    fill_utf16_from_str(text, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::{str_to_utf16, utf16_to_utf8_bytes};

    #[test]
    fn short_output_stays_inline() {
        let units = str_to_utf16_inline("C:\\Windows\\\u{1F600}");
        assert!(!units.spilled());
        assert_eq!(&units[..], &str_to_utf16("C:\\Windows\\\u{1F600}")[..]);

        let bytes = utf16_to_utf8_inline(&units);
        assert!(!bytes.spilled());
        assert_eq!(&bytes[..], "C:\\Windows\\\u{1F600}".as_bytes());
    }

    #[test]
    fn boundary_and_spill() {
        let exact: Vec<u16> = core::iter::repeat_n(0x20AC, INLINE_UTF8_BYTES / 3).collect();
        let out = utf16_to_utf8_inline(&exact);
        assert_eq!(out.len(), 30);
        assert!(!out.spilled());

        let long: Vec<u16> = core::iter::repeat_n(0x20AC, 100).collect();
        let out = utf16_to_utf8_inline(&long);
        assert!(out.spilled());
        assert_eq!(&out[..], &utf16_to_utf8_bytes(&long)[..]);

        let text = "x".repeat(INLINE_UTF16_UNITS + 1);
        assert!(str_to_utf16_inline(&text).spilled());
        assert!(!str_to_utf16_inline(&text[1..]).spilled());
    }
}
