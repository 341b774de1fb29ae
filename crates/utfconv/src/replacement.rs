//! How invalid input is represented in each target encoding.

/// The Unicode replacement character, U+FFFD.
pub const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// U+FFFD encoded as UTF-8.
pub const REPLACEMENT_UTF8: [u8; 3] = [0xEF, 0xBF, 0xBD];

/// Number of bytes a lone surrogate expands to in UTF-8 output.
pub const REPLACEMENT_UTF8_LEN: usize = REPLACEMENT_UTF8.len();

/// U+FFFD encoded as a single UTF-16 code unit.
pub const REPLACEMENT_UTF16: u16 = 0xFFFD;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_core() {
        assert_eq!(REPLACEMENT_CHAR, char::REPLACEMENT_CHARACTER);
        assert_eq!(REPLACEMENT_CHAR.len_utf8(), REPLACEMENT_UTF8_LEN);

        let mut utf8 = [0u8; 4];
        assert_eq!(REPLACEMENT_CHAR.encode_utf8(&mut utf8).as_bytes(), REPLACEMENT_UTF8);

        let mut utf16 = [0u16; 2];
        assert_eq!(REPLACEMENT_CHAR.encode_utf16(&mut utf16), [REPLACEMENT_UTF16]);
    }
}
