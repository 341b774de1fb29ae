//! Lossy conversion between UTF-16 code units and UTF-8 bytes.
//!
//! Every conversion runs in two matched passes. A length pass scans the input
//! and reports exactly how many output units are needed; the fill pass then
//! writes into a buffer of that size using the same per-sequence
//! classification. Malformed input never fails a conversion: lone surrogates
//! and invalid UTF-8 bytes are replaced with U+FFFD.
//!
//! ```rust
//! use utfconv::{bytes_to_utf16, str_to_utf16, utf16_to_utf8_string};
//!
//! let units = str_to_utf16("clef \u{1D11E}");
//! assert_eq!(&units[5..], &[0xD834, 0xDD1E]);
//! assert_eq!(utf16_to_utf8_string(&units), "clef \u{1D11E}");
//!
//! // A truncated three-byte sequence costs one replacement per bad byte.
//! assert_eq!(bytes_to_utf16(b"a\xE2\x00"), [0x61, 0xFFFD, 0x00]);
//! ```
//!
//! Short conversions can stay on the stack with the `_inline` variants, and
//! the `_into` variants write into caller-owned buffers:
//!
//! ```rust
//! use utfconv::{utf16_to_utf8_into, utf8_encoded_len};
//!
//! let units = [0x68, 0x69, 0xD800];
//! let mut out = [0u8; 8];
//! let n = utf16_to_utf8_into(&units, &mut out).unwrap();
//! assert_eq!(n, utf8_encoded_len(&units));
//! assert_eq!(&out[..n], b"hi\xEF\xBF\xBD");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod inline;
mod replacement;
mod str_to_utf16;
mod surrogate;
mod utf16_to_utf8;
mod utf8_to_utf16;

#[cfg(test)]
mod tests;

pub use error::BufferTooSmall;
pub use inline::{INLINE_UTF8_BYTES, INLINE_UTF16_UNITS, str_to_utf16_inline, utf16_to_utf8_inline};
pub use replacement::{REPLACEMENT_CHAR, REPLACEMENT_UTF8, REPLACEMENT_UTF8_LEN, REPLACEMENT_UTF16};
pub use str_to_utf16::{str_to_utf16, str_to_utf16_into, utf16_encoded_len_str};
pub use utf16_to_utf8::{
    is_ascii_utf16, utf8_encoded_len, utf16_to_utf8_bytes, utf16_to_utf8_into,
    utf16_to_utf8_string,
};
pub use utf8_to_utf16::{bytes_to_utf16, bytes_to_utf16_into, utf16_encoded_len};

/// Single-sequence classifiers, exposed for fuzzing.
#[cfg(feature = "fuzzing")]
#[doc(hidden)]
pub mod classify {
    pub use crate::utf8_to_utf16::{Utf8Step, decode_utf8_sequence};
    pub use crate::utf16_to_utf8::{Utf16Step, classify_utf16};
}
