//! UTF-8 bytes to UTF-16 code units.
//!
//! [`decode_utf8_sequence`] validates one sequence at the front of the input:
//! lead-byte class, continuation range, overlong forms, surrogate code points
//! and values above U+10FFFF. The length pass and the fill pass both step
//! through the input with it. On any failure exactly one byte is consumed and
//! one U+FFFD unit is produced.

use alloc::{vec, vec::Vec};

use bstr::ByteSlice;

use crate::{error::BufferTooSmall, replacement::REPLACEMENT_UTF16, surrogate};

const ASCII_END: u8 = 0x80;

const LEAD_TWO: u8 = 0xC0;
const LEAD_THREE: u8 = 0xE0;
const LEAD_FOUR: u8 = 0xF0;
const LEAD_END: u8 = 0xF8;

const MASK_TWO: u8 = 0x1F;
const MASK_THREE: u8 = 0x0F;
const MASK_FOUR: u8 = 0x07;
const CONT_MASK: u8 = 0x3F;

// Largest scalar value each shorter form can hold; anything at or below is
// overlong in the next form.
const MAX_ONE: u32 = 0x7F;
const MAX_TWO: u32 = 0x7FF;
const MAX_THREE: u32 = 0xFFFF;

/// Longest input excerpt rendered in trace output.
const TRACE_EXCERPT: usize = 64;

/// One step of UTF-8 input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Step {
    /// A well-formed sequence of `len` bytes encoding `scalar`.
    Valid {
        /// The decoded scalar value.
        scalar: u32,
        /// Bytes the sequence occupies.
        len: usize,
    },
    /// The byte at the front does not start a well-formed sequence.
    Invalid,
}

impl Utf8Step {
    /// Input bytes this step covers.
    #[inline]
    pub const fn consumed(self) -> usize {
        match self {
            Self::Valid { len, .. } => len,
            Self::Invalid => 1,
        }
    }

    /// UTF-16 units this step produces.
    #[inline]
    pub const fn utf16_len(self) -> usize {
        match self {
            Self::Valid { scalar, .. } => surrogate::utf16_len(scalar),
            Self::Invalid => 1,
        }
    }
}

#[inline]
const fn is_cont(b: u8) -> bool {
    b & 0xC0 == 0x80
}

#[inline]
fn payload(b: u8) -> u32 {
    u32::from(b & CONT_MASK)
}

/// Decodes the sequence at the front of `bytes`.
///
/// # Panics
///
/// Panics if `bytes` is empty.
#[inline]
pub fn decode_utf8_sequence(bytes: &[u8]) -> Utf8Step {
    let lead = bytes[0];
    match (lead, bytes.get(1..)) {
        (b, _) if b < ASCII_END => Utf8Step::Valid {
            scalar: u32::from(b),
            len: 1,
        },
        (LEAD_TWO..LEAD_THREE, Some(&[b1, ..])) if is_cont(b1) => {
            let scalar = u32::from(lead & MASK_TWO) << 6 | payload(b1);
            if scalar > MAX_ONE {
                Utf8Step::Valid { scalar, len: 2 }
            } else {
                Utf8Step::Invalid
            }
        }
        (LEAD_THREE..LEAD_FOUR, Some(&[b1, b2, ..])) if is_cont(b1) && is_cont(b2) => {
            let scalar = u32::from(lead & MASK_THREE) << 12 | payload(b1) << 6 | payload(b2);
            if scalar > MAX_TWO && !surrogate::is_surrogate(scalar) {
                Utf8Step::Valid { scalar, len: 3 }
            } else {
                Utf8Step::Invalid
            }
        }
        (LEAD_FOUR..LEAD_END, Some(&[b1, b2, b3, ..]))
            if is_cont(b1) && is_cont(b2) && is_cont(b3) =>
        {
            let scalar = u32::from(lead & MASK_FOUR) << 18
                | payload(b1) << 12
                | payload(b2) << 6
                | payload(b3);
            if scalar > MAX_THREE && scalar <= surrogate::MAX_SCALAR {
                Utf8Step::Valid { scalar, len: 4 }
            } else {
                Utf8Step::Invalid
            }
        }
        _ => Utf8Step::Invalid,
    }
}

/// Returns the exact number of units [`bytes_to_utf16`] produces for `bytes`.
///
/// Each malformed byte counts as one replacement unit.
///
/// ```rust
/// assert_eq!(utfconv::utf16_encoded_len(b"abc"), 3);
/// assert_eq!(utfconv::utf16_encoded_len("\u{1D11E}".as_bytes()), 2);
/// assert_eq!(utfconv::utf16_encoded_len(b"a\xE2\x00"), 3);
/// ```
pub fn utf16_encoded_len(bytes: &[u8]) -> usize {
    let ascii = bytes.iter().take_while(|&&b| b < ASCII_END).count();
    let mut n = ascii;
    let mut i = ascii;
    while i < bytes.len() {
        let step = decode_utf8_sequence(&bytes[i..]);
        i += step.consumed();
        n += step.utf16_len();
    }
    n
}

/// Converts UTF-8 bytes to UTF-16, replacing every byte that does not start
/// a well-formed sequence with U+FFFD.
pub fn bytes_to_utf16(bytes: &[u8]) -> Vec<u16> {
    let mut out = vec![0u16; utf16_encoded_len(bytes)];
    fill_utf16(bytes, &mut out);
    out
}

/// Converts UTF-8 bytes into a caller-provided buffer and returns the number
/// of units written.
///
/// # Errors
///
/// Returns [`BufferTooSmall`] without writing anything if `out` is shorter
/// than [`utf16_encoded_len`] of `bytes`.
pub fn bytes_to_utf16_into(bytes: &[u8], out: &mut [u16]) -> Result<usize, BufferTooSmall> {
    let n = utf16_encoded_len(bytes);
    BufferTooSmall::check(n, out.len())?;
    fill_utf16(bytes, &mut out[..n]);
    Ok(n)
}

/// Fills `out`, which must be exactly `utf16_encoded_len(bytes)` long.
pub(crate) fn fill_utf16(bytes: &[u8], out: &mut [u16]) -> usize {
    // Malformed bytes also map one-to-one, so equal lengths alone do not
    // prove the input is ASCII.
    if out.len() == bytes.len() && bytes.is_ascii() {
        for (dst, &b) in out.iter_mut().zip(bytes) {
            *dst = u16::from(b);
        }
        return out.len();
    }

    let mut i = 0;
    let mut n = 0;
    let mut replaced = 0usize;
    while i < bytes.len() {
        let step = decode_utf8_sequence(&bytes[i..]);
        match step {
            Utf8Step::Valid { scalar, .. } => {
                n += surrogate::encode_scalar(scalar, &mut out[n..]);
            }
            Utf8Step::Invalid => {
                out[n] = REPLACEMENT_UTF16;
                n += 1;
                replaced += 1;
            }
        }
        i += step.consumed();
    }

    debug_assert_eq!(n, out.len());
    if replaced > 0 {
        let excerpt = &bytes[..bytes.len().min(TRACE_EXCERPT)];
        log::trace!(
            target: "utfconv",
            "utf8 -> utf16: replaced {replaced} invalid byte(s) in {} bytes starting {:?}",
            bytes.len(),
            excerpt.as_bstr()
        );
    }
    n
}
