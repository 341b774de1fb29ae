//! UTF-16 code units to UTF-8 bytes.
//!
//! [`classify_utf16`] looks at the front of the remaining input and decides
//! what one step of conversion consumes and produces. Both
//! [`utf8_encoded_len`] and the fill pass walk the input with it, so the
//! reported length and the bytes written cannot disagree.
#![allow(clippy::cast_possible_truncation)]

use alloc::{string::String, vec, vec::Vec};

use crate::{
    error::BufferTooSmall,
    replacement::{REPLACEMENT_UTF8, REPLACEMENT_UTF8_LEN},
    surrogate,
};

const ASCII_END: u16 = 0x80;

// UTF-8 lead-byte tags and the continuation payload mask.
const TAG_CONT: u8 = 0x80;
const TAG_TWO: u8 = 0xC0;
const TAG_THREE: u8 = 0xE0;
const TAG_FOUR: u8 = 0xF0;
const CONT_MASK: u32 = 0x3F;

/// One step of UTF-16 input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf16Step {
    /// A unit outside the surrogate block, standing for itself.
    Unit(u16),
    /// A high surrogate immediately followed by a low surrogate.
    Pair(u32),
    /// A surrogate that is not part of a pair.
    Lone,
}

impl Utf16Step {
    /// Input units this step covers.
    #[inline]
    pub const fn consumed(self) -> usize {
        match self {
            Self::Pair(_) => 2,
            Self::Unit(_) | Self::Lone => 1,
        }
    }

    /// UTF-8 bytes this step produces.
    #[inline]
    pub const fn utf8_len(self) -> usize {
        match self {
            Self::Unit(u) if u < ASCII_END => 1,
            Self::Unit(u) if u <= 0x7FF => 2,
            Self::Unit(_) => 3,
            Self::Pair(_) => 4,
            Self::Lone => REPLACEMENT_UTF8_LEN,
        }
    }
}

/// Classifies the step at the front of `units`.
///
/// # Panics
///
/// Panics if `units` is empty.
#[inline]
pub fn classify_utf16(units: &[u16]) -> Utf16Step {
    let unit = units[0];
    if !surrogate::is_surrogate(u32::from(unit)) {
        return Utf16Step::Unit(unit);
    }
    match units.get(1) {
        Some(&low) if surrogate::is_high(unit) && surrogate::is_low(low) => {
            Utf16Step::Pair(surrogate::combine(unit, low))
        }
        _ => Utf16Step::Lone,
    }
}

/// Reports whether every unit is ASCII, in which case the UTF-8 output is one
/// byte per unit.
#[inline]
pub fn is_ascii_utf16(units: &[u16]) -> bool {
    units.iter().all(|&u| u < ASCII_END)
}

/// Returns the exact number of bytes [`utf16_to_utf8_bytes`] produces for
/// `units`. Lone surrogates count as the three bytes of U+FFFD.
///
/// ```rust
/// assert_eq!(utfconv::utf8_encoded_len(&[0x61, 0xE9, 0x20AC, 0xD834, 0xDD1E]), 10);
/// assert_eq!(utfconv::utf8_encoded_len(&[0xD800]), 3);
/// ```
pub fn utf8_encoded_len(units: &[u16]) -> usize {
    let ascii = units.iter().take_while(|&&u| u < ASCII_END).count();
    let mut n = ascii;
    let mut i = ascii;
    while i < units.len() {
        let step = classify_utf16(&units[i..]);
        i += step.consumed();
        n += step.utf8_len();
    }
    n
}

/// Converts UTF-16 to UTF-8 bytes, replacing lone surrogates with U+FFFD.
pub fn utf16_to_utf8_bytes(units: &[u16]) -> Vec<u8> {
    let mut out = vec![0u8; utf8_encoded_len(units)];
    fill_utf8(units, &mut out);
    out
}

/// Converts UTF-16 to a `String`, replacing lone surrogates with U+FFFD.
///
/// ```rust
/// let s = utfconv::utf16_to_utf8_string(&[0x68, 0x69, 0xDC00]);
/// assert_eq!(s, "hi\u{FFFD}");
/// ```
pub fn utf16_to_utf8_string(units: &[u16]) -> String {
    let bytes = utf16_to_utf8_bytes(units);
    debug_assert!(core::str::from_utf8(&bytes).is_ok());
    // SAFETY: `fill_utf8` only writes ASCII bytes, well-formed encodings of
    // scalar values taken from non-surrogate units or validated pairs, and
    // the encoding of U+FFFD.
    unsafe { String::from_utf8_unchecked(bytes) }
}

/// Converts UTF-16 into a caller-provided buffer and returns the number of
/// bytes written.
///
/// # Errors
///
/// Returns [`BufferTooSmall`] without writing anything if `out` is shorter
/// than [`utf8_encoded_len`] of `units`.
pub fn utf16_to_utf8_into(units: &[u16], out: &mut [u8]) -> Result<usize, BufferTooSmall> {
    let n = utf8_encoded_len(units);
    BufferTooSmall::check(n, out.len())?;
    fill_utf8(units, &mut out[..n]);
    Ok(n)
}

/// Fills `out`, which must be exactly `utf8_encoded_len(units)` long.
pub(crate) fn fill_utf8(units: &[u16], out: &mut [u8]) -> usize {
    // Every non-ASCII step produces more bytes than it consumes units.
    if out.len() == units.len() {
        for (dst, &unit) in out.iter_mut().zip(units) {
            *dst = unit as u8;
        }
        return out.len();
    }

    let mut i = 0;
    let mut n = 0;
    let mut replaced = 0usize;
    while i < units.len() {
        let step = classify_utf16(&units[i..]);
        let dst = &mut out[n..n + step.utf8_len()];
        match step {
            Utf16Step::Unit(u) => write_utf8(u32::from(u), dst),
            Utf16Step::Pair(scalar) => write_utf8(scalar, dst),
            Utf16Step::Lone => {
                dst.copy_from_slice(&REPLACEMENT_UTF8);
                replaced += 1;
            }
        }
        i += step.consumed();
        n += step.utf8_len();
    }

    debug_assert_eq!(n, out.len());
    if replaced > 0 {
        log::trace!(
            target: "utfconv",
            "utf16 -> utf8: replaced {replaced} lone surrogate(s) in {} units",
            units.len()
        );
    }
    n
}

/// Packs `scalar` into `dst`, whose length selects the encoding form.
#[inline]
fn write_utf8(scalar: u32, dst: &mut [u8]) {
    match dst {
        [a] => *a = scalar as u8,
        [a, b] => {
            *a = TAG_TWO | (scalar >> 6) as u8;
            *b = TAG_CONT | (scalar & CONT_MASK) as u8;
        }
        [a, b, c] => {
            *a = TAG_THREE | (scalar >> 12) as u8;
            *b = TAG_CONT | ((scalar >> 6) & CONT_MASK) as u8;
            *c = TAG_CONT | (scalar & CONT_MASK) as u8;
        }
        [a, b, c, d] => {
            *a = TAG_FOUR | (scalar >> 18) as u8;
            *b = TAG_CONT | ((scalar >> 12) & CONT_MASK) as u8;
            *c = TAG_CONT | ((scalar >> 6) & CONT_MASK) as u8;
            *d = TAG_CONT | (scalar & CONT_MASK) as u8;
        }
        _ => unreachable!("utf-8 forms are 1 to 4 bytes"),
    }
}
