//! Surrogate-pair arithmetic shared by every direction that produces or
//! consumes UTF-16.
#![allow(clippy::cast_possible_truncation)]

use crate::replacement::REPLACEMENT_UTF16;

// 0xD800..0xDC00 carries the high 10 bits of a pair, 0xDC00..0xE000 the low
// 10 bits. The pair's value is those 20 bits plus 0x10000.
pub(crate) const HIGH_START: u16 = 0xD800;
pub(crate) const LOW_START: u16 = 0xDC00;
pub(crate) const SURROGATE_END: u16 = 0xE000;

/// First scalar value that needs a surrogate pair.
pub(crate) const SUPPLEMENTARY_START: u32 = 0x1_0000;
/// Largest Unicode scalar value.
pub(crate) const MAX_SCALAR: u32 = 0x10_FFFF;

#[inline]
pub(crate) const fn is_high(unit: u16) -> bool {
    HIGH_START <= unit && unit < LOW_START
}

#[inline]
pub(crate) const fn is_low(unit: u16) -> bool {
    LOW_START <= unit && unit < SURROGATE_END
}

#[inline]
pub(crate) const fn is_surrogate(value: u32) -> bool {
    HIGH_START as u32 <= value && value < SURROGATE_END as u32
}

/// Joins a high/low pair into the scalar value it encodes. The caller has
/// already checked both halves.
#[inline]
pub(crate) const fn combine(high: u16, low: u16) -> u32 {
    let hi = (high - HIGH_START) as u32;
    let lo = (low - LOW_START) as u32;
    ((hi << 10) | lo) + SUPPLEMENTARY_START
}

/// Splits a supplementary scalar value (`0x10000..=0x10FFFF`) into its pair.
#[inline]
pub(crate) const fn split(scalar: u32) -> (u16, u16) {
    let v = scalar - SUPPLEMENTARY_START;
    (
        HIGH_START + ((v >> 10) & 0x3FF) as u16,
        LOW_START + (v & 0x3FF) as u16,
    )
}

/// Number of UTF-16 units `encode_scalar` writes for `scalar`.
#[inline]
pub(crate) const fn utf16_len(scalar: u32) -> usize {
    if SUPPLEMENTARY_START <= scalar && scalar <= MAX_SCALAR {
        2
    } else {
        1
    }
}

/// Writes `scalar` as UTF-16 at the front of `out` and returns the number of
/// units written. Surrogates and values above U+10FFFF become U+FFFD.
#[inline]
pub(crate) fn encode_scalar(scalar: u32, out: &mut [u16]) -> usize {
    match scalar {
        s if s < SUPPLEMENTARY_START && !is_surrogate(s) => {
            out[0] = s as u16;
            1
        }
        s if (SUPPLEMENTARY_START..=MAX_SCALAR).contains(&s) => {
            let (high, low) = split(s);
            out[0] = high;
            out[1] = low;
            2
        }
        _ => {
            out[0] = REPLACEMENT_UTF16;
            1
        }
    }
}
