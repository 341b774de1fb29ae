use rstest::rstest;

use super::reference::decode_bytewise;
use crate::{REPLACEMENT_UTF16, bytes_to_utf16, bytes_to_utf16_into, utf16_encoded_len};

#[rstest]
// surrogate code points
#[case(b"\xED\xA0\x80\x80")]
#[case(b"\xED\xBF\xBF\x80")]
// stray continuation
#[case(b"\x91\x80\x80\x80")]
// two-byte leads
#[case(b"\xC2\x7F\x80\x80")]
#[case(b"\xC2\xC0\x80\x80")]
#[case(b"\xDF\x7F\x80\x80")]
#[case(b"\xDF\xC0\x80\x80")]
// E0: overlong below U+0800
#[case(b"\xE0\x9F\xBF\x80")]
#[case(b"\xE0\xA0\x7F\x80")]
#[case(b"\xE0\xBF\xC0\x80")]
#[case(b"\xE0\xC0\x80\x80")]
#[case(b"\xE1\x7F\xBF\x80")]
#[case(b"\xE1\x80\x7F\x80")]
#[case(b"\xE1\xBF\xC0\x80")]
#[case(b"\xE1\xC0\x80\x80")]
#[case(b"\xED\x7F\xBF\x80")]
#[case(b"\xED\x80\x7F\x80")]
#[case(b"\xED\x9F\xC0\x80")]
// F0: overlong below U+10000
#[case(b"\xF0\x8F\xBF\xBF")]
#[case(b"\xF0\x90\x7F\xBF")]
#[case(b"\xF0\x90\x80\x7F")]
#[case(b"\xF0\xBF\xBF\xC0")]
#[case(b"\xF0\xBF\xC0\x80")]
#[case(b"\xF0\xC0\x80\x80")]
#[case(b"\xF1\x7F\xBF\xBF")]
#[case(b"\xF1\x80\x7F\xBF")]
#[case(b"\xF1\x80\x80\x7F")]
#[case(b"\xF1\xBF\xBF\xC0")]
#[case(b"\xF1\xBF\xC0\x80")]
#[case(b"\xF1\xC0\x80\x80")]
// F4: above U+10FFFF
#[case(b"\xF4\x7F\xBF\xBF")]
#[case(b"\xF4\x80\x7F\xBF")]
#[case(b"\xF4\x80\x80\x7F")]
#[case(b"\xF4\x8F\xBF\xC0")]
#[case(b"\xF4\x8F\xC0\x80")]
#[case(b"\xF4\x90\x80\x80")]
fn invalid_sequence(#[case] bytes: &[u8]) {
    let expected = decode_bytewise(bytes);
    let units = bytes_to_utf16(bytes);

    assert_eq!(units, expected);
    assert_eq!(units[0], REPLACEMENT_UTF16);
    assert_eq!(utf16_encoded_len(bytes), expected.len());

    let mut out = [0u16; 4];
    assert_eq!(bytes_to_utf16_into(bytes, &mut out), Ok(expected.len()));
    assert_eq!(&out[..expected.len()], &expected[..]);
}

#[test]
fn every_single_byte() {
    for b in 0..=u8::MAX {
        let units = bytes_to_utf16(&[b]);
        let expected = if b.is_ascii() { u16::from(b) } else { REPLACEMENT_UTF16 };
        assert_eq!(units, [expected], "byte {b:#04x}");
    }
}
