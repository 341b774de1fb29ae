#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utfconv::classify::{Utf8Step, decode_utf8_sequence};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    bytes: &'a [u8],
    /// Extra room given to the `_into` destination.
    slack: u8,
}

/// Valid steps agree with `core::str::from_utf8` on the same bytes.
fn check_steps(bytes: &[u8]) {
    let mut i = 0;
    while i < bytes.len() {
        let step = decode_utf8_sequence(&bytes[i..]);
        match step {
            Utf8Step::Valid { scalar, len } => {
                let s = core::str::from_utf8(&bytes[i..i + len]).expect("valid step");
                let mut chars = s.chars();
                assert_eq!(chars.next().map(u32::from), Some(scalar));
                assert_eq!(chars.next(), None);
            }
            Utf8Step::Invalid => {
                assert!(core::str::from_utf8(&bytes[i..=i]).is_err());
            }
        }
        i += step.consumed();
    }
}

fn convert(input: Input<'_>) {
    let bytes = input.bytes;
    check_steps(bytes);

    let len = utfconv::utf16_encoded_len(bytes);
    let units = utfconv::bytes_to_utf16(bytes);
    assert_eq!(units.len(), len);

    // Output never contains a lone surrogate, so it round-trips.
    let back = utfconv::utf16_to_utf8_bytes(&units);
    assert_eq!(utfconv::bytes_to_utf16(&back), units);

    if let Ok(text) = core::str::from_utf8(bytes) {
        let expected: Vec<u16> = text.encode_utf16().collect();
        assert_eq!(units, expected);
        assert_eq!(utfconv::str_to_utf16(text), expected);
        assert_eq!(utfconv::utf16_encoded_len_str(text), len);
        assert_eq!(back, bytes);
    }

    let mut out = vec![0u16; len + usize::from(input.slack)];
    assert_eq!(utfconv::bytes_to_utf16_into(bytes, &mut out), Ok(len));
    assert_eq!(&out[..len], &units[..]);
}

fuzz_target!(|input: Input<'_>| convert(input));
