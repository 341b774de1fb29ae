#![no_main]
use libfuzzer_sys::fuzz_target;
use utfconv::classify::{Utf16Step, classify_utf16};

/// Every step consumes input and produces the bytes its class promises.
fn check_steps(units: &[u16]) {
    let mut i = 0;
    while i < units.len() {
        let step = classify_utf16(&units[i..]);
        assert!(step.consumed() >= 1 && i + step.consumed() <= units.len());
        assert!((1..=4).contains(&step.utf8_len()));
        if let Utf16Step::Pair(scalar) = step {
            assert!((0x1_0000..=0x10_FFFF).contains(&scalar));
        }
        i += step.consumed();
    }
}

fuzz_target!(|data: &[u8]| {
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();

    check_steps(&units);

    let len = utfconv::utf8_encoded_len(&units);
    let bytes = utfconv::utf16_to_utf8_bytes(&units);
    assert_eq!(bytes.len(), len);

    let string = utfconv::utf16_to_utf8_string(&units);
    assert_eq!(string, String::from_utf16_lossy(&units));
    assert_eq!(string.as_bytes(), &bytes[..]);

    let inline = utfconv::utf16_to_utf8_inline(&units);
    assert_eq!(&inline[..], &bytes[..]);

    let mut out = vec![0u8; len + 1];
    assert_eq!(utfconv::utf16_to_utf8_into(&units, &mut out), Ok(len));
    assert_eq!(&out[..len], &bytes[..]);
    if len > 0 {
        assert!(utfconv::utf16_to_utf8_into(&units, &mut out[..len - 1]).is_err());
    }
});
