#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use jsonstr::{Cursor, TextCursor, display_string, escape_string, escape_string_unquoted, parse_string};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    units: Vec<u16>,
    include_non_ascii: bool,
    max_chars: u8,
}

fn roundtrip(data: &[u8]) {
    let Ok(input) = Input::arbitrary(&mut Unstructured::new(data)) else {
        return;
    };

    let escaped = escape_string(&input.units, input.include_non_ascii);
    let mut cursor = TextCursor::with_index(&escaped, 1);
    let decoded = parse_string(&mut cursor).expect("escaped output must decode");
    assert_eq!(&*decoded, &input.units[..]);
    assert!(cursor.is_at_end());

    let unquoted = escape_string_unquoted(&input.units, input.include_non_ascii);
    assert_eq!(&*unquoted, &escaped[1..escaped.len() - 1]);

    let display = display_string(&input.units, usize::from(input.max_chars));
    assert_eq!(display.first(), Some(&u16::from(b'"')));
    assert_eq!(display.last(), Some(&u16::from(b'"')));
}

fuzz_target!(|data: &[u8]| roundtrip(data));
