#![no_main]
use jsonstr::{Cursor, TextCursor, parse_string};
use libfuzzer_sys::fuzz_target;

fn decode(data: &[u8]) {
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let mut cursor = TextCursor::new(&units);
    if let Ok(decoded) = parse_string(&mut cursor) {
        // Every decoded unit consumed at least one input unit, plus the quote.
        assert!(decoded.len() < cursor.index());
        assert_eq!(units[cursor.index() - 1], u16::from(b'"'));
    }
}

fuzz_target!(|data: &[u8]| decode(data));
