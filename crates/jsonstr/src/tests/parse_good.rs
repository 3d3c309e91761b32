use alloc::{borrow::Cow, string::String};

use rstest::rstest;

use super::units;
use crate::{Cursor, TextCursor, parse_string};

fn decode(literal: &str) -> (String, usize) {
    let text = units(literal);
    let mut cursor = TextCursor::with_index(&text, 1);
    let decoded = parse_string(&mut cursor).unwrap();
    (String::from_utf16(&decoded).unwrap(), cursor.index())
}

#[test]
fn simple_string() {
    let text = units(r#""simple""#);
    let mut cursor = TextCursor::with_index(&text, 1);
    assert_eq!(&*parse_string(&mut cursor).unwrap(), &text[1..7]);
    assert!(cursor.is_at_end());
}

#[test]
fn empty_string() {
    assert_eq!(decode(r#""""#), (String::new(), 2));
}

#[test]
fn escape_sequences() {
    let text = units(r#""tab\tnewline\nquote\" ""#);
    let mut cursor = TextCursor::with_index(&text, 1);
    let decoded = parse_string(&mut cursor).unwrap();
    assert_eq!(String::from_utf16(&decoded).unwrap(), "tab\tnewline\nquote\" ");
    assert!(cursor.is_at_end());
}

#[test]
fn unicode_escape_sequence() {
    assert_eq!(decode(r#""mdash \u2014""#).0, "mdash \u{2014}");
}

#[rstest]
#[case(r#""\"""#, "\"")]
#[case(r#""\\""#, "\\")]
#[case(r#""\/""#, "/")]
#[case(r#""\b""#, "\u{8}")]
#[case(r#""\f""#, "\u{c}")]
#[case(r#""\n""#, "\n")]
#[case(r#""\r""#, "\r")]
#[case(r#""\t""#, "\t")]
#[case(r#""\u0041""#, "A")]
#[case(r#""\u00e9\u00E9""#, "éé")]
#[case(r#""\uD83D\uDE00""#, "😀")]
#[case(r#""a\\\\b""#, "a\\\\b")]
fn every_escape(#[case] literal: &str, #[case] expected: &str) {
    let (decoded, index) = decode(literal);
    assert_eq!(decoded, expected);
    assert_eq!(index, literal.encode_utf16().count());
}

#[test]
fn stops_after_closing_quote() {
    let text = units(r#""a\nb", "next""#);
    let mut cursor = TextCursor::with_index(&text, 1);
    parse_string(&mut cursor).unwrap();
    assert_eq!(cursor.index(), 6);
    assert_eq!(cursor.remaining(), &units(r#", "next""#)[..]);
}

#[test]
fn raw_non_ascii_and_del_are_accepted() {
    assert_eq!(decode("\"\u{7f}\u{85}\u{2028}😀\"").0, "\u{7f}\u{85}\u{2028}😀");
}

#[test]
fn prefix_before_escape_is_kept() {
    let text = units(r#""prefix\u0020suffix""#);
    let mut cursor = TextCursor::with_index(&text, 1);
    let decoded = parse_string(&mut cursor).unwrap();
    assert!(matches!(decoded, Cow::Owned(_)));
    assert_eq!(String::from_utf16(&decoded).unwrap(), "prefix suffix");
}
