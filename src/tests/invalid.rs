/*
Invalid inputs are always detected, and produce an error with the byte offset it was detected at
rather than a partial document. We want to make sure we avoid:

- attempting to index out-of-bounds
- infinite loops when scanning
- returning invalid UTF8 strings

Many of these cases come from fuzz testing the parser and deciding on semantics when things break.
*/

use super::*;

use crate::de::Parser;

use crate::error::ParseErrorKind::*;

#[test]
fn err_empty() {
    assert_eq!((UnexpectedEnd, 0), read_invalid(b""));
    assert_eq!((UnexpectedEnd, 3), read_invalid(b" \n\t"));
}

#[test]
fn err_incomplete_string() {
    // strings that aren't finished are considered invalid
    assert_eq!(
        (UnexpectedEnd, 34),
        read_invalid(b"{\"a\":\"this string is not finished}")
    );
    assert_eq!((UnexpectedEnd, 4), read_invalid(b"\"abc"));
}

#[test]
fn err_incomplete_string_escape() {
    // a string can't end on the `\` of an escape
    assert_eq!((UnexpectedEnd, 2), read_invalid(b"\"\\"));

    // this string ends with an odd number of escapes so isn't terminated
    assert_eq!(
        (UnexpectedEnd, 11),
        read_invalid(b"{\"a\":\"\\\\\\\"}")
    );
}

#[test]
fn err_incomplete_containers() {
    assert_eq!((UnexpectedEnd, 1), read_invalid(b"["));
    assert_eq!((UnexpectedEnd, 1), read_invalid(b"{"));
    assert_eq!((UnexpectedEnd, 4), read_invalid(b"[1,2"));
    assert_eq!((UnexpectedEnd, 4), read_invalid(b"{\"a\""));
    assert_eq!((UnexpectedEnd, 5), read_invalid(b"{\"a\":"));
}

#[test]
fn err_root_level_arr_terminate() {
    // an attempt to terminate an array or map early is considered invalid
    assert_eq!((ExpectedColon, 4), read_invalid(b"{\"a\"],42}"));
}

#[test]
fn err_unexpected_close() {
    assert_eq!((UnexpectedCharacter('}'), 0), read_invalid(b"}"));
    assert_eq!((UnexpectedCharacter(']'), 0), read_invalid(b"]"));
}

#[test]
fn err_map_terminated_as_arr() {
    assert_eq!(
        (ExpectedObjectSeparator, 13),
        read_invalid(b"{\"a\":{\"b\":123]}")
    );
}

#[test]
fn err_arr_terminated_as_map() {
    assert_eq!(
        (ExpectedArraySeparator, 17),
        read_invalid(b"{\"a\":[\"b\",\"c\",\"d\"}}")
    );
}

#[test]
fn err_missing_separators() {
    assert_eq!((ExpectedArraySeparator, 3), read_invalid(b"[1 2]"));
    assert_eq!((ExpectedObjectSeparator, 7), read_invalid(b"{\"a\":1 \"b\":2}"));
}

#[test]
fn err_trailing_separators() {
    assert_eq!((UnexpectedCharacter(']'), 3), read_invalid(b"[1,]"));
    assert_eq!((ExpectedKey, 7), read_invalid(b"{\"a\":1,}"));
}

#[test]
fn err_map_with_missing_key() {
    assert_eq!((ExpectedKey, 1), read_invalid(b"{:42e10}"));
    assert_eq!((ExpectedKey, 1), read_invalid(b"{42:1}"));
}

#[test]
fn err_duplicated_key() {
    assert_eq!(
        (DuplicatedKey("a".to_owned()), 7),
        read_invalid(b"{\"a\":1,\"a\":2}")
    );

    // keys are compared after unescaping
    assert_eq!(
        (DuplicatedKey("a".to_owned()), 7),
        read_invalid(b"{\"a\":1,\"\\u0061\":2}")
    );
}

#[test]
fn ok_same_key_in_different_maps() {
    let document = read_valid(b"{\"a\":{\"a\":1},\"b\":{\"a\":2}}");

    assert_eq!(document["b"]["a"], 2);
}

#[test]
fn err_literals() {
    assert_eq!((ExpectedLiteral("true"), 0), read_invalid(b"tru"));
    assert_eq!((ExpectedLiteral("false"), 0), read_invalid(b"falsy"));
    assert_eq!((ExpectedLiteral("null"), 1), read_invalid(b"[nul]"));
    assert_eq!((ExpectedLiteral("null"), 0), read_invalid(b"nan"));
    assert_eq!((UnexpectedCharacter('N'), 0), read_invalid(b"NaN"));
}

#[test]
fn err_trailing_characters() {
    assert_eq!((TrailingCharacters, 4), read_invalid(b"truex"));
    assert_eq!((TrailingCharacters, 3), read_invalid(b"{} {}"));
    assert_eq!((TrailingCharacters, 1), read_invalid(b"01"));
    assert_eq!((TrailingCharacters, 3), read_invalid(b"[1]]"));
}

#[test]
fn err_non_json_whitespace() {
    assert_eq!((UnexpectedCharacter('\u{c}'), 0), read_invalid(b"\x0c1"));
    assert_eq!((UnexpectedCharacter('\u{a0}'), 1), read_invalid("[\u{a0}1]".as_bytes()));
}

#[test]
fn err_numbers() {
    assert_eq!((UnexpectedEnd, 1), read_invalid(b"-"));
    assert_eq!((ExpectedDigit, 1), read_invalid(b"-a"));
    assert_eq!((UnexpectedEnd, 2), read_invalid(b"1."));
    assert_eq!((ExpectedDigit, 2), read_invalid(b"1.e5"));
    assert_eq!((UnexpectedEnd, 2), read_invalid(b"1e"));
    assert_eq!((ExpectedDigit, 3), read_invalid(b"1e+x"));
    assert_eq!((UnexpectedCharacter('+'), 0), read_invalid(b"+1"));
    assert_eq!((UnexpectedCharacter('.'), 0), read_invalid(b".5"));
}

#[test]
fn err_number_out_of_range() {
    assert_eq!((NumberOutOfRange, 0), read_invalid(b"1e400"));
    assert_eq!((NumberOutOfRange, 1), read_invalid(b"[-1e400]"));
}

#[test]
fn err_unescape_unknown() {
    assert_eq!((InvalidEscape('j'), 2), read_invalid(b"\"\\j\""));
}

#[test]
fn err_unescape_unknown_multibyte() {
    assert_eq!(
        (InvalidEscape('😄'), 2),
        read_invalid("\"\\😄 and some more\"".as_bytes())
    );
}

#[test]
fn err_unescape_utf8_truncated() {
    assert_eq!((ExpectedHexDigits, 3), read_invalid(b"\"\\u58\""));
}

#[test]
fn err_unescape_utf8_no_escape() {
    assert_eq!((ExpectedHexDigits, 3), read_invalid(b"\"\\u\""));
}

#[test]
fn err_unescape_utf8_non_digit() {
    assert_eq!((ExpectedHexDigits, 3), read_invalid(b"\"\\u58\\r\""));
}

#[test]
fn err_unescape_non_digit_multibyte() {
    assert_eq!((ExpectedHexDigits, 3), read_invalid("\"\\u壁壁\"".as_bytes()));
}

#[test]
fn err_unescape_surrogate_pair_truncated() {
    assert_eq!((ExpectedHexDigits, 9), read_invalid(b"\"\\ud83d\\ude\""));
}

#[test]
fn err_unescape_surrogate_pair_non_digit() {
    assert_eq!((ExpectedHexDigits, 9), read_invalid(b"\"\\ud83d\\ude\\r\""));
}

#[test]
fn err_unescape_surrogate_pair_split() {
    assert_eq!(
        (ExpectedLowSurrogate, 7),
        read_invalid(b"\"\\ud83dsome bytes \\ude04\"")
    );
    assert_eq!((ExpectedLowSurrogate, 7), read_invalid(b"\"\\ud83d\""));
}

#[test]
fn err_unescape_surrogate_pair() {
    assert_eq!(
        (InvalidSurrogatePair, 9),
        read_invalid(b"\"\\ud83d\\u0041\"")
    );
    assert_eq!(
        (InvalidSurrogatePair, 9),
        read_invalid(b"\"\\ud83d\\ud83d\"")
    );
}

#[test]
fn err_unescape_lone_low_surrogate() {
    assert_eq!(
        (InvalidCodePoint(0xde04), 3),
        read_invalid(b"\"\\ude04\"")
    );
}

#[test]
fn ok_unescape_non_surrogate_max() {
    let document = read_valid(b"\"\\uffff\\uffff\"");

    assert_eq!("\u{ffff}\u{ffff}", document.as_str().unwrap());
}

#[test]
fn err_invalid_utf8() {
    assert_eq!((InvalidUtf8, 1), read_invalid(b"\"\xff\""));
    assert_eq!((InvalidUtf8, 6), read_invalid(b"{\"a\":\"\xf0\x9f\x98\"}"));
}

#[test]
fn err_depth_limit() {
    let parser = Parser::new().max_depth(2);

    assert!(parser.parse("[[1]]").is_ok());
    assert!(parser.parse("{\"a\":[1]}").is_ok());

    let err = parser.parse("[[[1]]]").unwrap_err();
    assert_eq!(&DepthLimitExceeded(2), err.kind());
    assert_eq!(2, err.offset());

    let err = parser.parse("{\"a\":{\"b\":{}}}").unwrap_err();
    assert_eq!(&DepthLimitExceeded(2), err.kind());
    assert_eq!(10, err.offset());
}

#[test]
fn err_display() {
    let err = Document::try_parse("[1,2").unwrap_err();

    assert_eq!("unexpected end of input at position 4", err.to_string());

    let err = Document::try_parse("{\"a\":1,\"a\":2}").unwrap_err();

    assert_eq!("duplicated key `a` at position 7", err.to_string());
}

#[test]
fn err_parse_falls_back_to_null() {
    let document = Document::parse("{\"a\":");

    assert!(document.is_null());
    assert_eq!("null", document.to_json_string());
}
