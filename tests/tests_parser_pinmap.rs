//! Parser tests — pin-map sub-language.
//!
//! The pin map is the joined contents of a `PIN_MAP_STRING` constant,
//! re-parsed with its own entry point on the same grammar.

use bsdl_pinmap::parser::{AstNode, PortMap, parse_port_map};

fn entries(input: &str) -> Vec<(String, Vec<u32>)> {
    let parsed = parse_port_map(input);
    assert!(parsed.ok(), "unexpected syntax errors: {:?}", parsed.errors);
    let map = PortMap::cast(parsed.syntax()).expect("root should cast");
    map.entries()
        .map(|e| {
            (
                e.port_name().expect("entry should have a name").text().to_string(),
                e.pins(),
            )
        })
        .collect()
}

#[test]
fn single_pin_entries() {
    let parsed = entries("TCK : 1,TDO : 2");
    assert_eq!(
        parsed,
        vec![("TCK".to_string(), vec![1]), ("TDO".to_string(), vec![2])]
    );
}

#[test]
fn parenthesized_pin_lists() {
    let parsed = entries("VCC : (3, 14),GND : 7");
    assert_eq!(
        parsed,
        vec![
            ("VCC".to_string(), vec![3, 14]),
            ("GND".to_string(), vec![7])
        ]
    );
}

#[test]
fn indexed_port_names_keep_their_bit_slice() {
    let parsed = entries("DATA(3) : 1,DATA(2) : 2");
    assert_eq!(
        parsed,
        vec![
            ("DATA(3)".to_string(), vec![1]),
            ("DATA(2)".to_string(), vec![2])
        ]
    );
}

#[test]
fn trailing_comma_is_tolerated() {
    // Each string fragment of a pin map conventionally ends with one
    let parsed = entries("TCK : 1,TDO : 2,");
    assert_eq!(parsed.len(), 2);
}

#[test]
fn whitespace_and_newlines_are_trivia() {
    let parsed = entries("  TCK : 1 ,\n  TDO : 2  ");
    assert_eq!(parsed.len(), 2);
}

#[test]
fn multi_digit_pins_parse_numerically() {
    let parsed = entries("A : 100,B : 9");
    assert_eq!(parsed[0].1, vec![100]);
    assert_eq!(parsed[1].1, vec![9]);
}

#[test]
fn missing_colon_is_a_syntax_error() {
    let parsed = parse_port_map("TCK 1");
    assert!(!parsed.ok());
}

#[test]
fn missing_pin_number_is_a_syntax_error() {
    let parsed = parse_port_map("TCK : ,TDO : 2");
    assert!(!parsed.ok());
}
