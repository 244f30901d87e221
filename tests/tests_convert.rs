//! End-to-end conversion tests: BSDL text in, sorted pin table out.

use bsdl_pinmap::semantic::PinType;
use bsdl_pinmap::{ConvertError, SemanticError, convert, to_csv_string};

const DATA_ENTITY: &str = "\
entity widget is
  generic (PHYSICAL_PIN_MAP : string := \"PKG\");
  port (
    DATA : inout bit_vector(3 downto 0)
  );
  use STD_1149_1_1994.all;
  attribute PIN_MAP of widget : entity is PHYSICAL_PIN_MAP;
  constant PKG : PIN_MAP_STRING :=
    \"DATA(3) : 1,\" &
    \"DATA(2) : 2,\" &
    \"DATA(1) : 3,\" &
    \"DATA(0) : 4\";
end widget;
";

#[test]
fn vector_port_scenario() {
    let rows = convert(DATA_ENTITY).unwrap();
    assert_eq!(rows.len(), 4);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.number, (i + 1) as u32);
        assert_eq!(row.name, format!("DATA({})", 3 - i));
        assert_eq!(row.pin_type, PinType::Bidirectional);
    }
}

#[test]
fn rows_are_strictly_ascending_and_distinct() {
    let rows = convert(
        "\
entity e is
  port (A : in bit; B : out bit; C : in bit);
  constant PKG : PIN_MAP_STRING := \"B : 30,\" & \"C : 4,\" & \"A : 17\";
end e;
",
    )
    .unwrap();
    let numbers: Vec<_> = rows.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![4, 17, 30]);
}

#[test]
fn linkage_translates_to_power() {
    let rows = convert(
        "\
entity e is
  port (GND : linkage bit);
  constant PKG : PIN_MAP_STRING := \"GND : 7\";
end e;
",
    )
    .unwrap();
    assert_eq!(rows[0].pin_type, PinType::Power);
}

#[test]
fn undeclared_port_becomes_passive() {
    let rows = convert(
        "\
entity e is
  port (A : in bit);
  constant PKG : PIN_MAP_STRING := \"A : 1,\" & \"NC : 2\";
end e;
",
    )
    .unwrap();
    assert_eq!(rows[0].pin_type, PinType::Input);
    assert_eq!(rows[1].name, "NC");
    assert_eq!(rows[1].pin_type, PinType::Passive);
}

#[test]
fn unknown_direction_becomes_passive() {
    let rows = convert(
        "\
entity e is
  port (X : buffer bit);
  constant PKG : PIN_MAP_STRING := \"X : 9\";
end e;
",
    )
    .unwrap();
    assert_eq!(rows[0].pin_type, PinType::Passive);
}

#[test]
fn syntax_errors_abort_before_semantics() {
    let err = convert("entity is port; garbage").unwrap_err();
    assert!(matches!(err, ConvertError::Syntax { .. }));
}

#[test]
fn duplicate_port_aborts_the_conversion() {
    let err = convert(
        "\
entity e is
  port (TCK : in bit; TCK : out bit);
  constant PKG : PIN_MAP_STRING := \"TCK : 1\";
end e;
",
    )
    .unwrap_err();
    assert_eq!(
        err,
        ConvertError::Semantic(SemanticError::DuplicatePort {
            name: "TCK".to_string()
        })
    );
}

#[test]
fn document_without_pin_map_yields_empty_table() {
    let rows = convert("entity e is port (A : in bit); end e;").unwrap();
    assert!(rows.is_empty());
    assert_eq!(to_csv_string(&rows), "Number,Name,Type,Shape\r\n");
}

#[test]
fn csv_round_trip_of_the_vector_scenario() {
    let rows = convert(DATA_ENTITY).unwrap();
    let csv = to_csv_string(&rows);
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "Number,Name,Type,Shape");
    assert_eq!(lines[1], "1,DATA(3),Bidirectional,Short");
    assert_eq!(lines[4], "4,DATA(0),Bidirectional,Short");
}
