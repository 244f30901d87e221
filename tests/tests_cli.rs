//! CLI tests — the `bsdl2pinmap` binary, end to end through file I/O.

use std::fs;
use std::process::Command;

fn bsdl2pinmap() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bsdl2pinmap"))
}

const FIXTURE: &str = "\
entity widget is
  port (
    TCK : in bit;
    GND : linkage bit;
    DATA : inout bit_vector(1 downto 0)
  );
  constant PKG : PIN_MAP_STRING :=
    \"TCK : 1,\" &
    \"DATA(1) : 2,\" &
    \"DATA(0) : 3,\" &
    \"GND : 4\";
end widget;
";

#[test]
fn writes_csv_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("widget.bsd");
    let output = dir.path().join("pins.csv");
    fs::write(&input, FIXTURE).unwrap();

    let status = bsdl2pinmap()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());

    let csv = fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "Number,Name,Type,Shape");
    assert_eq!(lines[1], "1,TCK,Input,Short");
    assert_eq!(lines[2], "2,DATA(1),Bidirectional,Short");
    assert_eq!(lines[3], "3,DATA(0),Bidirectional,Short");
    assert_eq!(lines[4], "4,GND,Power,Short");
    assert_eq!(lines.len(), 5);
}

#[test]
fn writes_csv_to_stdout_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("widget.bsd");
    fs::write(&input, FIXTURE).unwrap();

    let out = bsdl2pinmap().arg(&input).output().unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("Number,Name,Type,Shape"));
    assert_eq!(stdout.lines().count(), 5);
}

#[test]
fn duplicate_pin_fails_without_partial_output() {
    let broken = "\
entity widget is
  port (TCK : in bit; TDO : out bit);
  constant PKG : PIN_MAP_STRING := \"TCK : 12,\" & \"TDO : 12\";
end widget;
";
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.bsd");
    let output = dir.path().join("pins.csv");
    fs::write(&input, broken).unwrap();

    let out = bsdl2pinmap()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .output()
        .unwrap();
    assert!(!out.status.success());
    // The conversion is atomic: nothing may be written on failure
    assert!(!output.exists());

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("failed to convert"), "stderr: {stderr}");
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = bsdl2pinmap()
        .arg(dir.path().join("does-not-exist.bsd"))
        .output()
        .unwrap();
    assert!(!out.status.success());

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("failed to read"), "stderr: {stderr}");
}
