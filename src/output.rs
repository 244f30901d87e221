//! CSV serialization of the assembled pin table.
//!
//! Four fixed columns: `Number, Name, Type, Shape`. Header row first,
//! one row per pin, CRLF line endings (Excel-style CSV, what the
//! downstream CAD import expects).

use std::io::{self, Write};

use crate::semantic::PinRow;

const HEADER: &str = "Number,Name,Type,Shape";

/// Write the table to any writer
pub fn write_csv<W: Write>(out: &mut W, rows: &[PinRow]) -> io::Result<()> {
    write!(out, "{HEADER}\r\n")?;
    for row in rows {
        write!(
            out,
            "{},{},{},{}\r\n",
            row.number,
            row.name,
            row.pin_type,
            PinRow::SHAPE
        )?;
    }
    Ok(())
}

/// Serialize the table to a string
pub fn to_csv_string(rows: &[PinRow]) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail
    write_csv(&mut buf, rows).expect("infallible write");
    String::from_utf8(buf).expect("rows are valid UTF-8")
}
