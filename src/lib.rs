//! # bsdl-pinmap
//!
//! BSDL parsing, AST, and pin-map extraction for PCB/CAD tooling.
//!
//! Converts a boundary-scan description (BSDL) document into a flat
//! pin-to-port table: pin number, port name, electrical direction, pad
//! shape. The table imports directly into CAD tools as CSV.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! output    → CSV serialization of the assembled table
//!   ↓
//! convert   → end-to-end pipeline (parse → collect → assemble)
//!   ↓
//! semantic  → port/pin map collection, table assembly
//!   ↓
//! parser    → logos lexer, recursive-descent parser, typed AST
//! ```
//!
//! ## Example
//!
//! ```no_run
//! let text = std::fs::read_to_string("chip.bsd").unwrap();
//! let rows = bsdl_pinmap::convert(&text).unwrap();
//! print!("{}", bsdl_pinmap::to_csv_string(&rows));
//! ```

/// Parser: logos lexer, recursive-descent parser, typed AST wrappers
pub mod parser;

/// Semantic reduction: collectors and table assembly
pub mod semantic;

/// End-to-end conversion pipeline
mod convert;

/// CSV output
mod output;

pub use convert::{ConvertError, convert};
pub use output::{to_csv_string, write_csv};
pub use semantic::{PinRow, PinType, SemanticError};
