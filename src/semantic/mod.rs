//! Semantic reduction: AST fragments → two maps → output table.
//!
//! Two-phase, single-threaded:
//! 1. **Collection** — [`Collector`] walks the AST once, filling the
//!    port-attribute map and the pin-assignment map. Inserts return
//!    `Result`; the first duplicate aborts the conversion.
//! 2. **Assembly** — [`assemble`] merges the completed maps into
//!    [`PinRow`]s, ascending by pin number, translating directions and
//!    defaulting undeclared ports to passive.

mod assemble;
mod collect;
mod error;

pub use assemble::{PinRow, PinType, assemble};
pub use collect::{Collector, Dimension, PinMap, PortAttribute, PortMap, RangeOrder};
pub use error::SemanticError;
