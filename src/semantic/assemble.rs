//! Assembly phase: merge the two maps into the output table.
//!
//! A pure function over the completed maps. Runs once, after collection.

use smol_str::SmolStr;
use tracing::debug;

use super::collect::{PinMap, PortMap};

/// Output classification of a pin, translated from the declared direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinType {
    Bidirectional,
    Power,
    Input,
    Output,
    Passive,
}

impl PinType {
    /// Translate a declared direction into the output vocabulary.
    ///
    /// Total and lenient: anything outside the five known directions
    /// (including `buffer` and misdeclared identifiers) is `Passive`.
    pub fn from_direction(direction: &str) -> Self {
        if direction.eq_ignore_ascii_case("inout") {
            Self::Bidirectional
        } else if direction.eq_ignore_ascii_case("linkage") {
            Self::Power
        } else if direction.eq_ignore_ascii_case("in") {
            Self::Input
        } else if direction.eq_ignore_ascii_case("out") {
            Self::Output
        } else {
            Self::Passive
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bidirectional => "Bidirectional",
            Self::Power => "Power",
            Self::Input => "Input",
            Self::Output => "Output",
            Self::Passive => "Passive",
        }
    }
}

impl std::fmt::Display for PinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the output table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinRow {
    pub number: u32,
    pub name: SmolStr,
    pub pin_type: PinType,
}

impl PinRow {
    /// Pad shape — the source format only ever yields this value
    pub const SHAPE: &'static str = "Short";
}

/// Merge the pin assignments with the port attributes into output rows,
/// ascending by pin number.
///
/// A pin whose port was never declared gets `Passive`. Vector slice
/// names like `DATA(3)` resolve against the declared base name `DATA`;
/// the sliced form is kept in the row's `name`.
pub fn assemble(pin_map: &PinMap, port_map: &PortMap) -> Vec<PinRow> {
    pin_map
        .iter()
        .map(|(&number, name)| {
            let attrs = port_map.get(base_name(name));
            let pin_type = attrs
                .map(|a| PinType::from_direction(&a.direction))
                .unwrap_or(PinType::Passive);
            debug!(pin = number, port = %name, ?pin_type, "assembled row");
            PinRow {
                number,
                name: name.clone(),
                pin_type,
            }
        })
        .collect()
}

/// Strip a trailing `(<n>)` bit index from an assigned port name
fn base_name(name: &str) -> &str {
    match name.find('(') {
        Some(paren) if name.ends_with(')') => &name[..paren],
        _ => name,
    }
}
