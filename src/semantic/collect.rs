//! Collection phase: reduce AST fragments into the two semantic maps.
//!
//! One walk over the entity body fills a port-attribute map (from the
//! port clause) and a pin-assignment map (from the `PIN_MAP_STRING`
//! constant, which gets a nested parse with the pin-map entry point of
//! the same grammar). The two fragments may appear in either order; the
//! maps are only merged later, in assembly.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::debug;

use crate::parser::{AstNode, PortSpec, SourceFile, parse_port_map};

use super::error::SemanticError;

/// Declaration order of a vector range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOrder {
    /// `to` — ascending indices
    Ascending,
    /// `downto` — descending indices
    Descending,
}

/// A port's dimension, decided once at AST-reduction time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Scalar,
    Vector {
        left: u32,
        right: u32,
        order: RangeOrder,
    },
}

impl Dimension {
    /// Number of physical pins this dimension spans
    pub fn pin_count(&self) -> u32 {
        match *self {
            Dimension::Scalar => 1,
            Dimension::Vector {
                left,
                right,
                order: RangeOrder::Ascending,
            } => right.saturating_add(1).saturating_sub(left),
            Dimension::Vector {
                left,
                right,
                order: RangeOrder::Descending,
            } => left.saturating_add(1).saturating_sub(right),
        }
    }
}

/// Attributes recorded for a declared port. Immutable once inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortAttribute {
    /// Number of physical pins (1 for scalars, range width for vectors)
    pub pin_count: u32,
    /// Direction exactly as declared; classified leniently at assembly
    pub direction: SmolStr,
}

/// Map from port name to its declared attributes
pub type PortMap = FxHashMap<SmolStr, PortAttribute>;

/// Map from pin number to the assigned port name, ordered by pin
pub type PinMap = BTreeMap<u32, SmolStr>;

/// Accumulates the two semantic maps over one walk of the AST.
#[derive(Debug, Default)]
pub struct Collector {
    port_map: PortMap,
    pin_map: PinMap,
    /// Running total of declared pin-vector length. Diagnostic only.
    port_vec_length: u32,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the parsed document and fill both maps.
    ///
    /// Fails fatally on the first duplicate port, duplicate pin, or
    /// malformed range.
    pub fn collect(&mut self, file: &SourceFile) -> Result<(), SemanticError> {
        let Some(entity) = file.entity() else {
            return Ok(());
        };

        if let Some(ports) = entity.port_clause() {
            for spec in ports.specs() {
                self.collect_port_spec(&spec)?;
            }
        }

        for constant in entity.constants() {
            if constant.is_pin_map() {
                self.collect_pin_map(&constant.string_value())?;
            }
        }

        debug!(
            ports = self.port_map.len(),
            pins = self.pin_map.len(),
            port_vec_length = self.port_vec_length,
            "collection finished"
        );
        Ok(())
    }

    /// Record one port declaration: every identifier in the list gets the
    /// same pin count and direction.
    fn collect_port_spec(&mut self, spec: &PortSpec) -> Result<(), SemanticError> {
        let dimension = reduce_dimension(spec)?;
        let pin_count = dimension.pin_count();
        let direction = spec.direction().unwrap_or_default();

        for identifier in spec.identifiers() {
            self.insert_port(
                identifier,
                PortAttribute {
                    pin_count,
                    direction: direction.clone(),
                },
            )?;
            self.port_vec_length = self.port_vec_length.saturating_add(pin_count);
        }
        Ok(())
    }

    fn insert_port(&mut self, name: SmolStr, attrs: PortAttribute) -> Result<(), SemanticError> {
        if self.port_map.contains_key(&name) {
            return Err(SemanticError::DuplicatePort {
                name: name.to_string(),
            });
        }
        debug!(%name, pin_count = attrs.pin_count, direction = %attrs.direction, "port declared");
        self.port_map.insert(name, attrs);
        Ok(())
    }

    /// Re-parse the joined pin-map string with the pin-map entry point of
    /// the same grammar, then record every pin → port assignment.
    fn collect_pin_map(&mut self, raw: &str) -> Result<(), SemanticError> {
        let parse = parse_port_map(raw);
        if let Some(err) = parse.errors.first() {
            return Err(SemanticError::PinMapSyntax {
                message: err.to_string(),
            });
        }

        let Some(map) = crate::parser::PortMap::cast(parse.syntax()) else {
            return Ok(());
        };
        for entry in map.entries() {
            let Some(port_name) = entry.port_name() else {
                continue;
            };
            let name = port_name.text();
            for pin in entry.pins() {
                self.insert_pin(pin, name.clone())?;
            }
        }
        Ok(())
    }

    fn insert_pin(&mut self, pin: u32, port: SmolStr) -> Result<(), SemanticError> {
        if self.pin_map.contains_key(&pin) {
            return Err(SemanticError::DuplicatePin {
                pin,
                port: port.to_string(),
            });
        }
        self.pin_map.insert(pin, port);
        Ok(())
    }

    pub fn port_map(&self) -> &PortMap {
        &self.port_map
    }

    pub fn pin_map(&self) -> &PinMap {
        &self.pin_map
    }

    /// Total declared pin-vector length. Not part of the output table.
    pub fn port_vec_length(&self) -> u32 {
        self.port_vec_length
    }
}

/// Decide a port's dimension from its AST node.
///
/// A missing or rangeless dimension is scalar. A range keyword outside
/// `to`/`downto` cannot come out of the grammar, but is still rejected
/// here rather than trusted.
fn reduce_dimension(spec: &PortSpec) -> Result<Dimension, SemanticError> {
    let Some(dimension) = spec.dimension() else {
        return Ok(Dimension::Scalar);
    };
    let Some(range) = dimension.range() else {
        return Ok(Dimension::Scalar);
    };

    let keyword = range.keyword().unwrap_or_default();
    let order = if keyword.eq_ignore_ascii_case("to") {
        RangeOrder::Ascending
    } else if keyword.eq_ignore_ascii_case("downto") {
        RangeOrder::Descending
    } else {
        return Err(SemanticError::MalformedRange {
            keyword: keyword.to_string(),
        });
    };

    let Some((left, right)) = range.bounds_text() else {
        return Err(SemanticError::MalformedBound {
            bound: range.syntax().text().to_string(),
        });
    };
    let left = parse_bound(&left)?;
    let right = parse_bound(&right)?;
    Ok(Dimension::Vector { left, right, order })
}

/// A range endpoint must fit a pin index; anything else is malformed
/// input, not a silent zero.
fn parse_bound(text: &str) -> Result<u32, SemanticError> {
    text.parse().map_err(|_| SemanticError::MalformedBound {
        bound: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_counts_one_pin() {
        assert_eq!(Dimension::Scalar.pin_count(), 1);
    }

    #[test]
    fn ascending_and_descending_ranges_are_count_equivalent() {
        let up = Dimension::Vector {
            left: 0,
            right: 7,
            order: RangeOrder::Ascending,
        };
        let down = Dimension::Vector {
            left: 7,
            right: 0,
            order: RangeOrder::Descending,
        };
        assert_eq!(up.pin_count(), 8);
        assert_eq!(down.pin_count(), 8);
    }

    #[test]
    fn extreme_endpoint_does_not_overflow() {
        let wide = Dimension::Vector {
            left: 0,
            right: u32::MAX,
            order: RangeOrder::Ascending,
        };
        assert_eq!(wide.pin_count(), u32::MAX);
    }

    #[test]
    fn single_bit_vector() {
        let one = Dimension::Vector {
            left: 3,
            right: 3,
            order: RangeOrder::Descending,
        };
        assert_eq!(one.pin_count(), 1);
    }
}
