//! Error types for semantic reduction.

use thiserror::Error;

/// Errors raised while reducing the AST into the port and pin maps.
///
/// All of these are fatal: the conversion aborts on the first one and
/// produces no output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// A port name is declared twice in the port clause.
    #[error("port `{name}` is declared more than once")]
    DuplicatePort { name: String },

    /// A pin number is assigned to more than one port in the pin map.
    #[error("pin {pin} is assigned more than once (second assignment: port `{port}`)")]
    DuplicatePin { pin: u32, port: String },

    /// A vector range carries a keyword other than `to`/`downto`.
    /// The grammar already rejects this; the check stays as a guard.
    #[error("unknown bit-vector range keyword `{keyword}`")]
    MalformedRange { keyword: String },

    /// A vector range endpoint does not fit a pin index.
    #[error("bit-vector range endpoint `{bound}` is not a valid pin index")]
    MalformedBound { bound: String },

    /// The pin-map string failed its nested parse.
    #[error("malformed pin map: {message}")]
    PinMapSyntax { message: String },
}
