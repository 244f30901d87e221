//! End-to-end conversion: BSDL text → sorted pin table.

use thiserror::Error;
use tracing::debug;

use crate::parser::{AstNode, SourceFile, parse_bsdl};
use crate::semantic::{Collector, PinRow, SemanticError, assemble};

/// Any failure of the whole conversion. One of these means no output
/// table is produced at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The document failed the outer grammar. Surfaces before any
    /// semantic processing runs.
    #[error("syntax error: {message}")]
    Syntax { message: String },

    /// A semantic invariant was violated during collection.
    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

/// Convert a BSDL document into the sorted pin table.
///
/// Parse, collect, assemble — atomically: the first syntax error or
/// violated invariant aborts with no partial result.
pub fn convert(text: &str) -> Result<Vec<PinRow>, ConvertError> {
    let parse = parse_bsdl(text);
    if let Some(err) = parse.errors.first() {
        return Err(ConvertError::Syntax {
            message: err.to_string(),
        });
    }

    // The root node is always SOURCE_FILE, so the cast cannot fail
    let file = SourceFile::cast(parse.syntax()).ok_or_else(|| ConvertError::Syntax {
        message: "empty parse tree".to_string(),
    })?;

    let mut collector = Collector::new();
    collector.collect(&file)?;
    debug!(
        pins = collector.pin_map().len(),
        port_vec_length = collector.port_vec_length(),
        "generating pin table"
    );

    Ok(assemble(collector.pin_map(), collector.port_map()))
}
