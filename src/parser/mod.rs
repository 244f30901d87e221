//! Lossless parser for the BSDL subset the converter consumes.
//!
//! This module provides:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//! - typed AST wrappers over the CST
//!
//! Two entry points share one grammar module: [`parse_bsdl`] for the
//! outer entity description and [`parse_port_map`] for the pin-map
//! sub-language. The sub-language is a proper subset of the outer token
//! vocabulary, so both passes run on the same lexer.
//!
//! ```text
//! Source text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (lossless)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//!     ↓
//! Semantic phase → port map + pin map → table
//! ```

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, SyntaxError, parse_bsdl, parse_port_map};
pub use syntax_kind::{BsdlLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
