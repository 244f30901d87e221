//! Typed AST wrappers over the untyped rowan CST.
//!
//! Each struct wraps a `SyntaxNode` and provides methods to access the
//! children the semantic phase cares about. Everything else in the tree
//! (trivia, skipped statements) stays reachable through the raw node.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};
use smol_str::SmolStr;

/// Trait implemented by all typed AST nodes
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Find the first child token of the given kind
fn find_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == kind)
}

/// All child tokens of the given kind, in source order
fn tokens_of(node: &SyntaxNode, kind: SyntaxKind) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(move |t| t.kind() == kind)
}

// ============================================================================
// Outer document
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    pub fn entity(&self) -> Option<EntityDecl> {
        self.0.children().find_map(EntityDecl::cast)
    }
}

ast_node!(EntityDecl, ENTITY_DECL);

impl EntityDecl {
    /// The entity name (the identifier after `entity`)
    pub fn name(&self) -> Option<SmolStr> {
        find_token(&self.0, SyntaxKind::IDENT).map(|t| SmolStr::new(t.text()))
    }

    pub fn port_clause(&self) -> Option<PortClause> {
        self.0.children().find_map(PortClause::cast)
    }

    pub fn constants(&self) -> impl Iterator<Item = ConstantDecl> + '_ {
        self.0.children().filter_map(ConstantDecl::cast)
    }
}

ast_node!(PortClause, PORT_CLAUSE);

impl PortClause {
    pub fn specs(&self) -> impl Iterator<Item = PortSpec> + '_ {
        self.0.children().filter_map(PortSpec::cast)
    }
}

ast_node!(PortSpec, PORT_SPEC);

impl PortSpec {
    /// The declared port names, in source order
    pub fn identifiers(&self) -> Vec<SmolStr> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::IDENTIFIER_LIST)
            .map(|list| {
                tokens_of(&list, SyntaxKind::IDENT)
                    .map(|t| SmolStr::new(t.text()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The declared direction, exactly as written (`in`, `out`, `inout`,
    /// `buffer`, `linkage`, or any other identifier the parser let through)
    pub fn direction(&self) -> Option<SmolStr> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind().is_keyword() || t.kind() == SyntaxKind::IDENT)
            .map(|t| SmolStr::new(t.text()))
    }

    pub fn dimension(&self) -> Option<PortDimension> {
        self.0.children().find_map(PortDimension::cast)
    }
}

ast_node!(PortDimension, PORT_DIMENSION);

impl PortDimension {
    /// The type name (`bit`, `bit_vector`, ...)
    pub fn type_name(&self) -> Option<SmolStr> {
        find_token(&self.0, SyntaxKind::IDENT).map(|t| SmolStr::new(t.text()))
    }

    /// The bit range, present only for vector dimensions
    pub fn range(&self) -> Option<RangeSpec> {
        self.0.children().find_map(RangeSpec::cast)
    }
}

ast_node!(RangeSpec, RANGE_SPEC);

impl RangeSpec {
    /// The two range endpoints as written, in source order
    pub fn bounds_text(&self) -> Option<(SmolStr, SmolStr)> {
        let mut ints = tokens_of(&self.0, SyntaxKind::INTEGER);
        let left = SmolStr::new(ints.next()?.text());
        let right = SmolStr::new(ints.next()?.text());
        Some((left, right))
    }

    /// The two range endpoints as pin indices, if they fit
    pub fn bounds(&self) -> Option<(u32, u32)> {
        let (left, right) = self.bounds_text()?;
        Some((left.parse().ok()?, right.parse().ok()?))
    }

    /// The range keyword (`to`, `downto`, or whatever identifier stood in
    /// its place), exactly as written
    pub fn keyword(&self) -> Option<SmolStr> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| {
                matches!(
                    t.kind(),
                    SyntaxKind::TO_KW | SyntaxKind::DOWNTO_KW | SyntaxKind::IDENT
                )
            })
            .map(|t| SmolStr::new(t.text()))
    }
}

ast_node!(ConstantDecl, CONSTANT_DECL);

impl ConstantDecl {
    /// The constant name (first identifier)
    pub fn name(&self) -> Option<SmolStr> {
        find_token(&self.0, SyntaxKind::IDENT).map(|t| SmolStr::new(t.text()))
    }

    /// The declared type name (second identifier)
    pub fn type_name(&self) -> Option<SmolStr> {
        tokens_of(&self.0, SyntaxKind::IDENT)
            .nth(1)
            .map(|t| SmolStr::new(t.text()))
    }

    /// Whether this constant carries the pin map
    pub fn is_pin_map(&self) -> bool {
        self.type_name()
            .is_some_and(|t| t.eq_ignore_ascii_case("PIN_MAP_STRING"))
    }

    /// The joined contents of the string-concatenation chain, with the
    /// surrounding quotes of each fragment stripped
    pub fn string_value(&self) -> String {
        let Some(expr) = self
            .0
            .children()
            .find(|n| n.kind() == SyntaxKind::STRING_EXPR)
        else {
            return String::new();
        };
        let mut joined = String::new();
        for token in tokens_of(&expr, SyntaxKind::STRING) {
            let text = token.text();
            joined.push_str(text.trim_matches('"'));
        }
        joined
    }
}

// ============================================================================
// Pin-map sub-language
// ============================================================================

ast_node!(PortMap, PORT_MAP);

impl PortMap {
    pub fn entries(&self) -> impl Iterator<Item = PortMapEntry> + '_ {
        self.0.children().filter_map(PortMapEntry::cast)
    }
}

ast_node!(PortMapEntry, PORT_MAP_ENTRY);

impl PortMapEntry {
    pub fn port_name(&self) -> Option<PortName> {
        self.0.children().find_map(PortName::cast)
    }

    /// The pin numbers assigned to this port, in source order
    pub fn pins(&self) -> Vec<u32> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::PIN_LIST)
            .map(|list| {
                tokens_of(&list, SyntaxKind::INTEGER)
                    .filter_map(|t| t.text().parse().ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

ast_node!(PortName, PORT_NAME);

impl PortName {
    /// The full assigned name, including a bit index if present
    /// (e.g. `DATA(3)`)
    pub fn text(&self) -> SmolStr {
        let base = find_token(&self.0, SyntaxKind::IDENT)
            .map(|t| t.text().to_string())
            .unwrap_or_default();
        match find_token(&self.0, SyntaxKind::INTEGER) {
            Some(index) => SmolStr::new(format!("{}({})", base, index.text())),
            None => SmolStr::new(base),
        }
    }
}
