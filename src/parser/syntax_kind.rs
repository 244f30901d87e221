//! Syntax kinds for the rowan-based CST.
//!
//! This enum defines all node and token kinds in the BSDL syntax tree,
//! covering both the outer entity description and the pin-map
//! sub-language embedded in `PIN_MAP_STRING` constants.

/// All syntax kinds (tokens and nodes) in BSDL.
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (entity, port clause, pin-map entries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT, // -- VHDL-style comment

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,   // TCK, bit_vector
    INTEGER, // 42
    DECIMAL, // 20.0e6 (appears in timing attributes we skip over)
    STRING,  // "DATA : (3,4,5,6),"

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,   // (
    R_PAREN,   // )
    COLON,     // :
    COLON_EQ,  // :=
    SEMICOLON, // ;
    COMMA,     // ,
    AMP,       // & (string concatenation)
    DOT,       // .
    MINUS,     // - (signed literals in skipped attributes)
    STAR,      // * (component conformance strings etc.)

    // =========================================================================
    // KEYWORDS (case-insensitive, VHDL rules)
    // =========================================================================
    ENTITY_KW,
    IS_KW,
    END_KW,
    GENERIC_KW,
    PORT_KW,
    USE_KW,
    ALL_KW,
    ATTRIBUTE_KW,
    OF_KW,
    CONSTANT_KW,
    IN_KW,
    OUT_KW,
    INOUT_KW,
    BUFFER_KW,
    LINKAGE_KW,
    TO_KW,
    DOWNTO_KW,

    // =========================================================================
    // NODES — outer document
    // =========================================================================
    SOURCE_FILE,
    ENTITY_DECL,
    GENERIC_CLAUSE,
    PORT_CLAUSE,
    PORT_SPEC,
    IDENTIFIER_LIST,
    PORT_DIMENSION,
    RANGE_SPEC,
    USE_CLAUSE,
    ATTRIBUTE_SPEC,
    CONSTANT_DECL,
    STRING_EXPR,
    OTHER_STMT, // any statement we carry losslessly but don't interpret

    // =========================================================================
    // NODES — pin-map sub-language
    // =========================================================================
    PORT_MAP,
    PORT_MAP_ENTRY,
    PORT_NAME,
    PIN_LIST,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ENTITY_KW as u16) && (self as u16) <= (Self::DOWNTO_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_PAREN as u16) && (self as u16) <= (Self::STAR as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(self, Self::IDENT | Self::INTEGER | Self::DECIMAL | Self::STRING)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BsdlLanguage {}

impl rowan::Language for BsdlLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<BsdlLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<BsdlLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<BsdlLanguage>;
