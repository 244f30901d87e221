//! Recursive descent parser for BSDL.
//!
//! Builds a rowan GreenNode tree from tokens and produces a lossless CST.
//! Two entry points share the same lexer and parser state: [`parse_bsdl`]
//! for the outer entity description and [`parse_port_map`] for the
//! pin-map sub-language embedded in `PIN_MAP_STRING` constants. Keeping
//! both in one module guarantees the sub-language stays in sync with the
//! outer token vocabulary.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}",
            self.message,
            u32::from(self.range.start()),
            u32::from(self.range.end())
        )
    }
}

/// Parse a BSDL entity description into a CST
pub fn parse_bsdl(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_source_file();
    parser.finish()
}

/// Parse the pin-map sub-language (the joined contents of a
/// `PIN_MAP_STRING` constant) into a CST
pub fn parse_port_map(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_port_map();
    parser.finish()
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {:?}", kind));
            false
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump();
        }
    }

    /// Eat trivia, then expect `kind`
    fn expect_after_trivia(&mut self, kind: SyntaxKind) -> bool {
        self.skip_trivia();
        self.expect(kind)
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| TextRange::empty(TextSize::new(0)));
        self.errors.push(SyntaxError::new(message, range));
    }

    /// Consume tokens up to and including the next `;` inside an ERROR node
    fn error_recover_to_semicolon(&mut self, message: impl Into<String>) {
        self.error(message);
        self.builder.start_node(SyntaxKind::ERROR.into());
        while !self.at_eof() && !self.at(SyntaxKind::SEMICOLON) {
            self.bump();
        }
        self.eat(SyntaxKind::SEMICOLON);
        self.builder.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    // =========================================================================
    // Grammar — outer document
    // =========================================================================

    /// SourceFile = EntityDecl
    fn parse_source_file(&mut self) {
        self.start_node(SyntaxKind::SOURCE_FILE);

        self.skip_trivia();
        if self.at(SyntaxKind::ENTITY_KW) {
            self.parse_entity();
        } else if !self.at_eof() {
            self.error_recover_to_semicolon("expected `entity`");
        }

        // Trailing trivia after `end <name>;`
        self.skip_trivia();
        while !self.at_eof() {
            self.error("unexpected token after entity");
            self.bump();
        }

        self.finish_node();
    }

    /// EntityDecl = `entity` name `is` Statement* `end` name? `;`
    fn parse_entity(&mut self) {
        self.start_node(SyntaxKind::ENTITY_DECL);
        self.bump(); // entity
        self.expect_after_trivia(SyntaxKind::IDENT);
        self.expect_after_trivia(SyntaxKind::IS_KW);

        loop {
            self.skip_trivia();
            if self.at_eof() || self.at(SyntaxKind::END_KW) {
                break;
            }
            let pos_before = self.pos;
            self.parse_entity_statement();
            // Force progress so a malformed statement can't loop forever
            if self.pos == pos_before && !self.at_eof() {
                self.error(format!("stuck on token: {:?}", self.current_kind()));
                self.bump();
            }
        }

        if self.eat(SyntaxKind::END_KW) {
            self.skip_trivia();
            self.eat(SyntaxKind::IDENT);
            self.skip_trivia();
            self.eat(SyntaxKind::SEMICOLON);
        } else {
            self.error("expected `end`");
        }
        self.finish_node();
    }

    /// Dispatch one statement inside the entity body
    fn parse_entity_statement(&mut self) {
        match self.current_kind() {
            SyntaxKind::GENERIC_KW => self.parse_generic_clause(),
            SyntaxKind::PORT_KW => self.parse_port_clause(),
            SyntaxKind::USE_KW => self.parse_use_clause(),
            SyntaxKind::ATTRIBUTE_KW => self.parse_attribute_spec(),
            SyntaxKind::CONSTANT_KW => self.parse_constant_decl(),
            // Anything else (timing specs, conformance declarations, ...) is
            // carried losslessly without interpretation
            _ => self.parse_other_stmt(),
        }
    }

    /// GenericClause = `generic` `(` ... `)` `;` — contents skipped
    fn parse_generic_clause(&mut self) {
        self.start_node(SyntaxKind::GENERIC_CLAUSE);
        self.bump(); // generic
        self.skip_trivia();
        if self.expect(SyntaxKind::L_PAREN) {
            self.skip_balanced_parens();
        }
        self.skip_trivia();
        self.expect(SyntaxKind::SEMICOLON);
        self.finish_node();
    }

    /// Consume everything until the matching `)`, honoring nesting.
    /// The opening `(` has already been consumed.
    fn skip_balanced_parens(&mut self) {
        let mut depth = 1usize;
        while !self.at_eof() && depth > 0 {
            match self.current_kind() {
                SyntaxKind::L_PAREN => depth += 1,
                SyntaxKind::R_PAREN => depth -= 1,
                _ => {}
            }
            self.bump();
        }
        if depth > 0 {
            self.error("unbalanced parentheses");
        }
    }

    /// PortClause = `port` `(` PortSpec (`;` PortSpec)* `)` `;`
    fn parse_port_clause(&mut self) {
        self.start_node(SyntaxKind::PORT_CLAUSE);
        self.bump(); // port
        self.expect_after_trivia(SyntaxKind::L_PAREN);

        loop {
            self.skip_trivia();
            if self.at_eof() || self.at(SyntaxKind::R_PAREN) {
                break;
            }
            self.parse_port_spec();
            self.skip_trivia();
            if !self.eat(SyntaxKind::SEMICOLON) {
                break;
            }
        }

        self.expect_after_trivia(SyntaxKind::R_PAREN);
        self.expect_after_trivia(SyntaxKind::SEMICOLON);
        self.finish_node();
    }

    /// PortSpec = IdentifierList `:` direction PortDimension
    ///
    /// The direction is normally one of the five pin-type keywords, but an
    /// arbitrary identifier is accepted and left for semantic classification.
    fn parse_port_spec(&mut self) {
        self.start_node(SyntaxKind::PORT_SPEC);

        self.start_node(SyntaxKind::IDENTIFIER_LIST);
        self.expect(SyntaxKind::IDENT);
        loop {
            self.skip_trivia();
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
            self.skip_trivia();
            self.expect(SyntaxKind::IDENT);
        }
        self.finish_node();

        self.expect_after_trivia(SyntaxKind::COLON);

        self.skip_trivia();
        if self.at_any(&[
            SyntaxKind::IN_KW,
            SyntaxKind::OUT_KW,
            SyntaxKind::INOUT_KW,
            SyntaxKind::BUFFER_KW,
            SyntaxKind::LINKAGE_KW,
            SyntaxKind::IDENT,
        ]) {
            self.bump(); // direction token
        } else {
            self.error("expected port direction");
        }

        self.parse_port_dimension();
        self.finish_node();
    }

    /// PortDimension = type-name RangeSpec?
    fn parse_port_dimension(&mut self) {
        self.skip_trivia();
        self.start_node(SyntaxKind::PORT_DIMENSION);
        self.expect(SyntaxKind::IDENT); // bit, bit_vector, ...
        self.skip_trivia();
        if self.at(SyntaxKind::L_PAREN) {
            self.parse_range_spec();
        }
        self.finish_node();
    }

    /// RangeSpec = `(` INTEGER (`to` | `downto`) INTEGER `)`
    ///
    /// An identifier is tolerated in the keyword slot; semantic reduction
    /// rejects anything that isn't `to`/`downto`.
    fn parse_range_spec(&mut self) {
        self.start_node(SyntaxKind::RANGE_SPEC);
        self.bump(); // (
        self.expect_after_trivia(SyntaxKind::INTEGER);
        self.skip_trivia();
        if self.at_any(&[SyntaxKind::TO_KW, SyntaxKind::DOWNTO_KW, SyntaxKind::IDENT]) {
            self.bump();
        } else {
            self.error("expected `to` or `downto`");
        }
        self.expect_after_trivia(SyntaxKind::INTEGER);
        self.expect_after_trivia(SyntaxKind::R_PAREN);
        self.finish_node();
    }

    /// UseClause = `use` ... `;` — carried, not interpreted
    fn parse_use_clause(&mut self) {
        self.start_node(SyntaxKind::USE_CLAUSE);
        self.bump(); // use
        self.skip_to_semicolon_inclusive();
        self.finish_node();
    }

    /// AttributeSpec = `attribute` ... `;` — carried, not interpreted
    ///
    /// The `PIN_MAP of <entity> : entity is <constant>` indirection is not
    /// resolved; the pin map is picked up from the `PIN_MAP_STRING` constant
    /// itself, as the typed AST exposes its declared type name.
    fn parse_attribute_spec(&mut self) {
        self.start_node(SyntaxKind::ATTRIBUTE_SPEC);
        self.bump(); // attribute
        self.skip_to_semicolon_inclusive();
        self.finish_node();
    }

    /// ConstantDecl = `constant` name `:` type-name `:=` StringExpr `;`
    ///
    /// Non-string constant values (`CELL_INFO` aggregates and the like)
    /// are carried without interpretation.
    fn parse_constant_decl(&mut self) {
        self.start_node(SyntaxKind::CONSTANT_DECL);
        self.bump(); // constant
        self.expect_after_trivia(SyntaxKind::IDENT);
        self.expect_after_trivia(SyntaxKind::COLON);
        self.expect_after_trivia(SyntaxKind::IDENT);
        self.expect_after_trivia(SyntaxKind::COLON_EQ);
        self.skip_trivia();
        if self.at(SyntaxKind::STRING) {
            self.parse_string_expr();
            self.expect_after_trivia(SyntaxKind::SEMICOLON);
        } else {
            self.skip_to_semicolon_inclusive();
        }
        self.finish_node();
    }

    /// StringExpr = STRING (`&` STRING)*
    fn parse_string_expr(&mut self) {
        self.skip_trivia();
        self.start_node(SyntaxKind::STRING_EXPR);
        self.expect(SyntaxKind::STRING);
        loop {
            self.skip_trivia();
            if !self.eat(SyntaxKind::AMP) {
                break;
            }
            self.skip_trivia();
            self.expect(SyntaxKind::STRING);
        }
        self.finish_node();
    }

    /// Any other statement: consume losslessly through the terminating `;`
    fn parse_other_stmt(&mut self) {
        self.start_node(SyntaxKind::OTHER_STMT);
        self.skip_to_semicolon_inclusive();
        self.finish_node();
    }

    fn skip_to_semicolon_inclusive(&mut self) {
        while !self.at_eof() && !self.at(SyntaxKind::SEMICOLON) {
            self.bump();
        }
        self.eat(SyntaxKind::SEMICOLON);
    }

    // =========================================================================
    // Grammar — pin-map sub-language
    // =========================================================================

    /// PortMap = Entry (`,` Entry)*
    ///
    /// A trailing comma is tolerated: pin-map string fragments conventionally
    /// end each line with one.
    fn parse_port_map(&mut self) {
        self.start_node(SyntaxKind::PORT_MAP);

        loop {
            self.skip_trivia();
            if self.at_eof() {
                break;
            }
            let pos_before = self.pos;
            self.parse_port_map_entry();
            self.skip_trivia();
            if !self.eat(SyntaxKind::COMMA) && !self.at_eof() {
                self.error("expected `,` between pin-map entries");
            }
            if self.pos == pos_before && !self.at_eof() {
                self.bump();
            }
        }

        self.finish_node();
    }

    /// Entry = PortName `:` PinList
    fn parse_port_map_entry(&mut self) {
        self.start_node(SyntaxKind::PORT_MAP_ENTRY);
        self.parse_port_name();
        self.expect_after_trivia(SyntaxKind::COLON);
        self.parse_pin_list();
        self.finish_node();
    }

    /// PortName = IDENT (`(` INTEGER `)`)?
    fn parse_port_name(&mut self) {
        self.skip_trivia();
        self.start_node(SyntaxKind::PORT_NAME);
        self.expect(SyntaxKind::IDENT);
        self.skip_trivia();
        if self.eat(SyntaxKind::L_PAREN) {
            self.expect_after_trivia(SyntaxKind::INTEGER);
            self.expect_after_trivia(SyntaxKind::R_PAREN);
        }
        self.finish_node();
    }

    /// PinList = INTEGER | `(` INTEGER (`,` INTEGER)* `)`
    fn parse_pin_list(&mut self) {
        self.skip_trivia();
        self.start_node(SyntaxKind::PIN_LIST);
        if self.eat(SyntaxKind::L_PAREN) {
            self.expect_after_trivia(SyntaxKind::INTEGER);
            loop {
                self.skip_trivia();
                if !self.eat(SyntaxKind::COMMA) {
                    break;
                }
                self.expect_after_trivia(SyntaxKind::INTEGER);
            }
            self.expect_after_trivia(SyntaxKind::R_PAREN);
        } else {
            self.expect(SyntaxKind::INTEGER);
        }
        self.finish_node();
    }
}
