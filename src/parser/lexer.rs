//! Logos-based lexer for BSDL.
//!
//! BSDL rides on VHDL lexical rules: keywords are case-insensitive,
//! comments run from `--` to end of line, and string literals carry the
//! embedded pin-map sub-language.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"--[^\n]*")]
    LineComment,

    // =========================================================================
    // KEYWORDS (must come before Ident; case-insensitive per VHDL)
    // =========================================================================
    #[token("entity", ignore(ascii_case))]
    Entity,
    #[token("is", ignore(ascii_case))]
    Is,
    #[token("end", ignore(ascii_case))]
    End,
    #[token("generic", ignore(ascii_case))]
    Generic,
    #[token("port", ignore(ascii_case))]
    Port,
    #[token("use", ignore(ascii_case))]
    Use,
    #[token("all", ignore(ascii_case))]
    All,
    #[token("attribute", ignore(ascii_case))]
    Attribute,
    #[token("of", ignore(ascii_case))]
    Of,
    #[token("constant", ignore(ascii_case))]
    Constant,
    #[token("in", ignore(ascii_case))]
    In,
    #[token("out", ignore(ascii_case))]
    Out,
    #[token("inout", ignore(ascii_case))]
    Inout,
    #[token("buffer", ignore(ascii_case))]
    Buffer,
    #[token("linkage", ignore(ascii_case))]
    Linkage,
    #[token("to", ignore(ascii_case))]
    To,
    #[token("downto", ignore(ascii_case))]
    Downto,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    Decimal,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r#""[^"]*""#)]
    String,

    // =========================================================================
    // PUNCTUATION (multi-character first)
    // =========================================================================
    #[token(":=")]
    ColonEq,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("&")]
    Amp,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::LineComment => SyntaxKind::LINE_COMMENT,
            LogosToken::Entity => SyntaxKind::ENTITY_KW,
            LogosToken::Is => SyntaxKind::IS_KW,
            LogosToken::End => SyntaxKind::END_KW,
            LogosToken::Generic => SyntaxKind::GENERIC_KW,
            LogosToken::Port => SyntaxKind::PORT_KW,
            LogosToken::Use => SyntaxKind::USE_KW,
            LogosToken::All => SyntaxKind::ALL_KW,
            LogosToken::Attribute => SyntaxKind::ATTRIBUTE_KW,
            LogosToken::Of => SyntaxKind::OF_KW,
            LogosToken::Constant => SyntaxKind::CONSTANT_KW,
            LogosToken::In => SyntaxKind::IN_KW,
            LogosToken::Out => SyntaxKind::OUT_KW,
            LogosToken::Inout => SyntaxKind::INOUT_KW,
            LogosToken::Buffer => SyntaxKind::BUFFER_KW,
            LogosToken::Linkage => SyntaxKind::LINKAGE_KW,
            LogosToken::To => SyntaxKind::TO_KW,
            LogosToken::Downto => SyntaxKind::DOWNTO_KW,
            LogosToken::Ident => SyntaxKind::IDENT,
            LogosToken::Decimal => SyntaxKind::DECIMAL,
            LogosToken::Integer => SyntaxKind::INTEGER,
            LogosToken::String => SyntaxKind::STRING,
            LogosToken::ColonEq => SyntaxKind::COLON_EQ,
            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Semicolon => SyntaxKind::SEMICOLON,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Amp => SyntaxKind::AMP,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::Minus => SyntaxKind::MINUS,
            LogosToken::Star => SyntaxKind::STAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        tokenize(input)
            .into_iter()
            .map(|t| t.kind)
            .filter(|k| !k.is_trivia())
            .collect()
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(
            kinds("ENTITY entity Entity"),
            vec![SyntaxKind::ENTITY_KW; 3]
        );
        assert_eq!(kinds("DOWNTO downto"), vec![SyntaxKind::DOWNTO_KW; 2]);
    }

    #[test]
    fn identifiers_and_literals() {
        assert_eq!(
            kinds("TCK bit_vector 42 \"a : 1\""),
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::IDENT,
                SyntaxKind::INTEGER,
                SyntaxKind::STRING
            ]
        );
    }

    #[test]
    fn comment_is_trivia() {
        let tokens = tokenize("-- pin map\nport");
        assert_eq!(tokens[0].kind, SyntaxKind::LINE_COMMENT);
        assert!(tokens[0].kind.is_trivia());
        assert_eq!(tokens[2].kind, SyntaxKind::PORT_KW);
    }

    #[test]
    fn lossless_offsets() {
        let input = "port (A : in bit);";
        let tokens = tokenize(input);
        let total: usize = tokens.iter().map(|t| t.text.len()).sum();
        assert_eq!(total, input.len());
        assert_eq!(tokens[0].offset, TextSize::new(0));
    }
}
