//! Token definitions for the scenario data format
//!
//! The tokens are defined using the logos derive macro. The grammar is tiny:
//! the whole format is identifiers, numbers, quoted strings and the three
//! structural characters `=`, `{`, `}`.

use logos::Logos;
use std::fmt;

/// Raw lexical classes produced by the logos lexer.
///
/// Comments and separators never reach the grammars; they are skipped here.
/// Characters logos cannot classify come back as a lexing error and are
/// surfaced as [`TokenKind::Invalid`] by the stream wrapper.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n,;]+")]
#[logos(skip r"#[^\n]*")]
#[logos(skip r"//[^\n]*")]
pub enum RawToken {
    #[token("=")]
    Equal,

    #[token("{")]
    Open,

    #[token("}")]
    Close,

    #[regex(r#""[^"]*""#)]
    Quoted,

    // Sign and decimal part are optional. Priority beats the identifier rule
    // so that `1936` is a number, not an identifier.
    #[regex(r"[+-]?[0-9]+(\.[0-9]+)?", priority = 3)]
    Number,

    // Maximal alphanumeric/underscore run. Dots and dashes occur in the wild
    // (file stems, hyphenated names) and are folded into the identifier.
    #[regex(r"[A-Za-z_][A-Za-z0-9_.\-]*")]
    Ident,
}

/// A classified token as delivered to the grammars.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Bare word: keyword, enum value, country tag, month name, …
    Ident(String),
    /// Numeric literal; integers and reals share one representation.
    Number(f64),
    /// Double-quoted string, quotes stripped.
    Str(String),
    Equal,
    Open,
    Close,
    /// Character sequence the lexer could not classify.
    Invalid(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(w) => write!(f, "`{}`", w),
            TokenKind::Number(n) => write!(f, "number {}", n),
            TokenKind::Str(s) => write!(f, "\"{}\"", s),
            TokenKind::Equal => write!(f, "`=`"),
            TokenKind::Open => write!(f, "`{{`"),
            TokenKind::Close => write!(f, "`}}`"),
            TokenKind::Invalid(s) => write!(f, "invalid input `{}`", s),
        }
    }
}

/// A token plus the 1-based line it started on.
///
/// The line rides along so that a pushed-back token keeps its position; the
/// missing-brace heuristic compares token lines, never stream state.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Token { kind, line }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_tokens() {
        let mut lex = RawToken::lexer("= { }");
        assert_eq!(lex.next(), Some(Ok(RawToken::Equal)));
        assert_eq!(lex.next(), Some(Ok(RawToken::Open)));
        assert_eq!(lex.next(), Some(Ok(RawToken::Close)));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_numbers_and_idents() {
        let mut lex = RawToken::lexer("capital = 300 tag = GER x = -1.5");
        let kinds: Vec<_> = std::iter::from_fn(|| lex.next()).collect();
        assert_eq!(
            kinds,
            vec![
                Ok(RawToken::Ident),
                Ok(RawToken::Equal),
                Ok(RawToken::Number),
                Ok(RawToken::Ident),
                Ok(RawToken::Equal),
                Ok(RawToken::Ident),
                Ok(RawToken::Ident),
                Ok(RawToken::Equal),
                Ok(RawToken::Number),
            ]
        );
    }

    #[test]
    fn test_comments_and_separators_are_skipped() {
        let mut lex = RawToken::lexer("a = 1 # trailing comment\n// full line\nb = 2;,");
        let count = std::iter::from_fn(|| lex.next()).count();
        assert_eq!(count, 6);
    }

    #[test]
    fn test_unclassifiable_is_error() {
        let mut lex = RawToken::lexer("a = %");
        assert_eq!(lex.next(), Some(Ok(RawToken::Ident)));
        assert_eq!(lex.next(), Some(Ok(RawToken::Equal)));
        assert_eq!(lex.next(), Some(Err(())));
    }
}
