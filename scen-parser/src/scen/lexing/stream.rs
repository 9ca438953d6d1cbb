//! Pushback token stream with line tracking
//!
//! `TokenStream` wraps the logos lexer and adds the two things the grammars
//! need beyond raw tokens: the 1-based line of every token (for diagnostics
//! and the missing-brace heuristic) and a single-slot pushback so a grammar
//! can undo exactly one read. There is never a queue of reserved tokens;
//! reserving twice without an intervening read is a programming error.

use logos::Logos;

use super::tokens::{RawToken, Token, TokenKind};

/// Token source for one file (or one in-memory string).
///
/// End of input is represented as `None` from [`TokenStream::next_token`],
/// never as a token kind.
pub struct TokenStream<'src> {
    lexer: logos::Lexer<'src, RawToken>,
    /// Byte offset of the start of every line, for offset -> line lookup.
    line_starts: Vec<usize>,
    file: String,
    reserved: Option<Token>,
    /// Line of the most recently delivered token.
    line: u32,
}

impl<'src> TokenStream<'src> {
    pub fn new(source: &'src str, file: impl Into<String>) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        TokenStream {
            lexer: RawToken::lexer(source),
            line_starts,
            file: file.into(),
            reserved: None,
            line: 1,
        }
    }

    /// Identity of the file this stream reads, as given to [`TokenStream::new`].
    pub fn file(&self) -> &str {
        &self.file
    }

    /// 1-based line of the most recently delivered token.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Deliver the next token, or `None` at end of input.
    ///
    /// A reserved token is re-delivered first. Whitespace, separators and
    /// comments never show up here; unclassifiable characters come back as
    /// [`TokenKind::Invalid`] so the grammars can diagnose and recover.
    pub fn next_token(&mut self) -> Option<Token> {
        if let Some(tok) = self.reserved.take() {
            self.line = tok.line;
            return Some(tok);
        }
        let raw = self.lexer.next()?;
        let line = self.line_of(self.lexer.span().start);
        self.line = line;
        let kind = match raw {
            Ok(RawToken::Equal) => TokenKind::Equal,
            Ok(RawToken::Open) => TokenKind::Open,
            Ok(RawToken::Close) => TokenKind::Close,
            Ok(RawToken::Ident) => TokenKind::Ident(self.lexer.slice().to_string()),
            Ok(RawToken::Quoted) => {
                let slice = self.lexer.slice();
                TokenKind::Str(slice[1..slice.len() - 1].to_string())
            }
            Ok(RawToken::Number) => match self.lexer.slice().parse::<f64>() {
                Ok(value) => TokenKind::Number(value),
                Err(_) => TokenKind::Invalid(self.lexer.slice().to_string()),
            },
            Err(()) => TokenKind::Invalid(self.lexer.slice().to_string()),
        };
        Some(Token::new(kind, line))
    }

    /// Reserve `token` to be re-delivered by the next [`TokenStream::next_token`].
    ///
    /// At most one token may be outstanding.
    pub fn push_back(&mut self, token: Token) {
        debug_assert!(
            self.reserved.is_none(),
            "push_back called twice without an intervening read"
        );
        self.reserved = Some(token);
    }

    /// Discard every remaining token on physical line `line`.
    ///
    /// The first token on a later line is pushed back so the caller's loop
    /// sees it normally. Used when a grammar gives up on the rest of a
    /// malformed clause.
    pub fn skip_line(&mut self, line: u32) {
        while let Some(tok) = self.next_token() {
            if tok.line > line {
                self.push_back(tok);
                break;
            }
        }
    }

    fn line_of(&self, offset: usize) -> u32 {
        match self.line_starts.binary_search(&offset) {
            Ok(i) => i as u32 + 1,
            Err(i) => i as u32,
        }
    }
}
