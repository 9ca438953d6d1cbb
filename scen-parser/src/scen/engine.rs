//! The reusable section grammar
//!
//! Every nested section in every data kind follows the same shape:
//!
//! ```text
//! keyword = {
//!     clause ...
//!     clause ...
//! }
//! ```
//!
//! [`SectionBody`] owns that shape once: consume `=`, consume `{`, then loop
//! delivering lower-cased keywords to the caller until `}` or end of input.
//! The caller dispatches each keyword against its own table and simply keeps
//! calling [`SectionBody::next_keyword`].
//!
//! ## Missing-brace recovery
//!
//! Real data files omit closing braces often enough that giving up is not an
//! option. When the body loop meets a token that cannot start a clause, it
//! compares that token's line with the line of the last clause that parsed:
//!
//! * different line: the enclosing `}` was probably omitted. The token is
//!   pushed back and the loop ends, so the *parent* section re-reads it as
//!   its own next keyword and the rest of the document stays in sync.
//! * same line: a local syntax error. The rest of the physical line is
//!   discarded and this body keeps going.
//!
//! The heuristic is deliberately line-based and nothing more; data files in
//! the wild rely on this exact tolerance, including its misfire on input
//! that packs several clauses onto one line.

use crate::scen::context::ParseContext;
use crate::scen::diagnostics::DiagnosticCode;
use crate::scen::lexing::{Token, TokenKind, TokenStream};
use crate::scen::values;

/// Body loop state for one `= { … }` section.
pub struct SectionBody {
    /// Line of the last clause that successfully began (its keyword's line).
    last_clause_line: u32,
    /// Line of the keyword most recently handed to the caller; promoted to
    /// `last_clause_line` once the caller comes back for the next keyword.
    keyword_line: u32,
}

impl SectionBody {
    /// Consume `= {`. Returns `None` (aborting exactly this section) if
    /// either token is missing; the offending token is pushed back so the
    /// caller's own loop can reinterpret it.
    pub fn open(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Self> {
        if !values::expect_equal(ts, ctx) {
            return None;
        }
        Self::enter(ts, ctx)
    }

    /// Consume `{` only; for grammars that have already read the `=`.
    pub fn enter(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Self> {
        match ts.next_token() {
            Some(Token { kind: TokenKind::Open, line }) => Some(SectionBody {
                last_clause_line: line,
                keyword_line: line,
            }),
            Some(tok) => {
                ctx.error(
                    DiagnosticCode::MissingOpenBrace,
                    tok.line,
                    format!("expected `{{` to open a section, found {}", tok.kind),
                );
                ts.push_back(tok);
                None
            }
            None => {
                ctx.error(
                    DiagnosticCode::MissingOpenBrace,
                    ts.line(),
                    "expected `{` to open a section, found end of input",
                );
                None
            }
        }
    }

    /// Deliver the next clause keyword, lower-cased, or `None` when this
    /// section is finished (closed, input ended, or abandoned by the
    /// missing-brace heuristic).
    pub fn next_keyword(&mut self, ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<String> {
        // The clause for the previously delivered keyword is behind us now.
        self.last_clause_line = self.keyword_line;
        loop {
            let tok = match ts.next_token() {
                Some(tok) => tok,
                None => {
                    ctx.error(
                        DiagnosticCode::MissingClosingBrace,
                        ts.line(),
                        "missing closing brace at end of input",
                    );
                    return None;
                }
            };
            match tok.kind {
                TokenKind::Close => return None,
                TokenKind::Ident(word) => {
                    self.keyword_line = tok.line;
                    return Some(word.to_ascii_lowercase());
                }
                _ => {
                    ctx.error(
                        DiagnosticCode::InvalidToken,
                        tok.line,
                        format!("unexpected {} in section body", tok.kind),
                    );
                    if tok.line != self.last_clause_line {
                        // Probably an omitted `}`: hand the token to the
                        // parent section unconsumed.
                        ts.push_back(tok);
                        return None;
                    }
                    ts.skip_line(tok.line);
                }
            }
        }
    }

    /// Standard handling for a keyword with no entry in the caller's table:
    /// log it and discard the rest of its physical line.
    pub fn unknown_keyword(&self, keyword: &str, ts: &mut TokenStream, ctx: &mut ParseContext) {
        ctx.warning(
            DiagnosticCode::UnknownKeyword,
            self.keyword_line,
            format!("unknown keyword `{}`", keyword),
        );
        ts.skip_line(self.keyword_line);
    }

    /// Line the current keyword was read on.
    pub fn keyword_line(&self) -> u32 {
        self.keyword_line
    }
}

/// Keyword loop for a whole file: same dispatch rules as a section body but
/// without surrounding braces. End of input is the normal terminator; a stray
/// `}` is diagnosed and skipped.
pub struct FileBody {
    line: u32,
}

impl FileBody {
    pub fn new() -> Self {
        FileBody { line: 1 }
    }

    pub fn next_keyword(&mut self, ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<String> {
        loop {
            let tok = ts.next_token()?;
            match tok.kind {
                TokenKind::Ident(word) => {
                    self.line = tok.line;
                    return Some(word.to_ascii_lowercase());
                }
                _ => {
                    ctx.error(
                        DiagnosticCode::InvalidToken,
                        tok.line,
                        format!("unexpected {} at top level", tok.kind),
                    );
                    ts.skip_line(tok.line);
                }
            }
        }
    }

    pub fn unknown_keyword(&self, keyword: &str, ts: &mut TokenStream, ctx: &mut ParseContext) {
        ctx.warning(
            DiagnosticCode::UnknownKeyword,
            self.line,
            format!("unknown keyword `{}` at top level", keyword),
        );
        ts.skip_line(self.line);
    }
}

impl Default for FileBody {
    fn default() -> Self {
        FileBody::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scen::game::GameConfig;
    use crate::scen::tables::CodeTables;

    fn ctx_pair() -> (CodeTables, GameConfig) {
        (CodeTables::standard(), GameConfig::default())
    }

    fn keywords(source: &str) -> (Vec<String>, usize) {
        let (tables, game) = ctx_pair();
        let mut ctx = ParseContext::new(&tables, &game);
        let mut ts = TokenStream::new(source, "test");
        let mut body = SectionBody::open(&mut ts, &mut ctx).expect("section should open");
        let mut out = Vec::new();
        while let Some(kw) = body.next_keyword(&mut ts, &mut ctx) {
            // Swallow the clause value so the loop can continue.
            ts.next_token();
            ts.next_token();
            out.push(kw);
        }
        (out, ctx.into_diagnostics().len())
    }

    #[test]
    fn test_plain_body() {
        let (kws, diags) = keywords("= { a = 1 b = 2 }");
        assert_eq!(kws, vec!["a", "b"]);
        assert_eq!(diags, 0);
    }

    #[test]
    fn test_keywords_are_lowercased() {
        let (kws, _) = keywords("= { Capital = 300 }");
        assert_eq!(kws, vec!["capital"]);
    }

    #[test]
    fn test_missing_equal_aborts_section() {
        let (tables, game) = ctx_pair();
        let mut ctx = ParseContext::new(&tables, &game);
        let mut ts = TokenStream::new("{ a = 1 }", "test");
        assert!(SectionBody::open(&mut ts, &mut ctx).is_none());
        assert_eq!(ctx.diagnostics().len(), 1);
        // The `{` is pushed back for the caller.
        assert_eq!(ts.next_token().map(|t| t.kind), Some(TokenKind::Open));
    }

    #[test]
    fn test_end_of_input_logs_missing_brace() {
        let (kws, diags) = keywords("= { a = 1");
        assert_eq!(kws, vec!["a"]);
        assert_eq!(diags, 1);
    }

    #[test]
    fn test_same_line_garbage_is_skipped_locally() {
        // The stray `=` sits on the same line as the last parsed clause, so
        // the body discards the rest of that line and keeps going.
        let (kws, diags) = keywords("= { a = 1 = =\nb = 2 }");
        assert_eq!(kws, vec!["a", "b"]);
        assert_eq!(diags, 1);
    }

    #[test]
    fn test_next_line_garbage_returns_to_caller() {
        let (tables, game) = ctx_pair();
        let mut ctx = ParseContext::new(&tables, &game);
        // `}` omitted: the number 42 on the next line is the parent's token.
        let mut ts = TokenStream::new("= { a = 1\n42", "test");
        let mut body = SectionBody::open(&mut ts, &mut ctx).unwrap();
        assert_eq!(body.next_keyword(&mut ts, &mut ctx), Some("a".to_string()));
        ts.next_token();
        ts.next_token();
        assert_eq!(body.next_keyword(&mut ts, &mut ctx), None);
        // Not swallowed: the parent sees the 42.
        assert_eq!(ts.next_token().map(|t| t.kind), Some(TokenKind::Number(42.0)));
    }

    #[test]
    fn test_unknown_keyword_discards_line() {
        let (tables, game) = ctx_pair();
        let mut ctx = ParseContext::new(&tables, &game);
        let mut ts = TokenStream::new("= { madeup = 1 2 3\nb = 2 }", "test");
        let mut body = SectionBody::open(&mut ts, &mut ctx).unwrap();
        let kw = body.next_keyword(&mut ts, &mut ctx).unwrap();
        assert_eq!(kw, "madeup");
        body.unknown_keyword(&kw, &mut ts, &mut ctx);
        assert_eq!(body.next_keyword(&mut ts, &mut ctx), Some("b".to_string()));
    }

    #[test]
    fn test_file_body_skips_stray_close() {
        let (tables, game) = ctx_pair();
        let mut ctx = ParseContext::new(&tables, &game);
        let mut ts = TokenStream::new("}\nname = 1", "test");
        let mut body = FileBody::new();
        assert_eq!(body.next_keyword(&mut ts, &mut ctx), Some("name".to_string()));
        assert_eq!(ctx.diagnostics().len(), 1);
    }
}
