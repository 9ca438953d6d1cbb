//! Reusable `= <literal>` sub-parsers
//!
//! Every clause value in the format is parsed by one of these. They all share
//! the same two-step contract: consume the `=`, then consume and convert the
//! literal. Both steps fail soft: a diagnostic is emitted, the offending
//! token is pushed back for the enclosing body loop to reinterpret, and
//! `None` is returned so the caller leaves the field at its default. Nothing
//! here ever aborts the enclosing section.

use crate::scen::context::ParseContext;
use crate::scen::diagnostics::DiagnosticCode;
use crate::scen::engine::SectionBody;
use crate::scen::lexing::{Token, TokenKind, TokenStream};
use crate::scen::model::{Date, Point, TypeId};
use crate::scen::tables::CountryTag;

/// Consume the `=` that introduces every clause value. On mismatch the
/// offending token is pushed back and `false` returned.
pub fn expect_equal(ts: &mut TokenStream, ctx: &mut ParseContext) -> bool {
    match ts.next_token() {
        Some(Token {
            kind: TokenKind::Equal,
            ..
        }) => true,
        Some(tok) => {
            ctx.error(
                DiagnosticCode::MissingEquals,
                tok.line,
                format!("expected `=`, found {}", tok.kind),
            );
            ts.push_back(tok);
            false
        }
        None => {
            ctx.error(
                DiagnosticCode::MissingEquals,
                ts.line(),
                "expected `=`, found end of input",
            );
            false
        }
    }
}

fn literal(ts: &mut TokenStream, ctx: &mut ParseContext, wanted: &str) -> Option<Token> {
    match ts.next_token() {
        Some(tok) => Some(tok),
        None => {
            ctx.error(
                DiagnosticCode::InvalidToken,
                ts.line(),
                format!("expected {}, found end of input", wanted),
            );
            None
        }
    }
}

fn reject(ts: &mut TokenStream, ctx: &mut ParseContext, tok: Token, wanted: &str) {
    ctx.error(
        DiagnosticCode::InvalidToken,
        tok.line,
        format!("expected {}, found {}", wanted, tok.kind),
    );
    ts.push_back(tok);
}

/// `key = 42`
pub fn integer(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<i32> {
    real(ts, ctx).map(|v| v as i32)
}

/// `key = 1.5`
pub fn real(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<f64> {
    if !expect_equal(ts, ctx) {
        return None;
    }
    let tok = literal(ts, ctx, "a number")?;
    match tok.kind {
        TokenKind::Number(v) => Some(v),
        _ => {
            reject(ts, ctx, tok, "a number");
            None
        }
    }
}

/// `key = yes` / `no` (any case) or `1` / `0`. Any other literal is rejected
/// and the field stays unset.
pub fn boolean(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<bool> {
    if !expect_equal(ts, ctx) {
        return None;
    }
    let tok = literal(ts, ctx, "`yes` or `no`")?;
    match &tok.kind {
        TokenKind::Ident(w) if w.eq_ignore_ascii_case("yes") => Some(true),
        TokenKind::Ident(w) if w.eq_ignore_ascii_case("no") => Some(false),
        TokenKind::Number(v) if *v == 1.0 => Some(true),
        TokenKind::Number(v) if *v == 0.0 => Some(false),
        _ => {
            reject(ts, ctx, tok, "`yes` or `no`");
            None
        }
    }
}

/// `key = "quoted text"`
pub fn quoted(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<String> {
    if !expect_equal(ts, ctx) {
        return None;
    }
    let tok = literal(ts, ctx, "a quoted string")?;
    match tok.kind {
        TokenKind::Str(s) => Some(s),
        _ => {
            reject(ts, ctx, tok, "a quoted string");
            None
        }
    }
}

/// `key = bareword`, case preserved.
pub fn identifier(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<String> {
    if !expect_equal(ts, ctx) {
        return None;
    }
    let tok = literal(ts, ctx, "an identifier")?;
    match tok.kind {
        TokenKind::Ident(w) => Some(w),
        _ => {
            reject(ts, ctx, tok, "an identifier");
            None
        }
    }
}

/// Quoted string or bare identifier, case preserved either way.
pub fn text(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<String> {
    if !expect_equal(ts, ctx) {
        return None;
    }
    let tok = literal(ts, ctx, "a string or identifier")?;
    match tok.kind {
        TokenKind::Str(s) => Some(s),
        TokenKind::Ident(w) => Some(w),
        _ => {
            reject(ts, ctx, tok, "a string or identifier");
            None
        }
    }
}

/// `key = GER` or `key = "GER"`: upper-cased and validated against the known
/// tag table and the active subset. An unknown or inactive tag fails this
/// clause only.
pub fn country_tag(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<CountryTag> {
    if !expect_equal(ts, ctx) {
        return None;
    }
    let tok = literal(ts, ctx, "a country tag")?;
    let word = match &tok.kind {
        TokenKind::Ident(w) => w.clone(),
        TokenKind::Str(s) => s.clone(),
        _ => {
            reject(ts, ctx, tok, "a country tag");
            return None;
        }
    };
    lookup_tag(&word, tok.line, ctx)
}

fn lookup_tag(word: &str, line: u32, ctx: &mut ParseContext) -> Option<CountryTag> {
    match ctx.tables().country(word) {
        Some(tag) => Some(tag),
        None => {
            let message = if ctx.tables().is_known_tag(word) {
                format!("country tag `{}` is not active in this scenario", word)
            } else {
                format!("unknown country tag `{}`", word)
            };
            ctx.warning(DiagnosticCode::UnknownTag, line, message);
            None
        }
    }
}

/// `key = { year = … month = … day = … hour = … }`
///
/// `month` accepts a 0-based number or a month name; `day` is 0-based in the
/// source and stored 1-based. `day = 30` is tolerated with an info note
/// (several stock files use it); anything outside [0, 30] is flagged
/// out-of-range but stored anyway.
pub fn date(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Date> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut date = Date::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "year" => {
                if let Some(y) = integer(ts, ctx) {
                    date.year = y;
                }
            }
            "month" => {
                if let Some(m) = month_value(ts, ctx) {
                    date.month = m;
                }
            }
            "day" => {
                if let Some(d) = day_value(ts, ctx) {
                    date.day = d;
                }
            }
            "hour" => {
                if let Some(h) = integer(ts, ctx) {
                    date.hour = h.max(0) as u32;
                }
            }
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(date)
}

fn month_value(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<u32> {
    if !expect_equal(ts, ctx) {
        return None;
    }
    let tok = literal(ts, ctx, "a month number or name")?;
    match &tok.kind {
        TokenKind::Number(v) => {
            let m = *v as i64;
            if !(0..=11).contains(&m) {
                ctx.warning(
                    DiagnosticCode::ValueOutOfRange,
                    tok.line,
                    format!("month index {} outside 0..11", m),
                );
            }
            Some((m + 1).max(1) as u32)
        }
        TokenKind::Ident(w) => match ctx.tables().month(w) {
            Some(m) => Some(m),
            None => {
                ctx.warning(
                    DiagnosticCode::UnknownValue,
                    tok.line,
                    format!("unknown month name `{}`", w),
                );
                None
            }
        },
        _ => {
            reject(ts, ctx, tok, "a month number or name");
            None
        }
    }
}

fn day_value(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<u32> {
    if !expect_equal(ts, ctx) {
        return None;
    }
    let tok = literal(ts, ctx, "a day number")?;
    match tok.kind {
        TokenKind::Number(v) => {
            let d = v as i64;
            if d == 30 {
                ctx.info(
                    DiagnosticCode::UnusualValue,
                    tok.line,
                    "day = 30 (stored as 31)",
                );
            } else if !(0..=30).contains(&d) {
                ctx.warning(
                    DiagnosticCode::ValueOutOfRange,
                    tok.line,
                    format!("day {} outside 0..30", d),
                );
            }
            Some((d + 1).max(0) as u32)
        }
        _ => {
            reject(ts, ctx, tok, "a day number");
            None
        }
    }
}

/// `key = { type = N id = M }`
pub fn type_id(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<TypeId> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut pair = TypeId::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "type" => {
                if let Some(t) = integer(ts, ctx) {
                    pair.ty = t;
                }
            }
            "id" => {
                if let Some(id) = integer(ts, ctx) {
                    pair.id = id;
                }
            }
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(pair)
}

/// `key = { x = N y = M }`
pub fn point(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Point> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut p = Point::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "x" => {
                if let Some(x) = integer(ts, ctx) {
                    p.x = x;
                }
            }
            "y" => {
                if let Some(y) = integer(ts, ctx) {
                    p.y = y;
                }
            }
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(p)
}

fn open_list(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<u32> {
    if !expect_equal(ts, ctx) {
        return None;
    }
    match ts.next_token() {
        Some(Token {
            kind: TokenKind::Open,
            line,
        }) => Some(line),
        Some(tok) => {
            ctx.error(
                DiagnosticCode::MissingOpenBrace,
                tok.line,
                format!("expected `{{` to open a list, found {}", tok.kind),
            );
            ts.push_back(tok);
            None
        }
        None => {
            ctx.error(
                DiagnosticCode::MissingOpenBrace,
                ts.line(),
                "expected `{` to open a list, found end of input",
            );
            None
        }
    }
}

/// `key = { 1 2 3 }`: bare numbers until `}`. The missing-brace heuristic
/// applies here exactly as in section bodies, keyed to the line of the last
/// accepted item.
pub fn id_list(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Vec<i32>> {
    let open_line = open_list(ts, ctx)?;
    Some(id_list_body(open_line, ts, ctx))
}

/// Result of a list clause that also accepts the bare word `all`
/// (dormant leaders/ministers/teams).
#[derive(Debug, Clone, PartialEq)]
pub enum IdListOrAll {
    All,
    Ids(Vec<i32>),
}

/// `key = all` or `key = { 1 2 3 }`
pub fn id_list_or_all(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<IdListOrAll> {
    if !expect_equal(ts, ctx) {
        return None;
    }
    match ts.next_token() {
        Some(Token {
            kind: TokenKind::Ident(w),
            ..
        }) if w.eq_ignore_ascii_case("all") => Some(IdListOrAll::All),
        Some(tok) => {
            // Not `all`: put the token back and expect a regular list.
            ts.push_back(tok);
            list_after_equal(ts, ctx).map(IdListOrAll::Ids)
        }
        None => {
            ctx.error(
                DiagnosticCode::InvalidToken,
                ts.line(),
                "expected `all` or a list, found end of input",
            );
            None
        }
    }
}

fn list_after_equal(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Vec<i32>> {
    let open_line = match ts.next_token() {
        Some(Token {
            kind: TokenKind::Open,
            line,
        }) => line,
        Some(tok) => {
            ctx.error(
                DiagnosticCode::MissingOpenBrace,
                tok.line,
                format!("expected `{{` to open a list, found {}", tok.kind),
            );
            ts.push_back(tok);
            return None;
        }
        None => {
            ctx.error(
                DiagnosticCode::MissingOpenBrace,
                ts.line(),
                "expected `{` to open a list, found end of input",
            );
            return None;
        }
    };
    Some(id_list_body(open_line, ts, ctx))
}

fn id_list_body(open_line: u32, ts: &mut TokenStream, ctx: &mut ParseContext) -> Vec<i32> {
    let mut last_line = open_line;
    let mut items = Vec::new();
    loop {
        let tok = match ts.next_token() {
            Some(tok) => tok,
            None => {
                ctx.error(
                    DiagnosticCode::MissingClosingBrace,
                    ts.line(),
                    "missing closing brace in id list",
                );
                return items;
            }
        };
        match tok.kind {
            TokenKind::Close => return items,
            TokenKind::Number(v) => {
                last_line = tok.line;
                items.push(v as i32);
            }
            _ => {
                ctx.error(
                    DiagnosticCode::InvalidToken,
                    tok.line,
                    format!("unexpected {} in id list", tok.kind),
                );
                if tok.line != last_line {
                    ts.push_back(tok);
                    return items;
                }
                ts.skip_line(tok.line);
            }
        }
    }
}

/// `key = { GER ENG "FRA" }`: country tags until `}`. Unknown tags are
/// diagnosed and dropped without ending the list.
pub fn tag_list(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Vec<CountryTag>> {
    let mut last_line = open_list(ts, ctx)?;
    let mut items = Vec::new();
    loop {
        let tok = match ts.next_token() {
            Some(tok) => tok,
            None => {
                ctx.error(
                    DiagnosticCode::MissingClosingBrace,
                    ts.line(),
                    "missing closing brace in tag list",
                );
                return Some(items);
            }
        };
        match &tok.kind {
            TokenKind::Close => return Some(items),
            TokenKind::Ident(w) => {
                last_line = tok.line;
                if let Some(tag) = lookup_tag(w, tok.line, ctx) {
                    items.push(tag);
                }
            }
            TokenKind::Str(s) => {
                last_line = tok.line;
                let word = s.clone();
                if let Some(tag) = lookup_tag(&word, tok.line, ctx) {
                    items.push(tag);
                }
            }
            _ => {
                ctx.error(
                    DiagnosticCode::InvalidToken,
                    tok.line,
                    format!("unexpected {} in tag list", tok.kind),
                );
                if tok.line != last_line {
                    ts.push_back(tok);
                    return Some(items);
                }
                ts.skip_line(tok.line);
            }
        }
    }
}
