//! The trigger grammar
//!
//! A trigger block is a uniform tree: every keyword is a trigger kind and
//! every value is a scalar or another block. Unknown keywords are the only
//! table misses possible, and they skip a line like everywhere else.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::scen::context::ParseContext;
use crate::scen::diagnostics::DiagnosticCode;
use crate::scen::engine::SectionBody;
use crate::scen::lexing::{TokenKind, TokenStream};
use crate::scen::model::{Trigger, TriggerKind, TriggerValue};
use crate::scen::values;

static KEYWORDS: Lazy<HashMap<&'static str, TriggerKind>> =
    Lazy::new(|| TriggerKind::TABLE.iter().copied().collect());

/// `trigger = { … }`: the children of the (implicit AND) root.
pub fn trigger_block(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Vec<Trigger>> {
    let mut body = SectionBody::open(ts, ctx)?;
    Some(children(&mut body, ts, ctx))
}

fn children(body: &mut SectionBody, ts: &mut TokenStream, ctx: &mut ParseContext) -> Vec<Trigger> {
    let mut out = Vec::new();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match KEYWORDS.get(key.as_str()) {
            Some(&kind) => {
                if let Some(value) = trigger_value(ts, ctx) {
                    out.push(Trigger { kind, value });
                }
            }
            None => body.unknown_keyword(&key, ts, ctx),
        }
    }
    out
}

/// A scalar or a nested block, decided by one token of lookahead after `=`.
fn trigger_value(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<TriggerValue> {
    if !values::expect_equal(ts, ctx) {
        return None;
    }
    let tok = match ts.next_token() {
        Some(tok) => tok,
        None => {
            ctx.error(
                DiagnosticCode::InvalidToken,
                ts.line(),
                "expected a trigger value, found end of input",
            );
            return None;
        }
    };
    match tok.kind {
        TokenKind::Open => {
            ts.push_back(tok);
            let mut body = SectionBody::enter(ts, ctx)?;
            Some(TriggerValue::Block(children(&mut body, ts, ctx)))
        }
        TokenKind::Number(v) => Some(TriggerValue::Number(v)),
        TokenKind::Ident(w) => Some(TriggerValue::Symbol(w)),
        TokenKind::Str(s) => Some(TriggerValue::Symbol(s)),
        _ => {
            ctx.error(
                DiagnosticCode::InvalidToken,
                tok.line,
                format!("expected a trigger value, found {}", tok.kind),
            );
            ts.push_back(tok);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scen::game::GameConfig;
    use crate::scen::tables::CodeTables;

    fn parse(source: &str) -> (Option<Vec<Trigger>>, Vec<crate::scen::diagnostics::Diagnostic>) {
        let tables = CodeTables::standard();
        let game = GameConfig::default();
        let mut ctx = ParseContext::new(&tables, &game);
        let mut ts = TokenStream::new(source, "test");
        let t = trigger_block(&mut ts, &mut ctx);
        (t, ctx.into_diagnostics().into_vec())
    }

    #[test]
    fn test_nested_tree() {
        let (t, diags) = parse(
            r#"= {
                year = 1941
                OR = {
                    war = { country = GER country = SOV }
                    flag = barbarossa
                }
                NOT = { exists = RSI }
            }"#,
        );
        let t = t.unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t[0].kind, TriggerKind::Year);
        assert_eq!(t[0].value, TriggerValue::Number(1941.0));
        match &t[1].value {
            TriggerValue::Block(or) => {
                assert_eq!(or.len(), 2);
                assert_eq!(or[0].kind, TriggerKind::War);
                match &or[0].value {
                    TriggerValue::Block(war) => assert_eq!(war.len(), 2),
                    other => panic!("expected block, got {:?}", other),
                }
                assert_eq!(or[1].value, TriggerValue::Symbol("barbarossa".to_string()));
            }
            other => panic!("expected block, got {:?}", other),
        }
        assert_eq!(t[2].kind, TriggerKind::Not);
        assert!(diags.is_empty(), "{:?}", diags);
    }

    #[test]
    fn test_unknown_trigger_keyword_skips_line() {
        let (t, diags) = parse("= { frobnicate = 3\nyear = 1939 }");
        let t = t.unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TriggerKind::Year);
        assert!(diags
            .iter()
            .any(|d| d.code == DiagnosticCode::UnknownKeyword));
    }

    #[test]
    fn test_keywords_lookup_is_case_insensitive() {
        // Keywords arrive lower-cased from the body loop.
        let (t, _) = parse("= { AND = { MONTH = 5 } }");
        let t = t.unwrap();
        assert_eq!(t[0].kind, TriggerKind::And);
    }
}
