//! The generic `command = { … }` grammar
//!
//! Commands are deliberately opaque: `type` plus up to four argument slots,
//! each a number or a word. Validating them against the full command
//! catalogue is the game engine's job, not the parser's.

use crate::scen::context::ParseContext;
use crate::scen::engine::SectionBody;
use crate::scen::lexing::{TokenKind, TokenStream};
use crate::scen::model::{Command, CommandArg};
use crate::scen::values;

pub fn command(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Command> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut cmd = Command::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "type" => {
                if let Some(word) = values::identifier(ts, ctx) {
                    cmd.kind = Some(word.to_ascii_lowercase());
                }
            }
            "which" => arg(&mut cmd.which, ts, ctx),
            "value" => arg(&mut cmd.value, ts, ctx),
            "when" => arg(&mut cmd.when, ts, ctx),
            "where" => arg(&mut cmd.where_, ts, ctx),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(cmd)
}

fn arg(slot: &mut Option<CommandArg>, ts: &mut TokenStream, ctx: &mut ParseContext) {
    if !values::expect_equal(ts, ctx) {
        return;
    }
    match ts.next_token() {
        Some(tok) => match tok.kind {
            TokenKind::Number(v) => *slot = Some(CommandArg::Number(v)),
            TokenKind::Ident(w) => *slot = Some(CommandArg::Word(w)),
            TokenKind::Str(s) => *slot = Some(CommandArg::Word(s)),
            _ => {
                ctx.error(
                    crate::scen::diagnostics::DiagnosticCode::InvalidToken,
                    tok.line,
                    format!("expected a command argument, found {}", tok.kind),
                );
                ts.push_back(tok);
            }
        },
        None => ctx.error(
            crate::scen::diagnostics::DiagnosticCode::InvalidToken,
            ts.line(),
            "expected a command argument, found end of input",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scen::game::GameConfig;
    use crate::scen::tables::CodeTables;

    fn parse(source: &str) -> Option<Command> {
        let tables = CodeTables::standard();
        let game = GameConfig::default();
        let mut ctx = ParseContext::new(&tables, &game);
        let mut ts = TokenStream::new(source, "test");
        command(&mut ts, &mut ctx)
    }

    #[test]
    fn test_command_arguments() {
        let cmd = parse("= { type = max_organization which = infantry value = 10 }").unwrap();
        assert_eq!(cmd.kind.as_deref(), Some("max_organization"));
        assert_eq!(cmd.which, Some(CommandArg::Word("infantry".to_string())));
        assert_eq!(cmd.value, Some(CommandArg::Number(10.0)));
        assert_eq!(cmd.when, None);
    }

    #[test]
    fn test_type_is_lowercased() {
        let cmd = parse("= { type = Dissent value = -1 }").unwrap();
        assert_eq!(cmd.kind.as_deref(), Some("dissent"));
        assert_eq!(cmd.value, Some(CommandArg::Number(-1.0)));
    }
}
