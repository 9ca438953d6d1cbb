//! The technology-tree file grammar
//!
//! One file holds one `technology = { … }` group: a tree page with layout
//! labels, event markers and the researchable applications.

use crate::scen::context::ParseContext;
use crate::scen::diagnostics::DiagnosticCode;
use crate::scen::engine::{FileBody, SectionBody};
use crate::scen::grammars::commands;
use crate::scen::grammars::units::assign;
use crate::scen::lexing::TokenStream;
use crate::scen::model::{TechApplication, TechComponent, TechEvent, TechGroup, TechLabel};
use crate::scen::values;

/// Parse one technology file into a group. Later `technology` sections in
/// the same file fold into the same group (stock files only ever have one).
pub fn tech_document(ts: &mut TokenStream, ctx: &mut ParseContext) -> TechGroup {
    let mut body = FileBody::new();
    let mut group = TechGroup::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "technology" => technology(ts, ctx, &mut group),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    group
}

fn technology(ts: &mut TokenStream, ctx: &mut ParseContext, group: &mut TechGroup) {
    let mut body = match SectionBody::open(ts, ctx) {
        Some(b) => b,
        None => return,
    };
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "id" => assign(&mut group.id, values::integer(ts, ctx)),
            "category" => {
                if let Some(word) = values::identifier(ts, ctx) {
                    let word = word.to_ascii_lowercase();
                    if !ctx.tables().is_tech_category(&word) {
                        ctx.warning(
                            DiagnosticCode::UnknownValue,
                            body.keyword_line(),
                            format!("unknown tech category `{}`", word),
                        );
                    }
                    // Stored even when unknown; mods add categories.
                    group.category = Some(word);
                }
            }
            "name" => assign(&mut group.name, values::text(ts, ctx)),
            "desc" => assign(&mut group.desc, values::text(ts, ctx)),
            "label" => {
                if let Some(l) = label(ts, ctx) {
                    group.labels.push(l);
                }
            }
            "event" => {
                if let Some(e) = event(ts, ctx) {
                    group.events.push(e);
                }
            }
            "application" => {
                if let Some(a) = application(ts, ctx) {
                    group.applications.push(a);
                }
            }
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
}

fn label(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<TechLabel> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut l = TechLabel::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "tag" | "name" => assign(&mut l.text, values::text(ts, ctx)),
            "position" => assign(&mut l.position, values::point(ts, ctx)),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(l)
}

fn event(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<TechEvent> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut e = TechEvent::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "id" => assign(&mut e.id, values::integer(ts, ctx)),
            "position" => assign(&mut e.position, values::point(ts, ctx)),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(e)
}

fn application(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<TechApplication> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut a = TechApplication::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "id" => assign(&mut a.id, values::integer(ts, ctx)),
            "name" => assign(&mut a.name, values::text(ts, ctx)),
            "desc" => assign(&mut a.desc, values::text(ts, ctx)),
            "position" => assign(&mut a.position, values::point(ts, ctx)),
            "picture" => assign(&mut a.picture, values::text(ts, ctx)),
            "year" => assign(&mut a.year, values::integer(ts, ctx)),
            "component" => {
                if let Some(c) = component(ts, ctx) {
                    a.components.push(c);
                }
            }
            "required" => {
                if let Some(ids) = values::id_list(ts, ctx) {
                    a.required.extend(ids);
                }
            }
            "or_required" => {
                if let Some(ids) = values::id_list(ts, ctx) {
                    a.or_required.extend(ids);
                }
            }
            "effects" => effects(ts, ctx, &mut a),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(a)
}

fn component(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<TechComponent> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut c = TechComponent::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "id" => assign(&mut c.id, values::integer(ts, ctx)),
            "name" => assign(&mut c.name, values::text(ts, ctx)),
            "type" => assign(&mut c.specialty, values::identifier(ts, ctx)),
            "value" => assign(&mut c.difficulty, values::integer(ts, ctx)),
            "double_time" => assign(&mut c.double_time, values::boolean(ts, ctx)),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(c)
}

/// `effects = { command = { … } command = { … } }`
fn effects(ts: &mut TokenStream, ctx: &mut ParseContext, a: &mut TechApplication) {
    let mut body = match SectionBody::open(ts, ctx) {
        Some(b) => b,
        None => return,
    };
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "command" => {
                if let Some(cmd) = commands::command(ts, ctx) {
                    a.effects.push(cmd);
                }
            }
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scen::game::GameConfig;
    use crate::scen::model::CommandArg;
    use crate::scen::tables::CodeTables;

    fn parse(source: &str) -> (TechGroup, Vec<crate::scen::diagnostics::Diagnostic>) {
        let tables = CodeTables::standard();
        let game = GameConfig::default();
        let mut ctx = ParseContext::new(&tables, &game);
        let mut ts = TokenStream::new(source, "tech.txt");
        let group = tech_document(&mut ts, &mut ctx);
        (group, ctx.into_diagnostics().into_vec())
    }

    #[test]
    fn test_tech_tree_page() {
        let (g, diags) = parse(
            r#"
            technology = {
                id = 1
                category = infantry
                name = TECH_CAT_INFANTRY
                label = { tag = LABEL_WW1 position = { x = 10 y = 20 } }
                event = { id = 2040 position = { x = 100 y = 40 } }
                application = {
                    id = 1010
                    name = TECH_APP_INF_1
                    year = 1936
                    component = { id = 1 type = infantry_focus value = 5 }
                    component = { id = 2 type = individual_courage value = 4 double_time = yes }
                    required = { 1000 1200 }
                    or_required = { 1300 }
                    effects = {
                        command = { type = new_model which = infantry value = 2 }
                    }
                }
            }
            "#,
        );
        assert_eq!(g.id, Some(1));
        assert_eq!(g.category.as_deref(), Some("infantry"));
        assert_eq!(g.labels.len(), 1);
        assert_eq!(g.events.len(), 1);
        let app = &g.applications[0];
        assert_eq!(app.components.len(), 2);
        assert_eq!(app.components[1].double_time, Some(true));
        assert_eq!(app.required, vec![1000, 1200]);
        assert_eq!(app.or_required, vec![1300]);
        assert_eq!(app.effects.len(), 1);
        assert_eq!(
            app.effects[0].which,
            Some(CommandArg::Word("infantry".to_string()))
        );
        assert!(diags.is_empty(), "{:?}", diags);
    }

    #[test]
    fn test_unknown_category_is_kept_with_warning() {
        let (g, diags) = parse("technology = { id = 7 category = alchemy }");
        assert_eq!(g.category.as_deref(), Some("alchemy"));
        assert!(diags.iter().any(|d| d.code == DiagnosticCode::UnknownValue));
    }

    #[test]
    fn test_malformed_component_keeps_application() {
        let (g, diags) = parse(
            "technology = { application = {\n id = 1010\n component = {\n id = oops\n }\n year = 1938\n } }",
        );
        let app = &g.applications[0];
        assert_eq!(app.id, Some(1010));
        assert_eq!(app.year, Some(1938));
        assert_eq!(app.components.len(), 1);
        assert_eq!(app.components[0].id, None);
        assert!(!diags.is_empty());
    }
}
