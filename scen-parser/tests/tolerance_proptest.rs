//! Property tests for the tolerance guarantees: no input panics the parser,
//! no input makes it loop, and well-formed input parses clean.

use proptest::prelude::*;
use scen_parser::scen::loader::parse_scenario_source;
use scen_parser::{CodeTables, GameConfig, ParseContext};

fn parse_diag_count(source: &str) -> usize {
    let tables = CodeTables::standard();
    let game = GameConfig::default();
    let mut ctx = ParseContext::new(&tables, &game);
    parse_scenario_source(source, "prop.eu", &mut ctx);
    ctx.into_diagnostics().len()
}

proptest! {
    /// Arbitrary text from the format's character repertoire must never
    /// panic or hang, no matter how mangled.
    #[test]
    fn arbitrary_input_terminates(source in "[ \t\n{}=#\"a-z0-9.\\-]{0,200}") {
        parse_diag_count(&source);
    }

    /// Arbitrary bytes, including ones the lexer cannot classify.
    #[test]
    fn arbitrary_unicode_terminates(source in "\\PC{0,80}") {
        parse_diag_count(&source);
    }

    /// A well-formed province block round-trips without diagnostics and
    /// keeps its values.
    #[test]
    fn well_formed_provinces_parse_clean(
        id in 1i32..10_000,
        ic in 0i32..200,
        manpower in 0.0f64..100.0,
    ) {
        let source = format!(
            "province = {{ id = {} ic = {} manpower = {:.2} }}\n",
            id, ic, manpower
        );
        let tables = CodeTables::standard();
        let game = GameConfig::default();
        let mut ctx = ParseContext::new(&tables, &game);
        let s = parse_scenario_source(&source, "prop.eu", &mut ctx);
        prop_assert!(ctx.diagnostics().is_empty());
        prop_assert_eq!(s.provinces.len(), 1);
        prop_assert_eq!(s.provinces[0].id, Some(id));
        prop_assert_eq!(s.provinces[0].ic, Some(f64::from(ic)));
    }

    /// Separators and comments are invisible: commas, semicolons and
    /// comment styles may be sprinkled anywhere between tokens.
    #[test]
    fn separators_are_invisible(use_comma in any::<bool>(), comment in "[a-z ]{0,20}") {
        let sep = if use_comma { "," } else { ";" };
        let source = format!(
            "province = {{ id = 1{sep} ic = 2 # {comment}\n}} // {comment}\n",
        );
        let tables = CodeTables::standard();
        let game = GameConfig::default();
        let mut ctx = ParseContext::new(&tables, &game);
        let s = parse_scenario_source(&source, "prop.eu", &mut ctx);
        prop_assert!(ctx.diagnostics().is_empty());
        prop_assert_eq!(s.provinces[0].ic, Some(2.0));
    }
}
