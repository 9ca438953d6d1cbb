//! Literal-conversion grids for the value parsers.

use rstest::rstest;
use scen_parser::scen::lexing::TokenStream;
use scen_parser::scen::values;
use scen_parser::{CodeTables, GameConfig, ParseContext, Severity};

fn with_ctx<T>(source: &str, f: impl FnOnce(&mut TokenStream, &mut ParseContext) -> T) -> T {
    let tables = CodeTables::standard();
    let game = GameConfig::default();
    let mut ctx = ParseContext::new(&tables, &game);
    let mut ts = TokenStream::new(source, "test");
    f(&mut ts, &mut ctx)
}

#[rstest]
#[case("= yes", Some(true))]
#[case("= Yes", Some(true))]
#[case("= YES", Some(true))]
#[case("= no", Some(false))]
#[case("= NO", Some(false))]
#[case("= 1", Some(true))]
#[case("= 0", Some(false))]
#[case("= 2", None)]
#[case("= on", None)]
#[case("= \"yes\"", None)]
fn boolean_literals(#[case] source: &str, #[case] expected: Option<bool>) {
    assert_eq!(with_ctx(source, values::boolean), expected);
}

#[rstest]
#[case("= { month = 0 }", 1)]
#[case("= { month = 11 }", 12)]
#[case("= { month = january }", 1)]
#[case("= { month = December }", 12)]
#[case("= { month = JULY }", 7)]
fn month_conversions(#[case] source: &str, #[case] expected: u32) {
    let date = with_ctx(source, values::date).expect("date block");
    assert_eq!(date.month, expected);
}

#[rstest]
#[case("= { day = 0 }", 1)]
#[case("= { day = 16 }", 17)]
#[case("= { day = 29 }", 30)]
#[case("= { day = 30 }", 31)]
fn day_conversions(#[case] source: &str, #[case] expected: u32) {
    let date = with_ctx(source, values::date).expect("date block");
    assert_eq!(date.day, expected);
}

#[rstest]
#[case("= ger", "GER")]
#[case("= Eng", "ENG")]
#[case("= \"sov\"", "SOV")]
fn country_tags_uppercase(#[case] source: &str, #[case] expected: &str) {
    let tag = with_ctx(source, values::country_tag).expect("a known tag");
    assert_eq!(tag.as_str(), expected);
}

#[test]
fn day_severities_line_up() {
    let tables = CodeTables::standard();
    let game = GameConfig::default();

    // day = 30 is tolerated with an info note.
    let mut ctx = ParseContext::new(&tables, &game);
    let mut ts = TokenStream::new("= { day = 30 }", "test");
    values::date(&mut ts, &mut ctx);
    let diag = ctx.diagnostics().iter().next().expect("one note");
    assert_eq!(diag.severity, Severity::Info);

    // day = 45 is out of range but still stored.
    let mut ctx = ParseContext::new(&tables, &game);
    let mut ts = TokenStream::new("= { day = 45 }", "test");
    let date = values::date(&mut ts, &mut ctx).expect("date block");
    assert_eq!(date.day, 46);
    let diag = ctx.diagnostics().iter().next().expect("one warning");
    assert_eq!(diag.severity, Severity::Warning);
}
