//! End-to-end scenario parsing through the public API.

use scen_parser::scen::loader::parse_scenario_source;
use scen_parser::{CodeTables, DiagnosticCode, GameConfig, ParseContext};

fn parse(source: &str) -> (scen_parser::Scenario, Vec<scen_parser::Diagnostic>) {
    let tables = CodeTables::standard();
    let game = GameConfig::default();
    let mut ctx = ParseContext::new(&tables, &game);
    let scenario = parse_scenario_source(source, "1936.eu", &mut ctx);
    (scenario, ctx.into_diagnostics().into_vec())
}

const SCENARIO: &str = r#"
# 1936 grand campaign, trimmed
name = "The Road to War"
panel = "scenarios\data\scen_1936.bmp"

header = {
    name = "The Road to War"
    startdate = { year = 1936 }
    enddate = { year = 1948 }
    selectable = { GER ENG FRA SOV USA JAP ITA }
    GER = { bitmap = "ger.bmp" desc = "GERMANY_DESC" }
    SOV = { bitmap = "sov.bmp" desc = "SOVIET_DESC" }
    difficulty = 2
    gamespeed = 3
}

globaldata = {
    startdate = { year = 1936 month = 0 day = 0 }
    enddate = { year = 1948 month = 0 day = 0 }
    axis = { id = { type = 15000 id = 1 } participant = { GER } }
    allies = { participant = { ENG FRA } }
    comintern = { participant = { SOV } }
    treaty = {
        type = non_aggression
        country = GER
        country = POL
        startdate = { year = 1934 month = 0 day = 25 }
        expirydate = { year = 1944 month = 0 day = 25 }
    }
    flags = { abyssinian_war = 1 }
}

map = { name = wholemap top = { x = 0 y = 0 } bottom = { x = 18944 y = 7296 } }

province = { id = 300 ic = 12 infra = 8 anti_air = 2 manpower = 1.53 }
province = { id = 301 ic = 6 naval_base = 5 }

country = {
    tag = GER
    capital = 300
    manpower = 520
    dissent = 0
    transports = 120
    escorts = 30
    ownedprovinces = { 300 301 }
    controlledprovinces = { 300 301 }
    nationalprovinces = { 300 301 }
    techapps = { 1010 1020 1110 }
    policy = {
        date = { year = 0 month = 0 day = 0 }
        democratic = 2
        political_left = 1
        free_market = 5
        freedom = 3
        professional_army = 8
        defense_lobby = 8
        interventionism = 7
    }
    headofstate = { type = 9 id = 1 }
    landunit = {
        id = { type = 10000 id = 1 }
        name = "I. Armeekorps"
        location = 300
        division = {
            id = { type = 10000 id = 2 }
            name = "1. Infanterie-Division"
            type = infantry
            model = 1
            strength = 100
            extra1 = artillery
            brigade_model1 = 2
        }
    }
    division_development = {
        id = { type = 10000 id = 50 }
        name = "2. Panzer-Division"
        type = armor
        cost = 12.5
        date = { year = 1936 month = 10 day = 4 }
    }
    convoy = {
        id = { type = 19000 id = 1 }
        transports = 10
        energy = yes
        path = { 500 501 502 }
    }
}

country = { tag = POL capital = 543 ownedprovinces = { 543 } }
"#;

#[test]
fn parses_a_trimmed_grand_campaign_without_diagnostics() {
    let (s, diags) = parse(SCENARIO);
    assert!(diags.is_empty(), "{:?}", diags);

    assert_eq!(s.name.as_deref(), Some("The Road to War"));
    let header = s.header.as_ref().expect("header");
    assert_eq!(header.selectable.len(), 7);
    assert_eq!(header.majors.len(), 2);

    let globals = s.globals.as_ref().expect("globaldata");
    assert_eq!(
        globals.start_date.map(|d| (d.year, d.month, d.day)),
        Some((1936, 1, 1))
    );
    assert_eq!(globals.treaties.len(), 1);
    assert_eq!(globals.treaties[0].parties.len(), 2);

    assert_eq!(s.provinces.len(), 2);
    assert_eq!(s.countries.len(), 2);

    let ger = s.country("GER").expect("GER record");
    assert_eq!(ger.capital, Some(300));
    assert_eq!(ger.owned_provinces, vec![300, 301]);
    assert_eq!(ger.land_units.len(), 1);
    assert_eq!(ger.land_units[0].divisions.len(), 1);
    assert_eq!(ger.division_developments.len(), 1);
    assert_eq!(ger.division_developments[0].cost, Some(12.5));
    assert_eq!(ger.convoys[0].path, vec![500, 501, 502]);
}

#[test]
fn malformed_clause_loses_one_clause_not_the_file() {
    let (s, diags) = parse(
        "country = {\n tag = GER\n capital = x300\n manpower = 520\n }\ncountry = { tag = POL }\n",
    );
    assert_eq!(s.countries.len(), 2);
    let ger = s.country("GER").unwrap();
    assert_eq!(ger.capital, None);
    assert_eq!(ger.manpower, Some(520.0));
    assert!(diags.iter().any(|d| d.code == DiagnosticCode::InvalidToken));
}

#[test]
fn unclosed_list_recovers_on_the_next_line() {
    // The province list never closes. `capital` on a fresh line ends the
    // list and is re-read as the country's own next keyword; only the brace
    // is lost.
    let (s, diags) = parse(
        "country = {\n tag = GER\n ownedprovinces = { 300 301\n capital = 300\n }\n",
    );
    let ger = s.country("GER").unwrap();
    assert_eq!(ger.owned_provinces, vec![300, 301]);
    assert_eq!(ger.capital, Some(300));
    assert!(diags.iter().any(|d| d.code == DiagnosticCode::InvalidToken));
}

#[test]
fn diagnostics_carry_file_and_line() {
    let (_, diags) = parse("country = {\n tag = GER\n capital = oops\n }\n");
    let d = diags
        .iter()
        .find(|d| d.code == DiagnosticCode::InvalidToken)
        .expect("a diagnostic for the bad literal");
    assert_eq!(d.file, "1936.eu");
    assert_eq!(d.line, 3);
}
