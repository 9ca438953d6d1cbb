//! Command-line interface for scen
//! Parses a scenario, technology or unit-class file, prints the record as
//! JSON or a summary, and reports every recovery diagnostic on stderr.
//!
//! Usage:
//!   scen `<path>` [--kind `<kind>`] [--format `<format>`] [--config `<file>`]

use clap::{Arg, ArgAction, Command};
use scen_parser::{ParseContext, UnitClassKind};

fn main() {
    let matches = Command::new("scen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tolerant reader for strategy-game scenario data files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the data file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("kind")
                .long("kind")
                .short('k')
                .help("File kind: 'scenario', 'tech', 'divisions' or 'brigades'")
                .default_value("scenario"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'summary' or 'json'")
                .default_value("summary"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Exit nonzero when any error-level diagnostic was emitted")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let kind = matches.get_one::<String>("kind").expect("kind has a default");
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default");
    let strict = matches.get_flag("strict");

    let mut loader = scen_config::Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    let config = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let tables = config.code_tables();
    let game = config.game_config();
    let mut ctx = ParseContext::new(&tables, &game)
        .with_include_depth_limit(config.parser.include_depth_limit);

    let output = parse(path, kind, format, &mut ctx);

    for diagnostic in ctx.diagnostics().iter() {
        eprintln!("{}", diagnostic);
    }
    println!("{}", output);

    if strict && ctx.diagnostics().error_count() > 0 {
        std::process::exit(2);
    }
}

fn parse(path: &str, kind: &str, format: &str, ctx: &mut ParseContext) -> String {
    match kind {
        "scenario" => {
            let scenario = scen_parser::parse_scenario_file(path, ctx)
                .unwrap_or_else(|e| fail(&e.to_string()));
            match format {
                "json" => to_json(&scenario),
                "summary" => format!(
                    "{}: {} countries, {} provinces, {} event files",
                    scenario.name.as_deref().unwrap_or(path),
                    scenario.countries.len(),
                    scenario.provinces.len(),
                    scenario.event_files.len()
                ),
                other => fail(&format!(
                    "Format '{}' not supported; use 'summary' or 'json'",
                    other
                )),
            }
        }
        "tech" => {
            let group =
                scen_parser::parse_tech_file(path, ctx).unwrap_or_else(|e| fail(&e.to_string()));
            match format {
                "json" => to_json(&group),
                "summary" => format!(
                    "tech group {}: {} applications",
                    group.id.map_or_else(|| "?".to_string(), |id| id.to_string()),
                    group.applications.len()
                ),
                other => fail(&format!(
                    "Format '{}' not supported; use 'summary' or 'json'",
                    other
                )),
            }
        }
        "divisions" | "brigades" => {
            let table = if kind == "divisions" {
                UnitClassKind::Division
            } else {
                UnitClassKind::Brigade
            };
            let classes = scen_parser::parse_unit_class_file(path, table, ctx)
                .unwrap_or_else(|e| fail(&e.to_string()));
            match format {
                "json" => to_json(&classes),
                "summary" => format!(
                    "{} classes, {} models",
                    classes.len(),
                    classes.iter().map(|c| c.models.len()).sum::<usize>()
                ),
                other => fail(&format!(
                    "Format '{}' not supported; use 'summary' or 'json'",
                    other
                )),
            }
        }
        other => fail(&format!(
            "Kind '{}' not supported; use 'scenario', 'tech', 'divisions' or 'brigades'",
            other
        )),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error serializing output: {}", e);
        std::process::exit(1);
    })
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
