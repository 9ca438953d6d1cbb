//! File reading and `include` handling
//!
//! The entry points here are the only place the parser touches the
//! filesystem and the only place a hard error can come from: a file that
//! cannot be read at all is a [`LoadError`], everything after that is
//! diagnostics. `include` resolution goes through the [`FileResolver`] trait
//! so hosts with virtual filesystems (mod archives, test fixtures) can
//! supply their own mapping.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::scen::context::ParseContext;
use crate::scen::diagnostics::DiagnosticCode;
use crate::scen::grammars::{scenario, tech, unit_class};
use crate::scen::lexing::TokenStream;
use crate::scen::model::{Scenario, TechGroup, UnitClass};
use crate::scen::tables::UnitClassKind;

/// Hard failure reading a top-level file.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
        }
    }
}

/// Maps `include` paths to files to read.
pub trait FileResolver {
    /// Resolve `include` (as written in the data, possibly with backslash
    /// separators) against the file it appears in. `None` means the include
    /// cannot be found; the parse continues without it.
    fn resolve(&self, include: &str, from: &str) -> Option<PathBuf>;
}

/// The default resolver: try the path as written (with separators
/// normalized), then fall back to a sibling of the including file. The
/// fallback is what makes scenario directories relocatable.
pub struct RelativeResolver;

impl FileResolver for RelativeResolver {
    fn resolve(&self, include: &str, from: &str) -> Option<PathBuf> {
        let normalized = include.replace('\\', "/");
        let as_written = PathBuf::from(&normalized);
        if as_written.is_file() {
            return Some(as_written);
        }
        let dir = Path::new(from).parent()?;
        let name = Path::new(&normalized).file_name()?;
        let sibling = dir.join(name);
        if sibling.is_file() {
            Some(sibling)
        } else {
            None
        }
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a scenario file and everything it `include`s.
pub fn parse_scenario_file(
    path: impl AsRef<Path>,
    ctx: &mut ParseContext,
) -> Result<Scenario, LoadError> {
    let path = path.as_ref();
    let source = read(path)?;
    Ok(parse_scenario_source(&source, &path.display().to_string(), ctx))
}

/// Parse scenario text already in memory. `name` is the identity used in
/// diagnostics and as the base for resolving `include` paths.
pub fn parse_scenario_source(source: &str, name: &str, ctx: &mut ParseContext) -> Scenario {
    let mut out = Scenario::default();
    ctx.push_file(name);
    let mut ts = TokenStream::new(source, name);
    scenario::scenario_document(&mut ts, ctx, &mut out);
    ctx.pop_file();
    out
}

/// Pull one included fragment into the accumulating scenario. Called from
/// the scenario grammar when it meets an `include` clause.
pub(crate) fn include_scenario(
    include: &str,
    line: u32,
    out: &mut Scenario,
    ctx: &mut ParseContext,
) {
    if ctx.depth() >= ctx.include_depth_limit {
        ctx.error(
            DiagnosticCode::IncludeDepth,
            line,
            format!(
                "include of `{}` nested deeper than {} files; skipped",
                include, ctx.include_depth_limit
            ),
        );
        return;
    }
    let resolved = ctx.resolver().resolve(include, ctx.current_file());
    let path = match resolved {
        Some(path) => path,
        None => {
            ctx.error(
                DiagnosticCode::MissingInclude,
                line,
                format!("included file `{}` not found", include),
            );
            return;
        }
    };
    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(err) => {
            ctx.error(
                DiagnosticCode::MissingInclude,
                line,
                format!("cannot read included file `{}`: {}", path.display(), err),
            );
            return;
        }
    };
    let name = path.display().to_string();
    ctx.push_file(&name);
    let mut ts = TokenStream::new(&source, &name);
    scenario::scenario_document(&mut ts, ctx, out);
    ctx.pop_file();
}

/// Parse one technology-tree file.
pub fn parse_tech_file(
    path: impl AsRef<Path>,
    ctx: &mut ParseContext,
) -> Result<TechGroup, LoadError> {
    let path = path.as_ref();
    let source = read(path)?;
    Ok(parse_tech_source(&source, &path.display().to_string(), ctx))
}

pub fn parse_tech_source(source: &str, name: &str, ctx: &mut ParseContext) -> TechGroup {
    ctx.push_file(name);
    let mut ts = TokenStream::new(source, name);
    let group = tech::tech_document(&mut ts, ctx);
    ctx.pop_file();
    group
}

/// Parse one unit-class file against the division or brigade type table.
pub fn parse_unit_class_file(
    path: impl AsRef<Path>,
    kind: UnitClassKind,
    ctx: &mut ParseContext,
) -> Result<Vec<UnitClass>, LoadError> {
    let path = path.as_ref();
    let source = read(path)?;
    Ok(parse_unit_class_source(
        &source,
        &path.display().to_string(),
        kind,
        ctx,
    ))
}

pub fn parse_unit_class_source(
    source: &str,
    name: &str,
    kind: UnitClassKind,
    ctx: &mut ParseContext,
) -> Vec<UnitClass> {
    ctx.push_file(name);
    let mut ts = TokenStream::new(source, name);
    let classes = unit_class::unit_class_document(&mut ts, ctx, kind);
    ctx.pop_file();
    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scen::game::GameConfig;
    use crate::scen::tables::CodeTables;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_include_merges_into_one_scenario() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "germany.inc",
            "country = { tag = GER manpower = 500 ownedprovinces = { 301 } }",
        );
        let main = write_file(
            dir.path(),
            "1936.eu",
            r#"
            name = "The Road to War"
            country = { tag = GER capital = 300 ownedprovinces = { 300 } }
            include = "scenario\data\germany.inc"
            "#,
        );

        let tables = CodeTables::standard();
        let game = GameConfig::default();
        let mut ctx = ParseContext::new(&tables, &game);
        let s = parse_scenario_file(&main, &mut ctx).unwrap();

        assert_eq!(s.countries.len(), 1);
        let ger = s.country("GER").unwrap();
        assert_eq!(ger.capital, Some(300));
        assert_eq!(ger.manpower, Some(500.0));
        assert_eq!(ger.owned_provinces, vec![300, 301]);
        assert!(ctx.diagnostics().is_empty(), "{}", ctx.diagnostics());
    }

    #[test]
    fn test_missing_include_is_a_diagnostic_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let main = write_file(
            dir.path(),
            "1936.eu",
            "name = \"X\"\ninclude = \"nowhere.inc\"\ncountry = { tag = ENG }",
        );

        let tables = CodeTables::standard();
        let game = GameConfig::default();
        let mut ctx = ParseContext::new(&tables, &game);
        let s = parse_scenario_file(&main, &mut ctx).unwrap();

        assert_eq!(s.countries.len(), 1);
        assert!(ctx
            .diagnostics()
            .iter()
            .any(|d| d.code == DiagnosticCode::MissingInclude));
    }

    #[test]
    fn test_self_include_stops_at_depth_limit() {
        let dir = tempfile::tempdir().unwrap();
        let main = write_file(dir.path(), "loop.eu", "include = \"loop.eu\"");

        let tables = CodeTables::standard();
        let game = GameConfig::default();
        let mut ctx = ParseContext::new(&tables, &game).with_include_depth_limit(4);
        parse_scenario_file(&main, &mut ctx).unwrap();

        assert!(ctx
            .diagnostics()
            .iter()
            .any(|d| d.code == DiagnosticCode::IncludeDepth));
    }

    #[test]
    fn test_presentation_keys_in_fragments_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "extra.inc",
            "name = \"Fragment Name\"\ncountry = { tag = ITA }",
        );
        let main = write_file(
            dir.path(),
            "1936.eu",
            "name = \"The Road to War\"\ninclude = \"extra.inc\"",
        );

        let tables = CodeTables::standard();
        let game = GameConfig::default();
        let mut ctx = ParseContext::new(&tables, &game);
        let s = parse_scenario_file(&main, &mut ctx).unwrap();

        assert_eq!(s.name.as_deref(), Some("The Road to War"));
        assert_eq!(s.countries.len(), 1);
    }

    #[test]
    fn test_unreadable_top_level_file_is_a_load_error() {
        let tables = CodeTables::standard();
        let game = GameConfig::default();
        let mut ctx = ParseContext::new(&tables, &game);
        let err = parse_scenario_file("/definitely/not/here.eu", &mut ctx).unwrap_err();
        assert!(err.to_string().contains("not/here.eu"));
    }

    #[test]
    fn test_diagnostics_name_the_included_file() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "bad.inc", "country = { tag = QQQ }");
        let main = write_file(dir.path(), "1936.eu", "include = \"bad.inc\"");

        let tables = CodeTables::standard();
        let game = GameConfig::default();
        let mut ctx = ParseContext::new(&tables, &game);
        parse_scenario_file(&main, &mut ctx).unwrap();

        let unknown_tag = ctx
            .diagnostics()
            .iter()
            .find(|d| d.code == DiagnosticCode::UnknownTag)
            .unwrap();
        assert!(unknown_tag.file.ends_with("bad.inc"));
    }
}
