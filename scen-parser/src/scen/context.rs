//! Per-parse context threaded through every grammar call
//!
//! There is deliberately no process-wide parser state. Everything a grammar
//! needs beyond its token stream travels in a [`ParseContext`]: the read-only
//! code tables and game configuration, the diagnostics sink, the resolver for
//! `include` paths, and the stack of file identities that keeps diagnostics
//! honest across nested inclusion.

use crate::scen::diagnostics::{Diagnostic, DiagnosticCode, Diagnostics, Severity};
use crate::scen::game::GameConfig;
use crate::scen::loader::{FileResolver, RelativeResolver};
use crate::scen::tables::CodeTables;

/// Default bound on `include` nesting. The data format itself has no cycle
/// detection, so the loader refuses to recurse past this depth.
pub const DEFAULT_INCLUDE_DEPTH_LIMIT: usize = 16;

pub struct ParseContext<'t> {
    tables: &'t CodeTables,
    game: &'t GameConfig,
    resolver: Box<dyn FileResolver>,
    diagnostics: Diagnostics,
    /// Last-in-first-out: the file currently being read is on top.
    files: Vec<String>,
    pub(crate) include_depth_limit: usize,
}

impl<'t> ParseContext<'t> {
    pub fn new(tables: &'t CodeTables, game: &'t GameConfig) -> Self {
        ParseContext {
            tables,
            game,
            resolver: Box::new(RelativeResolver),
            diagnostics: Diagnostics::new(),
            files: Vec::new(),
            include_depth_limit: DEFAULT_INCLUDE_DEPTH_LIMIT,
        }
    }

    /// Replace the default sibling-path resolver.
    pub fn with_resolver(mut self, resolver: Box<dyn FileResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_include_depth_limit(mut self, limit: usize) -> Self {
        self.include_depth_limit = limit;
        self
    }

    pub fn tables(&self) -> &CodeTables {
        self.tables
    }

    pub fn game(&self) -> &GameConfig {
        self.game
    }

    pub fn resolver(&self) -> &dyn FileResolver {
        self.resolver.as_ref()
    }

    pub fn push_file(&mut self, file: impl Into<String>) {
        self.files.push(file.into());
    }

    pub fn pop_file(&mut self) {
        self.files.pop();
    }

    /// Identity of the file actually being read at this moment.
    pub fn current_file(&self) -> &str {
        self.files.last().map(String::as_str).unwrap_or("<input>")
    }

    /// Depth of the inclusion stack; 1 while reading the file the parse
    /// started from.
    pub fn depth(&self) -> usize {
        self.files.len()
    }

    /// True while reading the top-level scenario file itself. Some scenario
    /// keys are parsed but discarded in included files to avoid duplicate
    /// accumulation.
    pub fn at_top_level(&self) -> bool {
        self.files.len() <= 1
    }

    pub fn error(&mut self, code: DiagnosticCode, line: u32, message: impl Into<String>) {
        self.emit(Severity::Error, code, line, message);
    }

    pub fn warning(&mut self, code: DiagnosticCode, line: u32, message: impl Into<String>) {
        self.emit(Severity::Warning, code, line, message);
    }

    pub fn info(&mut self, code: DiagnosticCode, line: u32, message: impl Into<String>) {
        self.emit(Severity::Info, code, line, message);
    }

    fn emit(&mut self, severity: Severity, code: DiagnosticCode, line: u32, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            severity,
            code,
            message: message.into(),
            file: self.current_file().to_string(),
            line,
        });
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Hand the collected diagnostics back to the caller.
    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}
