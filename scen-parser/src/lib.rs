//! # scen-parser
//!
//! A tolerant parser for the nested `key = value` / `key = { … }` data files
//! used by strategy-game scenarios: scenario descriptions, technology trees,
//! unit-class definitions and boolean trigger trees.
//!
//! The format has no formal grammar and real-world data files are routinely
//! malformed, so the parser never gives up on a whole file because of a single
//! bad token. Every recovery decision is reported through a [`Diagnostics`]
//! collection instead of an error return; the only hard failures are I/O
//! conditions such as a nonexistent file.
//!
//! Layout follows the data flow:
//!
//! src/scen
//!   ├── lexing        Token definitions (logos) and the pushback token stream
//!   ├── values        Reusable `= <literal>` sub-parsers
//!   ├── engine        The shared section body loop and its recovery heuristic
//!   ├── grammars      The four domain grammars layered on the engine
//!   ├── model         The records the grammars populate
//!   └── loader        File reading and `include` handling

pub mod scen;

pub use scen::context::ParseContext;
pub use scen::diagnostics::{Diagnostic, DiagnosticCode, Diagnostics, Severity};
pub use scen::game::{GameConfig, GameEdition};
pub use scen::loader::{
    parse_scenario_file, parse_tech_file, parse_unit_class_file, FileResolver, LoadError,
    RelativeResolver,
};
pub use scen::model::{Scenario, TechGroup, UnitClass};
pub use scen::tables::{CodeTables, CountryTag, UnitClassKind};
