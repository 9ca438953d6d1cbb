//! The four domain grammars, layered on the section engine
//!
//! Each grammar is a keyword table over [`crate::scen::engine::SectionBody`]:
//! a match from lower-cased keyword to a value parser or a nested grammar.
//! Unknown keywords and malformed clauses degrade locally; only a missing
//! `= {` aborts a section, and even that only loses the one section.

pub mod commands;
pub mod country;
pub mod scenario;
pub mod tech;
pub mod trigger;
pub mod unit_class;
pub mod units;
