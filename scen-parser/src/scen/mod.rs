//! Main module for the scen parsing library

pub mod context;
pub mod diagnostics;
pub mod engine;
pub mod game;
pub mod grammars;
pub mod lexing;
pub mod loader;
pub mod model;
pub mod tables;
pub mod values;
