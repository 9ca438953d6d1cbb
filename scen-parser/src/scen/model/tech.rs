//! Technology-tree records

use serde::Serialize;

use super::common::Point;

/// One `technology = { … }` top section: a page of the tech tree.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TechGroup {
    pub id: Option<i32>,
    /// Category keyword, validated against the category table.
    pub category: Option<String>,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub labels: Vec<TechLabel>,
    pub events: Vec<TechEvent>,
    pub applications: Vec<TechApplication>,
}

/// Free-floating text placed on the tree layout.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TechLabel {
    pub text: Option<String>,
    pub position: Option<Point>,
}

/// An event marker on the tree layout.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TechEvent {
    pub id: Option<i32>,
    pub position: Option<Point>,
}

/// One researchable technology.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TechApplication {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub position: Option<Point>,
    pub picture: Option<String>,
    pub year: Option<i32>,
    pub components: Vec<TechComponent>,
    /// Prerequisite ids, all required (AND).
    pub required: Vec<i32>,
    /// Alternative prerequisite ids, any one suffices (OR).
    pub or_required: Vec<i32>,
    pub effects: Vec<Command>,
}

/// One research component row inside an application.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TechComponent {
    pub id: Option<i32>,
    pub name: Option<String>,
    /// Research specialty keyword.
    pub specialty: Option<String>,
    pub difficulty: Option<i32>,
    pub double_time: Option<bool>,
}

/// An opaque game command: the parser records the shape, the game engine
/// gives it meaning.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Command {
    pub kind: Option<String>,
    pub which: Option<CommandArg>,
    pub value: Option<CommandArg>,
    pub when: Option<CommandArg>,
    pub where_: Option<CommandArg>,
}

/// Command arguments are numbers or words; the parser does not interpret
/// them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CommandArg {
    Number(f64),
    Word(String),
}
