//! Boolean trigger trees
//!
//! Every keyword inside a trigger block is itself a trigger kind, and its
//! value is either a scalar or another nested container, so triggers form an
//! arbitrary-depth tree. The set of valid keywords is fixed; the lookup table
//! is derived from [`TriggerKind::TABLE`] once at startup.

use serde::Serialize;

/// Every trigger keyword the format knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TriggerKind {
    And,
    Or,
    Not,
    Event,
    Random,
    Year,
    Month,
    Day,
    Flag,
    LocalFlag,
    War,
    Alliance,
    Country,
    Tag,
    Government,
    Ideology,
    Technology,
    Owned,
    Control,
    AtWar,
    Dissent,
    Belligerence,
    Domestic,
    Leader,
    Minister,
    Puppet,
    Exists,
    AiControlled,
    Division,
    LostNational,
    Energy,
    Metal,
    Oil,
    RareMaterials,
    Supplies,
    Manpower,
    IcRatio,
}

impl TriggerKind {
    /// Keyword spelling for every kind; the startup lookup table is built
    /// from this.
    pub const TABLE: &'static [(&'static str, TriggerKind)] = &[
        ("and", TriggerKind::And),
        ("or", TriggerKind::Or),
        ("not", TriggerKind::Not),
        ("event", TriggerKind::Event),
        ("random", TriggerKind::Random),
        ("year", TriggerKind::Year),
        ("month", TriggerKind::Month),
        ("day", TriggerKind::Day),
        ("flag", TriggerKind::Flag),
        ("local_flag", TriggerKind::LocalFlag),
        ("war", TriggerKind::War),
        ("alliance", TriggerKind::Alliance),
        ("country", TriggerKind::Country),
        ("tag", TriggerKind::Tag),
        ("government", TriggerKind::Government),
        ("ideology", TriggerKind::Ideology),
        ("technology", TriggerKind::Technology),
        ("owned", TriggerKind::Owned),
        ("control", TriggerKind::Control),
        ("atwar", TriggerKind::AtWar),
        ("dissent", TriggerKind::Dissent),
        ("belligerence", TriggerKind::Belligerence),
        ("domestic", TriggerKind::Domestic),
        ("leader", TriggerKind::Leader),
        ("minister", TriggerKind::Minister),
        ("puppet", TriggerKind::Puppet),
        ("exists", TriggerKind::Exists),
        ("ai", TriggerKind::AiControlled),
        ("division", TriggerKind::Division),
        ("lost_national", TriggerKind::LostNational),
        ("energy", TriggerKind::Energy),
        ("metal", TriggerKind::Metal),
        ("oil", TriggerKind::Oil),
        ("rare_materials", TriggerKind::RareMaterials),
        ("supplies", TriggerKind::Supplies),
        ("manpower", TriggerKind::Manpower),
        ("ic_ratio", TriggerKind::IcRatio),
    ];
}

/// One node of a trigger tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trigger {
    pub kind: TriggerKind,
    pub value: TriggerValue,
}

/// The right-hand side of a trigger clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TriggerValue {
    Number(f64),
    /// Bare word or quoted string: a tag, a government form, a flag name.
    Symbol(String),
    /// Nested `{ … }` container.
    Block(Vec<Trigger>),
}
