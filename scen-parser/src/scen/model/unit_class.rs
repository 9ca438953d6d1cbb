//! Unit-class (division/brigade type) definitions

use serde::Serialize;

/// Which force branch a class belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnitBranch {
    Land,
    Naval,
    Air,
}

/// One class section from a division-class or brigade-class file.
#[derive(Debug, Default, Clone, Serialize)]
pub struct UnitClass {
    /// Type code from whichever table (division/brigade) the file uses.
    pub type_code: Option<u16>,
    /// The keyword the class was declared under, as spelled.
    pub type_name: String,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub desc: Option<String>,
    pub branch: Option<UnitBranch>,
    pub sprite: Option<String>,
    pub models: Vec<UnitModel>,
}

/// One `model = { … }` stat block.
#[derive(Debug, Default, Clone, Serialize)]
pub struct UnitModel {
    pub name: Option<String>,
    pub cost: Option<f64>,
    pub build_time: Option<f64>,
    pub manpower: Option<f64>,
    pub max_speed: Option<f64>,
    pub defensiveness: Option<f64>,
    pub toughness: Option<f64>,
    pub softness: Option<f64>,
    pub suppression: Option<f64>,
    pub air_defense: Option<f64>,
    pub air_attack: Option<f64>,
    pub hard_attack: Option<f64>,
    pub soft_attack: Option<f64>,
    pub naval_attack: Option<f64>,
    pub strategic_attack: Option<f64>,
    pub range: Option<f64>,
    pub supply_consumption: Option<f64>,
    pub fuel_consumption: Option<f64>,
    pub transport_weight: Option<f64>,
    pub transport_capability: Option<f64>,
    pub upgrade_time_factor: Option<f64>,
    pub upgrade_cost_factor: Option<f64>,

    // Expansion-only: artillery/anti-tank/anti-air speed caps.
    pub speed_cap_art: Option<f64>,
    pub speed_cap_at: Option<f64>,
    pub speed_cap_aa: Option<f64>,

    // Successor-edition only.
    pub reinforcement_time: Option<f64>,
    pub reinforcement_cost: Option<f64>,
}
