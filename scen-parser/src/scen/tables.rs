//! Read-only code tables consulted by the value parsers
//!
//! Identifier-to-code maps for country tags, month names, unit-type names,
//! building types, weather, mission types and technology categories. The
//! tables are owned by the host application and supplied to the parser as a
//! dependency; the parser never mutates them during a parse.
//!
//! [`CodeTables::standard`] ships the stock tables so that the common case
//! needs no setup.

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A validated, upper-cased country code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CountryTag(String);

impl CountryTag {
    pub(crate) fn new(tag: String) -> Self {
        CountryTag(tag)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Province construction kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BuildingType {
    Ic,
    Infrastructure,
    LandFort,
    CoastalFort,
    AntiAir,
    AirBase,
    NavalBase,
    RadarStation,
    NuclearReactor,
    RocketTest,
    SyntheticOil,
    SyntheticRares,
    NuclearPower,
}

/// Static province weather kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeatherType {
    Clear,
    Frozen,
    Raining,
    Snowing,
    Storm,
    Blizzard,
    Muddy,
}

/// Orders a unit can be parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MissionType {
    Attack,
    Rebase,
    StratRedeploy,
    AirSuperiority,
    GroundAttack,
    Interdiction,
    StrategicBombardment,
    LogisticalStrike,
    RunwayCratering,
    InstallationStrike,
    NavalStrike,
    PortStrike,
    ConvoyRaiding,
    Asw,
    ShoreBombardment,
    AmphibiousAssault,
    SeaTransport,
    AirSupply,
    AirborneAssault,
    Nuke,
    ConvoyEscort,
    Patrol,
}

/// The two unit-class file families; they use disjoint type-name tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnitClassKind {
    Division,
    Brigade,
}

/// The complete set of lookup tables a parse needs.
pub struct CodeTables {
    country_tags: HashSet<String>,
    active_tags: HashSet<String>,
    months: HashMap<String, u32>,
    division_types: HashMap<String, u16>,
    brigade_types: HashMap<String, u16>,
    buildings: HashMap<String, BuildingType>,
    weather: HashMap<String, WeatherType>,
    missions: HashMap<String, MissionType>,
    tech_categories: HashSet<String>,
}

impl CodeTables {
    /// The stock tables. Every known tag starts out active.
    pub fn standard() -> Self {
        let country_tags: HashSet<String> =
            STANDARD_TAGS.iter().map(|t| t.to_string()).collect();
        CodeTables {
            active_tags: country_tags.clone(),
            country_tags,
            months: month_table(),
            division_types: indexed(DIVISION_TYPES),
            brigade_types: indexed(BRIGADE_TYPES),
            buildings: building_table(),
            weather: weather_table(),
            missions: mission_table(),
            tech_categories: TECH_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Register an extra country tag (mods add tags freely). Also activates it.
    pub fn add_country_tag(&mut self, tag: &str) {
        let tag = tag.to_ascii_uppercase();
        self.country_tags.insert(tag.clone());
        self.active_tags.insert(tag);
    }

    /// Restrict the active subset; tags outside it parse as failures.
    pub fn set_active_tags<'a>(&mut self, tags: impl IntoIterator<Item = &'a str>) {
        self.active_tags = tags.into_iter().map(|t| t.to_ascii_uppercase()).collect();
    }

    /// Upper-case and validate a tag against the known set and the active
    /// subset. `None` for anything unknown or inactive.
    pub fn country(&self, text: &str) -> Option<CountryTag> {
        let tag = text.to_ascii_uppercase();
        if self.country_tags.contains(&tag) && self.active_tags.contains(&tag) {
            Some(CountryTag::new(tag))
        } else {
            None
        }
    }

    pub fn is_known_tag(&self, text: &str) -> bool {
        self.country_tags.contains(&text.to_ascii_uppercase())
    }

    /// 1-based calendar month for a month name, any case.
    pub fn month(&self, name: &str) -> Option<u32> {
        self.months.get(&name.to_ascii_lowercase()).copied()
    }

    pub fn division_type(&self, name: &str) -> Option<u16> {
        self.division_types.get(&name.to_ascii_lowercase()).copied()
    }

    pub fn brigade_type(&self, name: &str) -> Option<u16> {
        self.brigade_types.get(&name.to_ascii_lowercase()).copied()
    }

    /// Type lookup for whichever class table a unit-class file uses.
    pub fn unit_type(&self, name: &str, kind: UnitClassKind) -> Option<u16> {
        match kind {
            UnitClassKind::Division => self.division_type(name),
            UnitClassKind::Brigade => self.brigade_type(name),
        }
    }

    pub fn building(&self, name: &str) -> Option<BuildingType> {
        self.buildings.get(&name.to_ascii_lowercase()).copied()
    }

    pub fn weather(&self, name: &str) -> Option<WeatherType> {
        self.weather.get(&name.to_ascii_lowercase()).copied()
    }

    pub fn mission(&self, name: &str) -> Option<MissionType> {
        self.missions.get(&name.to_ascii_lowercase()).copied()
    }

    pub fn is_tech_category(&self, name: &str) -> bool {
        self.tech_categories.contains(&name.to_ascii_lowercase())
    }
}

impl Default for CodeTables {
    fn default() -> Self {
        CodeTables::standard()
    }
}

fn indexed(names: &[&str]) -> HashMap<String, u16> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| (n.to_string(), i as u16))
        .collect()
}

fn month_table() -> HashMap<String, u32> {
    let names = [
        "january", "february", "march", "april", "may", "june", "july", "august", "september",
        "october", "november", "december",
    ];
    names
        .iter()
        .enumerate()
        .map(|(i, n)| (n.to_string(), i as u32 + 1))
        .collect()
}

fn building_table() -> HashMap<String, BuildingType> {
    use BuildingType::*;
    [
        ("ic", Ic),
        ("infrastructure", Infrastructure),
        ("landfort", LandFort),
        ("land_fort", LandFort),
        ("coastalfort", CoastalFort),
        ("coastal_fort", CoastalFort),
        ("anti_air", AntiAir),
        ("air_base", AirBase),
        ("naval_base", NavalBase),
        ("radar_station", RadarStation),
        ("nuclear_reactor", NuclearReactor),
        ("rocket_test", RocketTest),
        ("synthetic_oil", SyntheticOil),
        ("synthetic_rares", SyntheticRares),
        ("nuclear_power", NuclearPower),
    ]
    .into_iter()
    .map(|(n, b)| (n.to_string(), b))
    .collect()
}

fn weather_table() -> HashMap<String, WeatherType> {
    use WeatherType::*;
    [
        ("clear", Clear),
        ("frozen", Frozen),
        ("raining", Raining),
        ("snowing", Snowing),
        ("storm", Storm),
        ("blizzard", Blizzard),
        ("muddy", Muddy),
    ]
    .into_iter()
    .map(|(n, w)| (n.to_string(), w))
    .collect()
}

fn mission_table() -> HashMap<String, MissionType> {
    use MissionType::*;
    [
        ("attack", Attack),
        ("rebase", Rebase),
        ("strat_redeploy", StratRedeploy),
        ("air_superiority", AirSuperiority),
        ("ground_attack", GroundAttack),
        ("interdiction", Interdiction),
        ("strategic_bombardment", StrategicBombardment),
        ("logistical_strike", LogisticalStrike),
        ("runway_cratering", RunwayCratering),
        ("installation_strike", InstallationStrike),
        ("naval_strike", NavalStrike),
        ("port_strike", PortStrike),
        ("convoy_raiding", ConvoyRaiding),
        ("asw", Asw),
        ("shore_bombardment", ShoreBombardment),
        ("amphibious_assault", AmphibiousAssault),
        ("sea_transport", SeaTransport),
        ("air_supply", AirSupply),
        ("airborne_assault", AirborneAssault),
        ("nuke", Nuke),
        ("convoy_escort", ConvoyEscort),
        ("patrol", Patrol),
    ]
    .into_iter()
    .map(|(n, m)| (n.to_string(), m))
    .collect()
}

const STANDARD_TAGS: &[&str] = &[
    "AFG", "ALB", "ARG", "AST", "AUS", "BEL", "BHU", "BOL", "BRA", "BUL", "CAN", "CHC", "CHI",
    "CHL", "COL", "COS", "CRO", "CUB", "CZE", "DEN", "DOM", "ECU", "EGY", "ENG", "EST", "ETH",
    "FIN", "FRA", "GER", "GRE", "GUA", "HAI", "HON", "HUN", "ICL", "IRE", "IRQ", "ITA", "JAP",
    "LAT", "LIB", "LIT", "LUX", "MAN", "MEX", "MON", "MTN", "NEP", "NIC", "NOR", "NZL", "OMN",
    "PAN", "PAR", "PER", "PHI", "POL", "POR", "PRK", "PRU", "ROM", "RSI", "SAL", "SAU", "SCH",
    "SIA", "SIK", "SLO", "SOV", "SPA", "SPR", "SWE", "SWI", "TAN", "TIB", "TUR", "UKR", "URU",
    "USA", "VEN", "VIC", "YEM", "YUG",
];

const DIVISION_TYPES: &[&str] = &[
    "infantry",
    "cavalry",
    "motorized",
    "mechanized",
    "light_armor",
    "armor",
    "paratrooper",
    "marine",
    "mountain",
    "garrison",
    "hq",
    "militia",
    "multi_role",
    "interceptor",
    "strategic_bomber",
    "tactical_bomber",
    "naval_bomber",
    "cas",
    "transport_plane",
    "flying_bomb",
    "flying_rocket",
    "battleship",
    "light_cruiser",
    "heavy_cruiser",
    "battlecruiser",
    "destroyer",
    "carrier",
    "escort_carrier",
    "submarine",
    "nuclear_submarine",
    "transport",
];

const BRIGADE_TYPES: &[&str] = &[
    "none",
    "artillery",
    "sp_artillery",
    "rocket_artillery",
    "sp_rct_artillery",
    "anti_tank",
    "tank_destroyer",
    "light_armor_brigade",
    "heavy_armor",
    "super_heavy_armor",
    "armored_car",
    "anti_air",
    "police",
    "engineer",
    "cag",
    "escort",
    "naval_asw",
    "naval_anti_air_s",
    "naval_radar_s",
    "naval_fire_controll_s",
    "naval_improved_hull_s",
    "naval_torpedoes_s",
];

const TECH_CATEGORIES: &[&str] = &[
    "infantry",
    "armor",
    "naval",
    "aircraft",
    "industry",
    "land_doctrines",
    "naval_doctrines",
    "air_doctrines",
    "secret_weapons",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_lookup_uppercases() {
        let tables = CodeTables::standard();
        assert_eq!(tables.country("ger").map(|t| t.to_string()), Some("GER".to_string()));
        assert_eq!(tables.country("XYZ"), None);
    }

    #[test]
    fn test_active_subset_gates_lookup() {
        let mut tables = CodeTables::standard();
        tables.set_active_tags(["GER", "ENG"]);
        assert!(tables.country("GER").is_some());
        assert!(tables.country("FRA").is_none());
        assert!(tables.is_known_tag("FRA"));
    }

    #[test]
    fn test_added_tag_is_active() {
        let mut tables = CodeTables::standard();
        tables.add_country_tag("u61");
        assert!(tables.country("U61").is_some());
    }

    #[test]
    fn test_months() {
        let tables = CodeTables::standard();
        assert_eq!(tables.month("January"), Some(1));
        assert_eq!(tables.month("december"), Some(12));
        assert_eq!(tables.month("smarch"), None);
    }

    #[test]
    fn test_unit_type_tables_are_disjoint_views() {
        let tables = CodeTables::standard();
        assert!(tables.unit_type("infantry", UnitClassKind::Division).is_some());
        assert!(tables.unit_type("infantry", UnitClassKind::Brigade).is_none());
        assert!(tables.unit_type("artillery", UnitClassKind::Brigade).is_some());
    }

    #[test]
    fn test_building_aliases() {
        let tables = CodeTables::standard();
        assert_eq!(tables.building("landfort"), Some(BuildingType::LandFort));
        assert_eq!(tables.building("land_fort"), Some(BuildingType::LandFort));
    }
}
