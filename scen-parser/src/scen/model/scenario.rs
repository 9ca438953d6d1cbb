//! Scenario records: the header, global data and provinces
//!
//! The scenario is by far the largest record family. A scenario file plus its
//! `include`d fragments all accumulate into one [`Scenario`].

use serde::Serialize;

use super::common::{Date, Point, TypeId};
use super::country::CountrySettings;
use crate::scen::tables::{CountryTag, WeatherType};
use std::collections::BTreeMap;

/// Everything a scenario file family parses into.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Scenario {
    pub name: Option<String>,
    /// Path of the selection-panel bitmap.
    pub panel: Option<String>,
    pub header: Option<Header>,
    pub globals: Option<GlobalData>,
    pub save_date: Option<Date>,
    pub map: Option<MapSettings>,
    /// Event ids that already fired.
    pub history: Vec<i32>,
    /// Event ids put to sleep.
    pub sleep_events: Vec<i32>,
    /// Referenced event-database files, in order of appearance.
    pub event_files: Vec<String>,
    pub provinces: Vec<ProvinceSettings>,
    pub countries: Vec<CountrySettings>,
}

impl Scenario {
    /// Country record for `tag`, creating it on first sight. A second
    /// `country = { tag = X … }` block merges into the first rather than
    /// producing a duplicate entry.
    pub fn country_mut(&mut self, tag: &CountryTag) -> &mut CountrySettings {
        if let Some(i) = self
            .countries
            .iter()
            .position(|c| c.tag.as_ref() == Some(tag))
        {
            return &mut self.countries[i];
        }
        let mut fresh = CountrySettings::default();
        fresh.tag = Some(tag.clone());
        self.countries.push(fresh);
        self.countries.last_mut().expect("just pushed")
    }

    pub fn country(&self, tag: &str) -> Option<&CountrySettings> {
        self.countries
            .iter()
            .find(|c| c.tag.as_ref().map(|t| t.as_str()) == Some(tag))
    }
}

/// `header = { … }`: what the scenario-selection screen shows.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Header {
    pub name: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    /// Tags offered for selection.
    pub selectable: Vec<CountryTag>,
    pub ai_aggressiveness: Option<i32>,
    pub difficulty: Option<i32>,
    pub game_speed: Option<i32>,
    /// Per-tag description blocks for the major countries.
    pub majors: Vec<MajorCountry>,
}

/// A `TAG = { … }` block inside the header.
#[derive(Debug, Default, Clone, Serialize)]
pub struct MajorCountry {
    pub tag: Option<CountryTag>,
    pub bitmap: Option<String>,
    pub desc: Option<String>,
}

/// `map = { … }`: which map window the scenario opens on.
#[derive(Debug, Default, Clone, Serialize)]
pub struct MapSettings {
    pub name: Option<String>,
    pub top: Option<Point>,
    pub bottom: Option<Point>,
}

/// `globaldata = { … }`: dates, alliances, wars, treaties, flags, weather.
#[derive(Debug, Default, Clone, Serialize)]
pub struct GlobalData {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub axis: Option<Alliance>,
    pub allies: Option<Alliance>,
    pub comintern: Option<Alliance>,
    /// Unnamed `alliance = { … }` blocks.
    pub alliances: Vec<Alliance>,
    pub wars: Vec<War>,
    pub treaties: Vec<Treaty>,
    /// Global event flags.
    pub flags: BTreeMap<String, i32>,
    pub weather: Option<WeatherSettings>,
}

/// A set of countries acting together.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Alliance {
    pub id: Option<TypeId>,
    pub participants: Vec<CountryTag>,
}

/// `war = { … }`: two alliances and the dates between them.
#[derive(Debug, Default, Clone, Serialize)]
pub struct War {
    pub id: Option<TypeId>,
    pub date: Option<Date>,
    pub end_date: Option<Date>,
    pub attackers: Option<Alliance>,
    pub defenders: Option<Alliance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TreatyKind {
    NonAggression,
    Peace,
    Trade,
}

/// `treaty = { … }`: a bilateral pact, optionally moving resources.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Treaty {
    pub id: Option<TypeId>,
    pub kind: Option<TreatyKind>,
    /// The two `country = TAG` clauses, in order.
    pub parties: Vec<CountryTag>,
    pub start_date: Option<Date>,
    pub expiry_date: Option<Date>,
    pub money: Option<f64>,
    pub energy: Option<f64>,
    pub metal: Option<f64>,
    pub oil: Option<f64>,
    pub rare_materials: Option<f64>,
    pub supplies: Option<f64>,
    pub can_cancel: Option<bool>,
}

/// `weather = { … }` inside globaldata.
#[derive(Debug, Default, Clone, Serialize)]
pub struct WeatherSettings {
    /// `static = yes` freezes the pattern table.
    pub is_static: Option<bool>,
    pub patterns: Vec<WeatherPattern>,
}

/// One `pattern = { … }` block: a weather kind pinned to provinces/months.
#[derive(Debug, Default, Clone, Serialize)]
pub struct WeatherPattern {
    pub id: Option<TypeId>,
    pub kind: Option<WeatherType>,
    pub provinces: Vec<i32>,
    pub months: Vec<i32>,
}

/// `province = { … }`: construction levels and resource pools.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ProvinceSettings {
    pub id: Option<i32>,
    pub ic: Option<f64>,
    pub infrastructure: Option<f64>,
    pub landfort: Option<f64>,
    pub coastalfort: Option<f64>,
    pub anti_air: Option<f64>,
    pub air_base: Option<f64>,
    pub naval_base: Option<f64>,
    pub radar_station: Option<f64>,
    pub nuclear_reactor: Option<f64>,
    pub rocket_test: Option<f64>,
    pub synthetic_oil: Option<f64>,
    pub synthetic_rares: Option<f64>,
    pub nuclear_power: Option<f64>,
    pub points: Option<i32>,
    pub manpower: Option<f64>,
    pub supply_pool: Option<f64>,
    pub oil_pool: Option<f64>,
    pub energy_pool: Option<f64>,
    pub metal_pool: Option<f64>,
    pub rare_materials_pool: Option<f64>,
    pub weather: Option<WeatherType>,
}
