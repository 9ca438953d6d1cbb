//! Units, divisions, missions, production and convoys
//!
//! One field set serves both in-service divisions and in-production
//! "development" records; the grammar decides which keywords apply in which
//! role ([`DivisionDetail`]).

use serde::Serialize;

use super::common::{Date, TypeId};
use crate::scen::tables::{BuildingType, CountryTag, MissionType};

/// Whether a division block describes a fielded division or one still on the
/// production line. The field set is shared; a few keywords are exclusive to
/// one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DivisionDetail {
    InService,
    Development,
}

/// A land army, fleet or air wing: `landunit` / `navalunit` / `airunit`.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Unit {
    pub id: Option<TypeId>,
    pub name: Option<String>,
    pub location: Option<i32>,
    /// Home base province (naval/air).
    pub base: Option<i32>,
    pub home: Option<i32>,
    /// Leader id commanding this unit.
    pub leader: Option<i32>,
    /// Controlling country when not the owner.
    pub control: Option<CountryTag>,
    pub dig_in: Option<f64>,
    pub morale: Option<f64>,
    pub supplies: Option<f64>,
    pub fuel: Option<f64>,
    pub divisions: Vec<Division>,
    pub mission: Option<Mission>,
    /// Movement path, province ids in travel order.
    pub movement: Vec<i32>,
}

/// One division (or brigade attachment carrier) inside a unit, or one
/// in-production record inside `division_development`.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Division {
    pub id: Option<TypeId>,
    pub name: Option<String>,
    /// Division-type code from the division table.
    pub kind: Option<u16>,
    pub model: Option<i32>,
    pub strength: Option<f64>,
    pub max_strength: Option<f64>,
    pub organisation: Option<f64>,
    pub max_organisation: Option<f64>,
    pub morale: Option<f64>,
    pub experience: Option<f64>,
    pub dormant: Option<bool>,
    pub locked: Option<bool>,
    /// Fixed-arity brigade attachments `extra1`..`extra5`; codes from the
    /// brigade table. Not a dynamic list in the source format.
    pub extra: [Option<u16>; 5],
    /// `brigade_model1`..`brigade_model5`, parallel to `extra`.
    pub brigade_models: [Option<i32>; 5],

    // Development-only fields
    pub cost: Option<f64>,
    pub build_date: Option<Date>,
    pub manpower: Option<f64>,
    /// Length of the serial production run.
    pub units: Option<i32>,
    pub total_progress: Option<f64>,
}

/// `mission = { … }` attached to a unit.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Mission {
    pub kind: Option<MissionType>,
    pub target: Option<i32>,
    pub percentage: Option<f64>,
    pub night: Option<bool>,
    pub day: Option<bool>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub task: Option<i32>,
    pub location: Option<i32>,
}

/// `province_development = { … }`: a building under construction.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ProvinceDevelopment {
    pub id: Option<TypeId>,
    pub province: Option<i32>,
    pub kind: Option<BuildingType>,
    pub cost: Option<f64>,
    pub manpower: Option<f64>,
    pub date: Option<Date>,
    pub total_progress: Option<f64>,
}

/// `convoy = { … }`: a standing transport route.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Convoy {
    pub id: Option<TypeId>,
    pub trade_id: Option<TypeId>,
    pub transports: Option<i32>,
    pub escorts: Option<i32>,
    pub energy: Option<bool>,
    pub metal: Option<bool>,
    pub oil: Option<bool>,
    pub rare_materials: Option<bool>,
    pub supplies: Option<bool>,
    /// Province ids along the route.
    pub path: Vec<i32>,
}
