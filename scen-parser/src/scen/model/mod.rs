//! In-memory records populated by the domain grammars
//!
//! These are deliberately dumb: bags of named fields, nested bags, and lists.
//! Every field is optional or defaultable because partial records are the
//! normal outcome of parsing malformed data. Business semantics live with the
//! host application, not here.

pub mod common;
pub mod country;
pub mod scenario;
pub mod tech;
pub mod trigger;
pub mod unit_class;
pub mod units;

pub use common::{Date, Point, TypeId};
pub use country::{CountrySettings, Policy, Relation, SpyInfo};
pub use scenario::{
    Alliance, GlobalData, Header, MajorCountry, MapSettings, ProvinceSettings, Scenario, Treaty,
    TreatyKind, War, WeatherPattern, WeatherSettings,
};
pub use tech::{Command, CommandArg, TechApplication, TechComponent, TechEvent, TechGroup, TechLabel};
pub use trigger::{Trigger, TriggerKind, TriggerValue};
pub use unit_class::{UnitBranch, UnitClass, UnitModel};
pub use units::{Convoy, Division, DivisionDetail, Mission, ProvinceDevelopment, Unit};
