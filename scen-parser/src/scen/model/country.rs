//! Per-country scenario state
//!
//! `country = { … }` is the widest section in the format: politics, economy,
//! diplomacy, technology and the whole military in one bag. A tag may appear
//! in several files of one scenario (the top-level file plus includes); those
//! blocks merge into a single record.

use serde::Serialize;

use super::common::{Date, TypeId};
use super::units::{Convoy, Division, ProvinceDevelopment, Unit};
use crate::scen::tables::CountryTag;

#[derive(Debug, Default, Clone, Serialize)]
pub struct CountrySettings {
    pub tag: Option<CountryTag>,
    /// Government form keyword, stored as spelled.
    pub intrinsic_gov_type: Option<String>,
    pub regular_id: Option<CountryTag>,
    pub capital: Option<i32>,
    pub belligerence: Option<i32>,
    pub dissent: Option<f64>,
    pub extra_tc: Option<f64>,
    pub ground_def_eff: Option<f64>,
    pub peacetime_ic_mod: Option<f64>,
    pub ai_file: Option<String>,
    pub puppet: Option<CountryTag>,

    // Stockpiles
    pub manpower: Option<f64>,
    pub energy: Option<f64>,
    pub metal: Option<f64>,
    pub rare_materials: Option<f64>,
    pub oil: Option<f64>,
    pub supplies: Option<f64>,
    pub money: Option<f64>,
    pub transports: Option<i32>,
    pub escorts: Option<i32>,
    pub nuke: Option<i32>,
    pub nuke_date: Option<Date>,

    // Diplomacy and intelligence
    pub diplomacy: Vec<Relation>,
    pub spies: Vec<SpyInfo>,

    // Province ownership
    pub national_provinces: Vec<i32>,
    pub owned_provinces: Vec<i32>,
    pub controlled_provinces: Vec<i32>,
    pub claimed_provinces: Vec<i32>,

    // Technology
    pub tech_apps: Vec<i32>,
    pub blueprints: Vec<i32>,
    pub inventions: Vec<i32>,
    pub deactivated_techs: Vec<i32>,

    // Politics
    pub policy: Option<Policy>,
    pub head_of_state: Option<TypeId>,
    pub head_of_government: Option<TypeId>,
    pub foreign_minister: Option<TypeId>,
    pub armament_minister: Option<TypeId>,
    pub minister_of_security: Option<TypeId>,
    pub minister_of_intelligence: Option<TypeId>,
    pub chief_of_staff: Option<TypeId>,
    pub chief_of_army: Option<TypeId>,
    pub chief_of_navy: Option<TypeId>,
    pub chief_of_air: Option<TypeId>,

    // Dormant pools; `all` in the source means "everything dormant".
    pub all_leaders_dormant: bool,
    pub dormant_leaders: Vec<i32>,
    pub all_ministers_dormant: bool,
    pub dormant_ministers: Vec<i32>,
    pub all_teams_dormant: bool,
    pub dormant_teams: Vec<i32>,

    // Military
    pub land_units: Vec<Unit>,
    pub naval_units: Vec<Unit>,
    pub air_units: Vec<Unit>,
    /// In-production divisions ("development" records).
    pub division_developments: Vec<Division>,
    pub province_developments: Vec<ProvinceDevelopment>,
    pub convoys: Vec<Convoy>,
}

impl CountrySettings {
    /// Fold a later `country` block for the same tag into this one.
    ///
    /// Scalars: a value present in `other` overwrites; an absent one leaves
    /// the existing value alone. Lists accumulate in file order.
    pub fn merge(&mut self, other: CountrySettings) {
        macro_rules! take_scalar {
            ($($field:ident),* $(,)?) => {
                $( if other.$field.is_some() { self.$field = other.$field; } )*
            };
        }
        macro_rules! extend_list {
            ($($field:ident),* $(,)?) => {
                $( self.$field.extend(other.$field); )*
            };
        }
        take_scalar!(
            tag,
            intrinsic_gov_type,
            regular_id,
            capital,
            belligerence,
            dissent,
            extra_tc,
            ground_def_eff,
            peacetime_ic_mod,
            ai_file,
            puppet,
            manpower,
            energy,
            metal,
            rare_materials,
            oil,
            supplies,
            money,
            transports,
            escorts,
            nuke,
            nuke_date,
            policy,
            head_of_state,
            head_of_government,
            foreign_minister,
            armament_minister,
            minister_of_security,
            minister_of_intelligence,
            chief_of_staff,
            chief_of_army,
            chief_of_navy,
            chief_of_air,
        );
        extend_list!(
            diplomacy,
            spies,
            national_provinces,
            owned_provinces,
            controlled_provinces,
            claimed_provinces,
            tech_apps,
            blueprints,
            inventions,
            deactivated_techs,
            dormant_leaders,
            dormant_ministers,
            dormant_teams,
            land_units,
            naval_units,
            air_units,
            division_developments,
            province_developments,
            convoys,
        );
        self.all_leaders_dormant |= other.all_leaders_dormant;
        self.all_ministers_dormant |= other.all_ministers_dormant;
        self.all_teams_dormant |= other.all_teams_dormant;
    }
}

/// `relation = { tag = … value = … }` inside the diplomacy block.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Relation {
    pub tag: Option<CountryTag>,
    pub value: Option<f64>,
    /// Military access granted.
    pub access: Option<bool>,
    /// Guarantee of independence, if dated.
    pub guaranteed: Option<Date>,
}

/// `spyinfo = { country = … numberofspies = … }`
#[derive(Debug, Default, Clone, Serialize)]
pub struct SpyInfo {
    pub country: Option<CountryTag>,
    pub number_of_spies: Option<i32>,
}

/// `policy = { … }`: the domestic policy sliders, each 1..10.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Policy {
    pub date: Option<Date>,
    pub democratic: Option<i32>,
    pub political_left: Option<i32>,
    pub freedom: Option<i32>,
    pub free_market: Option<i32>,
    pub professional_army: Option<i32>,
    pub defense_lobby: Option<i32>,
    pub interventionism: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_scalar_overwrite_and_keep() {
        let mut a = CountrySettings {
            capital: Some(300),
            dissent: Some(5.0),
            ..Default::default()
        };
        let b = CountrySettings {
            capital: Some(301),
            ..Default::default()
        };
        a.merge(b);
        assert_eq!(a.capital, Some(301));
        assert_eq!(a.dissent, Some(5.0));
    }

    #[test]
    fn test_merge_lists_accumulate() {
        let mut a = CountrySettings {
            owned_provinces: vec![1, 2],
            ..Default::default()
        };
        let b = CountrySettings {
            owned_provinces: vec![3],
            ..Default::default()
        };
        a.merge(b);
        assert_eq!(a.owned_provinces, vec![1, 2, 3]);
    }
}
