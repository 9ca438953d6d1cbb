//! The `country = { … }` grammar
//!
//! One keyword table covering politics, economy, diplomacy, technology and
//! the military. The block is useless without its `tag` clause; a tag-less
//! block is still parsed (so its errors surface) but the caller gets `None`
//! and nothing to merge it into.

use crate::scen::context::ParseContext;
use crate::scen::diagnostics::DiagnosticCode;
use crate::scen::engine::SectionBody;
use crate::scen::grammars::units::{self, assign};
use crate::scen::lexing::TokenStream;
use crate::scen::model::{CountrySettings, DivisionDetail, Policy, Relation, SpyInfo};
use crate::scen::values::{self, IdListOrAll};

/// Parse one `country` block. Returns `None` when the body could not be
/// entered at all or when no usable `tag` clause was found.
pub fn country(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<CountrySettings> {
    let mut body = SectionBody::open(ts, ctx)?;
    let opened_at = body.keyword_line();
    let mut c = CountrySettings::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "tag" => assign(&mut c.tag, values::country_tag(ts, ctx)),
            "intrinsic_gov_type" => {
                assign(&mut c.intrinsic_gov_type, values::identifier(ts, ctx))
            }
            "regular_id" => assign(&mut c.regular_id, values::country_tag(ts, ctx)),
            "capital" => assign(&mut c.capital, values::integer(ts, ctx)),
            "belligerence" => assign(&mut c.belligerence, values::integer(ts, ctx)),
            "dissent" => assign(&mut c.dissent, values::real(ts, ctx)),
            "extra_tc" => assign(&mut c.extra_tc, values::real(ts, ctx)),
            "ground_def_eff" => assign(&mut c.ground_def_eff, values::real(ts, ctx)),
            "peacetime_ic_mod" => assign(&mut c.peacetime_ic_mod, values::real(ts, ctx)),
            "ai" => assign(&mut c.ai_file, values::text(ts, ctx)),
            "puppet" => assign(&mut c.puppet, values::country_tag(ts, ctx)),

            "manpower" => assign(&mut c.manpower, values::real(ts, ctx)),
            "energy" => assign(&mut c.energy, values::real(ts, ctx)),
            "metal" => assign(&mut c.metal, values::real(ts, ctx)),
            "rare_materials" => assign(&mut c.rare_materials, values::real(ts, ctx)),
            "oil" => assign(&mut c.oil, values::real(ts, ctx)),
            "supplies" => assign(&mut c.supplies, values::real(ts, ctx)),
            "money" => assign(&mut c.money, values::real(ts, ctx)),
            "transports" => assign(&mut c.transports, values::integer(ts, ctx)),
            "escorts" => assign(&mut c.escorts, values::integer(ts, ctx)),
            "nuke" => assign(&mut c.nuke, values::integer(ts, ctx)),
            "nuke_date" => assign(&mut c.nuke_date, values::date(ts, ctx)),

            "diplomacy" => diplomacy(ts, ctx, &mut c.diplomacy),
            "spyinfo" => {
                if let Some(s) = spy_info(ts, ctx) {
                    c.spies.push(s);
                }
            }

            "nationalprovinces" => extend(&mut c.national_provinces, values::id_list(ts, ctx)),
            "ownedprovinces" => extend(&mut c.owned_provinces, values::id_list(ts, ctx)),
            "controlledprovinces" => {
                extend(&mut c.controlled_provinces, values::id_list(ts, ctx))
            }
            "claimedprovinces" => extend(&mut c.claimed_provinces, values::id_list(ts, ctx)),

            "techapps" => extend(&mut c.tech_apps, values::id_list(ts, ctx)),
            "blueprints" => extend(&mut c.blueprints, values::id_list(ts, ctx)),
            "inventions" => extend(&mut c.inventions, values::id_list(ts, ctx)),
            "deactivate" => extend(&mut c.deactivated_techs, values::id_list(ts, ctx)),

            "policy" => assign(&mut c.policy, policy(ts, ctx)),
            "headofstate" => assign(&mut c.head_of_state, values::type_id(ts, ctx)),
            "headofgovernment" => {
                assign(&mut c.head_of_government, values::type_id(ts, ctx))
            }
            "foreignminister" => assign(&mut c.foreign_minister, values::type_id(ts, ctx)),
            "armamentminister" => assign(&mut c.armament_minister, values::type_id(ts, ctx)),
            "ministerofsecurity" => {
                assign(&mut c.minister_of_security, values::type_id(ts, ctx))
            }
            "ministerofintelligence" => {
                assign(&mut c.minister_of_intelligence, values::type_id(ts, ctx))
            }
            "chiefofstaff" => assign(&mut c.chief_of_staff, values::type_id(ts, ctx)),
            "chiefofarmy" => assign(&mut c.chief_of_army, values::type_id(ts, ctx)),
            "chiefofnavy" => assign(&mut c.chief_of_navy, values::type_id(ts, ctx)),
            "chiefofair" => assign(&mut c.chief_of_air, values::type_id(ts, ctx)),

            "dormant_leaders" => match values::id_list_or_all(ts, ctx) {
                Some(IdListOrAll::All) => c.all_leaders_dormant = true,
                Some(IdListOrAll::Ids(ids)) => c.dormant_leaders.extend(ids),
                None => {}
            },
            "dormant_ministers" => match values::id_list_or_all(ts, ctx) {
                Some(IdListOrAll::All) => c.all_ministers_dormant = true,
                Some(IdListOrAll::Ids(ids)) => c.dormant_ministers.extend(ids),
                None => {}
            },
            "dormant_teams" => match values::id_list_or_all(ts, ctx) {
                Some(IdListOrAll::All) => c.all_teams_dormant = true,
                Some(IdListOrAll::Ids(ids)) => c.dormant_teams.extend(ids),
                None => {}
            },

            "landunit" => {
                if let Some(u) = units::unit(ts, ctx) {
                    c.land_units.push(u);
                }
            }
            "navalunit" => {
                if let Some(u) = units::unit(ts, ctx) {
                    c.naval_units.push(u);
                }
            }
            "airunit" => {
                if let Some(u) = units::unit(ts, ctx) {
                    c.air_units.push(u);
                }
            }
            "division_development" => {
                if let Some(d) = units::division(ts, ctx, DivisionDetail::Development) {
                    c.division_developments.push(d);
                }
            }
            "province_development" => {
                if let Some(p) = units::province_development(ts, ctx) {
                    c.province_developments.push(p);
                }
            }
            "convoy" => {
                if let Some(cv) = units::convoy(ts, ctx) {
                    c.convoys.push(cv);
                }
            }
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    if c.tag.is_none() {
        ctx.error(
            DiagnosticCode::MissingRequiredClause,
            opened_at,
            "country block has no usable `tag` clause; block dropped",
        );
        return None;
    }
    Some(c)
}

/// `diplomacy = { relation = { … } relation = { … } }`
fn diplomacy(ts: &mut TokenStream, ctx: &mut ParseContext, out: &mut Vec<Relation>) {
    let mut body = match SectionBody::open(ts, ctx) {
        Some(b) => b,
        None => return,
    };
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "relation" => {
                if let Some(r) = relation(ts, ctx) {
                    out.push(r);
                }
            }
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
}

fn relation(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Relation> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut r = Relation::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "tag" => assign(&mut r.tag, values::country_tag(ts, ctx)),
            "value" => assign(&mut r.value, values::real(ts, ctx)),
            "access" => assign(&mut r.access, values::boolean(ts, ctx)),
            "guaranteed" => assign(&mut r.guaranteed, values::date(ts, ctx)),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(r)
}

fn spy_info(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<SpyInfo> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut s = SpyInfo::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "country" => assign(&mut s.country, values::country_tag(ts, ctx)),
            "numberofspies" => assign(&mut s.number_of_spies, values::integer(ts, ctx)),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(s)
}

fn policy(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Policy> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut p = Policy::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "date" => assign(&mut p.date, values::date(ts, ctx)),
            "democratic" => slider(&mut p.democratic, ts, ctx),
            "political_left" => slider(&mut p.political_left, ts, ctx),
            "freedom" => slider(&mut p.freedom, ts, ctx),
            "free_market" => slider(&mut p.free_market, ts, ctx),
            "professional_army" => slider(&mut p.professional_army, ts, ctx),
            "defense_lobby" => slider(&mut p.defense_lobby, ts, ctx),
            "interventionism" => slider(&mut p.interventionism, ts, ctx),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(p)
}

/// Policy sliders live on a 1..10 scale; out-of-range values are flagged but
/// stored, like every other out-of-range number.
fn slider(slot: &mut Option<i32>, ts: &mut TokenStream, ctx: &mut ParseContext) {
    let line = ts.line();
    if let Some(v) = values::integer(ts, ctx) {
        if !(1..=10).contains(&v) {
            ctx.warning(
                DiagnosticCode::ValueOutOfRange,
                line,
                format!("policy slider {} outside 1..10", v),
            );
        }
        *slot = Some(v);
    }
}

fn extend(list: &mut Vec<i32>, parsed: Option<Vec<i32>>) {
    if let Some(items) = parsed {
        list.extend(items);
    }
}
