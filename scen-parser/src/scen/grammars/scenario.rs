//! The scenario file grammar
//!
//! A scenario is a brace-less sequence of top-level sections; `include`
//! clauses pull further fragment files into the same accumulating record.
//! Fragments carry mostly `country` and `province` sections, but nothing
//! stops one from carrying anything else, so the grammar is identical at
//! every depth; a `header` in a fragment is merely flagged as odd.

use crate::scen::context::ParseContext;
use crate::scen::diagnostics::DiagnosticCode;
use crate::scen::engine::{FileBody, SectionBody};
use crate::scen::grammars::country;
use crate::scen::grammars::units::assign;
use crate::scen::lexing::TokenStream;
use crate::scen::loader;
use crate::scen::model::{
    Alliance, GlobalData, Header, MajorCountry, ProvinceSettings, Scenario, Treaty, TreatyKind,
    War, WeatherPattern, WeatherSettings,
};
use crate::scen::values;

/// Parse one scenario file (or included fragment) into `out`.
pub fn scenario_document(ts: &mut TokenStream, ctx: &mut ParseContext, out: &mut Scenario) {
    let mut body = FileBody::new();
    // Presentation keys describe the scenario as a whole; in an included
    // fragment they are parsed (so their errors surface) but discarded.
    let top_level = ctx.at_top_level();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "name" => {
                let name = values::text(ts, ctx);
                if top_level {
                    assign(&mut out.name, name);
                }
            }
            "panel" => {
                let panel = values::text(ts, ctx);
                if top_level {
                    assign(&mut out.panel, panel);
                }
            }
            "header" => {
                let parsed = header(ts, ctx);
                if top_level {
                    assign(&mut out.header, parsed);
                } else {
                    ctx.info(
                        DiagnosticCode::UnusualValue,
                        ts.line(),
                        "header block inside an included fragment; ignored",
                    );
                }
            }
            "globaldata" => {
                if let Some(g) = globaldata(ts, ctx) {
                    out.globals = Some(g);
                }
            }
            "savedate" | "save_date" => assign(&mut out.save_date, values::date(ts, ctx)),
            "map" => assign(&mut out.map, map_settings(ts, ctx)),
            "history" => {
                if let Some(ids) = values::id_list(ts, ctx) {
                    out.history.extend(ids);
                }
            }
            "sleepevent" => {
                if let Some(ids) = values::id_list(ts, ctx) {
                    out.sleep_events.extend(ids);
                }
            }
            "event" => {
                if let Some(path) = values::text(ts, ctx) {
                    out.event_files.push(path);
                }
            }
            "include" => {
                let line = ts.line();
                if let Some(path) = values::text(ts, ctx) {
                    loader::include_scenario(&path, line, out, ctx);
                }
            }
            "province" => {
                if let Some(p) = province(ts, ctx) {
                    out.provinces.push(p);
                }
            }
            "country" => {
                if let Some(c) = country::country(ts, ctx) {
                    // `country()` guarantees the tag.
                    if let Some(tag) = c.tag.clone() {
                        out.country_mut(&tag).merge(c);
                    }
                }
            }
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
}

fn header(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Header> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut h = Header::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "name" => assign(&mut h.name, values::text(ts, ctx)),
            "startdate" => assign(&mut h.start_date, values::date(ts, ctx)),
            "enddate" => assign(&mut h.end_date, values::date(ts, ctx)),
            "selectable" => {
                if let Some(tags) = values::tag_list(ts, ctx) {
                    h.selectable.extend(tags);
                }
            }
            "ai_aggressiveness" => assign(&mut h.ai_aggressiveness, values::integer(ts, ctx)),
            "difficulty" => assign(&mut h.difficulty, values::integer(ts, ctx)),
            "gamespeed" => assign(&mut h.game_speed, values::integer(ts, ctx)),
            other => {
                // A keyword that spells an active country tag opens that
                // major's description block.
                match ctx.tables().country(other) {
                    Some(tag) => {
                        if let Some(mut m) = major_country(ts, ctx) {
                            m.tag = Some(tag);
                            h.majors.push(m);
                        }
                    }
                    None => body.unknown_keyword(other, ts, ctx),
                }
            }
        }
    }
    Some(h)
}

fn major_country(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<MajorCountry> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut m = MajorCountry::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "bitmap" => assign(&mut m.bitmap, values::text(ts, ctx)),
            "desc" => assign(&mut m.desc, values::text(ts, ctx)),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(m)
}

fn map_settings(
    ts: &mut TokenStream,
    ctx: &mut ParseContext,
) -> Option<crate::scen::model::MapSettings> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut m = crate::scen::model::MapSettings::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "name" => assign(&mut m.name, values::text(ts, ctx)),
            "top" => assign(&mut m.top, values::point(ts, ctx)),
            "bottom" => assign(&mut m.bottom, values::point(ts, ctx)),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(m)
}

fn globaldata(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<GlobalData> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut g = GlobalData::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "startdate" => assign(&mut g.start_date, values::date(ts, ctx)),
            "enddate" => assign(&mut g.end_date, values::date(ts, ctx)),
            "axis" => assign(&mut g.axis, alliance(ts, ctx)),
            "allies" => assign(&mut g.allies, alliance(ts, ctx)),
            "comintern" => assign(&mut g.comintern, alliance(ts, ctx)),
            "alliance" => {
                if let Some(a) = alliance(ts, ctx) {
                    g.alliances.push(a);
                }
            }
            "war" => {
                if let Some(w) = war(ts, ctx) {
                    g.wars.push(w);
                }
            }
            "treaty" => {
                if let Some(t) = treaty(ts, ctx) {
                    g.treaties.push(t);
                }
            }
            "flags" => flags(ts, ctx, &mut g),
            "weather" => assign(&mut g.weather, weather_settings(ts, ctx)),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(g)
}

fn alliance(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Alliance> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut a = Alliance::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "id" => assign(&mut a.id, values::type_id(ts, ctx)),
            "participant" => {
                if let Some(tags) = values::tag_list(ts, ctx) {
                    a.participants.extend(tags);
                }
            }
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(a)
}

fn war(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<War> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut w = War::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "id" => assign(&mut w.id, values::type_id(ts, ctx)),
            "date" => assign(&mut w.date, values::date(ts, ctx)),
            "enddate" => assign(&mut w.end_date, values::date(ts, ctx)),
            "attackers" => assign(&mut w.attackers, alliance(ts, ctx)),
            "defenders" => assign(&mut w.defenders, alliance(ts, ctx)),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(w)
}

fn treaty(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Treaty> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut t = Treaty::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "id" => assign(&mut t.id, values::type_id(ts, ctx)),
            "type" => {
                if let Some(word) = values::identifier(ts, ctx) {
                    match word.to_ascii_lowercase().as_str() {
                        "non_aggression" => t.kind = Some(TreatyKind::NonAggression),
                        "peace" => t.kind = Some(TreatyKind::Peace),
                        "trade" => t.kind = Some(TreatyKind::Trade),
                        _ => ctx.warning(
                            DiagnosticCode::UnknownValue,
                            body.keyword_line(),
                            format!("unknown treaty type `{}`", word),
                        ),
                    }
                }
            }
            "country" => {
                if let Some(tag) = values::country_tag(ts, ctx) {
                    t.parties.push(tag);
                }
            }
            "startdate" => assign(&mut t.start_date, values::date(ts, ctx)),
            "expirydate" => assign(&mut t.expiry_date, values::date(ts, ctx)),
            "money" => assign(&mut t.money, values::real(ts, ctx)),
            "energy" => assign(&mut t.energy, values::real(ts, ctx)),
            "metal" => assign(&mut t.metal, values::real(ts, ctx)),
            "oil" => assign(&mut t.oil, values::real(ts, ctx)),
            "rare_materials" => assign(&mut t.rare_materials, values::real(ts, ctx)),
            "supplies" => assign(&mut t.supplies, values::real(ts, ctx)),
            "cancel" => assign(&mut t.can_cancel, values::boolean(ts, ctx)),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(t)
}

/// `flags = { myflag = 1 other_flag = 2 }`: free-form keys, integer values.
fn flags(ts: &mut TokenStream, ctx: &mut ParseContext, g: &mut GlobalData) {
    let mut body = match SectionBody::open(ts, ctx) {
        Some(b) => b,
        None => return,
    };
    while let Some(key) = body.next_keyword(ts, ctx) {
        if let Some(v) = values::integer(ts, ctx) {
            g.flags.insert(key, v);
        }
    }
}

fn weather_settings(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<WeatherSettings> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut w = WeatherSettings::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "static" => assign(&mut w.is_static, values::boolean(ts, ctx)),
            "pattern" => {
                if let Some(p) = weather_pattern(ts, ctx) {
                    w.patterns.push(p);
                }
            }
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(w)
}

fn weather_pattern(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<WeatherPattern> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut p = WeatherPattern::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "id" => assign(&mut p.id, values::type_id(ts, ctx)),
            "type" => weather_kind(&mut p.kind, ts, ctx),
            "provinces" => {
                if let Some(ids) = values::id_list(ts, ctx) {
                    p.provinces.extend(ids);
                }
            }
            "months" => {
                if let Some(ids) = values::id_list(ts, ctx) {
                    p.months.extend(ids);
                }
            }
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(p)
}

fn weather_kind(
    slot: &mut Option<crate::scen::tables::WeatherType>,
    ts: &mut TokenStream,
    ctx: &mut ParseContext,
) {
    let line = ts.line();
    if let Some(word) = values::identifier(ts, ctx) {
        match ctx.tables().weather(&word) {
            Some(kind) => *slot = Some(kind),
            None => ctx.warning(
                DiagnosticCode::UnknownValue,
                line,
                format!("unknown weather type `{}`", word),
            ),
        }
    }
}

fn province(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<ProvinceSettings> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut p = ProvinceSettings::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "id" => assign(&mut p.id, values::integer(ts, ctx)),
            "ic" => assign(&mut p.ic, values::real(ts, ctx)),
            "infra" | "infrastructure" => assign(&mut p.infrastructure, values::real(ts, ctx)),
            "landfort" => assign(&mut p.landfort, values::real(ts, ctx)),
            "coastalfort" => assign(&mut p.coastalfort, values::real(ts, ctx)),
            "anti_air" => assign(&mut p.anti_air, values::real(ts, ctx)),
            "air_base" => assign(&mut p.air_base, values::real(ts, ctx)),
            "naval_base" => assign(&mut p.naval_base, values::real(ts, ctx)),
            "radar_station" => assign(&mut p.radar_station, values::real(ts, ctx)),
            "nuclear_reactor" => assign(&mut p.nuclear_reactor, values::real(ts, ctx)),
            "rocket_test" => assign(&mut p.rocket_test, values::real(ts, ctx)),
            "synthetic_oil" => assign(&mut p.synthetic_oil, values::real(ts, ctx)),
            "synthetic_rares" => assign(&mut p.synthetic_rares, values::real(ts, ctx)),
            "nuclear_power" => assign(&mut p.nuclear_power, values::real(ts, ctx)),
            "points" => assign(&mut p.points, values::integer(ts, ctx)),
            "manpower" => assign(&mut p.manpower, values::real(ts, ctx)),
            "supplypool" => assign(&mut p.supply_pool, values::real(ts, ctx)),
            "oilpool" => assign(&mut p.oil_pool, values::real(ts, ctx)),
            "energypool" => assign(&mut p.energy_pool, values::real(ts, ctx)),
            "metalpool" => assign(&mut p.metal_pool, values::real(ts, ctx)),
            "rarematerialspool" => assign(&mut p.rare_materials_pool, values::real(ts, ctx)),
            "weather" => weather_kind(&mut p.weather, ts, ctx),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(p)
}
