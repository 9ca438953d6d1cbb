//! Units, divisions, missions, production queues and convoys
//!
//! The division grammar serves double duty: the same field set describes a
//! fielded division and an in-production development record. The
//! [`DivisionDetail`] flag decides which of the role-specific keywords are
//! recognized; a development keyword inside a fielded division is handled
//! like any other unknown keyword.

use crate::scen::context::ParseContext;
use crate::scen::diagnostics::DiagnosticCode;
use crate::scen::engine::SectionBody;
use crate::scen::lexing::TokenStream;
use crate::scen::model::{Convoy, Division, DivisionDetail, Mission, ProvinceDevelopment, Unit};
use crate::scen::values;

/// `landunit` / `navalunit` / `airunit = { … }`
pub fn unit(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Unit> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut unit = Unit::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "id" => assign(&mut unit.id, values::type_id(ts, ctx)),
            "name" => assign(&mut unit.name, values::text(ts, ctx)),
            "location" => assign(&mut unit.location, values::integer(ts, ctx)),
            "base" => assign(&mut unit.base, values::integer(ts, ctx)),
            "home" => assign(&mut unit.home, values::integer(ts, ctx)),
            "leader" => assign(&mut unit.leader, values::integer(ts, ctx)),
            "control" => assign(&mut unit.control, values::country_tag(ts, ctx)),
            "dig_in" => assign(&mut unit.dig_in, values::real(ts, ctx)),
            "morale" => assign(&mut unit.morale, values::real(ts, ctx)),
            "supplies" => assign(&mut unit.supplies, values::real(ts, ctx)),
            "fuel" => assign(&mut unit.fuel, values::real(ts, ctx)),
            "division" => {
                if let Some(d) = division(ts, ctx, DivisionDetail::InService) {
                    unit.divisions.push(d);
                }
            }
            "mission" => assign(&mut unit.mission, mission(ts, ctx)),
            "movement" => {
                if let Some(path) = values::id_list(ts, ctx) {
                    unit.movement = path;
                }
            }
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(unit)
}

/// `division = { … }` (in service) or the body of `division_development`.
pub fn division(
    ts: &mut TokenStream,
    ctx: &mut ParseContext,
    detail: DivisionDetail,
) -> Option<Division> {
    let in_development = detail == DivisionDetail::Development;
    let mut body = SectionBody::open(ts, ctx)?;
    let mut div = Division::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "id" => assign(&mut div.id, values::type_id(ts, ctx)),
            "name" => assign(&mut div.name, values::text(ts, ctx)),
            "type" => {
                if let Some(word) = values::identifier(ts, ctx) {
                    match ctx.tables().division_type(&word) {
                        Some(code) => div.kind = Some(code),
                        None => ctx.warning(
                            DiagnosticCode::UnknownValue,
                            body.keyword_line(),
                            format!("unknown division type `{}`", word),
                        ),
                    }
                }
            }
            "model" => assign(&mut div.model, values::integer(ts, ctx)),
            "strength" => assign(&mut div.strength, values::real(ts, ctx)),
            "max_strength" => assign(&mut div.max_strength, values::real(ts, ctx)),
            "organisation" | "organization" => {
                assign(&mut div.organisation, values::real(ts, ctx))
            }
            "max_organisation" | "max_organization" => {
                assign(&mut div.max_organisation, values::real(ts, ctx))
            }
            "morale" => assign(&mut div.morale, values::real(ts, ctx)),
            "experience" => assign(&mut div.experience, values::real(ts, ctx)),
            "dormant" => assign(&mut div.dormant, values::boolean(ts, ctx)),
            "locked" => assign(&mut div.locked, values::boolean(ts, ctx)),
            "extra" | "extra1" => brigade(ts, ctx, &mut div, 0),
            "extra2" => brigade(ts, ctx, &mut div, 1),
            "extra3" => brigade(ts, ctx, &mut div, 2),
            "extra4" => brigade(ts, ctx, &mut div, 3),
            "extra5" => brigade(ts, ctx, &mut div, 4),
            "brigade_model" | "brigade_model1" => {
                assign(&mut div.brigade_models[0], values::integer(ts, ctx))
            }
            "brigade_model2" => assign(&mut div.brigade_models[1], values::integer(ts, ctx)),
            "brigade_model3" => assign(&mut div.brigade_models[2], values::integer(ts, ctx)),
            "brigade_model4" => assign(&mut div.brigade_models[3], values::integer(ts, ctx)),
            "brigade_model5" => assign(&mut div.brigade_models[4], values::integer(ts, ctx)),
            "cost" if in_development => assign(&mut div.cost, values::real(ts, ctx)),
            "date" if in_development => assign(&mut div.build_date, values::date(ts, ctx)),
            "manpower" if in_development => assign(&mut div.manpower, values::real(ts, ctx)),
            "units" if in_development => assign(&mut div.units, values::integer(ts, ctx)),
            "total_progress" if in_development => {
                assign(&mut div.total_progress, values::real(ts, ctx))
            }
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(div)
}

fn brigade(ts: &mut TokenStream, ctx: &mut ParseContext, div: &mut Division, slot: usize) {
    let line = ts.line();
    if let Some(word) = values::identifier(ts, ctx) {
        match ctx.tables().brigade_type(&word) {
            Some(code) => div.extra[slot] = Some(code),
            None => ctx.warning(
                DiagnosticCode::UnknownValue,
                line,
                format!("unknown brigade type `{}`", word),
            ),
        }
    }
}

/// `mission = { … }`
pub fn mission(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Mission> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut mission = Mission::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "type" => {
                if let Some(word) = values::identifier(ts, ctx) {
                    match ctx.tables().mission(&word) {
                        Some(kind) => mission.kind = Some(kind),
                        None => ctx.warning(
                            DiagnosticCode::UnknownValue,
                            body.keyword_line(),
                            format!("unknown mission type `{}`", word),
                        ),
                    }
                }
            }
            "target" => assign(&mut mission.target, values::integer(ts, ctx)),
            "percentage" => assign(&mut mission.percentage, values::real(ts, ctx)),
            "night" => assign(&mut mission.night, values::boolean(ts, ctx)),
            "day" => assign(&mut mission.day, values::boolean(ts, ctx)),
            "startdate" | "start_date" => assign(&mut mission.start_date, values::date(ts, ctx)),
            "enddate" | "end_date" => assign(&mut mission.end_date, values::date(ts, ctx)),
            "task" => assign(&mut mission.task, values::integer(ts, ctx)),
            "location" => assign(&mut mission.location, values::integer(ts, ctx)),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(mission)
}

/// `province_development = { … }`
pub fn province_development(
    ts: &mut TokenStream,
    ctx: &mut ParseContext,
) -> Option<ProvinceDevelopment> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut dev = ProvinceDevelopment::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "id" => assign(&mut dev.id, values::type_id(ts, ctx)),
            "province" => assign(&mut dev.province, values::integer(ts, ctx)),
            "type" => {
                if let Some(word) = values::identifier(ts, ctx) {
                    match ctx.tables().building(&word) {
                        Some(kind) => dev.kind = Some(kind),
                        None => ctx.warning(
                            DiagnosticCode::UnknownValue,
                            body.keyword_line(),
                            format!("unknown building type `{}`", word),
                        ),
                    }
                }
            }
            "cost" => assign(&mut dev.cost, values::real(ts, ctx)),
            "manpower" => assign(&mut dev.manpower, values::real(ts, ctx)),
            "date" => assign(&mut dev.date, values::date(ts, ctx)),
            "total_progress" => assign(&mut dev.total_progress, values::real(ts, ctx)),
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(dev)
}

/// `convoy = { … }`
pub fn convoy(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<Convoy> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut convoy = Convoy::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "id" => assign(&mut convoy.id, values::type_id(ts, ctx)),
            "trade_id" => assign(&mut convoy.trade_id, values::type_id(ts, ctx)),
            "transports" => assign(&mut convoy.transports, values::integer(ts, ctx)),
            "escorts" => assign(&mut convoy.escorts, values::integer(ts, ctx)),
            "energy" => assign(&mut convoy.energy, values::boolean(ts, ctx)),
            "metal" => assign(&mut convoy.metal, values::boolean(ts, ctx)),
            "oil" => assign(&mut convoy.oil, values::boolean(ts, ctx)),
            "rare_materials" => assign(&mut convoy.rare_materials, values::boolean(ts, ctx)),
            "supplies" => assign(&mut convoy.supplies, values::boolean(ts, ctx)),
            "path" => {
                if let Some(path) = values::id_list(ts, ctx) {
                    convoy.path = path;
                }
            }
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(convoy)
}

/// Keep the existing value when the clause failed to parse.
pub(crate) fn assign<T>(slot: &mut Option<T>, parsed: Option<T>) {
    if parsed.is_some() {
        *slot = parsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scen::game::GameConfig;
    use crate::scen::tables::CodeTables;

    fn parse_unit(source: &str) -> (Option<Unit>, usize) {
        let tables = CodeTables::standard();
        let game = GameConfig::default();
        let mut ctx = ParseContext::new(&tables, &game);
        let mut ts = TokenStream::new(source, "test");
        let unit = unit(&mut ts, &mut ctx);
        (unit, ctx.into_diagnostics().len())
    }

    #[test]
    fn test_unit_with_divisions() {
        let (unit, diags) = parse_unit(
            r#"= {
                id = { type = 10000 id = 1 }
                name = "I. Armeekorps"
                location = 300
                division = {
                    id = { type = 10000 id = 2 }
                    name = "1. Infanterie-Division"
                    type = infantry
                    strength = 100
                    extra1 = artillery
                    brigade_model1 = 3
                }
                division = { type = armor model = 2 }
            }"#,
        );
        let unit = unit.unwrap();
        assert_eq!(unit.name.as_deref(), Some("I. Armeekorps"));
        assert_eq!(unit.location, Some(300));
        assert_eq!(unit.divisions.len(), 2);
        let first = &unit.divisions[0];
        assert!(first.kind.is_some());
        assert!(first.extra[0].is_some());
        assert_eq!(first.brigade_models[0], Some(3));
        assert_eq!(diags, 0);
    }

    #[test]
    fn test_unknown_division_type_leaves_field_unset() {
        let (unit, diags) = parse_unit("= { division = { type = zeppelin strength = 50 } }");
        let unit = unit.unwrap();
        assert_eq!(unit.divisions[0].kind, None);
        assert_eq!(unit.divisions[0].strength, Some(50.0));
        assert_eq!(diags, 1);
    }

    #[test]
    fn test_development_keys_rejected_in_service() {
        let tables = CodeTables::standard();
        let game = GameConfig::default();
        let mut ctx = ParseContext::new(&tables, &game);
        let mut ts = TokenStream::new("= { type = infantry cost = 4.5\nstrength = 80 }", "test");
        let div = division(&mut ts, &mut ctx, DivisionDetail::InService).unwrap();
        assert_eq!(div.cost, None);
        // `cost` fell into the unknown-keyword path but the section recovered.
        assert_eq!(div.strength, Some(80.0));
        assert_eq!(ctx.diagnostics().len(), 1);
    }

    #[test]
    fn test_development_keys_accepted_in_development() {
        let tables = CodeTables::standard();
        let game = GameConfig::default();
        let mut ctx = ParseContext::new(&tables, &game);
        let mut ts = TokenStream::new(
            "= { type = infantry cost = 4.5 units = 3 total_progress = 0.25 }",
            "test",
        );
        let div = division(&mut ts, &mut ctx, DivisionDetail::Development).unwrap();
        assert_eq!(div.cost, Some(4.5));
        assert_eq!(div.units, Some(3));
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn test_mission() {
        let tables = CodeTables::standard();
        let game = GameConfig::default();
        let mut ctx = ParseContext::new(&tables, &game);
        let mut ts = TokenStream::new(
            "= { type = air_superiority target = 512 percentage = 0.9 night = no day = yes }",
            "test",
        );
        let m = mission(&mut ts, &mut ctx).unwrap();
        assert_eq!(m.kind, Some(crate::scen::tables::MissionType::AirSuperiority));
        assert_eq!(m.target, Some(512));
        assert_eq!(m.night, Some(false));
    }
}
