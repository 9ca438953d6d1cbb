//! Unit-class (division/brigade definition) file grammar
//!
//! Every top-level keyword is a class type name from whichever table the
//! file family uses; inside, `model` sections carry the per-model stats.
//! A handful of stat keywords only exist in later game editions, gated by
//! [`crate::scen::game::GameConfig`].

use crate::scen::context::ParseContext;
use crate::scen::diagnostics::DiagnosticCode;
use crate::scen::engine::{FileBody, SectionBody};
use crate::scen::grammars::units::assign;
use crate::scen::lexing::TokenStream;
use crate::scen::model::{UnitBranch, UnitClass, UnitModel};
use crate::scen::tables::UnitClassKind;
use crate::scen::values;

/// Parse one division-class or brigade-class file.
pub fn unit_class_document(
    ts: &mut TokenStream,
    ctx: &mut ParseContext,
    kind: UnitClassKind,
) -> Vec<UnitClass> {
    let mut body = FileBody::new();
    let mut classes = Vec::new();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match ctx.tables().unit_type(&key, kind) {
            Some(code) => {
                if let Some(mut class) = unit_class(ts, ctx) {
                    class.type_code = Some(code);
                    class.type_name = key;
                    classes.push(class);
                }
            }
            None => body.unknown_keyword(&key, ts, ctx),
        }
    }
    classes
}

fn unit_class(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<UnitClass> {
    let mut body = SectionBody::open(ts, ctx)?;
    let mut class = UnitClass::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "name" => assign(&mut class.name, values::text(ts, ctx)),
            "short_name" => assign(&mut class.short_name, values::text(ts, ctx)),
            "desc" => assign(&mut class.desc, values::text(ts, ctx)),
            "type" => {
                if let Some(word) = values::identifier(ts, ctx) {
                    match word.to_ascii_lowercase().as_str() {
                        "land" => class.branch = Some(UnitBranch::Land),
                        "naval" => class.branch = Some(UnitBranch::Naval),
                        "air" => class.branch = Some(UnitBranch::Air),
                        _ => ctx.warning(
                            DiagnosticCode::UnknownValue,
                            body.keyword_line(),
                            format!("unknown branch `{}`", word),
                        ),
                    }
                }
            }
            "sprite" => assign(&mut class.sprite, values::text(ts, ctx)),
            "model" => {
                if let Some(m) = model(ts, ctx) {
                    class.models.push(m);
                }
            }
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(class)
}

fn model(ts: &mut TokenStream, ctx: &mut ParseContext) -> Option<UnitModel> {
    let armageddon = ctx.game().has_armageddon_keys();
    let darkest_hour = ctx.game().is_darkest_hour();
    let mut body = SectionBody::open(ts, ctx)?;
    let mut m = UnitModel::default();
    while let Some(key) = body.next_keyword(ts, ctx) {
        match key.as_str() {
            "name" => assign(&mut m.name, values::text(ts, ctx)),
            "cost" => assign(&mut m.cost, values::real(ts, ctx)),
            "buildtime" => assign(&mut m.build_time, values::real(ts, ctx)),
            "manpower" => assign(&mut m.manpower, values::real(ts, ctx)),
            "maxspeed" => assign(&mut m.max_speed, values::real(ts, ctx)),
            "defensiveness" => assign(&mut m.defensiveness, values::real(ts, ctx)),
            "toughness" => assign(&mut m.toughness, values::real(ts, ctx)),
            "softness" => assign(&mut m.softness, values::real(ts, ctx)),
            "suppression" => assign(&mut m.suppression, values::real(ts, ctx)),
            "airdefence" | "airdefense" => assign(&mut m.air_defense, values::real(ts, ctx)),
            "airattack" => assign(&mut m.air_attack, values::real(ts, ctx)),
            "hardattack" => assign(&mut m.hard_attack, values::real(ts, ctx)),
            "softattack" => assign(&mut m.soft_attack, values::real(ts, ctx)),
            "navalattack" => assign(&mut m.naval_attack, values::real(ts, ctx)),
            "strategicattack" => assign(&mut m.strategic_attack, values::real(ts, ctx)),
            "range" => assign(&mut m.range, values::real(ts, ctx)),
            "supplyconsumption" => assign(&mut m.supply_consumption, values::real(ts, ctx)),
            "fuelconsumption" => assign(&mut m.fuel_consumption, values::real(ts, ctx)),
            "transportweight" => assign(&mut m.transport_weight, values::real(ts, ctx)),
            "transportcapability" => {
                assign(&mut m.transport_capability, values::real(ts, ctx))
            }
            "upgrade_time_factor" => {
                assign(&mut m.upgrade_time_factor, values::real(ts, ctx))
            }
            "upgrade_cost_factor" => {
                assign(&mut m.upgrade_cost_factor, values::real(ts, ctx))
            }
            "speed_cap_art" if armageddon => assign(&mut m.speed_cap_art, values::real(ts, ctx)),
            "speed_cap_at" if armageddon => assign(&mut m.speed_cap_at, values::real(ts, ctx)),
            "speed_cap_aa" if armageddon => assign(&mut m.speed_cap_aa, values::real(ts, ctx)),
            "reinforcement_time" if darkest_hour => {
                assign(&mut m.reinforcement_time, values::real(ts, ctx))
            }
            "reinforcement_cost" if darkest_hour => {
                assign(&mut m.reinforcement_cost, values::real(ts, ctx))
            }
            _ => body.unknown_keyword(&key, ts, ctx),
        }
    }
    Some(m)
}
