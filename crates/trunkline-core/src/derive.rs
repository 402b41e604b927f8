//! Derived caller-ID instructions.
//!
//! A dial instruction with a non-blank caller ID gets a `Set` instruction
//! synthesized immediately before it, overriding the caller ID for the leg.
//! Derived instructions are addressed by the deterministic key
//! `"<triggerId>-set"`, so the recompute pass is idempotent.

use crate::instruction::Instruction;
use crate::settings::{CustomSettings, Settings};
use crate::types::{ApplicationType, Origin};
use std::collections::HashSet;

/// Dialplan application used for the caller-ID override.
pub const SET_APPLICATION: &str = "Set";

const DERIVED_SUFFIX: &str = "-set";

/// Deterministic key of the derived counterpart of `trigger_id`.
pub fn derived_key(trigger_id: &str) -> String {
    format!("{trigger_id}{DERIVED_SUFFIX}")
}

/// `CALLERID(all)="{cid} <{cid}>"` for the trimmed caller ID.
pub fn caller_id_expression(caller_id: &str) -> String {
    let cid = caller_id.trim();
    format!("CALLERID(all)=\"{cid} <{cid}>\"")
}

fn derived_instruction(trigger_id: &str, caller_id: &str) -> Instruction {
    Instruction {
        transient_id: derived_key(trigger_id),
        database_id: None,
        application_type: ApplicationType::Custom,
        priority: 0,
        settings: Settings::Custom(CustomSettings {
            application_name: SET_APPLICATION.to_string(),
            arguments: caller_id_expression(caller_id),
        }),
        origin: Origin::Derived,
    }
}

/// Bring derived instructions in line with their triggers.
///
/// Inserts a missing override immediately before its trigger, updates an
/// existing one in place (content only — a derived instruction the operator
/// dragged elsewhere keeps its position), and drops overrides whose trigger
/// condition has lapsed. Priorities are left for the caller to reindex.
pub fn recompute(instructions: &mut Vec<Instruction>) {
    let triggers: Vec<(String, String)> = instructions
        .iter()
        .filter_map(|instruction| {
            instruction
                .caller_id_trigger()
                .map(|caller_id| (instruction.transient_id.clone(), caller_id.to_string()))
        })
        .collect();

    let live: HashSet<String> = triggers.iter().map(|(id, _)| derived_key(id)).collect();
    instructions.retain(|instruction| !instruction.is_derived() || live.contains(&instruction.transient_id));

    for (trigger_id, caller_id) in triggers {
        let key = derived_key(&trigger_id);
        if let Some(existing) = instructions
            .iter_mut()
            .find(|instruction| instruction.transient_id == key)
        {
            if let Settings::Custom(settings) = &mut existing.settings {
                settings.arguments = caller_id_expression(&caller_id);
            }
        } else {
            let Some(position) = instructions
                .iter()
                .position(|instruction| instruction.transient_id == trigger_id)
            else {
                continue;
            };
            instructions.insert(position, derived_instruction(&trigger_id, &caller_id));
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
