use crate::doc;
use crate::output::print_json;
use anyhow::{bail, Context};
use clap::Args;
use std::path::Path;
use trunkline_core::catalog::ActionCatalog;
use trunkline_core::program::RouteProgram;
use trunkline_core::settings::{
    CustomSettingsPatch, DialSettingsPatch, SettingsPatch,
};
use trunkline_core::types::ApplicationType;

// ---------------------------------------------------------------------------
// add
// ---------------------------------------------------------------------------

pub fn add(file: &Path, application_type: &str, at: Option<usize>, json: bool) -> anyhow::Result<()> {
    let application_type: ApplicationType = application_type
        .parse()
        .context("expected 'dial' or 'custom'")?;
    let template = ActionCatalog::find(application_type);

    let mut route = doc::load(file)?;
    let program = doc::load_program(&route)?;
    let index = match at {
        Some(position) => to_index(position, program.len() + 1)?,
        None => program.len(),
    };
    let next = program.insert_at(index, &template);

    doc::store_program(&mut route, &next)?;
    doc::save(file, &route)?;
    tracing::debug!(file = %file.display(), "instruction added");

    if json {
        print_json(&serde_json::json!({
            "added": application_type.as_str(),
            "count": next.len(),
        }))?;
    } else {
        println!("Added {} ({} instructions).", template.display_name, next.len());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// set
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct SetFields {
    /// Trunk id to dial through
    #[arg(long)]
    pub trunk: Option<String>,

    /// Caller ID override (empty string clears it)
    #[arg(long)]
    pub caller_id: Option<String>,

    /// Digits prepended to the dialed extension
    #[arg(long)]
    pub prefix: Option<String>,

    #[arg(long)]
    pub tag: Option<String>,

    /// Dial timeout in seconds
    #[arg(long)]
    pub timeout: Option<u32>,

    #[arg(long)]
    pub options: Option<String>,

    #[arg(long)]
    pub url: Option<String>,

    /// Custom application name
    #[arg(long)]
    pub app: Option<String>,

    /// Custom application arguments
    #[arg(long = "args")]
    pub arguments: Option<String>,
}

pub fn set(
    file: &Path,
    at: usize,
    fields: &SetFields,
    reference: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let mut route = doc::load(file)?;
    let program = doc::load_program(&route)?;
    let index = to_index(at, program.len())?;
    let instruction = program
        .at(index)
        .with_context(|| format!("no instruction at position {at}"))?;

    let patch = match instruction.application_type {
        ApplicationType::OutboundDial => SettingsPatch::Dial(DialSettingsPatch {
            trunk_id: fields.trunk.clone(),
            caller_id: fields.caller_id.clone(),
            prefix: fields.prefix.clone(),
            tag: fields.tag.clone(),
            timeout: fields.timeout,
            options: fields.options.clone(),
            url: fields.url.clone(),
        }),
        ApplicationType::Custom => SettingsPatch::Custom(CustomSettingsPatch {
            application_name: fields.app.clone(),
            arguments: fields.arguments.clone(),
        }),
    };

    if let Some(caller_id) = fields.caller_id.as_deref() {
        let caller_id = caller_id.trim();
        if !caller_id.is_empty() {
            let reference = doc::load_reference(reference)?;
            if !reference.dids.is_empty() && !reference.has_did(caller_id) {
                tracing::warn!(caller_id, "caller ID is not a known DID");
            }
        }
    }

    let transient_id = instruction.transient_id.clone();
    let next = program.update_settings(&transient_id, &patch);

    doc::store_program(&mut route, &next)?;
    doc::save(file, &route)?;

    report(&next, json, &format!("Updated instruction {at}."))
}

// ---------------------------------------------------------------------------
// move / remove
// ---------------------------------------------------------------------------

pub fn move_to(file: &Path, from: usize, to: usize, json: bool) -> anyhow::Result<()> {
    let mut route = doc::load(file)?;
    let program = doc::load_program(&route)?;
    let from = to_index(from, program.len())?;
    let to = to_index(to, program.len())?;
    let next = program.move_instruction(from, to);

    doc::store_program(&mut route, &next)?;
    doc::save(file, &route)?;

    report(&next, json, &format!("Moved instruction {} to {}.", from + 1, to + 1))
}

pub fn remove(file: &Path, at: usize, json: bool) -> anyhow::Result<()> {
    let mut route = doc::load(file)?;
    let program = doc::load_program(&route)?;
    let index = to_index(at, program.len())?;
    let instruction = program
        .at(index)
        .with_context(|| format!("no instruction at position {at}"))?;

    let transient_id = instruction.transient_id.clone();
    let next = program.remove(&transient_id);

    doc::store_program(&mut route, &next)?;
    doc::save(file, &route)?;

    report(&next, json, &format!("Removed instruction {at}."))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Positions on the command line are 1-based, matching displayed priorities.
fn to_index(position: usize, len: usize) -> anyhow::Result<usize> {
    if position == 0 || position > len {
        bail!("position {position} is out of range (1..={len})");
    }
    Ok(position - 1)
}

fn report(program: &RouteProgram, json: bool, message: &str) -> anyhow::Result<()> {
    if json {
        let items: Vec<serde_json::Value> = program
            .instructions()
            .iter()
            .map(|instruction| {
                serde_json::json!({
                    "priority": instruction.priority,
                    "type": instruction.application_type.as_str(),
                    "origin": instruction.origin.as_str(),
                    "preview": trunkline_core::preview::preview(instruction),
                })
            })
            .collect();
        print_json(&items)?;
    } else {
        println!("{message}");
    }
    Ok(())
}
