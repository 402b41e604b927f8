use crate::doc;
use crate::output::{print_json, print_table};
use std::path::Path;
use trunkline_core::preview;
use trunkline_core::settings::Settings;

pub fn run(file: &Path, reference: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let route = doc::load(file)?;
    let program = doc::load_program(&route)?;
    let reference = doc::load_reference(reference)?;

    if json {
        let applications: Vec<serde_json::Value> = program
            .instructions()
            .iter()
            .map(|instruction| {
                serde_json::json!({
                    "priority": instruction.priority,
                    "type": instruction.application_type.as_str(),
                    "origin": instruction.origin.as_str(),
                    "preview": preview::preview(instruction),
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "phoneNumber": route.phone_number,
            "context": route.context,
            "recording": route.recording,
            "alias": route.alias,
            "description": route.description,
            "applications": applications,
        }))?;
        return Ok(());
    }

    println!("Route:   {} ({})", route.phone_number, route.context);
    if !route.alias.is_empty() {
        println!("Alias:   {}", route.alias);
    }
    if !route.description.is_empty() {
        println!("About:   {}", route.description);
    }
    println!();

    if program.is_empty() {
        println!("No instructions.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = program
        .instructions()
        .iter()
        .map(|instruction| {
            let trunk = match &instruction.settings {
                Settings::Dial(settings) => match reference.trunk_name(&settings.trunk_id) {
                    Some(name) => format!("{} ({})", name, settings.trunk_id),
                    None => settings.trunk_id.clone(),
                },
                Settings::Custom(_) => String::new(),
            };
            vec![
                instruction.priority.to_string(),
                instruction.application_type.to_string(),
                instruction.origin.to_string(),
                trunk,
                preview::preview(instruction),
            ]
        })
        .collect();
    print_table(&["PRI", "TYPE", "ORIGIN", "TRUNK", "PREVIEW"], &rows);

    // Backend-generated extensions are display-only.
    if !route.generated_extensions.is_empty() {
        println!();
        println!("Generated extensions (backend):");
        for extension in &route.generated_extensions {
            println!(
                "  {}. {} {}",
                extension.priority, extension.app, extension.appdata
            );
        }
    }
    Ok(())
}
