use crate::doc;
use crate::output::print_json;
use anyhow::bail;
use std::path::Path;
use trunkline_core::persist::OutboundRoute;

pub fn run(
    file: &Path,
    phone_number: &str,
    context: &str,
    alias: &str,
    description: &str,
    json: bool,
) -> anyhow::Result<()> {
    if file.exists() {
        bail!("{} already exists", file.display());
    }

    let route = OutboundRoute {
        context: context.to_string(),
        phone_number: phone_number.to_string(),
        recording: false,
        alias: alias.to_string(),
        description: description.to_string(),
        applications: Vec::new(),
        generated_extensions: Vec::new(),
    };
    doc::save(file, &route)?;

    if json {
        print_json(&serde_json::json!({
            "file": file.display().to_string(),
            "phoneNumber": phone_number,
            "context": context,
        }))?;
    } else {
        println!("Created route document {}.", file.display());
    }
    Ok(())
}
