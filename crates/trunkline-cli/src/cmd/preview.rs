use crate::doc;
use crate::output::print_json;
use std::path::Path;
use trunkline_core::persist;

pub fn run(file: &Path, json: bool) -> anyhow::Result<()> {
    let route = doc::load(file)?;
    let program = doc::load_program(&route)?;
    let extensions = persist::voice_extensions(&program);

    if json {
        print_json(&extensions)?;
        return Ok(());
    }

    if extensions.is_empty() {
        println!("No instructions.");
        return Ok(());
    }
    for extension in &extensions {
        println!("{:>3}  {:<10} {}", extension.priority, extension.app, extension.appdata);
    }
    Ok(())
}
