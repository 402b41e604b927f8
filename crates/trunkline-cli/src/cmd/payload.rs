use crate::doc;
use crate::output::print_json;
use std::path::Path;
use trunkline_core::persist::RoutePayload;

/// Emit the write-shape JSON a save would submit to the backend.
pub fn run(file: &Path) -> anyhow::Result<()> {
    let route = doc::load(file)?;
    let program = doc::load_program(&route)?;
    let payload = RoutePayload::from_route(&route, &program)?;
    print_json(&payload)
}
