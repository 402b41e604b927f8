use anyhow::{Context, Result};
use std::path::Path;
use trunkline_core::persist::{self, OutboundRoute};
use trunkline_core::program::RouteProgram;
use trunkline_core::refdata::ReferenceData;

pub fn load(path: &Path) -> Result<OutboundRoute> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let route: OutboundRoute = serde_json::from_str(&data)
        .with_context(|| format!("malformed route document {}", path.display()))?;
    Ok(route)
}

pub fn save(path: &Path, route: &OutboundRoute) -> Result<()> {
    let mut data = serde_json::to_string_pretty(route)?;
    data.push('\n');
    atomic_write(path, data.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))
}

pub fn load_program(route: &OutboundRoute) -> Result<RouteProgram> {
    let program =
        persist::from_persisted(&route.applications).context("failed to load applications")?;
    Ok(program)
}

pub fn store_program(route: &mut OutboundRoute, program: &RouteProgram) -> Result<()> {
    route.applications = persist::to_persisted(program)?;
    Ok(())
}

pub fn load_reference(path: Option<&Path>) -> Result<ReferenceData> {
    let Some(path) = path else {
        return Ok(ReferenceData::default());
    };
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let reference: ReferenceData = serde_json::from_str(&data)
        .with_context(|| format!("malformed reference data {}", path.display()))?;
    Ok(reference)
}

/// Atomically write via a tempfile in the same directory, so a failed save
/// never leaves a half-written document behind.
fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    std::io::Write::write_all(&mut tmp, data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
