use crate::output::{print_json, print_table};
use trunkline_core::catalog::ActionCatalog;

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        let items: Vec<serde_json::Value> = ActionCatalog::all()
            .iter()
            .map(|template| {
                serde_json::json!({
                    "type": template.application_type.as_str(),
                    "name": template.display_name,
                })
            })
            .collect();
        print_json(&items)?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = ActionCatalog::all()
        .iter()
        .map(|template| {
            vec![
                template.application_type.to_string(),
                template.display_name.to_string(),
            ]
        })
        .collect();
    print_table(&["TYPE", "NAME"], &rows);
    Ok(())
}
