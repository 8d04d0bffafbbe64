//! `anam cases` -- list the available patient cases.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Table};
use console::style;

use anamnesis_core::registry::CaseRegistry;

/// Print the ordered case list, styled or as JSON.
pub async fn list_cases(json: bool) -> anyhow::Result<()> {
    let registry = CaseRegistry::builtin();

    if json {
        let cases: Vec<serde_json::Value> = registry
            .entries()
            .iter()
            .enumerate()
            .map(|(i, e)| {
                serde_json::json!({
                    "number": i + 1,
                    "label": e.label,
                    "summary": e.summary,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&cases)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Case", "Patient"]);

    for (i, entry) in registry.entries().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&entry.label),
            Cell::new(&entry.summary),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {}",
        style("Start an interview with: anam chat <number>").dim()
    );
    println!();

    Ok(())
}
