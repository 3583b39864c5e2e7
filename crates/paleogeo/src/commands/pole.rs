use anyhow::Result;
use colored::Colorize;
use comfy_table::Cell;
use gpml::Pole;
use serde_json::json;

use super::{deg, new_table};
use crate::OutputFormat;
use crate::style::MarkerStyle;
use crate::utils::chain::ChainArgs;

pub fn execute(
    pole: Pole,
    chain: &ChainArgs,
    style: &MarkerStyle,
    format: OutputFormat,
) -> Result<()> {
    let chain = chain.build()?;
    let rotated = gpml::rotate_pole(&pole, &chain)?;

    match format {
        OutputFormat::Text => {
            println!("{}", "Rotated pole".bold());
            let mut table = new_table();
            table.set_header(vec!["", "Longitude", "Latitude", "A95"]);
            for (label, p) in [("Present", &pole), ("Rotated", &rotated)] {
                table.add_row(vec![
                    Cell::new(label),
                    Cell::new(deg(p.lon)),
                    Cell::new(deg(p.lat)),
                    Cell::new(deg(p.a95)),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Json => {
            let output = json!({
                "rotation": chain,
                "pole": rotated,
                "style": style,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
