use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::Cell;
use gpml::DirectionalMean;
use serde_json::json;

use super::{deg, new_table};
use crate::OutputFormat;
use crate::style::EllipseStyle;
use crate::utils::chain::ChainArgs;
use crate::utils::file as file_utils;

pub fn execute(
    file: &Path,
    chain: &ChainArgs,
    style: &EllipseStyle,
    format: OutputFormat,
) -> Result<()> {
    let chain = chain.build()?;
    let content = file_utils::load_text_file(file)?;
    let mean: DirectionalMean = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse Kent mean record: {:?}", file))?;

    let rotated = gpml::rotate_directional_mean(&mean, &chain)?;

    match format {
        OutputFormat::Text => output_text(&mean, &rotated),
        OutputFormat::Json => {
            let output = json!({
                "rotation": chain,
                "mean": rotated,
                "style": style,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
    }
}

fn output_text(present: &DirectionalMean, rotated: &DirectionalMean) -> Result<()> {
    println!("{}", "Kent mean".bold());
    let mut table = new_table();
    table.set_header(vec!["", "Present", "Rotated"]);

    let rows: [(&str, fn(&DirectionalMean) -> f64); 8] = [
        ("dec", |m| m.dec),
        ("inc", |m| m.inc),
        ("Zdec", |m| m.z_dec),
        ("Zinc", |m| m.z_inc),
        ("Edec", |m| m.e_dec),
        ("Einc", |m| m.e_inc),
        ("Zeta", |m| m.zeta),
        ("Eta", |m| m.eta),
    ];
    for (label, field) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(deg(field(present))),
            Cell::new(deg(field(rotated))),
        ]);
    }
    println!("{table}");
    Ok(())
}
