use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use comfy_table::{Cell, Color};
use gpml::{FeatureHeader, PlateId};
use serde_json::json;

use super::new_table;
use crate::OutputFormat;
use crate::utils::file as file_utils;

pub fn execute(file: &Path, format: OutputFormat) -> Result<()> {
    let content = file_utils::load_gpml_file(file)?;
    let headers = gpml::scan_features(&content)?;

    match format {
        OutputFormat::Text => output_text(&headers),
        OutputFormat::Json => output_json(&headers),
    }
}

/// Feature count per plate, in plate order
fn plate_counts(headers: &[FeatureHeader]) -> BTreeMap<PlateId, usize> {
    let mut counts = BTreeMap::new();
    for header in headers {
        *counts.entry(header.plate_id).or_insert(0) += 1;
    }
    counts
}

fn output_text(headers: &[FeatureHeader]) -> Result<()> {
    println!("{}", "Features".bold());

    let mut table = new_table();
    table.set_header(vec!["#", "Shape", "Plate ID"]);
    for header in headers {
        table.add_row(vec![
            Cell::new(header.index),
            Cell::new(&header.shape),
            Cell::new(header.plate_id).fg(Color::Cyan),
        ]);
    }
    println!("{table}");

    let counts = plate_counts(headers);
    println!(
        "{} feature(s) on {} plate(s)",
        headers.len(),
        counts.len()
    );
    Ok(())
}

fn output_json(headers: &[FeatureHeader]) -> Result<()> {
    let output = json!({
        "features": headers,
        "plates": plate_counts(headers),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
