use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{Cell, Color};
use gpml::{Feature, PlateId, RotationChain};
use serde_json::{Value, json};

use super::{deg, new_table};
use crate::OutputFormat;
use crate::style::PolygonStyle;
use crate::utils::chain::ChainArgs;
use crate::utils::file as file_utils;

pub fn execute(
    file: &Path,
    plates: &[PlateId],
    chain: &ChainArgs,
    reverse: bool,
    style: &PolygonStyle,
    format: OutputFormat,
) -> Result<()> {
    let chain = chain.build()?;
    let content = file_utils::load_gpml_file(file)?;

    let plate_ids: HashSet<PlateId> = plates.iter().copied().collect();
    let features = gpml::extract_polygons(&content, &plate_ids)
        .with_context(|| format!("Failed to extract plates {:?} from {:?}", plates, file))?;
    if features.is_empty() {
        log::warn!("No features found for plate(s) {:?} in {:?}", plates, file);
    }

    let rotated = gpml::rotate_features(&features, &chain, reverse);
    log::info!(
        "Rotated {} feature(s) through {} stage(s)",
        rotated.len(),
        chain.len()
    );

    match format {
        OutputFormat::Text => output_text(&rotated, &chain),
        OutputFormat::Json => output_json(&rotated, &chain, reverse, style),
    }
}

/// Render hand-off: rings as `[lon, lat]` pairs, grouped by feature
fn features_json(features: &[Feature]) -> Value {
    features
        .iter()
        .map(|f| {
            json!({
                "index": f.index,
                "shape": f.shape,
                "plate_id": f.plate_id,
                "container": f.container,
                "rings": f.rings.iter().map(|r| r.lon_lat()).collect::<Vec<_>>(),
            })
        })
        .collect()
}

fn output_text(features: &[Feature], chain: &RotationChain) -> Result<()> {
    println!("{}", "Rotation".bold());
    let mut stages = new_table();
    stages.set_header(vec!["Stage", "Pole lat", "Pole lon", "Angle"]);
    for (i, stage) in chain.stages().iter().enumerate() {
        stages.add_row(vec![
            Cell::new(i + 1),
            Cell::new(deg(stage.pole_lat())),
            Cell::new(deg(stage.pole_lon())),
            Cell::new(deg(stage.angle())).fg(Color::Cyan),
        ]);
    }
    if chain.is_empty() {
        println!("identity (no stages)");
    } else {
        println!("{stages}");
    }

    println!();
    println!("{}", "Features".bold());
    let mut table = new_table();
    table.set_header(vec![
        "#",
        "Shape",
        "Plate ID",
        "Geometry",
        "Rings",
        "Vertices",
        "First vertex (lon, lat)",
    ]);
    for feature in features {
        let first = feature
            .rings
            .iter()
            .find_map(|r| r.points().first())
            .map(|p| format!("{}, {}", deg(p.lon()), deg(p.lat())))
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(feature.index),
            Cell::new(&feature.shape),
            Cell::new(feature.plate_id).fg(Color::Cyan),
            Cell::new(feature.container),
            Cell::new(feature.rings.len()),
            Cell::new(feature.vertex_count()),
            Cell::new(first),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn output_json(
    features: &[Feature],
    chain: &RotationChain,
    reverse: bool,
    style: &PolygonStyle,
) -> Result<()> {
    let output = json!({
        "rotation": chain,
        "reverse": reverse,
        "style": style,
        "features": features_json(features),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
