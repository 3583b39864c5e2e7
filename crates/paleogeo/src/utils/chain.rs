use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use gpml::{FiniteRotation, RotationChain};
use serde::Deserialize;

use super::file::load_text_file;

/// Rotation stages from the command line
#[derive(Args, Debug, Clone, Default)]
pub struct ChainArgs {
    /// Stage rotation as POLE_LAT,POLE_LON,ANGLE in degrees (repeatable, applied in order)
    #[arg(
        long = "euler",
        value_name = "LAT,LON,ANGLE",
        value_parser = parse_euler,
        allow_hyphen_values = true
    )]
    pub euler: Vec<FiniteRotation>,

    /// TOML file of [[stage]] rotations, applied before any --euler stages
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub rotations: Option<PathBuf>,
}

impl ChainArgs {
    pub fn build(&self) -> Result<RotationChain> {
        let mut stages = match &self.rotations {
            Some(path) => load_rotation_file(path)?,
            None => Vec::new(),
        };
        stages.extend(self.euler.iter().copied());

        log::debug!("Rotation chain with {} stage(s)", stages.len());
        Ok(RotationChain::new(stages))
    }
}

/// Reconstruction file listing stage rotations in application order
///
/// ```toml
/// [[stage]]
/// pole_lat = 12.5
/// pole_lon = -40.0
/// angle = 33.0
/// ```
#[derive(Debug, Deserialize)]
struct RotationFile {
    #[serde(default, rename = "stage")]
    stages: Vec<FiniteRotation>,
}

fn load_rotation_file(path: &Path) -> Result<Vec<FiniteRotation>> {
    let content = load_text_file(path)?;
    let file: RotationFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse rotation file: {:?}", path))?;
    Ok(file.stages)
}

fn parse_euler(s: &str) -> std::result::Result<FiniteRotation, String> {
    let values = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| format!("invalid number '{}'", part.trim()))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let &[lat, lon, angle] = values.as_slice() else {
        return Err(format!(
            "expected POLE_LAT,POLE_LON,ANGLE, got {} value(s)",
            values.len()
        ));
    };
    FiniteRotation::new(lat, lon, angle).map_err(|e| e.to_string())
}
