// GPlates feature geometry extraction and finite rotations
mod geo;
mod parse;
pub mod reconstruct;
pub mod rotation;
pub mod schema;
pub mod types;

pub use geo::{GeoPoint, PlateId, Ring, normalize_lon};
pub use reconstruct::{rotate_directional_mean, rotate_features, rotate_pole, rotate_rings};
pub use rotation::{
    FiniteRotation, RotationChain, rotate_coords, rotate_point, rotate_point_chain,
};
pub use schema::{GeometryContainer, ShapeKind};
pub use types::*;

use parse::Parser;
use roxmltree::Document;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GpmlError {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] roxmltree::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required element: {0}")]
    MissingElement(&'static str),

    #[error("Invalid GPML structure: {0}")]
    InvalidStructure(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error(
        "Malformed posList in feature {feature} (plate {plate_id}): {count} values, expected latitude/longitude pairs"
    )]
    PosList {
        feature: usize,
        plate_id: PlateId,
        count: usize,
    },

    #[error("Unsupported geometry in feature {feature} ({shape}, plate {plate_id}): {detail}")]
    UnsupportedGeometry {
        feature: usize,
        plate_id: PlateId,
        shape: String,
        detail: String,
    },

    #[error("Coordinate arrays differ in length: {lats} latitudes, {lons} longitudes")]
    LengthMismatch { lats: usize, lons: usize },
}

pub type Result<T> = std::result::Result<T, GpmlError>;

/// Extract the rings of every feature whose plate ID is in `plate_ids`.
///
/// Features come back in document order, each tagged with its index among the
/// collection's feature members. Features on other plates are skipped without
/// touching their geometry. Any error in a matched feature fails the whole call.
pub fn extract_polygons(xml: &str, plate_ids: &HashSet<PlateId>) -> Result<Vec<Feature>> {
    let doc = Document::parse(xml)?;
    Parser::new(&doc)?.extract(plate_ids)
}

/// Read a `.gpml` file and extract the rings for `plate_ids`.
pub fn extract_polygons_file(
    path: impl AsRef<Path>,
    plate_ids: &HashSet<PlateId>,
) -> Result<Vec<Feature>> {
    let xml = read_document(path.as_ref())?;
    extract_polygons(&xml, plate_ids)
}

/// List every feature member's shape and plate ID without reading geometry.
pub fn scan_features(xml: &str) -> Result<Vec<FeatureHeader>> {
    let doc = Document::parse(xml)?;
    Parser::new(&doc)?.scan()
}

/// Read a `.gpml` file and list its features.
pub fn scan_features_file(path: impl AsRef<Path>) -> Result<Vec<FeatureHeader>> {
    let xml = read_document(path.as_ref())?;
    scan_features(&xml)
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| GpmlError::Io {
        path: path.to_path_buf(),
        source,
    })
}
