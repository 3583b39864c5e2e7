//! GPML names and the lookup tables the parser dispatches on.
//!
//! Shape elements are matched by namespace and local name rather than by
//! slicing prefixed tag strings, and the choice between the alternative
//! geometry properties of a feature is a fixed priority table.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const GPML_NS: &str = "http://www.gplates.org/gplates";
pub const GML_NS: &str = "http://www.opengis.net/gml";

/// Path from a shape element to its plate ID text, all in the GPML namespace
pub const PLATE_ID_PATH: [&str; 3] = ["reconstructionPlateId", "ConstantValue", "value"];

/// Paths from a geometry property's `gpml:value` to coordinate lists, in the GML namespace
pub const POS_LIST_PATHS: [&[&str]; 3] = [
    &["Polygon", "exterior", "LinearRing", "posList"],
    &["LineString", "posList"],
    &["OrientableCurve", "baseCurve", "LineString", "posList"],
];

/// Feature type of a feature member's shape element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShapeKind {
    Basin,
    ClosedContinentalBoundary,
    Coastline,
    ContinentalFragment,
    ContinentalRift,
    Craton,
    Fault,
    IslandArc,
    MidOceanRidge,
    Orogen,
    PassiveContinentalBoundary,
    Suture,
    TerraneBoundary,
    UnclassifiedFeature,
    /// Any other GPML feature type, by local name
    Other(String),
}

impl ShapeKind {
    pub fn from_local_name(name: &str) -> Self {
        match name {
            "Basin" => Self::Basin,
            "ClosedContinentalBoundary" => Self::ClosedContinentalBoundary,
            "Coastline" => Self::Coastline,
            "ContinentalFragment" => Self::ContinentalFragment,
            "ContinentalRift" => Self::ContinentalRift,
            "Craton" => Self::Craton,
            "Fault" => Self::Fault,
            "IslandArc" => Self::IslandArc,
            "MidOceanRidge" => Self::MidOceanRidge,
            "Orogen" => Self::Orogen,
            "PassiveContinentalBoundary" => Self::PassiveContinentalBoundary,
            "Suture" => Self::Suture,
            "TerraneBoundary" => Self::TerraneBoundary,
            "UnclassifiedFeature" => Self::UnclassifiedFeature,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn local_name(&self) -> &str {
        match self {
            Self::Basin => "Basin",
            Self::ClosedContinentalBoundary => "ClosedContinentalBoundary",
            Self::Coastline => "Coastline",
            Self::ContinentalFragment => "ContinentalFragment",
            Self::ContinentalRift => "ContinentalRift",
            Self::Craton => "Craton",
            Self::Fault => "Fault",
            Self::IslandArc => "IslandArc",
            Self::MidOceanRidge => "MidOceanRidge",
            Self::Orogen => "Orogen",
            Self::PassiveContinentalBoundary => "PassiveContinentalBoundary",
            Self::Suture => "Suture",
            Self::TerraneBoundary => "TerraneBoundary",
            Self::UnclassifiedFeature => "UnclassifiedFeature",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.local_name())
    }
}

impl From<String> for ShapeKind {
    fn from(name: String) -> Self {
        Self::from_local_name(&name)
    }
}

impl From<ShapeKind> for String {
    fn from(kind: ShapeKind) -> Self {
        kind.local_name().to_string()
    }
}

/// Geometry property holding a feature's rings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GeometryContainer {
    OutlineOf,
    Boundary,
    UnclassifiedGeometry,
    CenterLineOf,
}

impl GeometryContainer {
    /// Lookup order when a feature carries more than one geometry property
    pub const PRIORITY: [Self; 4] = [
        Self::OutlineOf,
        Self::Boundary,
        Self::UnclassifiedGeometry,
        Self::CenterLineOf,
    ];

    pub fn local_name(self) -> &'static str {
        match self {
            Self::OutlineOf => "outlineOf",
            Self::Boundary => "boundary",
            Self::UnclassifiedGeometry => "unclassifiedGeometry",
            Self::CenterLineOf => "centerLineOf",
        }
    }

    pub fn from_local_name(name: &str) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|container| container.local_name() == name)
    }

    /// Pick the highest-priority container among those present.
    pub fn select(present: impl IntoIterator<Item = Self>) -> Option<Self> {
        let present: Vec<Self> = present.into_iter().collect();
        Self::PRIORITY
            .into_iter()
            .find(|container| present.contains(container))
    }
}

impl fmt::Display for GeometryContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.local_name())
    }
}
