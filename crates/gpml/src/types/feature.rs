use crate::schema::{GeometryContainer, ShapeKind};
use crate::{PlateId, Ring};
use serde::{Deserialize, Serialize};

/// Identity of a feature member, read without touching its geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureHeader {
    /// Position among the collection's feature members (0-based)
    pub index: usize,
    pub shape: ShapeKind,
    pub plate_id: PlateId,
}

/// A feature member matched by plate ID, with its rings in document order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub index: usize,
    pub shape: ShapeKind,
    pub plate_id: PlateId,
    /// Geometry property the rings were read from
    pub container: GeometryContainer,
    pub rings: Vec<Ring>,
}

impl Feature {
    pub fn header(&self) -> FeatureHeader {
        FeatureHeader {
            index: self.index,
            shape: self.shape.clone(),
            plate_id: self.plate_id,
        }
    }

    /// Same feature carrying different rings
    pub fn with_rings(&self, rings: Vec<Ring>) -> Self {
        Self {
            index: self.index,
            shape: self.shape.clone(),
            plate_id: self.plate_id,
            container: self.container,
            rings,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.rings.iter().map(Ring::len).sum()
    }
}
