//! Finite rotations of the sphere and ordered chains of them.
//!
//! A [`FiniteRotation`] turns every point about the axis through its pole by a
//! signed angle, counter-clockwise when viewed from above the pole (right-hand
//! rule). A [`RotationChain`] applies its stages one after another: each stage
//! rotates the output of the previous one, so `[A, B]` means "A, then B".

use crate::geo::GeoPoint;
use crate::{GpmlError, Result};
use glam::DMat3;
use serde::{Deserialize, Serialize};

/// Rotation about the pole at (`pole_lat`, `pole_lon`) by `angle` degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRotation")]
pub struct FiniteRotation {
    pole_lat: f64,
    pole_lon: f64,
    angle: f64,
}

#[derive(Deserialize)]
struct RawRotation {
    pole_lat: f64,
    pole_lon: f64,
    angle: f64,
}

impl TryFrom<RawRotation> for FiniteRotation {
    type Error = GpmlError;

    fn try_from(raw: RawRotation) -> Result<Self> {
        Self::new(raw.pole_lat, raw.pole_lon, raw.angle)
    }
}

impl FiniteRotation {
    pub fn new(pole_lat: f64, pole_lon: f64, angle: f64) -> Result<Self> {
        GeoPoint::new(pole_lat, pole_lon)?;
        if !angle.is_finite() {
            return Err(GpmlError::InvalidCoordinate(format!(
                "rotation angle {angle} is not finite"
            )));
        }
        Ok(Self {
            pole_lat,
            pole_lon,
            angle,
        })
    }

    pub fn pole_lat(&self) -> f64 {
        self.pole_lat
    }

    pub fn pole_lon(&self) -> f64 {
        self.pole_lon
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn pole(&self) -> GeoPoint {
        GeoPoint::from_validated(self.pole_lat, self.pole_lon)
    }

    /// Same pole, opposite angle
    pub fn inverse(&self) -> Self {
        Self {
            angle: -self.angle,
            ..*self
        }
    }

    pub fn matrix(&self) -> DMat3 {
        let angle = self.angle.rem_euclid(360.0).to_radians();
        DMat3::from_axis_angle(self.pole().to_vector(), angle)
    }

    pub fn rotate(&self, point: GeoPoint) -> GeoPoint {
        GeoPoint::from_vector(self.matrix() * point.to_vector())
    }

    /// Rotate a batch of points, keeping their order.
    pub fn rotate_all(&self, points: &[GeoPoint]) -> Vec<GeoPoint> {
        let matrix = self.matrix();
        points
            .iter()
            .map(|p| GeoPoint::from_vector(matrix * p.to_vector()))
            .collect()
    }
}

/// Stage rotations applied left to right
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RotationChain {
    stages: Vec<FiniteRotation>,
}

impl RotationChain {
    pub fn new(stages: Vec<FiniteRotation>) -> Self {
        Self { stages }
    }

    /// The empty chain, which leaves every point where it is
    pub fn identity() -> Self {
        Self::default()
    }

    /// Append a stage that runs after the existing ones.
    pub fn then(mut self, rotation: FiniteRotation) -> Self {
        self.stages.push(rotation);
        self
    }

    pub fn stages(&self) -> &[FiniteRotation] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Chain that undoes this one: stages reversed, each inverted
    pub fn inverse(&self) -> Self {
        self.stages.iter().rev().map(FiniteRotation::inverse).collect()
    }

    pub fn apply(&self, point: GeoPoint) -> GeoPoint {
        self.stages
            .iter()
            .fold(point, |point, stage| stage.rotate(point))
    }

    /// Rotate a batch through every stage, one matrix per stage.
    pub fn apply_all(&self, points: &[GeoPoint]) -> Vec<GeoPoint> {
        self.stages
            .iter()
            .fold(points.to_vec(), |points, stage| stage.rotate_all(&points))
    }
}

impl FromIterator<FiniteRotation> for RotationChain {
    fn from_iter<I: IntoIterator<Item = FiniteRotation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<FiniteRotation> for RotationChain {
    fn from(rotation: FiniteRotation) -> Self {
        Self::new(vec![rotation])
    }
}

/// Rotate the point (`lat`, `lon`) by a single finite rotation.
pub fn rotate_point(lat: f64, lon: f64, rotation: &FiniteRotation) -> Result<GeoPoint> {
    Ok(rotation.rotate(GeoPoint::new(lat, lon)?))
}

/// Rotate the point (`lat`, `lon`) through every stage of `chain` in order.
///
/// An empty chain returns the input point unchanged.
pub fn rotate_point_chain(lat: f64, lon: f64, chain: &RotationChain) -> Result<GeoPoint> {
    Ok(chain.apply(GeoPoint::new(lat, lon)?))
}

/// Batch form of [`rotate_point_chain`] over parallel latitude/longitude arrays.
pub fn rotate_coords(
    lats: &[f64],
    lons: &[f64],
    chain: &RotationChain,
) -> Result<(Vec<f64>, Vec<f64>)> {
    if lats.len() != lons.len() {
        return Err(GpmlError::LengthMismatch {
            lats: lats.len(),
            lons: lons.len(),
        });
    }

    let points = lats
        .iter()
        .zip(lons)
        .map(|(&lat, &lon)| GeoPoint::new(lat, lon))
        .collect::<Result<Vec<_>>>()?;

    Ok(chain
        .apply_all(&points)
        .into_iter()
        .map(|p| (p.lat(), p.lon()))
        .unzip())
}
