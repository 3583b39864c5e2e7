use crate::{GpmlError, Result};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Reconstruction plate identifier
pub type PlateId = u32;

/// Horizontal component below which a unit vector is treated as lying on a pole
const POLE_EPSILON: f64 = 1e-12;

/// Wrap a longitude in degrees into (-180, 180].
pub fn normalize_lon(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 { wrapped + 360.0 } else { wrapped }
}

/// A point on the sphere in degrees
///
/// Latitude is always within [-90, 90]; longitude is stored as given and only
/// normalized when a rotation produces a new point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct RawPoint {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawPoint> for GeoPoint {
    type Error = GpmlError;

    fn try_from(raw: RawPoint) -> Result<Self> {
        Self::new(raw.lat, raw.lon)
    }
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GpmlError::InvalidCoordinate(format!(
                "latitude {lat} outside [-90, 90]"
            )));
        }
        if !lon.is_finite() {
            return Err(GpmlError::InvalidCoordinate(format!(
                "longitude {lon} is not finite"
            )));
        }
        Ok(Self { lat, lon })
    }

    /// For coordinates already checked by a constructor that validated them
    pub(crate) fn from_validated(lat: f64, lon: f64) -> Self {
        debug_assert!((-90.0..=90.0).contains(&lat));
        Self { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// `[lon, lat]`, the order plotting code expects
    pub fn lon_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// Unit vector with x towards (0, 0), y towards (0, 90) and z towards the north pole.
    pub(crate) fn to_vector(self) -> DVec3 {
        let (sin_lat, cos_lat) = if self.lat.abs() == 90.0 {
            (self.lat.signum(), 0.0)
        } else {
            self.lat.to_radians().sin_cos()
        };
        let (sin_lon, cos_lon) = self.lon.to_radians().sin_cos();
        DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    /// Inverse of [`GeoPoint::to_vector`]. Points on a pole get longitude 0.
    pub(crate) fn from_vector(v: DVec3) -> Self {
        let horizontal = v.x.hypot(v.y);
        if horizontal < POLE_EPSILON {
            return Self {
                lat: 90.0_f64.copysign(v.z),
                lon: 0.0,
            };
        }

        let lat = v.z.atan2(horizontal).to_degrees().clamp(-90.0, 90.0);
        let lon = normalize_lon(v.y.atan2(v.x).to_degrees());
        Self { lat, lon }
    }
}

/// One boundary of a polygon or polyline feature, in stored order.
///
/// Rings are not closed implicitly; the first and last vertex are whatever the
/// source document contained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring {
    points: Vec<GeoPoint>,
}

impl Ring {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.points.iter()
    }

    /// Same vertices in reverse order
    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
        }
    }

    pub fn lats(&self) -> Vec<f64> {
        self.points.iter().map(GeoPoint::lat).collect()
    }

    pub fn lons(&self) -> Vec<f64> {
        self.points.iter().map(GeoPoint::lon).collect()
    }

    /// Vertices as `[lon, lat]` pairs for rendering
    pub fn lon_lat(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(GeoPoint::lon_lat).collect()
    }
}

impl FromIterator<GeoPoint> for Ring {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Ring {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
