//! Apply rotation chains to extracted features and paleomagnetic statistics.

use crate::types::{DirectionalMean, Feature, Pole};
use crate::{GeoPoint, GpmlError, Result, Ring, RotationChain};

/// Rotate every vertex of every ring through `chain`.
///
/// With `reverse_each_ring` the vertex order of each ring is flipped before
/// rotating. Ring count and per-ring vertex count are preserved.
pub fn rotate_rings(rings: &[Ring], chain: &RotationChain, reverse_each_ring: bool) -> Vec<Ring> {
    rings
        .iter()
        .map(|ring| {
            let ring = if reverse_each_ring {
                ring.reversed()
            } else {
                ring.clone()
            };
            Ring::new(chain.apply_all(ring.points()))
        })
        .collect()
}

/// [`rotate_rings`] for each feature, keeping rings grouped by feature.
pub fn rotate_features(
    features: &[Feature],
    chain: &RotationChain,
    reverse_each_ring: bool,
) -> Vec<Feature> {
    features
        .iter()
        .map(|feature| feature.with_rings(rotate_rings(&feature.rings, chain, reverse_each_ring)))
        .collect()
}

/// Rotate a mean direction and both ellipse axis directions through `chain`.
///
/// Declinations are treated as longitudes and inclinations as latitudes.
/// Rotated declinations are wrapped into [0, 360). `zeta` and `eta` are copied.
pub fn rotate_directional_mean(
    mean: &DirectionalMean,
    chain: &RotationChain,
) -> Result<DirectionalMean> {
    let (dec, inc) = rotate_direction("mean", mean.dec, mean.inc, chain)?;
    let (z_dec, z_inc) = rotate_direction("Z axis", mean.z_dec, mean.z_inc, chain)?;
    let (e_dec, e_inc) = rotate_direction("E axis", mean.e_dec, mean.e_inc, chain)?;

    Ok(DirectionalMean {
        dec,
        inc,
        z_dec,
        z_inc,
        e_dec,
        e_inc,
        zeta: mean.zeta,
        eta: mean.eta,
    })
}

/// Rotate a paleomagnetic pole through `chain`, carrying `a95` unchanged.
pub fn rotate_pole(pole: &Pole, chain: &RotationChain) -> Result<Pole> {
    let rotated = chain.apply(GeoPoint::new(pole.lat, pole.lon)?);
    Ok(Pole {
        lon: rotated.lon(),
        lat: rotated.lat(),
        a95: pole.a95,
    })
}

fn rotate_direction(
    label: &str,
    dec: f64,
    inc: f64,
    chain: &RotationChain,
) -> Result<(f64, f64)> {
    let direction = GeoPoint::new(inc, dec).map_err(|_| {
        GpmlError::InvalidCoordinate(format!(
            "{label} direction has declination {dec}, inclination {inc}"
        ))
    })?;
    if chain.is_empty() {
        return Ok((dec, inc));
    }

    let rotated = chain.apply(direction);
    Ok((rotated.lon().rem_euclid(360.0), rotated.lat()))
}
