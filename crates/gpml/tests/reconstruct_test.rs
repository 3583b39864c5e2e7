
use gpml::{
    DirectionalMean, FiniteRotation, RotationChain, extract_polygons, rotate_directional_mean,
    rotate_features, rotate_rings,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use test_helpers::load_gpml;

fn random_chain(rng: &mut StdRng, stages: usize) -> RotationChain {
    (0..stages)
        .map(|_| {
            FiniteRotation::new(
                rng.gen_range(-90.0..=90.0),
                rng.gen_range(-180.0..180.0),
                rng.gen_range(-180.0..180.0),
            )
            .unwrap()
        })
        .collect()
}

#[test]
fn reconstruction_preserves_ring_shape() {
    let features =
        extract_polygons(&load_gpml("cratons.gpml"), &HashSet::from([101, 701, 199])).unwrap();
    let mut rng = StdRng::seed_from_u64(2024);

    for stages in 0..4 {
        let chain = random_chain(&mut rng, stages);
        for reverse in [false, true] {
            let rotated = rotate_features(&features, &chain, reverse);
            assert_eq!(rotated.len(), features.len());
            for (before, after) in features.iter().zip(&rotated) {
                assert_eq!(before.header(), after.header());
                let before_lens: Vec<_> = before.rings.iter().map(|r| r.len()).collect();
                let after_lens: Vec<_> = after.rings.iter().map(|r| r.len()).collect();
                assert_eq!(before_lens, after_lens);
            }
        }
    }
}

#[test]
fn reconstruction_is_undone_by_inverse_chain() {
    let features = extract_polygons(&load_gpml("cratons.gpml"), &HashSet::from([101])).unwrap();
    let rings: Vec<_> = features.iter().flat_map(|f| f.rings.clone()).collect();
    let mut rng = StdRng::seed_from_u64(99);
    let chain = random_chain(&mut rng, 3);

    let there = rotate_rings(&rings, &chain, false);
    let back = rotate_rings(&there, &chain.inverse(), false);

    for (original, restored) in rings.iter().zip(&back) {
        for (a, b) in original.iter().zip(restored) {
            assert!((a.lat() - b.lat()).abs() < 1e-8);
            assert!((gpml::normalize_lon(a.lon() - b.lon())).abs() < 1e-8);
        }
    }
}

#[test]
fn reversed_rotation_matches_rotated_reversal() {
    let features = extract_polygons(&load_gpml("cratons.gpml"), &HashSet::from([701])).unwrap();
    let chain = RotationChain::identity()
        .then(FiniteRotation::new(-20.0, 40.0, 33.0).unwrap())
        .then(FiniteRotation::new(60.0, -150.0, -12.0).unwrap());

    let forward = rotate_rings(&features[0].rings, &chain, false);
    let reversed = rotate_rings(&features[0].rings, &chain, true);
    assert_eq!(forward[0].reversed(), reversed[0]);
}

#[test]
fn directional_mean_record_roundtrip() {
    let mean: DirectionalMean = serde_json::from_str(
        r#"{"dec": 12.0, "inc": -35.0, "Zdec": 100.0, "Zinc": 5.0,
            "Edec": 200.0, "Einc": 54.0, "Zeta": 8.0, "Eta": 4.5}"#,
    )
    .unwrap();
    let chain = RotationChain::from(FiniteRotation::new(10.0, 250.0, 65.0).unwrap());

    let rotated = rotate_directional_mean(&mean, &chain).unwrap();
    let back = rotate_directional_mean(&rotated, &chain.inverse()).unwrap();

    assert!((back.dec - mean.dec).abs() < 1e-8);
    assert!((back.inc - mean.inc).abs() < 1e-8);
    assert!((back.z_dec - mean.z_dec).abs() < 1e-8);
    assert!((back.e_inc - mean.e_inc).abs() < 1e-8);
    assert_eq!((back.zeta, back.eta), (8.0, 4.5));

    let json = serde_json::to_value(rotated).unwrap();
    assert_eq!(json["Zeta"], 8.0);
    assert!(json.get("z_dec").is_none());
}
