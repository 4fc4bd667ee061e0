//! Deterministic synthetic nuclei.

use landmark_core::{ProfileKind, ProfileMap};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `count` nuclei with angle and diameter profiles of 80 to 120 points.
///
/// Angles are noisy around 170 degrees with one deep notch; diameters are
/// noisy between 10 and 20. The same seed always gives the same nuclei.
pub fn synthetic_nuclei(count: usize, seed: u64) -> Vec<ProfileMap> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| synthetic_nucleus(&mut rng)).collect()
}

fn synthetic_nucleus(rng: &mut ChaCha8Rng) -> ProfileMap {
    let len: usize = rng.random_range(80..=120);
    let notch = rng.random_range(0..len);

    let angles = (0..len)
        .map(|i| {
            if i == notch {
                30.0
            } else {
                rng.random_range(150.0..190.0)
            }
        })
        .collect();
    let diameters = (0..len).map(|_| rng.random_range(10.0..20.0)).collect();

    ProfileMap::new()
        .with(ProfileKind::Angle, angles)
        .with(ProfileKind::Diameter, diameters)
}
