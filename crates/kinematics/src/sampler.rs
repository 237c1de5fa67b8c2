//! Synthetic landmark coordinates for walking and dorsiflexed postures.

use std::ops::RangeInclusive;

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use shared::domain::{Landmarks, Point};

use crate::angles::round_to;

pub const LATERAL_EPICONDYLE_X: RangeInclusive<f64> = 0.1..=0.2;
pub const LATERAL_EPICONDYLE_Y: RangeInclusive<f64> = 0.43..=0.46;
pub const LATERAL_MALLEOLUS_X: RangeInclusive<f64> = 0.0..=0.1;
pub const LATERAL_MALLEOLUS_Y: RangeInclusive<f64> = 0.2..=0.3;
pub const CALCANEUS_X: RangeInclusive<f64> = -0.15..=-0.05;
pub const CALCANEUS_Y: RangeInclusive<f64> = 0.18..=0.26;
pub const FIFTH_MTP_X: RangeInclusive<f64> = 0.0..=0.05;
pub const FIFTH_MTP_Y: RangeInclusive<f64> = 0.0..=0.01;

/// Heel height below the lateral malleolus in the dorsiflexed posture.
pub const DORSIFLEXED_HEEL_DROP: f64 = 0.05;
/// Forward reach of the toes past the heel when dorsiflexed.
pub const DORSIFLEXED_TOE_REACH: RangeInclusive<f64> = 0.14..=0.17;
/// Toe lift above the heel when dorsiflexed.
pub const DORSIFLEXED_TOE_LIFT: RangeInclusive<f64> = 0.02..=0.04;

const COORDINATE_DECIMALS: u32 = 3;

/// Source of uniformly distributed reals over an inclusive range.
pub trait UniformSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// [`UniformSource`] backed by a `rand` generator.
pub struct RandomSource {
    rng: Box<dyn RngCore>,
}

impl RandomSource {
    pub fn new(rng: impl RngCore + 'static) -> Self {
        Self { rng: Box::new(rng) }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl UniformSource for RandomSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

fn draw(source: &mut dyn UniformSource, range: &RangeInclusive<f64>) -> f64 {
    round_to(source.uniform(*range.start(), *range.end()), COORDINATE_DECIMALS)
}

/// Walking posture: all eight coordinates drawn independently.
pub fn generate_generic(source: &mut dyn UniformSource) -> Landmarks {
    let le_x = draw(source, &LATERAL_EPICONDYLE_X);
    let le_y = draw(source, &LATERAL_EPICONDYLE_Y);
    let lm_x = draw(source, &LATERAL_MALLEOLUS_X);
    let lm_y = draw(source, &LATERAL_MALLEOLUS_Y);
    let c_x = draw(source, &CALCANEUS_X);
    let c_y = draw(source, &CALCANEUS_Y);
    let mt_x = draw(source, &FIFTH_MTP_X);
    let mt_y = draw(source, &FIFTH_MTP_Y);

    Landmarks {
        lateral_epicondyle: Point::new(le_x, le_y),
        lateral_malleolus: Point::new(lm_x, lm_y),
        calcaneus: Point::new(c_x, c_y),
        fifth_mtp: Point::new(mt_x, mt_y),
    }
}

/// New foot for an unchanged leg: heel dropped below the malleolus, toes
/// forward of and above the heel. Returns `(calcaneus, fifth_mtp)`.
///
/// The epicondyle is accepted to mirror the leg pair but does not affect the
/// foot placement.
pub fn generate_dorsiflexed(
    source: &mut dyn UniformSource,
    _lateral_epicondyle: Point,
    lateral_malleolus: Point,
) -> (Point, Point) {
    let c_x = draw(source, &CALCANEUS_X);
    let c_y = round_to(lateral_malleolus.y - DORSIFLEXED_HEEL_DROP, COORDINATE_DECIMALS);
    let mt_x = round_to(
        c_x + source.uniform(*DORSIFLEXED_TOE_REACH.start(), *DORSIFLEXED_TOE_REACH.end()),
        COORDINATE_DECIMALS,
    );
    let mt_y = round_to(
        c_y + source.uniform(*DORSIFLEXED_TOE_LIFT.start(), *DORSIFLEXED_TOE_LIFT.end()),
        COORDINATE_DECIMALS,
    );

    (Point::new(c_x, c_y), Point::new(mt_x, mt_y))
}

#[cfg(test)]
#[path = "tests/sampler_tests.rs"]
mod tests;
