// SPDX-License-Identifier: Apache-2.0

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Injected randomness source for simulation and demo modes.
///
/// Production scoring uses [`NoNoise`]; anything else must be seedable so
/// that a run can be reproduced.
pub trait ScoreNoise {
    /// Additive offset applied to one sub-factor before clamping.
    fn sample(&mut self) -> f64;
}

/// The production source: no noise at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNoise;

impl ScoreNoise for NoNoise {
    fn sample(&mut self) -> f64 {
        0.0
    }
}

/// Seeded, bounded jitter for demo datasets.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
    amplitude: f64,
}

impl SeededJitter {
    /// `amplitude` is the maximum absolute offset per sub-factor.
    #[must_use]
    pub fn new(seed: u64, amplitude: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            amplitude: amplitude.abs(),
        }
    }
}

impl ScoreNoise for SeededJitter {
    fn sample(&mut self) -> f64 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-self.amplitude..=self.amplitude)
    }
}
