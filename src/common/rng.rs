//! Seeded randomness shared by every system that rolls dice.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Game-wide RNG.
///
/// With a seed the whole run is reproducible (tests, headless replays).
/// Without one it draws from OS entropy.
#[derive(Resource, Debug)]
pub struct GameRng {
    rng: StdRng,
    pub seed: Option<u64>,
}

impl GameRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    /// Uniform `f32` in `[min, max)`.
    ///
    /// Returns `min` for an empty range, a NaN bound, or a span too wide to represent.
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if !(max > min) || !(max - min).is_finite() {
            return min;
        }
        self.rng.random_range(min..max)
    }

    /// Uniform integer in `[min, max]`. A reversed range yields `min`.
    pub fn range_inclusive_u32(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// Direct access for APIs that take `&mut impl Rng`.
    #[inline]
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
