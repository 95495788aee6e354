//! Tunable gameplay constants.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub projectile_speed: f32,
    /// Seconds an active projectile lives before it returns to the pool. `0` disables expiry.
    pub projectile_lifetime: f32,
    /// Optional cap per projectile pool. `None` keeps the pools unbounded.
    pub projectile_pool_max: Option<usize>,
    pub rng_seed: Option<u64>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            projectile_speed: 2000.0,
            projectile_lifetime: 3.0,
            projectile_pool_max: None,
            rng_seed: None,
        }
    }
}
