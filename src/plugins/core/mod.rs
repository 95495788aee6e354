//! Core plugin: shared resources.
//!
//! `Tunables` may already be present (loaded from config before plugins are registered);
//! it is only defaulted when missing. The RNG is seeded from it.

use bevy::prelude::*;

use crate::common::rng::GameRng;
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();

    if !app.world().contains_resource::<GameRng>() {
        let seed = app.world().resource::<Tunables>().rng_seed;
        if let Some(seed) = seed {
            info!("Seeding GameRng with {seed}");
        }
        app.insert_resource(GameRng::from_optional_seed(seed));
    }
}

#[cfg(test)]
mod tests;
