//! Test helpers.
//!
//! `World::run_system_once` runs a single system without building a schedule. Systems that
//! use `Commands` only enqueue work, so we `flush()` afterwards before asserting.

use std::time::Duration;

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::common::rng::GameRng;
use crate::common::tunables::Tunables;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// World with the shared resources most gameplay systems read: tunables, a seeded RNG
/// and a `Time` clock that has not advanced yet.
pub fn gameplay_world(seed: u64) -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(GameRng::from_seed(seed));
    world.insert_resource(Time::<()>::default());
    world
}

/// Advance the generic `Time` clock so the next system run sees `dt` as its delta.
pub fn advance_time(world: &mut World, dt: f32) {
    world
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(dt));
}
