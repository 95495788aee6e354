//! Spawner plugin: `SpawnAround` and `WaveSpawner`.
//!
//! Both spawners share one pipeline:
//! ```text
//!   Update
//!     track_killed_actors   (kills -> spawner counters, respawn queues)
//!        │
//!        ├─► trigger_spawn_around  (TriggerSpawnAround -> fill-up spawn loop)
//!        └─► tick_wave_spawners    (countdowns, batches, weighted kind selection)
//!                 │
//!                 v
//!           SpawnedActor entities + ActorSpawned messages
//! ```
//!
//! Spawned actors are bare entities (`Name`, `SpawnedActor`, `Transform`). The host reads
//! `ActorSpawned` and attaches whatever the kind needs.

pub mod around;
pub mod components;
pub mod ledger;
pub mod messages;
pub mod placement;
pub mod systems;
pub mod wave;

use bevy::prelude::*;

use crate::common::state::GameState;

pub fn plugin(app: &mut App) {
    app.init_resource::<ledger::SpawnLedger>();

    app.add_message::<messages::TriggerSpawnAround>()
        .add_message::<messages::SpawnedActorKilled>()
        .add_message::<messages::ActorSpawned>();

    app.add_systems(
        Update,
        (
            systems::track_killed_actors,
            systems::trigger_spawn_around.after(systems::track_killed_actors),
            systems::tick_wave_spawners.after(systems::track_killed_actors),
        )
            .run_if(in_state(GameState::InGame)),
    );
}
