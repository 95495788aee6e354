use bevy::prelude::*;

use crate::common::config::SpawnKind;

/// Which spawner component produced an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnerRole {
    Around,
    Wave,
}

/// Attached to every actor a spawner creates.
///
/// Despawning an entity with this component counts as a kill for its spawner.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct SpawnedActor {
    pub kind: SpawnKind,
    pub spawner: Entity,
    pub role: SpawnerRole,
}

/// Something a radius-triggered `WaveSpawner` reacts to (usually the player).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SpawnTarget;
