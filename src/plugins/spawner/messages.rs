//! Spawner messages.
//!
//! These replace engine-side delegate bindings with explicit, owner-driven calls:
//! - `TriggerSpawnAround`: run one spawn loop on a `SpawnAround` spawner
//! - `SpawnedActorKilled`: an actor died but the host keeps the entity around
//!   (despawning a `SpawnedActor` is reported automatically)
//! - `ActorSpawned`: outcome, so the host can attach visuals/AI to the new entity

use bevy::prelude::*;

use crate::common::config::SpawnKind;

#[derive(Message, Clone, Copy, Debug)]
pub struct TriggerSpawnAround {
    pub spawner: Entity,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnedActorKilled {
    pub actor: Entity,
}

#[derive(Message, Clone, Debug, PartialEq, Eq)]
pub struct ActorSpawned {
    pub actor: Entity,
    pub spawner: Entity,
    pub kind: SpawnKind,
}
