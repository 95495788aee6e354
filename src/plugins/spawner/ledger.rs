use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use super::components::SpawnerRole;

/// Live actor → spawner index.
///
/// Kills can arrive twice for the same actor (explicit `SpawnedActorKilled`, then the
/// despawn). `take` hands out the owner only once, so each actor is counted once.
#[derive(Resource, Debug, Default)]
pub struct SpawnLedger {
    owners: HashMap<Entity, (Entity, SpawnerRole)>,
}

impl SpawnLedger {
    pub fn record(&mut self, actor: Entity, spawner: Entity, role: SpawnerRole) {
        self.owners.insert(actor, (spawner, role));
    }

    pub fn take(&mut self, actor: Entity) -> Option<(Entity, SpawnerRole)> {
        self.owners.remove(&actor)
    }

    pub fn owner_of(&self, actor: Entity) -> Option<Entity> {
        self.owners.get(&actor).map(|(spawner, _)| *spawner)
    }

    pub fn alive_for(&self, spawner: Entity) -> usize {
        self.owners.values().filter(|(s, _)| *s == spawner).count()
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
