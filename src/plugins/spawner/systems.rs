//! Spawner systems.
//!
//! All spawning funnels through `spawn_actor`, which is the only place that creates
//! `SpawnedActor` entities and the only writer of `SpawnLedger` entries.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::common::config::SpawnKind;
use crate::common::rng::GameRng;

use super::around::SpawnAround;
use super::components::{SpawnTarget, SpawnedActor, SpawnerRole};
use super::ledger::SpawnLedger;
use super::messages::{ActorSpawned, SpawnedActorKilled, TriggerSpawnAround};
use super::placement::random_spawn_point;
use super::wave::WaveSpawner;

fn spawn_actor(
    commands: &mut Commands,
    ledger: &mut SpawnLedger,
    spawned: &mut MessageWriter<ActorSpawned>,
    kind: SpawnKind,
    spawner: Entity,
    role: SpawnerRole,
    at: Transform,
) -> Entity {
    let actor = commands
        .spawn((
            Name::new(format!("Spawned({kind})")),
            SpawnedActor {
                kind: kind.clone(),
                spawner,
                role,
            },
            at,
        ))
        .id();

    ledger.record(actor, spawner, role);
    spawned.write(ActorSpawned { actor, spawner, kind });
    actor
}

/// Run one spawn loop for every triggered `SpawnAround`.
pub fn trigger_spawn_around(
    mut commands: Commands,
    mut reader: MessageReader<TriggerSpawnAround>,
    mut rng: ResMut<GameRng>,
    mut ledger: ResMut<SpawnLedger>,
    mut spawned: MessageWriter<ActorSpawned>,
    mut q: Query<(&mut SpawnAround, &Transform)>,
) {
    for trigger in reader.read() {
        let Ok((mut around, tf)) = q.get_mut(trigger.spawner) else {
            debug!("TriggerSpawnAround for {} which has no SpawnAround", trigger.spawner);
            continue;
        };

        let rolled = around.roll_amount(&mut rng);
        let count = around.plan(rolled);
        let extent = Vec2::splat(around.settings.extent);

        for _ in 0..count {
            let at = random_spawn_point(&mut rng, tf.translation, extent, around.settings.height);
            spawn_actor(
                &mut commands,
                &mut ledger,
                &mut spawned,
                around.kind.clone(),
                trigger.spawner,
                SpawnerRole::Around,
                at,
            );
        }

        around.record_spawned(count);
        debug!(
            "SpawnAround {} rolled {rolled}, spawned {count}, alive {}",
            trigger.spawner,
            around.alive()
        );
    }
}

/// Advance every `WaveSpawner` and spawn whatever is due.
pub fn tick_wave_spawners(
    mut commands: Commands,
    time: Res<Time>,
    mut rng: ResMut<GameRng>,
    mut ledger: ResMut<SpawnLedger>,
    mut spawned: MessageWriter<ActorSpawned>,
    q_targets: Query<&Transform, (With<SpawnTarget>, Without<WaveSpawner>)>,
    mut q_spawners: Query<(Entity, &mut WaveSpawner, &Transform)>,
) {
    let dt = time.delta_secs();

    for (spawner_e, mut spawner, tf) in &mut q_spawners {
        let origin = tf.translation;

        let in_range = spawner.is_awaiting_target() && {
            let r2 = spawner.settings.detect_radius * spawner.settings.detect_radius;
            q_targets
                .iter()
                .any(|t| t.translation.distance_squared(origin) <= r2)
        };

        let due = spawner.tick(dt, in_range);
        if due == 0 {
            continue;
        }

        let extent = Vec2::splat(spawner.settings.spawn_radius);
        let height = spawner.settings.height;

        for i in 0..due {
            let kind = match spawner.table.select(rng.rng_mut()) {
                Ok(kind) => kind.clone(),
                Err(e) => {
                    warn!("Wave spawner {spawner_e}: {e}; dropping pending spawns");
                    spawner.abandon(due - i);
                    break;
                }
            };

            let at = random_spawn_point(&mut rng, origin, extent, height);
            spawn_actor(
                &mut commands,
                &mut ledger,
                &mut spawned,
                kind,
                spawner_e,
                SpawnerRole::Wave,
                at,
            );
        }
    }
}

/// Count kills for their spawners.
///
/// Two sources, merged through the ledger so each actor is counted once:
/// - explicit `SpawnedActorKilled` messages from the host
/// - despawned `SpawnedActor` entities
pub fn track_killed_actors(
    mut killed: MessageReader<SpawnedActorKilled>,
    mut removed: RemovedComponents<SpawnedActor>,
    mut ledger: ResMut<SpawnLedger>,
    mut q_waves: Query<&mut WaveSpawner>,
    mut q_around: Query<&mut SpawnAround>,
) {
    let actors = killed.read().map(|m| m.actor).chain(removed.read());

    for actor in actors {
        let Some((spawner, role)) = ledger.take(actor) else {
            continue;
        };

        match role {
            SpawnerRole::Wave => {
                if let Ok(mut wave) = q_waves.get_mut(spawner) {
                    wave.on_actor_killed();
                }
            }
            SpawnerRole::Around => {
                if let Ok(mut around) = q_around.get_mut(spawner) {
                    around.record_killed();
                }
            }
        }
    }
}
