//! Demo scene for the headless binary.
//!
//! One wave spawner fed by the configured table, one `SpawnAround` next to it, and a
//! target that walks into detection range. The target shoots at the spawner every few
//! frames; actors die on a timer. Pool and spawner numbers are logged once a second.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::config::SpawnKind;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::common::weighted::WeightedTable;
use crate::plugins::projectiles::messages::{ProjectileKind, SpawnProjectileRequest};
use crate::plugins::projectiles::pool::ProjectilePool;
use crate::plugins::spawner::around::SpawnAround;
use crate::plugins::spawner::components::{SpawnTarget, SpawnedActor};
use crate::plugins::spawner::messages::{SpawnedActorKilled, TriggerSpawnAround};
use crate::plugins::spawner::wave::{RespawnMethod, SpawnMethod, WaveSettings, WaveSpawner};

const RUN_FRAMES: u32 = 600;
const FIRE_EVERY: u32 = 4;
const KILL_EVERY: u32 = 45;
const REPORT_EVERY: u32 = 60;

#[derive(Component)]
struct DemoAround;

pub fn plugin(app: &mut App, table: WeightedTable<SpawnKind>) {
    let settings = WaveSettings {
        amount: 8,
        capacity: 2,
        interval: 0.25,
        method: SpawnMethod::OnRadius,
        respawn: RespawnMethod::Individual,
        delay: 1.0,
        ..default()
    };

    app.world_mut().spawn((
        Name::new("WaveSpawner"),
        WaveSpawner::new(table, settings),
        Transform::default(),
    ));
    app.world_mut().spawn((
        Name::new("SpawnAround"),
        DemoAround,
        SpawnAround::new(SpawnKind::new("minion")),
        Transform::from_xyz(400.0, 0.0, 0.0),
    ));
    app.world_mut().spawn((
        Name::new("Target"),
        SpawnTarget,
        Transform::from_xyz(1200.0, 0.0, 0.0),
    ));

    app.add_systems(
        Update,
        (walk_target, fire_at_origin, kill_some_actors, trigger_around, report_and_exit)
            .run_if(in_state(GameState::InGame)),
    );
}

fn walk_target(time: Res<Time>, mut q: Query<&mut Transform, With<SpawnTarget>>) {
    for mut tf in &mut q {
        tf.translation.x = (tf.translation.x - 150.0 * time.delta_secs()).max(0.0);
    }
}

fn fire_at_origin(
    mut frame: Local<u32>,
    tunables: Res<Tunables>,
    q: Query<&Transform, With<SpawnTarget>>,
    mut writer: MessageWriter<SpawnProjectileRequest>,
) {
    *frame += 1;
    if *frame % FIRE_EVERY != 0 {
        return;
    }
    for tf in &q {
        let dir = (-tf.translation).try_normalize().unwrap_or(Vec3::NEG_X);
        writer.write(SpawnProjectileRequest {
            kind: ProjectileKind::Player,
            pos: tf.translation,
            vel: dir * tunables.projectile_speed,
            damage: 1,
            owner: None,
        });
    }
}

fn kill_some_actors(
    mut frame: Local<u32>,
    mut commands: Commands,
    q: Query<Entity, With<SpawnedActor>>,
    mut killed: MessageWriter<SpawnedActorKilled>,
) {
    *frame += 1;
    if *frame % KILL_EVERY != 0 {
        return;
    }
    // Alternate between the explicit kill report and a plain despawn.
    if let Some(actor) = q.iter().next() {
        if (*frame / KILL_EVERY) % 2 == 0 {
            killed.write(SpawnedActorKilled { actor });
        }
        commands.entity(actor).despawn();
    }
}

fn trigger_around(
    mut frame: Local<u32>,
    q: Query<Entity, With<DemoAround>>,
    mut writer: MessageWriter<TriggerSpawnAround>,
) {
    *frame += 1;
    if *frame % 120 != 1 {
        return;
    }
    for spawner in &q {
        writer.write(TriggerSpawnAround { spawner });
    }
}

fn report_and_exit(
    mut frame: Local<u32>,
    pool: Res<ProjectilePool>,
    q_wave: Query<&WaveSpawner>,
    q_around: Query<&SpawnAround>,
    mut exit: MessageWriter<AppExit>,
) {
    *frame += 1;
    if *frame % REPORT_EVERY == 0 {
        let stats = pool.stats(ProjectileKind::Player);
        info!("frame {}: projectiles {}/{} active", *frame, stats.active, stats.total);
        for wave in &q_wave {
            info!(
                "  wave: alive {}, spawned {}, pending {}, respawns queued {}",
                wave.alive(),
                wave.total_spawned(),
                wave.pending(),
                wave.queued_respawns()
            );
        }
        for around in &q_around {
            info!("  around: alive {}", around.alive());
        }
    }
    if *frame >= RUN_FRAMES {
        exit.write(AppExit::Success);
    }
}
