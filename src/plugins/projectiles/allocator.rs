//! Spawn consumer: activate projectiles from the pool.
//!
//! Three outcomes per request:
//! - reuse: an inactive entity is reset in place (no structural changes)
//! - grow: the pool was dry, so a new pooled entity is spawned already active
//! - drop: a capped pool is full; that is a capacity decision, not an error

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::components::{PooledProjectile, Projectile, ProjectileState, Velocity};
use super::messages::{ProjectileActivated, SpawnProjectileRequest};
use super::pool::{active_projectile_bundle, ProjectilePool};

pub fn allocate_projectiles_from_pool(
    mut commands: Commands,
    mut pool: ResMut<ProjectilePool>,
    mut reader: MessageReader<SpawnProjectileRequest>,
    mut activated: MessageWriter<ProjectileActivated>,
    mut q: Query<(
        &mut ProjectileState,
        &mut Projectile,
        &mut Transform,
        &mut Velocity,
    ), With<PooledProjectile>>,
) {
    for req in reader.read() {
        let acquired = match pool.acquire(req.kind, || commands.spawn(PooledProjectile).id()) {
            Ok(a) => a,
            Err(e) => {
                debug!("Dropping {:?} projectile request: {e}", req.kind);
                continue;
            }
        };

        let Some(e) = pool.entity(req.kind, acquired.handle) else {
            continue;
        };

        if !acquired.reused {
            commands.entity(e).insert(active_projectile_bundle(req, acquired.handle));
            activated.write(ProjectileActivated { entity: e, kind: req.kind, reused: false });
            continue;
        }

        match q.get_mut(e) {
            Ok((mut state, mut projectile, mut tf, mut vel)) => {
                // Pools are per kind, so a reused entity already carries the right kind.
                debug_assert_eq!(projectile.kind, req.kind);
                *state = ProjectileState::Active;
                projectile.reset_for_fire(req.damage, req.owner);
                tf.translation = req.pos;
                vel.0 = req.vel;
                activated.write(ProjectileActivated { entity: e, kind: req.kind, reused: true });
            }
            Err(err) => {
                // Something outside the pool despawned this entity or stripped its
                // components. Drop whatever is left and put a fresh one in the slot.
                warn!("Pooled projectile {e} is gone ({err}); respawning into its slot");
                commands.entity(e).try_despawn();
                let fresh = commands.spawn(active_projectile_bundle(req, acquired.handle)).id();
                pool.replace_entity(req.kind, acquired.handle, fresh);
                activated.write(ProjectileActivated { entity: fresh, kind: req.kind, reused: false });
            }
        }
    }
}
