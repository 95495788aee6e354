//! Return commit: recycle projectiles back into the pool.
//!
//! This system owns the *Inactive invariants*. An inactive projectile has:
//! - velocity = 0
//! - no owner, age reset
//! - its pool slot released
//!
//! Keeping these writes in one place prevents half-recycled projectiles.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::components::{PooledProjectile, Projectile, ProjectileSlot, ProjectileState, Velocity};
use super::messages::ProjectileReturned;
use super::pool::ProjectilePool;

pub fn return_to_pool_commit(
    mut pool: ResMut<ProjectilePool>,
    mut returned: MessageWriter<ProjectileReturned>,
    mut q: Query<(
        Entity,
        &mut ProjectileState,
        &mut Projectile,
        &mut Velocity,
        &ProjectileSlot,
    ), With<PooledProjectile>>,
) {
    for (e, mut state, mut projectile, mut vel, slot) in &mut q {
        if *state != ProjectileState::PendingReturn {
            continue;
        }

        *state = ProjectileState::Inactive;
        vel.0 = Vec3::ZERO;
        projectile.clear();

        if pool.release(slot.kind, slot.handle) {
            returned.write(ProjectileReturned { entity: e, kind: slot.kind });
        }
    }
}
