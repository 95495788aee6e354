//! Host-reported hits: turn `ReleaseProjectileRequest` into `PendingReturn`.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::components::{PooledProjectile, ProjectileState};
use super::messages::ReleaseProjectileRequest;

/// Tolerant by contract: unknown entities and projectiles that are not active are ignored.
pub fn mark_released_projectiles(
    mut reader: MessageReader<ReleaseProjectileRequest>,
    mut q: Query<&mut ProjectileState, With<PooledProjectile>>,
) {
    for req in reader.read() {
        let Ok(mut state) = q.get_mut(req.entity) else {
            debug!("Release request for non-projectile {}", req.entity);
            continue;
        };

        if *state == ProjectileState::Active {
            *state = ProjectileState::PendingReturn;
        }
    }
}
