//! Fixed-step motion and lifetime for active projectiles.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::{PooledProjectile, Projectile, ProjectileState, Velocity};

/// Move active projectiles and flag the expired ones for return.
///
/// Expiry only marks `PendingReturn`; the commit system does the actual recycling.
pub fn advance_projectiles(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut q: Query<(
        &mut ProjectileState,
        &mut Projectile,
        &mut Transform,
        &Velocity,
    ), With<PooledProjectile>>,
) {
    let dt = time.delta_secs();
    let lifetime = tunables.projectile_lifetime;

    for (mut state, mut projectile, mut tf, vel) in &mut q {
        if *state != ProjectileState::Active {
            continue;
        }

        tf.translation += vel.0 * dt;
        projectile.age += dt;

        if lifetime > 0.0 && projectile.age >= lifetime {
            *state = ProjectileState::PendingReturn;
        }
    }
}
