//! Projectiles plugin: **message-based producer → consumer** spawning over reusable pools.
//!
//! # Data flow
//! ```text
//!   Update
//!┌──────────────────────────────────────────────────────────────────────────┐
//!│  (A) Host writes SpawnProjectileRequest                                  │
//!│                                                                          │
//!│  (B) Consumer: allocate_projectiles_from_pool                            │
//!│      - reuses the first inactive entity of the request's kind            │
//!│      - or spawns a new pooled entity when the kind's pool is dry         │
//!│      - writes ProjectileActivated                                        │
//!└──────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedUpdate
//!┌──────────────────────────────────────────────────────────────────────────┐
//!│  (C) advance_projectiles: move by velocity, expire -> PendingReturn      │
//!└──────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   PostUpdate
//!┌──────────────────────────────────────────────────────────────────────────┐
//!│  (D) mark_released_projectiles: ReleaseProjectileRequest -> PendingReturn│
//!│  (E) return_to_pool_commit: PendingReturn -> Inactive, slot released,    │
//!│      writes ProjectileReturned                                           │
//!└──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Producers never borrow `ResMut<ProjectilePool>`. The allocator and the commit system
//! are the only writers, which keeps slot state consistent with `ProjectileState`.
//!
//! Hits are not detected here. Whatever owns collision writes `ReleaseProjectileRequest`.

pub mod components;
pub mod messages;
pub mod pool;

pub mod allocator;
pub mod commit;
pub mod motion;
pub mod release;

use bevy::prelude::*;

use crate::common::state::GameState;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<pool::ProjectilePool>();

        app.add_message::<messages::SpawnProjectileRequest>()
            .add_message::<messages::ReleaseProjectileRequest>()
            .add_message::<messages::ProjectileActivated>()
            .add_message::<messages::ProjectileReturned>();

        app.add_systems(
            Update,
            allocator::allocate_projectiles_from_pool.run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            motion::advance_projectiles.run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            PostUpdate,
            (
                release::mark_released_projectiles,
                commit::return_to_pool_commit.after(release::mark_released_projectiles),
            )
                .run_if(in_state(GameState::InGame)),
        );
    }
}
