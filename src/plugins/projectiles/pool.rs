//! Projectile pools, one per `ProjectileKind`.
//!
//! Each kind gets its own `ObjectPool<Entity>`, created on first use. Entities are spawned
//! the first time a pool runs dry and then recycled for the rest of the session; nothing
//! here ever despawns them.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use crate::common::pool::{Acquired, ObjectPool, PoolError, SlotHandle};
use crate::common::tunables::Tunables;

use super::components::{PooledProjectile, Projectile, ProjectileSlot, ProjectileState, Velocity};
use super::messages::{ProjectileKind, SpawnProjectileRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolStats {
    pub total: usize,
    pub active: usize,
}

/// Built through `FromWorld` so the per-kind cap follows `Tunables::projectile_pool_max`.
#[derive(Resource, Debug)]
pub struct ProjectilePool {
    pools: HashMap<ProjectileKind, ObjectPool<Entity>>,
    max_per_kind: Option<usize>,
}

impl FromWorld for ProjectilePool {
    fn from_world(world: &mut World) -> Self {
        let max = world
            .get_resource::<Tunables>()
            .and_then(|t| t.projectile_pool_max);
        Self::new(max)
    }
}

impl ProjectilePool {
    pub fn new(max_per_kind: Option<usize>) -> Self {
        Self {
            pools: HashMap::default(),
            max_per_kind,
        }
    }

    fn pool_mut(&mut self, kind: ProjectileKind) -> &mut ObjectPool<Entity> {
        let max = self.max_per_kind;
        self.pools.entry(kind).or_insert_with(|| match max {
            Some(n) => ObjectPool::with_max_size(n),
            None => ObjectPool::new(),
        })
    }

    /// Reuse an inactive entity of this kind, or call `spawn` to grow the pool.
    pub fn acquire(
        &mut self,
        kind: ProjectileKind,
        spawn: impl FnOnce() -> Entity,
    ) -> Result<Acquired, PoolError> {
        self.pool_mut(kind).acquire(spawn)
    }

    /// Idempotent; see `ObjectPool::release`.
    pub fn release(&mut self, kind: ProjectileKind, handle: SlotHandle) -> bool {
        self.pools
            .get_mut(&kind)
            .is_some_and(|pool| pool.release(handle))
    }

    pub fn entity(&self, kind: ProjectileKind, handle: SlotHandle) -> Option<Entity> {
        self.pools.get(&kind)?.get(handle).copied()
    }

    /// Point a slot at a different entity (used when a pooled entity vanished).
    pub fn replace_entity(&mut self, kind: ProjectileKind, handle: SlotHandle, entity: Entity) {
        if let Some(slot) = self.pools.get_mut(&kind).and_then(|p| p.get_mut(handle)) {
            *slot = entity;
        }
    }

    pub fn stats(&self, kind: ProjectileKind) -> PoolStats {
        self.pools
            .get(&kind)
            .map(|p| PoolStats {
                total: p.len(),
                active: p.active_count(),
            })
            .unwrap_or_default()
    }
}

/// Components for a freshly activated projectile.
pub fn active_projectile_bundle(req: &SpawnProjectileRequest, handle: SlotHandle) -> impl Bundle {
    (
        Name::new("Projectile(Pooled)"),
        PooledProjectile,
        ProjectileState::Active,
        Projectile::fired(req.kind, req.damage, req.owner),
        ProjectileSlot {
            kind: req.kind,
            handle,
        },
        Transform::from_translation(req.pos),
        Velocity(req.vel),
    )
}
