use bevy::prelude::*;

use crate::common::pool::SlotHandle;

use super::messages::ProjectileKind;

/// Marker for entities owned by `ProjectilePool`.
#[derive(Component, Debug, Clone, Copy)]
pub struct PooledProjectile;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectileState {
    #[default]
    Inactive,
    Active,
    PendingReturn,
}

#[derive(Component, Debug, Clone)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub damage: i32,
    pub owner: Option<Entity>,
    /// Seconds since activation.
    pub age: f32,
}

impl Projectile {
    pub fn fired(kind: ProjectileKind, damage: i32, owner: Option<Entity>) -> Self {
        Self {
            kind,
            damage,
            owner,
            age: 0.0,
        }
    }

    #[inline]
    pub fn reset_for_fire(&mut self, damage: i32, owner: Option<Entity>) {
        self.damage = damage;
        self.owner = owner;
        self.age = 0.0;
    }

    #[inline]
    pub fn clear(&mut self) {
        self.owner = None;
        self.age = 0.0;
    }
}

/// World-space velocity, units per second.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Deref, DerefMut)]
pub struct Velocity(pub Vec3);

/// Where this entity lives in the pool, so release is a direct index.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileSlot {
    pub kind: ProjectileKind,
    pub handle: SlotHandle,
}
