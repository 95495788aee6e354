//! Buffered projectile messages.
//!
//! Hosts never touch `ProjectilePool` directly. They write *intent*:
//! - `SpawnProjectileRequest`: fire something
//! - `ReleaseProjectileRequest`: it hit something, take it back
//!
//! and read *outcomes*:
//! - `ProjectileActivated`: a pooled entity went live (attach visuals here)
//! - `ProjectileReturned`: a projectile went back to the pool (hide visuals here)
//!
//! The allocator and commit systems are the only writers to the pool.

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectileKind {
    Player,
    Enemy,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnProjectileRequest {
    pub kind: ProjectileKind,
    pub pos: Vec3,
    pub vel: Vec3,
    pub damage: i32,
    pub owner: Option<Entity>,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct ReleaseProjectileRequest {
    pub entity: Entity,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectileActivated {
    pub entity: Entity,
    pub kind: ProjectileKind,
    /// False when the pool had to grow for this shot.
    pub reused: bool,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectileReturned {
    pub entity: Entity,
    pub kind: ProjectileKind,
}
