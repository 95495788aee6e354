//! Library entry point.
//!
//! `common` holds the engine-independent pieces (`WeightedTable`, `ObjectPool`, config).
//! `plugins` hosts them in Bevy: projectile pools and spawners.
//! Integration tests in `tests/` import through this crate root.

pub mod common;
pub mod game;
pub mod plugins;
