//! Global state machine.

use bevy::prelude::*;

/// Spawning and projectile systems only run `InGame`. `Paused` freezes them in place
/// (pools and spawner counters keep their values).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
    Paused,
}
