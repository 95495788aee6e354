//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod core;
pub mod projectiles;
pub mod spawner;

/// Register gameplay plugins. Everything here runs headless.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    spawner::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}
