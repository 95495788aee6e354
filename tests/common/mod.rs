//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime and time.
//! - `StatesPlugin` drives `GameState`.
//! - `spawn_pool::game::configure_headless` installs the gameplay plugins.

#![allow(dead_code)]

use bevy::ecs::message::{Message, Messages};
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

pub fn app_headless() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    spawn_pool::game::configure_headless(&mut app);
    app
}

/// Run one `app.update()` and return the `M` messages written during it.
///
/// Buffer swaps are tied to fixed-timestep runs under `MinimalPlugins`, so a fast test
/// loop can still see older messages in the "current" buffer. A cursor taken before the
/// update only yields what this update wrote.
pub fn update_collecting<M: Message + Clone>(app: &mut App) -> Vec<M> {
    let mut cursor = app.world().resource::<Messages<M>>().get_cursor_current();
    app.update();
    let messages = app.world().resource::<Messages<M>>();
    cursor.read(messages).cloned().collect()
}
