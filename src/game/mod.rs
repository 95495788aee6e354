//! Game composition root.
//!
//! - `configure_headless`: gameplay plugins only, for tests and embedding.
//! - `configure_with_config`: same, with tunables taken from a loaded `GameConfig`.
//! - `run`: headless demo driven by a config file.

mod demo;

use std::path::Path;
use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::common::config::{ConfigError, GameConfig};
use crate::common::state::GameState;
use crate::plugins;

/// Load `config_path`, run the demo scene for a fixed number of frames, then exit.
pub fn run(config_path: impl AsRef<Path>) -> Result<AppExit, ConfigError> {
    let config = GameConfig::load(config_path)?;
    let table = config.spawn_table()?;

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(1.0 / 60.0))),
        StatesPlugin,
        LogPlugin::default(),
    ));
    configure_with_config(&mut app, &config);
    demo::plugin(&mut app, table);

    Ok(app.run())
}

/// Headless configuration with default tunables.
///
/// The caller provides the runtime plugins (`MinimalPlugins` + `StatesPlugin` at least).
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Headless configuration with tunables from `config`.
pub fn configure_with_config(app: &mut App, config: &GameConfig) {
    app.insert_resource(config.tunables.clone());
    configure_game(app);
}

/// Configuration shared by every entry point.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
