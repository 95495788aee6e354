mod common;

use bevy::prelude::*;
use spawn_pool::common::rng::GameRng;
use spawn_pool::common::state::GameState;
use spawn_pool::common::tunables::Tunables;
use spawn_pool::plugins::projectiles::pool::ProjectilePool;
use spawn_pool::plugins::spawner::ledger::SpawnLedger;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn gameplay_resources_are_installed() {
    let app = common::app_headless();
    let world = app.world();

    assert!(world.get_resource::<Tunables>().is_some());
    assert!(world.get_resource::<GameRng>().is_some());
    assert!(world.get_resource::<ProjectilePool>().is_some());
    assert!(world.get_resource::<SpawnLedger>().is_some());
}

#[test]
fn pause_and_resume_keep_ticking() {
    let mut app = common::app_headless();
    app.update();

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Paused);
    app.update();
    assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::Paused);

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    for _ in 0..3 {
        app.update();
    }
    assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::InGame);
}
