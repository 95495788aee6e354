use bevy::prelude::*;

use crate::common::rng::GameRng;
use crate::common::tunables::Tunables;
use crate::plugins::core;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<GameRng>().is_some());
}

#[test]
fn keeps_preloaded_tunables_and_seeds_rng_from_them() {
    let mut app = App::new();
    app.insert_resource(Tunables {
        rng_seed: Some(99),
        projectile_speed: 1.0,
        ..default()
    });
    core::plugin(&mut app);

    assert_eq!(app.world().resource::<Tunables>().projectile_speed, 1.0);
    assert_eq!(app.world().resource::<GameRng>().seed, Some(99));
}
