//! Random spawn points.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::common::rng::GameRng;

/// Uniform point in the horizontal rectangle `origin ± half_extent` (x/z), raised by
/// `height` on the up axis, facing a random yaw.
///
/// A non-finite extent collapses to zero on that axis.
pub fn random_spawn_point(rng: &mut GameRng, origin: Vec3, half_extent: Vec2, height: f32) -> Transform {
    let hx = finite_half_extent(half_extent.x);
    let hz = finite_half_extent(half_extent.y);

    let offset = Vec3::new(
        rng.range_f32(-hx, hx),
        height,
        rng.range_f32(-hz, hz),
    );
    let yaw = rng.range_f32(0.0, TAU);

    Transform::from_translation(origin + offset).with_rotation(Quat::from_rotation_y(yaw))
}

/// `|v|` clamped so that `2 * |v|` stays finite.
fn finite_half_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.abs().min(f32::MAX / 2.0)
    } else {
        0.0
    }
}
