//! Fill-to-amount spawner around its owner.
//!
//! Each trigger rolls a target amount in `[amount_min, amount_max]`:
//! - normal mode tops the population up to that amount (`amount - alive`)
//! - infinite mode spawns the full amount every time, regardless of who is still alive

use bevy::prelude::*;

use crate::common::config::SpawnKind;
use crate::common::rng::GameRng;

#[derive(Debug, Clone, PartialEq)]
pub struct AroundSettings {
    /// Half-size of the square spawn area around the owner.
    pub extent: f32,
    pub amount_min: u32,
    pub amount_max: u32,
    /// Offset on the up axis.
    pub height: f32,
    pub infinite: bool,
}

impl Default for AroundSettings {
    fn default() -> Self {
        Self {
            extent: 100.0,
            amount_min: 3,
            amount_max: 5,
            height: 100.0,
            infinite: false,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct SpawnAround {
    pub kind: SpawnKind,
    pub settings: AroundSettings,
    alive: u32,
}

impl SpawnAround {
    pub fn new(kind: SpawnKind) -> Self {
        Self::with_settings(kind, AroundSettings::default())
    }

    pub fn with_settings(kind: SpawnKind, settings: AroundSettings) -> Self {
        Self {
            kind,
            settings,
            alive: 0,
        }
    }

    #[inline]
    pub fn alive(&self) -> u32 {
        self.alive
    }

    pub fn roll_amount(&self, rng: &mut GameRng) -> u32 {
        rng.range_inclusive_u32(self.settings.amount_min, self.settings.amount_max)
    }

    /// How many to spawn for a rolled amount.
    pub fn plan(&self, rolled: u32) -> u32 {
        if self.settings.infinite {
            rolled
        } else {
            rolled.saturating_sub(self.alive)
        }
    }

    pub fn record_spawned(&mut self, count: u32) {
        self.alive = self.alive.saturating_add(count);
    }

    pub fn record_killed(&mut self) {
        self.alive = self.alive.saturating_sub(1);
    }
}
