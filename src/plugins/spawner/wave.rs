//! Wave spawner: weighted-table groups released in capacity-limited batches.
//!
//! ---------------------------
//! LIFECYCLE
//! ---------------------------
//! ```text
//!   Delayed(delay) ──► start
//!                        ├─ OnStart  : queue group(amount) ──► Running
//!                        ├─ OnRadius : AwaitingTarget (poll every 0.25s)
//!                        │               └─ target in range: queue group(amount) ──► Running
//!                        └─ None     : Idle
//! ```
//!
//! Groups drain in FIFO order. With `interval == 0` a whole group comes out in one tick.
//! Otherwise at most `capacity` actors come out, then the spawner waits `interval` seconds.
//!
//! Kills feed respawns:
//! - Individual: every kill queues one respawn and (re)starts the `delay` countdown.
//! - All: kills queue respawns, the countdown only starts once nothing is alive.
//!
//! When the countdown ends, queued respawns are released as groups of one, one per
//! `interval` (all at once when `interval == 0`).
//!
//! The schedule only counts. `tick` says how many actors are due; the caller picks kinds
//! and positions, and calls `abandon` for anything it could not spawn.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::common::config::SpawnKind;
use crate::common::weighted::WeightedTable;

/// How often a radius-triggered spawner looks for targets.
pub const RADIUS_POLL_SECS: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnMethod {
    None,
    #[default]
    OnStart,
    OnRadius,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RespawnMethod {
    #[default]
    None,
    Individual,
    All,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaveSettings {
    pub amount: u32,
    pub height: f32,
    /// Seconds before the first group, and before respawns start.
    pub delay: f32,
    /// Seconds between batches. `0` releases whole groups at once.
    pub interval: f32,
    /// Actors per batch.
    pub capacity: u32,
    pub method: SpawnMethod,
    pub respawn: RespawnMethod,
    pub detect_radius: f32,
    /// Half-size of the square spawn area.
    pub spawn_radius: f32,
}

impl Default for WaveSettings {
    fn default() -> Self {
        Self {
            amount: 10,
            height: 100.0,
            delay: 0.0,
            interval: 0.1,
            capacity: 1,
            method: SpawnMethod::OnStart,
            respawn: RespawnMethod::None,
            detect_radius: 500.0,
            spawn_radius: 200.0,
        }
    }
}

/// Seconds left on a countdown; never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Countdown(f32);

impl Countdown {
    #[inline]
    fn new(secs: f32) -> Self {
        Self(secs.max(0.0))
    }
    #[inline]
    fn tick_down(&mut self, dt: f32) {
        self.0 = (self.0 - dt).max(0.0);
    }
    #[inline]
    fn is_done(self) -> bool {
        self.0 <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WavePhase {
    Delayed { remaining: f32 },
    AwaitingTarget,
    Running,
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SpawnGroup {
    total: u32,
    spawned: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum RespawnStage {
    #[default]
    Waiting,
    Releasing,
}

#[derive(Component, Debug, Clone)]
pub struct WaveSpawner {
    pub table: WeightedTable<SpawnKind>,
    pub settings: WaveSettings,

    delay: Countdown,
    started: bool,
    awaiting_target: bool,
    poll: Countdown,

    groups: VecDeque<SpawnGroup>,
    batch_spawned: u32,
    cooldown: Countdown,

    respawn_queue: u32,
    respawn_delay: Option<Countdown>,
    respawn_stage: RespawnStage,
    respawn_cadence: Countdown,

    total_spawned: u32,
    alive: u32,
}

impl WaveSpawner {
    pub fn new(table: WeightedTable<SpawnKind>, settings: WaveSettings) -> Self {
        Self {
            table,
            delay: Countdown::new(settings.delay),
            settings,
            started: false,
            awaiting_target: false,
            poll: Countdown::new(RADIUS_POLL_SECS),
            groups: VecDeque::new(),
            batch_spawned: 0,
            cooldown: Countdown::default(),
            respawn_queue: 0,
            respawn_delay: None,
            respawn_stage: RespawnStage::default(),
            respawn_cadence: Countdown::default(),
            total_spawned: 0,
            alive: 0,
        }
    }

    pub fn phase(&self) -> WavePhase {
        if !self.started {
            WavePhase::Delayed { remaining: self.delay.0 }
        } else if self.awaiting_target {
            WavePhase::AwaitingTarget
        } else if self.groups.is_empty() && self.respawn_queue == 0 {
            WavePhase::Idle
        } else {
            WavePhase::Running
        }
    }

    #[inline]
    pub fn is_awaiting_target(&self) -> bool {
        self.awaiting_target
    }

    #[inline]
    pub fn alive(&self) -> u32 {
        self.alive
    }

    #[inline]
    pub fn total_spawned(&self) -> u32 {
        self.total_spawned
    }

    /// Actors still owed by queued groups.
    pub fn pending(&self) -> u32 {
        self.groups.iter().map(|g| g.total - g.spawned).sum()
    }

    #[inline]
    pub fn queued_respawns(&self) -> u32 {
        self.respawn_queue
    }

    /// Queue an extra group (scripted waves, debug tools).
    pub fn queue_group(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }
        self.groups.push_back(SpawnGroup {
            total: amount,
            spawned: 0,
        });
    }

    /// Advance by `dt` seconds and return how many actors are due this tick.
    ///
    /// `target_in_range` is only consulted while awaiting a target.
    pub fn tick(&mut self, dt: f32, target_in_range: bool) -> u32 {
        self.advance_start(dt, target_in_range);
        self.advance_respawns(dt);
        self.drain_groups(dt)
    }

    fn advance_start(&mut self, dt: f32, target_in_range: bool) {
        if !self.started {
            self.delay.tick_down(dt);
            if !self.delay.is_done() {
                return;
            }
            self.started = true;
            match self.settings.method {
                SpawnMethod::None => {
                    warn!("Wave spawner has spawn method None; it will not spawn");
                }
                SpawnMethod::OnStart => self.queue_group(self.settings.amount),
                SpawnMethod::OnRadius => {
                    self.awaiting_target = true;
                    self.poll = Countdown::new(RADIUS_POLL_SECS);
                }
            }
            return;
        }

        if self.awaiting_target {
            self.poll.tick_down(dt);
            if !self.poll.is_done() {
                return;
            }
            self.poll = Countdown::new(RADIUS_POLL_SECS);
            if target_in_range {
                self.awaiting_target = false;
                self.queue_group(self.settings.amount);
            }
        }
    }

    fn advance_respawns(&mut self, dt: f32) {
        if let Some(delay) = &mut self.respawn_delay {
            delay.tick_down(dt);
            if delay.is_done() {
                self.respawn_delay = None;
                self.respawn_stage = RespawnStage::Releasing;
                self.respawn_cadence = Countdown::new(self.settings.interval);
            }
        }

        if self.respawn_stage != RespawnStage::Releasing {
            return;
        }

        if self.settings.interval <= 0.0 {
            for _ in 0..self.respawn_queue {
                self.queue_group(1);
            }
            self.respawn_queue = 0;
        } else {
            self.respawn_cadence.tick_down(dt);
            if self.respawn_cadence.is_done() && self.respawn_queue > 0 {
                self.queue_group(1);
                self.respawn_queue -= 1;
                self.respawn_cadence = Countdown::new(self.settings.interval);
            }
        }

        if self.respawn_queue == 0 {
            self.respawn_stage = RespawnStage::Waiting;
        }
    }

    fn drain_groups(&mut self, dt: f32) -> u32 {
        if !self.cooldown.is_done() {
            self.cooldown.tick_down(dt);
            if !self.cooldown.is_done() {
                return 0;
            }
        }

        let batched = self.settings.interval > 0.0;
        let capacity = self.settings.capacity.max(1);
        let mut due = 0;

        while let Some(group) = self.groups.front_mut() {
            group.spawned += 1;
            due += 1;
            if group.spawned >= group.total {
                self.groups.pop_front();
            }

            if batched {
                self.batch_spawned += 1;
                if self.batch_spawned >= capacity {
                    self.batch_spawned = 0;
                    self.cooldown = Countdown::new(self.settings.interval);
                    break;
                }
            }
        }

        self.total_spawned += due;
        self.alive += due;
        due
    }

    /// Give back `count` due spawns the caller could not perform, and drop pending groups.
    pub fn abandon(&mut self, count: u32) {
        self.total_spawned = self.total_spawned.saturating_sub(count);
        self.alive = self.alive.saturating_sub(count);
        self.groups.clear();
        self.respawn_queue = 0;
        self.respawn_delay = None;
        self.respawn_stage = RespawnStage::Waiting;
    }

    pub fn on_actor_killed(&mut self) {
        self.alive = self.alive.saturating_sub(1);

        match self.settings.respawn {
            RespawnMethod::None => {}
            RespawnMethod::Individual => {
                self.respawn_queue += 1;
                self.respawn_delay = Some(Countdown::new(self.settings.delay));
            }
            RespawnMethod::All => {
                self.respawn_queue += 1;
                if self.alive == 0 {
                    self.respawn_delay = Some(Countdown::new(self.settings.delay));
                }
            }
        }
    }
}
