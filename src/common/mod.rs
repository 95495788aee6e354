//! Common, shared types.

pub mod config;
pub mod pool;
pub mod rng;
pub mod state;
pub mod tunables;
pub mod weighted;

#[cfg(test)]
pub mod test_utils;
