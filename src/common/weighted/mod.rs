//! Weighted random selection.
//!
//! A `WeightedTable` holds `(id, weight)` entries in insertion order and picks one
//! with probability proportional to its weight.
//!
//! # Invariants
//! - Every stored weight is finite and `>= 0`, and so is their sum (checked once in `push`).
//! - Zero-weight entries are kept (they still show up in `entries()`), but are never selected.
//! - Selection is stable: for a given draw, the earliest matching entry wins.
//!
//! Selection fails with `EmptyTableError` when there is nothing to pick from
//! (no entries, or every weight is zero). Callers treat that as "skip this spawn".

use rand::Rng;
use thiserror::Error;

/// Selection attempted on a table with no positive-weight entries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("weighted table has no entries with positive weight")]
pub struct EmptyTableError;

/// A weight that cannot be stored.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidWeight {
    #[error("invalid weight {weight}: weights must be finite and non-negative")]
    OutOfRange { weight: f32 },
    #[error("weight {weight} overflows the table total {total}")]
    TotalOverflow { weight: f32, total: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedEntry<T> {
    pub id: T,
    pub weight: f32,
}

#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<WeightedEntry<T>>,
    total: f32,
}

impl<T> Default for WeightedTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            total: 0.0,
        }
    }
}

impl<T> WeightedTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(id, weight)` pairs, rejecting the first invalid weight.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (T, f32)>,
    ) -> Result<Self, InvalidWeight> {
        let mut table = Self::new();
        for (id, weight) in entries {
            table.push(id, weight)?;
        }
        Ok(table)
    }

    pub fn push(&mut self, id: T, weight: f32) -> Result<(), InvalidWeight> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(InvalidWeight::OutOfRange { weight });
        }
        let total = self.total + weight;
        if !total.is_finite() {
            return Err(InvalidWeight::TotalOverflow {
                weight,
                total: self.total,
            });
        }
        self.total = total;
        self.entries.push(WeightedEntry { id, weight });
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn total_weight(&self) -> f32 {
        self.total
    }

    #[inline]
    pub fn entries(&self) -> &[WeightedEntry<T>] {
        &self.entries
    }

    /// True when `select` can succeed.
    #[inline]
    pub fn can_select(&self) -> bool {
        self.total > 0.0
    }

    /// Draw one entry with probability `weight / total_weight`.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T, EmptyTableError> {
        if !self.can_select() {
            return Err(EmptyTableError);
        }
        let draw = rng.random_range(0.0..self.total);
        self.pick(draw)
    }

    /// Deterministic half of `select`: walk the cumulative weights for a given draw.
    ///
    /// `draw` is expected in `[0, total_weight)`. Values outside that range are clamped
    /// to the first / last positive entry.
    pub(crate) fn pick(&self, draw: f32) -> Result<&T, EmptyTableError> {
        let mut cumulative = 0.0;
        let mut last_positive = None;

        for entry in &self.entries {
            if entry.weight <= 0.0 {
                continue;
            }
            cumulative += entry.weight;
            last_positive = Some(&entry.id);
            if cumulative >= draw {
                return Ok(&entry.id);
            }
        }

        // Float accumulation can land a hair below `draw` on the final entry.
        last_positive.ok_or(EmptyTableError)
    }
}

impl<T: PartialEq> WeightedTable<T> {
    /// Combined selection probability for every entry equal to `id`.
    pub fn probability_of(&self, id: &T) -> f32 {
        if !self.can_select() {
            return 0.0;
        }
        let weight: f32 = self
            .entries
            .iter()
            .filter(|e| &e.id == id)
            .map(|e| e.weight)
            .sum();
        weight / self.total
    }
}

#[cfg(test)]
mod tests;
