//! Reuse-or-create object pool.
//!
//! Slots are never destroyed: `release` only flips a slot back to inactive so the next
//! `acquire` can hand it out again. New slots are created lazily, only when every
//! existing slot is active.
//!
//! By default the pool grows without bound. `with_max_size` installs a cap, after which
//! `acquire` reports `PoolError::Exhausted` instead of growing.

use thiserror::Error;

/// Stable index of a slot inside its pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotHandle(usize);

impl SlotHandle {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    #[error("pool exhausted: all {max_size} slots are active")]
    Exhausted { max_size: usize },
}

#[derive(Debug, Clone)]
pub struct PoolSlot<T> {
    item: T,
    active: bool,
}

impl<T> PoolSlot<T> {
    #[inline]
    pub fn item(&self) -> &T {
        &self.item
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Result of a successful `acquire`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acquired {
    pub handle: SlotHandle,
    /// False when the slot was created by this call.
    pub reused: bool,
}

#[derive(Debug, Clone)]
pub struct ObjectPool<T> {
    slots: Vec<PoolSlot<T>>,
    max_size: Option<usize>,
}

impl<T> Default for ObjectPool<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            max_size: None,
        }
    }
}

impl<T> ObjectPool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            slots: Vec::with_capacity(max_size),
            max_size: Some(max_size),
        }
    }

    #[inline]
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Hand out the first inactive slot, or create one with `create`.
    ///
    /// `create` runs only when the pool has to grow.
    pub fn acquire(&mut self, create: impl FnOnce() -> T) -> Result<Acquired, PoolError> {
        if let Some(index) = self.slots.iter().position(|s| !s.active) {
            self.slots[index].active = true;
            return Ok(Acquired {
                handle: SlotHandle(index),
                reused: true,
            });
        }

        if let Some(max_size) = self.max_size {
            if self.slots.len() >= max_size {
                return Err(PoolError::Exhausted { max_size });
            }
        }

        self.slots.push(PoolSlot {
            item: create(),
            active: true,
        });
        Ok(Acquired {
            handle: SlotHandle(self.slots.len() - 1),
            reused: false,
        })
    }

    /// Return a slot to the pool.
    ///
    /// Returns `true` only when the slot flipped from active to inactive. Releasing an
    /// inactive slot or a handle this pool never issued changes nothing.
    pub fn release(&mut self, handle: SlotHandle) -> bool {
        match self.slots.get_mut(handle.0) {
            Some(slot) if slot.active => {
                slot.active = false;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn get(&self, handle: SlotHandle) -> Option<&T> {
        self.slots.get(handle.0).map(|s| &s.item)
    }

    #[inline]
    pub fn get_mut(&mut self, handle: SlotHandle) -> Option<&mut T> {
        self.slots.get_mut(handle.0).map(|s| &mut s.item)
    }

    #[inline]
    pub fn is_active(&self, handle: SlotHandle) -> bool {
        self.slots.get(handle.0).is_some_and(|s| s.active)
    }

    /// Handle of the first slot whose item matches `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<SlotHandle> {
        self.slots
            .iter()
            .position(|s| pred(&s.item))
            .map(SlotHandle)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    pub fn inactive_count(&self) -> usize {
        self.slots.len() - self.active_count()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = (SlotHandle, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, s)| (SlotHandle(i), &s.item))
    }

    pub fn slots(&self) -> &[PoolSlot<T>] {
        &self.slots
    }
}
