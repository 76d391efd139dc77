//! Named one-shot deferred callbacks.
//!
//! A component arms `(ComponentId, TimeoutId)` with a delay; the host loop
//! drains expired keys with [`TimeoutQueue::pop_expired`] and dispatches
//! them back to the owning component. Re-arming a key that is still
//! pending replaces the earlier deadline.

use heapless::Vec;

use super::types::{ComponentId, SchedulerError, TimeoutId};

/// Deferred-callback service as seen by a component.
pub trait TimeoutScheduler {
    /// Arm `id` for `owner` to fire `delay_ms` after `now_us`.
    ///
    /// Replaces any pending timeout with the same key.
    fn set_timeout(
        &mut self,
        owner: ComponentId,
        id: TimeoutId,
        delay_ms: u32,
        now_us: u64,
    ) -> Result<(), SchedulerError>;

    /// Drop a pending timeout. Returns true if one was pending.
    fn cancel_timeout(&mut self, owner: ComponentId, id: TimeoutId) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimeoutEntry {
    owner: ComponentId,
    id: TimeoutId,
    deadline_us: u64,
}

/// Fixed-capacity timeout table
#[derive(Debug, Clone, Default)]
pub struct TimeoutQueue<const N: usize> {
    entries: Vec<TimeoutEntry, N>,
}

impl<const N: usize> TimeoutQueue<N> {
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Number of pending timeouts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `(owner, id)` is armed
    pub fn is_pending(&self, owner: ComponentId, id: TimeoutId) -> bool {
        self.position(owner, id).is_some()
    }

    /// Earliest pending deadline, if any
    pub fn next_deadline_us(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.deadline_us).min()
    }

    /// Remove and return the earliest timeout due at `now_us`.
    ///
    /// Call repeatedly until `None` to drain everything that is due. Each
    /// armed key is returned exactly once. Equal deadlines come out in
    /// [`TimeoutId`] order, so a window closing on the same instant as the
    /// next trigger is published before it restarts.
    pub fn pop_expired(&mut self, now_us: u64) -> Option<(ComponentId, TimeoutId)> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline_us <= now_us)
            .min_by_key(|(_, e)| (e.deadline_us, e.id))
            .map(|(i, _)| i)?;
        let entry = self.entries.swap_remove(index);
        Some((entry.owner, entry.id))
    }

    fn position(&self, owner: ComponentId, id: TimeoutId) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.owner == owner && e.id == id)
    }
}

impl<const N: usize> TimeoutScheduler for TimeoutQueue<N> {
    fn set_timeout(
        &mut self,
        owner: ComponentId,
        id: TimeoutId,
        delay_ms: u32,
        now_us: u64,
    ) -> Result<(), SchedulerError> {
        let deadline_us = now_us.saturating_add(u64::from(delay_ms) * 1_000);

        if let Some(index) = self.position(owner, id) {
            self.entries[index].deadline_us = deadline_us;
            return Ok(());
        }

        self.entries
            .push(TimeoutEntry {
                owner,
                id,
                deadline_us,
            })
            .map_err(|_| SchedulerError::QueueFull)
    }

    fn cancel_timeout(&mut self, owner: ComponentId, id: TimeoutId) -> bool {
        match self.position(owner, id) {
            Some(index) => {
                self.entries.swap_remove(index);
                true
            }
            None => false,
        }
    }
}
