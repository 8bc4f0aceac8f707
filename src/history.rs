//! Linear undo/redo history.
//!
//! Stores a full, independent copy of the state at each history point. Moving through the
//! history only moves the step index; recording a new state discards every state ahead of it.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// The bounds of a [`History`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// The maximum amount of snapshots to keep, or zero for no limit.
    pub max_snapshots: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_snapshots: 100 }
    }
}

impl HistoryConfig {
    /// Returns a config that never drops snapshots.
    pub fn unlimited() -> Self {
        Self { max_snapshots: 0 }
    }

    /// Returns a config keeping, at most, the given amount of snapshots.
    pub fn with_limit(max: usize) -> Self {
        Self { max_snapshots: max }
    }
}

/// A linear sequence of snapshots and the position of the current one.
///
/// Always holds at least one snapshot, and `step` always points at the snapshot matching the
/// live state.
#[derive(Debug, Clone)]
pub struct History<S> {
    /// The snapshots, from the oldest to the newest.
    snapshots: Vec<S>,
    /// The position of the snapshot matching the live state.
    step: usize,
    config: HistoryConfig,
}

impl<S> History<S>
where
    S: Clone,
{
    /// Creates a history holding the given initial state as its only snapshot.
    pub fn new(initial: S, config: HistoryConfig) -> Self {
        Self {
            snapshots: vec![initial],
            step: 0,
            config,
        }
    }

    /// Records the given state as the new current snapshot.
    ///
    /// Every snapshot after the current one is discarded first.
    pub fn push(&mut self, state: S) {
        self.snapshots.truncate(self.step + 1);
        self.snapshots.push(state);
        self.step = self.snapshots.len() - 1;

        // The oldest snapshots go first.
        if self.config.max_snapshots > 0 && self.snapshots.len() > self.config.max_snapshots {
            let excess = self.snapshots.len() - self.config.max_snapshots;
            self.snapshots.drain(0..excess);
            self.step = self.step.saturating_sub(excess);
        }

        trace!(step = self.step, snapshots = self.snapshots.len(), "snapshot recorded");
    }

    /// Moves to the previous snapshot and returns it, if any.
    pub fn undo(&mut self) -> Option<&S> {
        if !self.can_undo() {
            return None;
        }

        self.step -= 1;
        trace!(step = self.step, "undo");
        self.snapshots.get(self.step)
    }

    /// Moves to the next snapshot and returns it, if any.
    pub fn redo(&mut self) -> Option<&S> {
        if !self.can_redo() {
            return None;
        }

        self.step += 1;
        trace!(step = self.step, "redo");
        self.snapshots.get(self.step)
    }
}

impl<S> History<S> {
    /// Returns the snapshot at the current step.
    pub fn current(&self) -> Option<&S> {
        self.snapshots.get(self.step)
    }

    /// Returns the position of the current snapshot, zero being the oldest one.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the amount of snapshots in the history.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if, and only if, the history holds no snapshot, which never happens.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns true if, and only if, there is a snapshot before the current one.
    pub fn can_undo(&self) -> bool {
        self.step > 0
    }

    /// Returns true if, and only if, there is a snapshot after the current one.
    pub fn can_redo(&self) -> bool {
        self.step + 1 < self.snapshots.len()
    }

    /// Returns the amount of snapshots before the current one.
    pub fn undo_count(&self) -> usize {
        self.step
    }

    /// Returns the amount of snapshots after the current one.
    pub fn redo_count(&self) -> usize {
        self.snapshots.len() - self.step - 1
    }
}
