//! Linear undo/redo history over scene snapshots.
//!
//! The history is an ordered list of immutable [`Snapshot`]s plus a cursor
//! marking the current one. Appending cuts off any redo tail (standard
//! linear history: redo states are lost when a new branch starts), while
//! [`History::replace_current`] overwrites the current snapshot only and is
//! used for live drag feedback so a continuous gesture contributes exactly
//! one undo step.

use super::snapshot::Snapshot;
use log::debug;

/// Linear snapshot history with a cursor.
///
/// Invariant: `cursor < len()` at all times. Initialized with one empty
/// snapshot so there is always a current scene to read and to replace.
#[derive(Debug)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl History {
    /// Creates a history containing a single empty snapshot at cursor 0.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::new()],
            cursor: 0,
        }
    }

    /// Returns the snapshot at the cursor.
    pub fn current(&self) -> &Snapshot {
        // Invariant: cursor always indexes a valid snapshot.
        &self.snapshots[self.cursor]
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if `undo` would move the cursor.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Returns true if `redo` would move the cursor.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Appends `snapshot` as a new undoable step.
    ///
    /// Drops every snapshot after the cursor first (the redo tail), then
    /// advances the cursor to the new last index. One `append` per discrete
    /// user action: finishing a shape, deleting, starting a drag gesture.
    pub fn append(&mut self, snapshot: Snapshot) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
        debug!(
            "history: appended snapshot, cursor={} len={}",
            self.cursor,
            self.snapshots.len()
        );
    }

    /// Overwrites the snapshot at the cursor in place.
    ///
    /// Does not move the cursor and does not touch snapshots beyond it, so
    /// every pointer-move of a drag can publish fresh geometry without
    /// bloating history.
    pub fn replace_current(&mut self, snapshot: Snapshot) {
        self.snapshots[self.cursor] = snapshot;
    }

    /// Moves the cursor one step back. No-op at the oldest snapshot.
    pub fn undo(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            debug!("history: undo, cursor={}", self.cursor);
        }
    }

    /// Moves the cursor one step forward. No-op at the newest snapshot.
    pub fn redo(&mut self) {
        if self.cursor + 1 < self.snapshots.len() {
            self.cursor += 1;
            debug!("history: redo, cursor={}", self.cursor);
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
