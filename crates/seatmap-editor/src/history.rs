//! Snapshot-based undo/redo over whole scenes.

use seatmap_core::constants::UNDO_DEPTH;

use crate::scene::Scene;

/// Bounded undo/redo stacks of full scene snapshots.
///
/// `record` is called with the pre-mutation scene before every state-changing
/// operation; recording clears the redo stack. When the undo stack is full
/// the oldest snapshot is evicted.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo: Vec<Scene>,
    redo: Vec<Scene>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a pre-mutation snapshot and invalidates the redo stack.
    pub fn record(&mut self, snapshot: Scene) {
        if self.undo.len() >= UNDO_DEPTH {
            self.undo.remove(0);
        }
        self.undo.push(snapshot);
        self.redo.clear();
    }

    /// Swaps the current scene for the most recent snapshot. Returns the
    /// scene to restore, or `None` when there is nothing to undo.
    pub fn undo(&mut self, current: Scene) -> Option<Scene> {
        let restored = self.undo.pop()?;
        self.redo.push(current);
        Some(restored)
    }

    pub fn redo(&mut self, current: Scene) -> Option<Scene> {
        let restored = self.redo.pop()?;
        self.undo.push(current);
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
