//! Generic undo/redo history over whole-state snapshots.
//!
//! The timeline is a linear sequence of snapshots plus a current index.
//! Committing while undone truncates the redo tail first, so redo is never
//! available immediately after a commit. The timeline grows unbounded for the
//! session; [`History::reset`] starts a fresh one-element timeline.

/// Linear undo/redo container for opaque state snapshots.
///
/// All operations are total: undo/redo at a boundary are silent no-ops, and
/// the index always stays within `[0, len - 1]`.
#[derive(Debug, Clone)]
pub struct History<T> {
    timeline: Vec<T>,
    index: usize,
}

impl<T: Clone> History<T> {
    /// Creates a history whose timeline holds only `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            timeline: vec![initial],
            index: 0,
        }
    }

    /// The snapshot at the current position.
    pub fn state(&self) -> &T {
        &self.timeline[self.index]
    }

    /// Commits `next` as the new present.
    ///
    /// Discards every snapshot after the current position, appends `next`,
    /// and moves the position onto it. Afterwards `can_redo()` is false.
    pub fn commit(&mut self, next: T) {
        self.timeline.truncate(self.index + 1);
        self.timeline.push(next);
        self.index = self.timeline.len() - 1;
    }

    /// Commits the snapshot produced by applying `f` to the current one.
    pub fn commit_with<F>(&mut self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(self.state());
        self.commit(next);
    }

    /// Discards the entire timeline and starts over with `next`.
    ///
    /// Used when a new storyboard is generated: no undo history from the
    /// previous one leaks into the new session.
    pub fn reset(&mut self, next: T) {
        self.timeline = vec![next];
        self.index = 0;
    }

    /// Steps back one snapshot. Returns whether the position moved.
    pub fn undo(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Steps forward one snapshot. Returns whether the position moved.
    pub fn redo(&mut self) -> bool {
        if self.index < self.timeline.len() - 1 {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// True if a prior snapshot exists.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// True if an undone snapshot can be reapplied.
    pub fn can_redo(&self) -> bool {
        self.index < self.timeline.len() - 1
    }

    /// Number of snapshots currently in the timeline.
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    /// Always false: the timeline never drops below one snapshot.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T: Clone + Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history() {
        let history = History::new(0);
        assert_eq!(*history.state(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_commit_undo_redo_round_trip() {
        let mut history = History::new(0);
        history.commit(1);
        history.commit(2);

        assert_eq!(*history.state(), 2);
        assert!(history.undo());
        assert_eq!(*history.state(), 1);
        assert!(history.undo());
        assert_eq!(*history.state(), 0);
        assert!(history.redo());
        assert_eq!(*history.state(), 1);
    }

    #[test]
    fn test_undo_redo_at_bounds_are_noops() {
        let mut history = History::new(7);
        assert!(!history.undo());
        assert_eq!(*history.state(), 7);
        assert!(!history.redo());
        assert_eq!(*history.state(), 7);
    }

    #[test]
    fn test_commit_after_undo_discards_redo_tail() {
        let mut history = History::new(0);
        history.commit(1);
        history.commit(2);
        history.undo();
        history.undo();

        history.commit(9);

        assert_eq!(*history.state(), 9);
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(*history.state(), 9);
        // 0 and 9 remain; 1 and 2 are gone.
        assert_eq!(history.len(), 2);
        history.undo();
        assert_eq!(*history.state(), 0);
    }

    #[test]
    fn test_commit_with_applies_to_current() {
        let mut history = History::new(10);
        history.commit_with(|n| n + 5);
        assert_eq!(*history.state(), 15);
        history.undo();
        assert_eq!(*history.state(), 10);
    }

    #[test]
    fn test_reset_clears_both_directions() {
        let mut history = History::new(0);
        history.commit(1);
        history.commit(2);
        history.undo();

        history.reset(42);

        assert_eq!(*history.state(), 42);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_can_flags_track_position() {
        let mut history = History::new(0);
        history.commit(1);
        assert!(history.can_undo());
        assert!(!history.can_redo());

        history.undo();
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }
}
