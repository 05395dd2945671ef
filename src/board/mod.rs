//! Storyboard editing module.
//!
//! This module provides:
//! - `model`: Data structures for the storyboard (Panel, AnalyzedShot,
//!   StoryboardState, SceneNotes)
//! - `order`: Pure renumbering/reordering engine over the panel sequence
//! - `editor`: StoryboardEditor, the command reducer with undo/redo

pub mod editor;
pub mod model;
pub mod order;

pub use editor::{EditCommand, StoryboardEditor};
pub use model::{AnalyzedShot, Panel, SceneNotes, StoryboardState};
pub use order::{renumber, reorder};
