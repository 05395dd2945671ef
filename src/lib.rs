//! Storydeck - Editable-state core for AI storyboard authoring.
//!
//! A host application feeds a script to a generative AI service, gets back a
//! shot breakdown and per-shot images, and hands the result to this crate,
//! which owns everything editable about the storyboard:
//!
//! - **Whole-state undo/redo**: every edit commits a new snapshot to a linear
//!   timeline; undo/redo move a cursor, a commit truncates the redo tail
//! - **Scene-grouped numbering**: shot numbers are derived, recomputed after
//!   every structural change so each scene reads 1, 2, 3 with no gaps
//! - **Command-driven edits**: drops and field edits arrive as plain data
//!   commands, keeping the core free of any UI event model
//!
//! # Example
//!
//! ```rust
//! use storydeck::{Panel, StoryboardEditor};
//!
//! // Panels arrive from a generation run (ids are fresh UUIDs).
//! let mut editor = StoryboardEditor::new();
//! editor.load(vec![
//!     Panel::new(1).with_description("Wide on the office"),
//!     Panel::new(1).with_description("Close on the clock"),
//! ]);
//!
//! // Drag the second shot into scene 2's empty area.
//! let dragged = editor.state().panels[1].id.clone();
//! editor.reorder_panels(&dragged, None, 2);
//! assert_eq!(editor.state().panels_in_scene(2).len(), 1);
//! assert_eq!(editor.state().panels_in_scene(2)[0].shot, 1);
//!
//! // Every edit is one undo step.
//! editor.undo();
//! assert_eq!(editor.state().panels_in_scene(1).len(), 2);
//! ```

pub mod error;

// Editable-state core
pub mod board;
pub mod history;

// Generation pipeline and persistence boundary
pub mod generate;
pub mod roster;
pub mod store;

// Re-exports for convenience
pub use board::{
    AnalyzedShot, EditCommand, Panel, SceneNotes, StoryboardEditor, StoryboardState,
};
pub use error::{BoardError, BoardResult};
pub use generate::{GenerationSession, ImageGenerator, ScriptAnalyzer, VisualStyle};
pub use history::History;
pub use roster::{CharacterProfile, CharacterTask};
pub use store::{AppStorage, KeyValueStore, MemoryStore};

// WASM bindings (only compiled when wasm feature enabled)
#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::JsStoryboardEditor;
