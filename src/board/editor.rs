//! Command-driven storyboard editor.
//!
//! [`StoryboardEditor`] owns the undo/redo timeline and funnels every edit
//! through [`EditCommand`] values, keeping the editing contract pure
//! data-in/data-out: the presentation layer translates UI events (drops,
//! field edits) into commands and renders from [`StoryboardEditor::state`].
//!
//! Renumbering is applied inside the reducer, so every committed snapshot
//! satisfies the contiguous-shot-numbers invariant.

use serde::{Deserialize, Serialize};

use crate::board::model::{AnalyzedShot, Panel, StoryboardState};
use crate::board::order::{renumber, reorder};
use crate::history::History;

// =============================================================================
// COMMANDS
// =============================================================================

/// One storyboard edit, as explicit data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EditCommand {
    /// Replace the panel with the matching id by an edited copy.
    CommitPanel(Panel),

    /// Move a panel to a drop position in `target_scene`.
    ///
    /// `target_id` is the panel the drop landed on, or `None` when it landed
    /// in the scene's empty area.
    Reorder {
        dragged_id: String,
        target_id: Option<String>,
        target_scene: u32,
    },

    /// Upsert the free-text note for a scene.
    SetSceneNote { scene: u32, note: String },

    /// Merge edited shot fields back onto the panels positionally
    /// (the shot-list view round trip).
    ApplyShotList(Vec<AnalyzedShot>),

    /// Recompute shot numbers without any other change.
    Renumber,
}

// =============================================================================
// EDITOR
// =============================================================================

/// The storyboard editing session: current state plus its undo/redo timeline.
///
/// Every method is total; an edit that cannot apply (e.g. reordering an
/// unknown panel id) is a silent no-op so the surrounding UI stays
/// responsive.
#[derive(Debug, Clone, Default)]
pub struct StoryboardEditor {
    history: History<StoryboardState>,
}

impl StoryboardEditor {
    /// Creates an editor over an empty storyboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current storyboard snapshot.
    pub fn state(&self) -> &StoryboardState {
        self.history.state()
    }

    /// Applies one edit command, committing the result to history.
    pub fn apply(&mut self, command: EditCommand) {
        match command {
            EditCommand::CommitPanel(panel) => {
                self.history.commit_with(|state| {
                    let mut next = state.clone();
                    for slot in &mut next.panels {
                        if slot.id == panel.id {
                            *slot = panel.clone();
                        }
                    }
                    next
                });
            }
            EditCommand::Reorder {
                dragged_id,
                target_id,
                target_scene,
            } => {
                // Unknown dragged id: nothing moved, nothing committed.
                if self.state().panel(&dragged_id).is_none() {
                    return;
                }
                self.history.commit_with(|state| {
                    let mut next = state.clone();
                    next.panels = renumber(reorder(
                        next.panels,
                        &dragged_id,
                        target_id.as_deref(),
                        target_scene,
                    ));
                    next
                });
            }
            EditCommand::SetSceneNote { scene, note } => {
                self.history.commit_with(|state| {
                    let mut next = state.clone();
                    next.notes.insert(scene, note.clone());
                    next
                });
            }
            EditCommand::ApplyShotList(shots) => {
                self.history.commit_with(|state| {
                    let mut next = state.clone();
                    for (panel, shot) in next.panels.iter_mut().zip(shots.iter()) {
                        panel.scene = shot.scene;
                        panel.description = shot.description.clone();
                        panel.shot_type = shot.shot_type.clone();
                        panel.dialogue = shot.dialogue.clone();
                        panel.duration = shot.duration;
                    }
                    next.panels = renumber(std::mem::take(&mut next.panels));
                    next
                });
            }
            EditCommand::Renumber => {
                self.history.commit_with(|state| {
                    let mut next = state.clone();
                    next.panels = renumber(std::mem::take(&mut next.panels));
                    next
                });
            }
        }
    }

    /// Replaces the panel with `panel.id` by the edited copy.
    pub fn update_panel(&mut self, panel: Panel) {
        self.apply(EditCommand::CommitPanel(panel));
    }

    /// Moves a panel to a drop position in `target_scene`.
    pub fn reorder_panels(
        &mut self,
        dragged_id: &str,
        target_id: Option<&str>,
        target_scene: u32,
    ) {
        self.apply(EditCommand::Reorder {
            dragged_id: dragged_id.to_string(),
            target_id: target_id.map(str::to_string),
            target_scene,
        });
    }

    /// Upserts the note for a scene.
    pub fn set_scene_note(&mut self, scene: u32, note: impl Into<String>) {
        self.apply(EditCommand::SetSceneNote {
            scene,
            note: note.into(),
        });
    }

    /// Merges edited shot fields back onto the panels positionally.
    pub fn apply_shot_list(&mut self, shots: Vec<AnalyzedShot>) {
        self.apply(EditCommand::ApplyShotList(shots));
    }

    /// Returns the shot-list view of the current panels.
    pub fn shot_list(&self) -> Vec<AnalyzedShot> {
        self.state().panels.iter().map(Panel::to_shot).collect()
    }

    /// Starts a fresh session over the given panels.
    ///
    /// Panels are renumbered, notes are cleared, and the previous timeline is
    /// discarded entirely: a newly generated storyboard carries no undo
    /// history from the one before it.
    pub fn load(&mut self, panels: Vec<Panel>) {
        self.history
            .reset(StoryboardState::from_panels(renumber(panels)));
    }

    /// Resets to an empty storyboard with a fresh timeline.
    pub fn clear(&mut self) {
        self.history.reset(StoryboardState::new());
    }

    /// Steps back one snapshot. No-op at the oldest snapshot.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Steps forward one snapshot. No-op at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// True if an undo step is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True if a redo step is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

// =============================================================================
// TESTS
// =============================================================================
