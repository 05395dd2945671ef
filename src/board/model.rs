//! Data models for the storyboard editing core.
//!
//! A storyboard is an ordered sequence of [`Panel`]s grouped by scene number,
//! plus free-text notes keyed by scene. Panels are immutable value records:
//! edits produce a replacement panel with the same id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// ANALYZED SHOT
// =============================================================================

/// One shot record as returned by the script analyzer.
///
/// This is the analyzer's wire shape: scene/shot numbering as the analyzer
/// proposed it, before any image has been generated. Becomes a [`Panel`] once
/// an image reference is attached.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnalyzedShot {
    /// Scene number the shot belongs to.
    pub scene: u32,
    /// Shot number within the scene as proposed by the analyzer.
    pub shot: u32,
    /// Visual description used for image generation.
    pub description: String,
    /// Camera shot type label (e.g. "WIDE SHOT", "CLOSE UP").
    pub shot_type: String,
    /// Dialogue spoken during the shot; empty if none.
    pub dialogue: String,
    /// Estimated duration in seconds, if the analyzer provided one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl AnalyzedShot {
    /// Creates a new AnalyzedShot with the given scene and shot numbers.
    pub fn new(scene: u32, shot: u32) -> Self {
        Self {
            scene,
            shot,
            ..Default::default()
        }
    }

    /// Builder: Set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: Set shot type.
    pub fn with_shot_type(mut self, shot_type: impl Into<String>) -> Self {
        self.shot_type = shot_type.into();
        self
    }

    /// Builder: Set dialogue.
    pub fn with_dialogue(mut self, dialogue: impl Into<String>) -> Self {
        self.dialogue = dialogue.into();
        self
    }

    /// Builder: Set duration in seconds.
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }
}

// =============================================================================
// PANEL
// =============================================================================

/// One storyboard panel: a shot with its generated image reference.
///
/// `id` is unique and stable across reorders. `shot` is a derived property:
/// it is recomputed after every structural change so that shot numbers stay
/// contiguous per scene (see [`crate::board::order::renumber`]), and is never
/// assigned directly by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Panel {
    /// Unique identifier, stable across reorders.
    pub id: String,
    /// Scene number (user-assigned grouping key).
    pub scene: u32,
    /// Shot number within the scene; recomputed, never user-assigned.
    pub shot: u32,
    /// Visual description of the shot.
    pub description: String,
    /// Camera shot type label.
    pub shot_type: String,
    /// Dialogue spoken during the shot; empty if none.
    pub dialogue: String,
    /// Generated image reference (URL or data URI).
    pub image_url: String,
    /// Estimated duration in seconds, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl Panel {
    /// Creates a new Panel with a fresh id in the given scene.
    pub fn new(scene: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            scene,
            ..Default::default()
        }
    }

    /// Creates a Panel from an analyzed shot and its generated image.
    pub fn from_shot(shot: &AnalyzedShot, image_url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            scene: shot.scene,
            shot: shot.shot,
            description: shot.description.clone(),
            shot_type: shot.shot_type.clone(),
            dialogue: shot.dialogue.clone(),
            duration: shot.duration,
            image_url: image_url.into(),
        }
    }

    /// Builder: Set id (replaces the generated one).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder: Set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: Set shot type.
    pub fn with_shot_type(mut self, shot_type: impl Into<String>) -> Self {
        self.shot_type = shot_type.into();
        self
    }

    /// Builder: Set dialogue.
    pub fn with_dialogue(mut self, dialogue: impl Into<String>) -> Self {
        self.dialogue = dialogue.into();
        self
    }

    /// Builder: Set image reference.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Builder: Set duration in seconds.
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Returns the shot-list view of this panel (drops id and image).
    pub fn to_shot(&self) -> AnalyzedShot {
        AnalyzedShot {
            scene: self.scene,
            shot: self.shot,
            description: self.description.clone(),
            shot_type: self.shot_type.clone(),
            dialogue: self.dialogue.clone(),
            duration: self.duration,
        }
    }
}

// =============================================================================
// STORYBOARD STATE
// =============================================================================

/// Free-text production notes keyed by scene number.
///
/// Independent of panel ordering; a note survives even if every panel in its
/// scene is moved away.
pub type SceneNotes = BTreeMap<u32, String>;

/// The whole editable storyboard: the unit of undo/redo history.
///
/// Invariant for committed states: for every scene number present among
/// `panels`, the shot numbers of that scene's panels, read in sequence order,
/// are exactly `1..=k` with no gaps or repeats.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoryboardState {
    /// Globally ordered panel sequence.
    pub panels: Vec<Panel>,
    /// Scene notes keyed by scene number.
    pub notes: SceneNotes,
}

impl StoryboardState {
    /// Creates a new empty storyboard state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state from a panel sequence with no notes.
    pub fn from_panels(panels: Vec<Panel>) -> Self {
        Self {
            panels,
            notes: SceneNotes::new(),
        }
    }

    /// Returns the number of panels.
    pub fn shot_count(&self) -> usize {
        self.panels.len()
    }

    /// Returns true if there are no panels.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Returns the distinct scene numbers in ascending order.
    pub fn scene_numbers(&self) -> Vec<u32> {
        let mut scenes: Vec<u32> = self.panels.iter().map(|p| p.scene).collect();
        scenes.sort_unstable();
        scenes.dedup();
        scenes
    }

    /// Returns the number of distinct scenes.
    pub fn scene_count(&self) -> usize {
        self.scene_numbers().len()
    }

    /// Returns the panels of one scene in sequence order.
    pub fn panels_in_scene(&self, scene: u32) -> Vec<&Panel> {
        self.panels.iter().filter(|p| p.scene == scene).collect()
    }

    /// Looks up a panel by id.
    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// Returns the note for a scene, if any.
    pub fn note(&self, scene: u32) -> Option<&str> {
        self.notes.get(&scene).map(String::as_str)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_from_shot() {
        let shot = AnalyzedShot::new(2, 3)
            .with_description("A wide shot of the office")
            .with_shot_type("WIDE SHOT")
            .with_dialogue("Morning, everyone.")
            .with_duration(4);

        let panel = Panel::from_shot(&shot, "https://example.com/img.jpg");

        assert!(!panel.id.is_empty());
        assert_eq!(panel.scene, 2);
        assert_eq!(panel.shot, 3);
        assert_eq!(panel.description, "A wide shot of the office");
        assert_eq!(panel.duration, Some(4));
        assert_eq!(panel.image_url, "https://example.com/img.jpg");
    }

    #[test]
    fn test_panel_ids_are_unique() {
        let a = Panel::new(1);
        let b = Panel::new(1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_panel_shot_round_trip() {
        let panel = Panel::new(1)
            .with_description("Close on the clock")
            .with_shot_type("CLOSE UP")
            .with_duration(2);

        let shot = panel.to_shot();
        assert_eq!(shot.scene, 1);
        assert_eq!(shot.description, "Close on the clock");
        assert_eq!(shot.duration, Some(2));
    }

    #[test]
    fn test_state_scene_helpers() {
        let state = StoryboardState::from_panels(vec![
            Panel::new(1).with_id("a"),
            Panel::new(2).with_id("b"),
            Panel::new(1).with_id("c"),
        ]);

        assert_eq!(state.shot_count(), 3);
        assert_eq!(state.scene_numbers(), vec![1, 2]);
        assert_eq!(state.scene_count(), 2);

        let scene_one: Vec<&str> = state
            .panels_in_scene(1)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(scene_one, vec!["a", "c"]);

        assert!(state.panel("b").is_some());
        assert!(state.panel("missing").is_none());
    }

    #[test]
    fn test_duration_absent_is_not_serialized() {
        let shot = AnalyzedShot::new(1, 1).with_description("No duration");
        let json = serde_json::to_value(&shot).unwrap();
        assert!(json.get("duration").is_none());

        let back: AnalyzedShot = serde_json::from_value(json).unwrap();
        assert_eq!(back.duration, None);
    }
}
