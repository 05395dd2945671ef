//! Character roster records.
//!
//! Characters live outside the undo/redo timeline: the roster is a flat list
//! persisted through [`crate::store::AppStorage`] as JSON, shared across
//! storyboards in the same browser profile.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reminder attached to a character.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CharacterTask {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl CharacterTask {
    /// Creates a new open task with a fresh id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
        }
    }
}

/// One character in the roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CharacterProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Portrait reference, once one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Character arc / goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc: Option<String>,
    /// Key relationships.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<String>,
    /// Voice / mannerisms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    /// Task reminders.
    pub tasks: Vec<CharacterTask>,
}

impl CharacterProfile {
    /// Creates a new character with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder: Set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: Set portrait reference.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Builder: Set character arc.
    pub fn with_arc(mut self, arc: impl Into<String>) -> Self {
        self.arc = Some(arc.into());
        self
    }

    /// Builder: Set relationships.
    pub fn with_relationships(mut self, relationships: impl Into<String>) -> Self {
        self.relationships = Some(relationships.into());
        self
    }

    /// Builder: Set voice notes.
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    /// Builder: Add a task reminder.
    pub fn with_task(mut self, task: CharacterTask) -> Self {
        self.tasks.push(task);
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================
