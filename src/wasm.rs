//! WASM bindings for the storyboard editor.
//!
//! This module provides a JavaScript-friendly wrapper around the
//! StoryboardEditor for use in browser environments. Generation and
//! persistence stay on the host side (the network calls and localStorage are
//! browser concerns); the bindings cover the editable-state core.

use js_sys::Array;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use crate::board::editor::{EditCommand, StoryboardEditor};
use crate::board::model::{AnalyzedShot, Panel};
use crate::generate::provider::{placeholder_image_url, VisualStyle};

/// Serialize a value to JsValue with maps as plain JS objects (not Map).
fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::new().serialize_maps_as_objects(true))
}

// =============================================================================
// MAIN WRAPPER TYPE
// =============================================================================

/// JavaScript-friendly wrapper around StoryboardEditor.
///
/// Holds the storyboard state and its undo/redo timeline for one browser
/// session.
#[wasm_bindgen]
#[derive(Default)]
pub struct JsStoryboardEditor {
    inner: StoryboardEditor,
}

#[wasm_bindgen]
impl JsStoryboardEditor {
    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Creates an editor over an empty storyboard.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const editor = new JsStoryboardEditor();
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsStoryboardEditor {
        JsStoryboardEditor::default()
    }

    /// Starts a fresh session over generated panels, discarding all history.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// editor.loadPanels(panels);
    /// ```
    #[wasm_bindgen(js_name = loadPanels)]
    pub fn load_panels(&mut self, panels: JsValue) -> Result<(), JsValue> {
        let panels: Vec<Panel> = from_value(panels)?;
        self.inner.load(panels);
        Ok(())
    }

    /// Resets to an empty storyboard with a fresh timeline.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    // =========================================================================
    // STATE ACCESS
    // =========================================================================

    /// Gets the current storyboard state as a JavaScript object.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const { panels, notes } = editor.getState();
    /// ```
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(self.inner.state())?)
    }

    /// Gets the shot-list view of the current panels.
    #[wasm_bindgen(js_name = getShotList)]
    pub fn get_shot_list(&self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(&self.inner.shot_list())?)
    }

    // =========================================================================
    // EDITS
    // =========================================================================

    /// Applies an edit command given as a JavaScript object.
    #[wasm_bindgen(js_name = applyCommand)]
    pub fn apply_command(&mut self, command: JsValue) -> Result<(), JsValue> {
        let command: EditCommand = from_value(command)?;
        self.inner.apply(command);
        Ok(())
    }

    /// Replaces the panel with the matching id by an edited copy.
    #[wasm_bindgen(js_name = updatePanel)]
    pub fn update_panel(&mut self, panel: JsValue) -> Result<(), JsValue> {
        let panel: Panel = from_value(panel)?;
        self.inner.update_panel(panel);
        Ok(())
    }

    /// Moves a panel to a drop position in `targetScene`.
    ///
    /// Pass `null` for `targetId` when the drop landed in a scene's empty
    /// area.
    #[wasm_bindgen(js_name = reorderPanels)]
    pub fn reorder_panels(
        &mut self,
        dragged_id: &str,
        target_id: Option<String>,
        target_scene: u32,
    ) {
        self.inner
            .reorder_panels(dragged_id, target_id.as_deref(), target_scene);
    }

    /// Upserts the free-text note for a scene.
    #[wasm_bindgen(js_name = setSceneNote)]
    pub fn set_scene_note(&mut self, scene: u32, note: &str) {
        self.inner.set_scene_note(scene, note);
    }

    /// Merges edited shot-list rows back onto the panels positionally.
    #[wasm_bindgen(js_name = applyShotList)]
    pub fn apply_shot_list(&mut self, shots: JsValue) -> Result<(), JsValue> {
        let shots: Vec<AnalyzedShot> = from_value(shots)?;
        self.inner.apply_shot_list(shots);
        Ok(())
    }

    // =========================================================================
    // HISTORY
    // =========================================================================

    /// Steps back one snapshot. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        self.inner.undo()
    }

    /// Steps forward one snapshot. Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        self.inner.redo()
    }

    /// True if an undo step is available.
    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    /// True if a redo step is available.
    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }
}

// =============================================================================
// FREE HELPERS
// =============================================================================

/// The user-facing labels of every visual style, in display order.
#[wasm_bindgen(js_name = visualStyles)]
pub fn visual_styles() -> Array {
    VisualStyle::ALL
        .iter()
        .map(|style| JsValue::from_str(style.label()))
        .collect()
}

/// Deterministic placeholder image reference for a failed shot.
#[wasm_bindgen(js_name = placeholderImageUrl)]
pub fn placeholder_image_url_js(description: &str) -> String {
    placeholder_image_url(description)
}
