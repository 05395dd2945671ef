//! Panel ordering and renumbering engine.
//!
//! Pure functions over the panel sequence. Shot numbers are derived data:
//! every structural change (reorder, scene move, shot-list merge) must be
//! followed by [`renumber`] before the result is committed to history.

use crate::board::model::Panel;
use std::collections::HashMap;

/// Rewrites each panel's shot number to its 1-based rank among the panels
/// sharing its scene number, counted in sequence order.
///
/// Preserves length and order; only the `shot` field changes. Idempotent.
pub fn renumber(panels: Vec<Panel>) -> Vec<Panel> {
    let mut counters: HashMap<u32, u32> = HashMap::new();
    panels
        .into_iter()
        .map(|mut panel| {
            let count = counters.entry(panel.scene).or_insert(0);
            *count += 1;
            panel.shot = *count;
            panel
        })
        .collect()
}

/// Moves the dragged panel into `target_scene` at a drop position.
///
/// `target_id` is the panel the drop landed on, or `None` when the drop
/// landed in a scene's empty area. Placement:
/// - before the target panel, when `target_id` matches a remaining panel;
/// - otherwise after the last panel already in `target_scene`, so a drop
///   into an occupied scene's empty area appends after that scene's shots;
/// - otherwise (scene has no panels) at the end of the sequence.
///
/// An unknown `dragged_id` returns the sequence unchanged. Shot numbers are
/// left stale; the caller passes the result through [`renumber`] before
/// committing.
pub fn reorder(
    panels: Vec<Panel>,
    dragged_id: &str,
    target_id: Option<&str>,
    target_scene: u32,
) -> Vec<Panel> {
    let Some(dragged_pos) = panels.iter().position(|p| p.id == dragged_id) else {
        return panels;
    };

    let mut panels = panels;
    let mut dragged = panels.remove(dragged_pos);
    dragged.scene = target_scene;

    let target_pos = target_id.and_then(|id| panels.iter().position(|p| p.id == id));
    match target_pos {
        Some(pos) => panels.insert(pos, dragged),
        None => match panels.iter().rposition(|p| p.scene == target_scene) {
            Some(last) => panels.insert(last + 1, dragged),
            None => panels.push(dragged),
        },
    }
    panels
}

// =============================================================================
// TESTS
// =============================================================================
