//! Generation batch orchestration.
//!
//! [`GenerationSession`] drives one script-to-storyboard run: validate the
//! script, reset the editor, analyze, generate an image per shot (degrading
//! to a placeholder on per-shot failure), then commit the whole batch exactly
//! once as a fresh timeline. It also owns the single error-message slot and
//! the stored generation counter.

use tracing::{info, warn};

use crate::board::editor::StoryboardEditor;
use crate::board::model::{AnalyzedShot, Panel};
use crate::error::{BoardError, BoardResult};
use crate::generate::provider::{placeholder_image_url, ImageGenerator, ScriptAnalyzer, VisualStyle};
use crate::store::{AppStorage, KeyValueStore};

/// One user session's generation pipeline.
///
/// The analyzer and image generator are injected collaborators; the storage
/// backend records the running generation counter. The session touches
/// editor state at exactly two points: the reset at the start of a valid run
/// and the single batch commit at the end.
pub struct GenerationSession<A, G, S> {
    analyzer: A,
    images: G,
    storage: AppStorage<S>,
    last_error: Option<String>,
}

impl<A, G, S> GenerationSession<A, G, S>
where
    A: ScriptAnalyzer,
    G: ImageGenerator,
    S: KeyValueStore,
{
    /// Creates a session over the given collaborators and storage backend.
    pub fn new(analyzer: A, images: G, store: S) -> Self {
        Self {
            analyzer,
            images,
            storage: AppStorage::new(store),
            last_error: None,
        }
    }

    /// Runs one generation batch, replacing the editor's storyboard.
    ///
    /// Returns the analyzer's shot breakdown on success. On failure the
    /// error is also recorded in the error slot; a blank script leaves the
    /// editor untouched, while an analyzer failure leaves it reset to empty
    /// (the run had already started).
    pub fn generate(
        &mut self,
        script: &str,
        style: VisualStyle,
        editor: &mut StoryboardEditor,
    ) -> BoardResult<Vec<AnalyzedShot>> {
        if script.trim().is_empty() {
            return Err(self.fail(BoardError::EmptyScript));
        }

        // The run is underway: clear the previous failure and start from an
        // empty board with no residual history.
        self.last_error = None;
        editor.clear();

        info!("analyzing script");
        let shots = match self.analyzer.analyze(script) {
            Ok(shots) => shots,
            Err(e) => return Err(self.fail(e)),
        };
        if shots.is_empty() {
            return Err(self.fail(BoardError::NoShots));
        }

        let total = shots.len();
        let panels: Vec<Panel> = shots
            .iter()
            .enumerate()
            .map(|(index, shot)| {
                info!(shot = index + 1, total, "generating image");
                let image_url = match self.images.generate(&shot.description, style) {
                    Ok(url) => url,
                    Err(e) => {
                        warn!(shot = index + 1, error = %e, "image failed, using placeholder");
                        placeholder_image_url(&shot.description)
                    }
                };
                Panel::from_shot(shot, image_url)
            })
            .collect();

        // One commit for the whole batch, in request order.
        editor.load(panels);
        let count = self.storage.record_generation();
        info!(shots = total, generation = count, "storyboard generated");
        Ok(shots)
    }

    /// The most recent batch-level failure, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Clears the error slot.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// The session's typed storage accessors.
    pub fn storage(&self) -> &AppStorage<S> {
        &self.storage
    }

    /// Mutable access to the session's storage accessors.
    pub fn storage_mut(&mut self) -> &mut AppStorage<S> {
        &mut self.storage
    }

    fn fail(&mut self, error: BoardError) -> BoardError {
        self.last_error = Some(error.to_string());
        error
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::collections::HashSet;

    /// Analyzer that replays a fixed breakdown, or a fixed failure.
    struct FixedAnalyzer(BoardResult<Vec<AnalyzedShot>>);

    impl ScriptAnalyzer for FixedAnalyzer {
        fn analyze(&self, _script: &str) -> BoardResult<Vec<AnalyzedShot>> {
            match &self.0 {
                Ok(shots) => Ok(shots.clone()),
                Err(_) => Err(BoardError::analysis("invalid format")),
            }
        }
    }

    /// Generator that fails for a chosen set of descriptions.
    struct FlakyGenerator {
        failing: HashSet<String>,
    }

    impl FlakyGenerator {
        fn reliable() -> Self {
            Self {
                failing: HashSet::new(),
            }
        }

        fn failing_on(description: &str) -> Self {
            Self {
                failing: HashSet::from([description.to_string()]),
            }
        }
    }

    impl ImageGenerator for FlakyGenerator {
        fn generate(&self, description: &str, style: VisualStyle) -> BoardResult<String> {
            if self.failing.contains(description) {
                Err(BoardError::image_generation("provider unavailable"))
            } else {
                Ok(format!("https://img.test/{}/{description}", style.label()))
            }
        }
    }

    fn breakdown() -> Vec<AnalyzedShot> {
        vec![
            AnalyzedShot::new(1, 1).with_description("opening"),
            AnalyzedShot::new(1, 2).with_description("reaction"),
            AnalyzedShot::new(2, 1).with_description("chase"),
        ]
    }

    fn session(
        analyzer: FixedAnalyzer,
        images: FlakyGenerator,
    ) -> GenerationSession<FixedAnalyzer, FlakyGenerator, MemoryStore> {
        GenerationSession::new(analyzer, images, MemoryStore::new())
    }

    #[test]
    fn test_successful_batch_loads_fresh_board() {
        let mut session = session(FixedAnalyzer(Ok(breakdown())), FlakyGenerator::reliable());
        let mut editor = StoryboardEditor::new();

        let shots = session
            .generate("INT. OFFICE - DAY", VisualStyle::Cinematic, &mut editor)
            .unwrap();

        assert_eq!(shots.len(), 3);
        let state = editor.state();
        assert_eq!(state.shot_count(), 3);
        // Request order preserved, numbering contiguous per scene.
        assert_eq!(state.panels[0].description, "opening");
        assert_eq!(state.panels[1].shot, 2);
        assert_eq!(state.panels[2].scene, 2);
        assert_eq!(state.panels[2].shot, 1);
        // Fresh timeline: the batch was one commit.
        assert!(!editor.can_undo());
        assert!(!editor.can_redo());
        assert!(session.last_error().is_none());
        assert_eq!(session.storage().generation_count(), 1);
    }

    #[test]
    fn test_empty_script_leaves_editor_untouched() {
        let mut session = session(FixedAnalyzer(Ok(breakdown())), FlakyGenerator::reliable());
        let mut editor = StoryboardEditor::new();
        editor.load(vec![Panel::new(1).with_id("keep")]);
        editor.set_scene_note(1, "existing work");

        let err = session
            .generate("   \n", VisualStyle::Cinematic, &mut editor)
            .unwrap_err();

        assert!(matches!(err, BoardError::EmptyScript));
        assert_eq!(session.last_error(), Some("Script cannot be empty"));
        assert_eq!(editor.state().shot_count(), 1);
        assert!(editor.can_undo());
        assert_eq!(session.storage().generation_count(), 0);
    }

    #[test]
    fn test_analyzer_failure_aborts_batch() {
        let mut session = session(
            FixedAnalyzer(Err(BoardError::analysis("invalid format"))),
            FlakyGenerator::reliable(),
        );
        let mut editor = StoryboardEditor::new();
        editor.load(vec![Panel::new(1).with_id("old")]);

        let err = session
            .generate("a script", VisualStyle::FilmNoir, &mut editor)
            .unwrap_err();

        assert!(matches!(err, BoardError::Analysis(_)));
        assert!(session.last_error().unwrap().contains("invalid format"));
        // The run had started: the previous board is gone.
        assert!(editor.state().is_empty());
        assert_eq!(session.storage().generation_count(), 0);
    }

    #[test]
    fn test_empty_breakdown_is_no_shots() {
        let mut session = session(FixedAnalyzer(Ok(Vec::new())), FlakyGenerator::reliable());
        let mut editor = StoryboardEditor::new();

        let err = session
            .generate("a script", VisualStyle::Cinematic, &mut editor)
            .unwrap_err();

        assert!(matches!(err, BoardError::NoShots));
        assert!(session.last_error().is_some());
    }

    #[test]
    fn test_single_shot_failure_degrades_to_placeholder() {
        let mut session = session(
            FixedAnalyzer(Ok(breakdown())),
            FlakyGenerator::failing_on("reaction"),
        );
        let mut editor = StoryboardEditor::new();

        session
            .generate("a script", VisualStyle::Technicolor, &mut editor)
            .unwrap();

        let state = editor.state();
        assert_eq!(state.shot_count(), 3);
        assert_eq!(
            state.panels[1].image_url,
            "https://picsum.photos/seed/reaction/1280/720"
        );
        assert!(state.panels[0].image_url.starts_with("https://img.test/"));
        // Degradation is not a batch failure.
        assert!(session.last_error().is_none());
        assert_eq!(session.storage().generation_count(), 1);
    }

    #[test]
    fn test_error_slot_cleared_on_next_run() {
        let mut editor = StoryboardEditor::new();

        let mut session = session(FixedAnalyzer(Ok(breakdown())), FlakyGenerator::reliable());
        session
            .generate("", VisualStyle::Cinematic, &mut editor)
            .unwrap_err();
        assert!(session.last_error().is_some());

        session
            .generate("a script", VisualStyle::Cinematic, &mut editor)
            .unwrap();
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_counter_accumulates_across_runs() {
        let mut session = session(FixedAnalyzer(Ok(breakdown())), FlakyGenerator::reliable());
        let mut editor = StoryboardEditor::new();

        for _ in 0..3 {
            session
                .generate("a script", VisualStyle::IndieGritty, &mut editor)
                .unwrap();
        }
        assert_eq!(session.storage().generation_count(), 3);
    }
}
