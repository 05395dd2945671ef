//! Error types for the storyboard authoring core.

use thiserror::Error;

/// Result type alias for storyboard operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors that can occur while building or persisting a storyboard.
///
/// The editing core (history, ordering, editor) is total and never returns
/// these; fallible operations live at the generation and persistence
/// boundaries.
#[derive(Error, Debug)]
pub enum BoardError {
    /// The submitted script was empty or whitespace-only.
    #[error("Script cannot be empty")]
    EmptyScript,

    /// The script analyzer failed or returned an invalid breakdown.
    #[error("Script analysis failed: {0}")]
    Analysis(String),

    /// The analyzer returned a breakdown with no shots in it.
    #[error("No shots could be identified in the script")]
    NoShots,

    /// The image generator failed for a shot.
    #[error("Image generation failed: {0}")]
    ImageGeneration(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BoardError {
    /// Creates an Analysis error.
    pub fn analysis(msg: impl Into<String>) -> Self {
        Self::Analysis(msg.into())
    }

    /// Creates an ImageGeneration error.
    pub fn image_generation(msg: impl Into<String>) -> Self {
        Self::ImageGeneration(msg.into())
    }

    /// Creates a Serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}
