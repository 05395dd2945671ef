//! Script-to-storyboard generation.
//!
//! This module provides:
//! - `provider`: Consumed collaborator contracts (ScriptAnalyzer,
//!   ImageGenerator), the VisualStyle prompt map, and the deterministic
//!   placeholder image reference
//! - `session`: GenerationSession, the batch orchestration with the single
//!   error-message slot and the stored generation counter

pub mod provider;
pub mod session;

pub use provider::{placeholder_image_url, ImageGenerator, ScriptAnalyzer, VisualStyle};
pub use session::GenerationSession;
