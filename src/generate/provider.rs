//! Collaborator contracts for script analysis and image generation.
//!
//! The AI provider lives outside the crate. Hosts implement
//! [`ScriptAnalyzer`] and [`ImageGenerator`] over whatever service they call;
//! the core only ever sees resolved results.

use serde::{Deserialize, Serialize};

use crate::board::model::AnalyzedShot;
use crate::error::BoardResult;

// =============================================================================
// VISUAL STYLE
// =============================================================================

/// The fixed set of visual styles a storyboard can be generated in.
///
/// Each style carries the prompt fragment prepended to a shot description
/// when asking the image generator for that shot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VisualStyle {
    Cinematic,
    #[serde(rename = "Film Noir")]
    FilmNoir,
    Technicolor,
    #[serde(rename = "Indie / Gritty")]
    IndieGritty,
}

impl VisualStyle {
    /// Every style, in display order.
    pub const ALL: [VisualStyle; 4] = [
        VisualStyle::Cinematic,
        VisualStyle::FilmNoir,
        VisualStyle::Technicolor,
        VisualStyle::IndieGritty,
    ];

    /// The user-facing label.
    pub fn label(self) -> &'static str {
        match self {
            VisualStyle::Cinematic => "Cinematic",
            VisualStyle::FilmNoir => "Film Noir",
            VisualStyle::Technicolor => "Technicolor",
            VisualStyle::IndieGritty => "Indie / Gritty",
        }
    }

    /// The style fragment prepended to the shot description.
    pub fn prompt_fragment(self) -> &'static str {
        match self {
            VisualStyle::Cinematic => {
                "cinematic film still, photorealistic, dramatic lighting, high detail, 8k, \
                 rule of thirds composition"
            }
            VisualStyle::FilmNoir => {
                "black and white, high contrast, film noir style, dramatic shadows, \
                 1940s detective movie aesthetic, deep focus"
            }
            VisualStyle::Technicolor => {
                "vibrant saturated colors, classic technicolor film style, lush and rich tones, \
                 1950s Hollywood movie aesthetic"
            }
            VisualStyle::IndieGritty => {
                "gritty realism, desaturated colors, natural lighting, handheld camera feel, \
                 documentary style, shallow depth of field"
            }
        }
    }

    /// The full image prompt for one shot description.
    pub fn image_prompt(self, description: &str) -> String {
        format!("{}, {}", self.prompt_fragment(), description)
    }
}

impl std::fmt::Display for VisualStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for VisualStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VisualStyle::ALL
            .into_iter()
            .find(|style| style.label() == s)
            .ok_or_else(|| format!("Unknown visual style: {s}"))
    }
}

// =============================================================================
// COLLABORATOR TRAITS
// =============================================================================

/// Breaks a raw script into an ordered shot list.
///
/// Fails with [`crate::BoardError::Analysis`] when the service errors or
/// returns an invalid breakdown. Empty scripts are rejected by the caller
/// before this is ever invoked.
pub trait ScriptAnalyzer {
    fn analyze(&self, script: &str) -> BoardResult<Vec<AnalyzedShot>>;
}

/// Produces an image reference for one shot description in a visual style.
///
/// A failure here never reaches the user as a hard error: the generation
/// session substitutes [`placeholder_image_url`] for the failed shot.
pub trait ImageGenerator {
    fn generate(&self, description: &str, style: VisualStyle) -> BoardResult<String>;
}

// =============================================================================
// PLACEHOLDER
// =============================================================================

/// Deterministic stand-in image reference for a shot whose generation failed.
///
/// The seed is derived from the description (lowercased, non-alphanumeric
/// runs collapsed to `-`), so the same shot always degrades to the same
/// placeholder.
pub fn placeholder_image_url(description: &str) -> String {
    let mut seed = String::with_capacity(description.len());
    for ch in description.chars() {
        if ch.is_ascii_alphanumeric() {
            seed.extend(ch.to_lowercase());
        } else if !seed.ends_with('-') {
            seed.push('-');
        }
    }
    let seed = seed.trim_matches('-');
    let seed = if seed.is_empty() { "shot" } else { seed };
    format!("https://picsum.photos/seed/{seed}/1280/720")
}

// =============================================================================
// TESTS
// =============================================================================
