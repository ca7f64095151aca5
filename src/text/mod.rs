//! Hand-drawn lettering.
//!
//! Text is drawn with single-stroke (plotter style) glyphs so it can share
//! the pen look of the sketch lines. Each point of each glyph gets a small
//! deterministic jitter.

pub mod glyphs;

use std::fmt;

use glam::{DVec2, dvec2};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::sketch::noise::Rng;
use crate::types::{Path, check_non_negative, check_positive};

/// Hershey font variants with different styles.
///
/// Only the Roman strokes are bundled; the other faces render with Roman
/// strokes until their glyph data is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HersheyFont {
    #[default]
    Roman,
    ScriptSimplex,
    ScriptComplex,
    GothicEnglish,
    GothicGerman,
    GothicItalian,
}

impl HersheyFont {
    pub const ALL: [HersheyFont; 6] = [
        HersheyFont::Roman,
        HersheyFont::ScriptSimplex,
        HersheyFont::ScriptComplex,
        HersheyFont::GothicEnglish,
        HersheyFont::GothicGerman,
        HersheyFont::GothicItalian,
    ];

    /// Short identifier used by Hershey font files
    pub fn id(self) -> &'static str {
        match self {
            HersheyFont::Roman => "roman",
            HersheyFont::ScriptSimplex => "scriptsx",
            HersheyFont::ScriptComplex => "scriptc",
            HersheyFont::GothicEnglish => "gothiceng",
            HersheyFont::GothicGerman => "gothicger",
            HersheyFont::GothicItalian => "gothicit",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            HersheyFont::Roman => "Hershey Roman",
            HersheyFont::ScriptSimplex => "Hershey Script Simplex",
            HersheyFont::ScriptComplex => "Hershey Script Complex",
            HersheyFont::GothicEnglish => "Hershey Gothic English",
            HersheyFont::GothicGerman => "Hershey Gothic German",
            HersheyFont::GothicItalian => "Hershey Gothic Italian",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HersheyFont::Roman => "Classic architectural lettering",
            HersheyFont::ScriptSimplex => "Casual hand-written style",
            HersheyFont::ScriptComplex => "More elaborate script",
            HersheyFont::GothicEnglish => "Blackletter, English form",
            HersheyFont::GothicGerman => "Blackletter, German form",
            HersheyFont::GothicItalian => "Blackletter, Italian form",
        }
    }

    /// Whether stroke data for this face ships with the crate.
    pub fn is_bundled(self) -> bool {
        matches!(self, HersheyFont::Roman)
    }
}

impl fmt::Display for HersheyFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Configuration for hand-drawn text rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub font: HersheyFont,
    /// Glyph cell height in drawing units
    pub size: f64,
    /// Multiplier on the per-character advance
    pub letter_spacing: f64,
    /// Width of a space, in letter-spacing units
    pub word_spacing: f64,
    /// Shifts glyphs down (positive) or up (negative)
    pub baseline_offset: f64,
    /// Peak-to-peak jitter per point, in drawing units
    pub wobble: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font: HersheyFont::Roman,
            size: 12.0,
            letter_spacing: 1.0,
            word_spacing: 2.0,
            baseline_offset: 0.0,
            wobble: 0.3,
        }
    }
}

impl TextConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive(self.size).map_err(|e| ConfigError::value("size", e))?;
        check_non_negative(self.letter_spacing)
            .map_err(|e| ConfigError::value("letter_spacing", e))?;
        check_non_negative(self.word_spacing)
            .map_err(|e| ConfigError::value("word_spacing", e))?;
        crate::types::check_finite(self.baseline_offset)
            .map_err(|e| ConfigError::value("baseline_offset", e))?;
        check_non_negative(self.wobble).map_err(|e| ConfigError::value("wobble", e))?;
        Ok(())
    }
}

/// Renders text with a hand-drawn wabi-sabi aesthetic.
#[derive(Debug, Clone, Default)]
pub struct HandTextRenderer {
    config: TextConfig,
}

impl HandTextRenderer {
    pub fn new(config: TextConfig) -> Self {
        if !config.font.is_bundled() {
            crate::log::warn!(font = %config.font, "font not bundled, using Roman strokes");
        }
        Self { config }
    }

    pub fn try_new(config: TextConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    /// Horizontal advance after one non-space character.
    pub fn advance(&self) -> f64 {
        self.config.size * self.config.letter_spacing * 1.5
    }

    /// Horizontal advance of a space.
    pub fn space_advance(&self) -> f64 {
        self.config.size * self.config.letter_spacing * self.config.word_spacing
    }

    /// Render a single character as stroke paths.
    ///
    /// `(x, y)` is the top-left corner of the glyph cell. Characters
    /// without a glyph render as nothing.
    pub fn render_character(&self, c: char, x: f64, y: f64, seed: u64) -> Vec<Path> {
        let Some(glyph) = glyphs::roman(c.to_ascii_uppercase()) else {
            crate::log::trace!(?c, "no glyph");
            return Vec::new();
        };

        let size = self.config.size;
        let top = y + self.config.baseline_offset;
        let wobble = self.config.wobble;
        let mut rng = Rng::new(seed);

        glyph
            .iter()
            .map(|stroke| {
                stroke
                    .iter()
                    .map(|&(px, py)| {
                        let dx = (rng.next_f64() - 0.5) * wobble;
                        let dy = (rng.next_f64() - 0.5) * wobble;
                        dvec2(x + px * size + dx, top + (1.0 - py) * size + dy)
                    })
                    .collect()
            })
            .collect()
    }

    /// Render a string of text as stroke paths starting at `(x, y)`.
    pub fn render_text(&self, text: &str, x: f64, y: f64) -> Vec<Path> {
        let mut strokes = Vec::new();
        let mut cursor = x;
        let mut seed = 0u64;

        for c in text.chars() {
            if c == ' ' {
                cursor += self.space_advance();
                continue;
            }
            strokes.extend(self.render_character(c, cursor, y, seed));
            cursor += self.advance();
            seed += 1;
        }

        strokes
    }

    /// Total advance width of `text`.
    pub fn measure(&self, text: &str) -> f64 {
        text.chars()
            .map(|c| {
                if c == ' ' {
                    self.space_advance()
                } else {
                    self.advance()
                }
            })
            .sum()
    }

    /// Cell origin for `text` centered horizontally on `anchor`.
    pub fn centered_origin(&self, text: &str, anchor: DVec2) -> DVec2 {
        dvec2(anchor.x - self.measure(text) / 2.0, anchor.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let renderer = HandTextRenderer::default();
        assert_eq!(renderer.config().font, HersheyFont::Roman);
        assert_eq!(renderer.config().size, 12.0);
        assert_eq!(renderer.config().wobble, 0.3);
    }

    #[test]
    fn custom_config() {
        let config = TextConfig {
            size: 24.0,
            wobble: 0.5,
            ..Default::default()
        };
        let renderer = HandTextRenderer::try_new(config).unwrap();
        assert_eq!(renderer.config().size, 24.0);
        assert_eq!(renderer.config().wobble, 0.5);
    }

    #[test]
    fn font_metadata() {
        assert_eq!(HersheyFont::ScriptSimplex.id(), "scriptsx");
        assert_eq!(HersheyFont::Roman.to_string(), "Hershey Roman");
        assert!(HersheyFont::ALL.iter().filter(|f| f.is_bundled()).count() == 1);
    }

    #[test]
    fn zero_wobble_is_exact() {
        let renderer = HandTextRenderer::new(TextConfig {
            wobble: 0.0,
            ..Default::default()
        });
        let strokes = renderer.render_character('L', 10.0, 20.0, 0);
        // L: top-left (0,1) -> bottom-left (0,0) -> bottom-right (0.8,0)
        assert_eq!(
            strokes,
            vec![vec![dvec2(10.0, 20.0), dvec2(10.0, 32.0), dvec2(10.0 + 0.8 * 12.0, 32.0)]]
        );
    }

    #[test]
    fn baseline_offset_shifts_down() {
        let renderer = HandTextRenderer::new(TextConfig {
            wobble: 0.0,
            baseline_offset: 3.0,
            ..Default::default()
        });
        let strokes = renderer.render_character('-', 0.0, 0.0, 0);
        assert_eq!(strokes[0][0].y, 3.0 + 6.0);
    }

    #[test]
    fn invalid_size() {
        let bad = TextConfig {
            size: -1.0,
            ..Default::default()
        };
        assert!(HandTextRenderer::try_new(bad).is_err());
    }
}
