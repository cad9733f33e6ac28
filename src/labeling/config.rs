// src/labeling/config.rs
use crate::math::{
    algorithms::inscribed::{ErosionConfig, SearchConfig},
    error::{MathError, MathResult},
};
use serde::{Deserialize, Serialize};

/// Wie das Rechteck für ein Label gesucht wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Gittersuche mit Auflösungs-Eskalation, berücksichtigt das Seitenverhältnis.
    #[default]
    Exhaustive,
    /// Nur die Erosions-Heuristik.
    Erosion,
    /// Erosion, bei `ErosionExhausted` weiter mit der Gittersuche.
    ErosionWithFallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelConfig {
    pub search: SearchConfig,
    pub erosion: ErosionConfig,
    pub strategy: Strategy,
    /// Abstand zwischen zwei Glyphen in Glyph-Einheiten.
    pub glyph_spacing: f64,
}

impl LabelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn with_erosion(mut self, erosion: ErosionConfig) -> Self {
        self.erosion = erosion;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_glyph_spacing(mut self, spacing: f64) -> Self {
        self.glyph_spacing = spacing;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        self.search.validate()?;
        self.erosion.validate()?;

        if !(self.glyph_spacing.is_finite() && self.glyph_spacing >= 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Glyph spacing {} must be finite and >= 0", self.glyph_spacing),
            });
        }

        Ok(())
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            erosion: ErosionConfig::default(),
            strategy: Strategy::default(),
            glyph_spacing: 100.0,
        }
    }
}
