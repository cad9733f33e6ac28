// src/math/algorithms/inscribed/config.rs
use crate::math::error::{MathError, MathResult};
use serde::{Deserialize, Serialize};

/// Parameter der exhaustiven Rechtecksuche und ihrer Auflösungs-Eskalation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Startauflösung: Gitterpunkte pro Seite der Bounding Box.
    pub resolution: usize,
    /// Erhöhung der Auflösung nach einem erfolglosen Versuch.
    pub resolution_step: usize,
    /// Höchste Auflösung, die noch versucht wird.
    pub max_resolution: usize,
    /// Erlaubte Abweichung vom Ziel-Seitenverhältnis.
    pub aspect_ratio_tolerance: f64,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_resolution_step(mut self, step: usize) -> Self {
        self.resolution_step = step;
        self
    }

    pub fn with_max_resolution(mut self, max_resolution: usize) -> Self {
        self.max_resolution = max_resolution;
        self
    }

    pub fn with_aspect_ratio_tolerance(mut self, tolerance: f64) -> Self {
        self.aspect_ratio_tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.resolution == 0 {
            return Err(MathError::InvalidConfiguration {
                message: "Resolution must be greater than 0".to_string(),
            });
        }

        if self.resolution_step == 0 {
            return Err(MathError::InvalidConfiguration {
                message: "Resolution step must be greater than 0".to_string(),
            });
        }

        if self.max_resolution < self.resolution {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Max resolution {} is below the initial resolution {}",
                    self.max_resolution, self.resolution
                ),
            });
        }

        if !(self.aspect_ratio_tolerance >= 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: "Aspect ratio tolerance must be non-negative".to_string(),
            });
        }

        Ok(())
    }

    /// Die Folge der Auflösungen, die nacheinander versucht werden.
    pub fn resolutions(&self) -> impl Iterator<Item = usize> + '_ {
        (self.resolution..=self.max_resolution).step_by(self.resolution_step.max(1))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            resolution: 20,
            resolution_step: 5,
            max_resolution: 60,
            aspect_ratio_tolerance: 0.1,
        }
    }
}

/// Parameter der schnellen Erosions-Heuristik.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErosionConfig {
    /// Erosionsschritt als Anteil der längsten Seite des umschließenden Rechtecks.
    pub step_ratio: f64,
    /// Abbruch, sobald die Restfläche unter diesen Anteil der Ausgangsfläche fällt.
    pub area_floor_ratio: f64,
}

impl ErosionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step_ratio(mut self, ratio: f64) -> Self {
        self.step_ratio = ratio;
        self
    }

    pub fn with_area_floor_ratio(mut self, ratio: f64) -> Self {
        self.area_floor_ratio = ratio;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if !(self.step_ratio > 0.0 && self.step_ratio < 1.0) {
            return Err(MathError::InvalidConfiguration {
                message: "Erosion step ratio must be between 0.0 and 1.0".to_string(),
            });
        }

        if !(self.area_floor_ratio > 0.0 && self.area_floor_ratio < 1.0) {
            return Err(MathError::InvalidConfiguration {
                message: "Erosion area floor ratio must be between 0.0 and 1.0".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for ErosionConfig {
    fn default() -> Self {
        Self {
            step_ratio: 0.01,
            area_floor_ratio: 0.02,
        }
    }
}
