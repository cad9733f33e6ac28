// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Invalid polygon: {reason}")]
    InvalidPolygon { reason: String },

    #[error("No inscribed rectangle found (last resolution {resolution}, limit {max_resolution})")]
    NoRectangleFound {
        resolution: usize,
        max_resolution: usize,
    },

    #[error("Erosion exhausted: {remaining_ratio:.4} of the original area left without a contained rectangle")]
    ErosionExhausted { remaining_ratio: f64 },

    #[error("Degenerate text geometry for {text:?}: width is zero")]
    DegenerateText { text: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Geometric calculation failed: {operation}")]
    GeometricFailure { operation: String },
}

pub type MathResult<T> = Result<T, MathError>;

impl MathError {
    /// Nur `NoRectangleFound` kann durch eine höhere Auflösung behoben werden.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MathError::NoRectangleFound { .. })
    }
}
