// src/math/algorithms/inscribed/sampler.rs

use crate::math::{
    error::*,
    geometry::polygon::{Polygon, contains_point},
    types::{Point2D, point},
};
use nalgebra::Vector2;

/// Ein Gitterpunkt mit ganzzahligem Gitterindex und Weltposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub grid: Vector2<i64>,
    pub position: Point2D,
}

/// Gleichmäßiges Punktgitter über der Bounding Box eines Polygons.
///
/// Gitterabstand `l = max(Breite, Höhe) / resolution`; es werden `(n+1) x (n+1)`
/// Punkte erzeugt und nur die im Polygon (inklusive Rand) behalten.
/// Koordinaten werden als `origin + extent * (i / n)` berechnet, damit der
/// Index `n` exakt auf der Kante der Bounding Box landet.
/// Reihenfolge: zeilenweise von unten nach oben, innerhalb einer Zeile von links nach rechts.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    origin: Point2D,
    extent: f64,
    resolution: usize,
    points: Vec<SamplePoint>,
}

impl SampleGrid {
    pub fn sample(polygon: &Polygon, resolution: usize) -> MathResult<Self> {
        if resolution == 0 {
            return Err(MathError::InvalidConfiguration {
                message: "Sampling resolution must be greater than 0".to_string(),
            });
        }

        let bounds = polygon.bounds();
        let mut grid = Self {
            origin: bounds.min,
            extent: bounds.longest_side(),
            resolution,
            points: Vec::new(),
        };

        let n = resolution as i64;
        for j in 0..=n {
            for i in 0..=n {
                let position = grid.position_of(Vector2::new(i, j));
                if contains_point(polygon, position) {
                    grid.points.push(SamplePoint {
                        grid: Vector2::new(i, j),
                        position,
                    });
                }
            }
        }

        Ok(grid)
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn spacing(&self) -> f64 {
        self.extent / self.resolution as f64
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Weltposition eines (nicht notwendigerweise gesampelten) Gitterindex.
    pub fn position_of(&self, grid: Vector2<i64>) -> Point2D {
        let n = self.resolution as f64;
        point(
            self.origin.x + self.extent * (grid.x as f64 / n),
            self.origin.y + self.extent * (grid.y as f64 / n),
        )
    }
}
