// src/math/algorithms/inscribed/erosion.rs

use super::config::ErosionConfig;
use crate::math::{
    error::*,
    geometry::{
        polygon::{Polygon, contains_rectangle, largest_by_area},
        rectangle::Rectangle,
    },
};
use geo::Buffer;
use tracing::{debug, trace};

/// Schnelle Näherung: das Polygon wird schrittweise nach innen gepuffert, bis
/// sein kleinstes umschließendes Rechteck im Original liegt.
///
/// Die Schrittweite ist `step_ratio` mal die lange Seite des umschließenden
/// Rechtecks des Originals. Zerfällt das Polygon, wird mit dem flächengrößten
/// Teil weitergearbeitet. Fällt die Restfläche unter `area_floor_ratio` der
/// Ausgangsfläche, endet die Suche mit `ErosionExhausted`.
pub fn erode_to_rectangle(polygon: &Polygon, config: &ErosionConfig) -> MathResult<Rectangle> {
    config.validate()?;

    let original_area = polygon.area();
    let increment = polygon.minimum_rotated_rectangle()?.long_side() * config.step_ratio;
    let floor = original_area * config.area_floor_ratio;

    let mut current = polygon.clone();
    let mut iterations = 0usize;
    loop {
        let envelope = current.minimum_rotated_rectangle()?;
        if contains_rectangle(polygon, &envelope) {
            debug!(iterations, area = envelope.area(), "erosion found rectangle");
            return Ok(envelope);
        }

        let eroded = current.as_geo().buffer(-increment);
        let Some(part) = largest_by_area(&eroded.0) else {
            return Err(MathError::ErosionExhausted {
                remaining_ratio: 0.0,
            });
        };
        if eroded.0.len() > 1 {
            trace!(parts = eroded.0.len(), "erosion split polygon, keeping largest part");
        }

        current = match Polygon::from_geo(part.clone()) {
            Ok(next) => next,
            // Degenerierter Rest zählt als aufgebraucht.
            Err(MathError::InvalidPolygon { .. }) => {
                return Err(MathError::ErosionExhausted {
                    remaining_ratio: 0.0,
                });
            }
            Err(err) => return Err(err),
        };
        iterations += 1;

        let remaining = current.area();
        if remaining < floor {
            let remaining_ratio = remaining / original_area;
            debug!(iterations, remaining_ratio, "erosion exhausted");
            return Err(MathError::ErosionExhausted { remaining_ratio });
        }
    }
}
