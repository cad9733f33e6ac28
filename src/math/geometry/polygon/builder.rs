// src/math/geometry/polygon/builder.rs

use crate::math::error::MathResult;
use crate::math::geometry::polygon::core::Polygon;
use crate::math::types::{Point2D, point};
use rand::Rng;
use std::f64::consts::TAU;

/// Geometrie-Generatoren, die `Vec<Point2D>` zurückgeben.
pub struct ShapeGenerators;

impl ShapeGenerators {
    pub fn create_circle_vertices(center: Point2D, radius: f64, segments: usize) -> Vec<Point2D> {
        let mut vertices = Vec::with_capacity(segments);
        for i in 0..segments {
            let angle = (i as f64 / segments as f64) * TAU;
            vertices.push(center + point(radius * angle.cos(), radius * angle.sin()));
        }
        vertices
    }

    pub fn create_star_vertices(
        center: Point2D,
        inner_radius: f64,
        outer_radius: f64,
        num_points: usize,
    ) -> Vec<Point2D> {
        let mut vertices = Vec::with_capacity(num_points * 2);
        for i in 0..(num_points * 2) {
            let angle = (i as f64 / (num_points * 2) as f64) * TAU - TAU / 4.0; // Offset für Spitze nach oben
            let radius = if i % 2 == 0 {
                outer_radius
            } else {
                inner_radius
            };
            vertices.push(center + point(radius * angle.cos(), radius * angle.sin()));
        }
        vertices
    }

    pub fn create_regular_polygon_vertices(
        center: Point2D,
        radius: f64,
        sides: usize,
    ) -> Vec<Point2D> {
        if sides < 3 {
            return Vec::new();
        } // Mindestens ein Dreieck
        Self::create_circle_vertices(center, radius, sides)
    }

    /// Sternförmiges Polygon mit zufälligen Radien in `[min_radius, max_radius]`.
    ///
    /// Die Winkel sind gleichmäßig verteilt, daher ist jedes Ergebnis einfach
    /// (selbstüberschneidungsfrei) und vom Zentrum aus sternförmig.
    pub fn create_random_star_vertices(
        center: Point2D,
        min_radius: f64,
        max_radius: f64,
        num_vertices: usize,
        rng: &mut impl Rng,
    ) -> Vec<Point2D> {
        (0..num_vertices)
            .map(|i| {
                let angle = (i as f64 / num_vertices as f64) * TAU;
                let radius = rng.random_range(min_radius..=max_radius);
                center + point(radius * angle.cos(), radius * angle.sin())
            })
            .collect()
    }

    /// Bequemer Weg zu einem validierten Polygon.
    pub fn build(vertices: Vec<Point2D>) -> MathResult<Polygon> {
        Polygon::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_generators_produce_valid_polygons() {
        let center = point(10.0, 10.0);
        let circle = ShapeGenerators::create_circle_vertices(center, 2.0, 32);
        assert_eq!(circle.len(), 32);
        assert!(ShapeGenerators::build(circle).is_ok());

        let star = ShapeGenerators::create_star_vertices(center, 1.0, 3.0, 5);
        assert_eq!(star.len(), 10);
        assert!(ShapeGenerators::build(star).is_ok());

        assert!(ShapeGenerators::create_regular_polygon_vertices(center, 1.0, 2).is_empty());
    }

    #[test]
    fn test_random_star_is_deterministic_per_seed() {
        let center = point(0.0, 0.0);
        let a = ShapeGenerators::create_random_star_vertices(
            center,
            1.0,
            4.0,
            12,
            &mut StdRng::seed_from_u64(7),
        );
        let b = ShapeGenerators::create_random_star_vertices(
            center,
            1.0,
            4.0,
            12,
            &mut StdRng::seed_from_u64(7),
        );
        assert_eq!(a, b);
        assert!(ShapeGenerators::build(a).is_ok());
    }
}
