// src/math/geometry/rectangle.rs

use crate::math::{
    error::*,
    geometry::polygon::transformations::{AffineTransform, AffineTransformable},
    types::Point2D,
    utils::{angles, simple_geometry},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ein (möglicherweise gedrehtes) Rechteck aus vier geordneten Ecken.
///
/// Die Ecken laufen einmal um das Rechteck herum; Seite 0 ist `c0 -> c1`,
/// Seite 1 ist `c1 -> c2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    corners: [Point2D; 4],
}

impl Rectangle {
    /// Erwartet vier Ecken in Umlaufreihenfolge mit rechten Winkeln.
    pub fn new(corners: [Point2D; 4]) -> Self {
        Self { corners }
    }

    /// Liest die ersten vier Vertices des äußeren Rings,
    /// z.B. aus `MinimumRotatedRect`.
    pub fn from_geo_polygon(polygon: &geo::Polygon<f64>) -> MathResult<Self> {
        let ring = &polygon.exterior().0;
        if ring.len() < 4 {
            return Err(MathError::GeometricFailure {
                operation: format!("rectangle from ring with {} vertices", ring.len()),
            });
        }
        Ok(Self::new([ring[0], ring[1], ring[2], ring[3]]))
    }

    pub fn corners(&self) -> [Point2D; 4] {
        self.corners
    }

    /// Längen der Seiten `c0 -> c1` und `c1 -> c2`.
    pub fn side_lengths(&self) -> (f64, f64) {
        let [c0, c1, c2, _] = self.corners;
        (
            simple_geometry::distance(c0, c1),
            simple_geometry::distance(c1, c2),
        )
    }

    pub fn long_side(&self) -> f64 {
        let (a, b) = self.side_lengths();
        a.max(b)
    }

    pub fn short_side(&self) -> f64 {
        let (a, b) = self.side_lengths();
        a.min(b)
    }

    pub fn area(&self) -> f64 {
        let [c0, c1, c2, _] = self.corners;
        simple_geometry::cross_product_2d(c1 - c0, c2 - c1).abs()
    }

    /// Verhältnis lange / kurze Seite; unendlich für entartete Rechtecke.
    pub fn aspect_ratio(&self) -> f64 {
        let short = self.short_side();
        if short == 0.0 {
            return f64::INFINITY;
        }
        self.long_side() / short
    }

    pub fn centroid(&self) -> Point2D {
        let sum = self
            .corners
            .iter()
            .fold(Point2D { x: 0.0, y: 0.0 }, |acc, &corner| acc + corner);
        sum / 4.0
    }

    /// Winkel der längsten Seite zur positiven x-Achse in Grad, in (-90°, 90°].
    /// Bei gleich langen Seiten zählt die Seite `c1 -> c2`.
    pub fn angle_degrees(&self) -> f64 {
        let [c0, c1, c2, _] = self.corners;
        let (a, b) = self.side_lengths();
        if a > b {
            angles::line_angle(c0, c1)
        } else {
            angles::line_angle(c1, c2)
        }
    }

    /// Geschlossenes `geo::Polygon` mit den vier Ecken.
    pub fn to_geo_polygon(&self) -> geo::Polygon<f64> {
        geo::Polygon::new(geo::LineString::from(self.corners.to_vec()), vec![])
    }
}

impl AffineTransformable for Rectangle {
    fn transform(&self, transform: &AffineTransform) -> MathResult<Self> {
        Ok(Self::new(self.corners.map(|c| transform.transform_point(c))))
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.centroid();
        write!(
            f,
            "Rectangle({:.3} x {:.3} at ({:.3}, {:.3}), {:.2}°)",
            self.long_side(),
            self.short_side(),
            c.x,
            c.y,
            self.angle_degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::point;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_axis_aligned_rectangle() {
        let rect = Rectangle::new([
            point(0.0, 0.0),
            point(6.0, 0.0),
            point(6.0, 2.0),
            point(0.0, 2.0),
        ]);
        assert_eq!(rect.long_side(), 6.0);
        assert_eq!(rect.short_side(), 2.0);
        assert_eq!(rect.area(), 12.0);
        assert_eq!(rect.aspect_ratio(), 3.0);
        assert_eq!(rect.centroid(), point(3.0, 1.0));
        assert_eq!(rect.angle_degrees(), 0.0);
    }

    #[test]
    fn test_angle_uses_longest_side() {
        let rect = Rectangle::new([
            point(0.0, 0.0),
            point(0.0, 2.0),
            point(-6.0, 2.0),
            point(-6.0, 0.0),
        ]);
        assert_eq!(rect.angle_degrees(), 0.0);

        let tall = Rectangle::new([
            point(0.0, 0.0),
            point(0.0, 5.0),
            point(-1.0, 5.0),
            point(-1.0, 0.0),
        ]);
        assert_eq!(tall.angle_degrees(), 90.0);
    }

    #[test]
    fn test_rotated_rectangle() {
        let rect = Rectangle::new([
            point(0.0, 0.0),
            point(4.0, 4.0),
            point(3.0, 5.0),
            point(-1.0, 1.0),
        ]);
        assert_abs_diff_eq!(rect.angle_degrees(), 45.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rect.area(), 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rect.aspect_ratio(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_rectangle_ratio() {
        let flat = Rectangle::new([
            point(0.0, 0.0),
            point(1.0, 0.0),
            point(1.0, 0.0),
            point(0.0, 0.0),
        ]);
        assert!(flat.aspect_ratio().is_infinite());
        assert_eq!(flat.area(), 0.0);
    }

    #[test]
    fn test_from_geo_polygon_roundtrip() {
        let rect = Rectangle::new([
            point(1.0, 1.0),
            point(3.0, 1.0),
            point(3.0, 2.0),
            point(1.0, 2.0),
        ]);
        let back = Rectangle::from_geo_polygon(&rect.to_geo_polygon()).unwrap();
        assert_eq!(back, rect);
    }
}
