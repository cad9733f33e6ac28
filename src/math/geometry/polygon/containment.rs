// src/math/geometry/polygon/containment.rs

//! Geschlossene Enthaltenseins-Prädikate: Punkte auf dem Rand gelten als enthalten.
//!
//! Die Prädikate werten nur den äußeren Ring aus und liefern für degenerierte
//! Eingaben (doppelte oder kollineare Vertices, Segmente der Länge 0) `false`
//! bzw. das Ergebnis des Punkt-Tests, niemals einen Panic.

use crate::math::{
    geometry::{polygon::core::Polygon, rectangle::Rectangle},
    types::Point2D,
};
use geo::algorithm::coordinate_position::{CoordPos, CoordinatePosition};
use geo::algorithm::line_intersection::{LineIntersection, line_intersection};
use geo::Line;

/// Liegt `point` innerhalb oder auf dem Rand des Polygons?
pub fn contains_point(polygon: &Polygon, point: Point2D) -> bool {
    if !point.x.is_finite() || !point.y.is_finite() {
        return false;
    }
    polygon.as_geo().coordinate_position(&point) != CoordPos::Outside
}

/// Liegt die Strecke `start`-`end` vollständig innerhalb oder auf dem Rand?
///
/// Die Strecke wird an allen Berührpunkten mit dem Rand aufgeteilt; zwischen
/// zwei aufeinanderfolgenden Berührpunkten liegt sie entweder ganz innen oder
/// ganz außen, daher genügt je ein Mittelpunkt-Test.
pub fn contains_segment(polygon: &Polygon, start: Point2D, end: Point2D) -> bool {
    if !contains_point(polygon, start) || !contains_point(polygon, end) {
        return false;
    }

    let direction = end - start;
    let length_sq = direction.x * direction.x + direction.y * direction.y;
    if length_sq == 0.0 {
        return true;
    }

    let segment = Line::new(start, end);
    let parameter = |p: Point2D| {
        let offset = p - start;
        ((offset.x * direction.x + offset.y * direction.y) / length_sq).clamp(0.0, 1.0)
    };

    let mut cuts = vec![0.0, 1.0];
    for edge in polygon.as_geo().exterior().lines() {
        if edge.start == edge.end {
            continue;
        }
        match line_intersection(segment, edge) {
            None => {}
            Some(LineIntersection::SinglePoint {
                intersection,
                is_proper,
            }) => {
                // Echte Kreuzung: die Strecke verlässt das Polygon.
                if is_proper {
                    return false;
                }
                cuts.push(parameter(intersection));
            }
            Some(LineIntersection::Collinear { intersection }) => {
                cuts.push(parameter(intersection.start));
                cuts.push(parameter(intersection.end));
            }
        }
    }

    cuts.sort_by(f64::total_cmp);
    cuts.dedup();

    cuts.windows(2).all(|pair| {
        let t = (pair[0] + pair[1]) * 0.5;
        contains_point(
            polygon,
            Point2D {
                x: start.x + direction.x * t,
                y: start.y + direction.y * t,
            },
        )
    })
}

/// Liegen alle Ecken und der gesamte Rand des Rechtecks im Polygon?
///
/// Für ein einfaches Polygon ohne Löcher folgt daraus auch das Enthaltensein
/// des Rechteck-Inneren.
pub fn contains_rectangle(polygon: &Polygon, rectangle: &Rectangle) -> bool {
    let corners = rectangle.corners();
    corners.iter().all(|&c| contains_point(polygon, c))
        && (0..4).all(|i| contains_segment(polygon, corners[i], corners[(i + 1) % 4]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::point;

    fn l_shape() -> Polygon {
        Polygon::new(vec![
            point(0.0, 0.0),
            point(4.0, 0.0),
            point(4.0, 2.0),
            point(2.0, 2.0),
            point(2.0, 4.0),
            point(0.0, 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_contains_point_includes_boundary() {
        let polygon = l_shape();
        assert!(contains_point(&polygon, point(1.0, 1.0)));
        assert!(contains_point(&polygon, point(0.0, 0.0)));
        assert!(contains_point(&polygon, point(3.0, 2.0)));
        assert!(!contains_point(&polygon, point(3.0, 3.0)));
        assert!(!contains_point(&polygon, point(f64::NAN, 1.0)));
    }

    #[test]
    fn test_segment_through_missing_quadrant() {
        let polygon = l_shape();
        // Beide Endpunkte im L, die Verbindung schneidet die Ecke (2,2) nicht,
        // läuft aber durch das fehlende Quadrat.
        assert!(!contains_segment(&polygon, point(4.0, 1.0), point(1.0, 4.0)));
        assert!(!contains_segment(&polygon, point(3.0, 2.0), point(2.0, 3.0)));
    }

    #[test]
    fn test_segment_along_boundary_is_contained() {
        let polygon = l_shape();
        assert!(contains_segment(&polygon, point(0.0, 0.0), point(4.0, 0.0)));
        assert!(contains_segment(&polygon, point(4.0, 2.0), point(0.0, 2.0)));
        assert!(contains_segment(&polygon, point(0.0, 0.0), point(2.0, 2.0)));
    }

    #[test]
    fn test_degenerate_segment() {
        let polygon = l_shape();
        assert!(contains_segment(&polygon, point(1.0, 1.0), point(1.0, 1.0)));
        assert!(!contains_segment(&polygon, point(3.0, 3.0), point(3.0, 3.0)));
    }

    #[test]
    fn test_segment_in_polygon_with_repeated_vertices() {
        let polygon = Polygon::new(vec![
            point(0.0, 0.0),
            point(2.0, 0.0),
            point(2.0, 0.0),
            point(4.0, 0.0),
            point(4.0, 4.0),
            point(0.0, 4.0),
        ])
        .unwrap();
        assert!(contains_segment(&polygon, point(0.0, 0.0), point(4.0, 4.0)));
        assert!(contains_segment(&polygon, point(1.0, 0.0), point(3.0, 0.0)));
    }

    #[test]
    fn test_contains_rectangle() {
        let polygon = l_shape();
        let inside = Rectangle::new([
            point(0.0, 0.0),
            point(4.0, 0.0),
            point(4.0, 2.0),
            point(0.0, 2.0),
        ]);
        let crossing = Rectangle::new([
            point(0.0, 0.0),
            point(3.0, 0.0),
            point(3.0, 3.0),
            point(0.0, 3.0),
        ]);
        assert!(contains_rectangle(&polygon, &inside));
        assert!(!contains_rectangle(&polygon, &crossing));
    }
}
