// src/math/algorithms/inscribed/search.rs

use super::{
    directions::{DirectionMatrix, is_perpendicular},
    sampler::SampleGrid,
};
use crate::math::{
    error::*,
    geometry::{
        polygon::{Polygon, contains_rectangle},
        rectangle::Rectangle,
    },
};
use tracing::debug;

/// Filter für das Seitenverhältnis der Kandidaten.
///
/// Verglichen wird immer lange / kurze Seite, also ein Wert `>= 1`, unabhängig
/// von der Lage des Rechtecks. Ein Ziel aus Breite / Höhe `< 1` (z.B. hoher,
/// schmaler Text) muss vorher invertiert werden, sonst wird nichts akzeptiert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    pub target: f64,
    pub tolerance: f64,
}

impl AspectRatio {
    pub fn new(target: f64, tolerance: f64) -> Self {
        Self { target, tolerance }
    }

    pub fn accepts(&self, rectangle: &Rectangle) -> bool {
        let ratio = rectangle.aspect_ratio();
        ratio.is_finite()
            && self.target - self.tolerance <= ratio
            && ratio <= self.target + self.tolerance
    }
}

/// Exhaustive Suche nach den flächengrößten einbeschriebenen Rechtecken ("mir").
///
/// Für jedes Tripel `i < j < k`, bei dem `p_i -> p_j` und `p_i -> p_k` im Polygon
/// liegen und senkrecht aufeinander stehen, wird das Rechteck über
/// Parallelogramm-Ergänzung `p_j - p_i + p_k` gebildet. Zurückgegeben werden alle
/// Kandidaten mit maximaler Fläche in Entdeckungsreihenfolge; die Liste ist leer,
/// wenn bei dieser Auflösung nichts gefunden wurde.
///
/// Die Suche arbeitet in dem Koordinatensystem, in dem das Polygon übergeben
/// wird; für gedrehte Polygone siehe [`super::normalize`].
pub fn find_inscribed_rectangles(
    polygon: &Polygon,
    resolution: usize,
    aspect_ratio: Option<AspectRatio>,
) -> MathResult<Vec<Rectangle>> {
    let grid = SampleGrid::sample(polygon, resolution)?;
    let directions = DirectionMatrix::build(polygon, &grid);
    let points = grid.points();

    // Fläche in Gittereinheiten: exakt, daher sind Gleichstände exakt erkennbar.
    let mut max_area: i64 = 0;
    let mut retained = Vec::new();
    let mut candidates = 0usize;

    for (i, origin) in points.iter().enumerate() {
        let row = directions.row(i);
        for (offset, &(j, u_ij)) in row.iter().enumerate() {
            for &(k, u_ik) in &row[offset + 1..] {
                if !is_perpendicular(&u_ij, &u_ik) {
                    continue;
                }
                candidates += 1;

                let area = (u_ij.x * u_ik.y - u_ij.y * u_ik.x).abs();
                if area == 0 || area < max_area {
                    continue;
                }

                let opposite = grid.position_of(points[j].grid - origin.grid + points[k].grid);
                let rectangle = Rectangle::new([
                    origin.position,
                    points[k].position,
                    opposite,
                    points[j].position,
                ]);

                if let Some(filter) = aspect_ratio {
                    if !filter.accepts(&rectangle) {
                        continue;
                    }
                }
                if !contains_rectangle(polygon, &rectangle) {
                    continue;
                }

                if area > max_area {
                    max_area = area;
                    retained.clear();
                }
                retained.push(rectangle);
            }
        }
    }

    debug!(
        resolution,
        points = points.len(),
        directions = directions.recorded(),
        candidates,
        retained = retained.len(),
        "inscribed rectangle search"
    );

    Ok(retained)
}
