// src/math/algorithms/inscribed/directions.rs

use super::sampler::SampleGrid;
use crate::math::geometry::polygon::{Polygon, contains_segment};
use nalgebra::Vector2;

/// Richtungsvektoren (in Gittereinheiten) zwischen gesampelten Punkten,
/// deren Verbindungsstrecke vollständig im Polygon liegt.
///
/// Dünn besetzt: Zeile `i` enthält nur Einträge `(j, p_j - p_i)` mit `j > i`,
/// aufsteigend nach `j`. Ein fehlender Eintrag bedeutet "keine Richtung"
/// und ist vom Nullvektor unterscheidbar.
#[derive(Debug, Clone)]
pub struct DirectionMatrix {
    rows: Vec<Vec<(usize, Vector2<i64>)>>,
}

impl DirectionMatrix {
    /// O(n²) Strecken-Tests über alle ungeordneten Punktpaare.
    pub fn build(polygon: &Polygon, grid: &SampleGrid) -> Self {
        let points = grid.points();
        let rows = points
            .iter()
            .enumerate()
            .map(|(i, a)| {
                points
                    .iter()
                    .enumerate()
                    .skip(i + 1)
                    .filter(|(_, b)| contains_segment(polygon, a.position, b.position))
                    .map(|(j, b)| (j, b.grid - a.grid))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Anzahl der Punkte (Zeilen).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Alle Einträge `(j, Richtung)` der Zeile `i`, aufsteigend nach `j`.
    pub fn row(&self, i: usize) -> &[(usize, Vector2<i64>)] {
        self.rows.get(i).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Richtung von Punkt `i` zu Punkt `j`, falls die Strecke im Polygon liegt.
    /// Symmetrisch: `direction(j, i) == -direction(i, j)`.
    pub fn direction(&self, i: usize, j: usize) -> Option<Vector2<i64>> {
        if i == j {
            return None;
        }
        let (low, high, sign) = if i < j { (i, j, 1) } else { (j, i, -1) };
        let row = self.row(low);
        row.binary_search_by_key(&high, |&(k, _)| k)
            .ok()
            .map(|idx| row[idx].1 * sign)
    }

    /// Anzahl der erfassten Richtungen.
    pub fn recorded(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// Exakter Orthogonalitätstest auf Gittervektoren.
pub fn is_perpendicular(a: &Vector2<i64>, b: &Vector2<i64>) -> bool {
    a.dot(b) == 0
}
