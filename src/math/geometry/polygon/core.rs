// src/math/geometry/polygon/core.rs

use crate::math::{
    error::*,
    geometry::{
        polygon::transformations::{AffineTransform, AffineTransformable},
        rectangle::Rectangle,
    },
    types::{Bounds2D, Point2D},
    utils::constants::EPSILON,
};
use geo::{Area, BoundingRect, Centroid, MinimumRotatedRect, Simplify};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Einfaches Polygon (nur äußerer Ring), das beim Erstellen validiert wird.
///
/// Invariante: mindestens 3 unterschiedliche Vertices, endliche Koordinaten
/// und eine Fläche ungleich Null. Löcher werden nicht unterstützt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    inner: geo::Polygon<f64>,
}

impl Polygon {
    /// Erstellt ein Polygon aus einer Liste von Vertices.
    /// Der Ring wird automatisch geschlossen.
    pub fn new(vertices: Vec<Point2D>) -> MathResult<Self> {
        Self::from_geo(geo::Polygon::new(geo::LineString::from(vertices), vec![]))
    }

    /// Übernimmt ein `geo::Polygon`. Innere Ringe werden verworfen.
    pub fn from_geo(polygon: geo::Polygon<f64>) -> MathResult<Self> {
        let (exterior, interiors) = polygon.into_inner();
        if !interiors.is_empty() {
            tracing::debug!("Dropping {} interior ring(s)", interiors.len());
        }
        let inner = geo::Polygon::new(exterior, vec![]);

        if inner.exterior().coords().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
            return Err(MathError::InvalidPolygon {
                reason: "non-finite coordinate".to_string(),
            });
        }

        let distinct = distinct_vertex_count(inner.exterior().0.as_slice());
        if distinct < 3 {
            return Err(MathError::InvalidPolygon {
                reason: format!("expected at least 3 distinct vertices, got {distinct}"),
            });
        }

        let area = inner.unsigned_area();
        let extent = inner
            .bounding_rect()
            .map(|r| r.width().max(r.height()))
            .unwrap_or(0.0);
        if area <= EPSILON * extent * extent {
            return Err(MathError::InvalidPolygon {
                reason: format!("area {area} is zero"),
            });
        }

        Ok(Self { inner })
    }

    /// Das zugrunde liegende `geo::Polygon`.
    pub fn as_geo(&self) -> &geo::Polygon<f64> {
        &self.inner
    }

    /// Vertices des geschlossenen Rings (erster == letzter).
    pub fn vertices(&self) -> &[Point2D] {
        &self.inner.exterior().0
    }

    /// Anzahl der Knoten des Rings, inklusive des schließenden Punktes.
    pub fn nodes_count(&self) -> usize {
        self.inner.exterior().0.len()
    }

    pub fn area(&self) -> f64 {
        self.inner.unsigned_area()
    }

    /// Achsenparallele Hülle ("envelope").
    pub fn bounds(&self) -> Bounds2D {
        // Ein validiertes Polygon hat immer eine Bounding Box.
        self.inner
            .bounding_rect()
            .map(Bounds2D::from_rect)
            .unwrap_or(Bounds2D {
                min: Point2D { x: 0.0, y: 0.0 },
                max: Point2D { x: 0.0, y: 0.0 },
            })
    }

    /// Flächenschwerpunkt.
    pub fn centroid(&self) -> Point2D {
        self.inner
            .centroid()
            .map(|p| p.0)
            .unwrap_or_else(|| self.bounds().center())
    }

    /// Kleinstes (beliebig gedrehtes) umschließendes Rechteck.
    pub fn minimum_rotated_rectangle(&self) -> MathResult<Rectangle> {
        let envelope = self
            .inner
            .minimum_rotated_rect()
            .ok_or_else(|| MathError::GeometricFailure {
                operation: "minimum rotated rectangle".to_string(),
            })?;
        Rectangle::from_geo_polygon(&envelope)
    }

    /// Douglas-Peucker-Vereinfachung. Schlägt fehl, wenn das Ergebnis degeneriert.
    pub fn simplify(&self, tolerance: f64) -> MathResult<Self> {
        Self::from_geo(self.inner.simplify(tolerance))
    }
}

impl Area<f64> for Polygon {
    fn signed_area(&self) -> f64 {
        self.inner.signed_area()
    }

    fn unsigned_area(&self) -> f64 {
        self.inner.unsigned_area()
    }
}

impl AffineTransformable for Polygon {
    fn transform(&self, transform: &AffineTransform) -> MathResult<Self> {
        Self::from_geo(transform.apply(&self.inner))
    }
}

/// Display-Implementierung für Debugging.
impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Polygon({} vertices, area {:.3})",
            self.nodes_count().saturating_sub(1),
            self.area()
        )
    }
}

impl TryFrom<geo::Polygon<f64>> for Polygon {
    type Error = MathError;

    fn try_from(polygon: geo::Polygon<f64>) -> Result<Self, Self::Error> {
        Self::from_geo(polygon)
    }
}

impl From<Polygon> for geo::Polygon<f64> {
    fn from(polygon: Polygon) -> Self {
        polygon.inner
    }
}

/// Auswahlregel für mehrteilige Geometrien: der Teil mit der größten Fläche,
/// bei Gleichstand der zuerst gefundene.
pub fn largest_by_area<'a, P>(parts: impl IntoIterator<Item = &'a P>) -> Option<&'a P>
where
    P: Area<f64> + 'a,
{
    parts.into_iter().fold(None, |best: Option<&'a P>, part| match best {
        Some(current) if current.unsigned_area() >= part.unsigned_area() => Some(current),
        _ => Some(part),
    })
}

fn distinct_vertex_count(ring: &[Point2D]) -> usize {
    let mut distinct: Vec<Point2D> = Vec::with_capacity(ring.len());
    for &coord in ring {
        if !distinct.contains(&coord) {
            distinct.push(coord);
        }
    }
    distinct.len()
}
