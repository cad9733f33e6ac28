// src/cartography/region.rs

use crate::math::{
    error::*,
    geometry::{
        polygon::{AffineTransform, AffineTransformable, Polygon, largest_by_area},
        projection::Projection,
    },
    types::Bounds2D,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Geometrie einer Region, einmal beim Laden aufgelöst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RegionGeometry {
    SinglePart(Polygon),
    MultiPart(Vec<Polygon>),
}

impl RegionGeometry {
    /// Ein Teil ergibt `SinglePart`, mehrere `MultiPart`.
    pub fn from_parts(mut parts: Vec<Polygon>) -> MathResult<Self> {
        match parts.len() {
            0 => Err(MathError::InvalidPolygon {
                reason: "region has no parts".to_string(),
            }),
            1 => Ok(Self::SinglePart(parts.remove(0))),
            _ => Ok(Self::MultiPart(parts)),
        }
    }

    /// Übernimmt ein `geo::MultiPolygon`; ungültige Teile werden verworfen.
    pub fn from_geo(multi: geo::MultiPolygon<f64>) -> MathResult<Self> {
        let total = multi.0.len();
        let parts: Vec<Polygon> = multi
            .into_iter()
            .filter_map(|part| Polygon::from_geo(part).ok())
            .collect();
        if parts.len() < total {
            debug!(dropped = total - parts.len(), "dropped invalid region parts");
        }
        Self::from_parts(parts)
    }

    pub fn parts(&self) -> &[Polygon] {
        match self {
            Self::SinglePart(polygon) => std::slice::from_ref(polygon),
            Self::MultiPart(parts) => parts.as_slice(),
        }
    }

    /// Der flächengrößte Teil; bei Gleichstand der erste.
    pub fn largest_part(&self) -> Option<&Polygon> {
        largest_by_area(self.parts())
    }

    pub fn area(&self) -> f64 {
        self.parts().iter().map(Polygon::area).sum()
    }

    pub fn nodes_count(&self) -> usize {
        self.parts().iter().map(Polygon::nodes_count).sum()
    }

    pub fn bounds(&self) -> Option<Bounds2D> {
        self.parts()
            .iter()
            .map(Polygon::bounds)
            .reduce(|acc, b| acc.union(&b))
    }

    /// Wendet `f` auf jeden Teil an; ein Fehler bricht ab.
    pub fn try_map_parts<F>(&self, f: F) -> MathResult<Self>
    where
        F: Fn(&Polygon) -> MathResult<Polygon>,
    {
        Self::from_parts(self.parts().iter().map(f).collect::<MathResult<Vec<_>>>()?)
    }

    /// Behält nur Teile, für die `f` ein gültiges Polygon liefert.
    fn retain_parts<F>(&self, f: F) -> Option<Self>
    where
        F: Fn(&Polygon) -> Option<Polygon>,
    {
        Self::from_parts(self.parts().iter().filter_map(f).collect()).ok()
    }

    /// Douglas-Peucker je Teil; degenerierte Teile entfallen.
    pub fn simplify(&self, tolerance: f64) -> Option<Self> {
        self.retain_parts(|part| part.simplify(tolerance).ok())
    }

    /// Entfernt Teile mit einer Fläche unter `min_area`.
    pub fn filter_by_area(&self, min_area: f64) -> Option<Self> {
        self.retain_parts(|part| (part.area() >= min_area).then(|| part.clone()))
    }

    pub fn project(&self, projection: Projection) -> MathResult<Self> {
        self.try_map_parts(|part| {
            let vertices = part
                .vertices()
                .iter()
                .map(|&v| projection.project(v))
                .collect::<MathResult<Vec<_>>>()?;
            Polygon::new(vertices)
        })
    }
}

impl AffineTransformable for RegionGeometry {
    fn transform(&self, transform: &AffineTransform) -> MathResult<Self> {
        self.try_map_parts(|part| part.transform(transform))
    }
}

/// Region mit optionalem Namen. Alle Operationen liefern neue Werte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRegion {
    pub name: Option<String>,
    pub geometry: RegionGeometry,
}

impl NamedRegion {
    pub fn new(name: impl Into<String>, geometry: RegionGeometry) -> Self {
        Self {
            name: Some(name.into()),
            geometry,
        }
    }

    pub fn unnamed(geometry: RegionGeometry) -> Self {
        Self {
            name: None,
            geometry,
        }
    }

    /// Skalierung um den Ursprung.
    pub fn scale(&self, factor: f64) -> MathResult<Self> {
        self.transform(&AffineTransform::scale(factor, factor))
    }

    pub fn simplify(&self, tolerance: f64) -> Option<Self> {
        self.with_geometry(self.geometry.simplify(tolerance))
    }

    pub fn filter_by_area(&self, min_area: f64) -> Option<Self> {
        self.with_geometry(self.geometry.filter_by_area(min_area))
    }

    pub fn project(&self, projection: Projection) -> MathResult<Self> {
        Ok(Self {
            name: self.name.clone(),
            geometry: self.geometry.project(projection)?,
        })
    }

    pub fn bounds(&self) -> Option<Bounds2D> {
        self.geometry.bounds()
    }

    pub fn nodes_count(&self) -> usize {
        self.geometry.nodes_count()
    }

    fn with_geometry(&self, geometry: Option<RegionGeometry>) -> Option<Self> {
        geometry.map(|geometry| Self {
            name: self.name.clone(),
            geometry,
        })
    }
}

impl AffineTransformable for NamedRegion {
    fn transform(&self, transform: &AffineTransform) -> MathResult<Self> {
        Ok(Self {
            name: self.name.clone(),
            geometry: self.geometry.transform(transform)?,
        })
    }
}
