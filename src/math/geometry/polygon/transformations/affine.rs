// src/math/geometry/polygon/transformations/affine.rs

use crate::math::{error::MathResult, types::*};
use geo::MapCoords;
use serde::{Deserialize, Serialize};

/// Affine Transformations-Matrix (3x3 für 2D)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    // Matrix in der Form: [a c tx]
    //                    [b d ty]
    //                    [0 0  1]
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl AffineTransform {
    /// Identitäts-Transformation
    pub fn identity() -> Self {
        Self::translation(0.0, 0.0)
    }

    /// Translation
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx,
            ty,
        }
    }

    /// Skalierung
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Uniforme Skalierung um einen Punkt
    pub fn uniform_scale_around(factor: f64, center: Point2D) -> Self {
        Self::around(Self::scale(factor, factor), center)
    }

    /// Rotation um den Ursprung (Winkel in Grad, gegen den Uhrzeigersinn)
    pub fn rotation(angle_deg: f64) -> Self {
        let (sin_a, cos_a) = angle_deg.to_radians().sin_cos();

        Self {
            a: cos_a,
            b: sin_a,
            c: -sin_a,
            d: cos_a,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Rotation um einen Punkt
    pub fn rotation_around(angle_deg: f64, center: Point2D) -> Self {
        Self::around(Self::rotation(angle_deg), center)
    }

    /// Spiegelung an der X-Achse
    pub fn reflect_x() -> Self {
        Self::scale(1.0, -1.0)
    }

    fn around(linear: Self, center: Point2D) -> Self {
        let translate_back = Self::translation(center.x, center.y);
        let translate_to_origin = Self::translation(-center.x, -center.y);

        translate_back.compose(&linear).compose(&translate_to_origin)
    }

    /// Transformations-Komposition: `self ∘ other`, d.h. `other` wird zuerst angewendet.
    pub fn compose(&self, other: &AffineTransform) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            tx: self.a * other.tx + self.c * other.ty + self.tx,
            ty: self.b * other.tx + self.d * other.ty + self.ty,
        }
    }

    /// Inverse Transformation
    pub fn inverse(&self) -> Option<Self> {
        let det = self.a * self.d - self.b * self.c;

        if det.abs() < 1e-12 {
            return None; // Nicht invertierbar
        }

        let inv_det = 1.0 / det;

        Some(Self {
            a: self.d * inv_det,
            b: -self.b * inv_det,
            c: -self.c * inv_det,
            d: self.a * inv_det,
            tx: (self.c * self.ty - self.d * self.tx) * inv_det,
            ty: (self.b * self.tx - self.a * self.ty) * inv_det,
        })
    }

    /// Transformiert einen Punkt
    pub fn transform_point(&self, point: Point2D) -> Point2D {
        Point2D {
            x: self.a * point.x + self.c * point.y + self.tx,
            y: self.b * point.x + self.d * point.y + self.ty,
        }
    }

    /// Wendet die Transformation auf eine beliebige `geo`-Geometrie an.
    pub fn apply<G>(&self, geometry: &G) -> G
    where
        G: MapCoords<f64, f64, Output = G>,
    {
        geometry.map_coords(|coord| self.transform_point(coord))
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Trait für affine Transformationen.
///
/// Alle Methoden liefern einen neuen Wert; das Original bleibt unverändert.
pub trait AffineTransformable: Sized {
    fn transform(&self, transform: &AffineTransform) -> MathResult<Self>;

    // Convenience-Methoden
    fn translate(&self, tx: f64, ty: f64) -> MathResult<Self> {
        self.transform(&AffineTransform::translation(tx, ty))
    }

    fn scale_around(&self, factor: f64, center: Point2D) -> MathResult<Self> {
        self.transform(&AffineTransform::uniform_scale_around(factor, center))
    }

    fn rotate_around(&self, angle_deg: f64, center: Point2D) -> MathResult<Self> {
        self.transform(&AffineTransform::rotation_around(angle_deg, center))
    }
}

/// Builder für komplexe Transformationen
pub struct TransformBuilder {
    transform: AffineTransform,
}

impl TransformBuilder {
    pub fn new() -> Self {
        Self {
            transform: AffineTransform::identity(),
        }
    }

    pub fn translate(mut self, tx: f64, ty: f64) -> Self {
        self.transform = self
            .transform
            .compose(&AffineTransform::translation(tx, ty));
        self
    }

    pub fn rotate_around(mut self, angle_deg: f64, center: Point2D) -> Self {
        self.transform = self
            .transform
            .compose(&AffineTransform::rotation_around(angle_deg, center));
        self
    }

    pub fn build(self) -> AffineTransform {
        self.transform
    }
}

impl Default for TransformBuilder {
    fn default() -> Self {
        Self::new()
    }
}
