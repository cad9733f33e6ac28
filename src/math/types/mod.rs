// src/math/types/mod.rs
pub mod bounds;

pub use bounds::*;

/// Einheitlicher Punkttyp für das gesamte Modul: planare, bereits projizierte Koordinaten.
pub type Point2D = geo::Coord<f64>;

/// Kurzform für `Point2D { x, y }`.
pub fn point(x: f64, y: f64) -> Point2D {
    Point2D { x, y }
}
