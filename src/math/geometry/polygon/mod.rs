// src/math/geometry/polygon/mod.rs

pub mod builder;
pub mod containment;
pub mod core; // Enthält die Polygon-Struktur selbst
pub mod transformations;

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Polygon-Elemente
pub use self::builder::ShapeGenerators;
pub use self::containment::{contains_point, contains_rectangle, contains_segment};
pub use self::core::{Polygon, largest_by_area};
pub use self::transformations::affine::{AffineTransform, AffineTransformable, TransformBuilder};
