// src/math/geometry/mod.rs

pub mod polygon;
pub mod projection;
pub mod rectangle;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Geometrietypen
pub use self::polygon::{
    AffineTransform, AffineTransformable, Polygon, ShapeGenerators, TransformBuilder,
    contains_point, contains_rectangle, contains_segment, largest_by_area,
};
pub use self::projection::Projection;
pub use self::rectangle::Rectangle;
