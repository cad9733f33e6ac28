pub mod algorithms;
pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        algorithms::inscribed::{
            AspectRatio, ErosionConfig, SearchConfig, erode_to_rectangle,
            find_inscribed_rectangles, largest_inscribed_rectangle,
        },
        error::{MathError, MathResult},
        geometry::{
            AffineTransform, AffineTransformable, Polygon, Projection, Rectangle,
            ShapeGenerators, contains_point, contains_rectangle,
        },
        types::*,
    };
}
