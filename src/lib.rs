// ./src/lib.rs

// Eigene Module deklarieren
pub mod cartography;
pub mod debug;
pub mod labeling;
pub mod math;

pub use cartography::{LabelReport, Map, NamedRegion, RegionGeometry};
pub use labeling::{GlyphTable, Label, LabelConfig, LabelOptions, Labeler, Strategy};
pub use math::{MathError, MathResult};
