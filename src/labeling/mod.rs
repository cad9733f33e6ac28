// src/labeling/mod.rs

pub mod config;
pub mod fit;
pub mod placement;
pub mod text;

pub use self::config::{LabelConfig, Strategy};
pub use self::fit::fit_to_rectangle;
pub use self::placement::{Label, LabelOptions, Labeler};
pub use self::text::{GlyphTable, LabelGeometry};
