// src/cartography/mod.rs

pub mod map;
pub mod region;

pub use self::map::{LabelFailure, LabelReport, Map, RegionLabel};
pub use self::region::{NamedRegion, RegionGeometry};
