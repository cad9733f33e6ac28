// src/math/algorithms/inscribed/mod.rs

//! Größte einbeschriebene Rechtecke in einfachen Polygonen.
//!
//! Zwei Löser: die exhaustive Gittersuche ([`search`], mit Drehung über
//! [`normalize`] und Auflösungs-Eskalation) und die schnelle Erosions-Heuristik
//! ([`erosion`]).

pub mod config;
pub mod directions;
pub mod erosion;
pub mod normalize;
pub mod sampler;
pub mod search;

pub use self::config::{ErosionConfig, SearchConfig};
pub use self::directions::{DirectionMatrix, is_perpendicular};
pub use self::erosion::erode_to_rectangle;
pub use self::normalize::{AxisFrame, find_rotated_inscribed_rectangles, largest_inscribed_rectangle};
pub use self::sampler::{SampleGrid, SamplePoint};
pub use self::search::{AspectRatio, find_inscribed_rectangles};
