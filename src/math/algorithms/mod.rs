// src/math/algorithms/mod.rs

pub mod inscribed;

pub use self::inscribed::{
    AspectRatio, ErosionConfig, SearchConfig, erode_to_rectangle, find_inscribed_rectangles,
    find_rotated_inscribed_rectangles, largest_inscribed_rectangle,
};
