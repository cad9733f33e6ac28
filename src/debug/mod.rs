// src/debug/mod.rs

pub mod svg;

pub use self::svg::{map_document, save_map_svg};
