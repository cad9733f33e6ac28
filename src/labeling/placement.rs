// src/labeling/placement.rs

use super::{
    config::{LabelConfig, Strategy},
    fit::fit_to_rectangle,
    text::{GlyphTable, LabelGeometry},
};
use crate::math::{
    algorithms::inscribed::{erode_to_rectangle, largest_inscribed_rectangle},
    error::*,
    geometry::{
        polygon::{Polygon, ShapeGenerators},
        rectangle::Rectangle,
    },
    utils::comparison::nearly_zero,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Segmente des Schwerpunkt-Markers.
const MARKER_SEGMENTS: usize = 24;
/// Radius des Schwerpunkt-Markers relativ zur langen Rechtecksseite.
const MARKER_RADIUS_RATIO: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelOptions {
    /// Das gefundene Rechteck mit ausgeben.
    pub show_box: bool,
    /// Einen Kreis am Rechtecksschwerpunkt mit ausgeben.
    pub show_centroid: bool,
    /// Ersten Buchstaben großschreiben.
    pub capitalize: bool,
}

impl LabelOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_box(mut self, show: bool) -> Self {
        self.show_box = show;
        self
    }

    pub fn with_centroid(mut self, show: bool) -> Self {
        self.show_centroid = show;
        self
    }

    pub fn with_capitalize(mut self, capitalize: bool) -> Self {
        self.capitalize = capitalize;
        self
    }
}

/// Ergebnis einer Beschriftung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub rectangle: Rectangle,
    pub text: LabelGeometry,
    pub frame: Option<Polygon>,
    pub marker: Option<Polygon>,
}

impl Label {
    /// Alle Polygone in Zeichenreihenfolge: Rahmen, Marker, Text.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.frame
            .iter()
            .chain(self.marker.iter())
            .chain(self.text.polygons())
    }
}

/// Platziert Beschriftungen in Polygonen.
#[derive(Debug, Clone)]
pub struct Labeler {
    config: LabelConfig,
    glyphs: GlyphTable,
}

impl Labeler {
    pub fn new(config: LabelConfig, glyphs: GlyphTable) -> MathResult<Self> {
        config.validate()?;
        Ok(Self { config, glyphs })
    }

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    /// Setzt `name`, sucht ein passendes Rechteck und passt den Text ein.
    pub fn label_polygon(
        &self,
        polygon: &Polygon,
        name: &str,
        options: &LabelOptions,
    ) -> MathResult<Label> {
        let name = if options.capitalize {
            capitalize_first(name)
        } else {
            name.to_string()
        };

        let text = LabelGeometry::layout(&name, &self.glyphs, self.config.glyph_spacing)?;
        let (width, height) = (text.width(), text.height());
        if nearly_zero(width) || nearly_zero(height) {
            return Err(MathError::DegenerateText { text: name });
        }
        // Verhältnis lange / kurze Seite, wie beim Rechteckfilter.
        let target_ratio = width.max(height) / width.min(height);

        let rectangle = self.find_rectangle(polygon, target_ratio)?;
        debug!(
            name = name.as_str(),
            area = rectangle.area(),
            angle = rectangle.angle_degrees(),
            "label rectangle"
        );

        let text = fit_to_rectangle(&text, &rectangle)?;
        let frame = if options.show_box {
            Some(Polygon::from_geo(rectangle.to_geo_polygon())?)
        } else {
            None
        };
        let marker = if options.show_centroid {
            let radius = rectangle.long_side() * MARKER_RADIUS_RATIO;
            Some(ShapeGenerators::build(ShapeGenerators::create_circle_vertices(
                rectangle.centroid(),
                radius,
                MARKER_SEGMENTS,
            ))?)
        } else {
            None
        };

        Ok(Label {
            rectangle,
            text,
            frame,
            marker,
        })
    }

    fn find_rectangle(&self, polygon: &Polygon, target_ratio: f64) -> MathResult<Rectangle> {
        let exhaustive =
            || largest_inscribed_rectangle(polygon, &self.config.search, Some(target_ratio));

        match self.config.strategy {
            Strategy::Exhaustive => exhaustive(),
            Strategy::Erosion => erode_to_rectangle(polygon, &self.config.erosion),
            Strategy::ErosionWithFallback => {
                match erode_to_rectangle(polygon, &self.config.erosion) {
                    Err(MathError::ErosionExhausted { remaining_ratio }) => {
                        warn!(remaining_ratio, "erosion exhausted, falling back to grid search");
                        exhaustive()
                    }
                    other => other,
                }
            }
        }
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
