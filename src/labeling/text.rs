// src/labeling/text.rs

use crate::math::{
    error::*,
    geometry::polygon::{AffineTransform, AffineTransformable, Polygon},
    types::{Bounds2D, Point2D},
};
use geo::Centroid;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Zuordnung Zeichen -> Glyph-Polygone.
///
/// Wird explizit an das Layout übergeben; es gibt keine globale Schrifttabelle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphTable {
    glyphs: HashMap<char, Vec<Polygon>>,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, character: char, polygons: Vec<Polygon>) {
        self.glyphs.insert(character, polygons);
    }

    pub fn with_glyph(mut self, character: char, polygons: Vec<Polygon>) -> Self {
        self.insert(character, polygons);
        self
    }

    pub fn get(&self, character: char) -> Option<&[Polygon]> {
        self.glyphs.get(&character).map(Vec::as_slice)
    }

    pub fn contains(&self, character: char) -> bool {
        self.glyphs.contains_key(&character)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl FromIterator<(char, Vec<Polygon>)> for GlyphTable {
    fn from_iter<I: IntoIterator<Item = (char, Vec<Polygon>)>>(iter: I) -> Self {
        Self {
            glyphs: iter.into_iter().collect(),
        }
    }
}

/// Gesetzter Text als geordnete Liste von Polygonen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelGeometry {
    text: String,
    polygons: Vec<Polygon>,
}

impl LabelGeometry {
    pub fn new(text: impl Into<String>, polygons: Vec<Polygon>) -> Self {
        Self {
            text: text.into(),
            polygons,
        }
    }

    /// Setzt `text` von links nach rechts.
    ///
    /// Die erste Glyphe bleibt, wo sie in der Tabelle steht; jede weitere wird so
    /// verschoben, dass ihr linker Rand bei `rechter Rand bisher + spacing` liegt.
    /// Zeichen ohne Eintrag in `glyphs` werden mit einer Warnung übersprungen.
    pub fn layout(text: &str, glyphs: &GlyphTable, spacing: f64) -> MathResult<Self> {
        let mut polygons: Vec<Polygon> = Vec::new();
        let mut right_edge: Option<f64> = None;

        for character in text.chars() {
            let Some(glyph) = glyphs.get(character) else {
                warn!(?character, text, "no glyph for character, skipping");
                continue;
            };
            let Some(glyph_bounds) = union_bounds(glyph) else {
                continue;
            };

            let dx = match right_edge {
                Some(edge) => edge + spacing - glyph_bounds.min.x,
                None => 0.0,
            };
            for part in glyph {
                polygons.push(part.translate(dx, 0.0)?);
            }
            right_edge = Some(glyph_bounds.max.x + dx);
        }

        Ok(Self::new(text, polygons))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Gemeinsame Bounding Box aller Glyphen; `None` bei leerem Text.
    pub fn bounds(&self) -> Option<Bounds2D> {
        union_bounds(&self.polygons)
    }

    pub fn width(&self) -> f64 {
        self.bounds().map_or(0.0, |b| b.width())
    }

    pub fn height(&self) -> f64 {
        self.bounds().map_or(0.0, |b| b.height())
    }

    /// Flächengewichteter Schwerpunkt aller Glyphen.
    pub fn centroid(&self) -> Option<Point2D> {
        self.to_multi_polygon().centroid().map(|p| p.0)
    }

    pub fn to_multi_polygon(&self) -> geo::MultiPolygon<f64> {
        geo::MultiPolygon::new(self.polygons.iter().map(|p| p.as_geo().clone()).collect())
    }
}

impl AffineTransformable for LabelGeometry {
    fn transform(&self, transform: &AffineTransform) -> MathResult<Self> {
        let polygons = self
            .polygons
            .iter()
            .map(|p| p.transform(transform))
            .collect::<MathResult<Vec<_>>>()?;
        Ok(Self::new(self.text.clone(), polygons))
    }
}

fn union_bounds(polygons: &[Polygon]) -> Option<Bounds2D> {
    polygons
        .iter()
        .map(Polygon::bounds)
        .reduce(|acc, b| acc.union(&b))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::math::types::point;
    use approx::assert_relative_eq;

    fn block(x0: f64, width: f64, height: f64) -> Polygon {
        Polygon::new(vec![
            point(x0, 0.0),
            point(x0 + width, 0.0),
            point(x0 + width, height),
            point(x0, height),
        ])
        .unwrap()
    }

    /// Blockschrift für Tests: jedes Zeichen ein 60 x 100 Rechteck, "I" schmaler.
    pub(crate) fn block_font() -> GlyphTable {
        let mut table: GlyphTable = ('A'..='Z')
            .chain('a'..='z')
            .map(|c| (c, vec![block(0.0, 60.0, 100.0)]))
            .collect();
        table.insert('I', vec![block(20.0, 20.0, 100.0)]);
        table
    }

    #[test]
    fn test_layout_places_glyphs_left_to_right() {
        let label = LabelGeometry::layout("AIA", &block_font(), 10.0).unwrap();
        assert_eq!(label.polygons().len(), 3);
        let xs: Vec<f64> = label.polygons().iter().map(|p| p.bounds().min.x).collect();
        // A: 0..60, I: 70..90, A: 100..160
        assert_eq!(xs, vec![0.0, 70.0, 100.0]);
        assert_relative_eq!(label.width(), 160.0);
        assert_relative_eq!(label.height(), 100.0);
    }

    #[test]
    fn test_missing_characters_are_skipped() {
        let label = LabelGeometry::layout("A-B", &block_font(), 0.0).unwrap();
        assert_eq!(label.polygons().len(), 2);
        assert_relative_eq!(label.width(), 120.0);
        assert_eq!(label.text(), "A-B");
    }

    #[test]
    fn test_empty_text_has_no_geometry() {
        let label = LabelGeometry::layout("", &block_font(), 10.0).unwrap();
        assert!(label.is_empty());
        assert_eq!(label.width(), 0.0);
        assert!(label.centroid().is_none());
    }

    #[test]
    fn test_centroid_is_area_weighted() {
        let label = LabelGeometry::layout("AA", &block_font(), 0.0).unwrap();
        assert_eq!(label.centroid(), Some(point(60.0, 50.0)));
    }
}
