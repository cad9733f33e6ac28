// src/debug/svg.rs
use crate::{
    cartography::{Map, RegionLabel},
    math::{
        geometry::polygon::{AffineTransform, Polygon},
        types::{Bounds2D, Point2D},
    },
};
use svg::{
    Document, Node,
    node::element::{Polygon as SvgPolygon, Rectangle as SvgRect, Style},
};
use tracing::info;

// ===================================================================================
// HILFS-STRUCT für die SVG-Erstellung
// ===================================================================================
/// Baut ein SVG-Dokument in Kartenkoordinaten auf.
///
/// SVG zählt y nach unten, daher wird jede Koordinate an der x-Achse gespiegelt.
struct SvgBuilder {
    document: Document,
    flip: AffineTransform,
}

impl SvgBuilder {
    /// Erstellt das Grundgerüst mit ViewBox, Stil und Hintergrund.
    fn new(map_bounds: &Bounds2D, svg_pixel_size: f64) -> Self {
        let flip = AffineTransform::reflect_x();
        let margin = map_bounds.longest_side() * 0.02;
        let min_x = map_bounds.min.x - margin;
        let min_y = -map_bounds.max.y - margin;
        let width = map_bounds.width() + 2.0 * margin;
        let height = map_bounds.height() + 2.0 * margin;

        // Relative Strichstärken, unabhängig vom Kartenmaßstab
        let stroke_normal = (width + height) / 2.0 * 0.002;
        let stroke_thin = (width + height) / 2.0 * 0.001;

        let style = Style::new(format!(
            ".region {{ fill: #f4efe1; stroke: #5a5a5a; stroke-width: {stroke_normal}; }}\n\
             .label-box {{ fill: none; stroke: #cc0000; stroke-width: {stroke_thin}; stroke-dasharray: 4,2; }}\n\
             .label-marker {{ fill: #cc0000; stroke: none; }}\n\
             .label-text {{ fill: #1b1b1b; stroke: none; }}"
        ));
        let background = SvgRect::new()
            .set("x", min_x)
            .set("y", min_y)
            .set("width", width)
            .set("height", height)
            .set("fill", "#ffffff");

        let document = Document::new()
            .set("width", svg_pixel_size)
            .set("height", svg_pixel_size * height / width.max(f64::EPSILON))
            .set("viewBox", (min_x, min_y, width, height))
            .add(style)
            .add(background);

        Self { document, flip }
    }

    /// Zeichnet ein Polygon.
    fn draw_polygon(&mut self, polygon: &Polygon, class: &str) {
        let points = polygon
            .vertices()
            .iter()
            .map(|&v| self.flip.transform_point(v))
            .map(|p: Point2D| format!("{:.3},{:.3}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        let element = SvgPolygon::new().set("points", points).set("class", class);
        self.document.append(element);
    }

    fn finish(self) -> Document {
        self.document
    }
}

// ===================================================================================
// ÖFFENTLICHE FUNKTIONEN
// ===================================================================================
/// Erstellt ein SVG-Dokument mit allen Regionen und ihren Beschriftungen.
///
/// # Arguments
/// * `map` - Die Karte, deren Umrisse gezeichnet werden.
/// * `labels` - Beschriftungen, z.B. aus `Map::label`.
/// * `svg_pixel_size` - Breite der SVG in Pixeln; die Höhe folgt dem Seitenverhältnis.
pub fn map_document(map: &Map, labels: &[RegionLabel], svg_pixel_size: f64) -> Document {
    let Some(bounds) = map.bounds() else {
        return Document::new();
    };
    let mut svg = SvgBuilder::new(&bounds, svg_pixel_size);

    for region in map.regions() {
        for part in region.geometry.parts() {
            svg.draw_polygon(part, "region");
        }
    }

    for RegionLabel { label, .. } in labels {
        if let Some(frame) = &label.frame {
            svg.draw_polygon(frame, "label-box");
        }
        if let Some(marker) = &label.marker {
            svg.draw_polygon(marker, "label-marker");
        }
        for glyph in label.text.polygons() {
            svg.draw_polygon(glyph, "label-text");
        }
    }

    svg.finish()
}

/// Schreibt [`map_document`] nach `filename`.
pub fn save_map_svg(
    filename: &str,
    map: &Map,
    labels: &[RegionLabel],
    svg_pixel_size: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = map_document(map, labels, svg_pixel_size);
    svg::save(filename, &document)?;
    info!("Debug SVG '{}' wurde erstellt.", filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cartography::{NamedRegion, RegionGeometry},
        labeling::{LabelConfig, LabelOptions, Labeler, text::tests::block_font},
        math::{algorithms::inscribed::SearchConfig, types::point},
    };

    fn sample_map() -> Map {
        let polygon = Polygon::new(vec![
            point(0.0, 0.0),
            point(12.0, 0.0),
            point(12.0, 4.0),
            point(0.0, 4.0),
        ])
        .unwrap();
        Map::new(vec![NamedRegion::new(
            "aaa",
            RegionGeometry::from_parts(vec![polygon]).unwrap(),
        )])
    }

    #[test]
    fn test_document_contains_regions_and_labels() {
        let map = sample_map();
        let labeler = Labeler::new(
            LabelConfig::new()
                .with_glyph_spacing(0.0)
                .with_search(SearchConfig::new().with_resolution(12).with_max_resolution(24)),
            block_font(),
        )
        .unwrap();
        let options = LabelOptions::new().with_box(true);
        let report = map.label(&labeler, &options);
        assert!(report.is_complete());

        let rendered = map_document(&map, &report.labels, 400.0).to_string();
        assert_eq!(rendered.matches("class=\"region\"").count(), 1);
        assert_eq!(rendered.matches("class=\"label-box\"").count(), 1);
        assert_eq!(rendered.matches("class=\"label-text\"").count(), 3);
        // gespiegelte y-Koordinate der oberen Kante
        assert!(rendered.contains("12.000,-4.000"));
    }

    #[test]
    fn test_empty_map_yields_empty_document() {
        let rendered = map_document(&Map::default(), &[], 100.0).to_string();
        assert!(!rendered.contains("<polygon"));
    }
}
