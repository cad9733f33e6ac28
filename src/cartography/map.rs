// src/cartography/map.rs

use super::region::NamedRegion;
use crate::{
    labeling::{Label, LabelOptions, Labeler},
    math::{
        error::*,
        geometry::{
            polygon::{AffineTransform, AffineTransformable},
            projection::Projection,
        },
        types::Bounds2D,
        utils::comparison::nearly_zero,
    },
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Eine Sammlung von Regionen. Jede Transformation liefert eine neue Karte.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Map {
    regions: Vec<NamedRegion>,
}

/// Beschriftung einer einzelnen Region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionLabel {
    pub region: usize,
    pub name: String,
    pub label: Label,
}

/// Fehlgeschlagene Beschriftung; die Region bleibt Teil der Karte.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFailure {
    pub region: usize,
    pub name: String,
    pub error: MathError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelReport {
    pub labels: Vec<RegionLabel>,
    pub failures: Vec<LabelFailure>,
}

impl LabelReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Map {
    pub fn new(regions: Vec<NamedRegion>) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &[NamedRegion] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn nodes_count(&self) -> usize {
        self.regions.iter().map(NamedRegion::nodes_count).sum()
    }

    pub fn bounds(&self) -> Option<Bounds2D> {
        self.regions
            .iter()
            .filter_map(NamedRegion::bounds)
            .reduce(|acc, b| acc.union(&b))
    }

    pub fn project(&self, projection: Projection) -> MathResult<Self> {
        self.try_map(|region| region.project(projection))
    }

    /// Verschiebt die Karte so, dass die linke untere Ecke im Ursprung liegt.
    pub fn translate_to_origin(&self) -> MathResult<Self> {
        match self.bounds() {
            Some(bounds) => self.translate(-bounds.min.x, -bounds.min.y),
            None => Ok(self.clone()),
        }
    }

    /// Skaliert um den Ursprung, bis die Karte `width` breit ist.
    pub fn scale_to_width(&self, width: f64) -> MathResult<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Target width {width} must be positive"),
            });
        }
        let Some(bounds) = self.bounds() else {
            return Ok(self.clone());
        };
        if nearly_zero(bounds.width()) {
            return Err(MathError::GeometricFailure {
                operation: "scaling a map of zero width".to_string(),
            });
        }
        let factor = width / bounds.width();
        self.try_map(|region| region.scale(factor))
    }

    pub fn simplify(&self, tolerance: f64) -> Self {
        self.retain(|region| region.simplify(tolerance), "simplify")
    }

    pub fn filter_by_area(&self, min_area: f64) -> Self {
        self.retain(|region| region.filter_by_area(min_area), "filter_by_area")
    }

    /// Beschriftet den größten Teil jeder benannten Region.
    ///
    /// Ein Fehler betrifft nur die jeweilige Region: er wird protokolliert und
    /// gesammelt, die übrigen Regionen werden weiter bearbeitet.
    pub fn label(&self, labeler: &Labeler, options: &LabelOptions) -> LabelReport {
        let mut report = LabelReport::default();

        for (index, region) in self.regions.iter().enumerate() {
            let Some(name) = region.name.as_deref() else {
                debug!(region = index, "skipping unnamed region");
                continue;
            };
            let Some(part) = region.geometry.largest_part() else {
                continue;
            };

            match labeler.label_polygon(part, name, options) {
                Ok(label) => report.labels.push(RegionLabel {
                    region: index,
                    name: name.to_string(),
                    label,
                }),
                Err(error) => {
                    warn!(region = index, name, %error, "labeling failed");
                    report.failures.push(LabelFailure {
                        region: index,
                        name: name.to_string(),
                        error,
                    });
                }
            }
        }

        info!(
            regions = self.regions.len(),
            labeled = report.labels.len(),
            failed = report.failures.len(),
            "map labeled"
        );
        report
    }

    fn try_map<F>(&self, f: F) -> MathResult<Self>
    where
        F: Fn(&NamedRegion) -> MathResult<NamedRegion>,
    {
        Ok(Self::new(
            self.regions.iter().map(f).collect::<MathResult<Vec<_>>>()?,
        ))
    }

    fn retain<F>(&self, f: F, operation: &str) -> Self
    where
        F: Fn(&NamedRegion) -> Option<NamedRegion>,
    {
        let regions: Vec<NamedRegion> = self
            .regions
            .iter()
            .filter_map(|region| {
                let kept = f(region);
                if kept.is_none() {
                    debug!(name = ?region.name, operation, "region dropped");
                }
                kept
            })
            .collect();
        let dropped = self.regions.len() - regions.len();
        if dropped > 0 {
            info!(dropped, remaining = regions.len(), operation, "regions dropped");
        }
        Self::new(regions)
    }
}

impl AffineTransformable for Map {
    fn transform(&self, transform: &AffineTransform) -> MathResult<Self> {
        self.try_map(|region| region.transform(transform))
    }
}

impl FromIterator<NamedRegion> for Map {
    fn from_iter<I: IntoIterator<Item = NamedRegion>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cartography::region::RegionGeometry,
        labeling::{LabelConfig, text::tests::block_font},
        math::{
            algorithms::inscribed::SearchConfig,
            geometry::polygon::Polygon,
            types::point,
        },
    };
    use approx::assert_relative_eq;

    fn rect(x0: f64, y0: f64, w: f64, h: f64) -> Polygon {
        Polygon::new(vec![
            point(x0, y0),
            point(x0 + w, y0),
            point(x0 + w, y0 + h),
            point(x0, y0 + h),
        ])
        .unwrap()
    }

    fn sample_map() -> Map {
        Map::new(vec![
            NamedRegion::new(
                "west",
                RegionGeometry::from_parts(vec![rect(10.0, 10.0, 12.0, 4.0)]).unwrap(),
            ),
            NamedRegion::new(
                "islands",
                RegionGeometry::from_parts(vec![
                    rect(30.0, 10.0, 1.0, 1.0),
                    rect(30.0, 20.0, 12.0, 4.0),
                ])
                .unwrap(),
            ),
            NamedRegion::unnamed(
                RegionGeometry::from_parts(vec![rect(50.0, 10.0, 2.0, 2.0)]).unwrap(),
            ),
        ])
    }

    fn labeler() -> Labeler {
        let config = LabelConfig::new().with_glyph_spacing(0.0).with_search(
            SearchConfig::new()
                .with_resolution(12)
                .with_resolution_step(6)
                .with_max_resolution(18),
        );
        Labeler::new(config, block_font()).unwrap()
    }

    #[test]
    fn test_translate_and_scale() {
        let map = sample_map().translate_to_origin().unwrap();
        let bounds = map.bounds().unwrap();
        assert_eq!(bounds.min, point(0.0, 0.0));
        assert_relative_eq!(bounds.width(), 42.0);

        let scaled = map.scale_to_width(84.0).unwrap();
        assert_relative_eq!(scaled.bounds().unwrap().width(), 84.0);
        assert_relative_eq!(scaled.bounds().unwrap().height(), 28.0);
        // Original unverändert
        assert_relative_eq!(map.bounds().unwrap().width(), 42.0);
        assert!(map.scale_to_width(0.0).is_err());
    }

    #[test]
    fn test_filter_by_area_drops_regions() {
        let map = sample_map().filter_by_area(10.0);
        assert_eq!(map.len(), 2);
        assert!(matches!(
            map.regions()[1].geometry,
            RegionGeometry::SinglePart(_)
        ));
        assert!(sample_map().filter_by_area(1000.0).is_empty());
    }

    #[test]
    fn test_label_uses_largest_part() {
        let report = sample_map().label(&labeler(), &LabelOptions::new());
        assert!(report.is_complete());
        assert_eq!(report.labels.len(), 2);
        let islands = &report.labels[1];
        assert_eq!(islands.region, 1);
        assert!(islands.label.rectangle.centroid().y > 19.0);
    }

    #[test]
    fn test_label_failure_does_not_stop_batch() {
        let mut regions = sample_map().regions().to_vec();
        regions.insert(
            0,
            NamedRegion::new(
                "???",
                RegionGeometry::from_parts(vec![rect(0.0, 0.0, 5.0, 5.0)]).unwrap(),
            ),
        );
        let report = Map::new(regions).label(&labeler(), &LabelOptions::new());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].region, 0);
        assert!(matches!(
            report.failures[0].error,
            MathError::DegenerateText { .. }
        ));
        assert_eq!(report.labels.len(), 2);
    }
}
