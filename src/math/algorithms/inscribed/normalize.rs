// src/math/algorithms/inscribed/normalize.rs

use super::{
    config::SearchConfig,
    search::{AspectRatio, find_inscribed_rectangles},
};
use crate::math::{
    error::*,
    geometry::{
        polygon::{
            AffineTransform, AffineTransformable, Polygon, TransformBuilder, contains_rectangle,
        },
        rectangle::Rectangle,
    },
    types::point,
    utils::angles,
};
use tracing::{debug, trace, warn};

/// Lokale Koordinaten werden auf `2^-SNAP_BITS` der Ausdehnung eingerastet.
const SNAP_BITS: i32 = 40;
/// Relative Schrumpfschritte für zurücktransformierte Rechtecke.
const SHRINK_STEPS: [f64; 4] = [1e-12, 1e-10, 1e-8, 1e-6];

/// Achsenparalleles Bezugssystem eines Polygons.
///
/// `forward` dreht das Polygon um den Schwerpunkt seines kleinsten umschließenden
/// Rechtecks, bis dieses achsenparallel liegt, und verschiebt die Bounding Box
/// in den Ursprung. `inverse` bildet Ergebnisse zurück in das Originalsystem ab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFrame {
    pub angle_degrees: f64,
    pub forward: AffineTransform,
    pub inverse: AffineTransform,
}

impl AxisFrame {
    pub fn for_polygon(polygon: &Polygon) -> MathResult<Self> {
        let envelope = polygon.minimum_rotated_rectangle()?;
        let centroid = envelope.centroid();
        let angle_degrees = angles::reduce_quarter_turn(envelope.angle_degrees());

        let rotated = polygon.rotate_around(-angle_degrees, centroid)?;
        let min = rotated.bounds().min;

        let forward = TransformBuilder::new()
            .translate(-min.x, -min.y)
            .rotate_around(-angle_degrees, centroid)
            .build();
        let inverse = forward.inverse().ok_or_else(|| MathError::GeometricFailure {
            operation: "inverting axis frame".to_string(),
        })?;

        Ok(Self {
            angle_degrees,
            forward,
            inverse,
        })
    }

    /// Bringt `polygon` in dieses Bezugssystem und rastet die Koordinaten ein.
    ///
    /// Das entfernt das Rundungsrauschen der Drehung: achsenparallele Kanten
    /// liegen danach exakt auf Gitterzeilen, Randpunkte des Gitters bleiben erhalten.
    pub fn localize(&self, polygon: &Polygon) -> MathResult<Polygon> {
        let local = polygon.transform(&self.forward)?;
        let quantum = snap_quantum(local.bounds().longest_side());
        Polygon::new(
            local
                .vertices()
                .iter()
                .map(|v| point(snap(v.x, quantum), snap(v.y, quantum)))
                .collect(),
        )
    }

    /// Bildet ein lokales Rechteck zurück in das Originalsystem ab.
    ///
    /// Ragt das Ergebnis durch Rundung aus `polygon` heraus, wird es minimal um
    /// seinen Schwerpunkt geschrumpft; gelingt das nicht, entfällt es (`None`).
    pub fn restore(&self, polygon: &Polygon, local: &Rectangle) -> MathResult<Option<Rectangle>> {
        let restored = local.transform(&self.inverse)?;
        if contains_rectangle(polygon, &restored) {
            return Ok(Some(restored));
        }

        let centroid = restored.centroid();
        for shrink in SHRINK_STEPS {
            let candidate = restored.scale_around(1.0 - shrink, centroid)?;
            if contains_rectangle(polygon, &candidate) {
                trace!(shrink, "restored rectangle shrunk into polygon");
                return Ok(Some(candidate));
            }
        }
        debug!(area = restored.area(), "restored rectangle dropped");
        Ok(None)
    }
}

/// Größte Zweierpotenz `<= extent * 2^-SNAP_BITS`; 0 schaltet das Einrasten ab.
fn snap_quantum(extent: f64) -> f64 {
    if !(extent.is_finite() && extent > 0.0) {
        return 0.0;
    }
    2f64.powi(extent.log2().floor() as i32 - SNAP_BITS)
}

fn snap(value: f64, quantum: f64) -> f64 {
    if quantum == 0.0 {
        return value;
    }
    (value / quantum).round() * quantum
}

/// Größte einbeschriebene Rechtecke beliebiger Orientierung ("mrcd").
///
/// Das Polygon wird in sein [`AxisFrame`] gebracht, dort durchsucht, und jedes
/// Ergebnis zurücktransformiert. Jedes gelieferte Rechteck liegt im Original
/// (`contains_rectangle`); Ergebnisse, bei denen das nicht herstellbar ist, entfallen.
pub fn find_rotated_inscribed_rectangles(
    polygon: &Polygon,
    resolution: usize,
    aspect_ratio: Option<AspectRatio>,
) -> MathResult<Vec<Rectangle>> {
    let frame = AxisFrame::for_polygon(polygon)?;
    let local = frame.localize(polygon)?;

    let mut restored = Vec::new();
    for rectangle in find_inscribed_rectangles(&local, resolution, aspect_ratio)? {
        if let Some(rectangle) = frame.restore(polygon, &rectangle)? {
            restored.push(rectangle);
        }
    }
    Ok(restored)
}

/// Eskaliert die Auflösung gemäß `config`, bis ein Rechteck gefunden wird.
///
/// Liefert das erste Rechteck der ersten nichtleeren Ergebnismenge oder
/// `NoRectangleFound`, sobald `max_resolution` überschritten würde.
pub fn largest_inscribed_rectangle(
    polygon: &Polygon,
    config: &SearchConfig,
    target_ratio: Option<f64>,
) -> MathResult<Rectangle> {
    config.validate()?;
    let aspect_ratio =
        target_ratio.map(|target| AspectRatio::new(target, config.aspect_ratio_tolerance));

    let mut last_resolution = config.resolution;
    for resolution in config.resolutions() {
        last_resolution = resolution;
        debug!(resolution, points = (resolution + 1).pow(2), "trying resolution");
        let found = find_rotated_inscribed_rectangles(polygon, resolution, aspect_ratio)?;
        if let Some(&first) = found.first() {
            return Ok(first);
        }
    }

    warn!(
        last_resolution,
        max_resolution = config.max_resolution,
        "no inscribed rectangle found"
    );
    Err(MathError::NoRectangleFound {
        resolution: last_resolution,
        max_resolution: config.max_resolution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::{ShapeGenerators, contains_point};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn square() -> Polygon {
        Polygon::new(vec![
            point(0.0, 0.0),
            point(4.0, 0.0),
            point(4.0, 4.0),
            point(0.0, 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_axis_aligned_square_keeps_frame() {
        let frame = AxisFrame::for_polygon(&square()).unwrap();
        assert_eq!(frame.angle_degrees, 0.0);
        let found = find_rotated_inscribed_rectangles(&square(), 4, None).unwrap();
        let best = found[0];
        assert_relative_eq!(best.area(), 16.0, epsilon = 1e-9);
        assert_abs_diff_eq!(best.centroid().x, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(best.centroid().y, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(best.angle_degrees(), 0.0, epsilon = 1e-9);
    }

    /// 8 x 3 Rechteck, um `angle` Grad um seinen Mittelpunkt gedreht.
    fn rotated_bar(angle: f64) -> Polygon {
        Polygon::new(vec![
            point(0.0, 0.0),
            point(8.0, 0.0),
            point(8.0, 3.0),
            point(0.0, 3.0),
        ])
        .unwrap()
        .rotate_around(angle, point(4.0, 1.5))
        .unwrap()
    }

    fn random_star(seed: u64, vertices: usize) -> Polygon {
        let mut rng = StdRng::seed_from_u64(seed);
        ShapeGenerators::build(ShapeGenerators::create_random_star_vertices(
            point(0.0, 0.0),
            2.0,
            6.0,
            vertices,
            &mut rng,
        ))
        .unwrap()
    }

    #[test]
    fn test_rotated_rectangle_is_recovered() {
        let polygon = rotated_bar(30.0);
        let frame = AxisFrame::for_polygon(&polygon).unwrap();
        assert_abs_diff_eq!(frame.angle_degrees, 30.0, epsilon = 1e-6);

        let found = find_rotated_inscribed_rectangles(&polygon, 8, None).unwrap();
        assert!(!found.is_empty());
        let best = found[0];
        assert_relative_eq!(best.area(), 24.0, epsilon = 1e-6);
        assert_abs_diff_eq!(best.angle_degrees(), 30.0, epsilon = 1e-6);
        assert!(contains_rectangle(&polygon, &best));
    }

    #[test]
    fn test_local_frame_keeps_boundary_rows() {
        // Bei Auflösung 4 liegen die Gitterzeilen y = 0 und y = 2 im 8 x 3 Rechteck.
        let polygon = rotated_bar(30.0);
        let frame = AxisFrame::for_polygon(&polygon).unwrap();
        let local = frame.localize(&polygon).unwrap();
        let bounds = local.bounds();
        assert_eq!(bounds.min, point(0.0, 0.0));
        assert_eq!(bounds.longest_side(), 8.0);

        let found = find_rotated_inscribed_rectangles(&polygon, 4, None).unwrap();
        assert_relative_eq!(found[0].area(), 16.0, epsilon = 1e-6);
        assert!(found.iter().all(|r| contains_rectangle(&polygon, r)));
    }

    #[test]
    fn test_default_config_result_lies_in_polygon() {
        let polygon = rotated_bar(45.0);
        let rect = largest_inscribed_rectangle(&polygon, &SearchConfig::default(), None).unwrap();
        assert!(contains_rectangle(&polygon, &rect));
        assert_relative_eq!(rect.area(), 24.0, epsilon = 1e-6);
    }

    #[test]
    fn test_restore_shrinks_rectangle_overshooting_by_rounding() {
        let polygon = square();
        let frame = AxisFrame::for_polygon(&polygon).unwrap();
        // Um 1e-13 zu groß, wie nach einer verrauschten Rücktransformation.
        let overshoot = 4.0 + 1e-13;
        let local = Rectangle::new([
            point(0.0, 0.0),
            point(0.0, overshoot),
            point(overshoot, overshoot),
            point(overshoot, 0.0),
        ]);
        let restored = frame.restore(&polygon, &local).unwrap().unwrap();
        assert!(contains_rectangle(&polygon, &restored));
        assert_relative_eq!(restored.area(), 16.0, epsilon = 1e-9);

        let far_outside = Rectangle::new([
            point(0.0, 0.0),
            point(0.0, 5.0),
            point(5.0, 5.0),
            point(5.0, 0.0),
        ]);
        assert_eq!(frame.restore(&polygon, &far_outside).unwrap(), None);
    }

    #[test]
    fn test_escalation_stops_at_max_resolution() {
        let sliver = Polygon::new(vec![
            point(0.0, 0.0),
            point(100.0, 0.0),
            point(100.0, 0.001),
            point(50.0, 0.5),
        ])
        .unwrap();
        let config = SearchConfig::new()
            .with_resolution(2)
            .with_resolution_step(3)
            .with_max_resolution(8);
        let result = largest_inscribed_rectangle(&sliver, &config, Some(40.0));
        assert_eq!(
            result,
            Err(MathError::NoRectangleFound {
                resolution: 8,
                max_resolution: 8,
            })
        );
    }

    #[test]
    fn test_escalation_finds_star_rectangle() {
        let star = ShapeGenerators::build(ShapeGenerators::create_star_vertices(
            point(0.0, 0.0),
            2.0,
            5.0,
            5,
        ))
        .unwrap();
        let config = SearchConfig::new()
            .with_resolution(6)
            .with_resolution_step(2)
            .with_max_resolution(12);
        let rect = largest_inscribed_rectangle(&star, &config, None).unwrap();
        assert!(rect.area() > 0.0);
        assert!(rect.area() < star.area());
        assert!(contains_point(&star, rect.centroid()));
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let config = SearchConfig::new().with_resolution_step(0);
        assert!(matches!(
            largest_inscribed_rectangle(&square(), &config, None),
            Err(MathError::InvalidConfiguration { .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn test_rotated_bar_is_found_whole(angle in 0.0f64..180.0) {
            let polygon = rotated_bar(angle);
            let found = find_rotated_inscribed_rectangles(&polygon, 8, None).unwrap();
            prop_assert!(!found.is_empty());
            for rect in &found {
                prop_assert!(contains_rectangle(&polygon, rect));
                prop_assert!((rect.area() - 24.0).abs() < 1e-6);
            }
        }

        #[test]
        fn test_rotated_star_result_lies_in_polygon(
            seed in 0u64..1_000_000,
            vertices in 5usize..10,
            angle in 0.0f64..90.0,
        ) {
            let polygon = random_star(seed, vertices)
                .rotate_around(angle, point(0.0, 0.0))
                .unwrap();
            let config = SearchConfig::new()
                .with_resolution(6)
                .with_resolution_step(3)
                .with_max_resolution(12);
            if let Ok(rect) = largest_inscribed_rectangle(&polygon, &config, None) {
                prop_assert!(contains_rectangle(&polygon, &rect));
            }
            for rect in find_rotated_inscribed_rectangles(&polygon, 6, None).unwrap() {
                prop_assert!(contains_rectangle(&polygon, &rect));
            }
        }
    }
}
