// src/labeling/fit.rs

use super::text::LabelGeometry;
use crate::math::{
    error::*,
    geometry::{polygon::AffineTransformable, rectangle::Rectangle},
    utils::comparison::nearly_zero,
};

/// Passt gesetzten Text in ein Rechteck ein.
///
/// 1. Skalierung um den Textschwerpunkt, sodass die Breite der langen Seite entspricht.
/// 2. Verschiebung des Schwerpunkts auf den Rechtecksschwerpunkt.
/// 3. Drehung um diesen Punkt um den Winkel des Rechtecks.
///
/// Die Einpassung wird danach nicht erneut auf Enthaltensein geprüft.
pub fn fit_to_rectangle(text: &LabelGeometry, rectangle: &Rectangle) -> MathResult<LabelGeometry> {
    let width = text.width();
    let degenerate = || MathError::DegenerateText {
        text: text.text().to_string(),
    };
    if nearly_zero(width) {
        return Err(degenerate());
    }
    let centroid = text.centroid().ok_or_else(degenerate)?;

    let factor = rectangle.long_side() / width;
    let target = rectangle.centroid();

    text.scale_around(factor, centroid)?
        .translate(target.x - centroid.x, target.y - centroid.y)?
        .rotate_around(rectangle.angle_degrees(), target)
}
