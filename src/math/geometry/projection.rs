// src/math/geometry/projection.rs

use crate::math::{
    error::*,
    types::{Point2D, point},
    utils::constants::{EARTH_RADIUS, FRAC_PI_4},
};
use serde::{Deserialize, Serialize};

/// Kartenprojektionen von geografischen Koordinaten (Längengrad, Breitengrad in Grad)
/// auf die Ebene.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Projection {
    /// Koordinaten bleiben unverändert.
    #[default]
    Identity,
    /// Sphärische Mercator-Projektion mit dem WGS84-Äquatorradius.
    Mercator,
}

impl Projection {
    /// Projiziert `(lon, lat)`; `x` trägt den Längengrad, `y` den Breitengrad.
    pub fn project(&self, coordinate: Point2D) -> MathResult<Point2D> {
        match self {
            Projection::Identity => Ok(coordinate),
            Projection::Mercator => mercator(coordinate.x, coordinate.y),
        }
    }
}

fn mercator(lon: f64, lat: f64) -> MathResult<Point2D> {
    if !lon.is_finite() || !lat.is_finite() || lat.abs() >= 90.0 {
        return Err(MathError::GeometricFailure {
            operation: format!("mercator projection of ({lon}, {lat})"),
        });
    }
    let x = EARTH_RADIUS * lon.to_radians();
    let y = EARTH_RADIUS * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
    Ok(point(x, y))
}
