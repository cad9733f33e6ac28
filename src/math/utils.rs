// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Allgemeine Toleranz für Längen- und Flächenvergleiche.
    pub const EPSILON: f64 = 1e-9;
    /// Winkel (in Grad) unterhalb dieser Schwelle gelten als achsenparallel.
    pub const ANGLE_EPSILON_DEG: f64 = 1e-9;
    /// Mittlerer Äquatorradius (WGS84) in Metern.
    pub const EARTH_RADIUS: f64 = 6_378_137.0;
    pub const FRAC_PI_4: f64 = std::f64::consts::FRAC_PI_4;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f64) -> bool {
        a.abs() < EPSILON
    }
}

/// Winkel-Hilfsfunktionen (alle Winkel in Grad, wie in der Kartografie üblich)
pub mod angles {
    use super::constants::ANGLE_EPSILON_DEG;
    use crate::math::types::Point2D;

    /// Steigung der Geraden durch zwei Punkte, `None` für senkrechte Geraden.
    pub fn slope(a: Point2D, b: Point2D) -> Option<f64> {
        if a.x == b.x {
            return None;
        }
        Some((b.y - a.y) / (b.x - a.x))
    }

    /// Winkel einer Geraden zur positiven x-Achse in (-90°, 90°].
    pub fn line_angle(a: Point2D, b: Point2D) -> f64 {
        match slope(a, b) {
            Some(m) => m.atan().to_degrees(),
            None => 90.0,
        }
    }

    /// Reduziert einen Winkel auf (-45°, 45°].
    ///
    /// Eine Drehung um ein Vielfaches von 90° ändert die Achsenparallelität
    /// eines Rechtecks nicht; der reduzierte Winkel ist daher der kleinste,
    /// der ein Rechteck mit Orientierung `degrees` achsenparallel ausrichtet.
    /// Winkel unter [`ANGLE_EPSILON_DEG`] werden auf exakt 0 gesetzt.
    pub fn reduce_quarter_turn(degrees: f64) -> f64 {
        let mut reduced = degrees % 90.0;
        if reduced > 45.0 {
            reduced -= 90.0;
        } else if reduced <= -45.0 {
            reduced += 90.0;
        }
        if reduced.abs() < ANGLE_EPSILON_DEG {
            0.0
        } else {
            reduced
        }
    }
}

/// Geometrische Hilfsfunktionen (einfach, ohne komplexe Strukturen)
pub mod simple_geometry {
    use crate::math::types::Point2D;

    pub fn distance(p1: Point2D, p2: Point2D) -> f64 {
        (p2.x - p1.x).hypot(p2.y - p1.y)
    }

    /// Berechnet das Kreuzprodukt zweier 2D-Vektoren (Skalar)
    pub fn cross_product_2d(a: Point2D, b: Point2D) -> f64 {
        a.x * b.y - a.y * b.x
    }
}
