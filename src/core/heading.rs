//! Heading-Berechnungen (Grad, Kompass-Konvention).
//!
//! 0° zeigt nach +Y, 90° nach +X (im Uhrzeigersinn). Headings werden
//! immer auf `[0, 360)` normalisiert.

use super::Vector;

/// Normalisiert ein Heading auf `[0, 360)`.
pub fn bound_heading(heading: f64) -> f64 {
    let bounded = heading.rem_euclid(360.0);
    // rem_euclid kann bei winzigen negativen Werten exakt 360.0 liefern
    if bounded >= 360.0 {
        0.0
    } else {
        bounded
    }
}

/// Heading einer Richtung (Vektor) in Grad.
pub fn to_heading(direction: Vector) -> f64 {
    bound_heading(90.0 - direction.y.atan2(direction.x).to_degrees())
}

/// Einheits-Richtung eines Headings.
///
/// Achsparallele Headings liefern exakte Achsen, damit Hilfslinien durch
/// Kontrollpunkte ohne Rundungsrest verlaufen.
pub fn heading_direction(heading: f64) -> Vector {
    let heading = bound_heading(heading);
    if heading == 0.0 {
        Vector::Y
    } else if heading == 90.0 {
        Vector::X
    } else if heading == 180.0 {
        Vector::NEG_Y
    } else if heading == 270.0 {
        Vector::NEG_X
    } else {
        let (sin, cos) = heading.to_radians().sin_cos();
        Vector::new(sin, cos)
    }
}

/// Prüft, ob zwei Headings orthogonal zueinander sind (90° modulo 180°).
pub fn is_orthogonal(a: f64, b: f64) -> bool {
    let diff = bound_heading(a - b).rem_euclid(180.0);
    (diff - 90.0).abs() < 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bound_heading_wraps_into_range() {
        assert_relative_eq!(bound_heading(370.0), 10.0);
        assert_relative_eq!(bound_heading(-90.0), 270.0);
        assert_relative_eq!(bound_heading(360.0), 0.0);
        assert!(bound_heading(-1e-20) < 360.0);
    }

    #[test]
    fn to_heading_uses_compass_convention() {
        assert_relative_eq!(to_heading(Vector::new(0.0, 1.0)), 0.0);
        assert_relative_eq!(to_heading(Vector::new(1.0, 0.0)), 90.0);
        assert_relative_eq!(to_heading(Vector::new(0.0, -1.0)), 180.0);
        assert_relative_eq!(to_heading(Vector::new(-1.0, 0.0)), 270.0);
    }

    #[test]
    fn heading_direction_roundtrips_through_to_heading() {
        let dir = heading_direction(30.0);
        assert_relative_eq!(to_heading(dir), 30.0, epsilon = 1e-9);
        assert_eq!(heading_direction(90.0), Vector::X);
        assert_eq!(heading_direction(-360.0), Vector::Y);
    }

    #[test]
    fn orthogonality_is_modulo_half_turn() {
        assert!(is_orthogonal(0.0, 90.0));
        assert!(is_orthogonal(0.0, 270.0));
        assert!(is_orthogonal(45.0, 315.0));
        assert!(!is_orthogonal(0.0, 180.0));
        assert!(!is_orthogonal(10.0, 90.0));
    }
}
