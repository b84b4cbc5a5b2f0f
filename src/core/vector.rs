//! 2D-Vektor-Mathematik für Kontrollpunkt-Positionen.
//!
//! Positionen sind Werte (`glam::DVec2`, f64). Entitäten setzen ihre Position
//! explizit über `set_xy`, die Arithmetik selbst ist rein.

use glam::DVec2;

/// Punkt bzw. Richtung in Welt-Koordinaten (UOL).
pub type Vector = DVec2;

/// Euklidische Distanz zwischen zwei Punkten.
#[inline]
pub fn distance(a: Vector, b: Vector) -> f64 {
    a.distance(b)
}

/// Senkrechter Abstand von `point` zur unendlichen Geraden durch `source`
/// mit Einheits-Richtung `direction`.
#[inline]
pub fn distance_to_line(point: Vector, source: Vector, direction: Vector) -> f64 {
    direction.perp_dot(point - source).abs()
}

/// Projiziert `point` orthogonal auf die Gerade durch `source` mit Einheits-Richtung `direction`.
#[inline]
pub fn project_onto_line(point: Vector, source: Vector, direction: Vector) -> Vector {
    source + direction * direction.dot(point - source)
}

/// Schnittpunkt zweier Geraden (jeweils Stützpunkt + Richtung).
///
/// Gibt `None` zurück, wenn die Geraden (nahezu) parallel sind.
pub fn line_intersection(
    source_a: Vector,
    direction_a: Vector,
    source_b: Vector,
    direction_b: Vector,
) -> Option<Vector> {
    let denom = direction_a.perp_dot(direction_b);
    if denom.abs() < f64::EPSILON {
        return None;
    }
    let t = (source_b - source_a).perp_dot(direction_b) / denom;
    Some(source_a + direction_a * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_to_horizontal_line() {
        let d = distance_to_line(
            Vector::new(3.0, 2.0),
            Vector::new(-5.0, 0.0),
            Vector::new(1.0, 0.0),
        );
        assert_relative_eq!(d, 2.0);
    }

    #[test]
    fn projection_lands_on_line() {
        let p = project_onto_line(
            Vector::new(4.0, 1.0),
            Vector::ZERO,
            Vector::new(1.0, 1.0).normalize(),
        );
        assert_relative_eq!(p.x, 2.5, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn intersection_of_axes() {
        let hit = line_intersection(
            Vector::new(0.0, 7.0),
            Vector::X,
            Vector::new(3.0, 0.0),
            Vector::Y,
        )
        .expect("Achsen schneiden sich");
        assert_relative_eq!(hit.x, 3.0);
        assert_relative_eq!(hit.y, 7.0);
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        assert!(line_intersection(Vector::ZERO, Vector::X, Vector::Y, Vector::X).is_none());
    }
}
