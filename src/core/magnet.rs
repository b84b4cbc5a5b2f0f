//! Magnet: rastet einen vorgeschlagenen Punkt auf nahe Hilfslinien ein.
//!
//! Eine Referenz ist eine unendliche Gerade durch `source` mit Richtung
//! `heading`. Liegt der Punkt innerhalb der Toleranz (inklusive), wird er auf
//! die nächste Gerade projiziert; eine zusätzliche orthogonale Gerade in
//! Reichweite liefert den Schnittpunkt beider.

use super::{
    bound_heading, distance_to_line, heading_direction, is_orthogonal, line_intersection,
    project_onto_line, Vector,
};
use serde::Serialize;

/// Hilfslinie für das Einrasten. Wird pro Drag-Schritt neu aufgebaut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MagnetReference {
    /// Stützpunkt der Geraden
    pub source: Vector,
    /// Richtung in Grad (`[0, 360)`)
    pub heading: f64,
}

impl MagnetReference {
    /// Erstellt eine Referenz mit normalisiertem Heading.
    pub fn new(source: Vector, heading: f64) -> Self {
        Self {
            source,
            heading: bound_heading(heading),
        }
    }

    /// Horizontale und vertikale Hilfslinie durch `source`, gedreht um `origin_heading`.
    pub fn axes(source: Vector, origin_heading: f64) -> [Self; 2] {
        [
            Self::new(source, origin_heading),
            Self::new(source, origin_heading + 90.0),
        ]
    }

    /// Einheits-Richtung der Geraden.
    pub fn direction(&self) -> Vector {
        heading_direction(self.heading)
    }

    /// Senkrechter Abstand eines Punkts zur Geraden.
    pub fn distance_to(&self, point: Vector) -> f64 {
        distance_to_line(point, self.source, self.direction())
    }

    /// Projektion eines Punkts auf die Gerade.
    pub fn project(&self, point: Vector) -> Vector {
        project_onto_line(point, self.source, self.direction())
    }
}

/// Ergebnis eines Magnet-Durchlaufs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MagnetResult {
    /// Eingerastete (oder unveränderte) Position
    pub position: Vector,
    /// Tatsächlich angewendete Referenzen (für visuelles Feedback)
    pub applied: Vec<MagnetReference>,
}

/// Rastet `proposed` auf die nächste Referenz innerhalb `tolerance` ein.
///
/// Bei gleichem Abstand gewinnt die zuerst konstruierte Referenz. Ohne
/// Referenz in Reichweite bleibt der Punkt unverändert und `applied` leer.
pub fn snap(proposed: Vector, references: &[MagnetReference], tolerance: f64) -> MagnetResult {
    let Some((best, _)) = nearest_within(proposed, references.iter(), tolerance) else {
        return MagnetResult {
            position: proposed,
            applied: Vec::new(),
        };
    };

    let partner = nearest_within(
        proposed,
        references
            .iter()
            .filter(|r| is_orthogonal(r.heading, best.heading)),
        tolerance,
    );

    if let Some((partner, _)) = partner {
        if let Some(hit) = line_intersection(
            best.source,
            best.direction(),
            partner.source,
            partner.direction(),
        ) {
            return MagnetResult {
                position: hit,
                applied: vec![*best, *partner],
            };
        }
    }

    MagnetResult {
        position: best.project(proposed),
        applied: vec![*best],
    }
}

/// Nächste Referenz mit Abstand ≤ `tolerance`; bei Gleichstand die erste.
fn nearest_within<'a>(
    point: Vector,
    references: impl Iterator<Item = &'a MagnetReference>,
    tolerance: f64,
) -> Option<(&'a MagnetReference, f64)> {
    let mut best: Option<(&MagnetReference, f64)> = None;
    for reference in references {
        let dist = reference.distance_to(point);
        if !(dist <= tolerance) {
            continue;
        }
        match best {
            Some((_, best_dist)) if best_dist <= dist => {}
            _ => best = Some((reference, dist)),
        }
    }
    best
}
