//! Kontrollpunkte eines Pfads: Endpunkte (mit Heading) und innere Stützpunkte.

use super::{bound_heading, Uid, Vector};

/// Variante eines Kontrollpunkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlKind {
    /// Wegpunkt am Segment-Ende, trägt ein Heading in Grad (`[0, 360)`)
    End {
        /// Normalisiertes Heading
        heading: f64,
    },
    /// Innerer, formgebender Kontrollpunkt ohne Heading
    Interior,
}

/// Ein Kontrollpunkt. Gehört exklusiv zu genau einem Pfad.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    /// Stabile ID
    pub uid: Uid,
    /// Position in Welt-Koordinaten
    pub position: Vector,
    /// Gesperrt: keine Interaktion möglich
    pub lock: bool,
    /// Sichtbar: unsichtbare Punkte folgen nicht und dienen nicht als Referenz
    pub visible: bool,
    /// Endpunkt oder innerer Punkt
    pub kind: ControlKind,
}

impl Control {
    /// Erstellt einen Endpunkt mit Heading.
    pub fn end(uid: impl Into<Uid>, position: Vector, heading: f64) -> Self {
        Self {
            uid: uid.into(),
            position,
            lock: false,
            visible: true,
            kind: ControlKind::End {
                heading: bound_heading(heading),
            },
        }
    }

    /// Erstellt einen inneren Kontrollpunkt.
    pub fn interior(uid: impl Into<Uid>, position: Vector) -> Self {
        Self {
            uid: uid.into(),
            position,
            lock: false,
            visible: true,
            kind: ControlKind::Interior,
        }
    }

    /// Gibt `true` zurück, wenn es sich um einen Endpunkt handelt.
    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self.kind, ControlKind::End { .. })
    }

    /// Heading des Endpunkts, `None` für innere Punkte.
    #[inline]
    pub fn heading(&self) -> Option<f64> {
        match self.kind {
            ControlKind::End { heading } => Some(heading),
            ControlKind::Interior => None,
        }
    }

    /// Setzt das Heading (normalisiert). Auf inneren Punkten wirkungslos.
    ///
    /// Gibt zurück, ob ein Heading gesetzt wurde.
    pub fn set_heading(&mut self, value: f64) -> bool {
        match &mut self.kind {
            ControlKind::End { heading } => {
                *heading = bound_heading(value);
                true
            }
            ControlKind::Interior => false,
        }
    }

    /// Setzt die Position.
    #[inline]
    pub fn set_xy(&mut self, position: Vector) {
        self.position = position;
    }

    /// Builder: Sperr-Flag setzen.
    pub fn locked(mut self, lock: bool) -> Self {
        self.lock = lock;
        self
    }

    /// Builder: Sichtbarkeit setzen.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn end_control_normalizes_heading() {
        let mut c = Control::end("e", Vector::ZERO, -30.0);
        assert_relative_eq!(c.heading().unwrap(), 330.0);
        assert!(c.set_heading(725.0));
        assert_relative_eq!(c.heading().unwrap(), 5.0);
    }

    #[test]
    fn interior_control_has_no_heading() {
        let mut c = Control::interior("c", Vector::new(1.0, 2.0));
        assert!(c.heading().is_none());
        assert!(!c.set_heading(10.0));
        assert!(!c.is_end());
    }
}
