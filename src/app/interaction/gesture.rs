use crate::core::{Uid, Vector};

/// Phase der aktiven Zeiger-Geste.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GesturePhase {
    /// Keine Geste aktiv
    #[default]
    Idle,
    /// Kontrollpunkt gedrückt, noch nicht bewegt
    Pressed {
        /// Gedrückter Kontrollpunkt
        target: Uid,
    },
    /// Kontrollpunkt wird gezogen
    Dragging {
        /// Gezogener Kontrollpunkt
        target: Uid,
    },
    /// Geste wird bis zum Loslassen ignoriert (Mittelklick, Multi-Touch)
    Suppressed,
}

/// Zustand einer Zeiger-Geste inklusive Selektions-Schutz.
///
/// `pending_selection_guard` verhindert, dass der Klick, der auf ein
/// Shift-Drücken folgt, die gerade hinzugefügte Selektion wieder entfernt.
/// Gesetzt wird er beim Shift-Drücken mit neuer Selektion und beim
/// Drag-Start; der nächste Klick verbraucht ihn, das nächste Drücken setzt
/// ihn zurück.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    /// Aktuelle Phase
    pub phase: GesturePhase,
    /// Schutz gegen sofortiges Abwählen beim nächsten Klick
    pub pending_selection_guard: bool,
    /// Position des gedrückten Punkts vor dem Drag (Magnet-Referenz)
    pub pos_before_drag: Option<Vector>,
}

impl GestureState {
    /// Beginnt eine Geste auf `target`.
    pub fn begin_press(&mut self, target: Uid, position: Vector) {
        self.phase = GesturePhase::Pressed { target };
        self.pending_selection_guard = false;
        self.pos_before_drag = Some(position);
    }

    /// Wechselt in die Drag-Phase und liefert die Position vor dem Drag.
    ///
    /// Ohne vorheriges Drücken auf denselben Punkt gilt `current` als Ausgangsposition.
    pub fn begin_drag(&mut self, target: &Uid, current: Vector) -> Vector {
        let same_target = matches!(
            &self.phase,
            GesturePhase::Pressed { target: t } | GesturePhase::Dragging { target: t } if t == target
        );
        let origin = match self.pos_before_drag {
            Some(pos) if same_target => pos,
            _ => current,
        };
        if !matches!(self.phase, GesturePhase::Dragging { .. }) {
            self.pending_selection_guard = true;
        }
        self.phase = GesturePhase::Dragging {
            target: target.clone(),
        };
        self.pos_before_drag = Some(origin);
        origin
    }

    /// Beendet die Geste (Loslassen, Drag-Ende, Touch-Ende).
    ///
    /// Der Selektions-Schutz bleibt für den nachfolgenden Klick erhalten.
    pub fn release(&mut self) {
        self.phase = GesturePhase::Idle;
        self.pos_before_drag = None;
    }

    /// Ignoriert die restliche Geste bis zum Loslassen.
    pub fn suppress(&mut self) {
        self.phase = GesturePhase::Suppressed;
        self.pos_before_drag = None;
    }

    /// Verbraucht den Selektions-Schutz und gibt seinen Wert zurück.
    pub fn consume_guard(&mut self) -> bool {
        std::mem::take(&mut self.pending_selection_guard)
    }

    /// Gibt `true` zurück, wenn die Geste unterdrückt ist.
    pub fn is_suppressed(&self) -> bool {
        self.phase == GesturePhase::Suppressed
    }

    /// Gibt `true` zurück, während gezogen wird.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }
}
