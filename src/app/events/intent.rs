use crate::core::{Uid, Vector};
use crate::shared::EditorOptions;

/// Gedrückte Modifikator-Tasten eines Eingabe-Ereignisses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift: Selektion erweitern / Magnet
    pub shift: bool,
    /// Ctrl: innere Punkte folgen nicht / Zoom-Geste
    pub ctrl: bool,
}

impl Modifiers {
    /// Keine Taste gedrückt.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };
    /// Nur Shift.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };
    /// Nur Ctrl.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
    };
}

/// Maustaste eines Zeiger-Ereignisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Taste
    Primary,
    /// Mittlere Taste
    Middle,
    /// Rechte Taste
    Secondary,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Zeiger auf Kontrollpunkten ──────────────────────────────
    /// Maustaste über einem Kontrollpunkt gedrückt
    PointerPressed {
        target: Uid,
        button: PointerButton,
        modifiers: Modifiers,
    },
    /// Maustaste losgelassen
    PointerReleased { target: Uid },
    /// Klick (nach dem Loslassen) auf einen Kontrollpunkt
    PointerClicked {
        target: Uid,
        button: PointerButton,
        modifiers: Modifiers,
    },
    /// Kontrollpunkt wird an eine Bildschirm-Position gezogen (Maus oder Touch)
    DragMoved {
        target: Uid,
        screen_pos: Vector,
        modifiers: Modifiers,
    },
    /// Drag beendet
    DragEnded { target: Uid },
    /// Zeiger über einem anderen Element (oder keinem)
    HoverChanged { target: Option<Uid> },
    /// Mausrad über einem Kontrollpunkt
    WheelOverControl {
        target: Uid,
        delta: Vector,
        modifiers: Modifiers,
    },

    // ── Touch ───────────────────────────────────────────────────
    /// Touch auf einem Kontrollpunkt begonnen
    TouchStarted { target: Uid, touches: usize },
    /// Touch bewegt
    TouchMoved { target: Uid, touches: usize },
    /// Touch beendet
    TouchEnded { target: Uid },

    // ── Kamera ──────────────────────────────────────────────────
    /// Mausrad wurde für Kamera-Zoom/-Pan benutzt
    CameraWheelUsed,
    /// Greifen-und-Verschieben-Modus der Kamera umgeschaltet
    GrabAndMoveToggled { active: bool },

    // ── Verlauf ─────────────────────────────────────────────────
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    // ── Pfad-Baum / Panels ──────────────────────────────────────
    /// Sperr-Flag eines Pfads oder Kontrollpunkts umschalten
    ToggleLockRequested { target: Uid },
    /// Sichtbarkeit eines Pfads oder Kontrollpunkts umschalten
    ToggleVisibilityRequested { target: Uid },
    /// Heading eines Endpunkts direkt setzen (Eingabefeld)
    SetHeadingRequested { target: Uid, heading: f64 },
    /// Pfad umbenennen
    RenamePathRequested { path: Uid, name: String },
    /// Selektierte Pfade und Endpunkte löschen
    RemoveSelectedRequested,
    /// Alle Punkte eines Pfads selektieren
    SelectAllInPathRequested { path: Uid },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Pfad im Baum auf-/zuklappen
    ToggleExpandedRequested { path: Uid },
    /// Neuen geraden Pfad zwischen zwei Welt-Positionen anlegen
    AddPathRequested { from: Vector, to: Vector },
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },

    /// Periodischer Takt ohne Eingabe (fällige Timer auswerten)
    Tick,
}
