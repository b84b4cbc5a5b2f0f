use crate::app::commands::ItemPatch;
use crate::core::{TimerHandle, Uid, Vector};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Geste ───────────────────────────────────────────────────
    /// Kontrollpunkt drücken (Selektion, Ausgangsposition merken)
    PressControl { target: Uid, shift: bool },
    /// Restliche Geste ignorieren (Mittelklick, Multi-Touch)
    SuppressGesture,
    /// Geste beenden
    ReleasePointer,
    /// Klick auswerten (Shift-Klick wählt ab, sofern nicht geschützt)
    ClickControl { target: Uid, shift: bool },
    /// Kontrollpunkt samt Folgern verschieben
    DragControl {
        target: Uid,
        world_pos: Vector,
        include_interior: bool,
        magnet: bool,
    },
    /// Drag beenden
    EndDrag,
    /// Hover-Element setzen
    SetHover { target: Option<Uid> },
    /// Heading per Mausrad ändern (nur wenn das Rad frei ist)
    AdjustHeadingByWheel { target: Uid, delta_y: f64 },
    /// Mausrad für die Kamera beanspruchen
    ClaimWheelForCamera,

    // ── Touch ───────────────────────────────────────────────────
    /// Touch-Geste auf einem Kontrollpunkt beginnen
    TouchBegin { target: Uid },
    /// Touch-Bewegung: Magnet-Timer neu starten
    TouchMove,
    /// Touch-Geste beenden
    TouchEnd,
    /// Laufende Geste wegen Multi-Touch abbrechen
    AbortGesture,
    /// Fälliger Timer
    TimerFired { handle: TimerHandle },

    // ── Kamera ──────────────────────────────────────────────────
    /// Greifen-und-Verschieben-Modus setzen
    SetGrabAndMove { active: bool },

    // ── Verlauf ─────────────────────────────────────────────────
    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,

    // ── Editing ─────────────────────────────────────────────────
    /// Felder mehrerer Pfade/Kontrollpunkte ändern
    UpdateItems { targets: Vec<Uid>, patch: ItemPatch },
    /// Pfade und Endpunkte löschen
    RemovePathsAndEndControls { targets: Vec<Uid> },
    /// Geraden Pfad anlegen
    AddStraightPath { from: Vector, to: Vector },

    // ── Selektion ───────────────────────────────────────────────
    /// Alle Punkte eines Pfads selektieren
    SelectAllInPath { path: Uid },
    /// Selektion aufheben
    ClearSelection,
    /// Pfad auf-/zuklappen
    ToggleExpanded { path: Uid },

    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
}
