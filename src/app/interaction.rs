//! Transienter Zustand der aktiven Geste.
//!
//! Drei unabhängige Teil-Automaten:
//! - `GestureState`: Idle → Pressed → Dragging → Idle (plus Suppressed)
//! - `TouchMagnet`: Idle → Arming → Active (Touch-Magnet nach Stillhalten)
//! - `WheelArbiter`: wer das Mausrad gerade benutzen darf

mod gesture;
mod touch_magnet;
mod wheel;

pub use gesture::{GesturePhase, GestureState};
pub use touch_magnet::{TouchMagnet, TouchMagnetPhase};
pub use wheel::{WheelArbiter, WheelPurpose};

use crate::core::{PathGraph, Uid};

/// Gesamter Interaktionszustand der Sitzung.
#[derive(Debug, Default)]
pub struct InteractionState {
    /// Zeiger-Geste (Maus oder einzelner Touch)
    pub gesture: GestureState,
    /// Touch-Magnet-Automat
    pub touch: TouchMagnet,
    /// Mausrad-Zuteilung
    pub wheel: WheelArbiter,
    /// Kamera-Modus "Greifen und Verschieben": Kontrollpunkte sind nicht interaktiv
    pub grab_and_move: bool,
}

impl InteractionState {
    /// Erstellt den Ruhezustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Magnet ist per Touch-Stillhalten aktiviert.
    pub fn touch_magnet_active(&self) -> bool {
        self.touch.is_active()
    }
}

/// Prüft, ob mit dem Kontrollpunkt interagiert werden darf.
///
/// Gesperrte oder unsichtbare Punkte bzw. Pfade sowie der Greif-Modus der
/// Kamera verhindern jede Interaktion.
pub fn is_interactive(graph: &PathGraph, uid: &Uid, grab_and_move: bool) -> bool {
    if grab_and_move {
        return false;
    }
    let Some(location) = graph.locate(uid) else {
        return false;
    };
    let path = &graph.paths()[location.path];
    let control = &path.controls[location.index];
    !control.lock && control.visible && !path.lock && path.visible
}
