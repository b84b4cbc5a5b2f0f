//! Handler für Gesten-, Touch-, Mausrad- und Options-Zustand.

use crate::app::changes::StateChange;
use crate::app::interaction::WheelPurpose;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{TimerHandle, Uid};
use crate::shared::EditorOptions;

/// Ignoriert den Rest der aktuellen Geste.
pub fn suppress_gesture(state: &mut AppState) {
    state.interaction.gesture.suppress();
}

/// Zeiger losgelassen.
pub fn release_pointer(state: &mut AppState) {
    state.interaction.gesture.release();
}

/// Beansprucht das Mausrad für die Kamera.
pub fn claim_wheel_for_camera(state: &mut AppState) {
    let now = state.clock.now();
    let hold = state.options.wheel_claim();
    if !state
        .interaction
        .wheel
        .claim(WheelPurpose::Camera, now, hold)
    {
        log::debug!("Mausrad: gerade für Headings in Benutzung");
    }
}

/// Touch auf einem Kontrollpunkt: selektieren und Magnet-Timer starten.
pub fn touch_begin(state: &mut AppState, target: &Uid) {
    use_cases::selection::touch_control(state, target);
    arm_touch_magnet(state);
}

/// Touch-Bewegung: Magnet-Timer neu starten (solange er nicht aktiv ist).
pub fn touch_move(state: &mut AppState) {
    arm_touch_magnet(state);
}

fn arm_touch_magnet(state: &mut AppState) {
    let now = state.clock.now();
    let delay = state.options.touch_magnet_delay();
    state.interaction.touch.arm(&mut state.timers, now, delay);
}

/// Touch beendet: Magnet zurücksetzen, Geste abschließen.
pub fn touch_end(state: &mut AppState) {
    state.interaction.touch.reset(&mut state.timers);
    state.interaction.gesture.release();
    state.set_magnet(Vec::new());
}

/// Multi-Touch: laufende Geste abbrechen.
pub fn abort_gesture(state: &mut AppState) {
    state.interaction.touch.reset(&mut state.timers);
    state.interaction.gesture.suppress();
    state.set_magnet(Vec::new());
    log::debug!("Geste wegen Multi-Touch abgebrochen");
}

/// Wertet einen fälligen Timer aus.
pub fn timer_fired(state: &mut AppState, handle: TimerHandle) {
    if state.interaction.touch.on_timer(handle) {
        log::debug!("Touch-Magnet aktiv");
        state.changes.notify(StateChange::Magnet);
    }
}

/// Setzt den Greifen-und-Verschieben-Modus der Kamera.
pub fn set_grab_and_move(state: &mut AppState, active: bool) {
    state.interaction.grab_and_move = active;
    if active && state.interaction.gesture.is_dragging() {
        use_cases::drag::end_drag(state);
    }
}

/// Übernimmt neue Optionen.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.history.set_max_depth(options.history_max_depth);
    state.options = options;
    log::info!("Optionen übernommen");
}
