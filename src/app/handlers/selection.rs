//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Uid;

/// Drücken auf einen Kontrollpunkt.
pub fn press(state: &mut AppState, target: &Uid, shift: bool) {
    use_cases::selection::press_control(state, target, shift);
}

/// Klick auf einen Kontrollpunkt.
pub fn click(state: &mut AppState, target: &Uid, shift: bool) {
    use_cases::selection::click_control(state, target, shift);
}

/// Setzt das Hover-Element.
pub fn set_hover(state: &mut AppState, target: Option<Uid>) {
    use_cases::selection::set_hover(state, target);
}

/// Selektiert alle Punkte eines Pfads.
pub fn select_all_in_path(state: &mut AppState, path: &Uid) {
    use_cases::selection::select_all_in_path(state, path);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear(state);
}

/// Klappt einen Pfad auf oder zu.
pub fn toggle_expanded(state: &mut AppState, path: &Uid) {
    use_cases::selection::toggle_expanded(state, path);
}
