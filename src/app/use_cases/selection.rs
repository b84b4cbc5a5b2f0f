//! Use-Cases für Selektion, Hover und Aufklapp-Zustand.

use crate::app::changes::StateChange;
use crate::app::AppState;
use crate::core::Uid;

/// Drücken auf einen Kontrollpunkt.
///
/// Mit Shift wird der Punkt zur Selektion hinzugefügt und sein Pfad
/// aufgeklappt; war er neu, schützt `pending_selection_guard` ihn vor dem
/// Abwählen durch den folgenden Klick. Ohne Shift ersetzt ein nicht
/// selektierter Punkt die Selektion.
pub fn press_control(state: &mut AppState, target: &Uid, shift: bool) {
    let Some(position) = state.graph.control(target).map(|c| c.position) else {
        log::debug!("Drücken: {} nicht gefunden", target);
        return;
    };
    state
        .interaction
        .gesture
        .begin_press(target.clone(), position);

    if shift {
        let newly_selected = state.selection.select(target.clone());
        state.interaction.gesture.pending_selection_guard = newly_selected;
        if newly_selected {
            state.changes.notify(StateChange::Selection);
        }
        let path_uid = state.graph.owner_of(target).map(|p| p.uid.clone());
        if let Some(path_uid) = path_uid {
            if state.selection.add_expanded(path_uid) {
                state.changes.notify(StateChange::Expanded);
            }
        }
    } else if !state.selection.is_selected(target) {
        replace_selection(state, target);
    }
}

/// Klick auf einen Kontrollpunkt (nach dem Loslassen).
///
/// Shift-Klick wählt den Punkt ab, außer der Schutz ist gesetzt. Der Schutz
/// wird in jedem Fall verbraucht.
pub fn click_control(state: &mut AppState, target: &Uid, shift: bool) {
    let guarded = state.interaction.gesture.consume_guard();
    if !shift {
        return;
    }
    if guarded {
        log::debug!("Shift-Klick auf {}: gerade erst selektiert, bleibt", target);
        return;
    }
    if state.selection.unselect(target) {
        state.changes.notify(StateChange::Selection);
    }
}

/// Touch-Beginn: nicht selektierte Punkte ersetzen die Selektion.
pub fn touch_control(state: &mut AppState, target: &Uid) {
    let Some(position) = state.graph.control(target).map(|c| c.position) else {
        return;
    };
    state
        .interaction
        .gesture
        .begin_press(target.clone(), position);
    if !state.selection.is_selected(target) {
        replace_selection(state, target);
    }
}

fn replace_selection(state: &mut AppState, target: &Uid) {
    state.selection.set_selected([target.clone()]);
    state.interaction.gesture.pending_selection_guard = false;
    state.changes.notify(StateChange::Selection);
}

/// Setzt das Hover-Element.
pub fn set_hover(state: &mut AppState, target: Option<Uid>) {
    if state.selection.set_hover(target) {
        state.changes.notify(StateChange::Hover);
    }
}

/// Selektiert alle Kontrollpunkte eines Pfads.
pub fn select_all_in_path(state: &mut AppState, path_uid: &Uid) {
    let Some(path) = state.graph.path(path_uid) else {
        log::debug!("Pfad {} nicht gefunden", path_uid);
        return;
    };
    let uids: Vec<Uid> = path.controls.iter().map(|c| c.uid.clone()).collect();
    let mut changed = false;
    for uid in uids {
        changed |= state.selection.select(uid);
    }
    if changed {
        state.changes.notify(StateChange::Selection);
    }
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    if !state.selection.selected.is_empty() {
        state.selection.clear();
        state.changes.notify(StateChange::Selection);
    }
}

/// Klappt einen Pfad auf bzw. zu.
pub fn toggle_expanded(state: &mut AppState, path_uid: &Uid) {
    if state.graph.path(path_uid).is_none() {
        return;
    }
    if !state.selection.remove_expanded(path_uid) {
        state.selection.add_expanded(path_uid.clone());
    }
    state.changes.notify(StateChange::Expanded);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Control, Path, PathGraph, Vector};

    fn state() -> AppState {
        AppState::new().with_graph(PathGraph::from_paths(vec![Path::new(
            "p",
            vec![
                Control::end("e0", Vector::ZERO, 0.0),
                Control::interior("c1", Vector::ONE),
                Control::end("e1", Vector::X, 0.0),
            ],
        )]))
    }

    #[test]
    fn shift_press_then_click_keeps_new_selection() {
        let mut s = state();
        press_control(&mut s, &Uid::from("e0"), true);
        assert!(s.selection.is_selected(&Uid::from("e0")));
        assert!(s.selection.is_expanded(&Uid::from("p")));

        click_control(&mut s, &Uid::from("e0"), true);
        assert!(s.selection.is_selected(&Uid::from("e0")));

        press_control(&mut s, &Uid::from("e0"), true);
        click_control(&mut s, &Uid::from("e0"), true);
        assert!(!s.selection.is_selected(&Uid::from("e0")));
    }

    #[test]
    fn plain_press_replaces_selection_only_for_unselected_targets() {
        let mut s = state();
        s.selection.set_selected(["e0", "e1"].map(Uid::from));
        press_control(&mut s, &Uid::from("e1"), false);
        assert_eq!(s.selection.selected.len(), 2);

        press_control(&mut s, &Uid::from("c1"), false);
        assert_eq!(s.selection.selected.len(), 1);
        assert!(s.selection.is_selected(&Uid::from("c1")));
    }

    #[test]
    fn select_all_in_path_and_clear_notify_once() {
        let mut s = state();
        select_all_in_path(&mut s, &Uid::from("p"));
        assert_eq!(s.selection.selected.len(), 3);
        assert_eq!(s.changes.drain(), vec![StateChange::Selection]);

        clear(&mut s);
        clear(&mut s);
        assert_eq!(s.changes.drain(), vec![StateChange::Selection]);
    }

    #[test]
    fn toggle_expanded_flips_state() {
        let mut s = state();
        toggle_expanded(&mut s, &Uid::from("p"));
        assert!(s.selection.is_expanded(&Uid::from("p")));
        toggle_expanded(&mut s, &Uid::from("p"));
        assert!(!s.selection.is_expanded(&Uid::from("p")));
    }
}
