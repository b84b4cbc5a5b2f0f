//! Use-Cases für Feld-Änderungen, Löschen und Anlegen von Pfaden.

use crate::app::changes::StateChange;
use crate::app::commands::{
    AddPath, CommandError, ItemPatch, RemovePathsAndEndControls, UpdatePathTreeItems,
};
use crate::app::interaction::WheelPurpose;
use crate::app::AppState;
use crate::core::{to_heading, Control, Path, Uid, Vector};

/// Ändert das Heading eines Endpunkts per Mausrad.
///
/// Wirkt nur, wenn das Mausrad nicht gerade von der Kamera belegt ist.
pub fn adjust_heading_by_wheel(
    state: &mut AppState,
    target: &Uid,
    delta_y: f64,
) -> Result<(), CommandError> {
    let Some(heading) = state.graph.control(target).and_then(Control::heading) else {
        log::debug!("Mausrad: {} ist kein Endpunkt", target);
        return Ok(());
    };
    let now = state.clock.now();
    let hold = state.options.wheel_claim();
    if !state.interaction.wheel.claim(WheelPurpose::Heading, now, hold) {
        log::debug!("Mausrad: von der Kamera belegt");
        return Ok(());
    }

    let patch = ItemPatch::heading(heading + delta_y * state.options.wheel_heading_scale);
    let command = UpdatePathTreeItems::new(vec![target.clone()], patch);
    state.run_command(
        format!("Heading von {} per Mausrad ändern", target),
        command.into(),
        None,
    )
}

/// Wendet einen Patch auf mehrere Pfade/Kontrollpunkte an.
///
/// Unbekannte Uids werden vorab aussortiert; bleibt nichts übrig, passiert nichts.
pub fn update_items(
    state: &mut AppState,
    targets: Vec<Uid>,
    patch: ItemPatch,
) -> Result<(), CommandError> {
    let targets: Vec<Uid> = targets
        .into_iter()
        .filter(|uid| state.graph.tree_item(uid).is_some())
        .collect();
    if targets.is_empty() {
        log::debug!("Update: keine gültigen Ziele");
        return Ok(());
    }
    let label = format!("{} Element(e) aktualisieren", targets.len());
    state.run_command(label, UpdatePathTreeItems::new(targets, patch).into(), None)
}

/// Löscht Pfade und Endpunkte (Rechtsklick oder Entf).
pub fn remove_paths_and_end_controls(
    state: &mut AppState,
    targets: Vec<Uid>,
) -> Result<(), CommandError> {
    let command = RemovePathsAndEndControls::new(targets);
    if !command.has_effect_on(&state.graph) {
        log::debug!("Entfernen: keine Pfade oder Endpunkte unter den Zielen");
        return Ok(());
    }
    state.run_command("Pfade und Endpunkte entfernen", command.into(), None)?;
    log::info!("Pfade/Endpunkte entfernt");
    Ok(())
}

/// Legt einen geraden Pfad (ein kubisches Segment) zwischen zwei Punkten an.
pub fn add_straight_path(state: &mut AppState, from: Vector, to: Vector) -> Result<(), CommandError> {
    if from == to {
        log::debug!("Pfad anlegen: Start und Ende identisch");
        return Ok(());
    }
    let heading = to_heading(to - from);
    let path_uid = state.graph.next_path_uid();
    let controls = vec![
        Control::end(state.graph.next_control_uid(), from, heading),
        Control::interior(state.graph.next_control_uid(), from.lerp(to, 1.0 / 3.0)),
        Control::interior(state.graph.next_control_uid(), from.lerp(to, 2.0 / 3.0)),
        Control::end(state.graph.next_control_uid(), to, heading),
    ];
    let path = Path::new(path_uid.clone(), controls);
    let command = AddPath::append(&state.graph, path);
    state.run_command(format!("Pfad {} hinzufügen", path_uid), command.into(), None)?;
    if state.selection.add_expanded(path_uid) {
        state.changes.notify(StateChange::Expanded);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ManualClock, PathGraph};
    use approx::assert_relative_eq;

    fn state() -> (AppState, ManualClock) {
        let clock = ManualClock::new();
        let state = AppState::new()
            .with_clock(clock.clone())
            .with_graph(PathGraph::from_paths(vec![Path::new(
                "p",
                vec![
                    Control::end("e0", Vector::ZERO, 350.0),
                    Control::interior("c1", Vector::ONE),
                    Control::end("e1", Vector::X, 0.0),
                ],
            )]));
        (state, clock)
    }

    fn heading(state: &AppState, uid: &str) -> f64 {
        state.graph.control(&Uid::from(uid)).unwrap().heading().unwrap()
    }

    #[test]
    fn wheel_adjusts_heading_with_scale_and_wraps() {
        let (mut s, _) = state();
        adjust_heading_by_wheel(&mut s, &Uid::from("e0"), 150.0).unwrap();
        assert_relative_eq!(heading(&s, "e0"), 5.0, epsilon = 1e-9);
        assert_eq!(s.history.undo_len(), 1);
    }

    #[test]
    fn wheel_is_ignored_while_camera_owns_it() {
        let (mut s, clock) = state();
        let now = s.clock.now();
        s.interaction
            .wheel
            .claim(WheelPurpose::Camera, now, s.options.wheel_claim());
        adjust_heading_by_wheel(&mut s, &Uid::from("e0"), 10.0).unwrap();
        assert_relative_eq!(heading(&s, "e0"), 350.0);

        clock.advance(s.options.wheel_claim());
        adjust_heading_by_wheel(&mut s, &Uid::from("e0"), 10.0).unwrap();
        assert_relative_eq!(heading(&s, "e0"), 351.0, epsilon = 1e-9);
    }

    #[test]
    fn wheel_on_interior_control_does_nothing() {
        let (mut s, _) = state();
        adjust_heading_by_wheel(&mut s, &Uid::from("c1"), 10.0).unwrap();
        assert!(!s.can_undo());
    }

    #[test]
    fn add_straight_path_creates_well_formed_path() {
        let (mut s, _) = state();
        add_straight_path(&mut s, Vector::ZERO, Vector::new(0.0, 30.0)).unwrap();
        assert_eq!(s.graph.path_count(), 2);
        let path = &s.graph.paths()[1];
        assert!(path.is_well_formed());
        assert_eq!(path.controls.len(), 4);
        assert_relative_eq!(path.controls[0].heading().unwrap(), 0.0);
        assert!(s.selection.is_expanded(&path.uid));

        assert!(s.undo());
        assert_eq!(s.graph.path_count(), 1);
    }
}
