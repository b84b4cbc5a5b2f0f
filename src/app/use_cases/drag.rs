//! Drag-Schritt eines Kontrollpunkts: Folger auflösen → Magnet → DragControls.

use super::magnet_references::build_references;
use crate::app::commands::{CommandError, DragControls};
use crate::app::interaction::is_interactive;
use crate::app::AppState;
use crate::core::{resolve_followers, snap, Uid, Vector};

/// Parameter eines Drag-Schritts (bereits in Welt-Koordinaten).
#[derive(Debug, Clone, PartialEq)]
pub struct DragStep {
    /// Gezogener Kontrollpunkt
    pub target: Uid,
    /// Vorgeschlagene Position (Zeigerposition in Welt-Koordinaten)
    pub proposed: Vector,
    /// Innere Punkte dürfen folgen (Ctrl nicht gedrückt)
    pub include_interior: bool,
    /// Magnet anwenden (Shift oder aktiver Touch-Magnet)
    pub magnet: bool,
}

/// Führt einen Drag-Schritt aus.
///
/// Gesperrte, unsichtbare oder unbekannte Punkte werden still ignoriert.
/// Aufeinanderfolgende Schritte auf denselben Punkt werden in der History
/// innerhalb des Merge-Fensters zu einem Undo-Schritt zusammengefasst.
pub fn drag_control(state: &mut AppState, step: DragStep) -> Result<(), CommandError> {
    if !is_interactive(&state.graph, &step.target, state.interaction.grab_and_move) {
        log::debug!("Drag auf {} verworfen: nicht interaktiv", step.target);
        return Ok(());
    }
    let Some(location) = state.graph.locate(&step.target) else {
        return Ok(());
    };
    let from = state.graph.paths()[location.path].controls[location.index].position;
    let pos_before_drag = state.interaction.gesture.begin_drag(&step.target, from);

    let partition = resolve_followers(
        &state.graph,
        location,
        &state.selection.selected,
        step.include_interior,
    );

    let to = if step.magnet {
        let references = build_references(&state.graph, location, &partition, pos_before_drag);
        let result = snap(
            step.proposed,
            &references,
            state.options.control_magnet_distance,
        );
        state.set_magnet(result.applied);
        result.position
    } else {
        state.set_magnet(Vec::new());
        step.proposed
    };

    let followers = partition.follower_uids(&state.graph);
    let label = format!(
        "Kontrollpunkt {} mit {} Folgern verschieben",
        step.target,
        followers.len()
    );
    let command = DragControls::new(step.target, from, to, followers);
    let window = state.options.drag_merge_window();
    state.run_command(label, command.into(), Some(window))
}

/// Beendet den Drag: Magnet-Feedback ausblenden, Geste abschließen.
pub fn end_drag(state: &mut AppState) {
    state.set_magnet(Vec::new());
    state.interaction.gesture.release();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Control, ManualClock, Path, PathGraph};

    fn state() -> AppState {
        AppState::new()
            .with_clock(ManualClock::new())
            .with_graph(PathGraph::from_paths(vec![Path::new(
                "p",
                vec![
                    Control::end("e0", Vector::new(0.0, 0.0), 0.0),
                    Control::interior("c1", Vector::new(5.0, 5.0)),
                    Control::end("e1", Vector::new(10.0, 0.0), 0.0),
                ],
            )]))
    }

    fn pos(state: &AppState, uid: &str) -> Vector {
        state.graph.control(&Uid::from(uid)).unwrap().position
    }

    fn step(target: &str, proposed: Vector, include_interior: bool, magnet: bool) -> DragStep {
        DragStep {
            target: Uid::from(target),
            proposed,
            include_interior,
            magnet,
        }
    }

    #[test]
    fn end_control_pulls_adjacent_interior_control() {
        let mut s = state();
        drag_control(&mut s, step("e0", Vector::new(2.0, 0.0), true, false)).unwrap();
        assert_eq!(pos(&s, "e0"), Vector::new(2.0, 0.0));
        assert_eq!(pos(&s, "c1"), Vector::new(7.0, 5.0));
        assert_eq!(pos(&s, "e1"), Vector::new(10.0, 0.0));
    }

    #[test]
    fn excluding_interior_moves_only_the_end_control() {
        let mut s = state();
        drag_control(&mut s, step("e0", Vector::new(2.0, 0.0), false, false)).unwrap();
        assert_eq!(pos(&s, "e0"), Vector::new(2.0, 0.0));
        assert_eq!(pos(&s, "c1"), Vector::new(5.0, 5.0));
    }

    #[test]
    fn magnet_snaps_to_remaining_axes_and_publishes_references() {
        let mut s = state();
        // e1 steht auf y = 0 → horizontale Achse durch e1
        drag_control(&mut s, step("c1", Vector::new(3.0, 0.4), true, true)).unwrap();
        assert_eq!(pos(&s, "c1").y, 0.0);
        assert!(!s.magnet.is_empty());

        end_drag(&mut s);
        assert!(s.magnet.is_empty());
    }

    #[test]
    fn locked_control_is_not_dragged() {
        let mut s = state();
        s.graph.control_mut(&Uid::from("e0")).unwrap().lock = true;
        drag_control(&mut s, step("e0", Vector::new(2.0, 0.0), true, false)).unwrap();
        assert_eq!(pos(&s, "e0"), Vector::ZERO);
        assert!(!s.can_undo());
    }

    #[test]
    fn consecutive_steps_collapse_into_one_undo() {
        let mut s = state();
        for x in [1.0, 2.0, 3.0] {
            drag_control(&mut s, step("e1", Vector::new(10.0 + x, 0.0), false, false)).unwrap();
        }
        assert_eq!(s.history.undo_len(), 1);
        assert!(s.undo());
        assert_eq!(pos(&s, "e1"), Vector::new(10.0, 0.0));
    }
}
