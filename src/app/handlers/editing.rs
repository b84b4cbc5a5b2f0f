//! Handler für Editing-Operationen (Drag, Felder, Löschen, Anlegen).

use crate::app::commands::ItemPatch;
use crate::app::use_cases;
use crate::app::use_cases::drag::DragStep;
use crate::app::AppState;
use crate::core::{Uid, Vector};

/// Verschiebt einen Kontrollpunkt samt Folgern.
pub fn drag(
    state: &mut AppState,
    target: Uid,
    world_pos: Vector,
    include_interior: bool,
    magnet: bool,
) -> anyhow::Result<()> {
    use_cases::drag::drag_control(
        state,
        DragStep {
            target,
            proposed: world_pos,
            include_interior,
            magnet,
        },
    )?;
    Ok(())
}

/// Beendet den laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::drag::end_drag(state);
}

/// Ändert das Heading per Mausrad.
pub fn adjust_heading_by_wheel(
    state: &mut AppState,
    target: &Uid,
    delta_y: f64,
) -> anyhow::Result<()> {
    use_cases::editing::adjust_heading_by_wheel(state, target, delta_y)?;
    Ok(())
}

/// Ändert Felder an Pfaden/Kontrollpunkten.
pub fn update_items(state: &mut AppState, targets: Vec<Uid>, patch: ItemPatch) -> anyhow::Result<()> {
    use_cases::editing::update_items(state, targets, patch)?;
    Ok(())
}

/// Löscht Pfade und Endpunkte.
pub fn remove(state: &mut AppState, targets: Vec<Uid>) -> anyhow::Result<()> {
    use_cases::editing::remove_paths_and_end_controls(state, targets)?;
    Ok(())
}

/// Legt einen geraden Pfad an.
pub fn add_straight_path(state: &mut AppState, from: Vector, to: Vector) -> anyhow::Result<()> {
    use_cases::editing::add_straight_path(state, from, to)?;
    Ok(())
}
