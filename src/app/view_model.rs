//! Builder für den serialisierbaren Anzeigezustand aus dem AppState.
//!
//! Die View rendert ausschließlich aus `EditorView`; sie liest den AppState
//! nie direkt.

use crate::app::interaction::TouchMagnetPhase;
use crate::app::AppState;
use crate::core::{MagnetReference, Uid, Vector};
use serde::Serialize;

/// Anzeigezustand eines Kontrollpunkts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlView {
    pub uid: Uid,
    pub position: Vector,
    /// `None` bei inneren Punkten
    pub heading: Option<f64>,
    pub lock: bool,
    pub visible: bool,
    pub selected: bool,
    pub hovered: bool,
}

/// Anzeigezustand eines Pfads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathView {
    pub uid: Uid,
    pub name: String,
    pub lock: bool,
    pub visible: bool,
    pub expanded: bool,
    pub controls: Vec<ControlView>,
}

/// Zustand der Undo/Redo-Schaltflächen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryView {
    pub can_undo: bool,
    pub can_redo: bool,
    pub undo_len: usize,
    pub redo_len: usize,
    pub undo_label: Option<String>,
    pub redo_label: Option<String>,
}

/// Vollständiger Anzeigezustand des Editors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorView {
    pub paths: Vec<PathView>,
    pub selected: Vec<Uid>,
    pub hover: Option<Uid>,
    /// Beim letzten Drag-Schritt angewendete Hilfslinien
    pub magnet: Vec<MagnetReference>,
    pub history: HistoryView,
    pub touch_magnet_active: bool,
    pub grab_and_move: bool,
}

/// Baut den Anzeigezustand aus dem aktuellen AppState.
pub fn build(state: &AppState) -> EditorView {
    let selection = &state.selection;
    let paths = state
        .graph
        .paths()
        .iter()
        .map(|path| PathView {
            uid: path.uid.clone(),
            name: path.name.clone(),
            lock: path.lock,
            visible: path.visible,
            expanded: selection.is_expanded(&path.uid),
            controls: path
                .controls
                .iter()
                .map(|control| ControlView {
                    uid: control.uid.clone(),
                    position: control.position,
                    heading: control.heading(),
                    lock: control.lock,
                    visible: control.visible,
                    selected: selection.is_selected(&control.uid),
                    hovered: selection.hover.as_ref() == Some(&control.uid),
                })
                .collect(),
        })
        .collect();

    EditorView {
        paths,
        selected: selection.selected.iter().cloned().collect(),
        hover: selection.hover.clone(),
        magnet: state.magnet.clone(),
        history: HistoryView {
            can_undo: state.can_undo(),
            can_redo: state.can_redo(),
            undo_len: state.history.undo_len(),
            redo_len: state.history.redo_len(),
            undo_label: state.history.undo_label().map(str::to_owned),
            redo_label: state.history.redo_label().map(str::to_owned),
        },
        touch_magnet_active: state.interaction.touch.phase() == TouchMagnetPhase::Active,
        grab_and_move: state.interaction.grab_and_move,
    }
}
