//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Alle Veto-Prüfungen (gesperrt, unsichtbar, Greif-Modus, Modifikatoren)
//! passieren hier; die Handler dürfen davon ausgehen, dass ein Command
//! grundsätzlich zulässig ist.

use super::commands::ItemPatch;
use super::interaction::is_interactive;
use super::{AppCommand, AppIntent, AppState, PointerButton};
use crate::core::{TreeItemRef, Uid};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let interactive = |uid: &Uid| {
        is_interactive(&state.graph, uid, state.interaction.grab_and_move)
    };

    match intent {
        // ── Zeiger ──────────────────────────────────────────────
        AppIntent::PointerPressed {
            target,
            button,
            modifiers,
        } => {
            if !interactive(&target) {
                return vec![];
            }
            match button {
                PointerButton::Middle => vec![AppCommand::SuppressGesture],
                PointerButton::Primary => vec![AppCommand::PressControl {
                    target,
                    shift: modifiers.shift,
                }],
                PointerButton::Secondary => vec![],
            }
        }
        AppIntent::PointerReleased { .. } => vec![AppCommand::ReleasePointer],
        AppIntent::PointerClicked {
            target,
            button,
            modifiers,
        } => {
            if !interactive(&target) {
                return vec![];
            }
            let mut commands = vec![AppCommand::ClickControl {
                target: target.clone(),
                shift: modifiers.shift && button == PointerButton::Primary,
            }];
            let is_end = state.graph.control(&target).is_some_and(|c| c.is_end());
            if button == PointerButton::Secondary && is_end {
                commands.push(AppCommand::RemovePathsAndEndControls {
                    targets: vec![target],
                });
            }
            commands
        }
        AppIntent::DragMoved {
            target,
            screen_pos,
            modifiers,
        } => {
            if state.interaction.gesture.is_suppressed() || !interactive(&target) {
                return vec![];
            }
            let Some(world_pos) = state.transform.to_uol(screen_pos) else {
                log::debug!("Drag auf {}: Position nicht auflösbar", target);
                return vec![];
            };
            vec![AppCommand::DragControl {
                target,
                world_pos,
                include_interior: !modifiers.ctrl,
                magnet: modifiers.shift || state.interaction.touch_magnet_active(),
            }]
        }
        AppIntent::DragEnded { .. } => vec![AppCommand::EndDrag],
        AppIntent::HoverChanged { target } => vec![AppCommand::SetHover { target }],
        AppIntent::WheelOverControl {
            target,
            delta,
            modifiers,
        } => {
            // Ctrl+Rad gehört dem Zoom, überwiegend horizontales Scrollen der Kamera
            let is_end = state.graph.control(&target).is_some_and(|c| c.is_end());
            let horizontal = delta.x.abs() * state.options.wheel_horizontal_ratio > delta.y.abs();
            if modifiers.ctrl || horizontal || !is_end || !interactive(&target) {
                return vec![];
            }
            vec![AppCommand::AdjustHeadingByWheel {
                target,
                delta_y: delta.y,
            }]
        }

        // ── Touch ───────────────────────────────────────────────
        AppIntent::TouchStarted { target, touches } => {
            if touches > 1 {
                return vec![AppCommand::AbortGesture];
            }
            if !interactive(&target) {
                return vec![];
            }
            vec![AppCommand::TouchBegin { target }]
        }
        AppIntent::TouchMoved { touches, .. } => {
            if touches > 1 {
                vec![AppCommand::AbortGesture]
            } else {
                vec![AppCommand::TouchMove]
            }
        }
        AppIntent::TouchEnded { .. } => vec![AppCommand::TouchEnd],

        // ── Kamera ──────────────────────────────────────────────
        AppIntent::CameraWheelUsed => vec![AppCommand::ClaimWheelForCamera],
        AppIntent::GrabAndMoveToggled { active } => vec![AppCommand::SetGrabAndMove { active }],

        // ── Verlauf ─────────────────────────────────────────────
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        // ── Pfad-Baum ───────────────────────────────────────────
        AppIntent::ToggleLockRequested { target } => {
            let Some(lock) = state.graph.tree_item(&target).map(|item| match item {
                TreeItemRef::Path(path) => path.lock,
                TreeItemRef::Control(_, control) => control.lock,
            }) else {
                return vec![];
            };
            vec![AppCommand::UpdateItems {
                targets: vec![target],
                patch: ItemPatch::lock(!lock),
            }]
        }
        AppIntent::ToggleVisibilityRequested { target } => {
            let Some(visible) = state.graph.tree_item(&target).map(|item| match item {
                TreeItemRef::Path(path) => path.visible,
                TreeItemRef::Control(_, control) => control.visible,
            }) else {
                return vec![];
            };
            vec![AppCommand::UpdateItems {
                targets: vec![target],
                patch: ItemPatch::visible(!visible),
            }]
        }
        AppIntent::SetHeadingRequested { target, heading } => {
            if !heading.is_finite() {
                return vec![];
            }
            vec![AppCommand::UpdateItems {
                targets: vec![target],
                patch: ItemPatch::heading(heading),
            }]
        }
        AppIntent::RenamePathRequested { path, name } => vec![AppCommand::UpdateItems {
            targets: vec![path],
            patch: ItemPatch {
                name: Some(name),
                ..ItemPatch::default()
            },
        }],
        AppIntent::RemoveSelectedRequested => {
            let targets: Vec<Uid> = state
                .selection
                .selected
                .iter()
                .filter(|uid| match state.graph.path(uid) {
                    Some(path) => !path.lock && path.visible,
                    None => {
                        interactive(uid) && state.graph.control(uid).is_some_and(|c| c.is_end())
                    }
                })
                .cloned()
                .collect();
            if targets.is_empty() {
                vec![]
            } else {
                vec![AppCommand::RemovePathsAndEndControls { targets }]
            }
        }
        AppIntent::SelectAllInPathRequested { path } => {
            vec![AppCommand::SelectAllInPath { path }]
        }
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::ToggleExpandedRequested { path } => vec![AppCommand::ToggleExpanded { path }],
        AppIntent::AddPathRequested { from, to } => vec![AppCommand::AddStraightPath { from, to }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],

        AppIntent::Tick => vec![],
    }
}
