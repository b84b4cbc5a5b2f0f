//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Vorher werden fällige Timer ausgewertet, damit z.B. ein aktivierter
    /// Touch-Magnet schon für diesen Intent gilt.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        self.poll_timers(state)?;

        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt alle bis jetzt fälligen Timer aus.
    pub fn poll_timers(&mut self, state: &mut AppState) -> anyhow::Result<()> {
        let now = state.clock.now();
        for handle in state.timers.take_expired(now) {
            self.handle_command(state, AppCommand::TimerFired { handle })?;
        }
        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Geste ===
            AppCommand::PressControl { target, shift } => {
                handlers::selection::press(state, &target, shift)
            }
            AppCommand::SuppressGesture => handlers::interaction::suppress_gesture(state),
            AppCommand::ReleasePointer => handlers::interaction::release_pointer(state),
            AppCommand::ClickControl { target, shift } => {
                handlers::selection::click(state, &target, shift)
            }
            AppCommand::DragControl {
                target,
                world_pos,
                include_interior,
                magnet,
            } => handlers::editing::drag(state, target, world_pos, include_interior, magnet)?,
            AppCommand::EndDrag => handlers::editing::end_drag(state),
            AppCommand::SetHover { target } => handlers::selection::set_hover(state, target),
            AppCommand::AdjustHeadingByWheel { target, delta_y } => {
                handlers::editing::adjust_heading_by_wheel(state, &target, delta_y)?
            }
            AppCommand::ClaimWheelForCamera => handlers::interaction::claim_wheel_for_camera(state),

            // === Touch ===
            AppCommand::TouchBegin { target } => handlers::interaction::touch_begin(state, &target),
            AppCommand::TouchMove => handlers::interaction::touch_move(state),
            AppCommand::TouchEnd => handlers::interaction::touch_end(state),
            AppCommand::AbortGesture => handlers::interaction::abort_gesture(state),
            AppCommand::TimerFired { handle } => handlers::interaction::timer_fired(state, handle),

            // === Kamera ===
            AppCommand::SetGrabAndMove { active } => {
                handlers::interaction::set_grab_and_move(state, active)
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Editing ===
            AppCommand::UpdateItems { targets, patch } => {
                handlers::editing::update_items(state, targets, patch)?
            }
            AppCommand::RemovePathsAndEndControls { targets } => {
                handlers::editing::remove(state, targets)?
            }
            AppCommand::AddStraightPath { from, to } => {
                handlers::editing::add_straight_path(state, from, to)?
            }

            // === Selektion ===
            AppCommand::SelectAllInPath { path } => {
                handlers::selection::select_all_in_path(state, &path)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::ToggleExpanded { path } => handlers::selection::toggle_expanded(state, &path),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::interaction::apply_options(state, options)
            }
        }

        Ok(())
    }
}
