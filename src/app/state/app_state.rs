use super::SelectionState;
use crate::app::changes::{ChangeOutbox, StateChange};
use crate::app::commands::{CommandError, EditCommand, EditContext};
use crate::app::history::EditHistory;
use crate::app::interaction::InteractionState;
use crate::app::CommandLog;
use crate::core::{
    Clock, CoordinateTransform, MagnetReference, PathGraph, SystemClock, TimerQueue,
    ViewTransform,
};
use crate::shared::EditorOptions;
use std::time::Duration;

/// Hauptzustand einer Editier-Sitzung.
///
/// Single-Writer: alle Mutationen laufen synchron über den `AppController`.
pub struct AppState {
    /// Pfade und Kontrollpunkte
    pub graph: PathGraph,
    /// Selection-State
    pub selection: SelectionState,
    /// Undo/Redo-History (Command-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Transienter Gesten-Zustand
    pub interaction: InteractionState,
    /// Beim letzten Drag-Schritt angewendete Magnet-Referenzen
    pub magnet: Vec<MagnetReference>,
    /// Änderungs-Postausgang für die View
    pub changes: ChangeOutbox,
    /// Verlauf ausgeführter App-Commands
    pub command_log: CommandLog,
    /// Ausstehende Timer (Touch-Magnet)
    pub timers: TimerQueue,
    /// Zeitquelle
    pub clock: Box<dyn Clock>,
    /// Pixel ↔ Welt, von der View bereitgestellt
    pub transform: Box<dyn CoordinateTransform>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            graph: PathGraph::new(),
            selection: SelectionState::new(),
            history: EditHistory::new_with_capacity(options.history_max_depth),
            options,
            interaction: InteractionState::new(),
            magnet: Vec::new(),
            changes: ChangeOutbox::new(),
            command_log: CommandLog::new(),
            timers: TimerQueue::new(),
            clock: Box::new(SystemClock),
            transform: Box::new(ViewTransform::default()),
        }
    }

    /// Builder: Graph setzen (Lade-Grenze, verwirft den Verlauf).
    pub fn with_graph(mut self, graph: PathGraph) -> Self {
        self.graph = graph;
        self.history.clear();
        self
    }

    /// Builder: Zeitquelle setzen.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Builder: Koordinaten-Transformation setzen.
    pub fn with_transform(mut self, transform: impl CoordinateTransform + 'static) -> Self {
        self.transform = Box::new(transform);
        self
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Führt einen Edit-Command über die History aus und meldet die Änderungen.
    pub fn run_command(
        &mut self,
        label: impl Into<String>,
        command: EditCommand,
        merge_window: Option<Duration>,
    ) -> Result<(), CommandError> {
        let now = self.clock.now();
        let selection_before = self.selection.clone();
        let mut ctx = EditContext::new(&mut self.graph, &mut self.selection);
        self.history.run(&mut ctx, label, command, now, merge_window)?;
        self.changes.notify(StateChange::Graph);
        self.changes.notify(StateChange::History);
        self.notify_selection_diff(&selection_before);
        Ok(())
    }

    /// Macht den letzten Schritt rückgängig.
    pub fn undo(&mut self) -> bool {
        let selection_before = self.selection.clone();
        let mut ctx = EditContext::new(&mut self.graph, &mut self.selection);
        let done = self.history.undo(&mut ctx);
        if done {
            self.changes.notify(StateChange::Graph);
            self.changes.notify(StateChange::History);
            self.notify_selection_diff(&selection_before);
        }
        done
    }

    /// Stellt den zuletzt rückgängig gemachten Schritt wieder her.
    pub fn redo(&mut self) -> bool {
        let selection_before = self.selection.clone();
        let mut ctx = EditContext::new(&mut self.graph, &mut self.selection);
        let done = self.history.redo(&mut ctx);
        if done {
            self.changes.notify(StateChange::Graph);
            self.changes.notify(StateChange::History);
            self.notify_selection_diff(&selection_before);
        }
        done
    }

    /// Setzt die aktiven Magnet-Referenzen und meldet eine Änderung.
    pub fn set_magnet(&mut self, references: Vec<MagnetReference>) {
        if self.magnet != references {
            self.magnet = references;
            self.changes.notify(StateChange::Magnet);
        }
    }

    fn notify_selection_diff(&mut self, before: &SelectionState) {
        if !self.selection.selected.iter().eq(before.selected.iter()) {
            self.changes.notify(StateChange::Selection);
        }
        if !self.selection.expanded.iter().eq(before.expanded.iter()) {
            self.changes.notify(StateChange::Expanded);
        }
        if self.selection.hover != before.hover {
            self.changes.notify(StateChange::Hover);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
