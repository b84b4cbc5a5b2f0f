//! Umkehrbare Edit-Commands auf dem Entitäts-Graph.
//!
//! Jede strukturelle oder positionsbezogene Änderung am Graph läuft über ein
//! `EditCommand`, damit sie in der History rückgängig gemacht werden kann.
//! Commands referenzieren Entitäten über ihre Uid; gelöschte Entitäten werden
//! im Command aufbewahrt und beim Undo als dieselbe Instanz wieder eingefügt.

mod add_path;
mod drag_controls;
mod remove_paths;
mod update_items;

pub use add_path::AddPath;
pub use drag_controls::{ControlMove, DragControls};
pub use remove_paths::RemovePathsAndEndControls;
pub use update_items::{ItemPatch, UpdatePathTreeItems};

use super::SelectionState;
use crate::core::{PathGraph, Uid};

/// Veränderlicher Zustand, auf dem Commands arbeiten.
pub struct EditContext<'a> {
    /// Entitäts-Graph
    pub graph: &'a mut PathGraph,
    /// Selektion/Aufklapp-Zustand (wird von Lösch-Commands mitgepflegt)
    pub selection: &'a mut SelectionState,
}

impl<'a> EditContext<'a> {
    /// Bündelt Graph und Selektion für einen Command-Aufruf.
    pub fn new(graph: &'a mut PathGraph, selection: &'a mut SelectionState) -> Self {
        Self { graph, selection }
    }
}

/// Vertragsverletzungen beim Ausführen oder Rückgängigmachen eines Commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Kontrollpunkt existiert nicht (mehr)
    #[error("Kontrollpunkt {0} nicht gefunden")]
    ControlNotFound(Uid),
    /// Pfad existiert nicht (mehr)
    #[error("Pfad {0} nicht gefunden")]
    PathNotFound(Uid),
    /// Weder Pfad noch Kontrollpunkt mit dieser Uid
    #[error("Element {0} nicht gefunden")]
    ItemNotFound(Uid),
    /// Einfüge-/Entnahme-Index passt nicht zur aktuellen Graph-Form
    #[error("Index {index} außerhalb des gültigen Bereichs")]
    IndexOutOfRange {
        /// Betroffener Index
        index: usize,
    },
    /// Command wurde in einem Zustand aufgerufen, der nicht zur History passt
    #[error("Command-Zustand inkonsistent: {0}")]
    InvalidState(&'static str),
}

/// Art eines Commands (Merge-Kriterium).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Kontrollpunkte verschieben
    DragControls,
    /// Felder von Pfaden/Kontrollpunkten ändern
    UpdatePathTreeItems,
    /// Pfade/Endpunkte löschen
    RemovePathsAndEndControls,
    /// Pfad hinzufügen
    AddPath,
}

/// Geschlossene Menge aller Edit-Commands.
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    /// Kontrollpunkt samt Folgern verschieben
    DragControls(DragControls),
    /// Teil-Update von Feldern
    UpdatePathTreeItems(UpdatePathTreeItems),
    /// Pfade und Endpunkte löschen
    RemovePathsAndEndControls(RemovePathsAndEndControls),
    /// Pfad einfügen
    AddPath(AddPath),
}

impl EditCommand {
    /// Art des Commands.
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::DragControls(_) => CommandKind::DragControls,
            Self::UpdatePathTreeItems(_) => CommandKind::UpdatePathTreeItems,
            Self::RemovePathsAndEndControls(_) => CommandKind::RemovePathsAndEndControls,
            Self::AddPath(_) => CommandKind::AddPath,
        }
    }

    /// Primäres Ziel für das Merge-Kriterium. `None` = nie zusammenfassbar.
    pub fn target(&self) -> Option<&Uid> {
        match self {
            Self::DragControls(cmd) => Some(cmd.primary()),
            Self::UpdatePathTreeItems(cmd) => cmd.targets().first(),
            Self::RemovePathsAndEndControls(_) | Self::AddPath(_) => None,
        }
    }

    /// Wendet den Command auf den Graph an.
    pub fn execute(&mut self, ctx: &mut EditContext<'_>) -> Result<(), CommandError> {
        match self {
            Self::DragControls(cmd) => cmd.execute(ctx.graph),
            Self::UpdatePathTreeItems(cmd) => cmd.execute(ctx.graph),
            Self::RemovePathsAndEndControls(cmd) => cmd.execute(ctx),
            Self::AddPath(cmd) => cmd.execute(ctx.graph),
        }
    }

    /// Stellt den Zustand vor `execute` wieder her.
    pub fn undo(&mut self, ctx: &mut EditContext<'_>) -> Result<(), CommandError> {
        match self {
            Self::DragControls(cmd) => cmd.undo(ctx.graph),
            Self::UpdatePathTreeItems(cmd) => cmd.undo(ctx.graph),
            Self::RemovePathsAndEndControls(cmd) => cmd.undo(ctx),
            Self::AddPath(cmd) => cmd.undo(ctx.graph),
        }
    }

    /// Fasst einen später ausgeführten Command in diesen zusammen.
    ///
    /// Das Ergebnis macht beim Undo alles bis vor den ersten Command der
    /// Kette rückgängig. Passt `later` nicht, wird er unverändert zurückgegeben.
    pub fn try_merge(&mut self, later: EditCommand) -> Result<(), EditCommand> {
        match (self, later) {
            (Self::DragControls(first), Self::DragControls(next))
                if first.primary() == next.primary() =>
            {
                first.merge(next);
                Ok(())
            }
            (Self::UpdatePathTreeItems(first), Self::UpdatePathTreeItems(next))
                if first.targets() == next.targets() =>
            {
                first.merge(next);
                Ok(())
            }
            (_, later) => Err(later),
        }
    }
}

impl From<DragControls> for EditCommand {
    fn from(cmd: DragControls) -> Self {
        Self::DragControls(cmd)
    }
}

impl From<UpdatePathTreeItems> for EditCommand {
    fn from(cmd: UpdatePathTreeItems) -> Self {
        Self::UpdatePathTreeItems(cmd)
    }
}

impl From<RemovePathsAndEndControls> for EditCommand {
    fn from(cmd: RemovePathsAndEndControls) -> Self {
        Self::RemovePathsAndEndControls(cmd)
    }
}

impl From<AddPath> for EditCommand {
    fn from(cmd: AddPath) -> Self {
        Self::AddPath(cmd)
    }
}

/// Meldet eine verletzte History-Invariante: fatal in Debug-Builds, im
/// Release-Build nur geloggt.
pub(crate) fn invariant_breach(action: &str, label: &str, err: &CommandError) {
    log::error!("{action} von '{label}' fehlgeschlagen: {err}");
    debug_assert!(false, "{action} von '{label}' fehlgeschlagen: {err}");
}
