//! Command: neuen Pfad in den Graph einfügen.

use super::CommandError;
use crate::core::{Path, PathGraph};

/// Fügt einen Pfad an einer Position der Pfad-Liste ein.
///
/// Nach `undo` hält der Command die entnommene Instanz, sodass Redo
/// denselben Pfad (gleiche Uids) wieder einsetzt.
#[derive(Debug, Clone, PartialEq)]
pub struct AddPath {
    index: usize,
    path: Option<Path>,
}

impl AddPath {
    /// Hängt den Pfad am Ende der Pfad-Liste an.
    pub fn append(graph: &PathGraph, path: Path) -> Self {
        Self::at(graph.path_count(), path)
    }

    /// Fügt den Pfad an `index` ein (wird auf die Listenlänge begrenzt).
    pub fn at(index: usize, path: Path) -> Self {
        Self {
            index,
            path: Some(path),
        }
    }

    /// Ziel-Index in der Pfad-Liste.
    pub fn index(&self) -> usize {
        self.index
    }

    pub(super) fn execute(&mut self, graph: &mut PathGraph) -> Result<(), CommandError> {
        let path = self
            .path
            .take()
            .ok_or(CommandError::InvalidState("Pfad bereits eingefügt"))?;
        if !path.is_well_formed() {
            log::warn!("Pfad {} ist nicht wohlgeformt", path.uid);
            self.path = Some(path);
            return Err(CommandError::InvalidState("Pfad ohne Endpunkte an beiden Enden"));
        }
        if graph.path(&path.uid).is_some() {
            log::warn!("Pfad-Uid {} bereits vergeben", path.uid);
            self.path = Some(path);
            return Err(CommandError::InvalidState("Pfad-Uid bereits vergeben"));
        }
        self.index = self.index.min(graph.path_count());
        graph.insert_path(self.index, path);
        Ok(())
    }

    pub(super) fn undo(&mut self, graph: &mut PathGraph) -> Result<(), CommandError> {
        if self.path.is_some() {
            return Err(CommandError::InvalidState("Undo vor Execute"));
        }
        let path = graph
            .take_path(self.index)
            .ok_or(CommandError::IndexOutOfRange { index: self.index })?;
        self.path = Some(path);
        Ok(())
    }
}
