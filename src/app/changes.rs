//! Änderungs-Benachrichtigungen für die View-Schicht.
//!
//! Der Kern ruft nie in die View. Stattdessen sammelt er, welche Teile des
//! beobachtbaren Zustands sich geändert haben; die View leert den Postausgang
//! nach jedem Ereignis und aktualisiert nur die betroffenen Teile.

use indexmap::IndexSet;
use serde::Serialize;

/// Beobachtbarer Teil des Zustands, der sich geändert hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StateChange {
    /// Selektierte Uids
    Selection,
    /// Hover-Uid
    Hover,
    /// Aktive Magnet-Referenzen
    Magnet,
    /// Undo/Redo-Stacks
    History,
    /// Pfade oder Kontrollpunkte
    Graph,
    /// Aufgeklappte Pfade
    Expanded,
}

/// Deduplizierter Postausgang in Reihenfolge der ersten Meldung.
#[derive(Debug, Clone, Default)]
pub struct ChangeOutbox {
    pending: IndexSet<StateChange>,
}

impl ChangeOutbox {
    /// Erstellt einen leeren Postausgang.
    pub fn new() -> Self {
        Self::default()
    }

    /// Meldet eine Änderung.
    pub fn notify(&mut self, change: StateChange) {
        self.pending.insert(change);
    }

    /// Gibt `true` zurück, wenn die Änderung gemeldet, aber noch nicht abgeholt wurde.
    pub fn contains(&self, change: StateChange) -> bool {
        self.pending.contains(&change)
    }

    /// Entnimmt alle gemeldeten Änderungen.
    pub fn drain(&mut self) -> Vec<StateChange> {
        self.pending.drain(..).collect()
    }

    /// Gibt `true` zurück, wenn nichts gemeldet ist.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_each_change_once_in_order() {
        let mut outbox = ChangeOutbox::new();
        outbox.notify(StateChange::Graph);
        outbox.notify(StateChange::History);
        outbox.notify(StateChange::Graph);

        assert_eq!(
            outbox.drain(),
            vec![StateChange::Graph, StateChange::History]
        );
        assert!(outbox.is_empty());
    }
}
