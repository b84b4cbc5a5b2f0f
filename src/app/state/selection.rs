//! Selektions-, Hover- und Aufklapp-Zustand der Sitzung.

use crate::core::Uid;
use indexmap::IndexSet;

/// Auswahlbezogener Anwendungszustand.
///
/// IndexSet statt HashSet: die Reihenfolge der Selektion bleibt deterministisch
/// und kann beim Undo exakt wiederhergestellt werden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Selektierte Uids (Pfade und Kontrollpunkte)
    pub selected: IndexSet<Uid>,
    /// Uid unter dem Zeiger
    pub hover: Option<Uid>,
    /// Im Pfad-Baum aufgeklappte Pfade
    pub expanded: IndexSet<Uid>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn die Uid selektiert ist.
    pub fn is_selected(&self, uid: &Uid) -> bool {
        self.selected.contains(uid)
    }

    /// Fügt eine Uid zur Selektion hinzu. Gibt `true` zurück, wenn sie neu ist.
    pub fn select(&mut self, uid: Uid) -> bool {
        self.selected.insert(uid)
    }

    /// Entfernt eine Uid aus der Selektion. Gibt `true` zurück, wenn sie selektiert war.
    pub fn unselect(&mut self, uid: &Uid) -> bool {
        self.selected.shift_remove(uid)
    }

    /// Schaltet die Selektion einer Uid um. Gibt den neuen Zustand zurück.
    pub fn toggle(&mut self, uid: Uid) -> bool {
        if self.selected.shift_remove(&uid) {
            false
        } else {
            self.selected.insert(uid);
            true
        }
    }

    /// Ersetzt die Selektion.
    pub fn set_selected(&mut self, uids: impl IntoIterator<Item = Uid>) {
        self.selected = uids.into_iter().collect();
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Klappt einen Pfad auf. Gibt `true` zurück, wenn er vorher zugeklappt war.
    pub fn add_expanded(&mut self, path_uid: Uid) -> bool {
        self.expanded.insert(path_uid)
    }

    /// Klappt einen Pfad zu.
    pub fn remove_expanded(&mut self, path_uid: &Uid) -> bool {
        self.expanded.shift_remove(path_uid)
    }

    /// Gibt `true` zurück, wenn der Pfad aufgeklappt ist.
    pub fn is_expanded(&self, path_uid: &Uid) -> bool {
        self.expanded.contains(path_uid)
    }

    /// Setzt die Hover-Uid. Gibt `true` zurück, wenn sie sich geändert hat.
    pub fn set_hover(&mut self, uid: Option<Uid>) -> bool {
        if self.hover == uid {
            return false;
        }
        self.hover = uid;
        true
    }
}
