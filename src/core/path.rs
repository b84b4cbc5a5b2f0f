//! Ein Pfad: geordnete Folge von Kontrollpunkten.

use super::{Control, Uid};

/// Editierbarer Pfad. Erster und letzter Kontrollpunkt sind Endpunkte.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Stabile ID
    pub uid: Uid,
    /// Anzeigename (nur für den Pfad-Baum)
    pub name: String,
    /// Kontrollpunkte in Traversierungsreihenfolge
    pub controls: Vec<Control>,
    /// Gesperrt: keiner der Punkte ist interaktiv
    pub lock: bool,
    /// Sichtbar: unsichtbare Pfade nehmen an keiner Interaktion teil
    pub visible: bool,
}

impl Path {
    /// Erstellt einen sichtbaren, ungesperrten Pfad.
    pub fn new(uid: impl Into<Uid>, controls: Vec<Control>) -> Self {
        let uid = uid.into();
        Self {
            name: uid.to_string(),
            uid,
            controls,
            lock: false,
            visible: true,
        }
    }

    /// Index eines Kontrollpunkts im Pfad.
    pub fn index_of(&self, uid: &Uid) -> Option<usize> {
        self.controls.iter().position(|c| &c.uid == uid)
    }

    /// Strukturell gültig: mindestens zwei Punkte, erster und letzter sind Endpunkte.
    pub fn is_well_formed(&self) -> bool {
        self.controls.len() >= 2
            && self.controls.first().is_some_and(Control::is_end)
            && self.controls.last().is_some_and(Control::is_end)
    }

    /// Anzahl der Segmente (Endpunkte - 1).
    pub fn segment_count(&self) -> usize {
        self.controls
            .iter()
            .filter(|c| c.is_end())
            .count()
            .saturating_sub(1)
    }

    /// Builder: Sperr-Flag setzen.
    pub fn locked(mut self, lock: bool) -> Self {
        self.lock = lock;
        self
    }

    /// Builder: Sichtbarkeit setzen.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Builder: Anzeigename setzen.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
