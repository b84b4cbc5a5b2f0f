//! Stabile Entitäts-IDs für Pfade und Kontrollpunkte.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Eindeutige, über die Lebensdauer einer Entität stabile ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Uid(String);

impl Uid {
    /// Erstellt eine Uid aus einem beliebigen String.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Liefert die ID als String-Slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Uid {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Uid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Monotoner Generator für neue Uids (`p1`, `c2`, …).
#[derive(Debug, Clone, Default)]
pub struct UidGenerator {
    next: u64,
}

impl UidGenerator {
    /// Erstellt einen Generator, der bei 1 beginnt.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Erzeugt die nächste Uid mit gegebenem Präfix.
    pub fn next_with_prefix(&mut self, prefix: &str) -> Uid {
        let id = self.next.max(1);
        self.next = id + 1;
        Uid(format!("{prefix}{id}"))
    }

    /// Neue Pfad-ID.
    pub fn next_path(&mut self) -> Uid {
        self.next_with_prefix("p")
    }

    /// Neue Kontrollpunkt-ID.
    pub fn next_control(&mut self) -> Uid {
        self.next_with_prefix("c")
    }
}
