//! Undo/Redo-Manager auf Basis umkehrbarer Commands.
//!
//! Statt Snapshots des ganzen Graphen hält jeder Eintrag den Command selbst.
//! Aufeinanderfolgende Commands derselben Art auf dasselbe Ziel werden
//! innerhalb eines gleitenden Zeitfensters zu einem Eintrag zusammengefasst.

use super::commands::{invariant_breach, CommandError, EditCommand, EditContext};
use std::time::{Duration, Instant};

/// Ein ausgeführter Command samt Beschriftung und Zeitpunkt.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Anzeigetext (z.B. für "Rückgängig: …")
    pub label: String,
    /// Ausgeführter Command
    pub command: EditCommand,
    /// Zeitpunkt der letzten Ausführung (bei Merge: des jüngsten Teil-Commands)
    pub executed_at: Instant,
}

/// Linearer Undo/Redo-Verlauf ohne Verzweigungen.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth.min(256)),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Führt `command` aus und legt ihn auf den Undo-Stack.
    ///
    /// Mit `merge_window` wird der Command in den obersten Eintrag gefaltet,
    /// wenn Art und Ziel übereinstimmen und dieser jünger als das Fenster ist.
    /// Schlägt `execute` fehl, bleibt der Verlauf unverändert.
    pub fn run(
        &mut self,
        ctx: &mut EditContext<'_>,
        label: impl Into<String>,
        mut command: EditCommand,
        now: Instant,
        merge_window: Option<Duration>,
    ) -> Result<(), CommandError> {
        command.execute(ctx)?;
        self.redo_stack.clear();
        let label = label.into();

        if let Some(window) = merge_window {
            if let Some(top) = self.undo_stack.last_mut() {
                if Self::can_merge(top, &command, now, window) {
                    match top.command.try_merge(command) {
                        Ok(()) => {
                            top.executed_at = now;
                            top.label = label;
                            return Ok(());
                        }
                        Err(rejected) => command = rejected,
                    }
                }
            }
        }

        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(HistoryEntry {
            label,
            command,
            executed_at: now,
        });
        Ok(())
    }

    fn can_merge(top: &HistoryEntry, command: &EditCommand, now: Instant, window: Duration) -> bool {
        top.command.kind() == command.kind()
            && command.target().is_some()
            && top.command.target() == command.target()
            && now.saturating_duration_since(top.executed_at) < window
    }

    /// Macht den jüngsten Eintrag rückgängig. Gibt `true` zurück, wenn etwas passiert ist.
    pub fn undo(&mut self, ctx: &mut EditContext<'_>) -> bool {
        let Some(mut entry) = self.undo_stack.pop() else {
            log::debug!("Undo: nichts zu tun");
            return false;
        };
        match entry.command.undo(ctx) {
            Ok(()) => {
                log::info!("Undo: {}", entry.label);
                self.redo_stack.push(entry);
                true
            }
            Err(err) => {
                invariant_breach("Undo", &entry.label, &err);
                false
            }
        }
    }

    /// Stellt den zuletzt rückgängig gemachten Eintrag wieder her.
    pub fn redo(&mut self, ctx: &mut EditContext<'_>) -> bool {
        let Some(mut entry) = self.redo_stack.pop() else {
            log::debug!("Redo: nichts zu tun");
            return false;
        };
        match entry.command.execute(ctx) {
            Ok(()) => {
                log::info!("Redo: {}", entry.label);
                self.undo_stack.push(entry);
                true
            }
            Err(err) => {
                invariant_breach("Redo", &entry.label, &err);
                false
            }
        }
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl der Undo-Einträge.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Anzahl der Redo-Einträge.
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Beschriftung des nächsten Undo-Schritts.
    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.last().map(|e| e.label.as_str())
    }

    /// Beschriftung des nächsten Redo-Schritts.
    pub fn redo_label(&self) -> Option<&str> {
        self.redo_stack.last().map(|e| e.label.as_str())
    }

    /// Ändert die maximale Tiefe; überzählige älteste Einträge fallen weg.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        if self.undo_stack.len() > self.max_depth {
            let excess = self.undo_stack.len() - self.max_depth;
            self.undo_stack.drain(..excess);
        }
    }

    /// Verwirft den gesamten Verlauf (z.B. nach dem Laden).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
