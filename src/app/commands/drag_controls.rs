//! Command: Kontrollpunkt samt Folgern verschieben.

use super::CommandError;
use crate::core::{PathGraph, Uid, Vector};

/// Aufgezeichnete Bewegung eines einzelnen Kontrollpunkts.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlMove {
    /// Betroffener Kontrollpunkt
    pub uid: Uid,
    /// Position vor der Bewegung
    pub from: Vector,
    /// Position nach der Bewegung
    pub to: Vector,
}

/// Verschiebt `primary` auf `to` und jeden Folger um dasselbe Delta.
///
/// Die Folger-Positionen werden beim ersten `execute` pro Punkt aufgezeichnet;
/// Redo und Undo setzen exakt diese Werte, statt das Delta erneut zu rechnen.
#[derive(Debug, Clone, PartialEq)]
pub struct DragControls {
    primary: Uid,
    from: Vector,
    to: Vector,
    followers: Vec<Uid>,
    moves: Option<Vec<ControlMove>>,
}

impl DragControls {
    /// Erstellt den Command. `from` ist die Position von `primary` vor dem Schritt.
    pub fn new(primary: Uid, from: Vector, to: Vector, followers: Vec<Uid>) -> Self {
        Self {
            primary,
            from,
            to,
            followers,
            moves: None,
        }
    }

    /// Der gezogene Kontrollpunkt.
    pub fn primary(&self) -> &Uid {
        &self.primary
    }

    /// Ausgangsposition des gezogenen Punkts.
    pub fn origin(&self) -> Vector {
        self.from
    }

    /// Zielposition des gezogenen Punkts.
    pub fn destination(&self) -> Vector {
        self.to
    }

    /// Uids der Folger.
    pub fn followers(&self) -> &[Uid] {
        &self.followers
    }

    /// Aufgezeichnete Folger-Bewegungen (nach dem ersten `execute`).
    pub fn follower_moves(&self) -> &[ControlMove] {
        self.moves.as_deref().unwrap_or(&[])
    }

    pub(super) fn execute(&mut self, graph: &mut PathGraph) -> Result<(), CommandError> {
        if graph.control(&self.primary).is_none() {
            return Err(CommandError::ControlNotFound(self.primary.clone()));
        }

        if self.moves.is_none() {
            let delta = self.to - self.from;
            let mut moves = Vec::with_capacity(self.followers.len());
            for uid in &self.followers {
                let control = graph
                    .control(uid)
                    .ok_or_else(|| CommandError::ControlNotFound(uid.clone()))?;
                moves.push(ControlMove {
                    uid: uid.clone(),
                    from: control.position,
                    to: control.position + delta,
                });
            }
            self.moves = Some(moves);
        } else {
            self.ensure_all_present(graph)?;
        }

        graph.set_control_position(&self.primary, self.to);
        for m in self.follower_moves() {
            graph.set_control_position(&m.uid, m.to);
        }
        Ok(())
    }

    pub(super) fn undo(&mut self, graph: &mut PathGraph) -> Result<(), CommandError> {
        if self.moves.is_none() {
            return Err(CommandError::InvalidState("Undo vor Execute"));
        }
        if graph.control(&self.primary).is_none() {
            return Err(CommandError::ControlNotFound(self.primary.clone()));
        }
        self.ensure_all_present(graph)?;

        for m in self.follower_moves().iter().rev() {
            graph.set_control_position(&m.uid, m.from);
        }
        graph.set_control_position(&self.primary, self.from);
        Ok(())
    }

    /// Übernimmt einen späteren Drag-Schritt desselben Punkts.
    ///
    /// `from` bleibt der Ausgangspunkt der Kette, `to` wird der neueste Wert.
    /// Folger, die erst später hinzukamen, behalten ihre eigene Ausgangsposition.
    pub(super) fn merge(&mut self, later: DragControls) {
        self.to = later.to;
        let later_moves = later.moves.unwrap_or_default();
        let moves = self.moves.get_or_insert_with(Vec::new);
        for m in later_moves {
            if let Some(existing) = moves.iter_mut().find(|e| e.uid == m.uid) {
                existing.to = m.to;
            } else {
                self.followers.push(m.uid.clone());
                moves.push(m);
            }
        }
    }

    fn ensure_all_present(&self, graph: &PathGraph) -> Result<(), CommandError> {
        match self
            .follower_moves()
            .iter()
            .find(|m| graph.control(&m.uid).is_none())
        {
            Some(missing) => Err(CommandError::ControlNotFound(missing.uid.clone())),
            None => Ok(()),
        }
    }
}
