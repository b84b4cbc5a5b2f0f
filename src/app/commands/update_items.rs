//! Command: Teil-Update von Feldern an Pfaden und Kontrollpunkten.

use super::CommandError;
use crate::core::{PathGraph, Uid};

/// Zu ändernde Felder. `None` = Feld bleibt unverändert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    /// Neues Heading (nur Endpunkte), wird normalisiert
    pub heading: Option<f64>,
    /// Neues Sperr-Flag
    pub lock: Option<bool>,
    /// Neue Sichtbarkeit
    pub visible: Option<bool>,
    /// Neuer Anzeigename (nur Pfade)
    pub name: Option<String>,
}

impl ItemPatch {
    /// Patch, der nur das Heading setzt.
    pub fn heading(value: f64) -> Self {
        Self {
            heading: Some(value),
            ..Self::default()
        }
    }

    /// Patch, der nur das Sperr-Flag setzt.
    pub fn lock(value: bool) -> Self {
        Self {
            lock: Some(value),
            ..Self::default()
        }
    }

    /// Patch, der nur die Sichtbarkeit setzt.
    pub fn visible(value: bool) -> Self {
        Self {
            visible: Some(value),
            ..Self::default()
        }
    }
}

/// Vorheriger Zustand eines Ziels (für exaktes Undo).
#[derive(Debug, Clone, PartialEq)]
struct PriorFields {
    uid: Uid,
    heading: Option<f64>,
    lock: bool,
    visible: bool,
    name: Option<String>,
}

/// Wendet einen `ItemPatch` auf mehrere Pfade/Kontrollpunkte an.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePathTreeItems {
    targets: Vec<Uid>,
    patch: ItemPatch,
    prior: Option<Vec<PriorFields>>,
}

impl UpdatePathTreeItems {
    /// Erstellt den Command.
    pub fn new(targets: Vec<Uid>, patch: ItemPatch) -> Self {
        Self {
            targets,
            patch,
            prior: None,
        }
    }

    /// Betroffene Uids.
    pub fn targets(&self) -> &[Uid] {
        &self.targets
    }

    /// Angewendeter Patch.
    pub fn patch(&self) -> &ItemPatch {
        &self.patch
    }

    pub(super) fn execute(&mut self, graph: &mut PathGraph) -> Result<(), CommandError> {
        let mut prior = Vec::with_capacity(self.targets.len());
        for uid in &self.targets {
            prior.push(read_fields(graph, uid)?);
        }

        for uid in &self.targets {
            apply_patch(graph, uid, &self.patch);
        }

        // Nach einem Merge bleibt der Zustand vor dem ersten Command maßgeblich
        if self.prior.is_none() {
            self.prior = Some(prior);
        }
        Ok(())
    }

    pub(super) fn undo(&mut self, graph: &mut PathGraph) -> Result<(), CommandError> {
        let prior = self
            .prior
            .as_ref()
            .ok_or(CommandError::InvalidState("Undo vor Execute"))?;

        for fields in prior {
            if graph.path(&fields.uid).is_none() && graph.control(&fields.uid).is_none() {
                return Err(CommandError::ItemNotFound(fields.uid.clone()));
            }
        }

        for fields in prior.iter().rev() {
            restore_fields(graph, fields);
        }
        Ok(())
    }

    /// Übernimmt den Patch eines späteren Commands auf dieselben Ziele.
    pub(super) fn merge(&mut self, later: UpdatePathTreeItems) {
        self.patch = later.patch;
    }
}

fn read_fields(graph: &PathGraph, uid: &Uid) -> Result<PriorFields, CommandError> {
    if let Some(path) = graph.path(uid) {
        return Ok(PriorFields {
            uid: uid.clone(),
            heading: None,
            lock: path.lock,
            visible: path.visible,
            name: Some(path.name.clone()),
        });
    }
    let control = graph
        .control(uid)
        .ok_or_else(|| CommandError::ItemNotFound(uid.clone()))?;
    Ok(PriorFields {
        uid: uid.clone(),
        heading: control.heading(),
        lock: control.lock,
        visible: control.visible,
        name: None,
    })
}

fn apply_patch(graph: &mut PathGraph, uid: &Uid, patch: &ItemPatch) {
    if let Some(path) = graph.path_mut(uid) {
        if let Some(lock) = patch.lock {
            path.lock = lock;
        }
        if let Some(visible) = patch.visible {
            path.visible = visible;
        }
        if let Some(name) = &patch.name {
            path.name = name.clone();
        }
        return;
    }
    if let Some(control) = graph.control_mut(uid) {
        if let Some(lock) = patch.lock {
            control.lock = lock;
        }
        if let Some(visible) = patch.visible {
            control.visible = visible;
        }
        if let Some(heading) = patch.heading {
            control.set_heading(heading);
        }
    }
}

fn restore_fields(graph: &mut PathGraph, fields: &PriorFields) {
    if let Some(path) = graph.path_mut(&fields.uid) {
        path.lock = fields.lock;
        path.visible = fields.visible;
        if let Some(name) = &fields.name {
            path.name = name.clone();
        }
        return;
    }
    if let Some(control) = graph.control_mut(&fields.uid) {
        control.lock = fields.lock;
        control.visible = fields.visible;
        if let Some(heading) = fields.heading {
            control.set_heading(heading);
        }
    }
}
