//! Command: Pfade und Endpunkte löschen.
//!
//! Ein Endpunkt wird zusammen mit den angrenzenden inneren Kontrollpunkten
//! entfernt, damit der Pfad weiterhin mit Endpunkten beginnt und endet.
//! Bleiben weniger als zwei Punkte übrig, wird der ganze Pfad entfernt.

use super::{CommandError, EditContext};
use crate::core::{Control, ControlLocation, Path, PathGraph, Uid};
use indexmap::IndexSet;

/// Ein einzelner, umkehrbarer Entnahme-Schritt.
#[derive(Debug, Clone, PartialEq)]
enum RemovalStep {
    /// Kontrollpunkt aus einem Pfad entnommen
    Control {
        path_index: usize,
        index: usize,
        control: Control,
    },
    /// Ganzer Pfad entnommen
    Path { index: usize, path: Path },
}

/// Entfernte Mitgliedschaft in Selektion/Aufklapp-Liste (Position + Uid).
#[derive(Debug, Clone, Default, PartialEq)]
struct MembershipRecord {
    selected: Vec<(usize, Uid)>,
    expanded: Vec<(usize, Uid)>,
    hover: Option<Uid>,
}

/// Löscht Pfade (per Pfad-Uid) und Endpunkte (per Kontrollpunkt-Uid).
#[derive(Debug, Clone, PartialEq)]
pub struct RemovePathsAndEndControls {
    targets: Vec<Uid>,
    steps: Vec<RemovalStep>,
    membership: MembershipRecord,
}

impl RemovePathsAndEndControls {
    /// Erstellt den Command für die gegebenen Pfad- bzw. Endpunkt-Uids.
    pub fn new(targets: Vec<Uid>) -> Self {
        Self {
            targets,
            steps: Vec::new(),
            membership: MembershipRecord::default(),
        }
    }

    /// Angefragte Ziele.
    pub fn targets(&self) -> &[Uid] {
        &self.targets
    }

    /// Gibt `true` zurück, wenn mindestens ein Ziel ein Pfad oder ein Endpunkt im Graph ist.
    pub fn has_effect_on(&self, graph: &PathGraph) -> bool {
        self.targets.iter().any(|uid| {
            graph.path(uid).is_some() || graph.control(uid).is_some_and(Control::is_end)
        })
    }

    /// Uids aller beim letzten `execute` entfernten Entitäten.
    pub fn removed_uids(&self) -> Vec<Uid> {
        let mut uids = Vec::new();
        for step in &self.steps {
            match step {
                RemovalStep::Control { control, .. } => uids.push(control.uid.clone()),
                RemovalStep::Path { path, .. } => {
                    uids.push(path.uid.clone());
                    uids.extend(path.controls.iter().map(|c| c.uid.clone()));
                }
            }
        }
        uids
    }

    /// Anzahl entfernter ganzer Pfade.
    #[cfg(test)]
    pub(crate) fn removed_path_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, RemovalStep::Path { .. }))
            .count()
    }

    pub(super) fn execute(&mut self, ctx: &mut EditContext<'_>) -> Result<(), CommandError> {
        if !self.steps.is_empty() {
            return Err(CommandError::InvalidState("Execute ohne vorheriges Undo"));
        }

        for target in &self.targets {
            if let Some(index) = ctx.graph.path_index(target) {
                if let Some(path) = ctx.graph.take_path(index) {
                    self.steps.push(RemovalStep::Path { index, path });
                }
                continue;
            }

            let Some(location) = ctx.graph.locate(target) else {
                // z.B. bereits mit dem eigenen Pfad entfernt
                log::debug!("Entfernen: {} nicht (mehr) vorhanden", target);
                continue;
            };
            if !ctx.graph.control_at(location).is_some_and(Control::is_end) {
                log::debug!("Entfernen: {} ist kein Endpunkt, übersprungen", target);
                continue;
            }

            remove_end_control(ctx.graph, location, &mut self.steps);

            let remaining = ctx.graph.paths()[location.path].controls.len();
            if remaining < 2 {
                if let Some(path) = ctx.graph.take_path(location.path) {
                    self.steps.push(RemovalStep::Path {
                        index: location.path,
                        path,
                    });
                }
            }
        }

        let removed = self.removed_uids();
        self.membership = strip_membership(ctx, &removed);
        Ok(())
    }

    pub(super) fn undo(&mut self, ctx: &mut EditContext<'_>) -> Result<(), CommandError> {
        while let Some(step) = self.steps.pop() {
            match step {
                RemovalStep::Path { index, path } => {
                    if index > ctx.graph.path_count() {
                        return Err(CommandError::IndexOutOfRange { index });
                    }
                    ctx.graph.insert_path(index, path);
                }
                RemovalStep::Control {
                    path_index,
                    index,
                    control,
                } => {
                    if !ctx.graph.insert_control(path_index, index, control) {
                        return Err(CommandError::IndexOutOfRange { index });
                    }
                }
            }
        }

        let membership = std::mem::take(&mut self.membership);
        restore_membership(ctx, membership);
        Ok(())
    }
}

/// Entfernt einen Endpunkt samt angrenzender innerer Punkte.
fn remove_end_control(
    graph: &mut PathGraph,
    location: ControlLocation,
    steps: &mut Vec<RemovalStep>,
) {
    let controls = &graph.paths()[location.path].controls;
    let last = controls.len() - 1;
    let i = location.index;

    let mut indices: Vec<usize> = if i == 0 {
        // Erster Endpunkt: bis zum nächsten Endpunkt abschneiden
        let next_end = (1..controls.len())
            .find(|&j| controls[j].is_end())
            .unwrap_or(controls.len());
        (0..next_end).collect()
    } else if i == last {
        // Letzter Endpunkt: zurück bis zum vorherigen Endpunkt
        let prev_end = (0..i).rev().find(|&j| controls[j].is_end());
        match prev_end {
            Some(p) => (p + 1..=i).collect(),
            None => (0..=i).collect(),
        }
    } else {
        // Mittlerer Endpunkt: je ein innerer Nachbar links und rechts
        let mut v = vec![i];
        if !controls[i - 1].is_end() {
            v.push(i - 1);
        }
        if !controls[i + 1].is_end() {
            v.push(i + 1);
        }
        v
    };

    indices.sort_unstable_by(|a, b| b.cmp(a));
    for index in indices {
        let loc = ControlLocation {
            path: location.path,
            index,
        };
        if let Some(control) = graph.take_control(loc) {
            steps.push(RemovalStep::Control {
                path_index: location.path,
                index,
                control,
            });
        }
    }
}

/// Entfernt gelöschte Uids aus Selektion, Aufklapp-Liste und Hover.
fn strip_membership(ctx: &mut EditContext<'_>, removed: &[Uid]) -> MembershipRecord {
    let removed: IndexSet<&Uid> = removed.iter().collect();
    let hover_removed = ctx
        .selection
        .hover
        .as_ref()
        .is_some_and(|h| removed.contains(h));

    MembershipRecord {
        selected: take_members(&mut ctx.selection.selected, &removed),
        expanded: take_members(&mut ctx.selection.expanded, &removed),
        hover: if hover_removed {
            ctx.selection.hover.take()
        } else {
            None
        },
    }
}

fn take_members(set: &mut IndexSet<Uid>, removed: &IndexSet<&Uid>) -> Vec<(usize, Uid)> {
    let taken: Vec<(usize, Uid)> = set
        .iter()
        .enumerate()
        .filter(|(_, uid)| removed.contains(uid))
        .map(|(i, uid)| (i, uid.clone()))
        .collect();
    set.retain(|uid| !removed.contains(uid));
    taken
}

fn restore_membership(ctx: &mut EditContext<'_>, record: MembershipRecord) {
    for (index, uid) in record.selected {
        let index = index.min(ctx.selection.selected.len());
        ctx.selection.selected.shift_insert(index, uid);
    }
    for (index, uid) in record.expanded {
        let index = index.min(ctx.selection.expanded.len());
        ctx.selection.expanded.shift_insert(index, uid);
    }
    if record.hover.is_some() && ctx.selection.hover.is_none() {
        ctx.selection.hover = record.hover;
    }
}
