//! Folger-Auflösung: welche Kontrollpunkte bewegen sich mit dem gezogenen Punkt mit?
//!
//! Jeder sichtbare Punkt (außer dem Ziel) landet in genau einer der beiden
//! Listen: `followers` bewegen sich mit, `remaining` bleiben stehen und dienen
//! dem Magneten als Referenz.

use super::{ControlKind, ControlLocation, PathGraph, Uid};
use indexmap::IndexSet;

/// Ergebnis der Folger-Auflösung.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowerPartition {
    /// Punkte, die mit dem Ziel verschoben werden
    pub followers: Vec<ControlLocation>,
    /// Stehende Punkte (Magnet-Referenzkandidaten)
    pub remaining: Vec<ControlLocation>,
}

impl FollowerPartition {
    /// Gibt `true` zurück, wenn der Punkt an `location` ein Folger ist.
    pub fn is_follower(&self, location: ControlLocation) -> bool {
        self.followers.contains(&location)
    }

    /// Uids aller Folger (für Commands, die über strukturelle Änderungen hinweg gelten).
    pub fn follower_uids(&self, graph: &PathGraph) -> Vec<Uid> {
        self.followers
            .iter()
            .filter_map(|loc| graph.control_at(*loc))
            .map(|c| c.uid.clone())
            .collect()
    }
}

/// Teilt alle Kontrollpunkte in Folger und stehende Punkte auf (O(Anzahl Punkte)).
///
/// Ein Punkt folgt, wenn er selektiert ist, weder er noch sein Pfad gesperrt
/// ist und er ein Endpunkt ist oder `include_interior` gesetzt ist.
/// Wird ein Endpunkt mit `include_interior` gezogen, folgen seine direkten
/// inneren Nachbarn im Pfad immer (sofern sichtbar und ungesperrt).
pub fn resolve_followers(
    graph: &PathGraph,
    target: ControlLocation,
    selected: &IndexSet<Uid>,
    include_interior: bool,
) -> FollowerPartition {
    let mut partition = FollowerPartition::default();

    for (location, path, control) in graph.controls_iter() {
        if location == target {
            continue;
        }
        if !control.visible || !path.visible {
            continue;
        }

        let follows = selected.contains(&control.uid)
            && !control.lock
            && !path.lock
            && (control.is_end() || include_interior);

        if follows {
            partition.followers.push(location);
        } else {
            partition.remaining.push(location);
        }
    }

    if include_interior {
        pull_interior_siblings(graph, target, &mut partition);
    }

    partition
}

/// Ein gezogener Endpunkt zieht seine direkten inneren Nachbarn mit.
fn pull_interior_siblings(
    graph: &PathGraph,
    target: ControlLocation,
    partition: &mut FollowerPartition,
) {
    let Some(path) = graph.paths().get(target.path) else {
        return;
    };
    let Some(dragged) = path.controls.get(target.index) else {
        return;
    };
    if !dragged.is_end() || path.lock || !path.visible {
        return;
    }

    let neighbours = [
        target.index.checked_sub(1),
        Some(target.index + 1).filter(|&i| i < path.controls.len()),
    ];

    for index in neighbours.into_iter().flatten() {
        let sibling = &path.controls[index];
        if sibling.kind != ControlKind::Interior || !sibling.visible || sibling.lock {
            continue;
        }
        let location = ControlLocation {
            path: target.path,
            index,
        };
        partition.remaining.retain(|loc| *loc != location);
        if !partition.followers.contains(&location) {
            partition.followers.push(location);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Control, Path, Vector};

    fn graph() -> PathGraph {
        PathGraph::from_paths(vec![
            Path::new(
                "p",
                vec![
                    Control::end("e0", Vector::ZERO, 0.0),
                    Control::interior("c1", Vector::new(5.0, 5.0)),
                    Control::end("e1", Vector::new(10.0, 0.0), 0.0),
                ],
            ),
            Path::new(
                "q",
                vec![
                    Control::end("f0", Vector::new(0.0, 20.0), 0.0),
                    Control::interior("d1", Vector::new(5.0, 25.0)),
                    Control::end("f1", Vector::new(10.0, 20.0), 0.0),
                ],
            ),
        ])
    }

    fn loc(graph: &PathGraph, uid: &str) -> ControlLocation {
        graph.locate(&Uid::from(uid)).expect("Punkt vorhanden")
    }

    fn selection(uids: &[&str]) -> IndexSet<Uid> {
        uids.iter().map(|u| Uid::from(*u)).collect()
    }

    #[test]
    fn partition_is_total_and_disjoint() {
        let graph = graph();
        let target = loc(&graph, "e0");
        let selected = selection(&["e1", "d1", "f1"]);

        for include_interior in [true, false] {
            let part = resolve_followers(&graph, target, &selected, include_interior);
            assert_eq!(part.followers.len() + part.remaining.len(), 5);
            for f in &part.followers {
                assert!(!part.remaining.contains(f));
            }
            assert!(!part.followers.contains(&target));
            assert!(!part.remaining.contains(&target));
        }
    }

    #[test]
    fn interior_controls_only_follow_when_included() {
        let graph = graph();
        let target = loc(&graph, "f0");
        let selected = selection(&["d1", "e1"]);

        let with = resolve_followers(&graph, target, &selected, true);
        assert!(with.is_follower(loc(&graph, "d1")));
        assert!(with.is_follower(loc(&graph, "e1")));

        let without = resolve_followers(&graph, target, &selected, false);
        assert!(!without.is_follower(loc(&graph, "d1")));
        assert!(without.is_follower(loc(&graph, "e1")));
    }

    #[test]
    fn locked_controls_and_paths_stay_put() {
        let mut graph = graph();
        graph.control_mut(&Uid::from("e1")).unwrap().lock = true;
        graph.path_mut(&Uid::from("q")).unwrap().lock = true;
        let target = loc(&graph, "c1");
        let selected = selection(&["e1", "f0", "f1"]);

        let part = resolve_followers(&graph, target, &selected, true);
        assert!(part.followers.is_empty());
        assert_eq!(part.remaining.len(), 5);
    }

    #[test]
    fn invisible_controls_are_skipped_entirely() {
        let mut graph = graph();
        graph.control_mut(&Uid::from("e1")).unwrap().visible = false;
        graph.path_mut(&Uid::from("q")).unwrap().visible = false;
        let target = loc(&graph, "c1");

        let part = resolve_followers(&graph, target, &selection(&["e1"]), true);
        assert!(part.followers.is_empty());
        assert_eq!(part.remaining, vec![loc(&graph, "e0")]);
    }

    #[test]
    fn end_control_pulls_interior_siblings_without_selection() {
        let graph = graph();
        let target = loc(&graph, "e0");

        let part = resolve_followers(&graph, target, &IndexSet::new(), true);
        assert_eq!(part.followers, vec![loc(&graph, "c1")]);
        assert!(!part.remaining.contains(&loc(&graph, "c1")));

        let part = resolve_followers(&graph, target, &IndexSet::new(), false);
        assert!(part.followers.is_empty());
    }

    #[test]
    fn locked_sibling_is_not_pulled() {
        let mut graph = graph();
        graph.control_mut(&Uid::from("c1")).unwrap().lock = true;
        let part = resolve_followers(&graph, loc(&graph, "e1"), &IndexSet::new(), true);
        assert!(part.followers.is_empty());
    }
}
