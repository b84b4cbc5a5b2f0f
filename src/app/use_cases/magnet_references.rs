//! Aufbau der Magnet-Hilfslinien für einen Drag-Schritt.
//!
//! Reihenfolge der Referenzen (bestimmt den Gewinner bei gleichem Abstand):
//! 1. Achsen durch alle stehenden Punkte
//! 2. Achsen durch die Position vor dem Drag
//! 3. Richtung der benachbarten Segmente
//! 4. Heading des vorherigen und nächsten Endpunkts

use crate::core::{
    to_heading, ControlLocation, FollowerPartition, MagnetReference, PathGraph, Vector,
};

/// Baut alle Referenzen für den Drag von `target`.
pub fn build_references(
    graph: &PathGraph,
    target: ControlLocation,
    partition: &FollowerPartition,
    pos_before_drag: Vector,
) -> Vec<MagnetReference> {
    let mut references = Vec::with_capacity(partition.remaining.len() * 2 + 8);

    for location in &partition.remaining {
        if let Some(control) = graph.control_at(*location) {
            references.extend(MagnetReference::axes(control.position, 0.0));
        }
    }
    references.extend(MagnetReference::axes(pos_before_drag, 0.0));
    references.extend(sibling_references(graph, target, partition));

    references
}

/// Segment- und Endpunkt-Referenzen aus dem Pfad des gezogenen Punkts.
pub fn sibling_references(
    graph: &PathGraph,
    target: ControlLocation,
    partition: &FollowerPartition,
) -> Vec<MagnetReference> {
    let mut references = Vec::new();
    let Some(path) = graph.paths().get(target.path) else {
        return references;
    };
    let controls = &path.controls;
    let idx = target.index;
    let is_follower = |index: usize| {
        partition.is_follower(ControlLocation {
            path: target.path,
            index,
        })
    };

    // Anker am näheren Punkt, Richtung zum ferneren
    let mut segment = |near: usize, far: usize| {
        let (c1, c2) = (&controls[near], &controls[far]);
        if c1.visible && !is_follower(near) && c2.visible && !is_follower(far) {
            references.push(MagnetReference::new(
                c1.position,
                to_heading(c2.position - c1.position),
            ));
        }
    };
    if idx >= 2 {
        segment(idx - 1, idx - 2);
    }
    if idx + 2 < controls.len() {
        segment(idx + 1, idx + 2);
    }

    let prev_end = (0..idx).rev().find(|&i| controls[i].is_end());
    let next_end = (idx + 1..controls.len()).find(|&i| controls[i].is_end());
    for index in [prev_end, next_end].into_iter().flatten() {
        if is_follower(index) {
            continue;
        }
        if let Some(heading) = controls[index].heading() {
            references.push(MagnetReference::new(controls[index].position, heading));
        }
    }

    references
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{resolve_followers, Control, Path, Uid};
    use approx::assert_relative_eq;
    use indexmap::IndexSet;

    fn two_segment_graph() -> PathGraph {
        PathGraph::from_paths(vec![Path::new(
            "p",
            vec![
                Control::end("e0", Vector::new(0.0, 0.0), 45.0),
                Control::interior("a0", Vector::new(0.0, 10.0)),
                Control::interior("b0", Vector::new(10.0, 10.0)),
                Control::end("e1", Vector::new(10.0, 0.0), 90.0),
                Control::interior("a1", Vector::new(20.0, 0.0)),
                Control::interior("b1", Vector::new(30.0, 0.0)),
                Control::end("e2", Vector::new(40.0, 0.0), 180.0),
            ],
        )])
    }

    fn partition_for(graph: &PathGraph, uid: &str, selected: &[&str]) -> FollowerPartition {
        let selected: IndexSet<Uid> = selected.iter().map(|s| Uid::from(*s)).collect();
        let target = graph.locate(&Uid::from(uid)).unwrap();
        resolve_followers(graph, target, &selected, false)
    }

    #[test]
    fn references_follow_construction_order() {
        let graph = two_segment_graph();
        let target = graph.locate(&Uid::from("e1")).unwrap();
        let partition = partition_for(&graph, "e1", &[]);
        let refs = build_references(&graph, target, &partition, Vector::new(10.0, 0.0));

        // 6 stehende Punkte × 2 Achsen + 2 Vor-Drag-Achsen + 2 Segmente + 2 Endpunkte
        assert_eq!(refs.len(), 12 + 2 + 2 + 2);
        assert_eq!(refs[0], MagnetReference::new(Vector::ZERO, 0.0));
        assert_eq!(refs[1], MagnetReference::new(Vector::ZERO, 90.0));
        assert_eq!(refs[12].source, Vector::new(10.0, 0.0));
    }

    #[test]
    fn segment_reference_points_from_near_to_far_control() {
        let graph = two_segment_graph();
        let target = graph.locate(&Uid::from("e1")).unwrap();
        let partition = partition_for(&graph, "e1", &[]);
        let refs = sibling_references(&graph, target, &partition);

        // b0 → a0 zeigt nach -X (270°), a1 → b1 nach +X (90°)
        assert_eq!(refs[0].source, Vector::new(10.0, 10.0));
        assert_relative_eq!(refs[0].heading, 270.0);
        assert_eq!(refs[1].source, Vector::new(20.0, 0.0));
        assert_relative_eq!(refs[1].heading, 90.0);
        // Nachbar-Endpunkte mit eigenem Heading
        assert_eq!(refs[2], MagnetReference::new(Vector::ZERO, 45.0));
        assert_eq!(refs[3], MagnetReference::new(Vector::new(40.0, 0.0), 180.0));
    }

    #[test]
    fn followers_are_excluded_from_sibling_references() {
        let graph = two_segment_graph();
        let target = graph.locate(&Uid::from("e1")).unwrap();
        let partition = partition_for(&graph, "e1", &["e0", "a1"]);
        let refs = sibling_references(&graph, target, &partition);

        // e0 folgt → kein Endpunkt-Anker links; a0/b0 bleiben stehen
        // a1 folgt nicht (innere Punkte ohne include_interior) → rechts bleibt erhalten
        assert!(refs.iter().all(|r| r.source != Vector::ZERO));
        assert_eq!(refs.len(), 3);
    }

    #[test]
    fn hidden_neighbours_do_not_form_segments() {
        let mut graph = two_segment_graph();
        graph.control_mut(&Uid::from("b0")).unwrap().visible = false;
        let target = graph.locate(&Uid::from("e1")).unwrap();
        let partition = partition_for(&graph, "e1", &[]);
        let refs = sibling_references(&graph, target, &partition);
        assert!(refs.iter().all(|r| r.source != Vector::new(10.0, 10.0)));
    }
}
