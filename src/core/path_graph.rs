//! Der zentrale Entitäts-Graph: alle Pfade und ihre Kontrollpunkte.

use super::{Control, Path, Uid, UidGenerator, Vector};

/// Position eines Kontrollpunkts im Graph (Pfad-Index, Punkt-Index).
///
/// Nur gültig, solange keine strukturelle Änderung stattfindet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlLocation {
    /// Index des Pfads in `PathGraph::paths`
    pub path: usize,
    /// Index des Kontrollpunkts im Pfad
    pub index: usize,
}

/// Referenz auf ein Element des Pfad-Baums (Pfad oder Kontrollpunkt).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TreeItemRef<'a> {
    /// Ein ganzer Pfad
    Path(&'a Path),
    /// Ein Kontrollpunkt samt besitzendem Pfad
    Control(&'a Path, &'a Control),
}

/// Container für alle Pfade einer Editier-Sitzung.
#[derive(Debug, Clone, Default)]
pub struct PathGraph {
    paths: Vec<Path>,
    uids: UidGenerator,
}

impl PathGraph {
    /// Erstellt einen leeren Graph.
    pub fn new() -> Self {
        Self {
            paths: Vec::new(),
            uids: UidGenerator::new(),
        }
    }

    /// Erstellt einen Graph aus bestehenden Pfaden (Lade-Grenze).
    pub fn from_paths(paths: Vec<Path>) -> Self {
        Self {
            paths,
            uids: UidGenerator::new(),
        }
    }

    /// Alle Pfade in Reihenfolge (read-only).
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Anzahl der Pfade.
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Anzahl aller Kontrollpunkte über alle Pfade.
    pub fn control_count(&self) -> usize {
        self.paths.iter().map(|p| p.controls.len()).sum()
    }

    /// Iterator über alle Kontrollpunkte mit Position im Graph.
    pub fn controls_iter(&self) -> impl Iterator<Item = (ControlLocation, &Path, &Control)> {
        self.paths.iter().enumerate().flat_map(|(pi, path)| {
            path.controls.iter().enumerate().map(move |(ci, control)| {
                (
                    ControlLocation {
                        path: pi,
                        index: ci,
                    },
                    path,
                    control,
                )
            })
        })
    }

    /// Sucht einen Kontrollpunkt per Uid (O(n)).
    pub fn locate(&self, uid: &Uid) -> Option<ControlLocation> {
        self.paths.iter().enumerate().find_map(|(pi, path)| {
            path.index_of(uid).map(|ci| ControlLocation {
                path: pi,
                index: ci,
            })
        })
    }

    /// Kontrollpunkt an einer Position.
    pub fn control_at(&self, location: ControlLocation) -> Option<&Control> {
        self.paths
            .get(location.path)
            .and_then(|p| p.controls.get(location.index))
    }

    /// Kontrollpunkt per Uid.
    pub fn control(&self, uid: &Uid) -> Option<&Control> {
        self.locate(uid).and_then(|loc| self.control_at(loc))
    }

    /// Mutable Referenz auf einen Kontrollpunkt per Uid.
    pub fn control_mut(&mut self, uid: &Uid) -> Option<&mut Control> {
        let loc = self.locate(uid)?;
        self.paths
            .get_mut(loc.path)
            .and_then(|p| p.controls.get_mut(loc.index))
    }

    /// Besitzender Pfad eines Kontrollpunkts.
    pub fn owner_of(&self, uid: &Uid) -> Option<&Path> {
        self.locate(uid).map(|loc| &self.paths[loc.path])
    }

    /// Pfad per Uid.
    pub fn path(&self, uid: &Uid) -> Option<&Path> {
        self.paths.iter().find(|p| &p.uid == uid)
    }

    /// Mutable Referenz auf einen Pfad per Uid.
    pub fn path_mut(&mut self, uid: &Uid) -> Option<&mut Path> {
        self.paths.iter_mut().find(|p| &p.uid == uid)
    }

    /// Index eines Pfads in der Pfad-Liste.
    pub fn path_index(&self, uid: &Uid) -> Option<usize> {
        self.paths.iter().position(|p| &p.uid == uid)
    }

    /// Löst eine Uid auf einen Pfad oder Kontrollpunkt auf.
    pub fn tree_item(&self, uid: &Uid) -> Option<TreeItemRef<'_>> {
        if let Some(path) = self.path(uid) {
            return Some(TreeItemRef::Path(path));
        }
        let loc = self.locate(uid)?;
        let path = &self.paths[loc.path];
        Some(TreeItemRef::Control(path, &path.controls[loc.index]))
    }

    /// Setzt die Position eines Kontrollpunkts. Gibt `false` zurück, wenn er nicht existiert.
    pub fn set_control_position(&mut self, uid: &Uid, position: Vector) -> bool {
        match self.control_mut(uid) {
            Some(control) => {
                control.set_xy(position);
                true
            }
            None => false,
        }
    }

    /// Erzeugt eine neue, im Graph noch unbenutzte Pfad-ID.
    pub fn next_path_uid(&mut self) -> Uid {
        loop {
            let uid = self.uids.next_path();
            if self.path(&uid).is_none() && self.locate(&uid).is_none() {
                return uid;
            }
        }
    }

    /// Erzeugt eine neue, im Graph noch unbenutzte Kontrollpunkt-ID.
    pub fn next_control_uid(&mut self) -> Uid {
        loop {
            let uid = self.uids.next_control();
            if self.path(&uid).is_none() && self.locate(&uid).is_none() {
                return uid;
            }
        }
    }

    // ── Strukturelle Änderungen (nur über Commands) ─────────────────

    /// Fügt einen Pfad an Index ein (Index wird auf die Länge begrenzt).
    pub(crate) fn insert_path(&mut self, index: usize, path: Path) {
        let index = index.min(self.paths.len());
        self.paths.insert(index, path);
    }

    /// Entfernt den Pfad an Index und gibt ihn zurück.
    pub(crate) fn take_path(&mut self, index: usize) -> Option<Path> {
        (index < self.paths.len()).then(|| self.paths.remove(index))
    }

    /// Fügt einen Kontrollpunkt in einen Pfad ein.
    pub(crate) fn insert_control(&mut self, path_index: usize, index: usize, control: Control) -> bool {
        match self.paths.get_mut(path_index) {
            Some(path) if index <= path.controls.len() => {
                path.controls.insert(index, control);
                true
            }
            _ => false,
        }
    }

    /// Entfernt einen Kontrollpunkt aus einem Pfad und gibt ihn zurück.
    pub(crate) fn take_control(&mut self, location: ControlLocation) -> Option<Control> {
        let path = self.paths.get_mut(location.path)?;
        (location.index < path.controls.len()).then(|| path.controls.remove(location.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PathGraph {
        PathGraph::from_paths(vec![
            Path::new(
                "p1",
                vec![
                    Control::end("e0", Vector::ZERO, 0.0),
                    Control::interior("c1", Vector::new(5.0, 5.0)),
                    Control::end("e1", Vector::new(10.0, 0.0), 0.0),
                ],
            ),
            Path::new(
                "p2",
                vec![
                    Control::end("f0", Vector::new(0.0, 20.0), 90.0),
                    Control::end("f1", Vector::new(10.0, 20.0), 90.0),
                ],
            ),
        ])
    }

    #[test]
    fn locate_finds_controls_across_paths() {
        let graph = sample();
        assert_eq!(
            graph.locate(&Uid::from("f1")),
            Some(ControlLocation { path: 1, index: 1 })
        );
        assert!(graph.locate(&Uid::from("nope")).is_none());
        assert_eq!(graph.control_count(), 5);
        assert_eq!(graph.owner_of(&Uid::from("c1")).unwrap().uid.as_str(), "p1");
    }

    #[test]
    fn tree_item_resolves_paths_and_controls() {
        let graph = sample();
        assert!(matches!(
            graph.tree_item(&Uid::from("p2")),
            Some(TreeItemRef::Path(_))
        ));
        assert!(matches!(
            graph.tree_item(&Uid::from("e1")),
            Some(TreeItemRef::Control(_, c)) if c.is_end()
        ));
    }

    #[test]
    fn take_and_insert_control_keeps_identity() {
        let mut graph = sample();
        let loc = graph.locate(&Uid::from("c1")).unwrap();
        let taken = graph.take_control(loc).unwrap();
        assert_eq!(graph.paths()[0].controls.len(), 2);
        assert!(graph.insert_control(loc.path, loc.index, taken));
        assert_eq!(graph.locate(&Uid::from("c1")), Some(loc));
    }

    #[test]
    fn generated_uids_skip_existing_ids() {
        let mut graph = PathGraph::from_paths(vec![Path::new(
            "p1",
            vec![Control::end("c2", Vector::ZERO, 0.0)],
        )]);
        assert_eq!(graph.next_path_uid().as_str(), "p2");
        assert_eq!(graph.next_control_uid().as_str(), "c3");
        assert_eq!(graph.next_control_uid().as_str(), "c4");
    }
}
