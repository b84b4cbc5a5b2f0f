//! Core-Domänentypen: Geometrie, Entitäts-Graph, Folger-Auflösung, Magnet.

pub mod control;
pub mod followers;
pub mod heading;
pub mod magnet;
pub mod path;
pub mod path_graph;
pub mod timer;
pub mod transform;
pub mod uid;
pub mod vector;

pub use control::{Control, ControlKind};
pub use followers::{resolve_followers, FollowerPartition};
pub use heading::{bound_heading, heading_direction, is_orthogonal, to_heading};
pub use magnet::{snap, MagnetReference, MagnetResult};
pub use path::Path;
pub use path_graph::{ControlLocation, PathGraph, TreeItemRef};
pub use timer::{Clock, ManualClock, SystemClock, TimerHandle, TimerQueue};
pub use transform::{CoordinateTransform, ViewTransform};
pub use uid::{Uid, UidGenerator};
pub use vector::{distance, distance_to_line, line_intersection, project_onto_line, Vector};
