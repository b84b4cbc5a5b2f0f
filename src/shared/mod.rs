//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::EditorOptions;
pub use options::{CONTROL_MAGNET_DISTANCE, DRAG_MERGE_WINDOW_MS, TOUCH_MAGNET_DELAY_MS};
