//! Editier-Engine für 2D-Pfade aus Kontrollpunkten.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorView, Modifiers, PointerButton,
    StateChange,
};
pub use core::{
    Clock, Control, ControlKind, CoordinateTransform, ManualClock, MagnetReference, Path,
    PathGraph, SystemClock, Uid, Vector, ViewTransform,
};
pub use shared::EditorOptions;
