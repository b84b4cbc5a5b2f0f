//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod changes;
pub mod command_log;
pub mod commands;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod interaction;
/// Application State
///
/// Dieses Modul verwaltet den Zustand einer Editier-Sitzung (Graph, Selektion, Verlauf, Gesten).
pub mod state;
pub mod use_cases;
pub mod view_model;

pub use changes::{ChangeOutbox, StateChange};
pub use command_log::CommandLog;
pub use commands::{CommandError, EditCommand, ItemPatch};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, Modifiers, PointerButton};
pub use history::EditHistory;
pub use state::{AppState, SelectionState};
pub use view_model::{build as build_view, EditorView};
