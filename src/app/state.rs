//! Application State: zentrale Datenhaltung der Editier-Sitzung.

mod app_state;
mod selection;

pub use app_state::AppState;
pub use selection::SelectionState;
