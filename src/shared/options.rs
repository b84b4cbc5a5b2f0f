//! Zentrale Konfiguration der Editier-Engine.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── Magnet ──────────────────────────────────────────────────────────

/// Magnet-Toleranz in Welteinheiten (inklusive Grenze).
pub const CONTROL_MAGNET_DISTANCE: f64 = 5.0;
/// Verzögerung, nach der Touch-Drag den Magneten aktiviert.
pub const TOUCH_MAGNET_DELAY_MS: u64 = 600;

// ── History ─────────────────────────────────────────────────────────

/// Zeitfenster, in dem aufeinanderfolgende Drag-Schritte zusammengefasst werden.
pub const DRAG_MERGE_WINDOW_MS: u64 = 5000;
/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_MAX_DEPTH: usize = 200;

// ── Mausrad ─────────────────────────────────────────────────────────

/// Heading-Grad pro Mausrad-Einheit.
pub const WHEEL_HEADING_SCALE: f64 = 0.1;
/// Horizontal-Anteil, ab dem ein Scroll nicht als Heading-Änderung zählt.
pub const WHEEL_HORIZONTAL_RATIO: f64 = 1.5;
/// Wie lange ein Mausrad-Zweck (Heading, Kamera) das Rad nach Benutzung belegt.
pub const WHEEL_CLAIM_MS: u64 = 300;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `motion_path_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Magnet ──────────────────────────────────────────────────
    /// Magnet-Toleranz in Welteinheiten
    pub control_magnet_distance: f64,
    /// Touch: Stillhalte-Dauer bis der Magnet aktiv wird (ms)
    pub touch_magnet_delay_ms: u64,

    // ── History ─────────────────────────────────────────────────
    /// Merge-Fenster für Drag-Schritte (ms)
    pub drag_merge_window_ms: u64,
    /// Maximale Undo-Tiefe
    pub history_max_depth: usize,

    // ── Mausrad ─────────────────────────────────────────────────
    /// Heading-Grad pro Mausrad-Einheit
    pub wheel_heading_scale: f64,
    /// Verhältnis |dx|·ratio > |dy| ⇒ Scroll wird ignoriert
    pub wheel_horizontal_ratio: f64,
    /// Belegungsdauer des Mausrads pro Zweck (ms)
    pub wheel_claim_ms: u64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            control_magnet_distance: CONTROL_MAGNET_DISTANCE,
            touch_magnet_delay_ms: TOUCH_MAGNET_DELAY_MS,
            drag_merge_window_ms: DRAG_MERGE_WINDOW_MS,
            history_max_depth: HISTORY_MAX_DEPTH,
            wheel_heading_scale: WHEEL_HEADING_SCALE,
            wheel_horizontal_ratio: WHEEL_HORIZONTAL_RATIO,
            wheel_claim_ms: WHEEL_CLAIM_MS,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("motion_path_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("motion_path_editor.toml")
    }

    /// Merge-Fenster für Drag-Schritte.
    pub fn drag_merge_window(&self) -> Duration {
        Duration::from_millis(self.drag_merge_window_ms)
    }

    /// Touch-Verzögerung bis zur Magnet-Aktivierung.
    pub fn touch_magnet_delay(&self) -> Duration {
        Duration::from_millis(self.touch_magnet_delay_ms)
    }

    /// Belegungsdauer des Mausrads.
    pub fn wheel_claim(&self) -> Duration {
        Duration::from_millis(self.wheel_claim_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let opts: EditorOptions =
            toml::from_str("control_magnet_distance = 2.5\n").expect("gültiges TOML");
        assert_eq!(opts.control_magnet_distance, 2.5);
        assert_eq!(opts.drag_merge_window_ms, DRAG_MERGE_WINDOW_MS);
        assert_eq!(opts.touch_magnet_delay(), Duration::from_millis(600));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!(
            "motion_path_editor_opts_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis");
        let file = dir.join("opts.toml");

        let opts = EditorOptions {
            control_magnet_distance: 1.25,
            history_max_depth: 17,
            ..EditorOptions::default()
        };
        opts.save_to_file(&file).expect("Speichern");
        assert_eq!(EditorOptions::load_from_file(&file), opts);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let opts = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/motion_path_editor.toml",
        ));
        assert_eq!(opts, EditorOptions::default());
    }
}
