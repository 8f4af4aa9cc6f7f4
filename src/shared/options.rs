//! Zentrale Konfiguration für wacacom.
//!
//! `AppOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Startgröße des Hauptfensters in Pixeln.
pub const WINDOW_SIZE: [f32; 2] = [800.0, 900.0];

// ── Region-Mapper ───────────────────────────────────────────────────

/// Größe des Display-Mappers (16:9).
pub const DISPLAY_MAPPER_SIZE: [f32; 2] = [320.0, 180.0];
/// Größe des Tablet-Mappers (16:9).
pub const TABLET_MAPPER_SIZE: [f32; 2] = [240.0, 135.0];
/// Hintergrund-Raster der Mapper (Spalten, Zeilen).
pub const MAPPER_GRID: [u32; 2] = [16, 9];
/// Farbe des abgebildeten Rechtecks (RGBA: Hellblau).
pub const MAPPED_AREA_COLOR: [f32; 4] = [0.4, 0.6, 1.0, 0.35];
/// Farbe der Verbindungslinien zwischen den Mappern (RGBA: Rot).
pub const LINK_LINE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// ── Druckkurve ──────────────────────────────────────────────────────

/// Größe des Kurven-Editors.
pub const CURVE_EDITOR_SIZE: [f32; 2] = [300.0, 300.0];
/// Hintergrund-Raster des Kurven-Editors.
pub const CURVE_GRID: [u32; 2] = [4, 4];
/// Farbe der Kurve (RGBA: Weiß).
pub const CURVE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Anfasser ────────────────────────────────────────────────────────

/// Radius der Anfasser in Pixeln.
pub const GRAB_RADIUS_PX: f32 = 6.0;
/// Randstärke der Anfasser in Pixeln.
pub const GRAB_BORDER_PX: f32 = 2.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `wacacom.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppOptions {
    // ── Fenster ─────────────────────────────────────────────────
    /// Startgröße des Hauptfensters
    pub window_size: [f32; 2],

    // ── Mapper ──────────────────────────────────────────────────
    /// Größe des Display-Mappers in Pixeln
    pub display_mapper_size: [f32; 2],
    /// Größe des Tablet-Mappers in Pixeln
    pub tablet_mapper_size: [f32; 2],
    /// Raster-Unterteilung der Mapper
    pub mapper_grid: [u32; 2],
    /// Farbe des abgebildeten Rechtecks
    pub mapped_area_color: [f32; 4],
    /// Farbe der Verbindungslinien
    pub link_line_color: [f32; 4],

    // ── Kurve ───────────────────────────────────────────────────
    /// Größe des Kurven-Editors in Pixeln
    pub curve_editor_size: [f32; 2],
    /// Raster-Unterteilung des Kurven-Editors
    pub curve_grid: [u32; 2],
    /// Segmente der gezeichneten Kurve
    pub curve_smoothness: usize,
    /// Farbe der Kurve
    pub curve_color: [f32; 4],

    // ── Anfasser ────────────────────────────────────────────────
    /// Radius der Anfasser
    pub grab_radius_px: f32,
    /// Randstärke der Anfasser
    pub grab_border_px: f32,

    // ── Geräte ──────────────────────────────────────────────────
    /// Beim Übernehmen das Tablet auf den gewählten Bildschirm abbilden
    #[serde(default = "default_map_to_output_on_apply")]
    pub map_to_output_on_apply: bool,
    /// Programmname von xsetwacom
    #[serde(default = "default_xsetwacom_binary")]
    pub xsetwacom_binary: String,
    /// Programmname von xrandr
    #[serde(default = "default_xrandr_binary")]
    pub xrandr_binary: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,

            display_mapper_size: DISPLAY_MAPPER_SIZE,
            tablet_mapper_size: TABLET_MAPPER_SIZE,
            mapper_grid: MAPPER_GRID,
            mapped_area_color: MAPPED_AREA_COLOR,
            link_line_color: LINK_LINE_COLOR,

            curve_editor_size: CURVE_EDITOR_SIZE,
            curve_grid: CURVE_GRID,
            curve_smoothness: crate::core::DEFAULT_SMOOTHNESS,
            curve_color: CURVE_COLOR,

            grab_radius_px: GRAB_RADIUS_PX,
            grab_border_px: GRAB_BORDER_PX,

            map_to_output_on_apply: default_map_to_output_on_apply(),
            xsetwacom_binary: default_xsetwacom_binary(),
            xrandr_binary: default_xrandr_binary(),
        }
    }
}

/// Serde-Default für `map_to_output_on_apply` (Abwärtskompatibilität).
fn default_map_to_output_on_apply() -> bool {
    true
}

fn default_xsetwacom_binary() -> String {
    "xsetwacom".to_string()
}

fn default_xrandr_binary() -> String {
    "xrandr".to_string()
}

impl AppOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::with_min_widget_sizes(opts)
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

    /// Begrenzt alle Widget-Größen auf mindestens einen Pixel.
    fn with_min_widget_sizes(mut self) -> Self {
        for size in [
            &mut self.display_mapper_size,
            &mut self.tablet_mapper_size,
            &mut self.curve_editor_size,
        ] {
            *size = size.map(|v| v.max(1.0));
        }
        self
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("wacacom"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("wacacom.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("wacacom_{}_{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");
        let mut options = AppOptions::default();
        options.curve_smoothness = 128;
        options.map_to_output_on_apply = false;

        options.save_to_file(&path).expect("Speichern sollte klappen");
        let loaded = AppOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let loaded = AppOptions::load_from_file(&temp_path("does_not_exist"));
        assert_eq!(loaded, AppOptions::default());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = temp_path("malformed");
        std::fs::write(&path, "curve_smoothness = \"viele\"").expect("Schreiben sollte klappen");

        let loaded = AppOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, AppOptions::default());
    }

    #[test]
    fn test_older_file_without_device_fields_uses_defaults() {
        let full = toml::to_string_pretty(&AppOptions::default()).expect("serialisierbar");
        let older: String = full
            .lines()
            .filter(|line| {
                !line.starts_with("map_to_output_on_apply")
                    && !line.starts_with("xsetwacom_binary")
                    && !line.starts_with("xrandr_binary")
            })
            .map(|line| format!("{line}\n"))
            .collect();

        let loaded: AppOptions = toml::from_str(&older).expect("ältere Datei sollte laden");

        assert!(loaded.map_to_output_on_apply);
        assert_eq!(loaded.xsetwacom_binary, "xsetwacom");
        assert_eq!(loaded.xrandr_binary, "xrandr");
    }

    #[test]
    fn test_non_positive_widget_sizes_are_clamped() {
        let path = temp_path("tiny_widgets");
        let mut options = AppOptions::default();
        options.display_mapper_size = [0.0, -20.0];
        options.tablet_mapper_size = [-1.0, 135.0];
        options.curve_editor_size = [0.5, 0.0];
        options.save_to_file(&path).expect("Speichern sollte klappen");

        let loaded = AppOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.display_mapper_size, [1.0, 1.0]);
        assert_eq!(loaded.tablet_mapper_size, [1.0, 135.0]);
        assert_eq!(loaded.curve_editor_size, [1.0, 1.0]);
        assert_eq!(loaded.window_size, WINDOW_SIZE);
    }
}
