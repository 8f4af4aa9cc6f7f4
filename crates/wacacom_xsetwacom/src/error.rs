//! Fehler beim Parsen der CLI-Ausgaben.

use thiserror::Error;

/// Fehler beim Interpretieren einer `xsetwacom`-/`xrandr`-Ausgabe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Gerätetyp ist keiner von STYLUS, PAD, ERASER, TOUCH
    #[error("unrecognized device type: '{0}'")]
    UnknownDeviceType(String),
    /// Zeile enthält nicht die erwartete Anzahl ganzzahliger Werte
    #[error("expected {expected} integer values, got '{line}'")]
    MalformedValues { expected: usize, line: String },
}
