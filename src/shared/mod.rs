//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app`, `ui` und `backend` gemeinsam lesen.

pub mod options;

pub use options::AppOptions;
