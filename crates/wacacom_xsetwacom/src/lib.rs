//! `wacacom_xsetwacom`: Anbindung an `xsetwacom` und `xrandr`.
//!
//! Kapselt das Starten der Kommandozeilen-Tools und das Parsen ihrer Textausgabe:
//! - Aktive Monitore (`xrandr --listactivemonitors`)
//! - Tablet-Geräte (`xsetwacom --list devices`)
//! - Aktiver Bereich, Maximalbereich und Druckkurve eines Geräts
//! - Zuordnung eines Geräts zu einem Ausgang (`MapToOutput`)
//!
//! # Beispiel
//! ```no_run
//! use wacacom_xsetwacom::{drawing_devices, Xsetwacom};
//!
//! let xsetwacom = Xsetwacom::default();
//! for device in drawing_devices(xsetwacom.list_devices()?) {
//!     let area = xsetwacom.area(device.id)?;
//!     println!("{}: {}x{}", device.name, area.width, area.height);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod area;
mod command;
pub mod device;
pub mod display;
pub mod error;
pub mod xsetwacom;

pub use area::{parse_area, parse_pressure_curve, Area};
pub use device::{drawing_devices, parse_device_list, Device, DeviceType};
pub use display::{parse_active_monitors, primary_display, Display, Xrandr};
pub use error::ParseError;
pub use xsetwacom::Xsetwacom;
