//! Tablet-Geräte aus `xsetwacom --list devices`.

use crate::error::ParseError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// `"Wacom Intuos S Pen stylus   id: 12  type: STYLUS"` → Name, id, Typ
static DEVICE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.+)\s+id: (\d+)\s+type: (\w+)").expect("Geräte-Pattern ist gültig")
});

/// Gerätetyp laut xsetwacom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    /// Stift-Spitze
    Stylus,
    /// Express-Keys / Pad
    Pad,
    /// Radierer-Ende des Stifts
    Eraser,
    /// Touch-Oberfläche
    Touch,
}

impl DeviceType {
    /// Bezeichnung wie sie xsetwacom ausgibt.
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceType::Stylus => "STYLUS",
            DeviceType::Pad => "PAD",
            DeviceType::Eraser => "ERASER",
            DeviceType::Touch => "TOUCH",
        }
    }
}

impl FromStr for DeviceType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STYLUS" => Ok(DeviceType::Stylus),
            "PAD" => Ok(DeviceType::Pad),
            "ERASER" => Ok(DeviceType::Eraser),
            "TOUCH" => Ok(DeviceType::Touch),
            _ => Err(ParseError::UnknownDeviceType(s.trim().to_string())),
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ein von xsetwacom gemeldetes Gerät.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub name: String,
    pub id: u32,
    pub device_type: DeviceType,
}

/// Parst die Ausgabe von `xsetwacom --list devices`.
///
/// Zeilen mit unbekanntem Gerätetyp werden mit einer Warnung übersprungen.
pub fn parse_device_list(output: &str) -> Vec<Device> {
    output
        .lines()
        .filter_map(|line| {
            let caps = DEVICE_LINE.captures(line)?;
            let id = caps[2].parse().ok()?;
            match caps[3].parse::<DeviceType>() {
                Ok(device_type) => Some(Device {
                    name: caps[1].trim().to_string(),
                    id,
                    device_type,
                }),
                Err(e) => {
                    log::warn!("Gerät {} übersprungen: {}", id, e);
                    None
                }
            }
        })
        .collect()
}

/// Behält nur Geräte, mit denen gezeichnet wird (Stylus).
pub fn drawing_devices(devices: Vec<Device>) -> Vec<Device> {
    devices
        .into_iter()
        .filter(|device| device.device_type == DeviceType::Stylus)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTUOS: &str = "Wacom Intuos S Pen stylus       \tid: 12\ttype: STYLUS    \n\
                          Wacom Intuos S Pad pad          \tid: 13\ttype: PAD       \n\
                          Wacom Intuos S Pen eraser       \tid: 18\ttype: ERASER    \n";

    #[test]
    fn test_parse_device_list() {
        let devices = parse_device_list(INTUOS);

        assert_eq!(devices.len(), 3);
        assert_eq!(devices[0].name, "Wacom Intuos S Pen stylus");
        assert_eq!(devices[0].id, 12);
        assert_eq!(devices[0].device_type, DeviceType::Stylus);
        assert_eq!(devices[1].device_type, DeviceType::Pad);
        assert_eq!(devices[2].id, 18);
    }

    #[test]
    fn test_drawing_devices_keeps_only_stylus() {
        let devices = drawing_devices(parse_device_list(INTUOS));
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].id, 12);
    }

    #[test]
    fn test_unknown_device_type_is_reported() {
        let err = "CURSOR".parse::<DeviceType>().unwrap_err();
        assert_eq!(err, ParseError::UnknownDeviceType("CURSOR".to_string()));
        assert!(err.to_string().contains("unrecognized device type"));
    }

    #[test]
    fn test_unknown_device_line_is_skipped() {
        let devices = parse_device_list("Some Mouse  id: 7  type: CURSOR\n");
        assert!(devices.is_empty());
    }

    #[test]
    fn test_device_type_roundtrip_and_case() {
        for ty in [
            DeviceType::Stylus,
            DeviceType::Pad,
            DeviceType::Eraser,
            DeviceType::Touch,
        ] {
            assert_eq!(ty.as_str().parse::<DeviceType>(), Ok(ty));
        }
        assert_eq!("touch".parse::<DeviceType>(), Ok(DeviceType::Touch));
    }
}
