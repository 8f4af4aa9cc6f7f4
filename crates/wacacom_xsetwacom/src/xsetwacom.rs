//! Runner für `xsetwacom`-Kommandos.

use crate::area::{parse_area, parse_pressure_curve, Area};
use crate::command;
use crate::device::{parse_device_list, Device};
use anyhow::{Context, Result};

/// Zugriff auf `xsetwacom`.
///
/// Jede Methode startet genau einen Prozess, außer [`Xsetwacom::entire_area`].
#[derive(Debug, Clone)]
pub struct Xsetwacom {
    program: String,
}

impl Default for Xsetwacom {
    fn default() -> Self {
        Self::new("xsetwacom")
    }
}

impl Xsetwacom {
    /// Erstellt einen Runner für das angegebene Programm.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[String]) -> Result<String> {
        command::run(&self.program, args)
    }

    fn get(&self, device_id: u32, property: &str) -> Result<String> {
        self.run(&["--get".into(), device_id.to_string(), property.into()])
    }

    fn set(&self, device_id: u32, property: &str, values: &[String]) -> Result<()> {
        let mut args = vec!["--set".into(), device_id.to_string(), property.into()];
        args.extend_from_slice(values);
        self.run(&args)?;
        Ok(())
    }

    /// Listet alle Geräte, die der Treiber kennt.
    pub fn list_devices(&self) -> Result<Vec<Device>> {
        let output = self.run(&["--list".into(), "devices".into()])?;
        Ok(parse_device_list(&output))
    }

    /// Aktuell aktiver Bereich.
    pub fn area(&self, device_id: u32) -> Result<Area> {
        let output = self.get(device_id, "Area")?;
        parse_area(&output).with_context(|| format!("Area von Gerät {} unlesbar", device_id))
    }

    /// Maximal adressierbarer Bereich.
    ///
    /// xsetwacom kennt dafür kein eigenes Property: der aktuelle Bereich wird
    /// gesichert, zurückgesetzt, ausgelesen und anschließend wiederhergestellt.
    pub fn entire_area(&self, device_id: u32) -> Result<Area> {
        let current = self.area(device_id)?;
        self.reset_area(device_id)?;
        let entire = self.area(device_id);
        self.set_area(device_id, &current)?;
        entire
    }

    /// Setzt den aktiven Bereich.
    pub fn set_area(&self, device_id: u32, area: &Area) -> Result<()> {
        log::info!(
            "Gerät {}: Area {} {} {} {}",
            device_id,
            area.offset_x,
            area.offset_y,
            area.width,
            area.height
        );
        self.set(
            device_id,
            "Area",
            &[
                area.offset_x.to_string(),
                area.offset_y.to_string(),
                area.width.to_string(),
                area.height.to_string(),
            ],
        )
    }

    /// Setzt den aktiven Bereich auf den Maximalbereich zurück.
    pub fn reset_area(&self, device_id: u32) -> Result<()> {
        self.set(device_id, "ResetArea", &[])
    }

    /// Druckkurve als vier Prozentwerte.
    pub fn pressure_curve(&self, device_id: u32) -> Result<[i32; 4]> {
        let output = self.get(device_id, "PressureCurve")?;
        parse_pressure_curve(&output)
            .with_context(|| format!("PressureCurve von Gerät {} unlesbar", device_id))
    }

    /// Setzt die Druckkurve (Prozentwerte 0–100).
    pub fn set_pressure_curve(&self, device_id: u32, percent: [i32; 4]) -> Result<()> {
        log::info!("Gerät {}: PressureCurve {:?}", device_id, percent);
        let values: Vec<String> = percent.iter().map(i32::to_string).collect();
        self.set(device_id, "PressureCurve", &values)
    }

    /// Bildet das Gerät auf einen Ausgang ab (z.B. `HDMI-1`).
    pub fn map_to_output(&self, device_id: u32, output_name: &str) -> Result<()> {
        log::info!("Gerät {}: MapToOutput {}", device_id, output_name);
        self.set(device_id, "MapToOutput", &[output_name.to_string()])
    }
}
