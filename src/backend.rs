//! Produktives Tablet-Backend über `xrandr` und `xsetwacom`.

use crate::core::{
    BezierCurve, DeviceAreaProvider, DeviceInfo, DeviceProvider, DisplayInfo, DisplayProvider,
    PressureCurveProvider, Region,
};
use crate::shared::AppOptions;
use anyhow::Result;
use wacacom_xsetwacom::{drawing_devices, Area, Xrandr, Xsetwacom};

/// Backend, das die Kommandozeilen-Tools aufruft.
#[derive(Debug, Clone, Default)]
pub struct CliBackend {
    xrandr: Xrandr,
    xsetwacom: Xsetwacom,
}

impl CliBackend {
    /// Erstellt ein Backend mit den Programmnamen aus den Optionen.
    pub fn from_options(options: &AppOptions) -> Self {
        Self {
            xrandr: Xrandr::new(options.xrandr_binary.clone()),
            xsetwacom: Xsetwacom::new(options.xsetwacom_binary.clone()),
        }
    }
}

fn region_from_area(area: Area) -> Region {
    Region::new(area.offset_x, area.offset_y, area.width, area.height)
}

fn area_from_region(region: &Region) -> Area {
    Area {
        offset_x: region.offset_x,
        offset_y: region.offset_y,
        width: region.width,
        height: region.height,
    }
}

impl DisplayProvider for CliBackend {
    fn list_displays(&self) -> Result<Vec<DisplayInfo>> {
        let displays = self.xrandr.list_active_displays()?;
        Ok(displays
            .into_iter()
            .map(|d| DisplayInfo {
                name: d.name,
                primary: d.primary,
                width: d.width,
                height: d.height,
            })
            .collect())
    }
}

impl DeviceProvider for CliBackend {
    fn list_drawing_devices(&self) -> Result<Vec<DeviceInfo>> {
        let devices = drawing_devices(self.xsetwacom.list_devices()?);
        Ok(devices
            .into_iter()
            .map(|d| DeviceInfo {
                id: d.id,
                name: d.name,
            })
            .collect())
    }
}

impl DeviceAreaProvider for CliBackend {
    fn current_area(&self, device_id: u32) -> Result<Region> {
        Ok(region_from_area(self.xsetwacom.area(device_id)?))
    }

    fn entire_area(&self, device_id: u32) -> Result<Region> {
        Ok(region_from_area(self.xsetwacom.entire_area(device_id)?))
    }

    fn reset_area(&self, device_id: u32) -> Result<()> {
        self.xsetwacom.reset_area(device_id)
    }

    fn set_area(&self, device_id: u32, region: &Region) -> Result<()> {
        self.xsetwacom.set_area(device_id, &area_from_region(region))
    }

    fn map_to_output(&self, device_id: u32, display_name: &str) -> Result<()> {
        self.xsetwacom.map_to_output(device_id, display_name)
    }
}

impl PressureCurveProvider for CliBackend {
    fn pressure_curve(&self, device_id: u32) -> Result<BezierCurve> {
        Ok(BezierCurve::from_percent(
            self.xsetwacom.pressure_curve(device_id)?,
        ))
    }

    fn set_pressure_curve(&self, device_id: u32, curve: &BezierCurve) -> Result<()> {
        self.xsetwacom
            .set_pressure_curve(device_id, curve.to_percent())
    }
}
