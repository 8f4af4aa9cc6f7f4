use anyhow::{anyhow, bail, Result};
use std::cell::RefCell;
use std::rc::Rc;
use wacacom::{
    BezierCurve, DeviceAreaProvider, DeviceInfo, DeviceProvider, DisplayInfo, DisplayProvider,
    PressureCurveProvider, Region,
};

/// Schreibende Aufrufe, die der Fake protokolliert.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ResetArea(u32),
    SetArea(u32, Region),
    SetPressureCurve(u32, [i32; 4]),
    MapToOutput(u32, String),
}

/// In-Memory-Tablet mit festen Geräten.
pub struct FakeBackend {
    pub displays: Vec<DisplayInfo>,
    pub devices: Vec<DeviceInfo>,
    pub entire: Region,
    pub area: Region,
    pub curve: [i32; 4],
    pub fail_set_area: bool,
    pub calls: Rc<RefCell<Vec<Call>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            displays: vec![
                DisplayInfo {
                    name: "HDMI-1".to_string(),
                    primary: false,
                    width: 1280,
                    height: 1024,
                },
                DisplayInfo {
                    name: "DP-1".to_string(),
                    primary: true,
                    width: 1920,
                    height: 1080,
                },
            ],
            devices: vec![
                DeviceInfo {
                    id: 12,
                    name: "Wacom Intuos S Pen stylus".to_string(),
                },
                DeviceInfo {
                    id: 17,
                    name: "Wacom Cintiq Pen stylus".to_string(),
                },
            ],
            entire: Region::new(0, 0, 15200, 9500),
            area: Region::new(0, 0, 15200, 9500),
            curve: [0, 0, 100, 100],
            fail_set_area: false,
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn check_device(&self, device_id: u32) -> Result<()> {
        if self.devices.iter().any(|d| d.id == device_id) {
            Ok(())
        } else {
            Err(anyhow!("Unbekanntes Gerät {}", device_id))
        }
    }
}

impl DisplayProvider for FakeBackend {
    fn list_displays(&self) -> Result<Vec<DisplayInfo>> {
        Ok(self.displays.clone())
    }
}

impl DeviceProvider for FakeBackend {
    fn list_drawing_devices(&self) -> Result<Vec<DeviceInfo>> {
        Ok(self.devices.clone())
    }
}

impl DeviceAreaProvider for FakeBackend {
    fn current_area(&self, device_id: u32) -> Result<Region> {
        self.check_device(device_id)?;
        Ok(self.area)
    }

    fn entire_area(&self, device_id: u32) -> Result<Region> {
        self.check_device(device_id)?;
        Ok(self.entire)
    }

    fn reset_area(&self, device_id: u32) -> Result<()> {
        self.check_device(device_id)?;
        self.calls.borrow_mut().push(Call::ResetArea(device_id));
        Ok(())
    }

    fn set_area(&self, device_id: u32, region: &Region) -> Result<()> {
        self.check_device(device_id)?;
        if self.fail_set_area {
            bail!("xsetwacom --set {} Area fehlgeschlagen", device_id);
        }
        self.calls.borrow_mut().push(Call::SetArea(device_id, *region));
        Ok(())
    }

    fn map_to_output(&self, device_id: u32, display_name: &str) -> Result<()> {
        self.check_device(device_id)?;
        self.calls
            .borrow_mut()
            .push(Call::MapToOutput(device_id, display_name.to_string()));
        Ok(())
    }
}

impl PressureCurveProvider for FakeBackend {
    fn pressure_curve(&self, device_id: u32) -> Result<BezierCurve> {
        self.check_device(device_id)?;
        Ok(BezierCurve::from_percent(self.curve))
    }

    fn set_pressure_curve(&self, device_id: u32, curve: &BezierCurve) -> Result<()> {
        self.check_device(device_id)?;
        self.calls
            .borrow_mut()
            .push(Call::SetPressureCurve(device_id, curve.to_percent()));
        Ok(())
    }
}
