#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = wacacom_xsetwacom::parse_device_list(text);
        let _ = wacacom_xsetwacom::parse_area(text);
        let _ = wacacom_xsetwacom::parse_pressure_curve(text);
    }
});
