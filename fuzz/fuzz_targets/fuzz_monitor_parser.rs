#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let displays = wacacom_xsetwacom::parse_active_monitors(text);
        let _ = wacacom_xsetwacom::primary_display(&displays);
    }
});
