//! Aktive Monitore über `xrandr --listactivemonitors`.

use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

/// `" 0: +*eDP-1 1920/344x1080/193+0+0  eDP-1"` → id, Primary-Stern, Name, Breite, Höhe
static MONITOR_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+):\s*\+(\*?)([A-Za-z0-9\-]+)\s(\d+)/\d+x(\d+)")
        .expect("Monitor-Pattern ist gültig")
});

/// Ein aktiver Monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    /// Index laut xrandr
    pub id: u32,
    /// Primärer Monitor (`*` in der Ausgabe)
    pub primary: bool,
    /// Auflösung in Pixeln
    pub width: i32,
    pub height: i32,
    /// Ausgangsname, z.B. `HDMI-1`
    pub name: String,
}

/// Parst die Ausgabe von `xrandr --listactivemonitors`.
///
/// Zeilen ohne Monitor-Eintrag (z.B. die Kopfzeile `Monitors: 2`) werden übersprungen.
pub fn parse_active_monitors(output: &str) -> Vec<Display> {
    output
        .lines()
        .filter_map(|line| {
            let caps = MONITOR_LINE.captures(line)?;
            Some(Display {
                id: caps[1].parse().ok()?,
                primary: !caps[2].is_empty(),
                name: caps[3].to_string(),
                width: caps[4].parse().ok()?,
                height: caps[5].parse().ok()?,
            })
        })
        .collect()
}

/// Gibt den primären Monitor zurück, falls einer markiert ist.
pub fn primary_display(displays: &[Display]) -> Option<&Display> {
    displays.iter().find(|display| display.primary)
}

/// Zugriff auf `xrandr`.
#[derive(Debug, Clone)]
pub struct Xrandr {
    program: String,
}

impl Default for Xrandr {
    fn default() -> Self {
        Self::new("xrandr")
    }
}

impl Xrandr {
    /// Erstellt einen Runner für das angegebene Programm.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Listet alle aktiven Monitore.
    pub fn list_active_displays(&self) -> Result<Vec<Display>> {
        let output = crate::command::run(&self.program, &["--listactivemonitors".to_string()])?;
        let displays = parse_active_monitors(&output);
        log::info!("{} aktive Monitore gefunden", displays.len());
        Ok(displays)
    }
}
