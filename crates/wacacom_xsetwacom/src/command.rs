//! Ausführen externer Kommandos.

use anyhow::{bail, Context, Result};
use std::process::Command;

/// Startet `program` mit `args` und liefert stdout als String.
///
/// Ein Exit-Status ungleich 0 wird als Fehler inklusive stderr gemeldet.
pub(crate) fn run(program: &str, args: &[String]) -> Result<String> {
    let command_line = format!("{} {}", program, args.join(" "));
    log::debug!("Starte: {}", command_line);

    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("'{}' konnte nicht gestartet werden", command_line))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "'{}' fehlgeschlagen ({}): {}",
            command_line,
            output.status,
            stderr.trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
