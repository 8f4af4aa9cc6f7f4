//! Zahlenwerte aus `xsetwacom --get`: Area und PressureCurve.

use crate::error::ParseError;

/// Aktiver Bereich eines Tablets in Geräte-Einheiten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    pub offset_x: i32,
    pub offset_y: i32,
    pub width: i32,
    pub height: i32,
}

/// Liest genau `N` ganze Zahlen aus einer Zeile.
fn parse_values<const N: usize>(line: &str) -> Result<[i32; N], ParseError> {
    let malformed = || ParseError::MalformedValues {
        expected: N,
        line: line.trim().to_string(),
    };

    let mut values = [0; N];
    let mut tokens = line.split_whitespace();
    for value in values.iter_mut() {
        *value = tokens
            .next()
            .and_then(|token| token.parse().ok())
            .ok_or_else(malformed)?;
    }
    if tokens.next().is_some() {
        return Err(malformed());
    }
    Ok(values)
}

/// Parst `"offset_x offset_y width height"`.
pub fn parse_area(line: &str) -> Result<Area, ParseError> {
    let [offset_x, offset_y, width, height] = parse_values::<4>(line)?;
    Ok(Area {
        offset_x,
        offset_y,
        width,
        height,
    })
}

/// Parst die vier Prozentwerte `"p1x p1y p2x p2y"` (0–100) der Druckkurve.
pub fn parse_pressure_curve(line: &str) -> Result<[i32; 4], ParseError> {
    parse_values::<4>(line)
}
