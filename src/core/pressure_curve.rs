//! Druckkurve als kubische Bézier-Kurve mit festen Endpunkten (0,0) und (1,1).
//!
//! Eingangsdruck (X) → Ausgangsdruck (Y), beide als Anteil in `[0,1]`.
//! Nur die zwei Steuerpunkte sind frei; sie werden bei jeder Änderung auf `[0,1]²` begrenzt.
//! Eine Monotonie-Prüfung findet nicht statt.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Anzahl Segmente der Polylinie beim Zeichnen.
pub const DEFAULT_SMOOTHNESS: usize = 64;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Kurvenpunkt → Position im Zeichenrahmen (Y gespiegelt, Y=1 oben).
pub fn to_display(point: Vec2, frame_min: Vec2, frame_size: Vec2) -> Vec2 {
    Vec2::new(point.x, 1.0 - point.y) * frame_size + frame_min
}

/// Einer der beiden freien Steuerpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPoint {
    /// P1, nahe dem Startpunkt (0,0)
    First,
    /// P2, nahe dem Endpunkt (1,1)
    Second,
}

impl ControlPoint {
    /// Beide Steuerpunkte in Index-Reihenfolge.
    pub const ALL: [ControlPoint; 2] = [ControlPoint::First, ControlPoint::Second];

    /// Steuerpunkt aus seiner Nummer (1 oder 2).
    ///
    /// # Panics
    /// Bei jeder anderen Nummer.
    pub fn from_number(number: u8) -> Self {
        match number {
            1 => ControlPoint::First,
            2 => ControlPoint::Second,
            other => panic!("Steuerpunkt {} existiert nicht (erlaubt: 1, 2)", other),
        }
    }
}

/// Zwei freie Steuerpunkte einer Druckkurve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierCurve {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl Default for BezierCurve {
    fn default() -> Self {
        Self::linear()
    }
}

impl BezierCurve {
    /// Erstellt eine Kurve; beide Punkte werden auf `[0,1]²` begrenzt.
    pub fn new(p1: Vec2, p2: Vec2) -> Self {
        Self {
            p1: p1.clamp(Vec2::ZERO, Vec2::ONE),
            p2: p2.clamp(Vec2::ZERO, Vec2::ONE),
        }
    }

    /// Lineare Standardkurve von xsetwacom (`0 0 100 100`).
    pub fn linear() -> Self {
        Self::new(Vec2::ZERO, Vec2::ONE)
    }

    /// Aus `[p1x, p1y, p2x, p2y]`.
    pub fn from_points(points: [f32; 4]) -> Self {
        Self::new(
            Vec2::new(points[0], points[1]),
            Vec2::new(points[2], points[3]),
        )
    }

    /// Als `[p1x, p1y, p2x, p2y]`.
    pub fn to_points(&self) -> [f32; 4] {
        [self.p1.x, self.p1.y, self.p2.x, self.p2.y]
    }

    /// Aus den Prozentwerten (0–100) von xsetwacom.
    pub fn from_percent(percent: [i32; 4]) -> Self {
        Self::from_points(percent.map(|v| v as f32 / 100.0))
    }

    /// Als Prozentwerte (0–100), auf ganze Zahlen gerundet.
    pub fn to_percent(&self) -> [i32; 4] {
        self.to_points().map(|v| (v * 100.0).round() as i32)
    }

    /// Position eines Steuerpunkts.
    pub fn control_point(&self, which: ControlPoint) -> Vec2 {
        match which {
            ControlPoint::First => self.p1,
            ControlPoint::Second => self.p2,
        }
    }

    fn control_point_mut(&mut self, which: ControlPoint) -> &mut Vec2 {
        match which {
            ControlPoint::First => &mut self.p1,
            ControlPoint::Second => &mut self.p2,
        }
    }

    /// Kurvenpunkt für `t ∈ [0,1]`.
    pub fn evaluate(&self, t: f32) -> Vec2 {
        cubic_bezier(Vec2::ZERO, self.p1, self.p2, Vec2::ONE, t)
    }

    /// `steps + 1` gleichmäßig in `t` verteilte Kurvenpunkte.
    ///
    /// Der Iterator rechnet bei jedem Durchlauf neu und lässt sich per `clone()` neu starten.
    pub fn sample(&self, steps: usize) -> CurveSamples {
        assert!(steps > 0, "Mindestens ein Segment erforderlich");
        CurveSamples {
            curve: *self,
            steps,
            next: 0,
        }
    }

    /// Verschiebt einen Steuerpunkt um ein normalisiertes Pointer-Delta.
    ///
    /// X folgt dem Pointer, Y wird abgezogen (Pointer-Y wächst nach unten).
    /// Gibt `true` zurück, sobald sich der Pointer bewegt hat, auch wenn die
    /// Begrenzung die Bewegung aufhebt.
    pub fn drag_control_point(&mut self, which: ControlPoint, delta: Vec2) -> bool {
        let point = self.control_point_mut(which);
        point.x = (point.x + delta.x).clamp(0.0, 1.0);
        point.y = (point.y - delta.y).clamp(0.0, 1.0);
        delta != Vec2::ZERO
    }
}

/// Endlicher Iterator über die Stützpunkte einer [`BezierCurve`].
#[derive(Debug, Clone)]
pub struct CurveSamples {
    curve: BezierCurve,
    steps: usize,
    next: usize,
}

impl Iterator for CurveSamples {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.next > self.steps {
            return None;
        }
        let step = self.next;
        self.next += 1;

        // Endpunkte exakt treffen, unabhängig von Rundungsfehlern in t
        let point = if step == 0 {
            Vec2::ZERO
        } else if step == self.steps {
            Vec2::ONE
        } else {
            self.curve.evaluate(step as f32 / self.steps as f32)
        };
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurveSamples {}

/// Vom Aufrufer gehaltener Zustand des Kurven-Editors.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveState {
    /// Aktuelle Kurve
    pub curve: BezierCurve,
    /// Segmente der gezeichneten Polylinie
    pub smoothness: usize,
}

impl Default for CurveState {
    fn default() -> Self {
        Self::new(BezierCurve::linear(), DEFAULT_SMOOTHNESS)
    }
}

impl CurveState {
    /// Erstellt einen neuen Zustand
    pub fn new(curve: BezierCurve, smoothness: usize) -> Self {
        Self {
            curve,
            smoothness: smoothness.max(1),
        }
    }

    /// Stützpunkte zum Zeichnen.
    pub fn samples(&self) -> CurveSamples {
        self.curve.sample(self.smoothness)
    }

    /// Verschiebt einen Steuerpunkt um ein Pixel-Delta innerhalb eines Rahmens der Größe `frame_size`.
    pub fn drag_pixels(&mut self, which: ControlPoint, pointer_delta: Vec2, frame_size: Vec2) -> bool {
        assert!(
            frame_size.x > 0.0 && frame_size.y > 0.0,
            "Rahmengröße muss positiv sein: {:?}",
            frame_size
        );
        self.curve
            .drag_control_point(which, pointer_delta / frame_size)
    }
}
