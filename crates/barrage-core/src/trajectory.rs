//! The coefficient-driven trajectory model.
//!
//! A trajectory maps a horizontal offset from the launch point to a
//! vertical offset, selectable among four analytic forms. It is a plain
//! value type: a unit mutates its own copy while aiming, and every shot
//! carries an independent clone taken at fire time, so later retuning
//! never bends a projectile already in flight.

use serde::{Deserialize, Serialize};

use crate::enums::TrajectoryMode;
use crate::types::Point;

/// Firing configuration: three coefficients, a signed per-tick speed,
/// and the selected analytic form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// Horizontal advance per tick. Signed, never zero; the sign also
    /// selects the preview sweep direction.
    pub speed: i32,
    pub mode: TrajectoryMode,
}

impl Default for Trajectory {
    fn default() -> Self {
        Self {
            a: 0.0,
            b: 0.0,
            c: 0.0,
            speed: 1,
            mode: TrajectoryMode::default(),
        }
    }
}

impl Trajectory {
    /// Vertical offset for a horizontal offset `x`.
    ///
    /// The logarithmic form falls back to returning `x` unchanged when
    /// the logarithm is undefined (non-positive base or argument, or
    /// base exactly 1). No input makes this function panic or return
    /// a non-finite value from that fallback path.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self.mode {
            TrajectoryMode::Linear => self.a * x + self.b,
            TrajectoryMode::Quadratic => self.a * x * x + self.b * x + self.c,
            TrajectoryMode::Logarithmic => {
                if x <= 0.0 || self.b <= 0.0 || self.b == 1.0 {
                    x
                } else {
                    self.a * x.ln() / self.b.ln()
                }
            }
            TrajectoryMode::Sinusoidal => self.a * (self.b * x).sin(),
        }
    }

    /// Cycle to the next firing mode.
    pub fn next_mode(&mut self) {
        self.mode = self.mode.next();
    }

    /// Field-space preview of the path a shot would take from `origin`.
    ///
    /// The sweep always points the way the projectile will actually
    /// travel: offsets `0..(field_width - origin.x)` for positive speed,
    /// `-origin.x..0` for negative speed.
    pub fn preview_path(&self, origin: Point, field_width: f64) -> Vec<Point> {
        let (lo, hi) = if self.speed > 0 {
            (0, (field_width - origin.x) as i64)
        } else {
            (-(origin.x as i64), 0)
        };

        (lo..hi)
            .map(|off| {
                let x = off as f64;
                Point::new(origin.x + x, origin.y + self.evaluate(x))
            })
            .collect()
    }
}

impl std::fmt::Display for Trajectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mode.label())
    }
}
