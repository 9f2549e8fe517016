//! Zoom stepping for the chart surface
//!
//! Scale lives on a fixed grid from 0.6 to 2.0 in steps of 0.2. It is kept
//! as an integer step index so repeated zooming never drifts.

use serde::Serialize;

pub const MIN_SCALE: f32 = 0.6;
pub const MAX_SCALE: f32 = 2.0;
pub const SCALE_STEP: f32 = 0.2;

/// Steps per unit of scale (1 / SCALE_STEP)
const STEPS_PER_UNIT: i32 = 5;
const MIN_STEP: i32 = 3;
const MAX_STEP: i32 = 10;
/// Tolerance for float noise at the range bounds
const BOUND_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zoom {
    step: i32,
}

impl Default for Zoom {
    fn default() -> Self {
        Self { step: STEPS_PER_UNIT }
    }
}

impl Zoom {
    pub const MIN: Zoom = Zoom { step: MIN_STEP };
    pub const MAX: Zoom = Zoom { step: MAX_STEP };

    /// Snap a requested scale onto the grid; `None` when it is outside
    /// [`MIN_SCALE`, `MAX_SCALE`] or not a number.
    pub fn nearest(scale: f32) -> Option<Self> {
        if !scale.is_finite()
            || scale < MIN_SCALE - BOUND_EPSILON
            || scale > MAX_SCALE + BOUND_EPSILON
        {
            return None;
        }
        let step = (scale * STEPS_PER_UNIT as f32).round() as i32;
        Some(Self {
            step: step.clamp(MIN_STEP, MAX_STEP),
        })
    }

    pub fn scale(self) -> f32 {
        self.step as f32 / STEPS_PER_UNIT as f32
    }

    pub fn zoom_in(self) -> Self {
        Self {
            step: (self.step + 1).min(MAX_STEP),
        }
    }

    pub fn zoom_out(self) -> Self {
        Self {
            step: (self.step - 1).max(MIN_STEP),
        }
    }

    pub fn can_zoom_in(self) -> bool {
        self.step < MAX_STEP
    }

    pub fn can_zoom_out(self) -> bool {
        self.step > MIN_STEP
    }
}

impl Serialize for Zoom {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Divide in f64 so 1.2 serializes as 1.2, not its f32 widening
        serializer.serialize_f64(f64::from(self.step) / f64::from(STEPS_PER_UNIT))
    }
}
