// src/draw/mod.rs
// The pin drawing module.
// The animation code only talks to a DrawingSurface, so the core can be
// driven against nannou in the app and against a recorder in tests.

pub mod pin_draw;
pub use pin_draw::NannouSurface;

#[cfg(test)]
pub(crate) mod recording;

use nannou::color::{rgb8, Rgb8};
use nannou::prelude::*;

/// Canvas the animation renders into.
/// Coordinates are canvas coordinates: origin top-left, y pointing down.
pub trait DrawingSurface {
    /// Fill the whole visible area.
    fn clear(&mut self, color: Rgb8);

    /// Draw one line-plus-ball pin starting at `origin`.
    /// `rotation` is in radians, 0 points the pin straight up.
    fn draw_pin(&mut self, origin: Point2, rotation: f32, length: f32, ball_radius: f32);
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawParams {
    pub color: Rgb8,
    pub stroke_weight: f32,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            color: rgb8(0xf4, 0x43, 0x36),
            stroke_weight: 5.0,
        }
    }
}
