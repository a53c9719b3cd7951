// Test double that records every draw call.

use nannou::color::Rgb8;
use nannou::prelude::*;

use super::DrawingSurface;

#[derive(Debug, Clone, PartialEq)]
pub struct PinCall {
    pub origin: Point2,
    pub rotation: f32,
    pub length: f32,
    pub ball_radius: f32,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub clears: Vec<Rgb8>,
    pub pins: Vec<PinCall>,
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self, color: Rgb8) {
        self.clears.push(color);
    }

    fn draw_pin(&mut self, origin: Point2, rotation: f32, length: f32, ball_radius: f32) {
        self.pins.push(PinCall {
            origin,
            rotation,
            length,
            ball_radius,
        });
    }
}
