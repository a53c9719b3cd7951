// src/draw/pin_draw.rs
// nannou implementation of the drawing surface.

use nannou::color::Rgb8;
use nannou::prelude::*;

use super::{DrawParams, DrawingSurface};

pub struct NannouSurface<'a> {
    draw: &'a Draw,
    bounds: Rect,
    params: DrawParams,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, bounds: Rect, params: DrawParams) -> Self {
        Self {
            draw,
            bounds,
            params,
        }
    }

    /// Canvas point (top-left origin, y down) to nannou space (centered, y up)
    pub fn to_world(&self, point: Point2) -> Point2 {
        canvas_to_world(point, &self.bounds)
    }
}

impl DrawingSurface for NannouSurface<'_> {
    fn clear(&mut self, color: Rgb8) {
        self.draw.background().color(color);
    }

    fn draw_pin(&mut self, origin: Point2, rotation: f32, length: f32, ball_radius: f32) {
        if length <= 0.0 {
            return;
        }
        let tip = pin_tip(origin, rotation, length);
        let start = self.to_world(origin);
        let end = self.to_world(tip);

        self.draw
            .line()
            .start(start)
            .end(end)
            .weight(self.params.stroke_weight)
            .caps_round()
            .color(self.params.color);

        if ball_radius > 0.0 {
            self.draw
                .ellipse()
                .xy(end)
                .radius(ball_radius)
                .color(self.params.color);
        }
    }
}

/// Far end of a pin in canvas coordinates.
pub fn pin_tip(origin: Point2, rotation: f32, length: f32) -> Point2 {
    pt2(
        origin.x + length * rotation.sin(),
        origin.y - length * rotation.cos(),
    )
}

pub fn canvas_to_world(point: Point2, bounds: &Rect) -> Point2 {
    pt2(bounds.left() + point.x, bounds.top() - point.y)
}
