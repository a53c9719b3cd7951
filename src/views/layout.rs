// src/views/layout.rs
//
// Stage geometry, computed once from the window size at startup.

use nannou::prelude::*;

use crate::config::StyleConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct StageLayout {
    pub width: f32,
    pub height: f32,
    pub gap: f32,           // vertical distance between pins
    pub size: f32,          // full pin length
    pub ball_radius: f32,   // full ball radius
    pub stroke_weight: f32, // line thickness
}

impl StageLayout {
    pub fn new(width: f32, height: f32, nodes: usize, style: &StyleConfig) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let gap = height / (nodes + 1) as f32;
        let size = gap / style.size_factor;
        Self {
            width,
            height,
            gap,
            size,
            ball_radius: size / style.ball_factor,
            stroke_weight: width.min(height) / style.stroke_factor,
        }
    }

    /// Canvas position of the `i`-th pin, stacked down the middle.
    pub fn node_origin(&self, i: usize) -> Point2 {
        pt2(self.width / 2.0, self.gap * (i + 1) as f32)
    }
}
