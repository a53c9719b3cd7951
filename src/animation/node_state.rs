// src/animation/node_state.rs
//
// Scale state of a single pin.

use super::scale::ScaleStep;

/// Progress of one node's sweep between its two resting scales (0 and 1).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeState {
    scale: f32,
    dir: f32,
    prev_scale: f32, // resting value the current sweep started from
}

impl NodeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn dir(&self) -> f32 {
        self.dir
    }

    pub fn committed_scale(&self) -> f32 {
        self.prev_scale
    }

    pub fn is_idle(&self) -> bool {
        self.dir == 0.0
    }

    /// Advances the sweep by one tick. Returns true when the sweep settles.
    ///
    /// A sweep settles on the tick where the scale overshoots its resting
    /// value by more than a whole unit; the scale is then snapped onto the
    /// opposite resting value and the node goes idle.
    pub fn update(&mut self, step: &ScaleStep, lines: usize) -> bool {
        self.scale += step.update_value(self.scale, self.dir, 1.0, lines as f32);
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.dir;
            self.dir = 0.0;
            self.prev_scale = self.scale;
            return true;
        }
        false
    }

    /// Arms an idle node to sweep away from its resting value.
    /// Returns false, leaving the state untouched, if already sweeping.
    pub fn start_updating(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.dir = 1.0 - 2.0 * self.prev_scale;
        true
    }
}
