// src/config/config_types.rs
//
// Config types for the app. Defaults mirror the stock triball constants.

use serde::Deserialize;

/// Largest per-tick step accepted for `step_gap`.
/// Settling is detected by overshooting a whole unit, so a node must take
/// several ticks per sweep for the pin to move smoothly.
pub const MAX_STEP_GAP: f32 = 0.25;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 900,
            title: String::from("triball"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub back_color: String,
    pub fore_color: String,
    pub stroke_factor: f32, // min(w, h) / stroke_factor = line thickness
    pub size_factor: f32,   // node gap / size_factor = pin length
    pub ball_factor: f32,   // pin length / ball_factor = ball radius
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            back_color: String::from("#212121"),
            fore_color: String::from("#f44336"),
            stroke_factor: 90.0,
            size_factor: 2.9,
            ball_factor: 4.0,
        }
    }
}

/************************* Animation Config ********************/
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub nodes: usize,          // Number of pins in the chain
    pub lines: usize,          // Rotating lines per pin
    pub step_gap: f32,         // Base scale increment per tick
    pub sc_div: f32,           // Where the sweep switches to the slow rate
    pub tick_interval_ms: u64, // Time between ticks
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            nodes: 5,
            lines: 3,
            step_gap: 0.05,
            sc_div: 0.51,
            tick_interval_ms: 50,
        }
    }
}
