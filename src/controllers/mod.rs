pub mod animation_controller;

pub use animation_controller::{AnimationController, Repaint};
