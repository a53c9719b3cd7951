// src/lib.rs
//
// triball: a vertical chain of pins that grow and fan out one at a time,
// sweeping down the chain and back up again with each tap.

pub mod animation;
pub mod config;
pub mod controllers;
pub mod draw;
pub mod error;
pub mod views;

pub use error::{ConfigError, Result};
