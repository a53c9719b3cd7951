//! Error types for triball

use thiserror::Error;

/// Errors raised while loading or validating the runtime configuration.
///
/// The animation core itself has no failure paths; everything that can go
/// wrong is caught here before the first frame.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for our schema
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("node count must be at least 1, got {0}")]
    InvalidNodeCount(usize),

    #[error("line count must be at least 1, got {0}")]
    InvalidLineCount(usize),

    #[error("sc_div must lie strictly between 0.5 and 1, got {0}")]
    InvalidScaleDivision(f32),

    #[error("step_gap must lie in (0, {max}], got {value}")]
    InvalidStepGap { value: f32, max: f32 },

    #[error("tick_interval_ms must be greater than 0")]
    InvalidTickInterval,

    /// A layout divisor that must be a positive finite number
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidFactor { name: &'static str, value: f32 },

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

/// Result type for triball configuration
pub type Result<T> = std::result::Result<T, ConfigError>;
