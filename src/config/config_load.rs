// src/config/config_load.rs
//
// loading of config.toml

use log::{info, warn};
use nannou::color::{rgb8, Rgb8};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::config_types::{AnimationConfig, StyleConfig, WindowConfig, MAX_STEP_GAP};
use crate::error::{ConfigError, Result};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub animation: AnimationConfig,
}

impl Config {
    /// Loads and validates the config, falling back to the built-in
    /// defaults when no config file can be found.
    pub fn load() -> Result<Self> {
        let config = match Self::locate() {
            Some(path) => {
                info!("Loading config from {}", path.display());
                Self::load_from(&path)?
            }
            None => {
                warn!("No {} found, using default settings", CONFIG_FILE);
                Self::default()
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    // First look next to the executable, then in the working directory
    fn locate() -> Option<PathBuf> {
        let exe_config = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join(CONFIG_FILE)))
            .filter(|p| p.exists());

        exe_config.or_else(|| {
            let cwd_config = PathBuf::from(CONFIG_FILE);
            cwd_config.exists().then_some(cwd_config)
        })
    }

    /// Rejects settings the animation cannot run with.
    pub fn validate(&self) -> Result<()> {
        let anim = &self.animation;
        if anim.nodes == 0 {
            return Err(ConfigError::InvalidNodeCount(anim.nodes));
        }
        if anim.lines == 0 {
            return Err(ConfigError::InvalidLineCount(anim.lines));
        }
        // scale_factor must stay in {0, 1} across the whole 0..1 sweep
        if !(anim.sc_div > 0.5 && anim.sc_div < 1.0) {
            return Err(ConfigError::InvalidScaleDivision(anim.sc_div));
        }
        if !(anim.step_gap > 0.0 && anim.step_gap <= MAX_STEP_GAP) {
            return Err(ConfigError::InvalidStepGap {
                value: anim.step_gap,
                max: MAX_STEP_GAP,
            });
        }
        if anim.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidTickInterval);
        }

        let style = &self.style;
        for (name, value) in [
            ("stroke_factor", style.stroke_factor),
            ("size_factor", style.size_factor),
            ("ball_factor", style.ball_factor),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidFactor { name, value });
            }
        }
        parse_hex_color(&style.back_color)?;
        parse_hex_color(&style.fore_color)?;
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.animation.tick_interval_ms)
    }
}

/// Parses a `#rrggbb` color string.
pub fn parse_hex_color(hex: &str) -> Result<Rgb8> {
    let invalid = || ConfigError::InvalidColor(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(rgb8(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.animation.nodes, 5);
        assert_eq!(config.animation.lines, 3);
        assert_eq!(config.tick_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::from_toml("[animation]\nnodes = 7\n").unwrap();
        assert_eq!(config.animation.nodes, 7);
        assert_eq!(config.animation.lines, 3);
        assert_eq!(config.style.back_color, "#212121");
        assert_eq!(config.window.title, "triball");
    }

    #[test]
    fn test_rejects_bad_toml() {
        let result = Config::from_toml("[animation]\nnodes = \"five\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_rejects_empty_chain() {
        let mut config = Config::default();
        config.animation.nodes = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidNodeCount(0))
        ));

        let mut config = Config::default();
        config.animation.lines = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLineCount(0))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_scales() {
        let mut config = Config::default();
        config.animation.sc_div = 1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidScaleDivision(_))
        ));
        config.animation.sc_div = 0.4;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.animation.step_gap = 0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidStepGap { .. })
        ));

        config.animation.step_gap = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.animation.tick_interval_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTickInterval)
        ));
    }

    #[test]
    fn test_rejects_bad_factors() {
        let mut config = Config::default();
        config.style.size_factor = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFactor {
                name: "size_factor",
                ..
            })
        ));

        let mut config = Config::default();
        config.style.stroke_factor = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_hex_color() {
        let color = parse_hex_color("#f44336").unwrap();
        assert_eq!((color.red, color.green, color.blue), (0xf4, 0x43, 0x36));

        assert!(parse_hex_color("f44336").is_err());
        assert!(parse_hex_color("#f4433").is_err());
        assert!(parse_hex_color("#g44336").is_err());
        assert!(parse_hex_color("#f443361").is_err());
    }

    #[test]
    fn test_rejects_bad_color() {
        let mut config = Config::default();
        config.style.fore_color = String::from("red");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidColor(_))
        ));
    }
}
