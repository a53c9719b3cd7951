pub mod config_load;
pub mod config_types;

pub use config_load::{parse_hex_color, Config};
pub use config_types::{AnimationConfig, StyleConfig, WindowConfig, MAX_STEP_GAP};
