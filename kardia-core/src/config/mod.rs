//! Configuration types
//!
//! Plain data describing the panel and the scene. Firmware builds these
//! from `kardia.toml` at compile time; validation lives here so the build
//! script and the host tests agree on what a usable configuration is.

pub mod types;

pub use types::{
    ConfigError, DisplayHwConfig, HeartConfig, KardiaConfig, SceneConfig, MAX_LABEL_LEN,
    PANEL_HEIGHT, PANEL_WIDTH,
};
