//! Build script for kardia-display-fw
//!
//! - Passes the linker scripts for cortex-m-rt and defmt
//! - Validates kardia.toml at compile time
//! - Emits the validated configuration as `$OUT_DIR/config.rs`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use kardia_core::config::{ConfigError, KardiaConfig};
use kardia_core::geometry::ShapeError;

fn main() {
    setup_linker();
    let config = load_config();
    emit_config(&config);
}

/// Set up linker scripts (memory.x comes from embassy-stm32's `memory-x`)
fn setup_linker() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read, parse and validate kardia.toml
fn load_config() -> KardiaConfig {
    println!("cargo:rerun-if-changed=kardia.toml");

    let config_path = Path::new("kardia.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: kardia.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a kardia.toml scene configuration.        ║\n\
            ║  Please create one in the kardia-display-fw directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read kardia.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: KardiaConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid kardia.toml                                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid scene configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            ║  • {:<62} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            describe(e)
        );
    }

    println!("cargo:warning=kardia.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe(err: ConfigError) -> &'static str {
    match err {
        ConfigError::Shape(ShapeError::NonPositiveGain) => "[scene.heart] gain must be > 0",
        ConfigError::Shape(ShapeError::NonFiniteCenter) => {
            "[scene.heart] center_x/center_y must be finite"
        }
        ConfigError::ZeroDotSize => "[scene.heart] dot_size must be at least 1",
        ConfigError::EmptySpan => "[scene.heart] gain too small, nothing to draw",
        ConfigError::OutOfBounds => "[scene.heart] heart does not fit the panel (check center_y)",
        ConfigError::InvalidDimensions => "[display] panel must be 128x64",
        ConfigError::InvalidI2cAddress => "[display] i2c_address must be 7-bit (<= 0x7F)",
        ConfigError::EmptyLabel => "[scene] center_label cannot be empty",
    }
}

/// Write `config.rs` with a `load()` building the validated config
fn emit_config(config: &KardiaConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    let display = &config.display;
    let heart = &config.scene.heart;

    let source = format!(
        "// Generated by build.rs from kardia.toml\n\
        \n\
        pub fn load() -> KardiaConfig {{\n\
        \x20   KardiaConfig {{\n\
        \x20       display: DisplayHwConfig {{\n\
        \x20           i2c_address: {i2c_address},\n\
        \x20           width: {width},\n\
        \x20           height: {height},\n\
        \x20           contrast: {contrast},\n\
        \x20           column_offset: {column_offset},\n\
        \x20       }},\n\
        \x20       scene: SceneConfig::with_label(\n\
        \x20           HeartConfig {{\n\
        \x20               gain: {gain:?}_f32,\n\
        \x20               center_x: {center_x:?}_f32,\n\
        \x20               center_y: {center_y:?}_f32,\n\
        \x20               dot_size: {dot_size},\n\
        \x20               step_delay_ms: {step_delay_ms},\n\
        \x20           }},\n\
        \x20           {label:?},\n\
        \x20       ),\n\
        \x20   }}\n\
        }}\n",
        i2c_address = display.i2c_address,
        width = display.width,
        height = display.height,
        contrast = display.contrast,
        column_offset = display.column_offset,
        gain = heart.gain,
        center_x = heart.center_x,
        center_y = heart.center_y,
        dot_size = heart.dot_size,
        step_delay_ms = heart.step_delay_ms,
        label = config.scene.center_label.as_str(),
    );

    fs::write(out_dir.join("config.rs"), source).expect("failed to write config.rs");
}
