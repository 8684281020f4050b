//! Board-agnostic core logic for the heart firmware
//!
//! This crate contains everything that does not depend on a specific
//! display or board:
//!
//! - Pixel surface abstraction (the only boundary to the panel)
//! - Heart curve evaluation and visible x-range
//! - Dot plotting, static outline and the animated hand-drawn sequence
//! - Scene state (heart phase, caption corner rotation)
//! - Configuration type definitions and validation

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod geometry;
pub mod render;
pub mod scene;
pub mod traits;
