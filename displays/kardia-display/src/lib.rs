//! Display abstraction and scene composition for Kardia
//!
//! This crate provides:
//! - `DisplayBackend` trait for panel drivers (SH1106 over I2C, etc.)
//! - `FrameBuffer`, a 128x64 page-organized 1bpp buffer
//! - `Canvas`, the buffer plus active color plus backend, which is the
//!   pixel surface the heart renderers draw on and an `embedded-graphics`
//!   draw target for captions
//! - `SceneComposer`, one frame of the caption/heart animation loop
//!
//! # Architecture
//!
//! The firmware owns a `Canvas` wrapping its panel driver and hands it to
//! the composer once per frame together with the state returned by the
//! previous frame. Nothing here touches hardware directly; presenting is
//! delegated to the backend.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod canvas;
pub mod captions;
pub mod framebuffer;
pub mod scene;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use canvas::Canvas;
pub use framebuffer::{FrameBuffer, HEIGHT, PAGES, WIDTH};
pub use scene::{FrameOutcome, SceneComposer};
