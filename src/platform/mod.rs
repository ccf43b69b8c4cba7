//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Drawing surface (canvas 2D on web, recorder when headless)
//! - HUD widgets (DOM overlays on web, log output when headless)

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;
