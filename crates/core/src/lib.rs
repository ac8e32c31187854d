//! Core utilities for the Groove engine.
//!
//! This crate provides foundational types and utilities used across the
//! engine:
//! - Error types and result aliases
//! - Logging initialization
//! - Frame timing
//! - Engine configuration

mod config;
mod error;
mod logging;
mod timer;

pub use config::{CameraConfig, EngineConfig, WindowConfig};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use timer::Timer;
