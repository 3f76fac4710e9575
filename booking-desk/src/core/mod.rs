//! Core module - configuration
//!
//! - [`Config`] - runtime configuration loaded from the environment

pub mod config;

pub use config::Config;
