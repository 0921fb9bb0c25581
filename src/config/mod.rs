//! Configuration loading and management for the Severance Settlement Engine.
//!
//! This module provides the injectable rule-regime configuration: the
//! day-count conventions, percentage rates, and notice-day caps that drive
//! every calculator. Rules can be loaded from a YAML file or taken from the
//! built-in CLT defaults.
//!
//! # Example
//!
//! ```no_run
//! use rescisao_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/clt").unwrap();
//! println!("Loaded regime: {}", config.regime().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RegimeConfig, RegimeMetadata, SettlementRules};
