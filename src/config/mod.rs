//! Configuration module for Daybook
//!
//! This module provides configuration management including:
//! - Path resolution for settings, audit log and ledger files
//! - User settings persistence (budget, line format)

pub mod paths;
pub mod settings;

pub use paths::DaybookPaths;
pub use settings::Settings;
