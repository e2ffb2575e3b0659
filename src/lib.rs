pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlSettings;

pub use adapters::{FeiertageApi, SchulferienApi};
pub use core::engine::StatusEngine;
pub use domain::model::{DayStatus, LookupResult, Settings};
pub use utils::error::{Result, StatusError};
