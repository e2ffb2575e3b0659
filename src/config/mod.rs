use crate::domain::model::Settings;
use crate::domain::ports::SettingsProvider;
use crate::utils::error::{Result, StatusError};
use serde::Deserialize;
use std::path::PathBuf;

/// Fallback state code when none is configured (Niedersachsen).
pub const DEFAULT_STATE: &str = "NI";

/// On-disk settings shape; both keys are optional and default like the host
/// app's key-value store did (state "NI", vacation checking on).
#[derive(Debug, Clone, Deserialize)]
struct SettingsFile {
    state: Option<String>,
    check_vacation: Option<bool>,
}

/// Settings store backed by a TOML file.
#[derive(Debug, Clone)]
pub struct TomlSettings {
    path: PathBuf,
}

impl TomlSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsProvider for TomlSettings {
    fn settings(&self) -> Result<Settings> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| StatusError::ConfigError {
            message: format!("cannot read settings file {}: {}", self.path.display(), e),
        })?;
        let file: SettingsFile = toml::from_str(&raw)?;

        Ok(Settings {
            state: file
                .state
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_STATE.to_string()),
            check_vacation: file.check_vacation.unwrap_or(true),
        })
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::*;
    use crate::utils::validation::{validate_non_empty_string, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "ferien-status")]
    #[command(about = "Public-holiday and school-vacation status for a German state")]
    pub struct CliConfig {
        /// TOML settings file; flags below override its values
        #[arg(long)]
        pub settings: Option<PathBuf>,

        /// State code, e.g. NI or BY
        #[arg(long)]
        pub state: Option<String>,

        /// Do not query the school-vacation service
        #[arg(long)]
        pub skip_vacation: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl SettingsProvider for CliConfig {
        fn settings(&self) -> Result<Settings> {
            let mut settings = match &self.settings {
                Some(path) => TomlSettings::new(path.as_path()).settings()?,
                None => Settings::default(),
            };

            if let Some(state) = &self.state {
                settings.state = state.clone();
            }
            if self.skip_vacation {
                settings.check_vacation = false;
            }
            Ok(settings)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(state) = &self.state {
                validate_non_empty_string("state", state)?;
            }
            Ok(())
        }
    }
}
