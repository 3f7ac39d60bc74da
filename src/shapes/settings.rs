use crate::{constants::DEFAULT_TEAMS, logging::logger::LogLevel};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_teams")]
    pub teams: Vec<String>,
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_teams() -> Vec<String> {
    DEFAULT_TEAMS.iter().map(|t| t.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            teams: default_teams(),
            log_level: LogLevel::default(),
        }
    }
}

impl Settings {
    pub fn is_known_team(&self, team: &str) -> bool {
        self.teams.iter().any(|t| t == team)
    }

    pub fn default_team(&self) -> Option<&str> {
        self.teams.first().map(String::as_str)
    }
}

static CURRENT_SETTINGS: OnceCell<RwLock<Settings>> = OnceCell::new();

/// Installs the settings loaded at startup; later calls replace them.
pub fn init_settings(settings: Settings) {
    if CURRENT_SETTINGS
        .set(RwLock::new(settings.clone()))
        .is_err()
    {
        set_settings(settings);
    }
}

pub fn set_settings(settings: Settings) {
    if let Some(lock) = CURRENT_SETTINGS.get() {
        if let Ok(mut current) = lock.write() {
            *current = settings;
        }
    }
}

/// Returns the current settings, or the defaults when none were installed.
pub fn current_settings() -> Settings {
    CURRENT_SETTINGS
        .get()
        .and_then(|lock| lock.read().ok().map(|s| s.clone()))
        .unwrap_or_default()
}
