use crate::{errors::AppError, logging::logger::log_warn, shapes::settings::Settings};
use async_trait::async_trait;

#[async_trait]
pub trait SettingsReader: Sync {
    async fn read(&self) -> Result<Settings, AppError>;

    /// Like `read`, but an unreadable configuration falls back to the
    /// defaults instead of failing.
    async fn read_or_default(&self) -> Settings {
        match self.read().await {
            Ok(settings) => settings,
            Err(e) => {
                log_warn(&format!("ignoring invalid configuration: {}", e));
                Settings::default()
            }
        }
    }
}
