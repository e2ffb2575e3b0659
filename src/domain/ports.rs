use crate::domain::model::Settings;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Upstream source for the yearly public-holiday list of a state.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn fetch_year(&self, year: i32, state: &str) -> Result<serde_json::Value>;
}

/// Upstream source for date-scoped school-vacation data.
#[async_trait]
pub trait VacationSource: Send + Sync {
    async fn fetch_date(&self, date: NaiveDate, state: &str) -> Result<serde_json::Value>;
}

/// The host's settings store. Loading may fail (unreadable file), which is
/// the only error surfaced to API callers.
pub trait SettingsProvider: Send + Sync {
    fn settings(&self) -> Result<Settings>;
}
