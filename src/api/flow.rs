//! Boolean condition predicates for the host's automation evaluator.
//!
//! Each predicate calls the engine and reads one field. Predicates never
//! raise: if settings cannot be loaded the condition evaluates to false.

use crate::core::engine::StatusEngine;
use crate::domain::model::Settings;
use crate::domain::ports::{HolidaySource, SettingsProvider, VacationSource};

/// "Is today a public holiday?" condition.
pub async fn is_public_holiday_today<H, V, P>(
    engine: &StatusEngine<H, V>,
    provider: &P,
    state_override: Option<&str>,
) -> bool
where
    H: HolidaySource,
    V: VacationSource,
    P: SettingsProvider,
{
    match condition_settings(provider, state_override) {
        Some(settings) => engine.build_status(&settings).await.public_holiday_today,
        None => false,
    }
}

/// "Is today a school-vacation day?" condition.
pub async fn is_school_vacation_today<H, V, P>(
    engine: &StatusEngine<H, V>,
    provider: &P,
    state_override: Option<&str>,
) -> bool
where
    H: HolidaySource,
    V: VacationSource,
    P: SettingsProvider,
{
    match condition_settings(provider, state_override) {
        Some(settings) => engine.build_status(&settings).await.school_vacation_today,
        None => false,
    }
}

/// Settings for a condition evaluation: configured defaults, optional state
/// override, and vacation checking forced on so the vacation condition works
/// even when the configured default disables it.
fn condition_settings<P: SettingsProvider>(
    provider: &P,
    state_override: Option<&str>,
) -> Option<Settings> {
    let mut settings = match provider.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("condition evaluation failed to load settings: {}", e);
            return None;
        }
    };
    if let Some(state) = state_override {
        settings.state = state.to_string();
    }
    settings.check_vacation = true;
    Some(settings)
}
