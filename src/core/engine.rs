use crate::core::aggregate::aggregate;
use crate::core::holiday::resolve_public_holidays;
use crate::core::vacation::resolve_school_vacation;
use crate::domain::model::{DayStatus, LookupResult, Settings};
use crate::domain::ports::{HolidaySource, VacationSource};
use chrono::{Datelike, NaiveDate, Utc};

/// The single code path for all status consumers.
///
/// Each `build_status` call is self-contained: today is resolved once, both
/// upstream lookups run against that date, and their outcomes are merged into
/// a fresh `DayStatus`. Upstream failures never escape this type.
pub struct StatusEngine<H: HolidaySource, V: VacationSource> {
    holidays: H,
    vacations: V,
}

impl<H: HolidaySource, V: VacationSource> StatusEngine<H, V> {
    pub fn new(holidays: H, vacations: V) -> Self {
        Self { holidays, vacations }
    }

    /// Builds the status for the current UTC calendar date.
    pub async fn build_status(&self, settings: &Settings) -> DayStatus {
        self.build_status_for(Utc::now().date_naive(), settings).await
    }

    /// Date-injected variant of `build_status`; the date is fixed once so a
    /// midnight rollover mid-call cannot split the two lookups.
    pub async fn build_status_for(&self, today: NaiveDate, settings: &Settings) -> DayStatus {
        let state = if settings.state.is_empty() {
            crate::config::DEFAULT_STATE
        } else {
            settings.state.as_str()
        };

        let status = if settings.check_vacation {
            let (holiday, vacation) = tokio::join!(
                self.lookup_holidays(today, state),
                self.lookup_vacation(today, state)
            );
            aggregate(today, state, &holiday, &vacation)
        } else {
            tracing::info!("school-vacation check disabled (check_vacation=false), skipping lookup");
            let holiday = self.lookup_holidays(today, state).await;
            aggregate(today, state, &holiday, &LookupResult::none())
        };

        tracing::info!(
            "today ({}) in {}: public_holiday={}, school_vacation={}, special={}",
            status.date,
            status.state,
            status.public_holiday_today,
            status.school_vacation_today,
            status.special_today
        );

        status
    }

    async fn lookup_holidays(&self, today: NaiveDate, state: &str) -> LookupResult {
        match self.holidays.fetch_year(today.year(), state).await {
            Ok(body) => resolve_public_holidays(&body, today),
            Err(e) => {
                tracing::error!("public-holiday lookup failed: {}", e);
                LookupResult::none()
            }
        }
    }

    async fn lookup_vacation(&self, today: NaiveDate, state: &str) -> LookupResult {
        match self.vacations.fetch_date(today, state).await {
            Ok(body) => resolve_school_vacation(&body, today, state),
            Err(e) => {
                tracing::error!("school-vacation lookup failed: {}", e);
                LookupResult::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{Result, StatusError};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct FixedHolidays(Option<Value>);

    #[async_trait]
    impl HolidaySource for FixedHolidays {
        async fn fetch_year(&self, _year: i32, _state: &str) -> Result<Value> {
            self.0.clone().ok_or(StatusError::ConfigError {
                message: "holiday source down".to_string(),
            })
        }
    }

    struct FixedVacations {
        body: Option<Value>,
        calls: std::sync::atomic::AtomicUsize,
    }

    impl FixedVacations {
        fn new(body: Option<Value>) -> Self {
            Self {
                body,
                calls: std::sync::atomic::AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl VacationSource for FixedVacations {
        async fn fetch_date(&self, _date: NaiveDate, _state: &str) -> Result<Value> {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            self.body.clone().ok_or(StatusError::ConfigError {
                message: "vacation source down".to_string(),
            })
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn settings(state: &str, check_vacation: bool) -> Settings {
        Settings {
            state: state.to_string(),
            check_vacation,
        }
    }

    #[tokio::test]
    async fn test_both_sources_contribute() {
        let engine = StatusEngine::new(
            FixedHolidays(Some(json!([{"date": "2024-12-25", "name": "1. Weihnachtstag"}]))),
            FixedVacations::new(Some(json!({"isHoliday": true, "holidays": [{"name": "Weihnachtsferien"}]}))),
        );

        let status = engine
            .build_status_for(date("2024-12-25"), &settings("NI", true))
            .await;

        assert!(status.public_holiday_today);
        assert_eq!(status.public_holiday_names, vec!["1. Weihnachtstag"]);
        assert!(status.school_vacation_today);
        assert_eq!(status.vacation_names, vec!["Weihnachtsferien"]);
        assert!(status.special_today);
    }

    #[tokio::test]
    async fn test_both_sources_failing_degrades_to_all_false() {
        let engine = StatusEngine::new(FixedHolidays(None), FixedVacations::new(None));

        let status = engine
            .build_status_for(date("2024-12-25"), &settings("NI", true))
            .await;

        assert_eq!(status.date, date("2024-12-25"));
        assert_eq!(status.state, "NI");
        assert!(!status.public_holiday_today);
        assert!(!status.school_vacation_today);
        assert!(!status.special_today);
        assert!(status.public_holiday_names.is_empty());
        assert!(status.vacation_names.is_empty());
    }

    #[tokio::test]
    async fn test_disabled_vacation_check_never_calls_source() {
        let vacations = FixedVacations::new(Some(json!({"isHoliday": true})));
        let engine = StatusEngine::new(FixedHolidays(Some(json!([]))), vacations);

        let status = engine
            .build_status_for(date("2024-12-25"), &settings("NI", false))
            .await;

        assert!(!status.school_vacation_today);
        assert!(status.vacation_names.is_empty());
        assert_eq!(
            engine.vacations.calls.load(std::sync::atomic::Ordering::SeqCst),
            0
        );
    }

    #[tokio::test]
    async fn test_empty_state_falls_back_to_default() {
        let engine = StatusEngine::new(FixedHolidays(Some(json!([]))), FixedVacations::new(Some(json!({}))));

        let status = engine
            .build_status_for(date("2024-12-25"), &settings("", true))
            .await;

        assert_eq!(status.state, "NI");
    }
}
