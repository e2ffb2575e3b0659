use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalized daily status for one (date, state) evaluation.
///
/// Fully derived from the two upstream responses fetched during that
/// evaluation; nothing is carried over between evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub state: String,
    pub public_holiday_today: bool,
    pub public_holiday_names: Vec<String>,
    pub school_vacation_today: bool,
    pub vacation_names: Vec<String>,
    /// OR of the two flags above. Computed by the aggregator, never stored
    /// independently.
    pub special_today: bool,
}

/// Outcome of one resolver's lookup for a single day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResult {
    pub found: bool,
    pub names: Vec<String>,
}

impl LookupResult {
    /// The fail-soft outcome: nothing found, no names.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Configuration value object passed into the engine at call time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub state: String,
    pub check_vacation: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            state: crate::config::DEFAULT_STATE.to_string(),
            check_vacation: true,
        }
    }
}
