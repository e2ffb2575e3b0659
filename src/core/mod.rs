pub mod aggregate;
pub mod engine;
pub mod holiday;
pub mod vacation;

pub use crate::domain::model::{DayStatus, LookupResult, Settings};
pub use crate::domain::ports::{HolidaySource, SettingsProvider, VacationSource};
pub use crate::utils::error::Result;
