use crate::domain::model::{DayStatus, LookupResult};
use chrono::NaiveDate;

/// Combines both resolver outcomes into one `DayStatus`.
///
/// Pure combination, no I/O. Name lists are only carried when the matching
/// flag is set, so a `found=false` outcome never leaks names into the status.
pub fn aggregate(
    date: NaiveDate,
    state: &str,
    holiday: &LookupResult,
    vacation: &LookupResult,
) -> DayStatus {
    DayStatus {
        date,
        state: state.to_string(),
        public_holiday_today: holiday.found,
        public_holiday_names: if holiday.found {
            holiday.names.clone()
        } else {
            Vec::new()
        },
        school_vacation_today: vacation.found,
        vacation_names: if vacation.found {
            vacation.names.clone()
        } else {
            Vec::new()
        },
        special_today: holiday.found || vacation.found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn lookup(found: bool, names: &[&str]) -> LookupResult {
        LookupResult {
            found,
            names: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_special_is_or_of_both_flags() {
        let d = date("2024-12-25");
        for (h, v) in [(false, false), (true, false), (false, true), (true, true)] {
            let status = aggregate(d, "NI", &lookup(h, &[]), &lookup(v, &[]));
            assert_eq!(status.special_today, h || v);
            assert_eq!(status.public_holiday_today, h);
            assert_eq!(status.school_vacation_today, v);
        }
    }

    #[test]
    fn test_names_carried_when_found() {
        let status = aggregate(
            date("2024-12-25"),
            "NI",
            &lookup(true, &["1. Weihnachtstag"]),
            &lookup(true, &["Weihnachtsferien"]),
        );

        assert_eq!(status.public_holiday_names, vec!["1. Weihnachtstag"]);
        assert_eq!(status.vacation_names, vec!["Weihnachtsferien"]);
    }

    #[test]
    fn test_names_dropped_when_not_found() {
        let status = aggregate(
            date("2025-01-06"),
            "NI",
            &lookup(false, &["stale"]),
            &lookup(false, &["Winter"]),
        );

        assert!(status.public_holiday_names.is_empty());
        assert!(status.vacation_names.is_empty());
        assert!(!status.special_today);
    }

    #[test]
    fn test_inputs_not_consumed() {
        let d = date("2024-12-25");
        let holiday = lookup(true, &["1. Weihnachtstag"]);
        let vacation = lookup(false, &[]);

        let first = aggregate(d, "NI", &holiday, &vacation);
        let second = aggregate(d, "NI", &holiday, &vacation);
        assert_eq!(first, second);
    }

    #[test]
    fn test_date_and_state_carried_through() {
        let status = aggregate(date("2024-06-01"), "BY", &lookup(false, &[]), &lookup(false, &[]));
        assert_eq!(status.date, date("2024-06-01"));
        assert_eq!(status.state, "BY");
    }
}
