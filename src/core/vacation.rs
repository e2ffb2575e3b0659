use crate::domain::model::LookupResult;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::Value;

/// Decides whether `today` falls in a school-vacation period for `state`.
///
/// schulferien-api.de has shipped several response schemas over time, so the
/// body is interpreted through three ordered tiers, each tried only while
/// nothing matched yet:
///
/// 1. a top-level boolean `isHoliday` flag,
/// 2. a `states` array with per-state entries (own `isHoliday` flag, then
///    that entry's `holidays` date ranges),
/// 3. a root-level `holidays` array of date ranges.
///
/// Range boundaries accept the `start`/`from` and `end`/`until` spellings and
/// match half-open: `start <= today < end`. Entries with unparseable
/// boundaries are skipped, not errors.
pub fn resolve_school_vacation(body: &Value, today: NaiveDate, state: &str) -> LookupResult {
    // Tier 1: direct flag. A literal `false` does not stop the scan.
    let mut found = body.get("isHoliday").and_then(Value::as_bool) == Some(true);

    // Tier 2: per-state array.
    let state_entry = find_state_entry(body, state);
    if !found {
        if let Some(entry) = state_entry {
            if let Some(flag) = entry.get("isHoliday").and_then(Value::as_bool) {
                found = flag;
            }
            if !found {
                if let Some(ranges) = entry.get("holidays").and_then(Value::as_array) {
                    found = ranges.iter().any(|h| range_contains(h, today));
                }
            }
        }
    }

    // Tier 3: root-level range fallback. Entries naming a different state are
    // skipped; entries without a state code apply to all states.
    if !found {
        if let Some(ranges) = body.get("holidays").and_then(Value::as_array) {
            found = ranges.iter().any(|h| {
                match h.get("stateCode").and_then(Value::as_str) {
                    Some(code) if code != state => false,
                    _ => range_contains(h, today),
                }
            });
        }
    }

    LookupResult {
        found,
        names: collect_names(body, state_entry),
    }
}

/// Locates the requested state in the `states` array. The state key has been
/// seen under four spellings; the first one present decides, so a `code`
/// naming another state is not rescued by a later `id` field. Empty and
/// non-string values fall through to the next spelling.
fn find_state_entry<'a>(body: &'a Value, state: &str) -> Option<&'a Value> {
    body.get("states")?.as_array()?.iter().find(|entry| {
        ["code", "stateCode", "state", "id"]
            .iter()
            .filter_map(|key| entry.get(*key).and_then(Value::as_str))
            .find(|code| !code.is_empty())
            == Some(state)
    })
}

/// Boundaries are compared as instants against today at midnight UTC, so a
/// range starting mid-day does not cover its own start date.
fn range_contains(entry: &Value, today: NaiveDate) -> bool {
    let start = parse_boundary(entry.get("start").or_else(|| entry.get("from")));
    let end = parse_boundary(entry.get("end").or_else(|| entry.get("until")));
    let midnight = today.and_time(NaiveTime::MIN).and_utc();
    match (start, end) {
        // End is exclusive.
        (Some(start), Some(end)) => start <= midnight && midnight < end,
        _ => false,
    }
}

fn parse_boundary(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let raw = value?.as_str()?;
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Names of the vacation periods, independent of which tier matched. The
/// matched state entry's list is the more specific source; the root list is
/// the fallback.
fn collect_names(body: &Value, state_entry: Option<&Value>) -> Vec<String> {
    let list = state_entry
        .and_then(|entry| entry.get("holidays"))
        .and_then(Value::as_array)
        .or_else(|| body.get("holidays").and_then(Value::as_array));

    list.map(|items| {
        items
            .iter()
            .filter_map(|h| h.get("name").and_then(Value::as_str))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
