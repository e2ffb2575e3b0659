use crate::domain::model::LookupResult;
use chrono::NaiveDate;
use serde_json::Value;

/// Extracts today's public holidays from a yearly holiday list.
///
/// feiertage-api.de returns a map keyed by holiday name
/// (`{"1. Weihnachtstag": {"datum": "2024-12-25", ...}, ...}`); mirrors of it
/// return a plain array of entries. Both shapes are accepted. The date field
/// is `datum` or `date` and is compared by exact string equality with today's
/// ISO date. Every matching entry contributes a name (one date can carry
/// several holidays); entries without a usable name still count as a match.
pub fn resolve_public_holidays(body: &Value, today: NaiveDate) -> LookupResult {
    let today_str = today.format("%Y-%m-%d").to_string();
    let mut found = false;
    let mut names = Vec::new();

    let mut scan = |entry: &Value, key: Option<&str>| {
        if entry_date(entry) != Some(today_str.as_str()) {
            return;
        }
        found = true;
        if let Some(name) = entry_name(entry, key) {
            names.push(name);
        }
    };

    match body {
        Value::Array(items) => {
            for item in items {
                scan(item, None);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                scan(item, Some(key));
            }
        }
        _ => {}
    }

    LookupResult { found, names }
}

fn entry_date(entry: &Value) -> Option<&str> {
    entry
        .get("datum")
        .or_else(|| entry.get("date"))
        .and_then(Value::as_str)
}

/// Name field, or the map key for the object shape (feiertage-api entries
/// carry no name field of their own).
fn entry_name(entry: &Value, key: Option<&str>) -> Option<String> {
    entry
        .get("name")
        .or_else(|| entry.get("title"))
        .and_then(Value::as_str)
        .or(key)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
