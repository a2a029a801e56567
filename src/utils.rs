/// Utility functions for coercing loosely-typed launch JSON
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Extract an integer from a JSON number or numeric string
pub fn int(v: &Value) -> Option<i64> {
    if let Some(x) = v.as_i64() {
        return Some(x);
    }
    if let Some(s) = v.as_str() {
        return s.trim().parse::<i64>().ok();
    }
    None
}

/// String at a JSON pointer, e.g. `/launch_site/site_name`
pub fn s_at(v: &Value, pointer: &str) -> Option<String> {
    match v.pointer(pointer)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Tri-state boolean: anything but a JSON bool is unknown
pub fn tri_bool(v: &Value) -> Option<bool> {
    v.as_bool()
}

/// Parse a timestamp from an RFC 3339 string, a naive `%Y-%m-%d %H:%M:%S`
/// string (taken as UTC) or unix seconds
pub fn timestamp(v: &Value) -> Option<DateTime<Utc>> {
    if let Some(s) = v.as_str() {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
            return Some(Utc.from_utc_datetime(&ndt));
        }
        return None;
    }
    v.as_i64()
        .and_then(|n| Utc.timestamp_opt(n, 0).single())
}
