//! Tolerant readers over loosely-typed upstream records.
//!
//! Upstream shapes drift: fields go missing, get renamed, or change type.
//! These helpers read what is there and report absence as `None` so the
//! normalizers can substitute deterministic defaults.

use serde_json::Value;

/// Accepted spellings of the trip name field
const TRIP_NAME_KEYS: [&str; 4] = ["trip-name", "trip_name", "tripName", "name"];

/// Outcome of looking up an array field on a payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawList<'a> {
    /// Field absent or null
    Missing,
    /// Field present but not an array
    Malformed,
    Items(&'a [Value]),
}

/// Look up `key` on an object payload
pub fn list<'a>(payload: &'a Value, key: &str) -> RawList<'a> {
    match payload.get(key) {
        None | Some(Value::Null) => RawList::Missing,
        Some(Value::Array(items)) => RawList::Items(items),
        Some(_) => RawList::Malformed,
    }
}

/// Non-empty string field, with numbers stringified
pub fn text(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A single raw trip entry
#[derive(Debug, Clone, Copy)]
pub struct RawTrip<'a>(pub &'a Value);

impl<'a> RawTrip<'a> {
    pub fn name(&self) -> Option<String> {
        TRIP_NAME_KEYS.iter().find_map(|key| text(self.0, key))
    }

    pub fn duration(&self) -> Option<String> {
        text(self.0, "duration")
    }

    /// Price rendered as `"$" + raw value`
    pub fn price(&self) -> Option<String> {
        self.0.get("price").and_then(format_price)
    }

    /// String amenities in order; anything else is dropped
    pub fn amenities(&self) -> Vec<String> {
        match self.0.get("amenities") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// `"$" + raw`, keeping source precision. Integral floats print without a
/// fractional part; string prices pass through verbatim.
pub fn format_price(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                return Some(format!("${}", n));
            }
            let f = n.as_f64()?;
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                Some(format!("${}", f as i64))
            } else {
                Some(format!("${}", f))
            }
        }
        Value::String(s) if !s.trim().is_empty() => Some(format!("${}", s)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_lookup() {
        let payload = json!({ "trips": [1, 2], "other": "x", "gone": null });
        assert!(matches!(list(&payload, "trips"), RawList::Items(items) if items.len() == 2));
        assert_eq!(list(&payload, "other"), RawList::Malformed);
        assert_eq!(list(&payload, "gone"), RawList::Missing);
        assert_eq!(list(&payload, "absent"), RawList::Missing);
    }

    #[test]
    fn test_trip_name_aliases() {
        assert_eq!(RawTrip(&json!({ "trip-name": "A" })).name(), Some("A".to_string()));
        assert_eq!(RawTrip(&json!({ "tripName": "B" })).name(), Some("B".to_string()));
        assert_eq!(RawTrip(&json!({ "name": "C" })).name(), Some("C".to_string()));
        assert_eq!(RawTrip(&json!({ "trip-name": "  " })).name(), None);
        assert_eq!(RawTrip(&json!("not an object")).name(), None);
    }

    #[test]
    fn test_price_formatting() {
        assert_eq!(format_price(&json!(1299)), Some("$1299".to_string()));
        assert_eq!(format_price(&json!(1299.0)), Some("$1299".to_string()));
        assert_eq!(format_price(&json!(12.5)), Some("$12.5".to_string()));
        assert_eq!(format_price(&json!("899")), Some("$899".to_string()));
        assert_eq!(format_price(&json!(null)), None);
        assert_eq!(format_price(&json!([1])), None);
    }

    #[test]
    fn test_amenities_drop_non_strings() {
        let trip = json!({ "amenities": ["Wifi", 3, null, "Pool"] });
        assert_eq!(RawTrip(&trip).amenities(), vec!["Wifi", "Pool"]);
        assert!(RawTrip(&json!({ "amenities": "Wifi" })).amenities().is_empty());
    }
}
