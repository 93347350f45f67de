//! Rendering of next-arrival responses into display text.
//!
//! The output is consumed verbatim by the calling agent, so every message
//! below is part of the tool's contract.

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::client::UpstreamResult;

/// Maximum number of arrivals rendered per response.
pub const MAX_ARRIVALS: usize = 4;

/// Maximum number of characters of a malformed payload echoed back.
pub const MAX_DEBUG_CHARS: usize = 200;

/// Separator placed between rendered arrivals.
pub const ARRIVAL_SEPARATOR: &str = "\n---\n";

pub const NO_ARRIVALS: &str = "No arrivals for this bus stop at this time.";
pub const NO_ARRIVAL_DATA: &str = "No arrival data available.";

const UNKNOWN: &str = "Unknown";

/// One upcoming arrival at a stop.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArrivalRecord {
    pub route_short_name: Option<Value>,
    pub route_long_name: Option<Value>,
    pub trip_headsign: Option<Value>,
    pub arrival_time: Option<Value>,
}

impl ArrivalRecord {
    fn field(value: &Option<Value>) -> Cow<'_, str> {
        match value {
            None | Some(Value::Null) => Cow::Borrowed(UNKNOWN),
            Some(Value::String(s)) => Cow::Borrowed(s),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for ArrivalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nRoute short name: {}\nRoute long name: {}\nGoing to (headsign): {}\nArrival time: {}\n",
            Self::field(&self.route_short_name),
            Self::field(&self.route_long_name),
            Self::field(&self.trip_headsign),
            Self::field(&self.arrival_time),
        )
    }
}

/// Render a single arrival record.
///
/// Empty objects, `null` and anything that is not an object have nothing to
/// show and render as [`NO_ARRIVAL_DATA`].
pub fn format_arrival(record: &Value) -> String {
    match record.as_object() {
        Some(map) if !map.is_empty() => ArrivalRecord::deserialize(record)
            .unwrap_or_default()
            .to_string(),
        _ => NO_ARRIVAL_DATA.to_string(),
    }
}

/// Render the outcome of a next-trips call.
///
/// Never fails: transport errors, upstream error bodies, unexpected shapes
/// and empty results each map to their own message.
pub fn render(result: &UpstreamResult) -> String {
    let body = match result {
        Ok(body) => body,
        Err(err) => return api_error(&err.to_string()),
    };

    let Some(map) = body.as_object() else {
        return unexpected_format(body);
    };

    if let Some(error) = map.get("error") {
        return match error {
            Value::String(s) => api_error(s),
            other => api_error(&python_repr(other)),
        };
    }

    match map.get("next_arrivals") {
        None => unexpected_format(body),
        Some(arrivals) if is_empty(arrivals) => NO_ARRIVALS.to_string(),
        Some(Value::Array(arrivals)) => arrivals
            .iter()
            .take(MAX_ARRIVALS)
            .map(format_arrival)
            .collect::<Vec<_>>()
            .join(ARRIVAL_SEPARATOR),
        Some(_) => unexpected_format(body),
    }
}

fn api_error(detail: &str) -> String {
    format!("The API call did not work. Error: {detail}")
}

fn unexpected_format(body: &Value) -> String {
    let received: String = python_repr(body).chars().take(MAX_DEBUG_CHARS).collect();
    format!("Unexpected API response format. Received: {received}")
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Dictionary-literal style text for debug output, e.g. `{'foo': 'bar'}`.
fn python_repr(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(python_repr).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Object(map) => repr_map(map),
    }
}

fn repr_map(map: &Map<String, Value>) -> String {
    let inner: Vec<String> = map
        .iter()
        .map(|(k, v)| format!("{}: {}", quote(k), python_repr(v)))
        .collect();
    format!("{{{}}}", inner.join(", "))
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infobus::{FailureKind, FetchError};
    use serde_json::json;

    fn arrival(n: usize) -> Value {
        json!({
            "route_short_name": format!("R{n}"),
            "route_long_name": format!("Route {n}"),
            "trip_headsign": format!("Terminal {n}"),
            "arrival_time": format!("08:0{n}:00"),
        })
    }

    #[test]
    fn test_transport_error_is_reported() {
        let result = Err(FetchError::new(FailureKind::Timeout, "connect timed out"));
        assert_eq!(
            render(&result),
            "The API call did not work. Error: TimeoutError: connect timed out"
        );
    }

    #[test]
    fn test_error_key_in_body_is_reported() {
        let result = Ok(json!({"error": "TimeoutError: connect timed out"}));
        assert_eq!(
            render(&result),
            "The API call did not work. Error: TimeoutError: connect timed out"
        );
    }

    #[test]
    fn test_error_key_wins_over_arrivals() {
        let result = Ok(json!({"error": "bad stop", "next_arrivals": [arrival(1)]}));
        assert_eq!(render(&result), "The API call did not work. Error: bad stop");
    }

    #[test]
    fn test_missing_next_arrivals_is_unexpected() {
        let result = Ok(json!({"foo": "bar"}));
        assert_eq!(
            render(&result),
            "Unexpected API response format. Received: {'foo': 'bar'}"
        );
    }

    #[test]
    fn test_unexpected_payload_is_truncated() {
        let long = "x".repeat(500);
        let result = Ok(json!({ "detail": long }));
        let rendered = render(&result);

        let prefix = "Unexpected API response format. Received: ";
        assert!(rendered.starts_with(prefix));
        assert_eq!(rendered[prefix.len()..].chars().count(), MAX_DEBUG_CHARS);
        assert!(rendered[prefix.len()..].starts_with("{'detail': 'xxx"));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let result = Ok(json!({ "parada": "Heredia ñandú ".repeat(40) }));
        let rendered = render(&result);
        let prefix = "Unexpected API response format. Received: ";
        assert_eq!(rendered[prefix.len()..].chars().count(), MAX_DEBUG_CHARS);
    }

    #[test]
    fn test_non_object_body_is_unexpected() {
        let result = Ok(json!([1, null, true]));
        assert_eq!(
            render(&result),
            "Unexpected API response format. Received: [1, None, True]"
        );
    }

    #[test]
    fn test_non_array_arrivals_is_unexpected() {
        let result = Ok(json!({"next_arrivals": "soon"}));
        assert!(render(&result).starts_with("Unexpected API response format."));
    }

    #[test]
    fn test_empty_arrivals() {
        assert_eq!(render(&Ok(json!({"next_arrivals": []}))), NO_ARRIVALS);
        assert_eq!(render(&Ok(json!({"next_arrivals": null}))), NO_ARRIVALS);
    }

    #[test]
    fn test_single_partial_arrival() {
        let result = Ok(json!({"next_arrivals": [{"route_short_name": "12"}]}));
        assert_eq!(
            render(&result),
            "\nRoute short name: 12\nRoute long name: Unknown\nGoing to (headsign): Unknown\nArrival time: Unknown\n"
        );
    }

    #[test]
    fn test_full_arrival_block() {
        let rendered = format_arrival(&arrival(1));
        assert_eq!(
            rendered,
            "\nRoute short name: R1\nRoute long name: Route 1\nGoing to (headsign): Terminal 1\nArrival time: 08:01:00\n"
        );
    }

    #[test]
    fn test_at_most_four_arrivals_in_order() {
        let arrivals: Vec<Value> = (1..=6).map(arrival).collect();
        let rendered = render(&Ok(json!({ "next_arrivals": arrivals })));

        let blocks: Vec<&str> = rendered.split(ARRIVAL_SEPARATOR).collect();
        assert_eq!(blocks.len(), MAX_ARRIVALS);
        for (i, block) in blocks.iter().enumerate() {
            assert!(block.contains(&format!("Route short name: R{}", i + 1)));
        }
        assert!(!rendered.contains("R5"));
    }

    #[test]
    fn test_fewer_than_four_arrivals() {
        let rendered = render(&Ok(json!({ "next_arrivals": [arrival(1), arrival(2)] })));
        assert_eq!(rendered.matches("Route short name:").count(), 2);
        assert_eq!(rendered.matches(ARRIVAL_SEPARATOR).count(), 1);
    }

    #[test]
    fn test_empty_record_renders_placeholder() {
        assert_eq!(format_arrival(&json!({})), NO_ARRIVAL_DATA);
        assert_eq!(format_arrival(&Value::Null), NO_ARRIVAL_DATA);

        let rendered = render(&Ok(json!({ "next_arrivals": [{}, arrival(2)] })));
        assert!(rendered.starts_with("No arrival data available.\n---\n"));
    }

    #[test]
    fn test_null_and_numeric_fields() {
        let rendered = format_arrival(&json!({
            "route_short_name": 12,
            "route_long_name": null,
            "trip_headsign": "Campus",
        }));
        assert!(rendered.contains("Route short name: 12\n"));
        assert!(rendered.contains("Route long name: Unknown\n"));
        assert!(rendered.contains("Going to (headsign): Campus\n"));
        assert!(rendered.contains("Arrival time: Unknown\n"));
    }

    #[test]
    fn test_python_repr_nested() {
        let value = json!({"a": [1, "it's"], "b": {"c": false}});
        assert_eq!(python_repr(&value), r"{'a': [1, 'it\'s'], 'b': {'c': False}}");
    }
}
