//! Pure helpers deriving presentation hints and normalizing example values.

use percent_encoding::percent_decode_str;
use serde_json::{Number, Value};

use crate::types::{InputType, LogicalType, ProcessOptions};

/// RFC 3339 `partial-time` without offset.
pub const TIME_PATTERN: &str = r"^[0-9]{2}:[0-9]{2}:[0-9]{2}\.?[0-9]{0,3}$";
/// RFC 3339 `full-date`.
pub const DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";
/// `full-date` + `T` + `partial-time`.
pub const DATETIME_ONLY_PATTERN: &str =
    r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}\.?[0-9]{0,3}$";
/// RFC 3339 date-time prefix; anything may follow the seconds.
pub const DATETIME_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}.*$";

const RFC2616: &str = "rfc2616";

/// Input label: display name, else property name, else a generic label.
/// Required properties get a trailing `*`.
pub fn complete_label(display_name: Option<&str>, name: Option<&str>, required: bool) -> String {
    let mut label = display_name
        .filter(|s| !s.is_empty())
        .or(name.filter(|s| !s.is_empty()))
        .unwrap_or("Input value")
        .to_string();
    if required {
        label.push('*');
    }
    label
}

/// Input control for a logical type. Arrays use their member type.
///
/// Time types render as plain text inputs.
pub fn derive_input_type(data_type: &LogicalType, items: Option<&LogicalType>) -> InputType {
    if *data_type == LogicalType::Array {
        return match items {
            Some(items) => derive_input_type(items, None),
            None => InputType::Text,
        };
    }
    match data_type.as_str() {
        "number" | "integer" | "float" => InputType::Number,
        "boolean" => InputType::Boolean,
        "date-only" | "date" => InputType::Date,
        _ => InputType::Text,
    }
}

/// Validation pattern. An explicit pattern always wins; date and time types
/// get a canonical one.
///
/// `datetime` in `rfc2616` format yields `Some("")`: no pattern applies.
pub fn derive_pattern(
    data_type: &LogicalType,
    explicit: Option<&str>,
    format: Option<&str>,
) -> Option<String> {
    if let Some(pattern) = explicit.filter(|p| !p.is_empty()) {
        return Some(pattern.to_string());
    }
    let pattern = match data_type {
        LogicalType::Time => TIME_PATTERN,
        LogicalType::Date => DATE_PATTERN,
        LogicalType::DateTimeOnly => DATETIME_ONLY_PATTERN,
        LogicalType::DateTime if format == Some(RFC2616) => "",
        LogicalType::DateTime => DATETIME_PATTERN,
        _ => return None,
    };
    Some(pattern.to_string())
}

/// Placeholder text for date and time inputs.
pub fn type_placeholder(data_type: &LogicalType, format: Option<&str>) -> Option<&'static str> {
    match data_type {
        LogicalType::Time => Some("00:00:00.000"),
        LogicalType::Date => Some("0000-00-00"),
        LogicalType::DateTimeOnly => Some("0000-00-00T00:00:00.000"),
        LogicalType::DateTime if format == Some(RFC2616) => Some("Sun, 01 Jan 2000 00:00:00 GMT"),
        LogicalType::DateTime => Some("0000-00-00T00:00:00Z+01:00"),
        _ => None,
    }
}

/// Normalize an example or enum value into a form value.
///
/// Non-strings pass through. Strings are trimmed, lose a leading
/// `name<delimiter>` echo, and are percent-decoded (`+` as space) when
/// `decode_values` is set. A failed decode keeps the trimmed string.
pub fn normalize_value(raw: &Value, opts: &ProcessOptions) -> Value {
    let Value::String(s) = raw else {
        return raw.clone();
    };
    let mut value = s.trim().to_string();
    if let (Some(delimiter), Some(name)) = (opts.value_delimiter.as_deref(), opts.name.as_deref()) {
        if !delimiter.is_empty() && value.starts_with(&format!("{}{}", name, delimiter)) {
            value = value[name.len() + delimiter.len()..].trim().to_string();
        }
    }
    if opts.decode_values {
        if let Some(decoded) = decode_component(&value.replace('+', " ")) {
            value = decoded;
        }
    }
    Value::String(value)
}

/// Parse an array example (`["a", "b"]`).
///
/// Elements are normalized and falsy ones dropped; an empty result is
/// `None`. Input that is not a JSON array is normalized as a scalar.
pub fn parse_array_example(raw: &Value, opts: &ProcessOptions) -> Option<Value> {
    if let Value::String(s) = raw {
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(s) {
            let values: Vec<Value> = items
                .iter()
                .map(|item| normalize_value(item, opts))
                .filter(is_truthy)
                .collect();
            return if values.is_empty() {
                None
            } else {
                Some(Value::Array(values))
            };
        }
    }
    Some(normalize_value(raw, opts))
}

/// Percent-decode, rejecting malformed escapes and non-UTF-8 results.
fn decode_component(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    percent_decode_str(s)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// Truthiness as form values understand it: `null`, `false`, `0`, and the
/// empty string are "no value".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a value for placeholders and documentation.
///
/// Numbers print without a trailing `.0`; arrays join their elements with
/// commas.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn display_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

fn as_number_f64(f: f64) -> Option<Number> {
    if f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 {
        Some(Number::from(f as i64))
    } else {
        Number::from_f64(f)
    }
}

/// Read a literal as a number; numeric strings are parsed.
pub fn as_number(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(as_number_f64),
        _ => None,
    }
}

/// Read a literal as a non-negative integer; numeric strings are parsed.
pub fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
