//! Completion of a record after its schema has been extracted: initial
//! value, placeholder and extended documentation.

use serde_json::Value;

use crate::model::{PropertyRecord, PropertySchema};
use crate::types::{Binding, LogicalType, ProcessOptions};
use crate::values::{display_value, is_truthy, normalize_value, parse_array_example, type_placeholder};

/// Fill in value, placeholder and documentation of a freshly built record.
pub fn process_record(record: &mut PropertyRecord, opts: &ProcessOptions) {
    let schema = record.schema.get_or_insert_with(PropertySchema::default);

    if schema.data_type == Some(LogicalType::Null) {
        let nil = match record.binding {
            Some(Binding::Header | Binding::Query | Binding::Path) => "nil",
            _ => "null",
        };
        record.value = Some(Value::String(nil.to_string()));
        schema.read_only = true;
    }

    let first_example = schema
        .examples
        .as_ref()
        .and_then(|examples| examples.first())
        .and_then(|example| example.value.as_ref());
    match first_example {
        Some(example) if is_truthy(example) => {
            let shown = display_value(&normalize_value(example, opts));
            schema.input_placeholder = Some(format!("Example: {}", shown));
        }
        _ => {
            if schema.input_placeholder.is_none() {
                let data_type = schema.data_type.clone().unwrap_or_default();
                schema.input_placeholder =
                    type_placeholder(&data_type, schema.format.as_deref()).map(String::from);
            }
        }
    }
    if schema.input_placeholder.as_deref().is_some_and(|p| !p.is_empty()) {
        schema.input_float_label = true;
    }

    if record.required {
        if let Some(default) = &schema.default_value {
            record.value = if schema.is_array {
                parse_array_example(default, opts)
            } else {
                Some(normalize_value(default, opts))
            };
        }
    }

    if record.value.is_none() && record.required {
        if let Some(example) = schema.examples.as_ref().and_then(|examples| examples.first()) {
            record.value = example.value.as_ref().map(|v| normalize_value(v, opts));
        }
        let unset = match &record.value {
            None => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        };
        if unset && schema.is_enum {
            record.value = schema
                .enum_values
                .as_ref()
                .and_then(|values| values.first())
                .map(|v| normalize_value(v, opts));
        }
    }

    if schema.is_enum {
        let lone_empty = match schema.examples.as_deref() {
            Some([only]) => !only.value.as_ref().is_some_and(is_truthy),
            _ => false,
        };
        if lone_empty {
            schema.examples = None;
        }
    }

    if schema.is_array {
        let text = match &record.value {
            Some(text @ Value::String(s)) if !s.is_empty() => Some(text.clone()),
            _ => None,
        };
        if let Some(text) = text {
            record.value = Some(match parse_array_example(&text, opts) {
                Some(array @ Value::Array(_)) => array,
                other => Value::Array(vec![other.unwrap_or(Value::Null)]),
            });
        }
        if !record.value.as_ref().is_some_and(is_truthy) {
            record.value = Some(Value::Array(vec![Value::String(String::new())]));
        }
    }

    if schema.is_bool {
        if let Some(Value::Bool(b)) = record.value {
            record.value = Some(Value::String(b.to_string()));
        }
    }

    record.has_extended_description = has_extended_documentation(record);
    if record.has_extended_description {
        record.extended_description = Some(render_extended_documentation(record));
    }
}

/// Whether a record has anything worth an extended documentation block:
/// a description, a pattern, or a non-empty first example.
pub fn has_extended_documentation(record: &PropertyRecord) -> bool {
    if record.has_description {
        return true;
    }
    let Some(schema) = &record.schema else {
        return false;
    };
    if schema.pattern.as_deref().is_some_and(|p| !p.is_empty()) {
        return true;
    }
    let Some(first) = schema.examples.as_ref().and_then(|examples| examples.first()) else {
        return false;
    };
    let value = match &first.value {
        Some(Value::Array(items)) => items.first(),
        other => other.as_ref(),
    };
    value.is_some_and(|v| v.as_str() != Some(""))
}

/// Markdown documentation: description, then pattern and examples as a
/// bullet list, separated from the description by two blank lines.
pub fn render_extended_documentation(record: &PropertyRecord) -> String {
    let mut items = Vec::new();
    if let Some(schema) = &record.schema {
        if let Some(pattern) = schema.pattern.as_deref().filter(|p| !p.is_empty()) {
            items.push(format!("- Pattern: `{}`", pattern));
        }
        for example in schema.examples.iter().flatten() {
            let Some(value) = example.value.as_ref().filter(|v| v.as_str() != Some("")) else {
                continue;
            };
            let shown = match value {
                Value::Array(members) => members.iter().map(display_value).collect::<Vec<_>>().join(", "),
                other => display_value(other),
            };
            match example.title.as_deref().filter(|t| !t.is_empty()) {
                Some(title) => items.push(format!("- Example {}: `{}`", title, shown)),
                None => items.push(format!("- Example: `{}`", shown)),
            }
        }
    }

    let mut doc = record
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or_default()
        .to_string();
    if !doc.is_empty() && !items.is_empty() {
        doc.push_str("\n\n\n");
    }
    doc.push_str(&items.join("\n"));
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Example;
    use serde_json::json;

    fn typed(data_type: LogicalType) -> PropertyRecord {
        PropertyRecord {
            name: Some("p".into()),
            schema: Some(PropertySchema {
                is_array: data_type == LogicalType::Array,
                is_bool: data_type == LogicalType::Boolean,
                data_type: Some(data_type),
                ..PropertySchema::default()
            }),
            ..PropertyRecord::default()
        }
    }

    fn schema(record: &PropertyRecord) -> &PropertySchema {
        record.schema.as_ref().unwrap()
    }

    #[test]
    fn nil_type_value_by_binding() {
        let mut record = typed(LogicalType::Null);
        record.binding = Some(Binding::Query);
        process_record(&mut record, &ProcessOptions::default());
        assert_eq!(record.value, Some(json!("nil")));
        assert!(schema(&record).read_only);

        let mut record = typed(LogicalType::Null);
        record.binding = Some(Binding::Type);
        process_record(&mut record, &ProcessOptions::default());
        assert_eq!(record.value, Some(json!("null")));
    }

    #[test]
    fn example_placeholder() {
        let mut record = typed(LogicalType::String);
        record.schema.as_mut().unwrap().examples = Some(vec![Example::from_value(json!("x-id: 123"))]);
        let opts = ProcessOptions::for_binding(Some(&Binding::Header), Some("x-id"), false);
        process_record(&mut record, &opts);
        assert_eq!(schema(&record).input_placeholder.as_deref(), Some("Example: 123"));
        assert!(schema(&record).input_float_label);
        assert_eq!(record.value, None);
    }

    #[test]
    fn type_placeholder_when_no_example() {
        let mut record = typed(LogicalType::Date);
        process_record(&mut record, &ProcessOptions::default());
        assert_eq!(schema(&record).input_placeholder.as_deref(), Some("0000-00-00"));
        assert!(schema(&record).input_float_label);

        let mut record = typed(LogicalType::String);
        process_record(&mut record, &ProcessOptions::default());
        assert_eq!(schema(&record).input_placeholder, None);
        assert!(!schema(&record).input_float_label);
    }

    #[test]
    fn required_default_becomes_value() {
        let mut record = typed(LogicalType::Integer);
        record.required = true;
        record.schema.as_mut().unwrap().default_value = Some(json!(10));
        process_record(&mut record, &ProcessOptions::default());
        assert_eq!(record.value, Some(json!(10)));

        let mut record = typed(LogicalType::Integer);
        record.schema.as_mut().unwrap().default_value = Some(json!(10));
        process_record(&mut record, &ProcessOptions::default());
        assert_eq!(record.value, None);
    }

    #[test]
    fn required_falls_back_to_example_then_enum() {
        let mut record = typed(LogicalType::String);
        record.required = true;
        record.schema.as_mut().unwrap().examples = Some(vec![Example::from_value(json!(" abc "))]);
        process_record(&mut record, &ProcessOptions::default());
        assert_eq!(record.value, Some(json!("abc")));

        let mut record = typed(LogicalType::String);
        record.required = true;
        {
            let schema = record.schema.as_mut().unwrap();
            schema.is_enum = true;
            schema.enum_values = Some(vec![json!("a"), json!("b")]);
            schema.examples = Some(vec![Example::from_value(json!(""))]);
        }
        process_record(&mut record, &ProcessOptions::default());
        assert_eq!(record.value, Some(json!("a")));
        assert_eq!(schema(&record).examples, None);
    }

    #[test]
    fn query_values_are_decoded() {
        let mut record = typed(LogicalType::String);
        record.required = true;
        record.schema.as_mut().unwrap().examples =
            Some(vec![Example::from_value(json!("q=hello+world%21"))]);
        let opts = ProcessOptions::for_binding(Some(&Binding::Query), Some("q"), true);
        process_record(&mut record, &opts);
        assert_eq!(record.value, Some(json!("hello world!")));
    }

    #[test]
    fn array_values() {
        let mut record = typed(LogicalType::Array);
        process_record(&mut record, &ProcessOptions::default());
        assert_eq!(record.value, Some(json!([""])));

        let mut record = typed(LogicalType::Array);
        record.required = true;
        record.schema.as_mut().unwrap().default_value = Some(json!("[\"a\", \"\", \"b\"]"));
        process_record(&mut record, &ProcessOptions::default());
        assert_eq!(record.value, Some(json!(["a", "b"])));

        let mut record = typed(LogicalType::Array);
        record.required = true;
        record.schema.as_mut().unwrap().default_value = Some(json!("single"));
        process_record(&mut record, &ProcessOptions::default());
        assert_eq!(record.value, Some(json!(["single"])));

        let mut record = typed(LogicalType::Array);
        record.required = true;
        record.schema.as_mut().unwrap().default_value = Some(json!("[]"));
        process_record(&mut record, &ProcessOptions::default());
        assert_eq!(record.value, Some(json!([""])));
    }

    #[test]
    fn boolean_values_are_strings() {
        let mut record = typed(LogicalType::Boolean);
        record.required = true;
        record.schema.as_mut().unwrap().default_value = Some(json!(false));
        process_record(&mut record, &ProcessOptions::default());
        assert_eq!(record.value, Some(json!("false")));
    }

    #[test]
    fn extended_documentation() {
        let mut record = typed(LogicalType::String);
        record.description = Some("Identifier.".into());
        record.has_description = true;
        {
            let schema = record.schema.as_mut().unwrap();
            schema.pattern = Some("^[a-z]+$".into());
            schema.examples = Some(vec![
                Example::named("first", json!("abc")),
                Example::from_value(json!(["a", "b"])),
                Example::from_value(json!("")),
            ]);
        }
        process_record(&mut record, &ProcessOptions::default());
        assert!(record.has_extended_description);
        assert_eq!(
            record.extended_description.as_deref(),
            Some("Identifier.\n\n\n- Pattern: `^[a-z]+$`\n- Example first: `abc`\n- Example: `a, b`")
        );
    }

    #[test]
    fn extended_documentation_without_bullets_or_description() {
        let mut record = typed(LogicalType::String);
        record.description = Some("Desc".into());
        record.has_description = true;
        assert_eq!(render_extended_documentation(&record), "Desc");

        let mut record = typed(LogicalType::String);
        record.schema.as_mut().unwrap().examples = Some(vec![
            Example::from_value(json!("a")),
            Example::from_value(json!("b")),
        ]);
        assert_eq!(
            render_extended_documentation(&record),
            "- Example: `a`\n- Example: `b`"
        );
    }

    #[test]
    fn no_extended_documentation_for_bare_records() {
        let mut record = typed(LogicalType::String);
        process_record(&mut record, &ProcessOptions::default());
        assert!(!record.has_extended_description);
        assert_eq!(record.extended_description, None);

        let mut record = typed(LogicalType::String);
        record.schema.as_mut().unwrap().examples = Some(vec![Example::from_value(json!([""]))]);
        assert!(!has_extended_documentation(&record));
    }
}
