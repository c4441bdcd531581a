//! Constraint extraction from type shapes and raw data nodes.

use serde_json::Value;

use crate::classify::{classify_type, is_numeric_datatype};
use crate::graph::{ensure_array, first_of, AmfGraph};
use crate::model::Example;
use crate::values::{as_number, display_value, is_truthy};
use crate::vocab::{core, data, document, rdfs, shacl, shapes, xsd};

/// Enum members of a shape, ordered by their RDF sequence index
/// (`rdfs:_1`, `rdfs:_2`, ...). Falsy members are skipped; an enum without
/// usable members is `None`.
pub fn compute_enum(graph: &AmfGraph, shape: &Value) -> Option<Vec<Value>> {
    let shape = graph.resolve(shape);
    let list = graph.first(shape, shacl::IN)?.as_object()?;
    let compact = graph.key_for(rdfs::NS);

    let mut members: Vec<(usize, &Value)> = list
        .iter()
        .filter_map(|(key, member)| {
            let local = key
                .strip_prefix(rdfs::NS)
                .or_else(|| key.strip_prefix(compact.as_ref()))?;
            let index = local.strip_prefix('_')?.parse::<usize>().ok()?;
            Some((index, member))
        })
        .collect();
    members.sort_by_key(|(index, _)| *index);

    let values: Vec<Value> = members
        .into_iter()
        .filter_map(|(_, member)| graph.value(member, data::VALUE))
        .filter(|value| is_truthy(value))
        .cloned()
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Default value of a shape, typed by the shape's datatype.
///
/// Array shapes prefer the structured `shacl:defaultValue` list over the
/// string form.
pub fn default_value(graph: &AmfGraph, shape: &Value) -> Option<Value> {
    let raw = graph.value(shape, shacl::DEFAULT_VALUE_STR)?;
    if graph.has_type(shape, shapes::SCALAR_SHAPE) {
        let datatype = graph.iri_value(shape, shacl::DATATYPE);
        return Some(coerce_scalar(raw, datatype.as_deref()));
    }
    if graph.has_type(shape, shapes::ARRAY_SHAPE) {
        if let Some(list) = graph.first(shape, shacl::DEFAULT_VALUE) {
            return decode_array(graph, list).map(Value::Array);
        }
    }
    Some(raw.clone())
}

/// Coerce a lexical value by its datatype. Numeric strings that do not
/// parse are kept as they are.
pub fn coerce_scalar(raw: &Value, datatype: Option<&str>) -> Value {
    match datatype {
        Some(dt) if is_numeric_datatype(dt) => as_number(raw).map(Value::Number).unwrap_or_else(|| raw.clone()),
        Some(xsd::BOOLEAN) => match raw {
            Value::Bool(b) => Value::Bool(*b),
            Value::String(s) => Value::Bool(s != "false"),
            _ => Value::Bool(true),
        },
        _ => raw.clone(),
    }
}

/// Typed value of a `data:Scalar` node.
pub fn scalar_value(graph: &AmfGraph, node: &Value) -> Option<Value> {
    let literal = graph.first(node, data::VALUE)?;
    let raw = graph.value(node, data::VALUE)?;
    let datatype = graph.iri_value(node, shacl::DATATYPE).or_else(|| {
        literal
            .get("@type")
            .and_then(Value::as_str)
            .map(|t| graph.expand(t).into_owned())
    });
    Some(coerce_scalar(raw, datatype.as_deref()))
}

/// Scalar members of an RDF sequence node (`rdfs:member`), falsy members
/// dropped. `None` when the sequence has no members.
pub fn decode_array(graph: &AmfGraph, node: &Value) -> Option<Vec<Value>> {
    let members = ensure_array(graph.edge(node, rdfs::MEMBER)?);
    if members.is_empty() {
        return None;
    }
    Some(
        members
            .iter()
            .filter_map(|member| scalar_value(graph, member))
            .filter(is_truthy)
            .collect(),
    )
}

/// Logical type of an array shape's members.
pub fn array_items(graph: &AmfGraph, shape: &Value) -> Option<crate::types::LogicalType> {
    if !graph.has_type(shape, shapes::ARRAY_SHAPE) {
        return None;
    }
    let shape = graph.resolve(shape);
    let items = graph.first(shape, shapes::ITEMS)?;
    Some(classify_type(graph, Some(graph.resolve(items))))
}

/// Whether any member of a union is nil.
pub fn is_nillable(graph: &AmfGraph, shape: &Value) -> bool {
    let Some(members) = graph.edge(shape, shapes::ANY_OF) else {
        return false;
    };
    ensure_array(members)
        .iter()
        .any(|member| graph.has_type(graph.resolve(member), shapes::NIL_SHAPE))
}

/// Whether a shape carries the `no-auto-encoding` extension.
pub fn has_no_auto_encode(graph: &AmfGraph, shape: &Value) -> bool {
    let Some(properties) = graph.edge(shape, document::CUSTOM_DOMAIN_PROPERTIES) else {
        return false;
    };
    ensure_array(properties)
        .iter()
        .filter_map(|property| graph.id_of(property))
        .any(|id| {
            let prefixed = if id.starts_with("amf://id") {
                id.to_string()
            } else {
                format!("amf://id{}", id)
            };
            let extension = shape
                .get(&prefixed)
                .or_else(|| shape.get(id))
                .or_else(|| graph.node(id));
            extension
                .and_then(|ext| graph.value(ext, core::EXTENSION_NAME))
                .and_then(Value::as_str)
                == Some("no-auto-encoding")
        })
}

/// Decode a raw annotation value by its data class.
///
/// Scalars are typed by datatype, arrays become lists of their scalar
/// members and file shapes yield their declared file types.
pub fn raw_model_value(graph: &AmfGraph, model: &Value) -> Option<Value> {
    let model = first_of(model)?;
    if graph.has_type(model, data::SCALAR) {
        scalar_value(graph, model)
    } else if graph.has_type(model, data::ARRAY) {
        decode_array(graph, model).map(Value::Array)
    } else if graph.has_type(model, shapes::FILE_SHAPE) {
        let types = graph.value_array(model, shapes::FILE_TYPE)?;
        Some(Value::Array(types.into_iter().cloned().collect()))
    } else {
        None
    }
}

/// Named examples of a raw `data:examples` object, in key order.
pub fn raw_examples(graph: &AmfGraph, model: &Value) -> Option<Vec<Example>> {
    let model = first_of(model)?.as_object()?;
    let compact = graph.key_for(data::NS);
    let examples: Vec<Example> = model
        .iter()
        .filter(|(key, _)| is_data_key(key, &compact))
        .filter_map(|(key, value)| {
            let value = raw_model_value(graph, value).filter(is_truthy)?;
            let name = local_name(key);
            Some(if name.is_empty() {
                Example::from_value(value)
            } else {
                Example::named(name, value)
            })
        })
        .collect();
    if examples.is_empty() {
        None
    } else {
        Some(examples)
    }
}

/// Whether a key belongs to the data vocabulary, in either serialization.
pub fn is_data_key(key: &str, compact: &str) -> bool {
    key.contains(data::NS) || key.contains(compact)
}

/// Local part of a vocabulary key (after the last `#`, else the last `:`).
pub fn local_name(key: &str) -> &str {
    match key.rfind('#').or_else(|| key.rfind(':')) {
        Some(index) => &key[index + 1..],
        None => key,
    }
}

/// Text form of a raw pattern. A pattern given as a list (an unquoted
/// `[a-z]+` read as YAML) is wrapped back into brackets.
pub fn raw_pattern(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => Some(format!(
            "[{}]",
            items.first().map(display_value).unwrap_or_default()
        )),
        Value::Null => None,
        other => Some(display_value(other)),
    }
}
