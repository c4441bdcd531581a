//! Example extraction for type shapes.

use serde_json::{Map, Value};

use crate::constraints::{is_data_key, local_name, scalar_value};
use crate::graph::{ensure_array, AmfGraph};
use crate::model::Example;
use crate::values::display_value;
use crate::vocab::{api_contract, core, data, document, rdfs};

/// Media type examples are rendered for.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Name AMF gives examples declared without one.
const DEFAULT_EXAMPLE_NAME: &str = "default-example";

/// Produces the examples of a type shape.
///
/// Implement this to plug a different example renderer into the
/// transformer.
pub trait ExampleGenerator {
    /// Examples for `shape` rendered for `media_type`, or `None` when the
    /// shape has none.
    fn compute_examples(&self, graph: &AmfGraph, shape: &Value, media_type: &str) -> Option<Vec<Example>>;
}

/// Reads the examples declared on a shape (`apiContract:examples`).
///
/// Structured values are preferred over the raw source text. Scalars render
/// as their lexical form; objects and arrays render as pretty-printed JSON
/// when the media type is JSON, otherwise the raw text is used.
#[derive(Debug, Default, Clone, Copy)]
pub struct AmfExampleGenerator;

impl ExampleGenerator for AmfExampleGenerator {
    fn compute_examples(&self, graph: &AmfGraph, shape: &Value, media_type: &str) -> Option<Vec<Example>> {
        let shape = graph.resolve(shape);
        let declared = graph.edge(shape, api_contract::EXAMPLES)?;
        let examples: Vec<Example> = ensure_array(declared)
            .iter()
            .map(|example| graph.resolve(example))
            .filter_map(|example| render_example(graph, example, media_type))
            .collect();
        if examples.is_empty() {
            None
        } else {
            Some(examples)
        }
    }
}

fn render_example(graph: &AmfGraph, example: &Value, media_type: &str) -> Option<Example> {
    let raw = || graph.value(example, document::RAW).cloned();
    let value = match graph.first(example, document::STRUCTURED_VALUE) {
        Some(structured) => structured_value(graph, structured, media_type).or_else(raw),
        None => raw(),
    }?;

    let name = graph.string_value(example, core::NAME);
    let has_title = name
        .as_deref()
        .is_some_and(|n| !n.is_empty() && n != DEFAULT_EXAMPLE_NAME);
    Some(Example {
        title: if has_title { name.clone() } else { None },
        name,
        value: Some(value),
        has_title,
    })
}

fn structured_value(graph: &AmfGraph, node: &Value, media_type: &str) -> Option<Value> {
    let node = graph.resolve(node);
    if graph.has_type(node, data::SCALAR) {
        let value = scalar_value(graph, node)?;
        return Some(Value::String(display_value(&value)));
    }
    if !media_type.contains("json") {
        return None;
    }
    let json = data_to_json(graph, node, 0)?;
    serde_json::to_string_pretty(&json).ok().map(Value::String)
}

/// Nesting bound for structured example values.
const MAX_DATA_DEPTH: usize = 64;

/// Rebuild plain JSON from a `data:` node tree.
fn data_to_json(graph: &AmfGraph, node: &Value, depth: usize) -> Option<Value> {
    if depth > MAX_DATA_DEPTH {
        return None;
    }
    let node = graph.resolve(node);
    if graph.has_type(node, data::SCALAR) {
        return scalar_value(graph, node).or(Some(Value::Null));
    }
    if graph.has_type(node, data::ARRAY) {
        let members = graph.edge(node, rdfs::MEMBER).map(ensure_array).unwrap_or_default();
        return Some(Value::Array(
            members
                .iter()
                .filter_map(|member| data_to_json(graph, member, depth + 1))
                .collect(),
        ));
    }
    if graph.has_type(node, data::OBJECT) {
        let compact = graph.key_for(data::NS);
        let mut object = Map::new();
        for (key, value) in node.as_object()? {
            if !is_data_key(key, &compact) {
                continue;
            }
            if let Some(json) = data_to_json(graph, value, depth + 1) {
                object.insert(local_name(key).to_string(), json);
            }
        }
        return Some(Value::Object(object));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{shacl, xsd};
    use serde_json::json;

    fn scalar(value: &str, datatype: &str) -> Value {
        json!({
            "@type": [data::SCALAR, "http://a.ml/vocabularies/data#Node"],
            (data::VALUE): [{ "@value": value }],
            (shacl::DATATYPE): [{ "@id": datatype }]
        })
    }

    fn shape_with(examples: Value) -> Value {
        json!({ (api_contract::EXAMPLES): examples })
    }

    #[test]
    fn no_examples() {
        let graph = AmfGraph::default();
        let generator = AmfExampleGenerator;
        assert!(generator
            .compute_examples(&graph, &json!({}), JSON_MEDIA_TYPE)
            .is_none());
        assert!(generator
            .compute_examples(&graph, &shape_with(json!([])), JSON_MEDIA_TYPE)
            .is_none());
    }

    #[test]
    fn scalar_example_uses_lexical_value() {
        let graph = AmfGraph::default();
        let shape = shape_with(json!([{
            (core::NAME): [{ "@value": "default-example" }],
            (document::STRUCTURED_VALUE): [scalar("22", xsd::INTEGER)],
            (document::RAW): [{ "@value": "22" }]
        }]));
        let examples = AmfExampleGenerator
            .compute_examples(&graph, &shape, JSON_MEDIA_TYPE)
            .unwrap();
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].value, Some(json!("22")));
        assert!(!examples[0].has_title);
        assert_eq!(examples[0].title, None);
    }

    #[test]
    fn named_example_is_titled() {
        let graph = AmfGraph::default();
        let shape = shape_with(json!([{
            (core::NAME): [{ "@value": "first" }],
            (document::RAW): [{ "@value": "abc" }]
        }]));
        let examples = AmfExampleGenerator
            .compute_examples(&graph, &shape, JSON_MEDIA_TYPE)
            .unwrap();
        assert!(examples[0].has_title);
        assert_eq!(examples[0].title.as_deref(), Some("first"));
        assert_eq!(examples[0].value, Some(json!("abc")));
    }

    #[test]
    fn structured_object_renders_pretty_json() {
        let graph = AmfGraph::default();
        let shape = shape_with(json!([{
            (document::STRUCTURED_VALUE): [{
                "@type": [data::OBJECT],
                "http://a.ml/vocabularies/data#id": [scalar("1", xsd::INTEGER)],
                "http://a.ml/vocabularies/data#tags": [{
                    "@type": [data::ARRAY],
                    (rdfs::MEMBER): [scalar("a", xsd::STRING)]
                }]
            }],
            (document::RAW): [{ "@value": "id: 1" }]
        }]));
        let examples = AmfExampleGenerator
            .compute_examples(&graph, &shape, JSON_MEDIA_TYPE)
            .unwrap();
        let text = examples[0].value.as_ref().and_then(Value::as_str).unwrap();
        let parsed: Value = serde_json::from_str(text).unwrap();
        assert_eq!(parsed, json!({ "id": 1, "tags": ["a"] }));

        let examples = AmfExampleGenerator
            .compute_examples(&graph, &shape, "application/xml")
            .unwrap();
        assert_eq!(examples[0].value, Some(json!("id: 1")));
    }

    #[test]
    fn examples_without_value_are_skipped() {
        let graph = AmfGraph::default();
        let shape = shape_with(json!([{ (core::NAME): [{ "@value": "empty" }] }]));
        assert!(AmfExampleGenerator
            .compute_examples(&graph, &shape, JSON_MEDIA_TYPE)
            .is_none());
    }
}
