//! Vocabulary-aware reader over AMF JSON-LD documents.
//!
//! AMF emits two serializations of the same graph: the "full" model where
//! every key is an absolute IRI, and the compact model where keys are
//! `prefix:local` terms declared in the root `@context`. [`AmfGraph`] hides
//! the difference: every lookup takes an absolute IRI and tries both forms.
//!
//! It also owns the document and an index from every node `@id` to the JSON
//! pointer of its definition, so links (`doc:link-target` or bare
//! `{"@id": ...}` references) can be followed to their declarations.

use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::Value;

use crate::vocab::document;

/// Normalizes JSON-LD's single-vs-list ambiguity into a slice.
pub fn ensure_array(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items,
        other => std::slice::from_ref(other),
    }
}

/// Returns the first element of a list, or the value itself when it is not a list.
pub fn first_of(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.first(),
        other => Some(other),
    }
}

/// Read access to an AMF graph.
#[derive(Debug, Clone, Default)]
pub struct AmfGraph {
    /// (prefix, namespace IRI), longest namespace first.
    prefixes: Vec<(String, String)>,
    document: Value,
    /// `@id` to the JSON pointer of its definition.
    nodes: HashMap<String, String>,
}

impl AmfGraph {
    /// Build the accessor for a loaded document.
    ///
    /// The document may be the flattened array AMF writes (`[{...}]`) or the
    /// root object itself.
    pub fn new(document: &Value) -> Self {
        Self::from_value(document.clone())
    }

    /// Build the accessor, taking ownership of the document.
    pub fn from_value(document: Value) -> Self {
        let root = first_of(&document).unwrap_or(&document);
        let mut prefixes: Vec<(String, String)> = root
            .get("@context")
            .and_then(Value::as_object)
            .map(|ctx| {
                ctx.iter()
                    .filter(|(term, _)| !term.starts_with('@'))
                    .filter_map(|(term, ns)| ns.as_str().map(|ns| (term.clone(), ns.to_string())))
                    .collect()
            })
            .unwrap_or_default();
        prefixes.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

        let mut index = HashMap::new();
        index_nodes(&document, &mut String::new(), &mut index);
        let nodes: HashMap<String, String> = index
            .into_iter()
            .map(|(id, (pointer, _))| (id, pointer))
            .collect();

        tracing::debug!(
            prefixes = prefixes.len(),
            nodes = nodes.len(),
            "indexed AMF document"
        );
        Self {
            prefixes,
            document,
            nodes,
        }
    }

    /// The document this graph reads.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Document-local key for a vocabulary IRI.
    ///
    /// Uses the most specific context prefix; returns the IRI unchanged when
    /// the document has no matching prefix.
    pub fn key_for<'s>(&self, iri: &'s str) -> Cow<'s, str> {
        for (prefix, ns) in &self.prefixes {
            if let Some(local) = iri.strip_prefix(ns.as_str()) {
                return Cow::Owned(format!("{}:{}", prefix, local));
            }
        }
        Cow::Borrowed(iri)
    }

    /// Expand a `prefix:local` term into an absolute IRI.
    pub fn expand<'s>(&self, term: &'s str) -> Cow<'s, str> {
        if let Some((prefix, local)) = term.split_once(':') {
            if !local.starts_with("//") {
                if let Some((_, ns)) = self.prefixes.iter().find(|(p, _)| p == prefix) {
                    return Cow::Owned(format!("{}{}", ns, local));
                }
            }
        }
        Cow::Borrowed(term)
    }

    /// Look up an indexed node by its `@id`.
    pub fn node(&self, id: &str) -> Option<&Value> {
        self.document.pointer(self.nodes.get(id)?)
    }

    /// Follow a link to its definition.
    ///
    /// A node carrying `doc:link-target` resolves to the target; a node with
    /// an `@id` but no `@type` resolves to the indexed node with that id.
    /// Anything else is returned unchanged.
    pub fn resolve<'a>(&'a self, node: &'a Value) -> &'a Value {
        let node = first_of(node).unwrap_or(node);
        if let Some(target) = self
            .first(node, document::LINK_TARGET)
            .and_then(|t| self.id_of(t))
        {
            if let Some(found) = self.node(target) {
                return found;
            }
        }
        if node.get("@type").is_none() {
            if let Some(found) = self.id_of(node).and_then(|id| self.node(id)) {
                return found;
            }
        }
        node
    }

    /// `@id` of a node (or of the first node of a list).
    pub fn id_of<'a>(&self, node: &'a Value) -> Option<&'a str> {
        first_of(node)?.get("@id")?.as_str()
    }

    /// Raw edge value for a property IRI, in either serialization.
    pub fn edge<'a>(&self, node: &'a Value, iri: &str) -> Option<&'a Value> {
        let node = first_of(node)?;
        let map = node.as_object()?;
        map.get(iri).or_else(|| map.get(self.key_for(iri).as_ref()))
    }

    /// First element of an edge.
    pub fn first<'a>(&self, node: &'a Value, iri: &str) -> Option<&'a Value> {
        first_of(self.edge(node, iri)?)
    }

    /// Tests RDF `@type` membership.
    pub fn has_type(&self, node: &Value, class_iri: &str) -> bool {
        let Some(types) = first_of(node).and_then(|n| n.get("@type")) else {
            return false;
        };
        ensure_array(types)
            .iter()
            .filter_map(Value::as_str)
            .any(|t| self.expand(t) == class_iri)
    }

    /// Tests presence of an edge.
    pub fn has_property(&self, node: &Value, iri: &str) -> bool {
        self.edge(node, iri).is_some()
    }

    /// Unwraps a single literal edge (`[{"@value": x}]` → `x`).
    pub fn value<'a>(&self, node: &'a Value, iri: &str) -> Option<&'a Value> {
        literal(self.first(node, iri)?)
    }

    /// String literal of an edge. Non-string literals are not converted.
    pub fn string_value(&self, node: &Value, iri: &str) -> Option<String> {
        self.value(node, iri)?.as_str().map(String::from)
    }

    /// Unwraps a multi-valued literal edge.
    pub fn value_array<'a>(&self, node: &'a Value, iri: &str) -> Option<Vec<&'a Value>> {
        let edge = self.edge(node, iri)?;
        Some(ensure_array(edge).iter().filter_map(literal).collect())
    }

    /// IRI held by an edge whose value is an `@id` reference or a plain
    /// string, expanded to absolute form.
    pub fn iri_value(&self, node: &Value, iri: &str) -> Option<String> {
        let target = self.first(node, iri)?;
        let id = match target {
            Value::String(s) => s.as_str(),
            other => other.get("@id")?.as_str()?,
        };
        Some(self.expand(id).into_owned())
    }
}

fn literal(value: &Value) -> Option<&Value> {
    match value {
        Value::Object(map) if map.contains_key("@value") => map.get("@value"),
        other => Some(other),
    }
}

/// Records `@id` → (pointer, typed) for every definition under `value`.
/// A typed definition replaces an untyped one; otherwise the first wins.
fn index_nodes(value: &Value, pointer: &mut String, nodes: &mut HashMap<String, (String, bool)>) {
    match value {
        Value::Object(map) => {
            if let Some(id) = map.get("@id").and_then(Value::as_str) {
                // Bare references (`{"@id": ...}`) are not definitions.
                if map.len() > 1 {
                    let typed = map.contains_key("@type");
                    let replace = match nodes.get(id) {
                        None => true,
                        Some((_, existing_typed)) => !existing_typed && typed,
                    };
                    if replace {
                        nodes.insert(id.to_string(), (pointer.clone(), typed));
                    }
                }
            }
            for (key, child) in map {
                let len = pointer.len();
                pointer.push('/');
                pointer.push_str(&key.replace('~', "~0").replace('/', "~1"));
                index_nodes(child, pointer, nodes);
                pointer.truncate(len);
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                let len = pointer.len();
                pointer.push('/');
                pointer.push_str(&i.to_string());
                index_nodes(item, pointer, nodes);
                pointer.truncate(len);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{core, shacl, shapes, xsd};
    use serde_json::json;

    fn compact_document() -> Value {
        json!([{
            "@context": {
                "@base": "amf://id",
                "shacl": "http://www.w3.org/ns/shacl#",
                "raml-shapes": "http://a.ml/vocabularies/shapes#",
                "core": "http://a.ml/vocabularies/core#",
                "doc": "http://a.ml/vocabularies/document#",
                "xsd": "http://www.w3.org/2001/XMLSchema#"
            },
            "doc:declares": [{
                "@id": "#/declarations/Id",
                "@type": ["raml-shapes:ScalarShape", "shacl:Shape"],
                "shacl:datatype": [{ "@id": "xsd:string" }],
                "core:name": [{ "@value": "Id" }]
            }],
            "raml-shapes:schema": [{
                "@id": "#/link",
                "doc:link-target": [{ "@id": "#/declarations/Id" }]
            }]
        }])
    }

    #[test]
    fn ensure_array_wraps_single_values() {
        let single = json!({"a": 1});
        assert_eq!(ensure_array(&single).len(), 1);
        let list = json!([1, 2, 3]);
        assert_eq!(ensure_array(&list).len(), 3);
    }

    #[test]
    fn first_of_handles_empty_list() {
        assert!(first_of(&json!([])).is_none());
        assert_eq!(first_of(&json!([1, 2])), Some(&json!(1)));
        assert_eq!(first_of(&json!("x")), Some(&json!("x")));
    }

    #[test]
    fn key_for_without_context_is_identity() {
        let graph = AmfGraph::default();
        assert_eq!(graph.key_for(shacl::NAME), shacl::NAME);
    }

    #[test]
    fn key_for_compacts_with_context() {
        let graph = AmfGraph::new(&compact_document());
        assert_eq!(graph.key_for(shacl::NAME), "shacl:name");
        assert_eq!(graph.key_for(shapes::SCALAR_SHAPE), "raml-shapes:ScalarShape");
        assert_eq!(graph.key_for("http://example.com/x"), "http://example.com/x");
    }

    #[test]
    fn expand_reverses_compaction() {
        let graph = AmfGraph::new(&compact_document());
        assert_eq!(graph.expand("xsd:string"), xsd::STRING);
        assert_eq!(graph.expand("unknown:thing"), "unknown:thing");
        assert_eq!(graph.expand("http://a.b/c"), "http://a.b/c");
    }

    #[test]
    fn has_type_matches_both_forms() {
        let graph = AmfGraph::new(&compact_document());
        let node = json!({ "@type": ["raml-shapes:ScalarShape"] });
        assert!(graph.has_type(&node, shapes::SCALAR_SHAPE));
        let full = json!({ "@type": [shapes::SCALAR_SHAPE] });
        assert!(graph.has_type(&full, shapes::SCALAR_SHAPE));
        assert!(!graph.has_type(&full, shapes::ARRAY_SHAPE));
        assert!(!graph.has_type(&json!({}), shapes::ARRAY_SHAPE));
    }

    #[test]
    fn resolve_follows_link_target() {
        let doc = compact_document();
        let graph = AmfGraph::new(&doc);
        let link = graph.first(&doc[0], shapes::SCHEMA).unwrap();
        let resolved = graph.resolve(link);
        assert_eq!(graph.string_value(resolved, core::NAME).as_deref(), Some("Id"));
    }

    #[test]
    fn resolve_follows_bare_id_reference() {
        let doc = compact_document();
        let graph = AmfGraph::new(&doc);
        let reference = json!({ "@id": "#/declarations/Id" });
        let resolved = graph.resolve(&reference);
        assert!(graph.has_type(resolved, shapes::SCALAR_SHAPE));
    }

    #[test]
    fn resolve_keeps_inline_definitions() {
        let graph = AmfGraph::default();
        let inline = json!({ "@id": "x", "@type": [shapes::NIL_SHAPE] });
        assert!(std::ptr::eq(graph.resolve(&inline), &inline));
    }

    #[test]
    fn value_unwraps_literals() {
        let graph = AmfGraph::default();
        let node = json!({
            (core::NAME): [{ "@value": "limit" }],
            (shacl::MIN_COUNT): [{ "@value": 1 }],
            (shapes::FILE_TYPE): [{ "@value": "image/png" }, { "@value": "image/jpeg" }]
        });
        assert_eq!(graph.string_value(&node, core::NAME).as_deref(), Some("limit"));
        assert_eq!(graph.value(&node, shacl::MIN_COUNT), Some(&json!(1)));
        assert!(graph.value(&node, shacl::PATTERN).is_none());
        let types = graph.value_array(&node, shapes::FILE_TYPE).unwrap();
        assert_eq!(types, vec![&json!("image/png"), &json!("image/jpeg")]);
    }

    #[test]
    fn iri_value_expands_datatype() {
        let graph = AmfGraph::new(&compact_document());
        let node = json!({ "shacl:datatype": [{ "@id": "xsd:integer" }] });
        assert_eq!(
            graph.iri_value(&node, shacl::DATATYPE).as_deref(),
            Some(xsd::INTEGER)
        );
    }

    #[test]
    fn node_lookup_by_id() {
        let graph = AmfGraph::new(&compact_document());
        assert!(graph.node("#/declarations/Id").is_some());
        assert!(graph.node("#/link").is_some());
        assert!(graph.node("#/nope").is_none());
    }

    #[test]
    fn node_lookup_under_iri_keys() {
        let document = json!([{
            "@id": "#root",
            "@type": [shapes::SCALAR_SHAPE],
            "http://a.ml/vocabularies/document#declares": [
                { "@id": "#decl" },
                {
                    "@id": "#decl",
                    "@type": [shacl::NODE_SHAPE],
                    (core::NAME): [{ "@value": "Declared" }]
                },
                { "@id": "#decl", (core::NAME): [{ "@value": "Untyped" }] }
            ]
        }]);
        let graph = AmfGraph::from_value(document);
        let found = graph.node("#decl").unwrap();
        assert_eq!(graph.string_value(found, core::NAME).as_deref(), Some("Declared"));
        assert!(graph.has_type(graph.node("#root").unwrap(), shapes::SCALAR_SHAPE));
        assert!(std::ptr::eq(graph.node("#root").unwrap(), &graph.document()[0]));
    }
}
