//! API View Model
//!
//! Transforms the AMF JSON-LD model of an API into form view models: flat
//! records describing how to render and pre-fill one input per parameter or
//! property.
//!
//! Both AMF serializations are accepted: the full model where every key is
//! an absolute IRI, and the compact model using `@context` prefixes.
//!
//! # Example
//!
//! ```
//! use api_view_model::{AmfGraph, ApiViewModel};
//! use serde_json::json;
//!
//! let document = json!([{
//!     "@id": "#/parameter/limit",
//!     "@type": ["http://a.ml/vocabularies/apiContract#Parameter"],
//!     "http://a.ml/vocabularies/apiContract#paramName": [{ "@value": "limit" }],
//!     "http://a.ml/vocabularies/apiContract#binding": [{ "@value": "query" }],
//!     "http://a.ml/vocabularies/apiContract#required": [{ "@value": true }],
//!     "http://a.ml/vocabularies/shapes#schema": [{
//!         "@id": "#/parameter/limit/schema",
//!         "@type": ["http://a.ml/vocabularies/shapes#ScalarShape"],
//!         "http://www.w3.org/ns/shacl#datatype": [
//!             { "@id": "http://www.w3.org/2001/XMLSchema#integer" }
//!         ],
//!         "http://www.w3.org/ns/shacl#defaultValueStr": [{ "@value": "10" }]
//!     }]
//! }]);
//!
//! let model = ApiViewModel::new(AmfGraph::new(&document));
//! let records = model.compute_view_model(Some(&document)).unwrap().unwrap();
//!
//! assert_eq!(records[0].name.as_deref(), Some("limit"));
//! assert_eq!(records[0].value, Some(json!(10)));
//! let schema = records[0].schema.as_ref().unwrap();
//! assert_eq!(schema.input_label.as_deref(), Some("limit*"));
//! ```
//!
//! # Record Identity
//!
//! Records are cached per transformer by name, type, enum-ness and required
//! flag, bucketed by binding. Computing the same parameter twice returns the
//! same `Arc`; [`ApiViewModel::clear_cache`] drops every cached record.

mod cache;
mod classify;
mod constraints;
mod error;
mod generator;
mod graph;
mod loader;
mod mapper;
mod model;
mod postprocess;
mod types;
mod values;
pub mod vocab;

pub use cache::{cache_key, ViewModelCache};
pub use classify::{classify_type, datatype_type};
pub use error::{LoadError, ViewModelError};
pub use generator::{AmfExampleGenerator, ExampleGenerator, JSON_MEDIA_TYPE};
pub use graph::{ensure_array, first_of, AmfGraph};
pub use loader::{
    is_url, load_document, load_document_auto, load_document_str, select_node, select_pointer,
};
pub use mapper::{build_property, ApiViewModel, ViewModel};
pub use model::{Example, PropertyRecord, PropertySchema};
pub use postprocess::{has_extended_documentation, process_record, render_extended_documentation};
pub use types::{
    Binding, InputType, LogicalType, ProcessOptions, ViewModelOptions, DEFAULT_MAX_DEPTH,
};
pub use values::{
    complete_label, derive_input_type, derive_pattern, normalize_value, parse_array_example,
    type_placeholder,
};

#[cfg(feature = "remote")]
pub use loader::load_document_url;
