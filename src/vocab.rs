//! RDF vocabulary IRIs used by AMF documents.
//!
//! Constants are grouped by namespace. Every class or property the
//! transformer reads is listed here so lookups never spell out IRIs inline.

/// AMF API contract vocabulary (`http://a.ml/vocabularies/apiContract#`).
pub mod api_contract {
    pub const NS: &str = "http://a.ml/vocabularies/apiContract#";
    pub const PARAMETER: &str = "http://a.ml/vocabularies/apiContract#Parameter";
    pub const BINDING: &str = "http://a.ml/vocabularies/apiContract#binding";
    pub const PARAM_NAME: &str = "http://a.ml/vocabularies/apiContract#paramName";
    pub const REQUIRED: &str = "http://a.ml/vocabularies/apiContract#required";
    pub const EXAMPLES: &str = "http://a.ml/vocabularies/apiContract#examples";
}

/// AMF core vocabulary (`http://a.ml/vocabularies/core#`).
pub mod core {
    pub const NS: &str = "http://a.ml/vocabularies/core#";
    pub const NAME: &str = "http://a.ml/vocabularies/core#name";
    pub const DESCRIPTION: &str = "http://a.ml/vocabularies/core#description";
    pub const EXTENSION_NAME: &str = "http://a.ml/vocabularies/core#extensionName";
}

/// AMF document vocabulary (`http://a.ml/vocabularies/document#`).
pub mod document {
    pub const NS: &str = "http://a.ml/vocabularies/document#";
    pub const LINK_TARGET: &str = "http://a.ml/vocabularies/document#link-target";
    pub const CUSTOM_DOMAIN_PROPERTIES: &str =
        "http://a.ml/vocabularies/document#customDomainProperties";
    pub const STRUCTURED_VALUE: &str = "http://a.ml/vocabularies/document#structuredValue";
    pub const RAW: &str = "http://a.ml/vocabularies/document#raw";
}

/// AMF shapes vocabulary (`http://a.ml/vocabularies/shapes#`).
pub mod shapes {
    pub const NS: &str = "http://a.ml/vocabularies/shapes#";
    pub const SCALAR_SHAPE: &str = "http://a.ml/vocabularies/shapes#ScalarShape";
    pub const ARRAY_SHAPE: &str = "http://a.ml/vocabularies/shapes#ArrayShape";
    pub const UNION_SHAPE: &str = "http://a.ml/vocabularies/shapes#UnionShape";
    pub const FILE_SHAPE: &str = "http://a.ml/vocabularies/shapes#FileShape";
    pub const NIL_SHAPE: &str = "http://a.ml/vocabularies/shapes#NilShape";
    pub const MATRIX_SHAPE: &str = "http://a.ml/vocabularies/shapes#MatrixShape";
    pub const TUPLE_SHAPE: &str = "http://a.ml/vocabularies/shapes#TupleShape";
    pub const ANY_SHAPE: &str = "http://a.ml/vocabularies/shapes#AnyShape";
    pub const SCHEMA: &str = "http://a.ml/vocabularies/shapes#schema";
    pub const RANGE: &str = "http://a.ml/vocabularies/shapes#range";
    pub const ITEMS: &str = "http://a.ml/vocabularies/shapes#items";
    pub const ANY_OF: &str = "http://a.ml/vocabularies/shapes#anyOf";
    pub const FILE_TYPE: &str = "http://a.ml/vocabularies/shapes#fileType";
    pub const FORMAT: &str = "http://a.ml/vocabularies/shapes#format";
    pub const MULTIPLE_OF: &str = "http://a.ml/vocabularies/shapes#multipleOf";
    pub const NUMBER: &str = "http://a.ml/vocabularies/shapes#number";
    pub const DATE_TIME_ONLY: &str = "http://a.ml/vocabularies/shapes#dateTimeOnly";
    pub const PASSWORD: &str = "http://a.ml/vocabularies/shapes#password";
}

/// AMF data vocabulary (`http://a.ml/vocabularies/data#`), used by raw
/// annotation values.
pub mod data {
    pub const NS: &str = "http://a.ml/vocabularies/data#";
    pub const OBJECT: &str = "http://a.ml/vocabularies/data#Object";
    pub const SCALAR: &str = "http://a.ml/vocabularies/data#Scalar";
    pub const ARRAY: &str = "http://a.ml/vocabularies/data#Array";
    pub const VALUE: &str = "http://a.ml/vocabularies/data#value";
    pub const TYPE: &str = "http://a.ml/vocabularies/data#type";
    pub const ITEMS: &str = "http://a.ml/vocabularies/data#items";
    pub const REQUIRED: &str = "http://a.ml/vocabularies/data#required";
    pub const DESCRIPTION: &str = "http://a.ml/vocabularies/data#description";
    pub const DISPLAY_NAME: &str = "http://a.ml/vocabularies/data#displayName";
    pub const MIN_LENGTH: &str = "http://a.ml/vocabularies/data#minLength";
    pub const MAX_LENGTH: &str = "http://a.ml/vocabularies/data#maxLength";
    pub const DEFAULT: &str = "http://a.ml/vocabularies/data#default";
    pub const MULTIPLE_OF: &str = "http://a.ml/vocabularies/data#multipleOf";
    pub const MINIMUM: &str = "http://a.ml/vocabularies/data#minimum";
    pub const MAXIMUM: &str = "http://a.ml/vocabularies/data#maximum";
    pub const ENUM: &str = "http://a.ml/vocabularies/data#enum";
    pub const PATTERN: &str = "http://a.ml/vocabularies/data#pattern";
    pub const FORMAT: &str = "http://a.ml/vocabularies/data#format";
    pub const EXAMPLE: &str = "http://a.ml/vocabularies/data#example";
    pub const EXAMPLES: &str = "http://a.ml/vocabularies/data#examples";
}

/// W3C SHACL vocabulary (`http://www.w3.org/ns/shacl#`).
pub mod shacl {
    pub const NS: &str = "http://www.w3.org/ns/shacl#";
    pub const NODE_SHAPE: &str = "http://www.w3.org/ns/shacl#NodeShape";
    pub const PROPERTY_SHAPE: &str = "http://www.w3.org/ns/shacl#PropertyShape";
    pub const PROPERTY: &str = "http://www.w3.org/ns/shacl#property";
    pub const NAME: &str = "http://www.w3.org/ns/shacl#name";
    pub const DATATYPE: &str = "http://www.w3.org/ns/shacl#datatype";
    pub const IN: &str = "http://www.w3.org/ns/shacl#in";
    pub const MIN_COUNT: &str = "http://www.w3.org/ns/shacl#minCount";
    pub const PATTERN: &str = "http://www.w3.org/ns/shacl#pattern";
    pub const MIN_LENGTH: &str = "http://www.w3.org/ns/shacl#minLength";
    pub const MAX_LENGTH: &str = "http://www.w3.org/ns/shacl#maxLength";
    pub const MIN_INCLUSIVE: &str = "http://www.w3.org/ns/shacl#minInclusive";
    pub const MAX_INCLUSIVE: &str = "http://www.w3.org/ns/shacl#maxInclusive";
    pub const DEFAULT_VALUE: &str = "http://www.w3.org/ns/shacl#defaultValue";
    pub const DEFAULT_VALUE_STR: &str = "http://www.w3.org/ns/shacl#defaultValueStr";
}

/// XML Schema datatypes (`http://www.w3.org/2001/XMLSchema#`).
pub mod xsd {
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    pub const TIME: &str = "http://www.w3.org/2001/XMLSchema#time";
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    pub const BASE64_BINARY: &str = "http://www.w3.org/2001/XMLSchema#base64Binary";
}

/// RDF Schema vocabulary (`http://www.w3.org/2000/01/rdf-schema#`).
pub mod rdfs {
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const MEMBER: &str = "http://www.w3.org/2000/01/rdf-schema#member";
}
