//! Shape classification into logical property types.

use serde_json::Value;

use crate::graph::AmfGraph;
use crate::types::LogicalType;
use crate::vocab::{shacl, shapes, xsd};

/// Shape classes checked in order; the first match wins.
///
/// AMF shapes routinely carry several of these classes at once (a union is
/// also an `AnyShape`, a node shape is also a `shacl:Shape`...), so the
/// order here is observable.
const CLASS_RULES: &[(&str, LogicalType)] = &[
    (shapes::UNION_SHAPE, LogicalType::Union),
    (shapes::ARRAY_SHAPE, LogicalType::Array),
    (shacl::NODE_SHAPE, LogicalType::Object),
    (shacl::PROPERTY_SHAPE, LogicalType::Object),
    (shapes::FILE_SHAPE, LogicalType::File),
    (shapes::NIL_SHAPE, LogicalType::Null),
    (shapes::MATRIX_SHAPE, LogicalType::Array),
    (shapes::TUPLE_SHAPE, LogicalType::Object),
];

/// Scalar datatypes. Anything else under a scalar shape is a string.
const DATATYPE_RULES: &[(&str, LogicalType)] = &[
    (xsd::STRING, LogicalType::String),
    (xsd::INTEGER, LogicalType::Integer),
    (xsd::LONG, LogicalType::Long),
    (xsd::FLOAT, LogicalType::Float),
    (xsd::DOUBLE, LogicalType::Double),
    (shapes::NUMBER, LogicalType::Number),
    (xsd::BOOLEAN, LogicalType::Boolean),
    (xsd::DATE_TIME, LogicalType::DateTime),
    (shapes::DATE_TIME_ONLY, LogicalType::DateTimeOnly),
    (xsd::TIME, LogicalType::Time),
    (xsd::DATE, LogicalType::Date),
    (xsd::BASE64_BINARY, LogicalType::String),
    (shapes::PASSWORD, LogicalType::Password),
];

/// Datatypes whose literals are coerced to numbers.
const NUMERIC_DATATYPES: &[&str] = &[
    xsd::INTEGER,
    xsd::LONG,
    xsd::FLOAT,
    xsd::DOUBLE,
    shapes::NUMBER,
];

/// Classify a resolved type shape. Missing or unrecognized shapes are strings.
pub fn classify_type(graph: &AmfGraph, shape: Option<&Value>) -> LogicalType {
    let Some(shape) = shape else {
        return LogicalType::String;
    };
    for (class, ty) in CLASS_RULES {
        if graph.has_type(shape, class) {
            tracing::trace!(class, ty = %ty, "classified shape");
            return ty.clone();
        }
    }
    if graph.has_type(shape, shapes::SCALAR_SHAPE) {
        if let Some(datatype) = graph.iri_value(shape, shacl::DATATYPE) {
            return datatype_type(&datatype);
        }
    }
    LogicalType::String
}

/// Map an absolute datatype IRI to a logical type.
pub fn datatype_type(datatype: &str) -> LogicalType {
    DATATYPE_RULES
        .iter()
        .find(|(iri, _)| *iri == datatype)
        .map(|(_, ty)| ty.clone())
        .unwrap_or_default()
}

/// Whether literals of this datatype are numbers.
pub fn is_numeric_datatype(datatype: &str) -> bool {
    NUMERIC_DATATYPES.contains(&datatype)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn typed(class: &str) -> Value {
        json!({ "@type": [class] })
    }

    fn scalar(datatype: &str) -> Value {
        json!({
            "@type": [shapes::SCALAR_SHAPE],
            (shacl::DATATYPE): [{ "@id": datatype }]
        })
    }

    #[test]
    fn missing_shape_is_string() {
        let graph = AmfGraph::default();
        assert_eq!(classify_type(&graph, None), LogicalType::String);
        assert_eq!(classify_type(&graph, Some(&json!({}))), LogicalType::String);
    }

    #[test]
    fn shape_classes() {
        let graph = AmfGraph::default();
        let cases = [
            (shapes::UNION_SHAPE, LogicalType::Union),
            (shapes::ARRAY_SHAPE, LogicalType::Array),
            (shacl::NODE_SHAPE, LogicalType::Object),
            (shacl::PROPERTY_SHAPE, LogicalType::Object),
            (shapes::FILE_SHAPE, LogicalType::File),
            (shapes::NIL_SHAPE, LogicalType::Null),
            (shapes::ANY_SHAPE, LogicalType::String),
            (shapes::MATRIX_SHAPE, LogicalType::Array),
            (shapes::TUPLE_SHAPE, LogicalType::Object),
        ];
        for (class, expected) in cases {
            assert_eq!(
                classify_type(&graph, Some(&typed(class))),
                expected,
                "class {}",
                class
            );
        }
    }

    #[test]
    fn union_wins_over_other_classes() {
        let graph = AmfGraph::default();
        let shape = json!({
            "@type": [shacl::NODE_SHAPE, shapes::ARRAY_SHAPE, shapes::UNION_SHAPE]
        });
        assert_eq!(classify_type(&graph, Some(&shape)), LogicalType::Union);

        let shape = json!({ "@type": [shapes::NIL_SHAPE, shapes::FILE_SHAPE] });
        assert_eq!(classify_type(&graph, Some(&shape)), LogicalType::File);
    }

    #[test]
    fn scalar_datatypes() {
        let graph = AmfGraph::default();
        let cases = [
            (shapes::NUMBER, LogicalType::Number),
            (xsd::INTEGER, LogicalType::Integer),
            (xsd::STRING, LogicalType::String),
            (xsd::BOOLEAN, LogicalType::Boolean),
            (xsd::DATE, LogicalType::Date),
            (xsd::TIME, LogicalType::Time),
            (xsd::DATE_TIME, LogicalType::DateTime),
            (shapes::DATE_TIME_ONLY, LogicalType::DateTimeOnly),
            (xsd::FLOAT, LogicalType::Float),
            (xsd::LONG, LogicalType::Long),
            (xsd::DOUBLE, LogicalType::Double),
            (xsd::BASE64_BINARY, LogicalType::String),
            (shapes::PASSWORD, LogicalType::Password),
            ("UNKNOWN", LogicalType::String),
        ];
        for (datatype, expected) in cases {
            assert_eq!(
                classify_type(&graph, Some(&scalar(datatype))),
                expected,
                "datatype {}",
                datatype
            );
        }
    }

    #[test]
    fn compact_datatype_is_expanded() {
        let doc = json!({
            "@context": {
                "xsd": "http://www.w3.org/2001/XMLSchema#",
                "raml-shapes": "http://a.ml/vocabularies/shapes#",
                "shacl": "http://www.w3.org/ns/shacl#"
            }
        });
        let graph = AmfGraph::new(&doc);
        let shape = json!({
            "@type": ["raml-shapes:ScalarShape"],
            "shacl:datatype": [{ "@id": "xsd:boolean" }]
        });
        assert_eq!(classify_type(&graph, Some(&shape)), LogicalType::Boolean);
    }

    #[test]
    fn numeric_datatypes() {
        assert!(is_numeric_datatype(xsd::INTEGER));
        assert!(is_numeric_datatype(shapes::NUMBER));
        assert!(!is_numeric_datatype(xsd::BOOLEAN));
        assert!(!is_numeric_datatype(xsd::STRING));
    }
}
