//! View model records produced by the transformer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::types::{Binding, InputType, LogicalType};

/// One form-renderable property.
///
/// Records returned from the transformer are shared (`Arc`) and never
/// mutated afterwards; structurally identical parameters resolve to the
/// same instance until the cache is cleared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<Binding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub required: bool,
    /// Initial form value, only set when one could be derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub has_description: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_description: Option<String>,
    pub has_extended_description: bool,
    /// Child properties of an object type. Children that could not be
    /// mapped are kept as `None` so positions line up with the source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Option<Arc<PropertyRecord>>>>,
    /// Absent when no type shape could be resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<PropertySchema>,
    pub no_auto_encode: bool,
}

impl PropertyRecord {
    /// Logical type, if the record has a typed schema.
    pub fn data_type(&self) -> Option<&LogicalType> {
        self.schema.as_ref()?.data_type.as_ref()
    }
}

/// Type, constraints and presentation hints of a property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertySchema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<LogicalType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    pub is_enum: bool,
    pub is_array: bool,
    /// Logical type of array members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<LogicalType>,
    pub is_bool: bool,
    pub is_file: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_types: Option<Vec<String>>,
    pub is_object: bool,
    pub is_nillable: bool,
    pub is_union: bool,
    pub enabled: bool,
    pub read_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_placeholder: Option<String>,
    pub input_float_label: bool,
}

/// A serialized example value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Example {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub has_title: bool,
}

impl Example {
    /// An untitled example.
    pub fn from_value(value: Value) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// A named example; the name doubles as its title.
    pub fn named(name: impl Into<String>, value: Value) -> Self {
        let name = name.into();
        Self {
            title: Some(name.clone()),
            name: Some(name),
            value: Some(value),
            has_title: true,
        }
    }
}
