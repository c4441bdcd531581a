//! Core types for view model computation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default bound on nested object expansion.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Logical data type of a property, as shown to a form renderer.
///
/// The classifier only ever produces the named variants. `Other` carries
/// free-form type names that arrive through raw annotation objects or
/// hand-built properties (for example `date-only`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogicalType {
    #[default]
    String,
    Integer,
    Long,
    Float,
    Double,
    Number,
    Boolean,
    Date,
    Time,
    DateTime,
    DateTimeOnly,
    Password,
    File,
    Null,
    Array,
    Object,
    Union,
    Other(String),
}

impl LogicalType {
    /// Canonical type name.
    pub fn as_str(&self) -> &str {
        match self {
            LogicalType::String => "string",
            LogicalType::Integer => "integer",
            LogicalType::Long => "long",
            LogicalType::Float => "float",
            LogicalType::Double => "double",
            LogicalType::Number => "number",
            LogicalType::Boolean => "boolean",
            LogicalType::Date => "date",
            LogicalType::Time => "time",
            LogicalType::DateTime => "datetime",
            LogicalType::DateTimeOnly => "datetime-only",
            LogicalType::Password => "password",
            LogicalType::File => "file",
            LogicalType::Null => "null",
            LogicalType::Array => "array",
            LogicalType::Object => "object",
            LogicalType::Union => "union",
            LogicalType::Other(name) => name,
        }
    }

    /// Parse a type name. Unknown names are kept verbatim as `Other`.
    pub fn parse(name: &str) -> Self {
        match name {
            "string" => LogicalType::String,
            "integer" => LogicalType::Integer,
            "long" => LogicalType::Long,
            "float" => LogicalType::Float,
            "double" => LogicalType::Double,
            "number" => LogicalType::Number,
            "boolean" => LogicalType::Boolean,
            "date" => LogicalType::Date,
            "time" => LogicalType::Time,
            "datetime" => LogicalType::DateTime,
            "datetime-only" => LogicalType::DateTimeOnly,
            "password" => LogicalType::Password,
            "file" => LogicalType::File,
            "null" => LogicalType::Null,
            "array" => LogicalType::Array,
            "object" => LogicalType::Object,
            "union" => LogicalType::Union,
            other => LogicalType::Other(other.to_string()),
        }
    }
}

impl From<String> for LogicalType {
    fn from(name: String) -> Self {
        LogicalType::parse(&name)
    }
}

impl From<LogicalType> for String {
    fn from(ty: LogicalType) -> Self {
        ty.as_str().to_string()
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a property value is transmitted.
///
/// `Type` marks a body or nested object field rather than a transport-bound
/// parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Binding {
    Path,
    Query,
    Header,
    Cookie,
    Type,
    Other(String),
}

impl Binding {
    pub fn as_str(&self) -> &str {
        match self {
            Binding::Path => "path",
            Binding::Query => "query",
            Binding::Header => "header",
            Binding::Cookie => "cookie",
            Binding::Type => "type",
            Binding::Other(name) => name,
        }
    }

    pub fn parse(name: &str) -> Self {
        match name {
            "path" => Binding::Path,
            "query" => Binding::Query,
            "header" => Binding::Header,
            "cookie" => Binding::Cookie,
            "type" => Binding::Type,
            other => Binding::Other(other.to_string()),
        }
    }

    /// Separator some example sources put between a parameter name and its
    /// value (`name: value` for headers, `name=value` for query strings).
    pub fn value_delimiter(&self) -> Option<&'static str> {
        match self {
            Binding::Header => Some(":"),
            Binding::Query => Some("="),
            _ => None,
        }
    }

    /// Whether example values arrive URL-encoded.
    pub fn decodes_values(&self) -> bool {
        matches!(self, Binding::Query)
    }
}

impl From<String> for Binding {
    fn from(name: String) -> Self {
        Binding::parse(&name)
    }
}

impl From<Binding> for String {
    fn from(binding: Binding) -> Self {
        binding.as_str().to_string()
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of input control a renderer should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Number,
    Boolean,
    Date,
}

/// Options for view model computation.
#[derive(Debug, Clone)]
pub struct ViewModelOptions {
    /// Leave descriptions out of the model (`hasDescription` is always false).
    pub no_docs: bool,
    /// Maximum nesting of object properties before computation fails.
    pub max_depth: usize,
}

impl ViewModelOptions {
    /// Documentation enabled, default depth bound.
    pub fn new() -> Self {
        Self {
            no_docs: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the no-documentation flag.
    pub fn no_docs(mut self, no_docs: bool) -> Self {
        self.no_docs = no_docs;
        self
    }

    /// Set the nesting bound.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ViewModelOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Options applied when completing a record's value and documentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Property name, stripped from `name<delimiter>value` examples.
    pub name: Option<String>,
    /// `:` for headers, `=` for query parameters.
    pub value_delimiter: Option<String>,
    /// Percent-decode example values.
    pub decode_values: bool,
    pub required: bool,
}

impl ProcessOptions {
    /// Options for a transport-bound parameter.
    pub fn for_binding(binding: Option<&Binding>, name: Option<&str>, required: bool) -> Self {
        Self {
            name: name.map(String::from),
            value_delimiter: binding
                .and_then(Binding::value_delimiter)
                .map(String::from),
            decode_values: binding.is_some_and(Binding::decodes_values),
            required,
        }
    }
}
