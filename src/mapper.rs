//! AMF shapes to form view model records.

use std::cell::RefCell;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::cache::{cache_key, ViewModelCache};
use crate::classify::classify_type;
use crate::constraints::{
    array_items, compute_enum, default_value, has_no_auto_encode, is_data_key, is_nillable,
    local_name, raw_examples, raw_model_value, raw_pattern,
};
use crate::error::ViewModelError;
use crate::generator::{AmfExampleGenerator, ExampleGenerator, JSON_MEDIA_TYPE};
use crate::graph::{ensure_array, first_of, AmfGraph};
use crate::model::{Example, PropertyRecord, PropertySchema};
use crate::postprocess::process_record;
use crate::types::{Binding, LogicalType, ProcessOptions, ViewModelOptions};
use crate::values::{
    as_number, as_u64, complete_label, derive_input_type, derive_pattern, is_truthy,
};
use crate::vocab::{api_contract, core, data, shacl, shapes};

/// Computed records, in source order.
pub type ViewModel = Vec<Arc<PropertyRecord>>;

/// Transforms AMF shapes of one document into view model records.
///
/// Parameters and property shapes are cached by name, type, enum-ness and
/// required flag; a second shape with the same key yields the very same
/// record. Call [`clear_cache`](Self::clear_cache) before reusing the
/// transformer for another document.
pub struct ApiViewModel {
    graph: AmfGraph,
    options: ViewModelOptions,
    generator: Box<dyn ExampleGenerator>,
    cache: RefCell<ViewModelCache>,
}

impl ApiViewModel {
    pub fn new(graph: AmfGraph) -> Self {
        Self::with_options(graph, ViewModelOptions::default())
    }

    pub fn with_options(graph: AmfGraph, options: ViewModelOptions) -> Self {
        Self {
            graph,
            options,
            generator: Box::new(AmfExampleGenerator),
            cache: RefCell::new(ViewModelCache::new()),
        }
    }

    /// Replace the example generator.
    pub fn with_example_generator(mut self, generator: impl ExampleGenerator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    pub fn graph(&self) -> &AmfGraph {
        &self.graph
    }

    pub fn options(&self) -> &ViewModelOptions {
        &self.options
    }

    /// Forget every cached record.
    pub fn clear_cache(&mut self) {
        self.cache.get_mut().clear();
    }

    /// Number of cached records.
    pub fn cached_records(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Compute the view model of a shape.
    ///
    /// Accepts a list of parameters or property shapes, a node shape, a
    /// scalar shape, a union shape or a raw `data:Object`. Anything else
    /// yields an empty model; a missing or `null` shape yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewModelError::MaxDepthExceeded`] when nested object
    /// properties go deeper than [`ViewModelOptions::max_depth`].
    pub fn compute_view_model(&self, shape: Option<&Value>) -> Result<Option<ViewModel>, ViewModelError> {
        let Some(shape) = shape.filter(|s| !s.is_null()) else {
            return Ok(None);
        };
        if let Value::Array(items) = shape {
            let mut model = Vec::with_capacity(items.len());
            for item in items {
                if let Some(record) = self.map_amf_item(item, 0)? {
                    model.push(record);
                }
            }
            return Ok(Some(model));
        }

        let shape = self.graph.resolve(shape);
        let model = if self.graph.has_type(shape, data::OBJECT) {
            self.model_for_raw_object(shape, &ProcessOptions::default())
        } else if self.graph.has_type(shape, shacl::NODE_SHAPE) {
            self.model_for_properties(shape, 1)?
        } else if self.graph.has_type(shape, shapes::SCALAR_SHAPE) {
            vec![self.map_property_shape(shape, 0)?]
        } else if self.graph.has_type(shape, shapes::UNION_SHAPE) {
            self.model_for_union(shape)?
        } else {
            trace!("shape has no view model");
            Vec::new()
        };
        Ok(Some(model))
    }

    /// Map a single parameter or property shape. Other items yield `None`.
    pub fn map_amf_item(&self, item: &Value, depth: usize) -> Result<Option<Arc<PropertyRecord>>, ViewModelError> {
        let item = self.graph.resolve(item);
        if self.graph.has_type(item, api_contract::PARAMETER) {
            Ok(Some(self.map_parameter(item)))
        } else if self.graph.has_type(item, shacl::PROPERTY_SHAPE) {
            self.map_property_shape(item, depth).map(Some)
        } else {
            trace!(id = ?self.graph.id_of(item), "item is neither a parameter nor a property shape");
            Ok(None)
        }
    }

    /// Records for the data-vocabulary keys of a raw annotation object,
    /// each completed with `opts`. Not cached.
    pub fn model_for_raw_object(&self, model: &Value, opts: &ProcessOptions) -> ViewModel {
        let Some(object) = first_of(model).and_then(Value::as_object) else {
            return Vec::new();
        };
        let compact = self.graph.key_for(data::NS);
        object
            .iter()
            .filter(|(key, _)| is_data_key(key, &compact))
            .map(|(key, value)| {
                let mut record = self.raw_record(local_name(key), first_of(value).unwrap_or(value));
                process_record(&mut record, opts);
                Arc::new(record)
            })
            .collect()
    }

    fn model_for_properties(&self, shape: &Value, depth: usize) -> Result<ViewModel, ViewModelError> {
        let mut model = Vec::new();
        let Some(properties) = self.graph.edge(shape, shacl::PROPERTY) else {
            return Ok(model);
        };
        for property in ensure_array(properties) {
            if let Some(record) = self.map_amf_item(property, depth)? {
                model.push(record);
            }
        }
        Ok(model)
    }

    fn model_for_union(&self, shape: &Value) -> Result<ViewModel, ViewModelError> {
        let mut model = Vec::new();
        let Some(members) = self.graph.edge(shape, shapes::ANY_OF) else {
            return Ok(model);
        };
        for member in ensure_array(members) {
            let member = self.graph.resolve(member);
            model.extend(self.model_for_properties(member, 1)?);
        }
        Ok(model)
    }

    fn map_parameter(&self, item: &Value) -> Arc<PropertyRecord> {
        let graph = &self.graph;
        let name = graph
            .string_value(item, api_contract::PARAM_NAME)
            .or_else(|| graph.string_value(item, core::NAME));
        let required = graph
            .value(item, api_contract::REQUIRED)
            .is_some_and(is_truthy);
        let mut record = PropertyRecord {
            binding: graph.string_value(item, api_contract::BINDING).map(Binding::from),
            name,
            required,
            ..PropertyRecord::default()
        };

        let opts = ProcessOptions::for_binding(record.binding.as_ref(), record.name.as_deref(), required);
        let Some(def) = graph.first(item, shapes::SCHEMA).map(|s| graph.resolve(s)) else {
            debug!(name = ?record.name, "parameter has no schema");
            record.schema = Some(PropertySchema::default());
            self.apply_description(&mut record, item);
            process_record(&mut record, &opts);
            return Arc::new(record);
        };

        let data_type = classify_type(graph, Some(def));
        let is_enum = graph.has_property(def, shacl::IN);
        let key = cache_key(record.name.as_deref(), &data_type, is_enum, required);
        if let Some(hit) = self.cache.borrow().get(record.binding.as_ref(), &key) {
            debug!(%key, "parameter cache hit");
            return hit;
        }

        let mut schema = self.extract_schema(def, &data_type, record.name.as_deref(), required);
        schema.is_enum = is_enum;
        record.schema = Some(schema);
        self.apply_description(&mut record, item);

        process_record(&mut record, &opts);
        record.no_auto_encode = has_no_auto_encode(graph, item);

        self.remember(key, record)
    }

    fn map_property_shape(&self, item: &Value, depth: usize) -> Result<Arc<PropertyRecord>, ViewModelError> {
        let graph = &self.graph;
        let item = graph.resolve(item);
        let mut record = PropertyRecord {
            binding: Some(Binding::Type),
            name: graph.string_value(item, shacl::NAME),
            ..PropertyRecord::default()
        };

        let def = if graph.has_type(item, shapes::SCALAR_SHAPE) {
            item
        } else {
            match graph.first(item, shapes::RANGE) {
                Some(range) => graph.resolve(range),
                None => {
                    debug!(name = ?record.name, "property shape has no range");
                    return Ok(Arc::new(record));
                }
            }
        };
        record.required = graph
            .value(item, shacl::MIN_COUNT)
            .and_then(Value::as_f64)
            == Some(1.0);

        let data_type = classify_type(graph, Some(def));
        let is_enum = graph.has_property(def, shacl::IN);
        let key = cache_key(record.name.as_deref(), &data_type, is_enum, record.required);
        if let Some(hit) = self.cache.borrow().get(record.binding.as_ref(), &key) {
            debug!(%key, "property cache hit");
            return Ok(hit);
        }

        let mut schema = self.extract_schema(def, &data_type, record.name.as_deref(), record.required);
        schema.is_enum = schema.enum_values.is_some();
        if data_type == LogicalType::File {
            schema.is_file = true;
            schema.file_types = graph.value_array(def, shapes::FILE_TYPE).map(|types| {
                types
                    .into_iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            });
        }
        if data_type == LogicalType::Object {
            record.properties = Some(self.child_properties(def, depth, record.name.as_deref())?);
        }
        record.schema = Some(schema);
        self.apply_description(&mut record, def);
        process_record(&mut record, &ProcessOptions::default());

        Ok(self.remember(key, record))
    }

    fn child_properties(
        &self,
        def: &Value,
        depth: usize,
        name: Option<&str>,
    ) -> Result<Vec<Option<Arc<PropertyRecord>>>, ViewModelError> {
        let Some(properties) = self.graph.edge(def, shacl::PROPERTY) else {
            return Ok(Vec::new());
        };
        let properties = ensure_array(properties);
        if !properties.is_empty() && depth >= self.options.max_depth {
            warn!(depth, ?name, "maximum property depth exceeded");
            return Err(ViewModelError::MaxDepthExceeded {
                depth: self.options.max_depth,
                name: name.map(String::from),
            });
        }
        properties
            .iter()
            .map(|child| self.map_amf_item(child, depth + 1))
            .collect()
    }

    /// Schema fields shared by parameters and property shapes.
    fn extract_schema(
        &self,
        def: &Value,
        data_type: &LogicalType,
        name: Option<&str>,
        required: bool,
    ) -> PropertySchema {
        let graph = &self.graph;
        let is_array = *data_type == LogicalType::Array;
        let items = if is_array { array_items(graph, def) } else { None };
        let format = graph.string_value(def, shapes::FORMAT);
        let display_name = graph.string_value(def, core::NAME);
        let explicit_pattern = graph.string_value(def, shacl::PATTERN);

        PropertySchema {
            input_label: Some(complete_label(display_name.as_deref(), name, required)),
            min_length: graph.value(def, shacl::MIN_LENGTH).and_then(as_u64),
            max_length: graph.value(def, shacl::MAX_LENGTH).and_then(as_u64),
            default_value: default_value(graph, def),
            multiple_of: graph.value(def, shapes::MULTIPLE_OF).and_then(as_number),
            minimum: graph.value(def, shacl::MIN_INCLUSIVE).and_then(as_number),
            maximum: graph.value(def, shacl::MAX_INCLUSIVE).and_then(as_number),
            enum_values: compute_enum(graph, def),
            is_array,
            is_bool: *data_type == LogicalType::Boolean,
            is_object: *data_type == LogicalType::Object,
            is_union: *data_type == LogicalType::Union,
            is_nillable: *data_type == LogicalType::Union && is_nillable(graph, def),
            examples: self.generator.compute_examples(graph, def, JSON_MEDIA_TYPE),
            input_type: Some(derive_input_type(data_type, items.as_ref())),
            pattern: derive_pattern(data_type, explicit_pattern.as_deref(), format.as_deref()),
            items,
            format,
            enabled: true,
            data_type: Some(data_type.clone()),
            ..PropertySchema::default()
        }
    }

    fn raw_record(&self, name: &str, model: &Value) -> PropertyRecord {
        let graph = &self.graph;
        let raw = |iri: &str| graph.edge(model, iri).and_then(|v| raw_model_value(graph, v));
        let text = |iri: &str| raw(iri).and_then(|v| v.as_str().map(String::from));

        let type_name = text(data::TYPE)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| LogicalType::String.to_string());
        let (data_type, bracket_items) = match type_name.find("[]") {
            Some(index) => (LogicalType::Array, Some(LogicalType::parse(&type_name[..index]))),
            None => (LogicalType::parse(&type_name), None),
        };
        let required = raw(data::REQUIRED).is_some_and(|v| is_truthy(&v));
        let enum_values = raw(data::ENUM).map(|v| match v {
            Value::Array(values) => values,
            other => vec![other],
        });
        let is_array = data_type == LogicalType::Array;
        let items = if is_array {
            bracket_items.or_else(|| text(data::ITEMS).map(|t| LogicalType::parse(&t)))
        } else {
            None
        };
        let format = text(data::FORMAT);
        let explicit_pattern = raw(data::PATTERN).and_then(|p| raw_pattern(&p));

        let mut examples: Vec<Example> = raw(data::EXAMPLE)
            .filter(is_truthy)
            .map(Example::from_value)
            .into_iter()
            .collect();
        if let Some(named) = graph.edge(model, data::EXAMPLES).and_then(|e| raw_examples(graph, e)) {
            examples.extend(named);
        }

        let schema = PropertySchema {
            input_label: Some(complete_label(text(data::DISPLAY_NAME).as_deref(), Some(name), required)),
            min_length: raw(data::MIN_LENGTH).as_ref().and_then(as_u64),
            max_length: raw(data::MAX_LENGTH).as_ref().and_then(as_u64),
            default_value: raw(data::DEFAULT),
            multiple_of: raw(data::MULTIPLE_OF).as_ref().and_then(as_number),
            minimum: raw(data::MINIMUM).as_ref().and_then(as_number),
            maximum: raw(data::MAXIMUM).as_ref().and_then(as_number),
            is_enum: enum_values.is_some(),
            enum_values,
            is_array,
            is_bool: data_type == LogicalType::Boolean,
            is_object: data_type == LogicalType::Object,
            input_type: Some(derive_input_type(&data_type, items.as_ref())),
            pattern: derive_pattern(&data_type, explicit_pattern.as_deref(), format.as_deref()),
            examples: if examples.is_empty() { None } else { Some(examples) },
            items,
            format,
            enabled: true,
            data_type: Some(data_type),
            ..PropertySchema::default()
        };

        let mut record = PropertyRecord {
            binding: Some(Binding::Type),
            name: Some(name.to_string()),
            required,
            schema: Some(schema),
            ..PropertyRecord::default()
        };
        if !self.options.no_docs {
            record.description = text(data::DESCRIPTION);
            record.has_description = record.description.as_deref().is_some_and(|d| !d.is_empty());
        }
        record
    }

    fn apply_description(&self, record: &mut PropertyRecord, node: &Value) {
        if self.options.no_docs {
            return;
        }
        record.description = self.graph.string_value(node, core::DESCRIPTION);
        record.has_description = record.description.as_deref().is_some_and(|d| !d.is_empty());
    }

    fn remember(&self, key: String, record: PropertyRecord) -> Arc<PropertyRecord> {
        let record = Arc::new(record);
        self.cache
            .borrow_mut()
            .insert(record.binding.as_ref(), key, Arc::clone(&record));
        record
    }
}

/// Complete a partially specified record the way computed records are
/// completed: the type defaults to `string`, type flags, input hints and
/// label are derived, then value and documentation are filled in.
pub fn build_property(defaults: PropertyRecord) -> PropertyRecord {
    let mut record = defaults;
    let schema = record.schema.get_or_insert_with(PropertySchema::default);
    let data_type = schema.data_type.get_or_insert(LogicalType::String).clone();

    schema.is_file = data_type == LogicalType::File;
    schema.is_array |= data_type == LogicalType::Array;
    schema.is_bool |= data_type == LogicalType::Boolean;
    schema.is_object |= data_type == LogicalType::Object;
    schema.is_union |= data_type == LogicalType::Union;
    schema.enabled = true;
    schema.input_float_label |= schema.input_placeholder.is_some();
    schema.input_type = Some(derive_input_type(&data_type, schema.items.as_ref()));
    schema.pattern = derive_pattern(&data_type, schema.pattern.as_deref(), schema.format.as_deref());
    if schema.input_label.is_none() {
        schema.input_label = Some(complete_label(None, record.name.as_deref(), record.required));
    }
    record.has_description = record.description.as_deref().is_some_and(|d| !d.is_empty());

    process_record(&mut record, &ProcessOptions::default());
    record
}
