//! Identity cache for computed records.
//!
//! Parameters are keyed by name, type, enum-ness and required flag, and
//! bucketed by binding (`query`, `path`, everything else). The first record
//! stored under a key is the one every later lookup returns, even if a later
//! shape with the same key carries different constraints.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::PropertyRecord;
use crate::types::{Binding, LogicalType};

/// Composite key `<name>-<type>[-enum][-required]`.
pub fn cache_key(
    name: Option<&str>,
    data_type: &LogicalType,
    is_enum: bool,
    required: bool,
) -> String {
    let mut key = format!("{}-{}", name.unwrap_or_default(), data_type);
    if is_enum {
        key.push_str("-enum");
    }
    if required {
        key.push_str("-required");
    }
    key
}

/// Records already computed by one transformer.
#[derive(Debug, Default)]
pub struct ViewModelCache {
    path: HashMap<String, Arc<PropertyRecord>>,
    query: HashMap<String, Arc<PropertyRecord>>,
    other: HashMap<String, Arc<PropertyRecord>>,
}

impl ViewModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, binding: Option<&Binding>, key: &str) -> Option<Arc<PropertyRecord>> {
        self.bucket(binding).get(key).cloned()
    }

    /// Store a record unless the key is already taken.
    pub fn insert(&mut self, binding: Option<&Binding>, key: String, record: Arc<PropertyRecord>) {
        self.bucket_mut(binding).entry(key).or_insert(record);
    }

    /// Empty all buckets.
    pub fn clear(&mut self) {
        self.path.clear();
        self.query.clear();
        self.other.clear();
    }

    pub fn len(&self) -> usize {
        self.path.len() + self.query.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bucket(&self, binding: Option<&Binding>) -> &HashMap<String, Arc<PropertyRecord>> {
        match binding {
            Some(Binding::Path) => &self.path,
            Some(Binding::Query) => &self.query,
            _ => &self.other,
        }
    }

    fn bucket_mut(
        &mut self,
        binding: Option<&Binding>,
    ) -> &mut HashMap<String, Arc<PropertyRecord>> {
        match binding {
            Some(Binding::Path) => &mut self.path,
            Some(Binding::Query) => &mut self.query,
            _ => &mut self.other,
        }
    }
}
