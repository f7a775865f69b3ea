//! Owned-object records produced by the object-query normalizer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::call::Primitive;

/// An owned on-chain object reduced to the parts the client displays.
///
/// `object_id` and `object_type` are always present; records missing either
/// never get built. `fields` is empty for listings and filled from object
/// content for detail lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnedObjectSummary {
    pub object_id: String,
    pub object_type: String,
    pub fields: BTreeMap<String, Primitive>,
}

impl OwnedObjectSummary {
    pub fn new(object_id: impl Into<String>, object_type: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            object_type: object_type.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_fields(mut self, fields: BTreeMap<String, Primitive>) -> Self {
        self.fields = fields;
        self
    }

    pub fn field(&self, name: &str) -> Option<&Primitive> {
        self.fields.get(name)
    }

    /// Substring match on the type name, e.g. `::social_creator::AdminCap`.
    pub fn type_contains(&self, fragment: &str) -> bool {
        self.object_type.contains(fragment)
    }
}
