use std::any::TypeId;
use std::sync::Arc;

use remap_api::record::Record;
use remap_api::value::{SerializedMap, Value};

use crate::error::EngineError;
use crate::registry::MappingRegistry;

/// Bidirectional record ↔ serialized-map converter.
///
/// Holds the shared registry handle and the ordered list of types it was
/// declared for. The bound list is a declaration surface only — lookups
/// always use the type actually passed. Conversion is stateless: every call
/// reads the registry fresh.
pub struct Converter {
    registry: Arc<MappingRegistry>,
    bound: Vec<(TypeId, &'static str)>,
}

impl Converter {
    pub fn new(registry: Arc<MappingRegistry>) -> Self {
        Self {
            registry,
            bound: Vec::new(),
        }
    }

    /// Add `T` to the converter's declared type list.
    pub fn bind<T: Record>(mut self) -> Self {
        tracing::debug!(ty = std::any::type_name::<T>(), "bound type to converter");
        self.bound.push((TypeId::of::<T>(), std::any::type_name::<T>()));
        self
    }

    /// Names of the types declared at construction, in bind order.
    pub fn bound_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bound.iter().map(|(_, name)| *name)
    }

    fn check_bound<T: 'static>(&self) {
        if !self.bound.is_empty() && !self.bound.iter().any(|(id, _)| *id == TypeId::of::<T>()) {
            tracing::debug!(
                ty = std::any::type_name::<T>(),
                "converting type not in the converter's bound list"
            );
        }
    }

    /// Turn a record into its serialized map.
    ///
    /// Fields are processed in declaration order: read the source field
    /// (absent ⇒ `Null`), run the rule's codec if present, store under the
    /// serialized key. A later rule with the same serialized key overwrites
    /// the earlier entry. The result contains exactly the keys the rules
    /// produce — a zero-rule descriptor yields an empty map.
    pub fn serialize<T: Record>(&self, record: &T) -> Result<SerializedMap, EngineError> {
        self.check_bound::<T>();
        let descriptor = self
            .registry
            .descriptor::<T>()
            .ok_or_else(|| EngineError::MissingMetadata(std::any::type_name::<T>()))?;

        let mut map = SerializedMap::new();
        for rule in &descriptor.fields {
            let value = record.get(&rule.source_key).unwrap_or(Value::Null);
            let value = match &rule.codec {
                Some(codec) => codec.encode(value)?,
                None => value,
            };
            map.set(rule.serialized_key.clone(), value);
        }
        tracing::trace!(
            ty = descriptor.type_name,
            fields = descriptor.fields.len(),
            "serialized record"
        );
        Ok(map)
    }

    /// Populate a fresh `T::default()` from a serialized map.
    ///
    /// Fields are processed in declaration order: read the serialized key
    /// (absent ⇒ `Null`), run the rule's codec if present, assign to the
    /// source field. Keys not mapped by any rule are silently ignored;
    /// fields not covered by a rule keep their default state.
    pub fn deserialize<T: Record>(&self, map: &SerializedMap) -> Result<T, EngineError> {
        self.check_bound::<T>();
        let descriptor = self
            .registry
            .descriptor::<T>()
            .ok_or_else(|| EngineError::MissingMetadata(std::any::type_name::<T>()))?;

        let mut record = T::default();
        for rule in &descriptor.fields {
            let value = map.get(&rule.serialized_key).cloned().unwrap_or(Value::Null);
            let value = match &rule.codec {
                Some(codec) => codec.decode(value)?,
                None => value,
            };
            record.set(&rule.source_key, value);
        }
        tracing::trace!(
            ty = descriptor.type_name,
            fields = descriptor.fields.len(),
            "deserialized record"
        );
        Ok(record)
    }
}
