use std::any::TypeId;
use std::collections::HashMap;
use std::sync::RwLock;

use remap_api::mapping::{FieldRule, TypeDescriptor};

/// Registry of field mapping rules, keyed by type identity.
///
/// Entries are created lazily on first declaration and never removed. Uses
/// interior mutability so that declarations can happen after the registry
/// has been shared; the lock serializes concurrent declarations, and once
/// declarations are complete conversions take only read locks.
#[derive(Debug, Default)]
pub struct MappingRegistry {
    types: RwLock<HashMap<TypeId, TypeDescriptor>>,
}

impl MappingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `rule` to `T`'s descriptor, creating the descriptor on first
    /// use.
    ///
    /// Rules are not validated: empty and duplicate keys are accepted, and a
    /// duplicate source key is appended without dedup — the last rule wins
    /// during conversion.
    pub fn declare_field<T: 'static>(&self, rule: FieldRule) {
        let mut guard = match self.types.write() {
            Ok(g) => g,
            Err(poisoned) => {
                tracing::warn!("mapping registry write lock was poisoned, recovering");
                poisoned.into_inner()
            }
        };
        guard
            .entry(TypeId::of::<T>())
            .or_insert_with(|| TypeDescriptor::new(std::any::type_name::<T>()))
            .fields
            .push(rule);
    }

    /// Batch declaration.
    ///
    /// An empty iterator still creates the descriptor, so a type declared
    /// with zero rules serializes to an empty map instead of failing.
    pub fn declare<T: 'static>(&self, rules: impl IntoIterator<Item = FieldRule>) {
        let mut guard = match self.types.write() {
            Ok(g) => g,
            Err(poisoned) => {
                tracing::warn!("mapping registry write lock was poisoned, recovering");
                poisoned.into_inner()
            }
        };
        let descriptor = guard
            .entry(TypeId::of::<T>())
            .or_insert_with(|| TypeDescriptor::new(std::any::type_name::<T>()));
        for rule in rules {
            descriptor.fields.push(rule);
        }
    }

    /// The descriptor declared for `T`, or `None` if the type never had a
    /// field declared.
    pub fn descriptor<T: 'static>(&self) -> Option<TypeDescriptor> {
        let guard = match self.types.read() {
            Ok(g) => g,
            Err(poisoned) => {
                tracing::warn!("mapping registry read lock was poisoned, recovering");
                poisoned.into_inner()
            }
        };
        guard.get(&TypeId::of::<T>()).cloned()
    }

    pub fn contains<T: 'static>(&self) -> bool {
        let guard = match self.types.read() {
            Ok(g) => g,
            Err(poisoned) => {
                tracing::warn!("mapping registry read lock was poisoned, recovering");
                poisoned.into_inner()
            }
        };
        guard.contains_key(&TypeId::of::<T>())
    }

    pub fn type_names(&self) -> Vec<&'static str> {
        let guard = match self.types.read() {
            Ok(g) => g,
            Err(poisoned) => {
                tracing::warn!("mapping registry read lock was poisoned, recovering");
                poisoned.into_inner()
            }
        };
        guard.values().map(|d| d.type_name).collect()
    }
}
