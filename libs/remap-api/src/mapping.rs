use std::fmt;
use std::sync::Arc;

use crate::codec::Codec;

/// One field's mapping contract — source↔serialized link + optional codec.
#[derive(Clone)]
pub struct FieldRule {
    /// Field name on the in-memory record.
    pub source_key: String,
    /// Key in the serialized map. Defaults to `source_key`.
    pub serialized_key: String,
    /// `None` → values pass through unchanged in both directions.
    pub codec: Option<Arc<dyn Codec>>,
}

impl FieldRule {
    pub fn new(source_key: impl Into<String>) -> Self {
        let source_key = source_key.into();
        Self {
            serialized_key: source_key.clone(),
            source_key,
            codec: None,
        }
    }

    /// Store the field under a different key in the serialized form.
    pub fn renamed(mut self, serialized_key: impl Into<String>) -> Self {
        self.serialized_key = serialized_key.into();
        self
    }

    pub fn with_codec(self, codec: impl Codec + 'static) -> Self {
        self.with_shared_codec(Arc::new(codec))
    }

    pub fn with_shared_codec(mut self, codec: Arc<dyn Codec>) -> Self {
        self.codec = Some(codec);
        self
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("source_key", &self.source_key)
            .field("serialized_key", &self.serialized_key)
            .field("codec", &self.codec.is_some())
            .finish()
    }
}

/// Ordered field rules declared for one type.
///
/// Order is declaration order and determines both the key order of the
/// produced serialized map and, for duplicate source keys, which rule runs
/// last. Rules are never inherited from other types.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Diagnostic name of the type the rules belong to.
    pub type_name: &'static str,
    pub fields: Vec<FieldRule>,
}

impl TypeDescriptor {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
