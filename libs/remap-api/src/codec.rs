use std::fmt;
use std::sync::Arc;

use crate::error::CodecError;
use crate::value::Value;

/// Field-level value transformation.
///
/// `encode` runs on serialize (in-memory → serialized), `decode` on
/// deserialize (serialized → in-memory). Both default to identity, so an
/// implementation may override a single direction.
///
/// Failures surface to the caller of the conversion unmodified — the engine
/// never wraps, retries, or suppresses them.
pub trait Codec: Send + Sync {
    fn encode(&self, value: Value) -> Result<Value, CodecError> {
        Ok(value)
    }

    fn decode(&self, value: Value) -> Result<Value, CodecError> {
        Ok(value)
    }
}

/// Named codec lookup, used when applying mapping profiles.
///
/// Registering a name twice replaces the earlier codec.
#[derive(Clone, Default)]
pub struct CodecSet {
    entries: Vec<(String, Arc<dyn Codec>)>,
}

impl CodecSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, codec: Arc<dyn Codec>) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == &name) {
            entry.1 = codec;
        } else {
            self.entries.push((name, codec));
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Codec>> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, c)| Arc::clone(c))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl fmt::Debug for CodecSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
