use serde::Deserialize;

use remap_api::codec::CodecSet;
use remap_api::mapping::FieldRule;

use crate::error::EngineError;
use crate::registry::MappingRegistry;

/// Declarative mapping profiles, loaded from TOML.
///
/// ```toml
/// [[mapping]]
/// type = "Account"
///
/// [[mapping.field]]
/// source = "id"
///
/// [[mapping.field]]
/// source = "created_date"
/// serialized = "createdDate"
/// codec = "timestamp-iso8601"
/// ```
///
/// A profile is named, not typed: the application binds each profile to a
/// concrete Rust type when applying it.
#[derive(Debug, Deserialize)]
pub struct MappingConfig {
    #[serde(default, rename = "mapping")]
    pub mappings: Vec<TypeMapping>,
}

/// Field rules declared for one named profile.
#[derive(Debug, Deserialize)]
pub struct TypeMapping {
    #[serde(rename = "type")]
    pub name: String,
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldSpec>,
}

/// One field declaration in a profile.
#[derive(Debug, Deserialize)]
pub struct FieldSpec {
    pub source: String,
    /// Defaults to `source`.
    pub serialized: Option<String>,
    /// Codec name, resolved against the `CodecSet` at apply time.
    pub codec: Option<String>,
}

impl MappingConfig {
    /// Load mapping profiles from a TOML file.
    pub fn load(path: &str) -> Result<Self, EngineError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| EngineError::Config(format!("{path}: {e}")))?;
        Self::parse(&content)
    }

    /// Parse mapping profiles from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, EngineError> {
        toml::from_str(toml_str).map_err(|e| EngineError::Config(e.to_string()))
    }

    /// Profile lookup by declared name.
    pub fn mapping(&self, name: &str) -> Option<&TypeMapping> {
        self.mappings.iter().find(|m| m.name == name)
    }
}

impl TypeMapping {
    /// Declare this profile's rules for `T`.
    ///
    /// Codec names are resolved first — an unknown name fails before
    /// anything is declared for the type.
    pub fn apply<T: 'static>(
        &self,
        registry: &MappingRegistry,
        codecs: &CodecSet,
    ) -> Result<(), EngineError> {
        let mut rules = Vec::with_capacity(self.fields.len());
        for spec in &self.fields {
            let mut rule = FieldRule::new(spec.source.clone());
            if let Some(serialized) = &spec.serialized {
                rule = rule.renamed(serialized.clone());
            }
            if let Some(name) = &spec.codec {
                let codec = codecs
                    .get(name)
                    .ok_or_else(|| EngineError::UnknownCodec(name.clone()))?;
                rule = rule.with_shared_codec(codec);
            }
            rules.push(rule);
        }
        let count = rules.len();
        registry.declare::<T>(rules);
        tracing::info!(
            ty = std::any::type_name::<T>(),
            profile = %self.name,
            fields = count,
            "applied mapping profile"
        );
        Ok(())
    }
}
