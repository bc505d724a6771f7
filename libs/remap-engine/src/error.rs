use remap_api::error::CodecError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Conversion was attempted against a type with no declared field rules.
    #[error("no field rules declared for type '{0}'")]
    MissingMetadata(&'static str),

    #[error("config error: {0}")]
    Config(String),

    #[error("unknown codec: '{0}'")]
    UnknownCodec(String),

    /// Codec failures pass through unwrapped.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl EngineError {
    /// Add context to the error.
    ///
    /// `Codec` is left untouched — transformation failures reach the caller
    /// unmodified. For `Config`, context is prepended to the message.
    pub fn with_context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            EngineError::Config(msg) => EngineError::Config(format!("{ctx}: {msg}")),
            other => other,
        }
    }
}
