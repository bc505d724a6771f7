//! Mapping profile loading and application.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use remap_api::codec::CodecSet;
use remap_api::value::Value;
use remap_api::Record;
use remap_engine::config::MappingConfig;
use remap_engine::convert::Converter;
use remap_engine::error::EngineError;
use remap_engine::registry::MappingRegistry;

#[derive(Record, Debug, Clone, PartialEq)]
struct Account {
    id: String,
    created_date: DateTime<Utc>,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            id: String::new(),
            created_date: DateTime::UNIX_EPOCH,
        }
    }
}

const PROFILE: &str = r#"
[[mapping]]
type = "Account"

[[mapping.field]]
source = "id"

[[mapping.field]]
source = "created_date"
serialized = "createdDate"
codec = "timestamp-iso8601"
"#;

#[test]
fn profile_applies_and_round_trips() {
    let config = MappingConfig::parse(PROFILE).unwrap();
    let registry = Arc::new(MappingRegistry::new());
    config
        .mapping("Account")
        .unwrap()
        .apply::<Account>(&registry, &remap_codecs::builtins())
        .unwrap();
    assert!(registry.contains::<Account>());

    let converter = Converter::new(Arc::clone(&registry)).bind::<Account>();
    let account = Account {
        id: "asdf".into(),
        created_date: DateTime::from_timestamp_micros(1_700_000_000_000_000).unwrap(),
    };
    let map = converter.serialize(&account).unwrap();
    assert!(matches!(map.get("createdDate"), Some(Value::String(_))));

    let back: Account = converter.deserialize(&map).unwrap();
    assert_eq!(back, account);
}

#[test]
fn unknown_codec_is_rejected_before_declaring() {
    let config = MappingConfig::parse(
        r#"
[[mapping]]
type = "Account"

[[mapping.field]]
source = "created_date"
codec = "no-such-codec"
"#,
    )
    .unwrap();
    let registry = MappingRegistry::new();

    let err = config
        .mapping("Account")
        .unwrap()
        .apply::<Account>(&registry, &CodecSet::new())
        .unwrap_err();
    match err {
        EngineError::UnknownCodec(name) => assert_eq!(name, "no-such-codec"),
        other => panic!("expected UnknownCodec, got {other:?}"),
    }
    assert!(!registry.contains::<Account>());
}

#[test]
fn missing_file_is_a_config_error() {
    let err = MappingConfig::load("/definitely/not/here.toml").unwrap_err();
    match err {
        EngineError::Config(msg) => assert!(msg.contains("/definitely/not/here.toml")),
        other => panic!("expected Config, got {other:?}"),
    }
}

#[test]
fn invalid_toml_is_a_config_error() {
    let err = MappingConfig::parse("[[mapping]\nbroken").unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}

#[test]
fn unknown_profile_name_is_none() {
    let config = MappingConfig::parse(PROFILE).unwrap();
    assert!(config.mapping("Order").is_none());
    assert_eq!(config.mappings.len(), 1);
    assert_eq!(config.mappings[0].fields.len(), 2);
}
