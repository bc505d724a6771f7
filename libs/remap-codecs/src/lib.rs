//! Built-in codecs.
//!
//! Each codec converts one value shape to another; a rule without a codec
//! already passes values through unchanged, so only genuinely transforming
//! pairs live here.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use remap_api::codec::{Codec, CodecSet};
use remap_api::error::CodecError;
use remap_api::value::Value;

/// `Timestamp` ↔ RFC 3339 string, microsecond precision, UTC.
pub struct TimestampIso8601;

impl Codec for TimestampIso8601 {
    fn encode(&self, value: Value) -> Result<Value, CodecError> {
        match value {
            Value::Timestamp(micros) => {
                let dt = DateTime::<Utc>::from_timestamp_micros(micros).ok_or_else(|| {
                    CodecError::range(format!("timestamp out of range: {micros}"))
                })?;
                Ok(Value::String(dt.to_rfc3339_opts(SecondsFormat::Micros, true)))
            }
            other => Err(CodecError::type_mismatch(format!(
                "expected timestamp, got {other:?}"
            ))),
        }
    }

    fn decode(&self, value: Value) -> Result<Value, CodecError> {
        match value {
            Value::String(s) => {
                let dt = DateTime::parse_from_rfc3339(&s)?;
                Ok(Value::Timestamp(dt.with_timezone(&Utc).timestamp_micros()))
            }
            other => Err(CodecError::type_mismatch(format!(
                "expected string, got {other:?}"
            ))),
        }
    }
}

/// `Timestamp` ↔ `Int64` milliseconds since the Unix epoch.
///
/// Encoding truncates toward negative infinity; sub-millisecond precision is
/// lost.
pub struct TimestampUnixMillis;

impl Codec for TimestampUnixMillis {
    fn encode(&self, value: Value) -> Result<Value, CodecError> {
        match value {
            Value::Timestamp(micros) => Ok(Value::Int64(micros.div_euclid(1000))),
            other => Err(CodecError::type_mismatch(format!(
                "expected timestamp, got {other:?}"
            ))),
        }
    }

    fn decode(&self, value: Value) -> Result<Value, CodecError> {
        match value {
            Value::Int64(millis) => {
                let micros = millis
                    .checked_mul(1000)
                    .ok_or_else(|| CodecError::range(format!("millis out of range: {millis}")))?;
                Ok(Value::Timestamp(micros))
            }
            other => Err(CodecError::type_mismatch(format!(
                "expected int64, got {other:?}"
            ))),
        }
    }
}

/// Lowercases strings on encode; decode passes through.
pub struct LowercaseString;

impl Codec for LowercaseString {
    fn encode(&self, value: Value) -> Result<Value, CodecError> {
        match value {
            Value::String(s) => Ok(Value::String(s.to_lowercase())),
            other => Err(CodecError::type_mismatch(format!(
                "expected string, got {other:?}"
            ))),
        }
    }
}

/// All built-in codecs under their registry names.
pub fn builtins() -> CodecSet {
    let mut set = CodecSet::new();
    set.register("timestamp-iso8601", Arc::new(TimestampIso8601));
    set.register("timestamp-unix-millis", Arc::new(TimestampUnixMillis));
    set.register("string-lowercase", Arc::new(LowercaseString));
    set
}
