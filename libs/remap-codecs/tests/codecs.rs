//! Built-in codec behavior.

use remap_api::codec::Codec;
use remap_api::error::ErrorKind;
use remap_api::value::Value;
use remap_codecs::{builtins, LowercaseString, TimestampIso8601, TimestampUnixMillis};

#[test]
fn iso8601_round_trips_microseconds() {
    let codec = TimestampIso8601;
    let encoded = codec.encode(Value::Timestamp(1_700_000_000_123_456)).unwrap();
    match &encoded {
        Value::String(s) => assert!(s.ends_with('Z')),
        other => panic!("expected string, got {other:?}"),
    }
    assert_eq!(
        codec.decode(encoded).unwrap(),
        Value::Timestamp(1_700_000_000_123_456)
    );
}

#[test]
fn iso8601_rejects_wrong_shapes() {
    let codec = TimestampIso8601;
    assert_eq!(codec.encode(Value::Bool(true)).unwrap_err().kind, ErrorKind::Type);
    assert_eq!(codec.encode(Value::Null).unwrap_err().kind, ErrorKind::Type);
    assert_eq!(codec.decode(Value::Int64(1)).unwrap_err().kind, ErrorKind::Type);
}

#[test]
fn iso8601_decode_reports_parse_failures() {
    let err = TimestampIso8601
        .decode(Value::String("not a date".into()))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);
}

#[test]
fn unix_millis_round_trips_when_aligned() {
    let codec = TimestampUnixMillis;
    let encoded = codec.encode(Value::Timestamp(1_700_000_000_123_000)).unwrap();
    assert_eq!(encoded, Value::Int64(1_700_000_000_123));
    assert_eq!(
        codec.decode(encoded).unwrap(),
        Value::Timestamp(1_700_000_000_123_000)
    );
}

#[test]
fn unix_millis_truncates_toward_negative_infinity() {
    let codec = TimestampUnixMillis;
    assert_eq!(codec.encode(Value::Timestamp(1500)).unwrap(), Value::Int64(1));
    assert_eq!(codec.encode(Value::Timestamp(-1500)).unwrap(), Value::Int64(-2));
}

#[test]
fn unix_millis_decode_rejects_overflow() {
    let err = TimestampUnixMillis
        .decode(Value::Int64(i64::MAX))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Range);
}

#[test]
fn lowercase_transforms_encode_only() {
    let codec = LowercaseString;
    assert_eq!(
        codec.encode(Value::String("MiXeD".into())).unwrap(),
        Value::String("mixed".into())
    );
    assert_eq!(
        codec.decode(Value::String("MiXeD".into())).unwrap(),
        Value::String("MiXeD".into())
    );
}

#[test]
fn builtins_cover_registry_names() {
    let set = builtins();
    assert!(set.get("timestamp-iso8601").is_some());
    assert!(set.get("timestamp-unix-millis").is_some());
    assert!(set.get("string-lowercase").is_some());
    assert!(set.get("nope").is_none());
}
