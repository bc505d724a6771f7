use crate::value::Value;

/// Name-based field access for convertible record types.
///
/// `Default` supplies the fresh instance `deserialize` populates; fields no
/// rule touches keep their default state.
///
/// Contract:
/// - `get` returns `None` for a field the type does not have.
/// - `set` ignores unknown field names; a value whose shape the field type
///   cannot hold leaves the field unchanged.
///
/// `#[derive(Record)]` generates both methods from a struct's named fields,
/// dispatching through `IntoValue`/`FromValue`. `#[record(skip)]` excludes a
/// field from name-based access.
pub trait Record: Default + 'static {
    fn get(&self, field: &str) -> Option<Value>;

    fn set(&mut self, field: &str, value: Value);
}
