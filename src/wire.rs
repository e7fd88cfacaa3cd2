//! Wire codec seam: JSON object readers/writers and the codec traits
//!
//! The wire format is one JSON object per protocol value. Field names use
//! lowerCamelCase by default; where the protocol's literal spelling cannot be
//! derived that way (`"adapterID"`, `"unixTimestampUTC"`, ...), the wire name
//! is declared explicitly next to the field it belongs to. Decode and encode
//! always consult the same literal, so the mapping cannot drift apart.
//!
//! Parsing rules:
//! - Never index into raw JSON; all access goes through [`ObjectReader`].
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths; all
//!   failures surface as [`DecodeError`].
//! - Unknown object members are ignored (forward compatibility).
//! - Optional fields are encoded by omission, never as `null`.

use serde_json::{Map, Value};

use crate::error::{DecodeError, Result};

/// Decode a schema value from its wire JSON representation.
pub trait FromWire: Sized {
    fn from_wire(value: &Value) -> Result<Self>;
}

/// Encode a schema value into its wire JSON representation.
///
/// Encoding is total: every constructible value has exactly one wire form.
pub trait ToWire {
    fn to_wire(&self) -> Value;
}

/// Wire-token table of a closed enumeration.
///
/// A closed enumeration is fully defined by the protocol schema: decoding an
/// unrecognized token is a protocol error, and each variant has exactly one
/// wire spelling. The token table is declared statically per enumeration;
/// no case-conversion convention is applied at decode time.
pub trait ClosedEnum: Copy + PartialEq + std::fmt::Debug + Sized + 'static {
    /// Diagnostic name used in [`DecodeError::UnknownEnumValue`].
    const TYPE_NAME: &'static str;

    /// All variants in declaration order. Ordering carries no semantics.
    const VARIANTS: &'static [Self];

    /// The literal wire spelling of this variant.
    fn wire_token(self) -> &'static str;

    /// Resolve a wire token to a variant, if it is part of the enumeration.
    fn from_wire_token(token: &str) -> Option<Self>;
}

/// Shared decode path for closed enumerations.
pub(crate) fn decode_closed<T: ClosedEnum>(value: &Value) -> Result<T> {
    let token = value.as_str().ok_or(DecodeError::MalformedValue {
        path: String::new(),
        expected: "string",
    })?;
    T::from_wire_token(token).ok_or_else(|| DecodeError::UnknownEnumValue {
        path: String::new(),
        type_name: T::TYPE_NAME,
        token: token.to_string(),
    })
}

fn malformed(name: &str, expected: &'static str) -> DecodeError {
    DecodeError::MalformedValue {
        path: name.to_string(),
        expected,
    }
}

/// Field-wise reader over a decoded JSON object.
///
/// Members with a `null` value count as absent: the protocol represents
/// optionality by omission, and tolerating `null` on decode keeps the crate
/// compatible with adapters that emit it anyway. A `null` in a *required*
/// slot is malformed, not missing, so the failure points at the actual
/// payload defect.
pub(crate) struct ObjectReader<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> ObjectReader<'a> {
    pub fn new(value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(DecodeError::MalformedValue {
                path: String::new(),
                expected: "object",
            }),
        }
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        match self.fields.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    pub fn required(&self, name: &str) -> Result<&'a Value> {
        match self.fields.get(name) {
            Some(Value::Null) => Err(malformed(name, "non-null value")),
            Some(value) => Ok(value),
            None => Err(DecodeError::MissingRequiredField {
                path: name.to_string(),
            }),
        }
    }

    pub fn required_string(&self, name: &str) -> Result<String> {
        self.required(name)?
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| malformed(name, "string"))
    }

    pub fn required_i64(&self, name: &str) -> Result<i64> {
        self.required(name)?
            .as_i64()
            .ok_or_else(|| malformed(name, "integer"))
    }

    pub fn required_bool(&self, name: &str) -> Result<bool> {
        self.required(name)?
            .as_bool()
            .ok_or_else(|| malformed(name, "boolean"))
    }

    pub fn optional_string(&self, name: &str) -> Result<Option<String>> {
        self.get(name)
            .map(|v| v.as_str().map(str::to_owned).ok_or_else(|| malformed(name, "string")))
            .transpose()
    }

    pub fn optional_i64(&self, name: &str) -> Result<Option<i64>> {
        self.get(name)
            .map(|v| v.as_i64().ok_or_else(|| malformed(name, "integer")))
            .transpose()
    }

    pub fn optional_bool(&self, name: &str) -> Result<Option<bool>> {
        self.get(name)
            .map(|v| v.as_bool().ok_or_else(|| malformed(name, "boolean")))
            .transpose()
    }

    /// Opaque passthrough member: kept as raw JSON, round-trips unchanged.
    pub fn optional_value(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    pub fn required_field<T: FromWire>(&self, name: &str) -> Result<T> {
        T::from_wire(self.required(name)?).map_err(|e| e.at(name))
    }

    pub fn optional_field<T: FromWire>(&self, name: &str) -> Result<Option<T>> {
        self.get(name)
            .map(|v| T::from_wire(v).map_err(|e| e.at(name)))
            .transpose()
    }

    pub fn required_list<T: FromWire>(&self, name: &str) -> Result<Vec<T>> {
        decode_list(self.required(name)?, name)
    }

    pub fn optional_list<T: FromWire>(&self, name: &str) -> Result<Option<Vec<T>>> {
        self.get(name).map(|v| decode_list(v, name)).transpose()
    }
}

fn decode_list<T: FromWire>(value: &Value, name: &str) -> Result<Vec<T>> {
    let items = value.as_array().ok_or_else(|| malformed(name, "array"))?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| T::from_wire(item).map_err(|e| e.at(&format!("{name}[{i}]"))))
        .collect()
}

// Wire scalars, so lists of primitives decode through the same path as
// lists of records (and carry indexed error paths).

impl FromWire for i64 {
    fn from_wire(value: &Value) -> Result<Self> {
        value.as_i64().ok_or(DecodeError::MalformedValue {
            path: String::new(),
            expected: "integer",
        })
    }
}

impl FromWire for String {
    fn from_wire(value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or(DecodeError::MalformedValue {
                path: String::new(),
                expected: "string",
            })
    }
}

/// Field-wise writer producing a wire JSON object.
///
/// Absent optionals are omitted entirely; `null` is never emitted.
pub(crate) struct ObjectWriter {
    fields: Map<String, Value>,
}

impl ObjectWriter {
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    pub fn field<V: Into<Value>>(&mut self, name: &str, value: V) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn optional<V: Into<Value>>(&mut self, name: &str, value: Option<V>) {
        if let Some(value) = value {
            self.field(name, value);
        }
    }

    pub fn encoded<T: ToWire>(&mut self, name: &str, value: &T) {
        self.fields.insert(name.to_string(), value.to_wire());
    }

    pub fn optional_encoded<T: ToWire>(&mut self, name: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.encoded(name, value);
        }
    }

    pub fn list<T: ToWire>(&mut self, name: &str, values: &[T]) {
        let items = values.iter().map(ToWire::to_wire).collect();
        self.fields.insert(name.to_string(), Value::Array(items));
    }

    pub fn optional_list<T: ToWire>(&mut self, name: &str, values: Option<&[T]>) {
        if let Some(values) = values {
            self.list(name, values);
        }
    }

    pub fn finish(self) -> Value {
        Value::Object(self.fields)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_reader_rejects_non_object() {
        let err = ObjectReader::new(&json!("not an object")).err().unwrap();
        assert_eq!(
            err,
            DecodeError::MalformedValue {
                path: String::new(),
                expected: "object",
            }
        );
    }

    #[test]
    fn test_null_member_counts_as_absent() {
        let value = json!({"line": null});
        let obj = ObjectReader::new(&value).unwrap();
        assert_eq!(obj.optional_i64("line").unwrap(), None);
    }

    #[test]
    fn test_null_in_required_slot_is_malformed_not_missing() {
        let value = json!({"exitCode": null});
        let obj = ObjectReader::new(&value).unwrap();
        let err = obj.required_i64("exitCode").err().unwrap();
        assert!(matches!(err, DecodeError::MalformedValue { .. }));
        assert_eq!(err.path(), "exitCode");
    }

    #[test]
    fn test_missing_required_member() {
        let value = json!({});
        let obj = ObjectReader::new(&value).unwrap();
        let err = obj.required_i64("exitCode").err().unwrap();
        assert_eq!(
            err,
            DecodeError::MissingRequiredField {
                path: "exitCode".to_string(),
            }
        );
    }

    #[test]
    fn test_wrong_json_type_is_malformed() {
        let value = json!({"output": 17});
        let obj = ObjectReader::new(&value).unwrap();
        let err = obj.required_string("output").err().unwrap();
        assert_eq!(
            err,
            DecodeError::MalformedValue {
                path: "output".to_string(),
                expected: "string",
            }
        );
    }

    #[test]
    fn test_list_errors_carry_index() {
        let value = json!({"ids": [1, "two", 3]});
        let obj = ObjectReader::new(&value).unwrap();
        let err = obj.required_list::<i64>("ids").err().unwrap();
        assert_eq!(err.path(), "ids[1]");
    }

    #[test]
    fn test_writer_omits_absent_optionals() {
        let mut obj = ObjectWriter::new();
        obj.field("output", "hi".to_string());
        obj.optional("line", None::<i64>);
        let value = obj.finish();
        assert_eq!(value, json!({"output": "hi"}));
    }
}
