//! Shared record types used by multiple requests and events
//!
//! All records are plain data aggregates: public fields, structural
//! equality/hashing derived from every declared field, and a deterministic
//! `Debug` rendering. An absent optional (`None`) is distinct from a
//! present-but-empty value (`Some("")`); the two differ on the wire and
//! therefore compare unequal.

use serde_json::Value;

use crate::enums::{
    ChecksumAlgorithm, ColumnDescriptorType, DataBreakpointAccessType, SourcePresentationHint,
};
use crate::error::Result;
use crate::open_enums::{VariableAttribute, VariableKind};
use crate::wire::{FromWire, ObjectReader, ObjectWriter, ToWire};

// ============================================================
// SOURCE
// ============================================================

/// A source file or generated source known to the adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Source {
    /// Short name for display
    pub name: Option<String>,
    /// Path on disk (absolute or relative)
    pub path: Option<String>,
    /// Reference for sources without a path; retrieved via the `source` request
    pub source_reference: Option<i64>,
    /// Rendering hint for the client
    pub presentation_hint: Option<SourcePresentationHint>,
    /// Origin of the source (e.g. "internal module")
    pub origin: Option<String>,
    /// Checksums of the file, one per algorithm
    pub checksums: Option<Vec<Checksum>>,
}

impl Source {
    /// Source backed by a file on disk.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }
}

impl FromWire for Source {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            name: obj.optional_string("name")?,
            path: obj.optional_string("path")?,
            source_reference: obj.optional_i64("sourceReference")?,
            presentation_hint: obj.optional_field("presentationHint")?,
            origin: obj.optional_string("origin")?,
            checksums: obj.optional_list("checksums")?,
        })
    }
}

impl ToWire for Source {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.optional("name", self.name.clone());
        obj.optional("path", self.path.clone());
        obj.optional("sourceReference", self.source_reference);
        obj.optional_encoded("presentationHint", self.presentation_hint.as_ref());
        obj.optional("origin", self.origin.clone());
        obj.optional_list("checksums", self.checksums.as_deref());
        obj.finish()
    }
}

// ============================================================
// CHECKSUM
// ============================================================

/// Checksum of a file, tagged with its algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Checksum {
    pub algorithm: ChecksumAlgorithm,
    /// Checksum value, hex-encoded for the hash algorithms
    pub checksum: String,
}

impl FromWire for Checksum {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            algorithm: obj.required_field("algorithm")?,
            checksum: obj.required_string("checksum")?,
        })
    }
}

impl ToWire for Checksum {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.encoded("algorithm", &self.algorithm);
        obj.field("checksum", self.checksum.clone());
        obj.finish()
    }
}

// ============================================================
// COLUMN DESCRIPTOR
// ============================================================

/// Describes one column of the modules view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnDescriptor {
    /// Attribute name of the module property rendered in this column
    pub attribute_name: String,
    /// Column header shown to the user
    pub label: String,
    /// Format string for the value
    pub format: Option<String>,
    /// Datatype of the column (field name is `type` on the wire)
    pub column_type: Option<ColumnDescriptorType>,
    /// Column width in characters
    pub width: Option<i64>,
}

impl FromWire for ColumnDescriptor {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            attribute_name: obj.required_string("attributeName")?,
            label: obj.required_string("label")?,
            format: obj.optional_string("format")?,
            column_type: obj.optional_field("type")?,
            width: obj.optional_i64("width")?,
        })
    }
}

impl ToWire for ColumnDescriptor {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.field("attributeName", self.attribute_name.clone());
        obj.field("label", self.label.clone());
        obj.optional("format", self.format.clone());
        obj.optional_encoded("type", self.column_type.as_ref());
        obj.optional("width", self.width);
        obj.finish()
    }
}

// ============================================================
// BREAKPOINT
// ============================================================

/// Breakpoint state reported by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Breakpoint {
    /// Adapter-assigned breakpoint id
    pub id: Option<i64>,
    /// Whether the breakpoint could be set
    pub verified: bool,
    /// Status message, e.g. why verification failed
    pub message: Option<String>,
    /// Actual source (may differ from the requested one)
    pub source: Option<Source>,
    /// Actual start line
    pub line: Option<i64>,
    /// Actual start column
    pub column: Option<i64>,
    /// Actual end line
    pub end_line: Option<i64>,
    /// Actual end column
    pub end_column: Option<i64>,
}

impl Breakpoint {
    pub fn verified(id: i64) -> Self {
        Self {
            id: Some(id),
            verified: true,
            message: None,
            source: None,
            line: None,
            column: None,
            end_line: None,
            end_column: None,
        }
    }
}

impl FromWire for Breakpoint {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            id: obj.optional_i64("id")?,
            verified: obj.required_bool("verified")?,
            message: obj.optional_string("message")?,
            source: obj.optional_field("source")?,
            line: obj.optional_i64("line")?,
            column: obj.optional_i64("column")?,
            end_line: obj.optional_i64("endLine")?,
            end_column: obj.optional_i64("endColumn")?,
        })
    }
}

impl ToWire for Breakpoint {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.optional("id", self.id);
        obj.field("verified", self.verified);
        obj.optional("message", self.message.clone());
        obj.optional_encoded("source", self.source.as_ref());
        obj.optional("line", self.line);
        obj.optional("column", self.column);
        obj.optional("endLine", self.end_line);
        obj.optional("endColumn", self.end_column);
        obj.finish()
    }
}

// ============================================================
// SOURCE BREAKPOINT
// ============================================================

/// Breakpoint requested by the client for a source location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceBreakpoint {
    /// Line number (1-based by default)
    pub line: i64,
    pub column: Option<i64>,
    /// Condition expression; only break when it evaluates true
    pub condition: Option<String>,
    /// Hit condition; break after the given number of hits
    pub hit_condition: Option<String>,
    /// Log message; emit instead of breaking (logpoint)
    pub log_message: Option<String>,
}

impl SourceBreakpoint {
    /// Plain breakpoint at a line.
    pub fn at_line(line: i64) -> Self {
        Self {
            line,
            column: None,
            condition: None,
            hit_condition: None,
            log_message: None,
        }
    }

    /// Non-breaking logpoint at a line.
    pub fn logpoint(line: i64, message: impl Into<String>) -> Self {
        Self {
            log_message: Some(message.into()),
            ..Self::at_line(line)
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

impl FromWire for SourceBreakpoint {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            line: obj.required_i64("line")?,
            column: obj.optional_i64("column")?,
            condition: obj.optional_string("condition")?,
            hit_condition: obj.optional_string("hitCondition")?,
            log_message: obj.optional_string("logMessage")?,
        })
    }
}

impl ToWire for SourceBreakpoint {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.field("line", self.line);
        obj.optional("column", self.column);
        obj.optional("condition", self.condition.clone());
        obj.optional("hitCondition", self.hit_condition.clone());
        obj.optional("logMessage", self.log_message.clone());
        obj.finish()
    }
}

// ============================================================
// DATA BREAKPOINT
// ============================================================

/// Breakpoint on a piece of data (watchpoint).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataBreakpoint {
    /// Id obtained from a `dataBreakpointInfo` request
    pub data_id: String,
    /// Access kind that triggers the break
    pub access_type: Option<DataBreakpointAccessType>,
    pub condition: Option<String>,
    pub hit_condition: Option<String>,
}

impl DataBreakpoint {
    pub fn new(data_id: impl Into<String>) -> Self {
        Self {
            data_id: data_id.into(),
            access_type: None,
            condition: None,
            hit_condition: None,
        }
    }
}

impl FromWire for DataBreakpoint {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            data_id: obj.required_string("dataId")?,
            access_type: obj.optional_field("accessType")?,
            condition: obj.optional_string("condition")?,
            hit_condition: obj.optional_string("hitCondition")?,
        })
    }
}

impl ToWire for DataBreakpoint {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.field("dataId", self.data_id.clone());
        obj.optional_encoded("accessType", self.access_type.as_ref());
        obj.optional("condition", self.condition.clone());
        obj.optional("hitCondition", self.hit_condition.clone());
        obj.finish()
    }
}

// ============================================================
// VARIABLE PRESENTATION HINT
// ============================================================

/// How the client should render a variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VariablePresentationHint {
    /// Kind of the variable (open enumeration)
    pub kind: Option<VariableKind>,
    /// Attribute set (open enumeration tokens)
    pub attributes: Option<Vec<VariableAttribute>>,
    /// Visibility, e.g. "public" or "private"
    pub visibility: Option<String>,
    /// Value is expensive; client should fetch it lazily
    pub lazy: Option<bool>,
}

impl FromWire for VariablePresentationHint {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            kind: obj.optional_field("kind")?,
            attributes: obj.optional_list("attributes")?,
            visibility: obj.optional_string("visibility")?,
            lazy: obj.optional_bool("lazy")?,
        })
    }
}

impl ToWire for VariablePresentationHint {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.optional_encoded("kind", self.kind.as_ref());
        obj.optional_list("attributes", self.attributes.as_deref());
        obj.optional("visibility", self.visibility.clone());
        obj.optional("lazy", self.lazy);
        obj.finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn test_source_round_trip() {
        let source = Source {
            name: Some("app.py".to_string()),
            path: Some("/srv/app.py".to_string()),
            source_reference: None,
            presentation_hint: Some(SourcePresentationHint::Emphasize),
            origin: None,
            checksums: Some(vec![Checksum {
                algorithm: ChecksumAlgorithm::Sha256,
                checksum: "ab12".to_string(),
            }]),
        };

        let wire = source.to_wire();
        assert_eq!(wire["presentationHint"], json!("emphasize"));
        assert_eq!(wire["checksums"][0]["algorithm"], json!("SHA256"));
        assert_eq!(Source::from_wire(&wire).unwrap(), source);
    }

    #[test]
    fn test_absent_optional_differs_from_present_empty() {
        let absent = Source::from_path("/srv/app.py");
        let empty = Source {
            name: Some(String::new()),
            ..Source::from_path("/srv/app.py")
        };
        assert_ne!(absent, empty);
        // and the difference survives the wire
        assert_ne!(absent.to_wire(), empty.to_wire());
        assert_eq!(Source::from_wire(&empty.to_wire()).unwrap(), empty);
    }

    #[test]
    fn test_checksum_algorithm_error_path() {
        let wire = json!({"algorithm": "CRC32", "checksum": "ab"});
        let err = Checksum::from_wire(&wire).err().unwrap();
        assert_eq!(
            err,
            DecodeError::UnknownEnumValue {
                path: "algorithm".to_string(),
                type_name: "ChecksumAlgorithm",
                token: "CRC32".to_string(),
            }
        );
    }

    #[test]
    fn test_column_descriptor_type_wire_name() {
        // the datatype field is spelled `type` on the wire
        let wire = json!({
            "attributeName": "vsLoadTime",
            "label": "Load time",
            "type": "unixTimestampUTC"
        });
        let column = ColumnDescriptor::from_wire(&wire).unwrap();
        assert_eq!(column.column_type, Some(ColumnDescriptorType::UnixTimestampUtc));
        assert_eq!(column.to_wire()["type"], json!("unixTimestampUTC"));
    }

    #[test]
    fn test_breakpoint_requires_verified() {
        let err = Breakpoint::from_wire(&json!({"id": 7})).err().unwrap();
        assert_eq!(
            err,
            DecodeError::MissingRequiredField {
                path: "verified".to_string(),
            }
        );
    }

    #[test]
    fn test_source_breakpoint_builders() {
        let bp = SourceBreakpoint::at_line(10).with_condition("x > 5");
        assert_eq!(bp.condition.as_deref(), Some("x > 5"));
        assert!(bp.log_message.is_none());

        let lp = SourceBreakpoint::logpoint(5, "value={x}");
        let wire = lp.to_wire();
        assert_eq!(wire, json!({"line": 5, "logMessage": "value={x}"}));
    }

    #[test]
    fn test_presentation_hint_attribute_passthrough() {
        let wire = json!({
            "kind": "property",
            "attributes": ["hasObjectId", "vendorSpecificFlag"]
        });
        let hint = VariablePresentationHint::from_wire(&wire).unwrap();
        let attrs = hint.attributes.as_deref().unwrap();
        assert_eq!(attrs[0], VariableAttribute::HAS_OBJECT_ID);
        assert!(!attrs[1].is_documented());
        assert_eq!(hint.to_wire(), wire);
    }
}
